//! Built-in walkthrough content.

use crate::types::{
    Category, CategoryName, CodeName, CodingError, DescriptiveCode, ExampleKey, Stage, StageId,
    Theme, WorkedExample,
};
use std::collections::BTreeMap;

struct StageText {
    id: u8,
    name: &'static str,
    level: &'static str,
    description: &'static str,
    questions: [&'static str; 3],
    work: &'static str,
    pitfall: &'static str,
}

const STAGES: [StageText; 5] = [
    StageText {
        id: 1,
        name: "RAW DATA",
        level: "Concrete Reality",
        description: "The participant's actual words in context",
        questions: [
            "What did they say?",
            "What happened?",
            "What's the literal content?",
        ],
        work: "Reading deeply, listening carefully, staying open",
        pitfall: "Jumping to interpretation too quickly",
    },
    StageText {
        id: 2,
        name: "FIRST-LEVEL CODES",
        level: "Descriptive Labels",
        description: "Names for what's present in the data",
        questions: [
            "What's happening here?",
            "What topics appear?",
            "What can I name?",
        ],
        work: "Labeling, segmenting, identifying discrete elements",
        pitfall: "Being too literal or too abstract; inconsistent labels",
    },
    StageText {
        id: 3,
        name: "CATEGORIES",
        level: "Patterns & Groupings",
        description: "Organizing codes by similarity and relationship",
        questions: [
            "What goes with what?",
            "Why do these cluster?",
            "What's the connection?",
        ],
        work: "Comparing, contrasting, finding relationships, building hierarchy",
        pitfall: "Forcing patterns; overlooking contradictions",
    },
    StageText {
        id: 4,
        name: "THEMES",
        level: "Interpretive Concepts",
        description: "The meaning that emerges from patterns",
        questions: [
            "So what?",
            "What does this tell us?",
            "What's the story?",
        ],
        work: "Synthesizing, interpreting, making claims, seeing beyond data",
        pitfall: "Staying descriptive; not making an argument",
    },
    StageText {
        id: 5,
        name: "THEORY",
        level: "Transferable Insights",
        description: "Generalizable understanding applicable beyond this case",
        questions: [
            "What can we learn?",
            "How does this connect to bigger ideas?",
            "What can we now explain?",
        ],
        work: "Abstracting, connecting to literature, building explanations",
        pitfall: "Losing connection to data; overgeneralizing",
    },
];

pub(super) fn stages() -> Result<Vec<Stage>, CodingError> {
    STAGES
        .iter()
        .map(|s| {
            Ok(Stage {
                id: StageId::new(s.id)?,
                name: s.name.to_string(),
                level: s.level.to_string(),
                description: s.description.to_string(),
                questions: s.questions.iter().map(|q| (*q).to_string()).collect(),
                work: s.work.to_string(),
                pitfall: s.pitfall.to_string(),
            })
        })
        .collect()
}

pub(super) fn examples() -> BTreeMap<ExampleKey, WorkedExample> {
    let mut examples = BTreeMap::new();
    examples.insert(ExampleKey::new(super::DEFAULT_EXAMPLE), community());
    examples
}

fn code(code: &str, segment: &str) -> DescriptiveCode {
    DescriptiveCode {
        code: CodeName::new(code),
        segment: segment.to_string(),
    }
}

fn category(name: &str, codes: &[&str]) -> Category {
    Category {
        name: CategoryName::new(name),
        codes: codes.iter().copied().map(CodeName::new).collect(),
    }
}

fn theme(name: &str, connects: &[&str], insight: &str) -> Theme {
    Theme {
        name: name.to_string(),
        connects: connects.iter().copied().map(CategoryName::new).collect(),
        insight: insight.to_string(),
    }
}

fn community() -> WorkedExample {
    WorkedExample {
        raw: "I've been volunteering at the food bank for three years. At first, I just wanted \
              to help. But now I realize it's become my community. These aren't 'clients' to \
              me anymore\u{2014}they're neighbors. Last week, Maria taught me how to make \
              tamales. We laugh together. The system sees transactions; I see relationships."
            .to_string(),
        descriptive_codes: vec![
            code("Volunteer motivation", "wanted to help"),
            code("Relationship evolution", "At first...But now"),
            code("Reframing others", "aren't 'clients'...they're neighbors"),
            code("Reciprocal exchange", "Maria taught me"),
            code("Emotional connection", "We laugh together"),
            code("Institutional vs lived reality", "system sees...I see"),
        ],
        categories: vec![
            category(
                "Identity Transformation",
                &[
                    "Volunteer motivation",
                    "Relationship evolution",
                    "Emotional connection",
                ],
            ),
            category(
                "Boundary Disruption",
                &["Reframing others", "Reciprocal exchange"],
            ),
            category("Competing Logics", &["Institutional vs lived reality"]),
        ],
        themes: vec![
            theme(
                "From Transaction to Kinship: How Sustained Proximity Collapses Helper-Helped Boundaries",
                &["Identity Transformation", "Boundary Disruption"],
                "Service relationships transform into mutual recognition through repeated interaction",
            ),
            theme(
                "The Accountability Paradox: What Gets Counted vs. What Counts",
                &["Competing Logics", "Boundary Disruption"],
                "Institutional metrics obscure the relational mechanisms that create impact",
            ),
        ],
        theory: "Contributes to theories of care work and professionalization: challenges the \
                 service provider/recipient binary; demonstrates how alternative economies of \
                 exchange emerge within formal systems"
            .to_string(),
    }
}
