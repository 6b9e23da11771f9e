//! # View Projection
//!
//! Pure projection from `(Catalog, ViewState)` to a [`View`] tree.
//!
//! The view is plain data: presenters (terminal text, JSON) draw it without
//! consulting the catalog again. Rendering the same state twice produces
//! equal views.
//!
//! ## Layout
//!
//! ```text
//! header        title, subtitle
//! legend        concrete ─────── abstract
//! stage cards   1..5, at most one with a detail panel
//! walkthrough   raw → codes → categories → themes → theory
//! principles    four cards
//! ```

use crate::accent::{Accent, Tone};
use crate::catalog::Catalog;
use crate::icons::Icon;
use crate::panels;
use crate::state::ViewState;
use crate::types::{CategoryName, CodeName, CodingError, ExampleKey, Stage, StageId, WorkedExample};
use serde::Serialize;

// =============================================================================
// VIEW TREE
// =============================================================================

/// The whole rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub legend: Legend,
    /// Stage cards in id order.
    pub stages: Vec<StageCard>,
    pub walkthrough: Walkthrough,
    pub principles_heading: &'static str,
    pub principles: Vec<PrincipleCard>,
}

impl View {
    /// Ids of stages whose detail panel is visible.
    pub fn expanded_stages(&self) -> impl Iterator<Item = StageId> + '_ {
        self.stages
            .iter()
            .filter(|card| card.detail.is_some())
            .map(|card| card.id)
    }
}

/// The concrete ↔ abstract continuum legend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Legend {
    pub concrete_label: &'static str,
    pub abstract_label: &'static str,
    /// Marker colour at the concrete end.
    pub concrete_tone: Tone,
    /// Marker colour at the abstract end.
    pub abstract_tone: Tone,
}

/// Header of one stage, plus its detail when expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageCard {
    pub id: StageId,
    pub name: String,
    pub level: String,
    pub accent: Accent,
    /// `ChevronDown` when expanded, `ChevronRight` otherwise.
    pub icon: Icon,
    pub detail: Option<StageDetail>,
}

/// A labelled block with an icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Labelled<T> {
    pub icon: Icon,
    pub label: &'static str,
    pub content: T,
}

/// The four detail sections of an expanded stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageDetail {
    pub description: Labelled<String>,
    pub questions: Labelled<Vec<String>>,
    pub work: Labelled<String>,
    pub pitfall: Labelled<String>,
}

/// One section of the worked example walkthrough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section<T> {
    pub heading: &'static str,
    pub tone: Tone,
    pub body: T,
    pub notice: Option<&'static str>,
}

/// A code with the excerpt it labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeRow {
    pub code: CodeName,
    pub segment: String,
}

/// A category and the names of its member codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
    pub name: CategoryName,
    pub codes: Vec<CodeName>,
}

/// A theme, the categories it connects and its insight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeCard {
    pub name: String,
    pub connects: Vec<CategoryName>,
    /// `connects` joined for display, e.g. `"A + B"`.
    pub connects_label: String,
    pub insight: String,
}

/// The selected example carried through all five stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Walkthrough {
    pub icon: Icon,
    pub heading: &'static str,
    pub example: ExampleKey,
    pub raw: Section<String>,
    pub codes: Section<Vec<CodeRow>>,
    pub categories: Section<Vec<CategoryGroup>>,
    pub themes: Section<Vec<ThemeCard>>,
    pub theory: Section<String>,
}

/// One principle card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrincipleCard {
    pub title: &'static str,
    pub body: &'static str,
}

// =============================================================================
// RENDER
// =============================================================================

/// Project a state onto the catalog.
///
/// Fails only with [`CodingError::UnknownExample`] when the state names an
/// example the catalog does not hold.
pub fn render(catalog: &Catalog, state: &ViewState) -> Result<View, CodingError> {
    let example = catalog.examples.get(&state.example)?;

    Ok(View {
        title: panels::TITLE,
        subtitle: panels::SUBTITLE,
        legend: Legend {
            concrete_label: panels::CONCRETE_LABEL,
            abstract_label: panels::ABSTRACT_LABEL,
            concrete_tone: Tone::Blue,
            abstract_tone: Tone::Purple,
        },
        stages: catalog
            .stages
            .iter()
            .map(|stage| stage_card(stage, state.is_expanded(stage.id)))
            .collect(),
        walkthrough: walkthrough(&state.example, example),
        principles_heading: panels::PRINCIPLES_HEADING,
        principles: panels::PRINCIPLES
            .iter()
            .map(|p| PrincipleCard {
                title: p.title,
                body: p.body,
            })
            .collect(),
    })
}

fn stage_card(stage: &Stage, expanded: bool) -> StageCard {
    StageCard {
        id: stage.id,
        name: stage.name.clone(),
        level: stage.level.clone(),
        accent: Accent::for_index(stage.id.index()),
        icon: if expanded {
            Icon::ChevronDown
        } else {
            Icon::ChevronRight
        },
        detail: expanded.then(|| StageDetail {
            description: Labelled {
                icon: Icon::Target,
                label: panels::WHAT_IT_IS,
                content: stage.description.clone(),
            },
            questions: Labelled {
                icon: Icon::Search,
                label: panels::KEY_QUESTIONS,
                content: stage.questions.clone(),
            },
            work: Labelled {
                icon: Icon::Layers,
                label: panels::THE_WORK,
                content: stage.work.clone(),
            },
            pitfall: Labelled {
                icon: Icon::Warning,
                label: panels::COMMON_PITFALL,
                content: stage.pitfall.clone(),
            },
        }),
    }
}

fn walkthrough(key: &ExampleKey, example: &WorkedExample) -> Walkthrough {
    let [raw_heading, codes_heading, categories_heading, themes_heading, theory_heading] =
        panels::SECTION_HEADINGS;
    let [raw_tone, codes_tone, categories_tone, themes_tone, theory_tone] = Tone::ALL;

    Walkthrough {
        icon: Icon::Lightbulb,
        heading: panels::WALKTHROUGH_HEADING,
        example: key.clone(),
        raw: Section {
            heading: raw_heading,
            tone: raw_tone,
            body: example.raw.clone(),
            notice: None,
        },
        codes: Section {
            heading: codes_heading,
            tone: codes_tone,
            body: example
                .descriptive_codes
                .iter()
                .map(|c| CodeRow {
                    code: c.code.clone(),
                    segment: c.segment.clone(),
                })
                .collect(),
            notice: Some(panels::CODES_NOTICE),
        },
        categories: Section {
            heading: categories_heading,
            tone: categories_tone,
            body: example
                .categories
                .iter()
                .map(|c| CategoryGroup {
                    name: c.name.clone(),
                    codes: c.codes.clone(),
                })
                .collect(),
            notice: Some(panels::CATEGORIES_NOTICE),
        },
        themes: Section {
            heading: themes_heading,
            tone: themes_tone,
            body: example
                .themes
                .iter()
                .map(|t| ThemeCard {
                    name: t.name.clone(),
                    connects: t.connects.clone(),
                    connects_label: t
                        .connects
                        .iter()
                        .map(CategoryName::as_str)
                        .collect::<Vec<_>>()
                        .join(panels::CONNECTS_SEPARATOR),
                    insight: t.insight.clone(),
                })
                .collect(),
            notice: Some(panels::THEMES_NOTICE),
        },
        theory: Section {
            heading: theory_heading,
            tone: theory_tone,
            body: example.theory.clone(),
            notice: Some(panels::THEORY_NOTICE),
        },
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::builtin().expect("builtin")
    }

    #[test]
    fn fresh_view_has_no_detail() {
        let catalog = catalog();
        let view = render(&catalog, &ViewState::initial(&catalog)).expect("render");
        assert_eq!(view.stages.len(), 5);
        assert_eq!(view.expanded_stages().count(), 0);
        assert!(view.stages.iter().all(|c| c.icon == Icon::ChevronRight));
    }

    #[test]
    fn expanded_card_uses_down_chevron() {
        let catalog = catalog();
        let mut state = ViewState::initial(&catalog);
        state.expanded = Some(StageId::new(2).expect("valid"));
        let view = render(&catalog, &state).expect("render");

        assert_eq!(view.stages[1].icon, Icon::ChevronDown);
        assert_eq!(view.stages[0].icon, Icon::ChevronRight);
    }

    #[test]
    fn stage_accents_follow_index() {
        let catalog = catalog();
        let view = render(&catalog, &ViewState::initial(&catalog)).expect("render");
        assert_eq!(view.stages[0].accent.css(), "hsl(220, 70%, 60%)");
        assert_eq!(view.stages[4].accent.css(), "hsl(300, 70%, 40%)");
    }

    #[test]
    fn connects_label_joins_with_plus() {
        let catalog = catalog();
        let view = render(&catalog, &ViewState::initial(&catalog)).expect("render");
        assert_eq!(
            view.walkthrough.themes.body[0].connects_label,
            "Identity Transformation + Boundary Disruption"
        );
    }

    #[test]
    fn render_unknown_example_fails() {
        let catalog = catalog();
        let state = ViewState {
            expanded: None,
            example: ExampleKey::new("missing"),
        };
        assert_eq!(
            render(&catalog, &state),
            Err(CodingError::UnknownExample(ExampleKey::new("missing")))
        );
    }

    #[test]
    fn raw_section_has_no_notice() {
        let catalog = catalog();
        let view = render(&catalog, &ViewState::initial(&catalog)).expect("render");
        assert_eq!(view.walkthrough.raw.notice, None);
        assert_eq!(view.walkthrough.theory.heading, "5. THEORETICAL CONTRIBUTION");
    }
}
