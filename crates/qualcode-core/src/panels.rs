//! # Fixed Panel Text
//!
//! Headings, legend, notices and principles. These never vary with the
//! catalog or the view state.

/// Page title.
pub const TITLE: &str = "The Architecture of Qualitative Coding";

/// Page subtitle.
pub const SUBTITLE: &str =
    "Understanding the journey from data to theory through systematic abstraction";

/// Left end of the continuum legend.
pub const CONCRETE_LABEL: &str = "CONCRETE / PARTICULAR / REAL";

/// Right end of the continuum legend.
pub const ABSTRACT_LABEL: &str = "ABSTRACT / GENERAL / THEORETICAL";

// Labels of the four stage detail sections.
pub const WHAT_IT_IS: &str = "What It Is";
pub const KEY_QUESTIONS: &str = "Key Questions";
pub const THE_WORK: &str = "The Work";
pub const COMMON_PITFALL: &str = "Common Pitfall";

/// Heading of the worked example panel.
pub const WALKTHROUGH_HEADING: &str = "Working Example: Watch the Transformation";

/// Walkthrough section headings, in stage order.
pub const SECTION_HEADINGS: [&str; 5] = [
    "1. RAW DATA",
    "2. FIRST-LEVEL CODES",
    "3. CATEGORIES",
    "4. THEMES",
    "5. THEORETICAL CONTRIBUTION",
];

// Notes printed under the codes, categories, themes and theory sections.
pub const CODES_NOTICE: &str = "Notice: We've broken the whole into parts and named each part";
pub const CATEGORIES_NOTICE: &str = "Notice: Related codes cluster together; patterns emerge";
pub const THEMES_NOTICE: &str =
    "Notice: We're now making claims about meaning, not just describing content";
pub const THEORY_NOTICE: &str =
    "Notice: We've moved beyond this one case to something generalizable";

/// Separator between the category names a theme connects.
pub const CONNECTS_SEPARATOR: &str = " + ";

/// Heading of the principles panel.
pub const PRINCIPLES_HEADING: &str = "Essential Principles";

/// One "essential principle" card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principle {
    pub title: &'static str,
    pub body: &'static str,
}

/// The four principle cards, in display order.
pub const PRINCIPLES: [Principle; 4] = [
    Principle {
        title: "1. Analytic Movement",
        body: "You move UP (abstracting) and DOWN (checking against data) constantly. \
               It's not a one-way journey.",
    },
    Principle {
        title: "2. Data \u{2192} Interpretation",
        body: "Early stages stay close to data. Later stages require bold interpretation. \
               Both are necessary.",
    },
    Principle {
        title: "3. Multiple Cycles",
        body: "You'll code the same data multiple times, each time seeing something new. \
               This is normal and productive.",
    },
    Principle {
        title: "4. Deliberate Reduction",
        body: "From hundreds of data points to dozens of codes to a few categories to core \
               themes. You're condensing meaning.",
    },
];
