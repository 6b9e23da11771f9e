//! # Core Type Definitions
//!
//! This module contains all core types for the coding walkthrough:
//! - Typed identifiers (`StageId`, `CodeName`, `CategoryName`, `ExampleKey`)
//! - Stage descriptors (`Stage`)
//! - Worked example records (`WorkedExample`, `DescriptiveCode`, `Category`, `Theme`)
//! - Error types (`CodingError`)
//!
//! ## Typed References
//!
//! Categories refer to codes and themes refer to categories by name. Those names
//! are distinct newtypes so a category name can never be passed where a code name
//! is expected. Whether a reference actually resolves is checked once, when a
//! [`Catalog`](crate::Catalog) is built.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// STAGE IDENTIFIER
// =============================================================================

/// Number of stages in the raw data → theory continuum.
pub const STAGE_COUNT: u8 = 5;

/// Identifier of one stage, always within `1..=STAGE_COUNT`.
///
/// Ordering is display order. The inner value is private so an out-of-range
/// id cannot be constructed; use [`StageId::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct StageId(u8);

impl StageId {
    /// Create a stage id, rejecting values outside `1..=STAGE_COUNT`.
    pub fn new(id: u8) -> Result<Self, CodingError> {
        if (1..=STAGE_COUNT).contains(&id) {
            Ok(Self(id))
        } else {
            Err(CodingError::InvalidStage(id))
        }
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Zero-based position of this stage in display order.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0 - 1
    }

    /// All valid stage ids in display order.
    pub fn all() -> impl Iterator<Item = StageId> {
        (1..=STAGE_COUNT).map(StageId)
    }
}

impl TryFrom<u8> for StageId {
    type Error = CodingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StageId> for u8 {
    fn from(id: StageId) -> Self {
        id.0
    }
}

impl std::fmt::Display for StageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// NAME NEWTYPES
// =============================================================================

macro_rules! name_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new name from a string.
            #[must_use]
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Get the name as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }
    };
}

name_type!(
    /// Label of a first-level (descriptive) code.
    CodeName
);

name_type!(
    /// Name of a category grouping several codes.
    CategoryName
);

name_type!(
    /// Key of a worked example in the example catalog.
    ExampleKey
);

// =============================================================================
// STAGE
// =============================================================================

/// One stage of the continuum, from concrete data to transferable theory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub id: StageId,
    /// Upper-case display name, e.g. `"CATEGORIES"`.
    pub name: String,
    /// Abstraction level, e.g. `"Patterns & Groupings"`.
    pub level: String,
    pub description: String,
    /// Key questions, in display order.
    pub questions: Vec<String>,
    /// What the analyst actually does at this stage.
    pub work: String,
    /// The common pitfall at this stage.
    pub pitfall: String,
}

// =============================================================================
// WORKED EXAMPLE
// =============================================================================

/// A short label paired with the excerpt it names.
///
/// `segment` is authored text. It usually quotes the raw excerpt, but nothing
/// locates or highlights it inside [`WorkedExample::raw`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptiveCode {
    pub code: CodeName,
    pub segment: String,
}

/// Codes clustered under one category name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: CategoryName,
    pub codes: Vec<CodeName>,
}

/// An interpretive claim built from several categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub connects: Vec<CategoryName>,
    pub insight: String,
}

/// One narrative carried through all five stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkedExample {
    /// The quoted source excerpt.
    pub raw: String,
    pub descriptive_codes: Vec<DescriptiveCode>,
    /// Categories in authoring order.
    pub categories: Vec<Category>,
    pub themes: Vec<Theme>,
    pub theory: String,
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building, loading or driving a walkthrough.
///
/// - Catalog authoring mistakes surface here at load time, never at render time
/// - The core never panics; every failure is a `Result`
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodingError {
    /// A stage id outside `1..=STAGE_COUNT`.
    #[error("Invalid stage id: {0} (expected 1..=5)")]
    InvalidStage(u8),

    /// Stage ids are not contiguous from 1 in catalog order.
    #[error("Stage ids must be contiguous: expected {expected}, found {found}")]
    StageIdGap { expected: u8, found: u8 },

    /// The stage catalog does not hold exactly `STAGE_COUNT` stages.
    #[error("Expected {expected} stages, found {found}")]
    StageCount { expected: usize, found: usize },

    /// A display field that must carry text is empty.
    #[error("Empty field '{field}' in {context}")]
    EmptyField { context: String, field: &'static str },

    /// Two descriptive codes share a name within one example.
    #[error("Duplicate code '{code}' in example '{example}'")]
    DuplicateCode { example: ExampleKey, code: CodeName },

    /// Two categories share a name within one example.
    #[error("Duplicate category '{category}' in example '{example}'")]
    DuplicateCategory {
        example: ExampleKey,
        category: CategoryName,
    },

    /// A category lists a code that no descriptive code defines.
    #[error("Category '{category}' references unknown code '{code}'")]
    UnknownCode { category: CategoryName, code: CodeName },

    /// A theme connects a category that the example does not define.
    #[error("Theme '{theme}' references unknown category '{category}'")]
    UnknownCategory {
        theme: String,
        category: CategoryName,
    },

    /// The requested example key has no catalog entry.
    #[error("Unknown example: {0}")]
    UnknownExample(ExampleKey),

    /// The example catalog holds no examples.
    #[error("Example catalog is empty")]
    EmptyCatalog,

    /// A catalog document could not be parsed or written.
    #[error("Format error: {0}")]
    Format(String),

    /// An I/O error occurred (app layer only).
    #[error("I/O error: {0}")]
    Io(String),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_id_accepts_one_through_five() {
        for n in 1..=STAGE_COUNT {
            assert_eq!(StageId::new(n).map(StageId::value), Ok(n));
        }
    }

    #[test]
    fn stage_id_rejects_out_of_range() {
        assert_eq!(StageId::new(0), Err(CodingError::InvalidStage(0)));
        assert_eq!(StageId::new(6), Err(CodingError::InvalidStage(6)));
    }

    #[test]
    fn stage_id_index_is_zero_based() {
        let first = StageId::new(1).expect("valid");
        let last = StageId::new(5).expect("valid");
        assert_eq!(first.index(), 0);
        assert_eq!(last.index(), 4);
    }

    #[test]
    fn stage_ids_iterate_in_order() {
        let ids: Vec<u8> = StageId::all().map(StageId::value).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn names_compare_by_content() {
        assert_eq!(CodeName::new("Reciprocal exchange"), CodeName::from("Reciprocal exchange"));
        assert_ne!(CategoryName::new("A"), CategoryName::new("a"));
    }

    #[test]
    fn error_messages_name_the_reference() {
        let err = CodingError::UnknownCode {
            category: CategoryName::new("Competing Logics"),
            code: CodeName::new("Missing"),
        };
        assert_eq!(
            err.to_string(),
            "Category 'Competing Logics' references unknown code 'Missing'"
        );
    }
}
