//! # Catalog Module
//!
//! Immutable stage and example catalogs.
//!
//! A [`Catalog`] is built once and never mutated. Construction runs a single
//! validation pass so that every name-based reference is known to resolve:
//! - stage ids are contiguous `1..=STAGE_COUNT` in catalog order
//! - every category member names a descriptive code of the same example
//! - every theme connects categories of the same example
//!
//! Gaps that are not errors (a code no category uses, a category no theme
//! connects) are reported by [`Catalog::coverage`].

mod builtin;

use crate::types::{
    CategoryName, CodeName, CodingError, ExampleKey, STAGE_COUNT, Stage, StageId, WorkedExample,
};
use std::collections::{BTreeMap, BTreeSet};

/// Key of the example shown on a fresh load.
pub const DEFAULT_EXAMPLE: &str = "community";

// =============================================================================
// STAGE CATALOG
// =============================================================================

/// The fixed, ordered sequence of stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageCatalog {
    stages: Vec<Stage>,
}

impl StageCatalog {
    /// Build a stage catalog, checking count, id order and non-empty text.
    pub fn new(stages: Vec<Stage>) -> Result<Self, CodingError> {
        if stages.len() != usize::from(STAGE_COUNT) {
            return Err(CodingError::StageCount {
                expected: usize::from(STAGE_COUNT),
                found: stages.len(),
            });
        }

        for (expected, stage) in StageId::all().zip(&stages) {
            if stage.id != expected {
                return Err(CodingError::StageIdGap {
                    expected: expected.value(),
                    found: stage.id.value(),
                });
            }
            validate_stage_text(stage)?;
        }

        Ok(Self { stages })
    }

    /// Get a stage by id.
    ///
    /// Always `Some` for a validated catalog; kept fallible for callers that
    /// hold a `StageId` from elsewhere.
    #[must_use]
    pub fn get(&self, id: StageId) -> Option<&Stage> {
        self.stages.get(usize::from(id.index()))
    }

    /// Iterate stages in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Stage> {
        self.stages.iter()
    }

    /// Number of stages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Always false for a validated catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

fn validate_stage_text(stage: &Stage) -> Result<(), CodingError> {
    let context = format!("stage {}", stage.id);
    let fields = [
        ("name", stage.name.as_str()),
        ("level", stage.level.as_str()),
        ("description", stage.description.as_str()),
        ("work", stage.work.as_str()),
        ("pitfall", stage.pitfall.as_str()),
    ];
    for (field, value) in fields {
        require_text(&context, field, value)?;
    }
    if stage.questions.is_empty() || stage.questions.iter().any(|q| q.trim().is_empty()) {
        return Err(CodingError::EmptyField {
            context,
            field: "questions",
        });
    }
    Ok(())
}

fn require_text(context: &str, field: &'static str, value: &str) -> Result<(), CodingError> {
    if value.trim().is_empty() {
        return Err(CodingError::EmptyField {
            context: context.to_string(),
            field,
        });
    }
    Ok(())
}

// =============================================================================
// EXAMPLE CATALOG
// =============================================================================

/// Mapping from example key to worked example.
///
/// Uses `BTreeMap` so key listings are deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleCatalog {
    examples: BTreeMap<ExampleKey, WorkedExample>,
}

impl ExampleCatalog {
    /// Build an example catalog, validating every cross reference.
    pub fn new(examples: BTreeMap<ExampleKey, WorkedExample>) -> Result<Self, CodingError> {
        if examples.is_empty() {
            return Err(CodingError::EmptyCatalog);
        }
        for (key, example) in &examples {
            validate_example(key, example)?;
        }
        Ok(Self { examples })
    }

    /// Look up an example, failing with `UnknownExample` if absent.
    pub fn get(&self, key: &ExampleKey) -> Result<&WorkedExample, CodingError> {
        self.examples
            .get(key)
            .ok_or_else(|| CodingError::UnknownExample(key.clone()))
    }

    /// Check whether an example exists.
    #[must_use]
    pub fn contains(&self, key: &ExampleKey) -> bool {
        self.examples.contains_key(key)
    }

    /// Example keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &ExampleKey> {
        self.examples.keys()
    }

    /// Iterate `(key, example)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&ExampleKey, &WorkedExample)> {
        self.examples.iter()
    }

    /// The example selected on a fresh load: `community` when present,
    /// otherwise the first key.
    #[must_use]
    pub fn default_key(&self) -> ExampleKey {
        let preferred = ExampleKey::new(DEFAULT_EXAMPLE);
        if self.examples.contains_key(&preferred) {
            return preferred;
        }
        self.examples.keys().next().cloned().unwrap_or(preferred)
    }

    /// Number of examples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    /// Always false for a validated catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }
}

fn validate_example(key: &ExampleKey, example: &WorkedExample) -> Result<(), CodingError> {
    let context = format!("example '{key}'");
    require_text(&context, "raw", &example.raw)?;
    require_text(&context, "theory", &example.theory)?;

    let mut codes = BTreeSet::new();
    for code in &example.descriptive_codes {
        require_text(&context, "code", code.code.as_str())?;
        require_text(&context, "segment", &code.segment)?;
        if !codes.insert(&code.code) {
            return Err(CodingError::DuplicateCode {
                example: key.clone(),
                code: code.code.clone(),
            });
        }
    }

    let mut categories = BTreeSet::new();
    for category in &example.categories {
        require_text(&context, "category", category.name.as_str())?;
        if !categories.insert(&category.name) {
            return Err(CodingError::DuplicateCategory {
                example: key.clone(),
                category: category.name.clone(),
            });
        }
        if let Some(missing) = category.codes.iter().find(|c| !codes.contains(c)) {
            return Err(CodingError::UnknownCode {
                category: category.name.clone(),
                code: missing.clone(),
            });
        }
    }

    for theme in &example.themes {
        require_text(&context, "theme", &theme.name)?;
        require_text(&context, "insight", &theme.insight)?;
        if let Some(missing) = theme.connects.iter().find(|c| !categories.contains(c)) {
            return Err(CodingError::UnknownCategory {
                theme: theme.name.clone(),
                category: missing.clone(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// CATALOG
// =============================================================================

/// Stages plus worked examples: everything the walkthrough displays that is
/// not fixed panel text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub stages: StageCatalog,
    pub examples: ExampleCatalog,
}

impl Catalog {
    /// Build and validate a catalog.
    pub fn new(
        stages: Vec<Stage>,
        examples: BTreeMap<ExampleKey, WorkedExample>,
    ) -> Result<Self, CodingError> {
        Ok(Self {
            stages: StageCatalog::new(stages)?,
            examples: ExampleCatalog::new(examples)?,
        })
    }

    /// The built-in catalog: five stages and the `community` example.
    pub fn builtin() -> Result<Self, CodingError> {
        Self::new(builtin::stages()?, builtin::examples())
    }

    /// Report the advisory gaps of one example.
    pub fn coverage(&self, key: &ExampleKey) -> Result<Coverage, CodingError> {
        let example = self.examples.get(key)?;

        let categorized: BTreeSet<&CodeName> = example
            .categories
            .iter()
            .flat_map(|c| c.codes.iter())
            .collect();
        let connected: BTreeSet<&CategoryName> = example
            .themes
            .iter()
            .flat_map(|t| t.connects.iter())
            .collect();

        Ok(Coverage {
            uncategorized_codes: example
                .descriptive_codes
                .iter()
                .map(|c| &c.code)
                .filter(|c| !categorized.contains(c))
                .cloned()
                .collect(),
            unthemed_categories: example
                .categories
                .iter()
                .map(|c| &c.name)
                .filter(|c| !connected.contains(c))
                .cloned()
                .collect(),
        })
    }
}

/// Gaps in the trace from codes to themes that validation allows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coverage {
    /// Codes that no category lists.
    pub uncategorized_codes: Vec<CodeName>,
    /// Categories that no theme connects.
    pub unthemed_categories: Vec<CategoryName>,
}

impl Coverage {
    /// True when every code is categorized and every category is themed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.uncategorized_codes.is_empty() && self.unthemed_categories.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================
