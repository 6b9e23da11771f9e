//! # Catalog File Format
//!
//! TOML documents describing a stage catalog and its worked examples.
//! File I/O lives in the app layer; this module only converts text.
//!
//! ```toml
//! [[stages]]
//! id = 1
//! name = "RAW DATA"
//! level = "Concrete Reality"
//! description = "..."
//! questions = ["...", "..."]
//! work = "..."
//! pitfall = "..."
//!
//! [examples.community]
//! raw = "..."
//! theory = "..."
//!
//! [[examples.community.codes]]
//! code = "Volunteer motivation"
//! segment = "wanted to help"
//!
//! [[examples.community.categories]]
//! name = "Identity Transformation"
//! codes = ["Volunteer motivation"]
//!
//! [[examples.community.themes]]
//! name = "..."
//! connects = ["Identity Transformation"]
//! insight = "..."
//! ```
//!
//! Parsed documents go through [`Catalog::new`], so a file with a dangling
//! reference is rejected on load.

use crate::catalog::Catalog;
use crate::types::{Category, CodingError, DescriptiveCode, ExampleKey, Stage, Theme, WorkedExample};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Largest catalog document accepted, in bytes.
pub const MAX_CATALOG_DOCUMENT_SIZE: usize = 1024 * 1024;

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogDocument {
    stages: Vec<Stage>,
    examples: BTreeMap<ExampleKey, ExampleDocument>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ExampleDocument {
    raw: String,
    theory: String,
    #[serde(default)]
    codes: Vec<DescriptiveCode>,
    #[serde(default)]
    categories: Vec<Category>,
    #[serde(default)]
    themes: Vec<Theme>,
}

impl From<ExampleDocument> for WorkedExample {
    fn from(doc: ExampleDocument) -> Self {
        Self {
            raw: doc.raw,
            descriptive_codes: doc.codes,
            categories: doc.categories,
            themes: doc.themes,
            theory: doc.theory,
        }
    }
}

impl From<&WorkedExample> for ExampleDocument {
    fn from(example: &WorkedExample) -> Self {
        Self {
            raw: example.raw.clone(),
            theory: example.theory.clone(),
            codes: example.descriptive_codes.clone(),
            categories: example.categories.clone(),
            themes: example.themes.clone(),
        }
    }
}

/// Parse and validate a TOML catalog.
pub fn catalog_from_toml(text: &str) -> Result<Catalog, CodingError> {
    if text.len() > MAX_CATALOG_DOCUMENT_SIZE {
        return Err(CodingError::Format(format!(
            "Catalog document is {} bytes, maximum is {}",
            text.len(),
            MAX_CATALOG_DOCUMENT_SIZE
        )));
    }

    let doc: CatalogDocument =
        toml::from_str(text).map_err(|e| CodingError::Format(e.to_string()))?;

    let examples = doc
        .examples
        .into_iter()
        .map(|(key, example)| (key, WorkedExample::from(example)))
        .collect();

    Catalog::new(doc.stages, examples)
}

/// Write a catalog as TOML. The output parses back to an equal catalog.
pub fn catalog_to_toml(catalog: &Catalog) -> Result<String, CodingError> {
    let doc = CatalogDocument {
        stages: catalog.stages.iter().cloned().collect(),
        examples: catalog
            .examples
            .iter()
            .map(|(key, example)| (key.clone(), ExampleDocument::from(example)))
            .collect(),
    };

    toml::to_string_pretty(&doc).map_err(|e| CodingError::Format(e.to_string()))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
[[stages]]
id = 1
name = "RAW DATA"
level = "Concrete Reality"
description = "Words"
questions = ["What did they say?"]
work = "Reading"
pitfall = "Rushing"

[[stages]]
id = 2
name = "CODES"
level = "Labels"
description = "Names"
questions = ["What is here?"]
work = "Labeling"
pitfall = "Drift"

[[stages]]
id = 3
name = "CATEGORIES"
level = "Patterns"
description = "Groups"
questions = ["What goes with what?"]
work = "Comparing"
pitfall = "Forcing"

[[stages]]
id = 4
name = "THEMES"
level = "Concepts"
description = "Meaning"
questions = ["So what?"]
work = "Interpreting"
pitfall = "Describing"

[[stages]]
id = 5
name = "THEORY"
level = "Insights"
description = "Transfer"
questions = ["What can we learn?"]
work = "Abstracting"
pitfall = "Overreach"

[examples.clinic]
raw = "The nurse stayed after her shift."
theory = "Care exceeds the roster."

[[examples.clinic.codes]]
code = "Extra time"
segment = "stayed after her shift"

[[examples.clinic.categories]]
name = "Unpaid care"
codes = ["Extra time"]

[[examples.clinic.themes]]
name = "Invisible labour"
connects = ["Unpaid care"]
insight = "Rosters miss what holds the ward together"
"#;

    #[test]
    fn parse_minimal_document() {
        let catalog = catalog_from_toml(MINIMAL).expect("parse");
        assert_eq!(catalog.stages.len(), 5);

        let clinic = catalog
            .examples
            .get(&ExampleKey::new("clinic"))
            .expect("clinic");
        assert_eq!(clinic.descriptive_codes.len(), 1);
        assert_eq!(clinic.themes[0].connects[0].as_str(), "Unpaid care");
    }

    #[test]
    fn dangling_reference_rejected_on_load() {
        let text = MINIMAL.replace(r#"connects = ["Unpaid care"]"#, r#"connects = ["Paid care"]"#);
        assert!(matches!(
            catalog_from_toml(&text),
            Err(CodingError::UnknownCategory { .. })
        ));
    }

    #[test]
    fn out_of_range_stage_id_is_format_error() {
        let text = MINIMAL.replace("id = 5", "id = 9");
        assert!(matches!(
            catalog_from_toml(&text),
            Err(CodingError::Format(_))
        ));
    }

    #[test]
    fn unknown_field_is_format_error() {
        let text = MINIMAL.replace("theory = \"Care", "colour = \"red\"\ntheory = \"Care");
        assert!(matches!(
            catalog_from_toml(&text),
            Err(CodingError::Format(_))
        ));
    }

    #[test]
    fn oversized_document_rejected() {
        let text = " ".repeat(MAX_CATALOG_DOCUMENT_SIZE + 1);
        assert!(matches!(
            catalog_from_toml(&text),
            Err(CodingError::Format(_))
        ));
    }

    #[test]
    fn builtin_survives_export_and_reload() {
        let builtin = Catalog::builtin().expect("builtin");
        let text = catalog_to_toml(&builtin).expect("export");
        let reloaded = catalog_from_toml(&text).expect("reload");
        assert_eq!(reloaded, builtin);
    }
}
