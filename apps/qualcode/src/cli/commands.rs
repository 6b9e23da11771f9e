//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::explore::run_explore;
use crate::present::{present, present_stage};
use qualcode_core::{
    Catalog, CodingError, Event, ExampleKey, Glyphs, MAX_CATALOG_DOCUMENT_SIZE, StageId, ViewState,
    catalog_from_toml, catalog_to_toml, render, update,
};
use std::path::{Path, PathBuf};

// =============================================================================
// FILE VALIDATION
// =============================================================================

/// Validate file size before reading.
fn validate_file_size(path: &Path, max_size: u64) -> Result<(), CodingError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| CodingError::Io(format!("Cannot read file metadata: {}", e)))?;

    if metadata.len() > max_size {
        return Err(CodingError::Format(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }
    Ok(())
}

/// Resolve an input path: canonicalize it and require a regular file.
fn validate_file_path(path: &Path) -> Result<PathBuf, CodingError> {
    let canonical = path.canonicalize().map_err(|e| {
        CodingError::Io(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(CodingError::Io(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

/// Resolve an output path: the parent directory must exist.
fn validate_output_path(path: &Path) -> Result<PathBuf, CodingError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let canonical_parent = parent.canonicalize().map_err(|e| {
        CodingError::Io(format!(
            "Invalid output directory '{}': {}",
            parent.display(),
            e
        ))
    })?;

    if !canonical_parent.is_dir() {
        return Err(CodingError::Io(format!(
            "Output directory '{}' is not a valid directory",
            parent.display()
        )));
    }

    let filename = path
        .file_name()
        .ok_or_else(|| CodingError::Io("Output path has no filename".to_string()))?;

    Ok(canonical_parent.join(filename))
}

// =============================================================================
// CATALOG LOADING
// =============================================================================

/// Load the catalog from a TOML file, or the built-in one when no path is given.
///
/// Coverage gaps are logged as warnings; reference errors fail the load.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, CodingError> {
    let catalog = match path {
        None => Catalog::builtin()?,
        Some(path) => {
            let validated = validate_file_path(path)?;
            validate_file_size(&validated, MAX_CATALOG_DOCUMENT_SIZE as u64)?;

            let text = std::fs::read_to_string(&validated)
                .map_err(|e| CodingError::Io(format!("Read catalog: {}", e)))?;
            let catalog = catalog_from_toml(&text)?;

            tracing::info!(
                "Loaded catalog from {:?}: {} stages, {} examples",
                validated,
                catalog.stages.len(),
                catalog.examples.len()
            );
            catalog
        }
    };

    for key in catalog.examples.keys() {
        let coverage = catalog.coverage(key)?;
        for code in &coverage.uncategorized_codes {
            tracing::warn!("Example '{}': code '{}' is in no category", key, code);
        }
        for category in &coverage.unthemed_categories {
            tracing::warn!("Example '{}': category '{}' feeds no theme", key, category);
        }
    }

    Ok(catalog)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CodingError> {
    let text =
        serde_json::to_string_pretty(value).map_err(|e| CodingError::Format(e.to_string()))?;
    println!("{}", text);
    Ok(())
}

// =============================================================================
// SHOW COMMAND
// =============================================================================

/// Build the state for `show`: optional expanded stage and example, applied
/// as events on the fresh-load state.
pub fn show_state(
    catalog: &Catalog,
    expand: Option<u8>,
    example: Option<&str>,
) -> Result<ViewState, CodingError> {
    let mut state = ViewState::initial(catalog);
    if let Some(key) = example {
        state = update(catalog, &state, Event::SelectExample(ExampleKey::new(key)))?;
    }
    if let Some(id) = expand {
        state = update(catalog, &state, Event::ToggleStage(StageId::new(id)?))?;
    }
    Ok(state)
}

/// Render the walkthrough once.
pub fn cmd_show(
    catalog: &Catalog,
    glyphs: &dyn Glyphs,
    json: bool,
    expand: Option<u8>,
    example: Option<&str>,
) -> Result<(), CodingError> {
    let state = show_state(catalog, expand, example)?;
    let view = render(catalog, &state)?;

    if json {
        return print_json(&view);
    }

    print!("{}", present(&view, glyphs));
    Ok(())
}

// =============================================================================
// EXPLORE COMMAND
// =============================================================================

/// Interactive session on stdin/stdout.
pub fn cmd_explore(catalog: &Catalog, glyphs: &dyn Glyphs) -> Result<(), CodingError> {
    tracing::info!("Starting explore session");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let state = run_explore(
        catalog,
        glyphs,
        ViewState::initial(catalog),
        stdin.lock(),
        stdout.lock(),
    )?;

    tracing::info!(expanded = ?state.expanded, "Explore session ended");
    Ok(())
}

// =============================================================================
// STAGE COMMANDS
// =============================================================================

/// List the stages.
pub fn cmd_stages(catalog: &Catalog, json: bool) -> Result<(), CodingError> {
    if json {
        let stages: Vec<_> = catalog
            .stages
            .iter()
            .map(|s| {
                serde_json::json!({
                    "id": s.id.value(),
                    "name": s.name,
                    "level": s.level,
                })
            })
            .collect();
        return print_json(&stages);
    }

    println!("Stages");
    println!("======");
    for stage in catalog.stages.iter() {
        println!("  {}. {:<18} {}", stage.id, stage.name, stage.level);
    }
    Ok(())
}

/// Show one stage expanded.
pub fn cmd_stage(
    catalog: &Catalog,
    glyphs: &dyn Glyphs,
    json: bool,
    id: u8,
) -> Result<(), CodingError> {
    let id = StageId::new(id)?;
    let state = update(catalog, &ViewState::initial(catalog), Event::ToggleStage(id))?;
    let view = render(catalog, &state)?;

    let card = view
        .stages
        .iter()
        .find(|card| card.id == id)
        .ok_or(CodingError::InvalidStage(id.value()))?;

    if json {
        return print_json(card);
    }

    let mut out = String::new();
    present_stage(&mut out, card, glyphs);
    print!("{}", out);
    Ok(())
}

// =============================================================================
// EXAMPLES COMMAND
// =============================================================================

/// List worked example keys.
pub fn cmd_examples(catalog: &Catalog, json: bool) -> Result<(), CodingError> {
    let default = catalog.examples.default_key();

    if json {
        let keys: Vec<&str> = catalog.examples.keys().map(ExampleKey::as_str).collect();
        return print_json(&serde_json::json!({
            "default": default.as_str(),
            "examples": keys,
        }));
    }

    for (key, example) in catalog.examples.iter() {
        let marker = if *key == default { "*" } else { " " };
        println!(
            "{} {:<16} {} codes, {} categories, {} themes",
            marker,
            key.as_str(),
            example.descriptive_codes.len(),
            example.categories.len(),
            example.themes.len()
        );
    }
    Ok(())
}

// =============================================================================
// CHECK COMMAND
// =============================================================================

/// Report the catalog's coverage. Reference errors never get this far: they
/// fail in `load_catalog`.
pub fn cmd_check(catalog: &Catalog, json: bool) -> Result<(), CodingError> {
    let mut report = Vec::new();
    for key in catalog.examples.keys() {
        report.push((key, catalog.coverage(key)?));
    }

    if json {
        let entries: Vec<_> = report
            .iter()
            .map(|(key, coverage)| {
                serde_json::json!({
                    "example": key.as_str(),
                    "complete": coverage.is_complete(),
                    "uncategorized_codes": coverage.uncategorized_codes,
                    "unthemed_categories": coverage.unthemed_categories,
                })
            })
            .collect();
        return print_json(&serde_json::json!({
            "valid": true,
            "stages": catalog.stages.len(),
            "examples": entries,
        }));
    }

    println!("Catalog OK: {} stages, {} examples", catalog.stages.len(), report.len());
    for (key, coverage) in &report {
        if coverage.is_complete() {
            println!("  {}: every code categorized, every category themed", key);
            continue;
        }
        for code in &coverage.uncategorized_codes {
            println!("  {}: code '{}' is in no category", key, code);
        }
        for category in &coverage.unthemed_categories {
            println!("  {}: category '{}' feeds no theme", key, category);
        }
    }
    Ok(())
}

// =============================================================================
// EXPORT COMMAND
// =============================================================================

/// Write the active catalog as TOML.
pub fn cmd_export(catalog: &Catalog, output: &Path) -> Result<(), CodingError> {
    let validated_output = validate_output_path(output)?;
    let text = catalog_to_toml(catalog)?;

    std::fs::write(&validated_output, &text)
        .map_err(|e| CodingError::Io(format!("Write file: {}", e)))?;

    println!("Exported {} bytes to {:?}", text.len(), validated_output);
    Ok(())
}
