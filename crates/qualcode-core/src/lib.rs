//! # qualcode-core
//!
//! The pure model behind the qualitative coding walkthrough - THE LOGIC.
//!
//! The walkthrough explains five stages of analysis, from raw data through
//! codes, categories and themes to theory, and carries one worked example
//! through all of them. This crate holds:
//! - `types`: typed identifiers, stage and example records, `CodingError`
//! - `catalog`: validated, immutable stage and example catalogs
//! - `state`: the accordion view state and the pure `update` function
//! - `view`: the pure `render` projection from state to a view tree
//! - `formats`: the TOML catalog document
//!
//! ## Architectural Constraints
//!
//! - No I/O, no logging, no async; the app layer hosts the view
//! - All content is immutable once a `Catalog` is built
//! - `update` and `render` are pure functions of their arguments

// =============================================================================
// MODULES
// =============================================================================

pub mod accent;
pub mod catalog;
pub mod formats;
pub mod icons;
pub mod panels;
pub mod state;
pub mod types;
pub mod view;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{
    Category, CategoryName, CodeName, CodingError, DescriptiveCode, ExampleKey, STAGE_COUNT, Stage,
    StageId, Theme, WorkedExample,
};

// =============================================================================
// RE-EXPORTS: Catalog, State and View
// =============================================================================

pub use accent::{Accent, Tone};
pub use catalog::{Catalog, Coverage, DEFAULT_EXAMPLE, ExampleCatalog, StageCatalog};
pub use icons::{AsciiGlyphs, Glyphs, Icon, UnicodeGlyphs};
pub use state::{Event, ViewState, toggle, update};
pub use view::{View, render};

// =============================================================================
// RE-EXPORTS: Formats (from formats module)
// =============================================================================

pub use formats::{MAX_CATALOG_DOCUMENT_SIZE, catalog_from_toml, catalog_to_toml};
