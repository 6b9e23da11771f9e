//! # View State
//!
//! The two pieces of transient UI state and the pure update function.
//!
//! State is owned by whoever hosts the view (the CLI explore session, a test)
//! and is never global. [`update`] maps `(state, event)` to a new state and
//! never mutates its input; rendering is a separate projection in
//! [`crate::view`].

use crate::catalog::Catalog;
use crate::types::{CodingError, ExampleKey, StageId};
use serde::{Deserialize, Serialize};

/// Which stage is expanded and which example is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// At most one expanded stage.
    pub expanded: Option<StageId>,
    pub example: ExampleKey,
}

impl ViewState {
    /// Fresh-load state: everything collapsed, default example selected.
    #[must_use]
    pub fn initial(catalog: &Catalog) -> Self {
        Self {
            expanded: None,
            example: catalog.examples.default_key(),
        }
    }

    /// Check whether a stage is the expanded one.
    #[must_use]
    pub fn is_expanded(&self, id: StageId) -> bool {
        self.expanded == Some(id)
    }
}

/// A user action on the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// The header of a stage was activated.
    ToggleStage(StageId),
    /// A different worked example was chosen.
    SelectExample(ExampleKey),
    /// Collapse whatever is open.
    CollapseAll,
}

/// Accordion toggle: re-clicking the open stage closes it, any other click
/// opens the clicked stage and implicitly closes the previous one.
#[must_use]
pub fn toggle(expanded: Option<StageId>, clicked: StageId) -> Option<StageId> {
    if expanded == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// Apply one event to a state.
///
/// Selecting an example with no catalog entry fails with
/// [`CodingError::UnknownExample`]; the caller keeps its previous state.
/// Changing the example leaves the expanded stage as it was.
pub fn update(catalog: &Catalog, state: &ViewState, event: Event) -> Result<ViewState, CodingError> {
    match event {
        Event::ToggleStage(id) => Ok(ViewState {
            expanded: toggle(state.expanded, id),
            example: state.example.clone(),
        }),
        Event::SelectExample(key) => {
            if !catalog.examples.contains(&key) {
                return Err(CodingError::UnknownExample(key));
            }
            Ok(ViewState {
                expanded: state.expanded,
                example: key,
            })
        }
        Event::CollapseAll => Ok(ViewState {
            expanded: None,
            example: state.example.clone(),
        }),
    }
}

// =============================================================================
// TESTS
// =============================================================================
