//! # Property-Based Tests
//!
//! Accordion and rendering invariants over arbitrary click sequences.

use qualcode_core::{Catalog, Event, StageId, ViewState, render, toggle, update};
use proptest::collection::vec;
use proptest::prelude::*;

fn stage_id() -> impl Strategy<Value = StageId> {
    (1u8..=5).prop_map(|n| StageId::new(n).expect("in range"))
}

proptest! {
    /// At most one stage is expanded after any sequence of clicks.
    #[test]
    fn at_most_one_expanded(clicks in vec(stage_id(), 0..40)) {
        let catalog = Catalog::builtin().expect("builtin");
        let mut state = ViewState::initial(&catalog);

        for id in clicks {
            state = update(&catalog, &state, Event::ToggleStage(id)).expect("toggle");
            let view = render(&catalog, &state).expect("render");
            prop_assert!(view.expanded_stages().count() <= 1);
        }
    }

    /// The expanded stage after a click sequence matches folding `toggle`.
    #[test]
    fn update_agrees_with_toggle(clicks in vec(stage_id(), 0..40)) {
        let catalog = Catalog::builtin().expect("builtin");
        let mut state = ViewState::initial(&catalog);
        let mut expected = None;

        for id in clicks {
            state = update(&catalog, &state, Event::ToggleStage(id)).expect("toggle");
            expected = toggle(expected, id);
        }

        prop_assert_eq!(state.expanded, expected);
    }

    /// Clicking the same stage twice returns to the starting expansion
    /// whenever that stage started collapsed.
    #[test]
    fn double_click_restores_collapsed(start in proptest::option::of(stage_id()), id in stage_id()) {
        prop_assume!(start != Some(id));
        let once = toggle(start, id);
        prop_assert_eq!(once, Some(id));
        prop_assert_eq!(toggle(once, id), None);
    }

    /// Rendering is a pure function of state.
    #[test]
    fn render_is_deterministic(expanded in proptest::option::of(stage_id())) {
        let catalog = Catalog::builtin().expect("builtin");
        let state = ViewState { expanded, ..ViewState::initial(&catalog) };

        let first = render(&catalog, &state).expect("render");
        let second = render(&catalog, &state).expect("render");
        prop_assert_eq!(first, second);
    }

    /// Stage ids outside 1..=5 never construct.
    #[test]
    fn stage_id_range(n in any::<u8>()) {
        prop_assert_eq!(StageId::new(n).is_ok(), (1..=5).contains(&n));
    }
}
