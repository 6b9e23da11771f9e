//! # Walkthrough Tier Tests (T0-T3)
//!
//! If ANY tier fails, the walkthrough is INVALID.
//!
//! ## Tiers
//! - T0: Catalog Integrity
//! - T1: Accordion Behaviour
//! - T2: Worked Example Trace
//! - T3: End-to-End Scenarios

use qualcode_core::{
    Catalog, CategoryName, CodeName, CodingError, Event, ExampleKey, StageId, View, ViewState,
    render, update,
};
use std::collections::BTreeSet;

fn catalog() -> Catalog {
    Catalog::builtin().expect("builtin catalog")
}

fn stage(n: u8) -> StageId {
    StageId::new(n).expect("valid stage")
}

fn click(catalog: &Catalog, state: &ViewState, n: u8) -> ViewState {
    update(catalog, state, Event::ToggleStage(stage(n))).expect("toggle")
}

fn view(catalog: &Catalog, state: &ViewState) -> View {
    render(catalog, state).expect("render")
}

// =============================================================================
// TIER T0: CATALOG INTEGRITY
// =============================================================================

mod t0_catalog_integrity {
    use super::*;

    /// T0.1: Stage ids are contiguous 1..5 in catalog order.
    #[test]
    fn stage_ids_contiguous() {
        let ids: Vec<u8> = catalog().stages.iter().map(|s| s.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    /// T0.2: Every stage has three key questions.
    #[test]
    fn every_stage_has_questions() {
        assert!(catalog().stages.iter().all(|s| s.questions.len() == 3));
    }

    /// T0.3: The example catalog is a genuine mapping with a not-found path.
    #[test]
    fn missing_example_not_found() {
        let catalog = catalog();
        assert!(catalog.examples.contains(&ExampleKey::new("community")));
        assert!(matches!(
            catalog.examples.get(&ExampleKey::new("nursing")),
            Err(CodingError::UnknownExample(_))
        ));
    }
}

// =============================================================================
// TIER T1: ACCORDION BEHAVIOUR
// =============================================================================

mod t1_accordion {
    use super::*;

    /// T1.1: Clicking any stage from the collapsed state opens exactly that stage.
    #[test]
    fn click_from_collapsed_opens_only_that_stage() {
        let catalog = catalog();
        let initial = ViewState::initial(&catalog);

        for n in 1..=5 {
            let state = click(&catalog, &initial, n);
            let open: Vec<StageId> = view(&catalog, &state).expanded_stages().collect();
            assert_eq!(open, vec![stage(n)]);
        }
    }

    /// T1.2: Clicking the open stage collapses it.
    #[test]
    fn click_open_stage_collapses() {
        let catalog = catalog();
        let open = click(&catalog, &ViewState::initial(&catalog), 4);
        let closed = click(&catalog, &open, 4);

        assert_eq!(closed.expanded, None);
        assert_eq!(view(&catalog, &closed).expanded_stages().count(), 0);
    }

    /// T1.3: Clicking another stage switches; at most one is ever open.
    #[test]
    fn click_other_stage_switches() {
        let catalog = catalog();
        let b_open = click(&catalog, &ViewState::initial(&catalog), 2);
        let a_open = click(&catalog, &b_open, 5);

        let open: Vec<StageId> = view(&catalog, &a_open).expanded_stages().collect();
        assert_eq!(open, vec![stage(5)]);
    }

    /// T1.4: Stage cards are in id order whatever is expanded.
    #[test]
    fn order_independent_of_expansion() {
        let catalog = catalog();
        let mut state = ViewState::initial(&catalog);
        for n in [3, 1, 1, 5, 2] {
            state = click(&catalog, &state, n);
            let ids: Vec<u8> = view(&catalog, &state)
                .stages
                .iter()
                .map(|c| c.id.value())
                .collect();
            assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        }
    }
}

// =============================================================================
// TIER T2: WORKED EXAMPLE TRACE
// =============================================================================

mod t2_worked_example {
    use super::*;

    /// T2.1: The community example shows six codes.
    #[test]
    fn six_codes() {
        let catalog = catalog();
        let view = view(&catalog, &ViewState::initial(&catalog));
        assert_eq!(view.walkthrough.codes.body.len(), 6);
    }

    /// T2.2: Three named categories cover all six codes with no omissions.
    #[test]
    fn three_categories_cover_all_codes() {
        let catalog = catalog();
        let view = view(&catalog, &ViewState::initial(&catalog));
        let walkthrough = &view.walkthrough;

        let names: Vec<&str> = walkthrough
            .categories
            .body
            .iter()
            .map(|g| g.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "Identity Transformation",
                "Boundary Disruption",
                "Competing Logics"
            ]
        );

        let referenced: BTreeSet<&CodeName> = walkthrough
            .categories
            .body
            .iter()
            .flat_map(|g| g.codes.iter())
            .collect();
        let defined: BTreeSet<&CodeName> = walkthrough.codes.body.iter().map(|r| &r.code).collect();
        assert_eq!(referenced, defined);
    }

    /// T2.3: Two themes, each connecting only displayed categories.
    #[test]
    fn two_themes_reference_known_categories() {
        let catalog = catalog();
        let view = view(&catalog, &ViewState::initial(&catalog));
        let walkthrough = &view.walkthrough;

        let categories: BTreeSet<&CategoryName> =
            walkthrough.categories.body.iter().map(|g| &g.name).collect();

        assert_eq!(walkthrough.themes.body.len(), 2);
        for theme in &walkthrough.themes.body {
            assert!(!theme.connects.is_empty());
            assert!(theme.connects.iter().all(|c| categories.contains(c)));
        }
    }

    /// T2.4: Sections appear raw → codes → categories → themes → theory.
    #[test]
    fn section_order() {
        let catalog = catalog();
        let w = view(&catalog, &ViewState::initial(&catalog)).walkthrough;
        let headings = [
            w.raw.heading,
            w.codes.heading,
            w.categories.heading,
            w.themes.heading,
            w.theory.heading,
        ];
        let numbers: Vec<char> = headings.iter().filter_map(|h| h.chars().next()).collect();
        assert_eq!(numbers, vec!['1', '2', '3', '4', '5']);
    }
}

// =============================================================================
// TIER T3: END-TO-END SCENARIOS
// =============================================================================

mod t3_scenarios {
    use super::*;

    /// T3.1: Fresh load shows five headers, no detail, the full community example.
    #[test]
    fn fresh_load() {
        let catalog = catalog();
        let view = view(&catalog, &ViewState::initial(&catalog));

        assert_eq!(view.stages.len(), 5);
        assert!(view.stages.iter().all(|c| c.detail.is_none()));
        assert_eq!(view.walkthrough.example.as_str(), "community");
        assert_eq!(view.walkthrough.codes.body.len(), 6);
        assert_eq!(view.walkthrough.categories.body.len(), 3);
        assert_eq!(view.walkthrough.themes.body.len(), 2);
        assert!(view.walkthrough.theory.body.starts_with("Contributes to theories"));
        assert_eq!(view.principles.len(), 4);
    }

    /// T3.2: Clicking stage 3 shows only stage 3's detail.
    #[test]
    fn click_stage_three() {
        let catalog = catalog();
        let state = click(&catalog, &ViewState::initial(&catalog), 3);
        let view = view(&catalog, &state);

        for card in &view.stages {
            assert_eq!(card.detail.is_some(), card.id == stage(3));
        }

        let detail = view.stages[2].detail.as_ref().expect("stage 3 detail");
        assert_eq!(
            detail.description.content,
            "Organizing codes by similarity and relationship"
        );
        assert_eq!(detail.questions.content.len(), 3);
        assert_eq!(
            detail.work.content,
            "Comparing, contrasting, finding relationships, building hierarchy"
        );
        assert_eq!(
            detail.pitfall.content,
            "Forcing patterns; overlooking contradictions"
        );
    }

    /// T3.3: Re-rendering an unchanged state yields an identical view.
    #[test]
    fn rerender_is_identical() {
        let catalog = catalog();
        let state = click(&catalog, &ViewState::initial(&catalog), 1);
        assert_eq!(view(&catalog, &state), view(&catalog, &state));
    }

    /// T3.4: A rejected example selection leaves the caller's state usable.
    #[test]
    fn rejected_selection_keeps_state() {
        let catalog = catalog();
        let state = click(&catalog, &ViewState::initial(&catalog), 2);
        let result = update(
            &catalog,
            &state,
            Event::SelectExample(ExampleKey::new("classroom")),
        );

        assert!(result.is_err());
        assert_eq!(view(&catalog, &state).expanded_stages().count(), 1);
    }
}
