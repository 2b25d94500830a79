use super::*;
use pretty_assertions::assert_eq;

#[test]
fn switching_modes_recenters_and_keeps_filters() {
    let mut state = unfiltered_state();
    run(
        &mut state,
        MapAction::SetFilter {
            tag: FilterTag::Category(MarkerCategory::Friend),
            enabled: true,
        },
    );
    run(&mut state, MapAction::SetQuery("basin".to_string()));
    let before = visible_titles(&state);
    assert_eq!(before, vec!["Gothic Basin"]);

    let effects = run(&mut state, MapAction::SetMode(ViewMode::Personal));
    assert_eq!(
        effects,
        vec![
            SessionEffect::RecenterMap(ViewMode::Personal.viewport()),
            SessionEffect::RequestFrame,
        ]
    );
    assert!(visible_titles(&state).is_empty());

    let effects = run(&mut state, MapAction::SetMode(ViewMode::Social));
    assert_eq!(
        effects[0],
        SessionEffect::RecenterMap(ViewMode::Social.viewport())
    );
    assert_eq!(visible_titles(&state), before);
    assert_eq!(state.map.query, "basin");
}

#[test]
fn selecting_the_current_mode_is_a_no_op() {
    let mut state = state();
    let effects = run(&mut state, MapAction::SetMode(ViewMode::Social));
    assert!(effects.is_empty());
    assert_eq!(state.map.viewport(), ViewMode::Social.viewport());
}

#[test]
fn planner_and_map_do_not_share_state() {
    let mut state = state();
    let before = state.planner.progress().clone();
    run(&mut state, MapAction::SetMode(ViewMode::Personal));
    run(&mut state, MapAction::SetQuery("rainier".to_string()));
    assert_eq!(state.planner.progress(), &before);

    run(&mut state, PlannerAction::CompleteStep(Step::Basics));
    assert_eq!(state.map.mode, ViewMode::Personal);
    assert_eq!(state.map.query, "rainier");
}
