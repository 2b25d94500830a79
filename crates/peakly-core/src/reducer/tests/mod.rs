use pretty_assertions::assert_eq;

pub(super) use super::reduce;
pub(super) use super::SessionEffect;
pub(super) use crate::actions::CollectionAction;
pub(super) use crate::actions::MapAction;
pub(super) use crate::actions::PlannerAction;
pub(super) use crate::actions::SessionAction;
pub(super) use crate::catalog::MarkerCategory;
pub(super) use crate::catalog::ViewMode;
pub(super) use crate::collection::Ownership;
pub(super) use crate::config::Config;
pub(super) use crate::error::SequenceError;
pub(super) use crate::filter::FilterTag;
pub(super) use crate::roster::OWNER_ID;
pub(super) use crate::state::DifficultyTier;
pub(super) use crate::state::LogBuffer;
pub(super) use crate::state::LogLevel;
pub(super) use crate::state::LogSource;
pub(super) use crate::state::Rarity;
pub(super) use crate::state::SessionState;
pub(super) use crate::state::Step;

mod collection_filters;
mod view_mode;

fn state() -> SessionState {
    SessionState::new(&Config::default())
}

/// Session whose map starts with no filter flags at all.
fn unfiltered_state() -> SessionState {
    let mut config = Config::default();
    config.map.default_filters.clear();
    SessionState::new(&config)
}

fn run(state: &mut SessionState, action: impl Into<SessionAction>) -> Vec<SessionEffect> {
    reduce(state, action.into()).expect("action accepted")
}

fn complete_through(state: &mut SessionState, last: Step) {
    for step in Step::ALL {
        run(state, PlannerAction::CompleteStep(step));
        if step == last {
            break;
        }
    }
}

fn visible_titles(state: &SessionState) -> Vec<&'static str> {
    state
        .map
        .visible_markers()
        .into_iter()
        .map(|marker| marker.title)
        .collect()
}

fn team_names(state: &SessionState) -> Vec<String> {
    state
        .planner
        .planner_state()
        .team
        .members()
        .iter()
        .map(|member| member.display_name.clone())
        .collect()
}

fn assert_single_owner(state: &SessionState) {
    let team = &state.planner.planner_state().team;
    assert_eq!(team.owner_count(), 1);
    assert_eq!(team.owner().id, OWNER_ID);
}
