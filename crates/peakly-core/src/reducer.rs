use tracing::debug;
use tracing::warn;

use super::actions::CollectionAction;
use super::actions::MapAction;
use super::actions::PlannerAction;
use super::actions::SessionAction;
use super::catalog::MapViewport;
use super::error::SequenceError;
use super::filter::FilterTag;
use super::state::LogEntry;
use super::state::LogLevel;
use super::state::LogSource;
use super::state::SessionState;
use super::state::Step;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEffect {
    RequestFrame,
    RecenterMap(MapViewport),
}

/// Applies one UI event. Only planner events can fail, and a failed event
/// leaves the planner untouched apart from the log entry recording it.
pub fn reduce(
    state: &mut SessionState,
    action: SessionAction,
) -> Result<Vec<SessionEffect>, SequenceError> {
    match action {
        SessionAction::Planner(planner) => {
            reduce_planner(state, planner).inspect_err(|err| {
                warn!(%err, "planner transition rejected");
                record(state, LogLevel::Warn, LogSource::Planner, err.to_string());
            })
        }
        SessionAction::Map(map) => Ok(reduce_map(state, map)),
        SessionAction::Collection(collection) => Ok(reduce_collection(state, collection)),
    }
}

fn reduce_planner(
    state: &mut SessionState,
    action: PlannerAction,
) -> Result<Vec<SessionEffect>, SequenceError> {
    match action {
        PlannerAction::CompleteStep(step) => {
            let already = state.planner.is_step_completed(step);
            state.planner.complete_step(step)?;
            if already {
                record(
                    state,
                    LogLevel::Debug,
                    LogSource::Planner,
                    format!("step '{}' was already completed", step.label()),
                );
            } else {
                record(
                    state,
                    LogLevel::Info,
                    LogSource::Planner,
                    format!("completed step '{}'", step.label()),
                );
            }
            Ok(vec![SessionEffect::RequestFrame])
        }
        PlannerAction::SetOpenStep(step) => {
            let before = state.planner.open_step();
            state.planner.set_open_step(step);
            Ok(open_step_changed(state, before))
        }
        PlannerAction::ToggleStep(step) => {
            let before = state.planner.open_step();
            state.planner.toggle_step(step);
            Ok(open_step_changed(state, before))
        }
        PlannerAction::SetDates { start, end } => {
            state.planner.set_dates(start, end)?;
            let range = &state.planner.planner_state().date_range;
            let message = format!("dates set to {} .. {}", range.start, range.end);
            record(state, LogLevel::Info, LogSource::Planner, message);
            Ok(vec![SessionEffect::RequestFrame])
        }
        PlannerAction::SetDifficulty(tier) => {
            state.planner.set_difficulty(tier)?;
            record(
                state,
                LogLevel::Info,
                LogSource::Planner,
                format!("difficulty set to {}", tier.label()),
            );
            Ok(vec![SessionEffect::RequestFrame])
        }
        PlannerAction::SetStartPoint(label) => {
            state.planner.set_start_point(label)?;
            let message = format!(
                "starting point set to '{}'",
                state.planner.planner_state().start_point
            );
            record(state, LogLevel::Info, LogSource::Planner, message);
            Ok(vec![SessionEffect::RequestFrame])
        }
        PlannerAction::AddMember(raw_name) => match state.planner.add_member(&raw_name)? {
            Some(id) => {
                record(
                    state,
                    LogLevel::Info,
                    LogSource::Roster,
                    format!("added '{}' as {id}", raw_name.trim()),
                );
                Ok(vec![SessionEffect::RequestFrame])
            }
            None => {
                record(
                    state,
                    LogLevel::Debug,
                    LogSource::Roster,
                    "ignored blank member name",
                );
                Ok(Vec::new())
            }
        },
        PlannerAction::RemoveMember { id } => {
            if state.planner.remove_member(&id)? {
                record(
                    state,
                    LogLevel::Info,
                    LogSource::Roster,
                    format!("removed {id}"),
                );
                Ok(vec![SessionEffect::RequestFrame])
            } else {
                record(
                    state,
                    LogLevel::Debug,
                    LogSource::Roster,
                    format!("ignored removal of {id}"),
                );
                Ok(Vec::new())
            }
        }
    }
}

fn reduce_map(state: &mut SessionState, action: MapAction) -> Vec<SessionEffect> {
    match action {
        MapAction::SetFilter { tag, enabled } => {
            let before = state.map.filters.is_enabled(tag);
            state.map.filters.set(tag, enabled);
            filter_changed(state, tag.label(), before != enabled, enabled)
        }
        MapAction::SetFilterNamed { name, enabled } => {
            let Some(tag) = FilterTag::parse(&name) else {
                record(
                    state,
                    LogLevel::Debug,
                    LogSource::Map,
                    format!("ignored unknown filter '{}'", name.trim()),
                );
                return Vec::new();
            };
            let before = state.map.filters.is_enabled(tag);
            state.map.filters.set(tag, enabled);
            filter_changed(state, tag.label(), before != enabled, enabled)
        }
        MapAction::ToggleFilter(tag) => {
            state.map.filters.toggle(tag);
            let enabled = state.map.filters.is_enabled(tag);
            filter_changed(state, tag.label(), true, enabled)
        }
        MapAction::ClearFilters => {
            let had_any = state.map.filters.any_enabled();
            state.map.filters.clear();
            if had_any {
                record(state, LogLevel::Info, LogSource::Map, "cleared filters");
            } else {
                record(state, LogLevel::Debug, LogSource::Map, "no filters to clear");
            }
            frame_if(had_any)
        }
        MapAction::SetQuery(query) => {
            let changed = state.map.query != query;
            state.map.set_query(query);
            if changed {
                let message = format!("search set to '{}'", state.map.query);
                record(state, LogLevel::Info, LogSource::Map, message);
            } else {
                record(state, LogLevel::Debug, LogSource::Map, "search unchanged");
            }
            frame_if(changed)
        }
        MapAction::SetMode(mode) => match state.map.set_mode(mode) {
            Some(viewport) => {
                record(
                    state,
                    LogLevel::Info,
                    LogSource::Map,
                    format!("switched to {} map", mode.label()),
                );
                vec![
                    SessionEffect::RecenterMap(viewport),
                    SessionEffect::RequestFrame,
                ]
            }
            None => {
                record(
                    state,
                    LogLevel::Debug,
                    LogSource::Map,
                    format!("already on {} map", mode.label()),
                );
                Vec::new()
            }
        },
    }
}

fn reduce_collection(state: &mut SessionState, action: CollectionAction) -> Vec<SessionEffect> {
    let before = state.collection.filter;
    let message = match action {
        CollectionAction::SetOwnership(ownership) => {
            state.collection.filter.ownership = ownership;
            format!("showing {} cards", ownership.label())
        }
        CollectionAction::SetRarity(rarity) => {
            state.collection.filter.rarity = rarity;
            format!(
                "rarity filter set to {}",
                rarity.map_or("all", |rarity| rarity.label())
            )
        }
    };
    let changed = before != state.collection.filter;
    let level = if changed {
        LogLevel::Info
    } else {
        LogLevel::Debug
    };
    record(state, level, LogSource::Collection, message);
    frame_if(changed)
}

fn open_step_changed(state: &mut SessionState, before: Step) -> Vec<SessionEffect> {
    let open = state.planner.open_step();
    if open == before {
        record(
            state,
            LogLevel::Debug,
            LogSource::Planner,
            format!("step '{}' already open", open.label()),
        );
        return Vec::new();
    }
    record(
        state,
        LogLevel::Info,
        LogSource::Planner,
        format!("opened step '{}'", open.label()),
    );
    vec![SessionEffect::RequestFrame]
}

fn filter_changed(
    state: &mut SessionState,
    label: &str,
    changed: bool,
    enabled: bool,
) -> Vec<SessionEffect> {
    let flag = if enabled { "on" } else { "off" };
    if changed {
        record(
            state,
            LogLevel::Info,
            LogSource::Map,
            format!("filter '{label}' {flag}"),
        );
    } else {
        record(
            state,
            LogLevel::Debug,
            LogSource::Map,
            format!("filter '{label}' already {flag}"),
        );
    }
    frame_if(changed)
}

fn frame_if(changed: bool) -> Vec<SessionEffect> {
    if changed {
        vec![SessionEffect::RequestFrame]
    } else {
        Vec::new()
    }
}

fn record(state: &mut SessionState, level: LogLevel, source: LogSource, message: impl Into<String>) {
    let entry = LogEntry::new(level, source, message);
    debug!(source = ?entry.source, level = ?entry.level, "{}", entry.message);
    state.logs.append(entry);
}

#[cfg(test)]
mod tests;
