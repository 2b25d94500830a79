use serde::Serialize;

use super::catalog::MapViewport;
use super::catalog::Marker;
use super::catalog::ViewMode;
use super::collection::CollectionFilter;
use super::collection::CollectionStats;
use super::collection::SummitCard;
use super::roster::TeamMember;
use super::state::DateRange;
use super::state::DifficultyTier;
use super::state::SessionState;
use super::state::Step;
use super::trails::TrailSuggestion;

pub const SNAPSHOT_VERSION: u16 = 1;

/// Read-only view of a session for whoever renders or stores it.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub version: u16,
    pub planner: PlannerSnapshot,
    pub map: MapSnapshot,
    pub collection: CollectionSnapshot,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlannerSnapshot {
    pub open_step: Step,
    pub completed: Vec<Step>,
    pub enabled: Vec<Step>,
    pub date_range: DateRange,
    pub difficulty: Option<DifficultyTier>,
    pub start_point: String,
    pub team: Vec<TeamMember>,
    pub trail_suggestions: Vec<TrailSuggestion>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MapSnapshot {
    pub mode: ViewMode,
    pub viewport: MapViewport,
    pub filters: Vec<&'static str>,
    pub query: String,
    pub visible: Vec<Marker>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CollectionSnapshot {
    pub filter: CollectionFilter,
    pub stats: CollectionStats,
    pub visible: Vec<SummitCard>,
}

impl SessionState {
    pub fn snapshot(&self) -> SessionSnapshot {
        let wizard = &self.planner;
        let planner = wizard.planner_state();
        SessionSnapshot {
            version: SNAPSHOT_VERSION,
            planner: PlannerSnapshot {
                open_step: wizard.open_step(),
                completed: wizard.progress().completed.iter().copied().collect(),
                enabled: Step::ALL
                    .into_iter()
                    .filter(|step| wizard.is_step_enabled(*step))
                    .collect(),
                date_range: planner.date_range.clone(),
                difficulty: planner.difficulty,
                start_point: planner.start_point.clone(),
                team: planner.team.members().to_vec(),
                trail_suggestions: wizard.trail_suggestions().to_vec(),
            },
            map: MapSnapshot {
                mode: self.map.mode,
                viewport: self.map.viewport(),
                filters: self.map.filters.enabled_tags().map(|tag| tag.label()).collect(),
                query: self.map.query.clone(),
                visible: self.map.visible_markers().into_iter().cloned().collect(),
            },
            collection: CollectionSnapshot {
                filter: self.collection.filter,
                stats: self.collection.stats(),
                visible: self
                    .collection
                    .visible_cards()
                    .into_iter()
                    .cloned()
                    .collect(),
            },
        }
    }
}
