use super::catalog::ViewMode;
use super::collection::Ownership;
use super::filter::FilterTag;
use super::state::DifficultyTier;
use super::state::Rarity;
use super::state::Step;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    Planner(PlannerAction),
    Map(MapAction),
    Collection(CollectionAction),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlannerAction {
    CompleteStep(Step),
    SetOpenStep(Step),
    ToggleStep(Step),
    SetDates { start: String, end: String },
    SetDifficulty(DifficultyTier),
    SetStartPoint(String),
    AddMember(String),
    RemoveMember { id: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum MapAction {
    SetFilter { tag: FilterTag, enabled: bool },
    /// A tag typed by name; unknown names do nothing.
    SetFilterNamed { name: String, enabled: bool },
    ToggleFilter(FilterTag),
    ClearFilters,
    SetQuery(String),
    SetMode(ViewMode),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CollectionAction {
    SetOwnership(Ownership),
    SetRarity(Option<Rarity>),
}

impl From<PlannerAction> for SessionAction {
    fn from(action: PlannerAction) -> Self {
        Self::Planner(action)
    }
}

impl From<MapAction> for SessionAction {
    fn from(action: MapAction) -> Self {
        Self::Map(action)
    }
}

impl From<CollectionAction> for SessionAction {
    fn from(action: CollectionAction) -> Self {
        Self::Collection(action)
    }
}
