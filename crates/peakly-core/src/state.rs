use std::collections::BTreeSet;
use std::collections::VecDeque;

use serde::Serialize;

use super::collection::CollectionView;
use super::config::Config;
use super::filter::MapState;
use super::roster::Roster;
use super::wizard::Wizard;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Step {
    Basics,
    StartPoint,
    Team,
    Search,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::Basics, Step::StartPoint, Step::Team, Step::Search];

    pub fn next(self) -> Option<Self> {
        match self {
            Self::Basics => Some(Self::StartPoint),
            Self::StartPoint => Some(Self::Team),
            Self::Team => Some(Self::Search),
            Self::Search => None,
        }
    }

    pub fn prev(self) -> Option<Self> {
        match self {
            Self::Basics => None,
            Self::StartPoint => Some(Self::Basics),
            Self::Team => Some(Self::StartPoint),
            Self::Search => Some(Self::Team),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Basics => "basics",
            Self::StartPoint => "startPoint",
            Self::Team => "team",
            Self::Search => "search",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "basics" => Some(Self::Basics),
            "startpoint" | "start_point" | "start-point" => Some(Self::StartPoint),
            "team" => Some(Self::Team),
            "search" => Some(Self::Search),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum TerrainGrade {
    T1,
    T2,
    T3,
    T4,
    T5,
}

impl TerrainGrade {
    pub fn label(self) -> &'static str {
        match self {
            Self::T1 => "T1",
            Self::T2 => "T2",
            Self::T3 => "T3",
            Self::T4 => "T4",
            Self::T5 => "T5",
        }
    }
}

/// Difficulty chosen in the first planner step. Each tier covers a contiguous
/// band of terrain grades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyTier {
    Easy,
    Moderate,
    Hard,
    Expert,
}

impl DifficultyTier {
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy (T1-T2)",
            Self::Moderate => "Moderate (T3)",
            Self::Hard => "Hard (T4)",
            Self::Expert => "Expert (T5+)",
        }
    }

    pub fn grades(self) -> &'static [TerrainGrade] {
        match self {
            Self::Easy => &[TerrainGrade::T1, TerrainGrade::T2],
            Self::Moderate => &[TerrainGrade::T3],
            Self::Hard => &[TerrainGrade::T4],
            Self::Expert => &[TerrainGrade::T5],
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "moderate" => Some(Self::Moderate),
            "hard" => Some(Self::Hard),
            "expert" => Some(Self::Expert),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Mythic,
    Legendary,
}

impl Rarity {
    pub const ALL: [Rarity; 6] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Mythic,
        Rarity::Legendary,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Uncommon => "uncommon",
            Self::Rare => "rare",
            Self::Epic => "epic",
            Self::Mythic => "mythic",
            Self::Legendary => "legendary",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|rarity| rarity.label() == input)
    }

    /// How many cards a summit of this tier hands out.
    pub fn card_drop_label(self) -> &'static str {
        match self {
            Self::Legendary => "1",
            Self::Epic => "2",
            Self::Rare => "3-4",
            _ => "5+",
        }
    }
}

/// Dates are kept exactly as entered; the planner never interprets them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlannerState {
    pub date_range: DateRange,
    pub difficulty: Option<DifficultyTier>,
    pub start_point: String,
    pub team: Roster,
}

impl PlannerState {
    pub fn new(owner_name: &str) -> Self {
        Self {
            date_range: DateRange::default(),
            difficulty: None,
            start_point: String::new(),
            team: Roster::new(owner_name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WizardProgress {
    pub open: Step,
    pub completed: BTreeSet<Step>,
}

impl Default for WizardProgress {
    fn default() -> Self {
        Self {
            open: Step::Basics,
            completed: BTreeSet::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogSource {
    Planner,
    Roster,
    Map,
    Collection,
}

#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub seq: u64,
    pub level: LogLevel,
    pub ts_ms: Option<i64>,
    pub source: LogSource,
    pub message: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, source: LogSource, message: impl Into<String>) -> Self {
        Self {
            seq: 0,
            level,
            ts_ms: None,
            source,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogBuffer {
    cap: usize,
    next_seq: u64,
    buf: VecDeque<LogEntry>,
}

impl LogBuffer {
    pub fn new(cap: usize) -> Self {
        Self {
            cap: cap.max(1),
            next_seq: 1,
            buf: VecDeque::with_capacity(cap.max(1)),
        }
    }

    pub fn append(&mut self, mut entry: LogEntry) {
        entry.seq = self.next_seq;
        self.next_seq += 1;
        if entry.ts_ms.is_none() {
            entry.ts_ms = Some(chrono::Utc::now().timestamp_millis());
        }

        if self.buf.len() == self.cap {
            self.buf.pop_front();
        }
        self.buf.push_back(entry);
    }

    pub fn clear(&mut self) {
        self.buf.clear();
        self.next_seq = 1;
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.buf.iter()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new(2_000)
    }
}

/// Everything one interactive session owns. The planner and map halves share
/// nothing but the activity log.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub planner: Wizard,
    pub map: MapState,
    pub collection: CollectionView,
    pub logs: LogBuffer,
}

impl SessionState {
    pub fn new(config: &Config) -> Self {
        Self {
            planner: Wizard::new(&config.planner.owner_name),
            map: MapState::from_config(&config.map),
            collection: CollectionView::default(),
            logs: LogBuffer::new(config.log_capacity),
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn steps_chain_in_order() {
        let forward: Vec<Option<Step>> = Step::ALL.iter().map(|step| step.next()).collect();
        assert_eq!(
            forward,
            vec![
                Some(Step::StartPoint),
                Some(Step::Team),
                Some(Step::Search),
                None
            ]
        );
        assert_eq!(Step::Basics.prev(), None);
        assert_eq!(Step::parse("start_point"), Some(Step::StartPoint));
        assert_eq!(Step::parse("StartPoint"), Some(Step::StartPoint));
        assert_eq!(Step::parse("summit"), None);
    }

    #[test]
    fn difficulty_tiers_cover_all_grades_once() {
        let grades: Vec<TerrainGrade> = [
            DifficultyTier::Easy,
            DifficultyTier::Moderate,
            DifficultyTier::Hard,
            DifficultyTier::Expert,
        ]
        .iter()
        .flat_map(|tier| tier.grades().iter().copied())
        .collect();
        assert_eq!(
            grades,
            vec![
                TerrainGrade::T1,
                TerrainGrade::T2,
                TerrainGrade::T3,
                TerrainGrade::T4,
                TerrainGrade::T5
            ]
        );
        assert_eq!(DifficultyTier::parse("EXPERT"), Some(DifficultyTier::Expert));
    }

    #[test]
    fn rarity_parse_and_drops() {
        assert_eq!(Rarity::parse("Mythic"), Some(Rarity::Mythic));
        assert_eq!(Rarity::parse("shiny"), None);
        assert_eq!(Rarity::Mythic.card_drop_label(), "5+");
        assert_eq!(Rarity::Legendary.card_drop_label(), "1");
    }
}
