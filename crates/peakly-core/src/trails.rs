use serde::Serialize;

use super::state::Rarity;
use super::state::TerrainGrade;

/// A trail offered once the planner reaches its final step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrailSuggestion {
    pub name: &'static str,
    pub distance_miles: f64,
    pub elevation_gain_ft: u32,
    pub duration: &'static str,
    pub terrain: TerrainGrade,
    pub gear_compatible: bool,
    pub rarity: Rarity,
}

impl TrailSuggestion {
    pub fn cards_label(&self) -> String {
        format!("Cards: {}", self.rarity.card_drop_label())
    }
}

pub const SAMPLE_TRAILS: &[TrailSuggestion] = &[
    TrailSuggestion {
        name: "Eagle Ridge Trail",
        distance_miles: 4.2,
        elevation_gain_ft: 870,
        duration: "2h 15m",
        terrain: TerrainGrade::T2,
        gear_compatible: true,
        rarity: Rarity::Common,
    },
    TrailSuggestion {
        name: "Lake Serene",
        distance_miles: 8.2,
        elevation_gain_ft: 2_000,
        duration: "5h 30m",
        terrain: TerrainGrade::T3,
        gear_compatible: true,
        rarity: Rarity::Uncommon,
    },
    TrailSuggestion {
        name: "Cascade Pass",
        distance_miles: 7.4,
        elevation_gain_ft: 1_800,
        duration: "4h 45m",
        terrain: TerrainGrade::T3,
        gear_compatible: false,
        rarity: Rarity::Rare,
    },
    TrailSuggestion {
        name: "Gothic Basin",
        distance_miles: 9.2,
        elevation_gain_ft: 2_840,
        duration: "7h",
        terrain: TerrainGrade::T4,
        gear_compatible: false,
        rarity: Rarity::Epic,
    },
    TrailSuggestion {
        name: "Mount Rainier Summit",
        distance_miles: 16.0,
        elevation_gain_ft: 9_000,
        duration: "2 days",
        terrain: TerrainGrade::T5,
        gear_compatible: false,
        rarity: Rarity::Legendary,
    },
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn card_labels_follow_rarity() {
        let labels: Vec<String> = SAMPLE_TRAILS.iter().map(|t| t.cards_label()).collect();
        assert_eq!(
            labels,
            vec!["Cards: 5+", "Cards: 5+", "Cards: 3-4", "Cards: 2", "Cards: 1"]
        );
    }
}
