use serde::Serialize;

use super::state::Rarity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummitCard {
    pub id: u32,
    pub name: &'static str,
    pub elevation_m: u32,
    pub rarity: Rarity,
    pub obtained: bool,
    pub location: &'static str,
    pub description: &'static str,
}

pub const SAMPLE_CARDS: &[SummitCard] = &[
    SummitCard {
        id: 1,
        name: "Mount Rainier",
        elevation_m: 4_392,
        rarity: Rarity::Legendary,
        obtained: true,
        location: "Washington, USA",
        description: "The highest mountain in Washington State and an active stratovolcano.",
    },
    SummitCard {
        id: 2,
        name: "Half Dome",
        elevation_m: 2_694,
        rarity: Rarity::Epic,
        obtained: true,
        location: "Yosemite, California",
        description: "Granite dome rising nearly 1,500 meters above the valley floor.",
    },
    SummitCard {
        id: 3,
        name: "Mount Hood",
        elevation_m: 3_429,
        rarity: Rarity::Rare,
        obtained: true,
        location: "Oregon, USA",
        description: "Oregon's highest peak, home to twelve glaciers.",
    },
    SummitCard {
        id: 4,
        name: "Cascade Pass",
        elevation_m: 1_644,
        rarity: Rarity::Uncommon,
        obtained: false,
        location: "Washington, USA",
        description: "Gateway to the remote wilderness of the North Cascades.",
    },
    SummitCard {
        id: 5,
        name: "Mailbox Peak",
        elevation_m: 1_470,
        rarity: Rarity::Common,
        obtained: true,
        location: "Washington, USA",
        description: "Steep trail topped by a mailbox and wide Cascade views.",
    },
    SummitCard {
        id: 6,
        name: "Mount St. Helens",
        elevation_m: 2_550,
        rarity: Rarity::Rare,
        obtained: false,
        location: "Washington, USA",
        description: "The volcano that erupted in 1980, still reshaping its landscape.",
    },
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Ownership {
    #[default]
    All,
    Obtained,
    Missing,
}

impl Ownership {
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Obtained => "obtained",
            Self::Missing => "missing",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "all" => Some(Self::All),
            "obtained" => Some(Self::Obtained),
            "missing" => Some(Self::Missing),
            _ => None,
        }
    }

    fn admits(self, card: &SummitCard) -> bool {
        match self {
            Self::All => true,
            Self::Obtained => card.obtained,
            Self::Missing => !card.obtained,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CollectionFilter {
    pub ownership: Ownership,
    pub rarity: Option<Rarity>,
}

impl CollectionFilter {
    pub fn admits(&self, card: &SummitCard) -> bool {
        self.ownership.admits(card) && self.rarity.map_or(true, |rarity| card.rarity == rarity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CollectionStats {
    pub obtained: usize,
    pub total: usize,
    pub percentage: u32,
}

impl CollectionStats {
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.obtained)
    }
}

pub fn collection_stats(cards: &[SummitCard]) -> CollectionStats {
    let total = cards.len();
    let obtained = cards.iter().filter(|card| card.obtained).count();
    let percentage = if total == 0 {
        0
    } else {
        ((obtained as f64 / total as f64) * 100.0).round() as u32
    };
    CollectionStats {
        obtained,
        total,
        percentage,
    }
}

#[derive(Debug, Clone)]
pub struct CollectionView {
    cards: &'static [SummitCard],
    pub filter: CollectionFilter,
}

impl CollectionView {
    pub fn new(cards: &'static [SummitCard]) -> Self {
        Self {
            cards,
            filter: CollectionFilter::default(),
        }
    }

    pub fn cards(&self) -> &'static [SummitCard] {
        self.cards
    }

    pub fn visible_cards(&self) -> Vec<&'static SummitCard> {
        self.cards
            .iter()
            .filter(|card| self.filter.admits(card))
            .collect()
    }

    /// Stats always cover the whole deck, not the filtered view.
    pub fn stats(&self) -> CollectionStats {
        collection_stats(self.cards)
    }
}

impl Default for CollectionView {
    fn default() -> Self {
        Self::new(SAMPLE_CARDS)
    }
}
