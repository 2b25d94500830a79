use serde::Deserialize;
use serde::Serialize;

use super::state::Rarity;
use super::state::TerrainGrade;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerCategory {
    Friend,
    Famous,
    Forest,
    Mountain,
    Viewpoint,
}

impl MarkerCategory {
    pub const ALL: [MarkerCategory; 5] = [
        MarkerCategory::Friend,
        MarkerCategory::Famous,
        MarkerCategory::Forest,
        MarkerCategory::Mountain,
        MarkerCategory::Viewpoint,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Friend => "friend",
            Self::Famous => "famous",
            Self::Forest => "forest",
            Self::Mountain => "mountain",
            Self::Viewpoint => "viewpoint",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|category| category.label() == input)
    }

    pub fn pin_color(self) -> &'static str {
        match self {
            Self::Friend => "blue",
            Self::Famous => "orange",
            Self::Forest => "green",
            Self::Mountain => "purple",
            Self::Viewpoint => "red",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MarkerAnnotation {
    Price { euros: u32 },
    Difficulty { grade: TerrainGrade },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub id: u32,
    pub position: LatLng,
    pub category: MarkerCategory,
    pub title: &'static str,
    pub description: &'static str,
    pub rarity: Option<Rarity>,
    pub annotation: Option<MarkerAnnotation>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Social,
    Personal,
}

impl ViewMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Social => "social",
            Self::Personal => "personal",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "social" => Some(Self::Social),
            "personal" => Some(Self::Personal),
            _ => None,
        }
    }

    /// Each mode has a fixed camera; it does not depend on which markers show.
    pub fn viewport(self) -> MapViewport {
        match self {
            Self::Social => MapViewport {
                center: LatLng {
                    lat: 47.6062,
                    lng: -122.3321,
                },
                zoom: 8,
            },
            Self::Personal => MapViewport {
                center: LatLng {
                    lat: 46.8523,
                    lng: -121.7603,
                },
                zoom: 10,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapViewport {
    pub center: LatLng,
    pub zoom: u8,
}

pub fn markers_for(mode: ViewMode) -> &'static [Marker] {
    match mode {
        ViewMode::Social => SOCIAL_MARKERS,
        ViewMode::Personal => PERSONAL_MARKERS,
    }
}

pub fn location_count_label(count: usize) -> String {
    if count == 1 {
        "1 location".to_string()
    } else {
        format!("{count} locations")
    }
}

pub const SOCIAL_MARKERS: &[Marker] = &[
    Marker {
        id: 1,
        position: LatLng {
            lat: 46.8523,
            lng: -121.7603,
        },
        category: MarkerCategory::Famous,
        title: "Mount Rainier Summit",
        description: "Glaciated stratovolcano and the highest point of the Cascade Range",
        rarity: Some(Rarity::Legendary),
        annotation: Some(MarkerAnnotation::Difficulty {
            grade: TerrainGrade::T5,
        }),
    },
    Marker {
        id: 2,
        position: LatLng {
            lat: 47.5301,
            lng: -121.6271,
        },
        category: MarkerCategory::Friend,
        title: "Mailbox Peak",
        description: "alex_hiker signed the summit mailbox two days ago",
        rarity: Some(Rarity::Common),
        annotation: Some(MarkerAnnotation::Difficulty {
            grade: TerrainGrade::T3,
        }),
    },
    Marker {
        id: 3,
        position: LatLng {
            lat: 48.4754,
            lng: -121.0753,
        },
        category: MarkerCategory::Famous,
        title: "Cascade Pass",
        description: "Gateway to the remote glaciers of the North Cascades",
        rarity: Some(Rarity::Rare),
        annotation: Some(MarkerAnnotation::Difficulty {
            grade: TerrainGrade::T3,
        }),
    },
    Marker {
        id: 4,
        position: LatLng {
            lat: 47.9751,
            lng: -121.4162,
        },
        category: MarkerCategory::Friend,
        title: "Gothic Basin",
        description: "trail_runner camped by Foggy Lake last week",
        rarity: Some(Rarity::Epic),
        annotation: Some(MarkerAnnotation::Difficulty {
            grade: TerrainGrade::T4,
        }),
    },
    Marker {
        id: 5,
        position: LatLng {
            lat: 47.7112,
            lng: -121.3559,
        },
        category: MarkerCategory::Famous,
        title: "Skykomish River Cabin",
        description: "Riverside lodging a short drive from Lake Serene",
        rarity: None,
        annotation: Some(MarkerAnnotation::Price { euros: 85 }),
    },
];

pub const PERSONAL_MARKERS: &[Marker] = &[
    Marker {
        id: 101,
        position: LatLng {
            lat: 48.7768,
            lng: -121.8145,
        },
        category: MarkerCategory::Mountain,
        title: "Mount Baker",
        description: "Planned for June 15 - June 17, 2025",
        rarity: Some(Rarity::Rare),
        annotation: Some(MarkerAnnotation::Difficulty {
            grade: TerrainGrade::T4,
        }),
    },
    Marker {
        id: 102,
        position: LatLng {
            lat: 46.1914,
            lng: -122.1956,
        },
        category: MarkerCategory::Mountain,
        title: "Mount St. Helens",
        description: "Crater rim climb through the 1980 blast zone",
        rarity: Some(Rarity::Mythic),
        annotation: Some(MarkerAnnotation::Difficulty {
            grade: TerrainGrade::T3,
        }),
    },
    Marker {
        id: 103,
        position: LatLng {
            lat: 47.8601,
            lng: -123.9348,
        },
        category: MarkerCategory::Forest,
        title: "Hoh Rain Forest",
        description: "Moss-draped loop through old-growth spruce",
        rarity: Some(Rarity::Common),
        annotation: None,
    },
    Marker {
        id: 104,
        position: LatLng {
            lat: 47.4454,
            lng: -121.4232,
        },
        category: MarkerCategory::Forest,
        title: "Snow Lake Trailhead",
        description: "Saved route start with a paid trailhead lot",
        rarity: None,
        annotation: Some(MarkerAnnotation::Price { euros: 10 }),
    },
    Marker {
        id: 105,
        position: LatLng {
            lat: 46.9146,
            lng: -121.6424,
        },
        category: MarkerCategory::Viewpoint,
        title: "Sunrise Point",
        description: "Early light on the east face of Rainier",
        rarity: Some(Rarity::Uncommon),
        annotation: None,
    },
    Marker {
        id: 106,
        position: LatLng {
            lat: 48.8462,
            lng: -121.6920,
        },
        category: MarkerCategory::Viewpoint,
        title: "Artist Point",
        description: "Shuksan and Baker from the end of the highway",
        rarity: Some(Rarity::Epic),
        annotation: None,
    },
];
