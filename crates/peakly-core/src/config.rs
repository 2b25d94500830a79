use serde::{Deserialize, Serialize};

use super::catalog::ViewMode;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub planner: PlannerConfig,
    pub map: MapConfig,
    pub log_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            planner: PlannerConfig::default(),
            map: MapConfig::default(),
            log_capacity: 2_000,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlannerConfig {
    pub owner_name: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            owner_name: "You (Solo)".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MapConfig {
    pub default_mode: ViewMode,
    pub default_filters: Vec<String>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_mode: ViewMode::Social,
            default_filters: vec!["mountain".to_string()],
        }
    }
}
