use peakly_core::catalog::location_count_label;
use peakly_core::catalog::MarkerAnnotation;
use peakly_core::snapshot::CollectionSnapshot;
use peakly_core::snapshot::MapSnapshot;
use peakly_core::snapshot::PlannerSnapshot;
use peakly_core::state::LogBuffer;
use peakly_core::wizard::PLANNER_STEPS;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Serializes `value` for the structured formats, otherwise uses `text`.
pub fn emit<T: Serialize>(
    value: &T,
    format: OutputFormat,
    text: impl FnOnce() -> String,
) -> Result<String, Box<dyn std::error::Error>> {
    Ok(match format {
        OutputFormat::Text => text(),
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    })
}

pub fn planner_text(planner: &PlannerSnapshot) -> String {
    let mut out = String::new();
    for spec in PLANNER_STEPS.iter() {
        let marker = if planner.completed.contains(&spec.step) {
            "x"
        } else if planner.enabled.contains(&spec.step) {
            " "
        } else {
            "-"
        };
        let open = if planner.open_step == spec.step { ">" } else { " " };
        out.push_str(&format!("{open}[{marker}] {}. {}\n", spec.number, spec.title));
    }

    let dates = &planner.date_range;
    if !dates.start.is_empty() || !dates.end.is_empty() {
        out.push_str(&format!("dates: {} .. {}\n", dates.start, dates.end));
    }
    if let Some(tier) = planner.difficulty {
        out.push_str(&format!("difficulty: {}\n", tier.label()));
    }
    if !planner.start_point.is_empty() {
        out.push_str(&format!("start: {}\n", planner.start_point));
    }

    out.push_str("team:\n");
    for member in &planner.team {
        let role = if member.is_owner { " (owner)" } else { "" };
        out.push_str(&format!(
            "  {:<2} {} [{}]{role}\n",
            member.initials, member.display_name, member.id
        ));
    }

    if !planner.trail_suggestions.is_empty() {
        out.push_str(&format!("trails ({} results):\n", planner.trail_suggestions.len()));
        for trail in &planner.trail_suggestions {
            out.push_str(&format!(
                "  {} | {} mi | {} ft | {} | {} {} | {} | {}\n",
                trail.name,
                trail.distance_miles,
                trail.elevation_gain_ft,
                trail.duration,
                trail.terrain.label(),
                if trail.gear_compatible { "ok" } else { "gear" },
                trail.rarity.label(),
                trail.cards_label()
            ));
        }
    }
    out
}

pub fn map_text(map: &MapSnapshot) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} map @ {:.4}, {:.4} (zoom {})\n",
        map.mode.label(),
        map.viewport.center.lat,
        map.viewport.center.lng,
        map.viewport.zoom
    ));
    if !map.filters.is_empty() {
        out.push_str(&format!("filters: {}\n", map.filters.join(", ")));
    }
    if !map.query.trim().is_empty() {
        out.push_str(&format!("query: {}\n", map.query));
    }
    for marker in &map.visible {
        let note = match marker.annotation {
            Some(MarkerAnnotation::Price { euros }) => format!(" {euros}€"),
            Some(MarkerAnnotation::Difficulty { grade }) => format!(" {}", grade.label()),
            None => String::new(),
        };
        let rarity = marker
            .rarity
            .map(|rarity| format!(" <{}>", rarity.label()))
            .unwrap_or_default();
        out.push_str(&format!(
            "  #{:<3} {:<9} {}{rarity}{note} ({:.2}, {:.2}) [{}]\n",
            marker.id,
            marker.category.label(),
            marker.title,
            marker.position.lat,
            marker.position.lng,
            marker.category.pin_color()
        ));
    }
    out.push_str(&format!("{}\n", location_count_label(map.visible.len())));
    out
}

pub fn collection_text(collection: &CollectionSnapshot) -> String {
    let mut out = String::new();
    let stats = collection.stats;
    out.push_str(&format!(
        "collection: {}% ({} obtained, {} remaining)\n",
        stats.percentage,
        stats.obtained,
        stats.remaining()
    ));
    for card in &collection.visible {
        let owned = if card.obtained { "x" } else { " " };
        out.push_str(&format!(
            "  [{owned}] {} {} m, {} <{}>\n",
            card.name,
            card.elevation_m,
            card.location,
            card.rarity.label()
        ));
    }
    out
}

pub fn logs_text(logs: &LogBuffer) -> String {
    let mut out = String::new();
    for entry in logs.iter() {
        out.push_str(&format!(
            "{:>4} {:?} {:?}: {}\n",
            entry.seq, entry.level, entry.source, entry.message
        ));
    }
    out
}
