use std::collections::BTreeMap;

use super::catalog::markers_for;
use super::catalog::MapViewport;
use super::catalog::Marker;
use super::catalog::MarkerCategory;
use super::catalog::ViewMode;
use super::config::MapConfig;
use super::state::Rarity;

/// A toggleable filter pill. Markers can be selected either by their kind or
/// by their rarity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterTag {
    Category(MarkerCategory),
    Rarity(Rarity),
}

impl FilterTag {
    pub fn label(self) -> &'static str {
        match self {
            Self::Category(category) => category.label(),
            Self::Rarity(rarity) => rarity.label(),
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        MarkerCategory::parse(input)
            .map(Self::Category)
            .or_else(|| Rarity::parse(input).map(Self::Rarity))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    flags: BTreeMap<FilterTag, bool>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from tag names; names that match no tag are skipped.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for name in names {
            set.set_named(name.as_ref(), true);
        }
        set
    }

    pub fn set(&mut self, tag: FilterTag, enabled: bool) {
        self.flags.insert(tag, enabled);
    }

    /// Returns false when the name is not a known tag.
    pub fn set_named(&mut self, name: &str, enabled: bool) -> bool {
        match FilterTag::parse(name) {
            Some(tag) => {
                self.set(tag, enabled);
                true
            }
            None => false,
        }
    }

    pub fn toggle(&mut self, tag: FilterTag) {
        let next = !self.is_enabled(tag);
        self.set(tag, next);
    }

    pub fn clear(&mut self) {
        self.flags.clear();
    }

    pub fn is_enabled(&self, tag: FilterTag) -> bool {
        self.flags.get(&tag).copied().unwrap_or(false)
    }

    pub fn any_enabled(&self) -> bool {
        self.flags.values().any(|enabled| *enabled)
    }

    pub fn enabled_tags(&self) -> impl Iterator<Item = FilterTag> + '_ {
        self.flags
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(tag, _)| *tag)
    }
}

/// An empty selection places no restriction; otherwise any enabled tag the
/// marker carries is enough.
pub fn category_matches(marker: &Marker, filters: &FilterSet) -> bool {
    if !filters.any_enabled() {
        return true;
    }
    filters.is_enabled(FilterTag::Category(marker.category))
        || marker
            .rarity
            .is_some_and(|rarity| filters.is_enabled(FilterTag::Rarity(rarity)))
}

pub fn text_matches(marker: &Marker, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    marker.title.to_lowercase().contains(&query)
        || marker.description.to_lowercase().contains(&query)
}

/// Keeps the source order.
pub fn filter_markers<'m, 'f>(
    markers: &'m [Marker],
    filters: &'f FilterSet,
    query: &'f str,
) -> impl Iterator<Item = &'m Marker> + 'f
where
    'm: 'f,
{
    markers
        .iter()
        .filter(move |marker| category_matches(marker, filters) && text_matches(marker, query))
}

#[derive(Debug, Clone)]
pub struct MapState {
    pub mode: ViewMode,
    pub filters: FilterSet,
    pub query: String,
}

impl MapState {
    pub fn new(mode: ViewMode, filters: FilterSet) -> Self {
        Self {
            mode,
            filters,
            query: String::new(),
        }
    }

    pub fn from_config(config: &MapConfig) -> Self {
        Self::new(
            config.default_mode,
            FilterSet::from_names(&config.default_filters),
        )
    }

    pub fn markers(&self) -> &'static [Marker] {
        markers_for(self.mode)
    }

    /// Recomputed on every call from mode, filters and query.
    pub fn visible_markers(&self) -> Vec<&'static Marker> {
        filter_markers(self.markers(), &self.filters, &self.query).collect()
    }

    pub fn viewport(&self) -> MapViewport {
        self.mode.viewport()
    }

    /// Swaps the marker source. Filters and query are left as they are.
    /// Returns the new viewport when the mode actually changed.
    pub fn set_mode(&mut self, mode: ViewMode) -> Option<MapViewport> {
        if self.mode == mode {
            return None;
        }
        self.mode = mode;
        Some(self.viewport())
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }
}

impl Default for MapState {
    fn default() -> Self {
        Self::from_config(&MapConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::PERSONAL_MARKERS;
    use crate::catalog::SOCIAL_MARKERS;

    fn titles<'a>(markers: impl IntoIterator<Item = &'a Marker>) -> Vec<&'static str> {
        markers.into_iter().map(|marker| marker.title).collect()
    }

    #[test]
    fn empty_filters_and_query_keep_everything_in_order() {
        let filters = FilterSet::new();
        let all = titles(filter_markers(SOCIAL_MARKERS, &filters, ""));
        assert_eq!(all, titles(SOCIAL_MARKERS));
    }

    #[test]
    fn disabled_flags_count_as_empty() {
        let mut filters = FilterSet::new();
        filters.set(FilterTag::Category(MarkerCategory::Forest), false);
        assert!(!filters.any_enabled());
        assert_eq!(
            filter_markers(PERSONAL_MARKERS, &filters, "").count(),
            PERSONAL_MARKERS.len()
        );
    }

    #[test]
    fn enabled_tags_are_or_combined() {
        let mut filters = FilterSet::new();
        filters.set(FilterTag::Category(MarkerCategory::Forest), true);
        filters.set(FilterTag::Category(MarkerCategory::Viewpoint), true);
        assert_eq!(
            titles(filter_markers(PERSONAL_MARKERS, &filters, "")),
            vec![
                "Hoh Rain Forest",
                "Snow Lake Trailhead",
                "Sunrise Point",
                "Artist Point"
            ]
        );
    }

    #[test]
    fn rarity_flags_select_by_tier() {
        let mut filters = FilterSet::new();
        filters.set(FilterTag::Rarity(Rarity::Legendary), true);
        assert_eq!(
            titles(filter_markers(SOCIAL_MARKERS, &filters, "")),
            vec!["Mount Rainier Summit"]
        );

        filters.set(FilterTag::Category(MarkerCategory::Friend), true);
        assert_eq!(
            titles(filter_markers(SOCIAL_MARKERS, &filters, "")),
            vec!["Mount Rainier Summit", "Mailbox Peak", "Gothic Basin"]
        );
    }

    #[test]
    fn query_is_case_insensitive_over_title_and_description() {
        let filters = FilterSet::new();
        assert_eq!(
            titles(filter_markers(SOCIAL_MARKERS, &filters, "RAINIER")),
            vec!["Mount Rainier Summit"]
        );
        assert_eq!(
            titles(filter_markers(SOCIAL_MARKERS, &filters, "lake serene")),
            vec!["Skykomish River Cabin"]
        );
        assert_eq!(filter_markers(SOCIAL_MARKERS, &filters, "   ").count(), 5);
        assert_eq!(filter_markers(SOCIAL_MARKERS, &filters, "zzz").count(), 0);
    }

    #[test]
    fn non_blank_query_is_matched_as_typed() {
        let filters = FilterSet::new();
        assert_eq!(filter_markers(SOCIAL_MARKERS, &filters, "rainier ").count(), 0);
        assert_eq!(
            titles(filter_markers(SOCIAL_MARKERS, &filters, "mount rainier")),
            vec!["Mount Rainier Summit"]
        );
    }

    #[test]
    fn filter_and_query_must_both_match() {
        let mut filters = FilterSet::new();
        filters.set(FilterTag::Category(MarkerCategory::Mountain), true);
        assert_eq!(
            titles(filter_markers(PERSONAL_MARKERS, &filters, "baker")),
            vec!["Mount Baker"]
        );
        assert_eq!(
            filter_markers(PERSONAL_MARKERS, &filters, "artist").count(),
            0
        );
    }

    #[test]
    fn unknown_names_are_ignored() {
        let mut filters = FilterSet::from_names(["mountain", "volcano"]);
        assert_eq!(
            filters.enabled_tags().collect::<Vec<_>>(),
            vec![FilterTag::Category(MarkerCategory::Mountain)]
        );
        let before = filters.clone();
        assert!(!filters.set_named("glacier", true));
        assert_eq!(filters, before);
    }

    #[test]
    fn toggle_flips_flag() {
        let mut filters = FilterSet::new();
        let tag = FilterTag::Rarity(Rarity::Epic);
        filters.toggle(tag);
        assert!(filters.is_enabled(tag));
        filters.toggle(tag);
        assert!(!filters.is_enabled(tag));
    }

    #[test]
    fn mode_switch_keeps_filters_and_reports_viewport() {
        let mut map = MapState::new(ViewMode::Social, FilterSet::new());
        map.filters.set(FilterTag::Rarity(Rarity::Epic), true);
        map.set_query("a");

        assert_eq!(map.set_mode(ViewMode::Social), None);
        assert_eq!(
            map.set_mode(ViewMode::Personal),
            Some(ViewMode::Personal.viewport())
        );
        assert_eq!(titles(map.visible_markers()), vec!["Artist Point"]);
        assert!(map.filters.is_enabled(FilterTag::Rarity(Rarity::Epic)));
        assert_eq!(map.query, "a");
    }

    #[test]
    fn default_map_starts_social_with_mountain_pill() {
        let map = MapState::default();
        assert_eq!(map.mode, ViewMode::Social);
        assert!(map
            .filters
            .is_enabled(FilterTag::Category(MarkerCategory::Mountain)));
    }
}
