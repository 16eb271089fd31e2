use crate::catalog::model::{Category, Coerce, EventRecord, EventType, Region};
use std::fmt::{Display, Formatter};

pub const ALL: &str = "All";

/// A selector that either matches everything or one specific value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(selected) => selected == value,
        }
    }
}

impl<T: Coerce> Selection<T> {
    /// `"All"` or a canonical value. Anything else is `None`, unlike the lenient
    /// ingestion coercion, since a selector value always comes from [Self::options].
    pub fn parse(raw: &str) -> Option<Self> {
        if raw == ALL {
            return Some(Selection::All);
        }

        raw.parse::<T>().ok().map(Selection::Only)
    }

    /// Options for a selector: `All` followed by every value.
    pub fn options() -> Vec<Self> {
        std::iter::once(Selection::All)
            .chain(T::all().into_iter().map(Selection::Only))
            .collect()
    }
}

impl<T: Display> Display for Selection<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Selection::All => write!(f, "{}", ALL),
            Selection::Only(value) => write!(f, "{}", value),
        }
    }
}

/// Search and filter controls. The active tab is mandatory, there's no "all types".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryState {
    pub active_type: EventType,
    pub search: String,
    pub category: Selection<Category>,
    pub region: Selection<Region>,
}

impl QueryState {
    pub fn new(active_type: EventType) -> Self {
        Self {
            active_type,
            ..Default::default()
        }
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = search.to_string();
        self
    }

    pub fn with_category(mut self, category: Selection<Category>) -> Self {
        self.category = category;
        self
    }

    pub fn with_region(mut self, region: Selection<Region>) -> Self {
        self.region = region;
        self
    }

    pub fn matches(&self, event: &EventRecord) -> bool {
        event.event_type == self.active_type
            && self.category.matches(&event.category)
            && self.region.matches(&event.region)
            && matches_search(event, &self.search.to_lowercase())
    }
}

fn matches_search(event: &EventRecord, needle: &str) -> bool {
    needle.is_empty()
        || [&event.name, &event.location, &event.description]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
}

/// Events passing every predicate of `query`, in catalog order.
pub fn filter(catalog: &[EventRecord], query: &QueryState) -> Vec<EventRecord> {
    catalog
        .iter()
        .filter(|event| query.matches(event))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fallback::fallback_catalog;
    use crate::catalog::model::Status;

    fn event(id: u32, name: &str, category: Category, region: Region, event_type: EventType) -> EventRecord {
        EventRecord {
            id,
            name: name.to_string(),
            date: String::new(),
            location: String::new(),
            entry_fee: String::new(),
            description: String::new(),
            website: String::new(),
            category,
            region,
            status: Status::Confirmed,
            event_type,
        }
    }

    fn ids(events: &[EventRecord]) -> Vec<u32> {
        events.iter().map(|event| event.id).collect()
    }

    #[test_log::test]
    fn when_everything_is_all_should_include_matching_type() {
        let catalog = vec![event(1, "Bluesfest", Category::Music, Region::Ottawa, EventType::Festival)];

        let result = filter(&catalog, &QueryState::new(EventType::Festival));

        assert_eq!(ids(&result), vec![1]);
    }

    #[test_log::test]
    fn should_only_keep_the_active_type() {
        let result = filter(&fallback_catalog(), &QueryState::new(EventType::DayTrip));

        assert_eq!(ids(&result), vec![3, 6, 10]);
        assert!(result.iter().all(|event| event.event_type == EventType::DayTrip));
    }

    #[test_log::test]
    fn should_filter_by_category_and_region() {
        let query = QueryState::new(EventType::Festival)
            .with_category(Selection::Only(Category::Music))
            .with_region(Selection::Only(Region::Montreal));

        let result = filter(&fallback_catalog(), &query);

        assert_eq!(ids(&result), vec![4]);
    }

    #[test_log::test]
    fn should_match_search_in_description_ignoring_case() {
        let mut jazz = event(1, "Summer Nights", Category::Music, Region::Quebec, EventType::Festival);
        jazz.location = "Quebec City, QC".to_string();
        jazz.description = "The best Jazz Festival around".to_string();
        let catalog = vec![jazz];

        let result = filter(&catalog, &QueryState::new(EventType::Festival).with_search("jazz"));

        assert_eq!(ids(&result), vec![1]);
    }

    #[test_log::test]
    fn should_match_search_in_location() {
        let result = filter(
            &fallback_catalog(),
            &QueryState::new(EventType::Activity).with_search("MONTREAL, qc"),
        );

        assert_eq!(ids(&result), vec![5]);
    }

    #[test_log::test]
    fn should_not_match_search_in_other_fields() {
        let mut record = event(1, "Plain", Category::Food, Region::Ontario, EventType::Festival);
        record.website = "https://jazz.example".to_string();
        record.entry_fee = "jazz".to_string();

        let result = filter(&[record], &QueryState::new(EventType::Festival).with_search("jazz"));

        assert!(result.is_empty());
    }

    #[test_log::test]
    fn should_preserve_catalog_order() {
        let catalog = vec![
            event(9, "c", Category::Winter, Region::Quebec, EventType::Festival),
            event(2, "a", Category::Music, Region::Ottawa, EventType::Activity),
            event(5, "b", Category::Food, Region::Ontario, EventType::Festival),
            event(1, "d", Category::Music, Region::Ottawa, EventType::Festival),
        ];

        let result = filter(&catalog, &QueryState::new(EventType::Festival));

        assert_eq!(ids(&result), vec![9, 5, 1]);
    }

    #[test_log::test]
    fn every_result_should_satisfy_the_query() {
        let catalog = fallback_catalog();

        for active_type in EventType::all() {
            for category in Selection::<Category>::options() {
                for region in Selection::<Region>::options() {
                    for search in ["", "ON", "festival", "zzz"] {
                        let query = QueryState::new(active_type)
                            .with_category(category)
                            .with_region(region)
                            .with_search(search);

                        let result = filter(&catalog, &query);

                        assert!(result.iter().all(|event| query.matches(event)));
                        assert_eq!(
                            result.len(),
                            catalog.iter().filter(|event| query.matches(event)).count()
                        );
                    }
                }
            }
        }
    }

    #[test_log::test]
    fn should_parse_selector_values() {
        assert_eq!(Selection::<Category>::parse("All"), Some(Selection::All));
        assert_eq!(
            Selection::<Region>::parse("Ottawa"),
            Some(Selection::Only(Region::Ottawa))
        );
        assert_eq!(Selection::<Region>::parse("Toronto"), None);
    }

    #[test_log::test]
    fn should_list_options_starting_with_all() {
        let labels: Vec<String> = Selection::<Region>::options()
            .iter()
            .map(|option| option.to_string())
            .collect();

        assert_eq!(labels, vec!["All", "Ontario", "Ottawa", "Montreal", "Quebec"]);
    }
}
