use crate::catalog::model::EventRecord;
use crate::preferences::model::UserPreferences;

/// Moves events matching the user's preferred categories or regions to the front.
///
/// This is a stable partition, not a score: both groups keep their input order.
/// Without preferences the input comes back untouched.
pub fn rank(events: Vec<EventRecord>, preferences: Option<&UserPreferences>) -> Vec<EventRecord> {
    let Some(preferences) = preferences else {
        return events;
    };

    let (mut preferred, others): (Vec<EventRecord>, Vec<EventRecord>) = events
        .into_iter()
        .partition(|event| preferences.has_affinity(event));

    preferred.extend(others);
    preferred
}

/// How many of `events` the user has affinity with
pub fn preferred_count(events: &[EventRecord], preferences: Option<&UserPreferences>) -> usize {
    preferences.map_or(0, |preferences| {
        events
            .iter()
            .filter(|event| preferences.has_affinity(event))
            .count()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fallback::fallback_catalog;
    use crate::catalog::model::{Category, EventType, Region, Status};
    use itertools::Itertools;

    fn event(id: u32, category: Category, region: Region) -> EventRecord {
        EventRecord {
            id,
            name: format!("Event {}", id),
            date: String::new(),
            location: String::new(),
            entry_fee: String::new(),
            description: String::new(),
            website: String::new(),
            category,
            region,
            status: Status::Tba,
            event_type: EventType::Festival,
        }
    }

    fn ids(events: &[EventRecord]) -> Vec<u32> {
        events.iter().map(|event| event.id).collect()
    }

    fn sample() -> Vec<EventRecord> {
        vec![
            event(1, Category::Food, Region::Quebec),
            event(2, Category::Music, Region::Montreal),
            event(3, Category::Winter, Region::Ottawa),
            event(4, Category::Summer, Region::Ontario),
            event(5, Category::Music, Region::Ottawa),
            event(6, Category::Cultural, Region::Quebec),
        ]
    }

    #[test_log::test]
    fn without_preferences_should_keep_order() {
        assert_eq!(ids(&rank(sample(), None)), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test_log::test]
    fn should_put_category_or_region_matches_first() {
        let preferences = UserPreferences::new([Category::Music], [Region::Ottawa], []);

        let ranked = rank(sample(), Some(&preferences));

        assert_eq!(ids(&ranked), vec![2, 3, 5, 1, 4, 6]);
    }

    #[test_log::test]
    fn when_a_single_record_matches_category_should_be_preferred() {
        let preferences = UserPreferences::new([Category::Music], [], []);
        let events = vec![event(1, Category::Music, Region::Ottawa)];

        let ranked = rank(events, Some(&preferences));

        assert_eq!(ids(&ranked), vec![1]);
        assert_eq!(preferred_count(&ranked, Some(&preferences)), 1);
    }

    #[test_log::test]
    fn should_ignore_type_preferences() {
        let preferences = UserPreferences::new([], [], [EventType::Festival]);

        assert_eq!(ids(&rank(sample(), Some(&preferences))), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(preferred_count(&sample(), Some(&preferences)), 0);
    }

    #[test_log::test]
    fn should_be_a_permutation_with_preferred_first() {
        let catalog = fallback_catalog().to_vec();
        let preferences = UserPreferences::new([Category::Winter], [Region::Montreal], []);

        let ranked = rank(catalog.clone(), Some(&preferences));

        assert_eq!(
            ids(&ranked).into_iter().sorted().collect_vec(),
            ids(&catalog).into_iter().sorted().collect_vec()
        );

        let split = preferred_count(&ranked, Some(&preferences));
        assert!(ranked[..split].iter().all(|e| preferences.has_affinity(e)));
        assert!(ranked[split..].iter().all(|e| !preferences.has_affinity(e)));

        // Each group keeps its catalog order
        assert!(ranked[..split].windows(2).all(|pair| pair[0].id < pair[1].id));
        assert!(ranked[split..].windows(2).all(|pair| pair[0].id < pair[1].id));
    }

    #[test_log::test]
    fn should_be_idempotent() {
        let preferences = UserPreferences::new([Category::Cultural], [Region::Ontario], []);

        let once = rank(sample(), Some(&preferences));
        let twice = rank(once.clone(), Some(&preferences));

        assert_eq!(once, twice);
    }

    #[test_log::test]
    fn without_preferences_count_should_be_zero() {
        assert_eq!(preferred_count(&sample(), None), 0);
    }
}
