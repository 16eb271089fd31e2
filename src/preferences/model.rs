use crate::catalog::model::{Category, EventRecord, EventType, Region};
use itertools::Itertools;
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPreferences {
    pub categories: BTreeSet<Category>,
    pub regions: BTreeSet<Region>,
    /// Kept for the profile, ranking ignores it
    pub types: BTreeSet<EventType>,
}

impl UserPreferences {
    pub fn new(
        categories: impl IntoIterator<Item = Category>,
        regions: impl IntoIterator<Item = Region>,
        types: impl IntoIterator<Item = EventType>,
    ) -> Self {
        Self {
            categories: categories.into_iter().collect(),
            regions: regions.into_iter().collect(),
            types: types.into_iter().collect(),
        }
    }

    /// An event has affinity when its category or its region is preferred.
    pub fn has_affinity(&self, event: &EventRecord) -> bool {
        self.categories.contains(&event.category) || self.regions.contains(&event.region)
    }
}

impl Display for UserPreferences {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "categories=[{}] regions=[{}] types=[{}]",
            self.categories.iter().join(", "),
            self.regions.iter().join(", "),
            self.types.iter().join(", ")
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: Uuid,
    pub email: String,
    pub preferences: UserPreferences,
    pub saved_events: BTreeSet<u32>,
}

impl UserProfile {
    pub fn new(email: &str, preferences: UserPreferences, saved_events: BTreeSet<u32>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.to_string(),
            preferences,
            saved_events,
        }
    }

    pub fn is_saved(&self, event_id: u32) -> bool {
        self.saved_events.contains(&event_id)
    }

    /// Returns whether the event is saved afterwards
    pub fn toggle_saved(&mut self, event_id: u32) -> bool {
        if self.saved_events.remove(&event_id) {
            false
        } else {
            self.saved_events.insert(event_id);
            true
        }
    }
}
