use crate::catalog::model::{Catalog, EventRecord};
use crate::filter::{filter, QueryState};
use crate::preferences::session::PreferenceStore;
use crate::ranking::{preferred_count, rank};
use crate::sync::scheduler::SyncScheduler;
use std::sync::Arc;
use tracing::debug;

/// What the event grid shows for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryView {
    pub events: Vec<EventRecord>,
    /// Events matching the user's preferences, 0 without a user
    pub preferred: usize,
}

impl DirectoryView {
    pub fn shown(&self) -> usize {
        self.events.len()
    }
}

/// Filter then rank, against a single catalog snapshot.
pub fn build_view(
    catalog: &Catalog,
    query: &QueryState,
    store: Option<&dyn PreferenceStore>,
) -> DirectoryView {
    let preferences = store.and_then(|store| store.preferences());
    let events = rank(filter(catalog, query), preferences);
    let preferred = preferred_count(&events, preferences);

    debug!(
        "Showing {} {}s, {} preferred",
        events.len(),
        query.active_type,
        preferred
    );

    DirectoryView { events, preferred }
}

pub struct EventDirectory {
    scheduler: Arc<SyncScheduler>,
}

impl EventDirectory {
    pub fn new(scheduler: Arc<SyncScheduler>) -> Self {
        Self { scheduler }
    }

    pub fn scheduler(&self) -> &SyncScheduler {
        &self.scheduler
    }

    pub fn view(&self, query: &QueryState, store: Option<&dyn PreferenceStore>) -> DirectoryView {
        build_view(&self.scheduler.catalog(), query, store)
    }
}
