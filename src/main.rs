use eventfinder::catalog::model::{Coerce, EventType};
use eventfinder::config::env_loader::load_config;
use eventfinder::directory::EventDirectory;
use eventfinder::filter::{QueryState, Selection};
use eventfinder::preferences::session::{PreferenceStore, SimulatedSession};
use eventfinder::sheets::api::SheetsAPI;
use eventfinder::sync::scheduler::SyncScheduler;
use eventfinder::tracing::setup_logging;
use std::env;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval_at, Instant};
use tracing::{error, info, warn};

const FIRST_REPORT_DELAY: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() {
    let config = load_config();
    let loki = setup_logging(config.loki_url.as_deref()).await;

    let source = match SheetsAPI::new(config.sheets.clone()) {
        Ok(source) => source,
        Err(err) => {
            error!("Couldn't create the Sheets client: {}", err);
            return;
        }
    };

    let scheduler = Arc::new(SyncScheduler::new(Arc::new(source), &config.sync));
    let directory = EventDirectory::new(scheduler.clone());

    let mut session = SimulatedSession::new();
    if let Ok(email) = env::var("DEMO_EMAIL") {
        if let Err(err) = session.login(&email) {
            warn!("Demo login failed: {}", err);
        }
    }

    let query = demo_query();

    scheduler.start().await;

    let mut report = interval_at(Instant::now() + FIRST_REPORT_DELAY, config.sync.interval);

    loop {
        tokio::select! {
            _ = report.tick() => report_directory(&directory, &session, &query),
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    info!("Shutting down");
    scheduler.shutdown().await;

    if let Some(loki) = loki {
        loki.shutdown().await;
    }
}

/// Search and selectors shared by every tab, from `QUERY_SEARCH`, `QUERY_CATEGORY` and `QUERY_REGION`
fn demo_query() -> QueryState {
    QueryState::default()
        .with_search(&env::var("QUERY_SEARCH").unwrap_or_default())
        .with_category(load_selection("QUERY_CATEGORY"))
        .with_region(load_selection("QUERY_REGION"))
}

fn load_selection<T: Coerce>(key: &str) -> Selection<T> {
    let Ok(raw) = env::var(key) else {
        return Selection::All;
    };

    match Selection::parse(&raw) {
        Some(selection) => selection,
        None => {
            warn!("Unknown {} '{}', showing all", key, raw);
            Selection::All
        }
    }
}

fn report_directory(directory: &EventDirectory, session: &SimulatedSession, query: &QueryState) {
    let status = directory.scheduler().status();

    match (&status.last_error, status.last_sync_at) {
        (Some(err), _) => warn!("Last sync failed: {}", err),
        (None, Some(at)) => info!("Last synced at {}", at),
        (None, None) => info!("Showing the bundled catalog"),
    }

    for event_type in EventType::all() {
        let view = directory.view(
            &QueryState {
                active_type: event_type,
                ..query.clone()
            },
            Some(session as &dyn PreferenceStore),
        );

        info!("Showing {} {}s", view.shown(), event_type);

        if session.is_logged_in() {
            info!("{} match your preferences", view.preferred);
        }

        for event in &view.events {
            info!(
                "  [{}] {} | {} | {} | {}{}",
                event.id,
                event.name,
                event.date,
                event.location,
                event.status,
                if session.is_saved(event.id) { " (saved)" } else { "" }
            );
        }
    }

    report_saved(directory, session);
}

fn report_saved(directory: &EventDirectory, session: &SimulatedSession) {
    let Some(user) = session.current_user() else {
        return;
    };

    let catalog = directory.scheduler().catalog();

    for id in &user.saved_events {
        match catalog.find(*id) {
            Some(event) => info!("Saved: [{}] {} | {}", event.id, event.name, event.date),
            None => warn!("Saved event {} is no longer in the catalog", id),
        }
    }
}
