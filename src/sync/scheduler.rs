use super::clock::{Clock, SystemClock};
use super::source::CatalogSource;
use crate::catalog::fallback::fallback_catalog;
use crate::catalog::model::Catalog;
use crate::config::model::SyncConfig;
use crate::sheets::api::FetchError;
use arc_swap::ArcSwap;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncStatus {
    pub last_sync_at: Option<DateTime<Utc>>,
    pub is_syncing: bool,
    pub last_error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    Applied { events: usize },
    Failed(FetchError),
    /// Another fetch was in flight, this one was dropped
    AlreadySyncing,
    Disabled,
    /// The scheduler was shut down before the result arrived
    Discarded,
}

/// Keeps the catalog in step with a [CatalogSource].
///
/// Readers grab an `Arc<Catalog>` snapshot; a successful sync swaps in a whole
/// new catalog, a failed one leaves the current snapshot untouched.
pub struct SyncScheduler {
    state: Arc<SyncState>,
    interval: Duration,
    timer: Mutex<Option<JoinHandle<()>>>,
}

struct SyncState {
    source: Arc<dyn CatalogSource>,
    clock: Arc<dyn Clock>,
    catalog: ArcSwap<Catalog>,
    // Only written by the task holding `is_syncing`
    status: ArcSwap<SyncStatus>,
    is_syncing: AtomicBool,
    torn_down: AtomicBool,
    apply_lock: Mutex<()>,
}

/// Releases the single-flight flag even if the sync future is dropped midway.
struct SyncingGuard<'a>(&'a AtomicBool);

impl Drop for SyncingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl SyncScheduler {
    pub fn new(source: Arc<dyn CatalogSource>, config: &SyncConfig) -> Self {
        Self::with_clock(source, config, Arc::new(SystemClock), fallback_catalog())
    }

    pub fn with_clock(
        source: Arc<dyn CatalogSource>,
        config: &SyncConfig,
        clock: Arc<dyn Clock>,
        initial_catalog: Catalog,
    ) -> Self {
        Self {
            state: Arc::new(SyncState {
                source,
                clock,
                catalog: ArcSwap::from_pointee(initial_catalog),
                status: ArcSwap::from_pointee(SyncStatus::default()),
                is_syncing: AtomicBool::new(false),
                torn_down: AtomicBool::new(false),
                apply_lock: Mutex::new(()),
            }),
            interval: config.interval,
            timer: Mutex::new(None),
        }
    }

    pub fn catalog(&self) -> Arc<Catalog> {
        self.state.catalog.load_full()
    }

    pub fn status(&self) -> SyncStatus {
        SyncStatus {
            is_syncing: self.state.is_syncing.load(Ordering::Acquire),
            ..(**self.state.status.load()).clone()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.state.source.is_enabled()
    }

    pub async fn is_running(&self) -> bool {
        self.timer.lock().await.is_some()
    }

    /// Fetches right away, then again on every interval.
    /// Does nothing when syncing is disabled or the timer is already armed.
    pub async fn start(&self) {
        if !self.is_enabled() {
            info!("Sync disabled, keeping the bundled catalog");
            return;
        }

        if self.state.torn_down.load(Ordering::Acquire) {
            warn!("Scheduler was shut down, not starting");
            return;
        }

        let mut timer = self.timer.lock().await;

        if timer.is_some() {
            debug!("Sync timer already running");
            return;
        }

        info!("Starting sync every {:?}", self.interval);

        let state = self.state.clone();
        let period = self.interval;

        // Detached from the timer so an early stop() can't cancel it
        spawn_sync(state.clone());

        *timer = Some(tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                spawn_sync(state.clone());
            }
        }));
    }

    /// Cancels future ticks. A fetch already in flight still gets applied.
    pub async fn stop(&self) {
        if let Some(handle) = self.timer.lock().await.take() {
            handle.abort();
            info!("Sync timer stopped");
        }
    }

    /// Stops the timer and discards whatever an in-flight fetch returns.
    pub async fn shutdown(&self) {
        {
            let _applying = self.state.apply_lock.lock().await;
            self.state.torn_down.store(true, Ordering::Release);
        }

        self.stop().await;
    }

    /// On-demand sync, subject to the same single-flight rule as the timer.
    pub async fn sync_now(&self) -> SyncOutcome {
        self.state.sync().await
    }
}

// Each fetch runs as its own task, so aborting the timer never cancels one midway
fn spawn_sync(state: Arc<SyncState>) {
    tokio::spawn(async move {
        state.sync().await;
    });
}

impl Drop for SyncScheduler {
    fn drop(&mut self) {
        self.state.torn_down.store(true, Ordering::Release);

        if let Some(handle) = self.timer.get_mut().take() {
            handle.abort();
        }
    }
}

impl SyncState {
    #[tracing::instrument(skip(self))]
    async fn sync(&self) -> SyncOutcome {
        if !self.source.is_enabled() {
            return SyncOutcome::Disabled;
        }

        if self.torn_down.load(Ordering::Acquire) {
            return SyncOutcome::Discarded;
        }

        if self
            .is_syncing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("Sync already in flight, dropping request");
            return SyncOutcome::AlreadySyncing;
        }

        let _guard = SyncingGuard(&self.is_syncing);

        let result = self.source.fetch().await;

        // Held while applying so shutdown() can't land between the check and the swap
        let _applying = self.apply_lock.lock().await;

        if self.torn_down.load(Ordering::Acquire) {
            info!("Scheduler shut down while fetching, discarding result");
            return SyncOutcome::Discarded;
        }

        match result {
            Ok(catalog) => {
                let events = catalog.len();
                let now = self.clock.now();

                self.catalog.store(Arc::new(catalog));
                self.update_status(|status| {
                    status.last_sync_at = Some(now);
                    status.last_error = None;
                });

                info!("Catalog replaced with {} events", events);

                SyncOutcome::Applied { events }
            }
            Err(err) => {
                error!("Sync failed, keeping current catalog: {}", err);

                self.update_status(|status| status.last_error = Some(err.to_string()));

                SyncOutcome::Failed(err)
            }
        }
    }

    fn update_status(&self, update: impl FnOnce(&mut SyncStatus)) {
        let mut status = (**self.status.load()).clone();

        update(&mut status);

        self.status.store(Arc::new(status));
    }
}
