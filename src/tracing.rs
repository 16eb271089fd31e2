use std::io;
use tokio::task::JoinHandle;
use tracing::{info, warn, Level};
use tracing_loki::url::Url;
use tracing_loki::{BackgroundTaskController, Error as LokiError};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{filter, fmt};

const SERVICE_NAME: &str = "eventfinder";

/// Keeps the Loki shipper alive; shut it down before exiting to flush.
pub struct LokiHandle {
    pub controller: BackgroundTaskController,
    pub task: JoinHandle<()>,
}

impl LokiHandle {
    pub async fn shutdown(self) {
        self.controller.shutdown().await;

        if let Err(err) = self.task.await {
            warn!("Loki task ended abnormally: {}", err);
        }
    }
}

/// Logs to stdout, and to Loki when a reachable URL is given.
pub async fn setup_logging(loki_url: Option<&str>) -> Option<LokiHandle> {
    let filter = filter::Targets::new()
        .with_target(SERVICE_NAME, Level::TRACE)
        .with_default(Level::WARN);

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stdout));

    let Some(loki_url) = loki_url else {
        registry.init();
        warn!("Loki URL not provided. Continuing without it.");
        return None;
    };

    let base_url: Url = match loki_url.parse() {
        Ok(url) => url,
        Err(err) => {
            registry.init();
            warn!("Invalid Loki URL '{}' ({}). Continuing without it.", loki_url, err);
            return None;
        }
    };

    if reqwest::get(base_url.clone()).await.is_err() {
        registry.init();
        warn!("Couldn't connect to Loki. Continuing without it.");
        return None;
    }

    match build_loki_layer(base_url) {
        Ok((layer, controller, task)) => {
            registry.with(layer).init();
            let task = tokio::spawn(task);

            info!("Loki initialized");

            Some(LokiHandle { controller, task })
        }
        Err(err) => {
            registry.init();
            warn!("Couldn't set up Loki ({}). Continuing without it.", err);
            None
        }
    }
}

fn build_loki_layer(
    base_url: Url,
) -> Result<
    (
        tracing_loki::Layer,
        BackgroundTaskController,
        tracing_loki::BackgroundTask,
    ),
    LokiError,
> {
    tracing_loki::builder()
        .label("service", SERVICE_NAME)?
        .build_controller_url(base_url)
}
