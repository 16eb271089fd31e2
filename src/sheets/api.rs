use super::dto::ValuesResponse;
use crate::catalog::model::Catalog;
use crate::config::model::SheetsConfig;
use crate::sync::source::CatalogSource;
use async_trait::async_trait;
use reqwest::{Client, Url};
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// No usable API key, nothing was requested
    #[error("sync is disabled")]
    SyncDisabled,

    #[error("Failed to fetch data from Google Sheets: {0}")]
    Transport(String),

    #[error("Unexpected response from Google Sheets: {0}")]
    MalformedPayload(String),
}

pub struct SheetsAPI {
    client: Client,
    config: SheetsConfig,
}

impl SheetsAPI {
    pub fn new(config: SheetsConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| FetchError::Transport(format!("couldn't build HTTP client ({})", err)))?;

        Ok(Self { client, config })
    }

    /**
    Reads the configured range once and maps every row after the header to an event.
    No retries; a failed read is reported as is.
    */
    #[tracing::instrument(skip(self), fields(sheet = %self.config.sheet_id, range = %self.config.range))]
    pub async fn fetch_catalog(&self) -> Result<Catalog, FetchError> {
        let api_key = match self.config.api_key.as_deref() {
            Some(key) if self.config.is_enabled() => key,
            _ => {
                warn!("No usable API key, skipping fetch");
                return Err(FetchError::SyncDisabled);
            }
        };

        info!("Fetching events");

        let response = self
            .client
            .get(values_url(&self.config)?)
            .query(&[("key", api_key)])
            .send()
            .await
            .map_err(|err| {
                // The URL carries the API key
                let err = err.without_url();
                error!("Request failed: {:?}", err);
                FetchError::Transport(err.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("Request failed with status {}", status);
            return Err(FetchError::Transport(format!("status {}", status)));
        }

        let body = response.text().await.map_err(|err| {
            let err = err.without_url();
            error!("Received invalid response: {:?}", err);
            FetchError::Transport(err.to_string())
        })?;

        let parsed_response = serde_json::from_str::<ValuesResponse>(&body).map_err(|err| {
            error!("Response parse failed: {:?}", err);
            FetchError::MalformedPayload(err.to_string())
        })?;

        match parsed_response.to_catalog() {
            Ok(catalog) => {
                info!("Fetched {} events", catalog.len());
                Ok(catalog)
            }
            Err(err) => {
                error!("Couldn't map rows: {}", err);
                Err(err)
            }
        }
    }
}

/// `{base_url}/{sheet_id}/values/{range}`, each segment percent-encoded so sheet
/// names with spaces, `#` or `?` stay in the path.
pub fn values_url(config: &SheetsConfig) -> Result<Url, FetchError> {
    let invalid_base =
        || FetchError::Transport(format!("invalid Sheets base URL '{}'", config.base_url));

    let mut url = Url::parse(&config.base_url).map_err(|_| invalid_base())?;

    url.path_segments_mut()
        .map_err(|_| invalid_base())?
        .pop_if_empty()
        .extend([config.sheet_id.as_str(), "values", config.range.as_str()]);

    Ok(url)
}

#[async_trait]
impl CatalogSource for SheetsAPI {
    fn is_enabled(&self) -> bool {
        self.config.is_enabled()
    }

    async fn fetch(&self) -> Result<Catalog, FetchError> {
        self.fetch_catalog().await
    }
}
