use std::fmt::{Debug, Formatter};
use std::time::Duration;

pub const API_KEY_PLACEHOLDER: &str = "YOUR_GOOGLE_API_KEY_HERE";
pub const DEFAULT_SHEETS_BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";
pub const DEFAULT_RANGE: &str = "Events!A:J";
pub const DEFAULT_SYNC_INTERVAL: Duration = Duration::from_secs(5 * 60);
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct Config {
    pub sheets: SheetsConfig,
    pub sync: SyncConfig,
    pub loki_url: Option<String>,
}

#[derive(Clone)]
pub struct SheetsConfig {
    pub base_url: String,
    pub sheet_id: String,
    pub api_key: Option<String>,
    /// Cell range in A1 notation, e.g. `Events!A:J`
    pub range: String,
    pub timeout: Duration,
}

impl SheetsConfig {
    pub fn new(sheet_id: &str, api_key: Option<&str>) -> Self {
        Self {
            base_url: DEFAULT_SHEETS_BASE_URL.to_string(),
            sheet_id: sheet_id.to_string(),
            api_key: api_key.map(str::to_string),
            range: DEFAULT_RANGE.to_string(),
            timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    /// Syncing only happens with a real key. A missing or placeholder key
    /// means the fallback catalog stays in place.
    pub fn is_enabled(&self) -> bool {
        match self.api_key.as_deref().map(str::trim) {
            None | Some("") | Some(API_KEY_PLACEHOLDER) => false,
            Some(_) => !self.sheet_id.trim().is_empty(),
        }
    }
}

// Hand-written so the API key never ends up in logs
impl Debug for SheetsConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetsConfig")
            .field("base_url", &self.base_url)
            .field("sheet_id", &self.sheet_id)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("range", &self.range)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub interval: Duration,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_SYNC_INTERVAL,
        }
    }
}
