use crate::config::model::{
    Config, SheetsConfig, SyncConfig, DEFAULT_FETCH_TIMEOUT, DEFAULT_RANGE,
    DEFAULT_SHEETS_BASE_URL, DEFAULT_SYNC_INTERVAL,
};
use lazy_static::lazy_static;
use regex::Regex;
use std::env;
use std::time::Duration;

lazy_static! {
    static ref RANGE_REGEX: Regex =
        Regex::new(r"^[^!]+![A-Z]+\d*:[A-Z]+\d*$").expect("Failed to create range regex");
}

pub fn load_config() -> Config {
    let sheet_id = env::var("SHEETS_ID").unwrap_or_default();
    let api_key = env::var("SHEETS_API_KEY").ok();
    let base_url = load_string_config("SHEETS_BASE_URL", DEFAULT_SHEETS_BASE_URL);
    let range = load_range_config("SHEETS_RANGE");

    let timeout = load_secs_config("FETCH_TIMEOUT_SECS", DEFAULT_FETCH_TIMEOUT);
    let interval = load_secs_config("SYNC_INTERVAL_SECS", DEFAULT_SYNC_INTERVAL);

    Config {
        sheets: SheetsConfig {
            base_url,
            sheet_id,
            api_key,
            range,
            timeout,
        },
        sync: SyncConfig { interval },
        loki_url: env::var("LOKI_URL").ok(),
    }
}

fn load_string_config(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn load_range_config(name: &str) -> String {
    let range = load_string_config(name, DEFAULT_RANGE);

    if !is_valid_range(&range) {
        panic!(
            "Invalid config '{}'. Expected a range like 'Events!A:J', got '{}'",
            name, range
        );
    }

    range
}

fn load_secs_config(name: &str, default: Duration) -> Duration {
    match env::var(name) {
        Ok(value) => {
            let secs: u64 = value.parse().unwrap_or_else(|_| {
                panic!("Invalid config '{}'. Expected a number of seconds.", name)
            });

            if secs == 0 {
                panic!("Invalid config '{}'. Must be greater than zero.", name);
            }

            Duration::from_secs(secs)
        }
        Err(_) => default,
    }
}

fn is_valid_range(range: &str) -> bool {
    RANGE_REGEX.is_match(range)
}
