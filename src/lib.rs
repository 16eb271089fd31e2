pub mod catalog;
pub mod config;
pub mod directory;
pub mod filter;
pub mod preferences;
pub mod ranking;
pub mod sheets;
pub mod sync;
pub mod tracing;
