//! Settings store port for the host platform's option storage.
//!
//! The host owns persistence, its settings UI, and its sanitize/save cycle.
//! This crate only reads options back after that cycle has run, and writes
//! through `persist_options` when an embedding host asks it to seed values.
//!
//! Values are plain strings; checkbox-type options store the literal `"yes"`
//! when enabled.

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;

/// Port for the host platform's option storage.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Read a single option by key. `None` when the option was never set.
    async fn get_option(&self, name: &str) -> Option<String>;

    /// Persist a batch of options through the host's storage.
    async fn persist_options(
        &self,
        options: HashMap<String, String>,
    ) -> Result<(), SettingsError>;
}

/// Errors from the host's option storage.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings storage failed: {0}")]
    Storage(String),
}
