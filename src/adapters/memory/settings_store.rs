//! In-memory settings store.
//!
//! Backs tests and embedding hosts that have no platform option storage of
//! their own.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::ports::{SettingsError, SettingsStore};

/// Settings store holding options in a process-local map.
#[derive(Default)]
pub struct InMemorySettingsStore {
    options: RwLock<HashMap<String, String>>,
}

impl InMemorySettingsStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a single option, as the host's settings form would.
    pub async fn set_option(&self, name: &str, value: &str) {
        self.options
            .write()
            .await
            .insert(name.to_string(), value.to_string());
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn get_option(&self, name: &str) -> Option<String> {
        self.options.read().await.get(name).cloned()
    }

    async fn persist_options(
        &self,
        options: HashMap<String, String>,
    ) -> Result<(), SettingsError> {
        self.options.write().await.extend(options);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let store = InMemorySettingsStore::new();
        store.set_option("app_id", "app-123").await;
        assert_eq!(store.get_option("app_id").await.as_deref(), Some("app-123"));
        assert_eq!(store.get_option("missing").await, None);
    }

    #[tokio::test]
    async fn persist_options_merges_batch() {
        let store = InMemorySettingsStore::new();
        store.set_option("app_id", "old").await;

        let mut batch = HashMap::new();
        batch.insert("app_id".to_string(), "new".to_string());
        batch.insert("secret_key".to_string(), "s".to_string());
        store.persist_options(batch).await.unwrap();

        assert_eq!(store.get_option("app_id").await.as_deref(), Some("new"));
        assert_eq!(store.get_option("secret_key").await.as_deref(), Some("s"));
    }
}
