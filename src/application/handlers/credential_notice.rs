//! CheckCredentialsHandler - Admin notice for incomplete credentials.
//!
//! Runs on every admin page load. A missing credential never blocks anything;
//! it only yields a warning block for the host to show.

use std::sync::Arc;

use crate::domain::IntegrationSettings;
use crate::ports::SettingsStore;

/// Handler producing the missing-credentials admin notice.
pub struct CheckCredentialsHandler {
    settings: Arc<dyn SettingsStore>,
}

impl CheckCredentialsHandler {
    pub fn new(settings: Arc<dyn SettingsStore>) -> Self {
        Self { settings }
    }

    /// `None` when all credentials are present; otherwise the warning markup
    /// listing exactly the missing credential names.
    pub async fn handle(&self) -> Option<String> {
        let settings = IntegrationSettings::load(self.settings.as_ref()).await;
        let missing = settings.missing_credentials();
        if missing.is_empty() {
            return None;
        }

        tracing::warn!(missing = ?missing, "ReferralCandy credentials incomplete");

        let mut message = String::from(
            "<strong>ReferralCandy</strong>: Please make sure the following keys \
             are present for your integration to work properly:",
        );
        for name in &missing {
            message.push_str("<br> - ");
            message.push_str(name);
        }

        Some(format!(
            "<div class=\"notice notice-warning\"><p>{}</p></div>",
            message
        ))
    }
}
