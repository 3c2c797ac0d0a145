//! ReferralCandy Admin API client.
//!
//! Implements the `ReferralApi` port against the service's v1 admin API.
//! Requests are authenticated with the store's API Access ID and an MD5
//! request signature over the sorted request parameters and the secret key,
//! the same digest family the service uses for purchase reports.
//!
//! # Configuration
//!
//! ```ignore
//! let config = ApiConfig::default();
//! let client = ReferralCandyClient::new(config);
//! ```

use std::time::Duration;

use async_trait::async_trait;
use md5::{Digest, Md5};
use secrecy::ExposeSecret;

use crate::config::ApiConfig;
use crate::domain::{IntegrationSettings, OrderSnapshot};
use crate::ports::{ReferralApi, ReferralApiError};

/// Path of the referral invalidation endpoint.
const INVALIDATE_PATH: &str = "/api/v1/referrals/invalidate.json";

/// ReferralCandy Admin API client.
pub struct ReferralCandyClient {
    config: ApiConfig,
    http_client: reqwest::Client,
}

impl ReferralCandyClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    fn invalidate_url(&self) -> String {
        format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            INVALIDATE_PATH
        )
    }
}

#[async_trait]
impl ReferralApi for ReferralCandyClient {
    async fn remove_referral(
        &self,
        order: &OrderSnapshot,
        settings: &IntegrationSettings,
    ) -> Result<(), ReferralApiError> {
        let timestamp = chrono::Utc::now().timestamp().to_string();
        let params = [
            ("accessID", settings.api_access_id.as_str()),
            ("external_reference_id", order.order_number.as_str()),
            ("timestamp", timestamp.as_str()),
        ];
        let signature = request_signature(settings.secret_key.expose_secret(), &params);

        let mut form: Vec<(&str, &str)> = params.to_vec();
        form.push(("signature", signature.as_str()));

        let response = self
            .http_client
            .post(self.invalidate_url())
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                order_id = %order.id,
                status = status.as_u16(),
                "Referral removal rejected by service"
            );
            return Err(ReferralApiError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(
            order_id = %order.id,
            external_reference_id = %order.order_number,
            "Referral removed"
        );
        Ok(())
    }
}

/// MD5 request signature: digest of the secret key followed by the `k=v`
/// parameter pairs sorted by key and joined with `&`.
fn request_signature(secret_key: &str, params: &[(&str, &str)]) -> String {
    let mut sorted: Vec<&(&str, &str)> = params.iter().collect();
    sorted.sort_by_key(|(k, _)| *k);

    let canonical: Vec<String> = sorted.iter().map(|(k, v)| format!("{}={}", k, v)).collect();

    let mut hasher = Md5::new();
    hasher.update(secret_key.as_bytes());
    hasher.update(canonical.join("&").as_bytes());
    hex::encode(hasher.finalize())
}
