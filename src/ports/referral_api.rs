//! Referral service port.
//!
//! The referral service tracks an association between each order and the
//! customer who referred it. The only operation this integration drives is
//! removing that association when an order is cancelled or refunded.
//!
//! There is deliberately no retry or idempotency layer here: the host fires
//! each status transition once, and the service tolerates repeated removal
//! calls for the same order.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{IntegrationSettings, OrderSnapshot};

/// Port for the external referral service.
#[async_trait]
pub trait ReferralApi: Send + Sync {
    /// Remove the referral associated with the given order.
    ///
    /// Failures are returned as-is; callers propagate them to the host's own
    /// error handling rather than observing or retrying.
    async fn remove_referral(
        &self,
        order: &OrderSnapshot,
        settings: &IntegrationSettings,
    ) -> Result<(), ReferralApiError>;
}

/// Errors from referral service calls.
#[derive(Debug, Error)]
pub enum ReferralApiError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("referral service rejected the request ({status}): {body}")]
    Rejected { status: u16, body: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn referral_api_is_object_safe() {
        fn _accepts_dyn(_api: &dyn ReferralApi) {}
    }

    #[test]
    fn rejected_error_reports_status() {
        let err = ReferralApiError::Rejected {
            status: 401,
            body: "bad access id".to_string(),
        };
        assert!(err.to_string().contains("401"));
        assert!(err.to_string().contains("bad access id"));
    }
}
