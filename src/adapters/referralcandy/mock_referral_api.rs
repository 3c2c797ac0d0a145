//! Mock referral API for testing.
//!
//! Records removal calls and can be configured to reject them, so handler
//! tests can assert exactly which orders were dispatched without touching
//! the network.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::{IntegrationSettings, OrderId, OrderSnapshot};
use crate::ports::{ReferralApi, ReferralApiError};

/// Mock referral API with call tracking and rejection injection.
///
/// # Example
///
/// ```ignore
/// let mock = MockReferralApi::new();
/// // ... exercise a handler ...
/// assert_eq!(mock.removal_calls(), vec![OrderId(42)]);
/// ```
#[derive(Default)]
pub struct MockReferralApi {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Orders removal was requested for, in call order.
    calls: Vec<OrderId>,

    /// When set, every call is rejected with this status and body.
    rejection: Option<(u16, String)>,
}

impl MockReferralApi {
    /// Create a mock that accepts every removal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that rejects every removal.
    pub fn rejecting(status: u16, body: impl Into<String>) -> Self {
        let mock = Self::new();
        mock.inner.lock().unwrap().rejection = Some((status, body.into()));
        mock
    }

    /// Order ids removal was requested for, in call order.
    pub fn removal_calls(&self) -> Vec<OrderId> {
        self.inner.lock().unwrap().calls.clone()
    }

    /// Number of removal calls received.
    pub fn call_count(&self) -> usize {
        self.inner.lock().unwrap().calls.len()
    }
}

#[async_trait]
impl ReferralApi for MockReferralApi {
    async fn remove_referral(
        &self,
        order: &OrderSnapshot,
        _settings: &IntegrationSettings,
    ) -> Result<(), ReferralApiError> {
        let mut state = self.inner.lock().unwrap();
        state.calls.push(order.id);

        if let Some((status, body)) = &state.rejection {
            return Err(ReferralApiError::Rejected {
                status: *status,
                body: body.clone(),
            });
        }
        Ok(())
    }
}
