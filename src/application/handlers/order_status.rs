//! ProcessOrderStatusChangeHandler - Command handler for order status transitions.
//!
//! Invoked by the host once per status transition. When an order reaches a
//! terminal status with the matching removal flag enabled, issues exactly one
//! referral-removal call against the external service. Failures from the
//! removal call propagate to the host unchanged.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::{IntegrationSettings, OrderId, OrderStatus};
use crate::ports::{OrderReadError, OrderReader, ReferralApi, ReferralApiError, SettingsStore};

/// Command to process an order status transition.
#[derive(Debug, Clone)]
pub struct ProcessOrderStatusChangeCommand {
    /// Order whose status changed.
    pub order_id: OrderId,
}

/// Result of processing a status transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderStatusOutcome {
    /// A removal call was issued for this order.
    ReferralRemoved,
    /// The transition did not match any enabled removal rule.
    NoAction,
}

/// Errors from processing a status transition.
#[derive(Debug, Error)]
pub enum OrderStatusError {
    #[error(transparent)]
    Order(#[from] OrderReadError),

    #[error(transparent)]
    ReferralApi(#[from] ReferralApiError),
}

/// Handler for order status transitions.
pub struct ProcessOrderStatusChangeHandler {
    orders: Arc<dyn OrderReader>,
    settings: Arc<dyn SettingsStore>,
    referral_api: Arc<dyn ReferralApi>,
}

impl ProcessOrderStatusChangeHandler {
    pub fn new(
        orders: Arc<dyn OrderReader>,
        settings: Arc<dyn SettingsStore>,
        referral_api: Arc<dyn ReferralApi>,
    ) -> Self {
        Self {
            orders,
            settings,
            referral_api,
        }
    }

    pub async fn handle(
        &self,
        cmd: ProcessOrderStatusChangeCommand,
    ) -> Result<OrderStatusOutcome, OrderStatusError> {
        let order = self.orders.load_order(cmd.order_id).await?;
        let settings = IntegrationSettings::load(self.settings.as_ref()).await;

        let mut removed = false;

        // The two checks are independent, not mutually exclusive. An order
        // carries one status at a time, so at most one call fires per event.
        if order.status == OrderStatus::Cancelled && settings.remove_referral_for_cancelled {
            self.referral_api.remove_referral(&order, &settings).await?;
            removed = true;
        }

        if order.status == OrderStatus::Refunded && settings.remove_referral_for_refunded {
            self.referral_api.remove_referral(&order, &settings).await?;
            removed = true;
        }

        if removed {
            tracing::info!(
                order_id = %order.id,
                status = %order.status,
                "Referral removal dispatched"
            );
            Ok(OrderStatusOutcome::ReferralRemoved)
        } else {
            tracing::debug!(
                order_id = %order.id,
                status = %order.status,
                "Status transition ignored"
            );
            Ok(OrderStatusOutcome::NoAction)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryOrderReader, InMemorySettingsStore, MockReferralApi};
    use crate::domain::settings::{OPTION_REMOVE_FOR_CANCELLED, OPTION_REMOVE_FOR_REFUNDED};
    use crate::domain::OrderSnapshot;
    use chrono::NaiveDate;

    fn order(id: u64, status: OrderStatus) -> OrderSnapshot {
        OrderSnapshot {
            id: OrderId(id),
            status,
            created_at: NaiveDate::from_ymd_opt(2023, 5, 2)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap(),
            billing_first_name: "Jane".to_string(),
            billing_last_name: "Doe".to_string(),
            billing_email: "jane@example.com".to_string(),
            total: "10.00".to_string(),
            currency: "USD".to_string(),
            order_number: id.to_string(),
        }
    }

    struct Fixture {
        orders: Arc<InMemoryOrderReader>,
        settings: Arc<InMemorySettingsStore>,
        api: Arc<MockReferralApi>,
        handler: ProcessOrderStatusChangeHandler,
    }

    fn fixture() -> Fixture {
        let orders = Arc::new(InMemoryOrderReader::new());
        let settings = Arc::new(InMemorySettingsStore::new());
        let api = Arc::new(MockReferralApi::new());
        let handler = ProcessOrderStatusChangeHandler::new(
            orders.clone(),
            settings.clone(),
            api.clone(),
        );
        Fixture {
            orders,
            settings,
            api,
            handler,
        }
    }

    #[tokio::test]
    async fn cancelled_with_flag_issues_one_removal() {
        let f = fixture();
        f.orders.insert(order(7, OrderStatus::Cancelled)).await;
        f.settings.set_option(OPTION_REMOVE_FOR_CANCELLED, "yes").await;

        let outcome = f
            .handler
            .handle(ProcessOrderStatusChangeCommand {
                order_id: OrderId(7),
            })
            .await
            .unwrap();

        assert_eq!(outcome, OrderStatusOutcome::ReferralRemoved);
        assert_eq!(f.api.removal_calls(), vec![OrderId(7)]);
    }

    #[tokio::test]
    async fn cancelled_without_flag_issues_nothing() {
        let f = fixture();
        f.orders.insert(order(7, OrderStatus::Cancelled)).await;

        let outcome = f
            .handler
            .handle(ProcessOrderStatusChangeCommand {
                order_id: OrderId(7),
            })
            .await
            .unwrap();

        assert_eq!(outcome, OrderStatusOutcome::NoAction);
        assert_eq!(f.api.call_count(), 0);
    }

    #[tokio::test]
    async fn refunded_with_flag_issues_one_removal_for_that_order() {
        let f = fixture();
        f.orders.insert(order(42, OrderStatus::Refunded)).await;
        f.settings.set_option(OPTION_REMOVE_FOR_REFUNDED, "yes").await;

        let outcome = f
            .handler
            .handle(ProcessOrderStatusChangeCommand {
                order_id: OrderId(42),
            })
            .await
            .unwrap();

        assert_eq!(outcome, OrderStatusOutcome::ReferralRemoved);
        assert_eq!(f.api.removal_calls(), vec![OrderId(42)]);
    }

    #[tokio::test]
    async fn processing_never_issues_removal() {
        let f = fixture();
        f.orders.insert(order(42, OrderStatus::Processing)).await;
        f.settings.set_option(OPTION_REMOVE_FOR_CANCELLED, "yes").await;
        f.settings.set_option(OPTION_REMOVE_FOR_REFUNDED, "yes").await;

        let outcome = f
            .handler
            .handle(ProcessOrderStatusChangeCommand {
                order_id: OrderId(42),
            })
            .await
            .unwrap();

        assert_eq!(outcome, OrderStatusOutcome::NoAction);
        assert_eq!(f.api.call_count(), 0);
    }

    #[tokio::test]
    async fn cancelled_flag_does_not_cover_refunded_orders() {
        let f = fixture();
        f.orders.insert(order(9, OrderStatus::Refunded)).await;
        f.settings.set_option(OPTION_REMOVE_FOR_CANCELLED, "yes").await;

        let outcome = f
            .handler
            .handle(ProcessOrderStatusChangeCommand {
                order_id: OrderId(9),
            })
            .await
            .unwrap();

        assert_eq!(outcome, OrderStatusOutcome::NoAction);
        assert_eq!(f.api.call_count(), 0);
    }

    #[tokio::test]
    async fn missing_order_propagates_read_error() {
        let f = fixture();
        let err = f
            .handler
            .handle(ProcessOrderStatusChangeCommand {
                order_id: OrderId(404),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            OrderStatusError::Order(OrderReadError::NotFound(OrderId(404)))
        ));
    }

    #[tokio::test]
    async fn service_rejection_propagates_unchanged() {
        let orders = Arc::new(InMemoryOrderReader::new());
        let settings = Arc::new(InMemorySettingsStore::new());
        let api = Arc::new(MockReferralApi::rejecting(401, "bad access id"));
        let handler =
            ProcessOrderStatusChangeHandler::new(orders.clone(), settings.clone(), api.clone());

        orders.insert(order(7, OrderStatus::Cancelled)).await;
        settings.set_option(OPTION_REMOVE_FOR_CANCELLED, "yes").await;

        let err = handler
            .handle(ProcessOrderStatusChangeCommand {
                order_id: OrderId(7),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, OrderStatusError::ReferralApi(_)));
        // The failed call still counted as the one dispatch for this event.
        assert_eq!(api.call_count(), 1);
    }
}
