//! RenderPurchaseWidgetHandler - Command handler for confirmation-page renders.
//!
//! Produces the signed post-purchase widget markup for one order view. The
//! host writes the returned string to the page stream; the emitted script
//! then reports the purchase to the referral service from the browser.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use chrono_tz::Tz;
use thiserror::Error;

use crate::domain::{render_widget, IntegrationSettings, OrderId, OrderSnapshot, PurchasePayload};
use crate::ports::{OrderReadError, OrderReader, SettingsStore};

/// Option key under which the host stores its named IANA timezone, set when
/// the site picked a timezone by name rather than a fixed UTC offset.
const OPTION_TIMEZONE: &str = "timezone_string";

/// Command to render the widget for one order.
#[derive(Debug, Clone)]
pub struct RenderPurchaseWidgetCommand {
    /// Order shown on the confirmation page.
    pub order_id: OrderId,
}

/// Errors from rendering the widget.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Order(#[from] OrderReadError),

    #[error("unrecognized site timezone: {0}")]
    InvalidTimezone(String),

    #[error("order creation time does not exist in the site timezone")]
    UnrepresentableOrderTime,
}

/// Handler for confirmation-page widget renders.
pub struct RenderPurchaseWidgetHandler {
    orders: Arc<dyn OrderReader>,
    settings: Arc<dyn SettingsStore>,
}

impl RenderPurchaseWidgetHandler {
    pub fn new(orders: Arc<dyn OrderReader>, settings: Arc<dyn SettingsStore>) -> Self {
        Self { orders, settings }
    }

    pub async fn handle(&self, cmd: RenderPurchaseWidgetCommand) -> Result<String, RenderError> {
        let order = self.orders.load_order(cmd.order_id).await?;
        let settings = IntegrationSettings::load(self.settings.as_ref()).await;

        let timestamp = self.resolve_timestamp(&order).await?;
        let payload = PurchasePayload::build(&order, &settings, timestamp);

        tracing::debug!(
            order_id = %order.id,
            popup = settings.popup,
            "Rendering purchase widget"
        );

        Ok(render_widget(&payload, &settings))
    }

    /// Epoch seconds reported for the purchase.
    ///
    /// With a named site timezone, the order's stored wall time is
    /// interpreted in that zone. Without one, the report carries the current
    /// time rather than the order's own creation time.
    async fn resolve_timestamp(&self, order: &OrderSnapshot) -> Result<i64, RenderError> {
        let timezone = self
            .settings
            .get_option(OPTION_TIMEZONE)
            .await
            .unwrap_or_default();

        if timezone.is_empty() {
            return Ok(Utc::now().timestamp());
        }

        let tz: Tz = timezone
            .parse()
            .map_err(|_| RenderError::InvalidTimezone(timezone.clone()))?;

        // Ambiguous wall times (DST fold) resolve to the earlier instant;
        // nonexistent ones (DST gap) are an error.
        tz.from_local_datetime(&order.created_at)
            .earliest()
            .map(|dt| dt.timestamp())
            .ok_or(RenderError::UnrepresentableOrderTime)
    }
}
