//! Order read-model.
//!
//! The storefront platform owns the order; this crate only reads a snapshot
//! of the fields the referral service cares about. Snapshots are produced by
//! an [`OrderReader`](crate::ports::OrderReader) adapter and never written
//! back.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Identifier of an order in the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u64);

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Order status as reported by the host platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Awaiting payment.
    Pending,

    /// Payment received, order being fulfilled.
    Processing,

    /// Order fulfilled.
    Completed,

    /// Order cancelled before fulfilment.
    Cancelled,

    /// Order refunded after payment.
    Refunded,

    /// Any other status the host defines (plugins add their own).
    Other(String),
}

impl OrderStatus {
    /// The host's lowercase status slug.
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Refunded => "refunded",
            OrderStatus::Other(s) => s,
        }
    }
}

impl From<&str> for OrderStatus {
    fn from(s: &str) -> Self {
        match s {
            "pending" => OrderStatus::Pending,
            "processing" => OrderStatus::Processing,
            "completed" => OrderStatus::Completed,
            "cancelled" => OrderStatus::Cancelled,
            "refunded" => OrderStatus::Refunded,
            other => OrderStatus::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only snapshot of a host order.
///
/// `created_at` is the order's wall-clock creation time exactly as the host
/// stores it: a naive local datetime with no offset attached. Interpreting it
/// in a concrete timezone is the renderer's job.
///
/// `total` stays a host-formatted decimal string. The purchase signature
/// hashes the amount textually, so reparsing it into a numeric type could
/// change the digest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSnapshot {
    /// Host order identifier.
    pub id: OrderId,

    /// Current order status.
    pub status: OrderStatus,

    /// Creation time in the host's local wall clock.
    pub created_at: NaiveDateTime,

    /// Billing first name (may be empty).
    pub billing_first_name: String,

    /// Billing last name (may be empty).
    pub billing_last_name: String,

    /// Billing email address.
    pub billing_email: String,

    /// Order total, formatted by the host (e.g. "49.90").
    pub total: String,

    /// ISO currency code (e.g. "USD").
    pub currency: String,

    /// Human-readable order number shown to the customer.
    ///
    /// Often equals the order id, but sequential-number plugins may differ.
    pub order_number: String,
}
