//! Order reader port.
//!
//! Loads a read-only snapshot of a host order by id. The host's order model
//! stays on its side of the boundary; adapters map it into
//! [`OrderSnapshot`].

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{OrderId, OrderSnapshot};

/// Port for reading host orders.
#[async_trait]
pub trait OrderReader: Send + Sync {
    /// Load the current snapshot of an order.
    async fn load_order(&self, id: OrderId) -> Result<OrderSnapshot, OrderReadError>;
}

/// Errors from loading a host order.
#[derive(Debug, Error)]
pub enum OrderReadError {
    #[error("order {0} not found")]
    NotFound(OrderId),

    #[error("order backend failed: {0}")]
    Backend(String),
}
