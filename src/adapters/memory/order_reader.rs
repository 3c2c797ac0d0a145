//! In-memory order reader.
//!
//! Serves order snapshots from a process-local map for tests and embedding
//! hosts without a platform order backend.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{OrderId, OrderSnapshot};
use crate::ports::{OrderReadError, OrderReader};

/// Order reader backed by a process-local map.
#[derive(Default)]
pub struct InMemoryOrderReader {
    orders: RwLock<HashMap<OrderId, OrderSnapshot>>,
}

impl InMemoryOrderReader {
    /// Create an empty reader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an order snapshot.
    pub async fn insert(&self, order: OrderSnapshot) {
        self.orders.write().await.insert(order.id, order);
    }
}

#[async_trait]
impl OrderReader for InMemoryOrderReader {
    async fn load_order(&self, id: OrderId) -> Result<OrderSnapshot, OrderReadError> {
        self.orders
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(OrderReadError::NotFound(id))
    }
}
