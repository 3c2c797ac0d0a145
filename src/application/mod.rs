//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Each handler maps onto one host platform callback.

pub mod handlers;

pub use handlers::{
    CheckCredentialsHandler, OrderStatusError, OrderStatusOutcome,
    ProcessOrderStatusChangeCommand, ProcessOrderStatusChangeHandler, RenderError,
    RenderPurchaseWidgetCommand, RenderPurchaseWidgetHandler,
};
