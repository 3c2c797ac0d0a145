//! Application handlers.
//!
//! One handler per host callback:
//!
//! ## Commands
//! - Processing order status transitions (conditional referral removal)
//! - Rendering the post-purchase widget on the confirmation page
//!
//! ## Queries
//! - Checking credentials for the admin notice

mod credential_notice;
mod order_status;
mod render_purchase;

pub use credential_notice::CheckCredentialsHandler;
pub use order_status::{
    OrderStatusError, OrderStatusOutcome, ProcessOrderStatusChangeCommand,
    ProcessOrderStatusChangeHandler,
};
pub use render_purchase::{RenderError, RenderPurchaseWidgetCommand, RenderPurchaseWidgetHandler};
