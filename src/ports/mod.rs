//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Host-side Ports
//!
//! - `SettingsStore` - The host platform's option storage
//! - `OrderReader` - Read-only access to host orders
//!
//! ## Service-side Ports
//!
//! - `ReferralApi` - The external referral service

mod order_reader;
mod referral_api;
mod settings_store;

pub use order_reader::{OrderReadError, OrderReader};
pub use referral_api::{ReferralApi, ReferralApiError};
pub use settings_store::{SettingsError, SettingsStore};
