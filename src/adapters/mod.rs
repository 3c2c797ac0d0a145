//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `referralcandy` - Admin API client for the referral service (plus mock)
//! - `memory` - In-memory host collaborators for tests and embedding hosts

pub mod memory;
pub mod referralcandy;

pub use memory::{InMemoryOrderReader, InMemorySettingsStore};
pub use referralcandy::{MockReferralApi, ReferralCandyClient};
