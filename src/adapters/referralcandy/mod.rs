//! ReferralCandy service adapters.

mod api_client;
mod mock_referral_api;

pub use api_client::ReferralCandyClient;
pub use mock_referral_api::MockReferralApi;
