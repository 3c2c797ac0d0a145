//! Purchase report payload.
//!
//! On every confirmation-page render the integration rebuilds a payload
//! describing the order and signs it so the referral service can check the
//! report's integrity. Nothing here is cached or persisted.
//!
//! # Signature
//!
//! ```text
//! signature = md5(email + "," + first_name + "," + amount + "," + timestamp + "," + secret_key)
//! ```
//!
//! The email in the signature input is always the raw billing email; the
//! popup display mode only changes how the email is *emitted* in the widget
//! attributes.

use md5::{Digest, Md5};
use secrecy::ExposeSecret;
use serde::Serialize;

use super::order::OrderSnapshot;
use super::settings::IntegrationSettings;

/// Element id the popup ("popsicle") loader script looks up.
pub const POPSICLE_ELEMENT_ID: &str = "refcandy-popsicle";

/// Element id the embedded ("mint") loader script looks up.
pub const MINT_ELEMENT_ID: &str = "refcandy-mint";

/// The signed purchase report, one field per widget data attribute.
#[derive(Debug, Clone, Serialize)]
pub struct PurchasePayload {
    /// Widget element id; selects which loader script picks the payload up.
    pub element_id: &'static str,

    /// ReferralCandy app ID.
    pub app_id: String,

    /// Customer first name, never empty (see [`fallback_first_name`]).
    pub first_name: String,

    /// Customer last name, may be empty.
    pub last_name: String,

    /// Billing email as emitted: raw in popup mode, percent-encoded otherwise.
    /// The two loader script variants expect different encodings.
    pub email: String,

    /// Order total, host-formatted.
    pub amount: String,

    /// ISO currency code.
    pub currency: String,

    /// Purchase timestamp in epoch seconds.
    pub timestamp: i64,

    /// Order number linking the report back to the host order.
    pub external_reference_id: String,

    /// MD5 integrity signature over the report.
    pub signature: String,
}

impl PurchasePayload {
    /// Build the report for one order render.
    ///
    /// `timestamp` is resolved by the caller (site-timezone conversion or
    /// wall-clock fallback) because the rule needs the host's timezone
    /// option, which lives outside the domain.
    pub fn build(order: &OrderSnapshot, settings: &IntegrationSettings, timestamp: i64) -> Self {
        let mut first_name = order.billing_first_name.clone();
        // An empty first name would break the service's checksum expectations
        // downstream, so derive one from the email's local part.
        if strip_markup(&first_name).is_empty() {
            first_name = fallback_first_name(&order.billing_email);
        }

        let signature = purchase_signature(
            &order.billing_email,
            &first_name,
            &order.total,
            timestamp,
            settings.secret_key.expose_secret(),
        );

        let email = if settings.popup {
            order.billing_email.clone()
        } else {
            urlencoding::encode(&order.billing_email).into_owned()
        };

        Self {
            element_id: if settings.popup {
                POPSICLE_ELEMENT_ID
            } else {
                MINT_ELEMENT_ID
            },
            app_id: settings.app_id.clone(),
            first_name,
            last_name: order.billing_last_name.clone(),
            email,
            amount: order.total.clone(),
            currency: order.currency.clone(),
            timestamp,
            external_reference_id: order.order_number.clone(),
            signature,
        }
    }
}

/// MD5 signature over the comma-joined report fields and the secret key.
///
/// Lowercase hex, recomputed fresh for every render.
pub fn purchase_signature(
    email: &str,
    first_name: &str,
    amount: &str,
    timestamp: i64,
    secret_key: &str,
) -> String {
    let mut hasher = Md5::new();
    hasher.update(
        format!("{},{},{},{},{}", email, first_name, amount, timestamp, secret_key).as_bytes(),
    );
    hex::encode(hasher.finalize())
}

/// First run of word characters in the email, used when the billing first
/// name is empty. `john_doe@example.com` yields `john_doe`; `john.doe@...`
/// yields `john`.
pub fn fallback_first_name(email: &str) -> String {
    let start = match email.find(is_word_char) {
        Some(i) => i,
        None => return String::new(),
    };
    let rest = &email[start..];
    let end = rest.find(|c| !is_word_char(c)).unwrap_or(rest.len());
    rest[..end].to_string()
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Drop `<...>` tag sequences. Used only to decide whether a first name is
/// effectively empty; the emitted name keeps whatever the host stored.
fn strip_markup(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}
