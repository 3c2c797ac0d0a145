//! Integration settings.
//!
//! A typed view over the host platform's option store: three ReferralCandy
//! credentials and four feature flags. The host owns persistence and its own
//! sanitize/save cycle; this crate only reads the stored values back, plus a
//! form descriptor the host renders on its settings page.
//!
//! Checkbox-type options follow the host convention of storing the literal
//! string `"yes"` when enabled.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::ports::SettingsStore;

/// Option key for the API access ID credential.
pub const OPTION_API_ID: &str = "api_id";
/// Option key for the app ID credential.
pub const OPTION_APP_ID: &str = "app_id";
/// Option key for the secret key credential.
pub const OPTION_SECRET_KEY: &str = "secret_key";
/// Option key for the post-purchase popup flag.
pub const OPTION_POPUP: &str = "popup";
/// Option key for the popup layout quickfix flag.
pub const OPTION_POPUP_QUICKFIX: &str = "popup_quickfix";
/// Option key for removing referrals of cancelled orders.
pub const OPTION_REMOVE_FOR_CANCELLED: &str = "remove_referral_for_cancelled";
/// Option key for removing referrals of refunded orders.
pub const OPTION_REMOVE_FOR_REFUNDED: &str = "remove_referral_for_refunded";

/// Stored value marking a checkbox option as enabled.
const CHECKBOX_ENABLED: &str = "yes";

/// Settings for the ReferralCandy integration, as read from the host store.
#[derive(Clone)]
pub struct IntegrationSettings {
    /// API Access ID from the ReferralCandy dashboard.
    pub api_access_id: String,

    /// App ID from the ReferralCandy dashboard.
    pub app_id: String,

    /// API secret key. Feeds every signature; never logged.
    pub secret_key: SecretString,

    /// Render the post-purchase widget in popup mode.
    pub popup: bool,

    /// Apply the popup layout quickfix stylesheet.
    pub popup_quickfix: bool,

    /// Remove referrals when an order is cancelled.
    pub remove_referral_for_cancelled: bool,

    /// Remove referrals when an order is refunded.
    pub remove_referral_for_refunded: bool,
}

impl IntegrationSettings {
    /// Read the current settings out of the host option store.
    ///
    /// Missing options read as empty credentials and disabled flags, matching
    /// the form defaults.
    pub async fn load(store: &dyn SettingsStore) -> Self {
        Self {
            api_access_id: store.get_option(OPTION_API_ID).await.unwrap_or_default(),
            app_id: store.get_option(OPTION_APP_ID).await.unwrap_or_default(),
            secret_key: SecretString::new(
                store.get_option(OPTION_SECRET_KEY).await.unwrap_or_default(),
            ),
            popup: is_enabled(store, OPTION_POPUP).await,
            popup_quickfix: is_enabled(store, OPTION_POPUP_QUICKFIX).await,
            remove_referral_for_cancelled: is_enabled(store, OPTION_REMOVE_FOR_CANCELLED).await,
            remove_referral_for_refunded: is_enabled(store, OPTION_REMOVE_FOR_REFUNDED).await,
        }
    }

    /// Display names of credentials that are still empty, in form order.
    ///
    /// Empty means the stored string is empty; no further validation is done
    /// here since the host has already run its sanitize cycle.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.api_access_id.is_empty() {
            missing.push("API Access ID");
        }
        if self.app_id.is_empty() {
            missing.push("App ID");
        }
        if self.secret_key.expose_secret().is_empty() {
            missing.push("Secret Key");
        }
        missing
    }

    /// Whether all three credentials are present.
    pub fn has_credentials(&self) -> bool {
        self.missing_credentials().is_empty()
    }
}

impl std::fmt::Debug for IntegrationSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntegrationSettings")
            .field("api_access_id", &self.api_access_id)
            .field("app_id", &self.app_id)
            .field("secret_key", &"[REDACTED]")
            .field("popup", &self.popup)
            .field("popup_quickfix", &self.popup_quickfix)
            .field(
                "remove_referral_for_cancelled",
                &self.remove_referral_for_cancelled,
            )
            .field(
                "remove_referral_for_refunded",
                &self.remove_referral_for_refunded,
            )
            .finish()
    }
}

async fn is_enabled(store: &dyn SettingsStore, key: &str) -> bool {
    store
        .get_option(key)
        .await
        .map(|v| v == CHECKBOX_ENABLED)
        .unwrap_or(false)
}

/// Kind of widget the host renders for a settings field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Free-text input.
    Text,
    /// Checkbox storing `"yes"` when ticked.
    Checkbox,
}

/// One field on the host-rendered settings form.
#[derive(Debug, Clone, Serialize)]
pub struct SettingsField {
    /// Option key the value is stored under.
    pub key: &'static str,
    /// Field title shown next to the input.
    pub title: &'static str,
    /// Help text or checkbox label.
    pub description: &'static str,
    /// Input widget kind.
    pub kind: FieldKind,
}

/// The settings form, in display order.
///
/// The host renders these fields and persists the submitted values through
/// its own save cycle; this crate never mutates them.
pub fn settings_form() -> Vec<SettingsField> {
    vec![
        SettingsField {
            key: OPTION_API_ID,
            title: "API Access ID",
            description: "You can find your API Access ID on https://my.referralcandy.com/settings",
            kind: FieldKind::Text,
        },
        SettingsField {
            key: OPTION_APP_ID,
            title: "App ID",
            description: "You can find your App ID on https://my.referralcandy.com/settings",
            kind: FieldKind::Text,
        },
        SettingsField {
            key: OPTION_SECRET_KEY,
            title: "Secret key",
            description: "You can find your API Secret Key on https://my.referralcandy.com/settings",
            kind: FieldKind::Text,
        },
        SettingsField {
            key: OPTION_POPUP,
            title: "Post-purchase Popup",
            description: "Enable post-purchase Popup",
            kind: FieldKind::Checkbox,
        },
        SettingsField {
            key: OPTION_POPUP_QUICKFIX,
            title: "Post-purchase Popup Quickfix",
            description: "Popup is breaking the checkout page? Try enabling this option to apply the quickfix!",
            kind: FieldKind::Checkbox,
        },
        SettingsField {
            key: OPTION_REMOVE_FOR_CANCELLED,
            title: "Remove referrals for cancelled orders",
            description: "Enabling this will send an API request to ReferralCandy to remove referrals from cancelled orders",
            kind: FieldKind::Checkbox,
        },
        SettingsField {
            key: OPTION_REMOVE_FOR_REFUNDED,
            title: "Remove referrals for refunded orders",
            description: "Enabling this will send an API request to ReferralCandy to remove referrals from refunded orders",
            kind: FieldKind::Checkbox,
        },
    ]
}
