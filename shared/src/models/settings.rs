//! Store settings
//!
//! A typed record with a closed set of keys. Updates arrive as
//! `{"key": "...", "value": ...}` and unknown keys fail deserialization, so
//! nothing outside this set ever reaches storage.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct StoreSettings {
    pub business_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    /// Quote requests with a smaller subtotal are rejected
    #[serde(with = "rust_decimal::serde::float_option")]
    pub minimum_order: Option<Decimal>,
    /// Shown on quotes and checkout confirmations
    pub delivery_note: Option<String>,
    /// Promised turnaround for manual quote follow-up
    pub quote_follow_up_hours: u32,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            business_name: "Super Empire Produce".to_string(),
            contact_email: String::new(),
            contact_phone: String::new(),
            minimum_order: None,
            delivery_note: None,
            quote_follow_up_hours: 24,
        }
    }
}

/// One recognized setting change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "key", content = "value", rename_all = "camelCase")]
pub enum SettingUpdate {
    BusinessName(String),
    ContactEmail(String),
    ContactPhone(String),
    MinimumOrder(#[serde(with = "rust_decimal::serde::float_option")] Option<Decimal>),
    DeliveryNote(Option<String>),
    QuoteFollowUpHours(u32),
}

impl StoreSettings {
    pub fn apply(&mut self, update: SettingUpdate) {
        match update {
            SettingUpdate::BusinessName(v) => self.business_name = v,
            SettingUpdate::ContactEmail(v) => self.contact_email = v,
            SettingUpdate::ContactPhone(v) => self.contact_phone = v,
            SettingUpdate::MinimumOrder(v) => self.minimum_order = v,
            SettingUpdate::DeliveryNote(v) => self.delivery_note = v,
            SettingUpdate::QuoteFollowUpHours(v) => self.quote_follow_up_hours = v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_parses_known_keys() {
        let update: SettingUpdate =
            serde_json::from_str(r#"{"key":"minimumOrder","value":150.0}"#).unwrap();
        assert_eq!(update, SettingUpdate::MinimumOrder(Some(Decimal::new(150, 0))));

        let mut settings = StoreSettings::default();
        settings.apply(update);
        assert_eq!(settings.minimum_order, Some(Decimal::new(150, 0)));
    }

    #[test]
    fn test_update_rejects_unknown_keys() {
        let result = serde_json::from_str::<SettingUpdate>(r#"{"key":"theme","value":"dark"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_settings_reject_unknown_fields() {
        let result = serde_json::from_str::<StoreSettings>(r#"{"businessName":"X","theme":"dark"}"#);
        assert!(result.is_err());

        let partial: StoreSettings = serde_json::from_str(r#"{"businessName":"X"}"#).unwrap();
        assert_eq!(partial.business_name, "X");
        assert_eq!(partial.quote_follow_up_hours, 24);
    }
}
