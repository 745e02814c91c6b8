//! Customer Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Buyer account, created on first checkout and matched by email afterwards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company_name: Option<String>,
    pub delivery_address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Update customer payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub company_name: Option<String>,
    pub delivery_address: Option<String>,
}

impl Customer {
    /// Merge a patch; returns true when any field changed
    pub fn apply(&mut self, patch: CustomerPatch) -> bool {
        let before = self.clone();
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if patch.company_name.is_some() {
            self.company_name = patch.company_name;
        }
        if patch.delivery_address.is_some() {
            self.delivery_address = patch.delivery_address;
        }
        *self != before
    }
}
