use serde::{Deserialize, Serialize};

use super::WidgetRecord;

/// View model handed to the reconciliation widget.
///
/// Serialized with exactly the keys `customers`, `suppliers` and `accounts`;
/// record order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataForReconciliationWidget {
    pub customers: Vec<WidgetRecord>,
    pub suppliers: Vec<WidgetRecord>,
    pub accounts: Vec<WidgetRecord>,
}

impl DataForReconciliationWidget {
    /// True when all three collections are empty.
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty() && self.suppliers.is_empty() && self.accounts.is_empty()
    }

    /// Encode as the JSON object the widget consumes.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> Result<String, crate::core::KontoError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from the widget's JSON object.
    #[cfg(feature = "json")]
    pub fn from_json(s: &str) -> Result<Self, crate::core::KontoError> {
        Ok(serde_json::from_str(s)?)
    }
}
