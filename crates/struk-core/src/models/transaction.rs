use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::employee::Identifier;

/// One completed sale as recorded by the till.
///
/// `total`, `payment` and `change` are computed by the caller and rendered
/// as-is; they are not reconciled against `items`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Transaction {
    pub receipt_id: String,
    /// Absent or `null` when the till did not record a cashier.
    #[serde(default)]
    pub employee_id: Option<Identifier>,
    pub timestamp: TimestampValue,
    pub items: Vec<LineItem>,
    pub total: f64,
    pub payment: f64,
    pub change: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    pub name: String,
    pub quantity: f64,
    /// Unit price.
    pub price: f64,
}

impl LineItem {
    pub fn extended_price(&self) -> f64 {
        self.quantity * self.price
    }
}

/// Sale time: either preformatted text or epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum TimestampValue {
    Epoch(f64),
    Text(String),
}
