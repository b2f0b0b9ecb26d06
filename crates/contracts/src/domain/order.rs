use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A direct marketplace order, lighter-weight than a full contract record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub product: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub total_price: f64,
    pub order_date: NaiveDate,
    pub status: String,
    pub seller: String,
    /// Brand under which the product is listed.
    pub oem: String,
}
