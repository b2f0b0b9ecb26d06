//! Market analytics over the contract feed.
//!
//! Everything here is a pure rollup: group the contract slice by a key
//! (category, brand, buyer state), sum values, and express each group's value
//! as a percentage share of its parent total. Recomputed synchronously on
//! every filter change.

mod category;
mod competitor;
mod geo;

pub use category::category_analytics;
pub use competitor::competitor_analytics;
pub use geo::extract_state;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::Contract;
use crate::filters::DateRange;

/// Allow-list filters for the category rollup. Empty lists pass everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsFilters {
    pub category: Vec<String>,
    pub brand: Vec<String>,
    pub state: Vec<String>,
    pub date_range: DateRange,
}

impl AnalyticsFilters {
    pub fn active_count(&self) -> usize {
        let mut n = self.category.len() + self.brand.len() + self.state.len();
        if self.date_range.is_set() {
            n += 1;
        }
        n
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAnalytics {
    pub category_name: String,
    pub total_contracts: usize,
    pub total_value: f64,
    pub brands: Vec<BrandPerformance>,
    pub states: Vec<StatePerformance>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandPerformance {
    pub brand_name: String,
    pub contract_count: usize,
    pub contract_value: f64,
    /// Percentage of the parent grouping's total value. 0 when the parent
    /// total is itself zero.
    pub market_share: f64,
    /// Buyer states the brand is active in, sorted ascending.
    pub active_states: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatePerformance {
    pub state_name: String,
    pub contract_count: usize,
    pub contract_value: f64,
    pub brands: Vec<BrandStateData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandStateData {
    pub brand_name: String,
    pub contract_count: usize,
    pub contract_value: f64,
    /// Share of the state's total value, not of the category's.
    pub market_share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorAnalytics {
    pub user_brand: String,
    pub category: String,
    pub total_category_value: f64,
    pub total_category_contracts: usize,
    pub user_performance: UserPerformance,
    pub competitors: Vec<BrandPerformance>,
    pub location_analysis: Vec<StatePerformance>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPerformance {
    pub contract_count: usize,
    pub contract_value: f64,
    pub market_share: f64,
}

/// Value as a percentage of `total`. An empty denominator yields 0 rather
/// than NaN, so an empty filtered slice renders as "0%" instead of garbage.
pub(crate) fn market_share(value: f64, total: f64) -> f64 {
    if total > 0.0 {
        value / total * 100.0
    } else {
        0.0
    }
}

/// Descending by value; ties broken by name ascending so equal-value rows
/// keep a stable, documented order.
pub(crate) fn by_value_desc(a_value: f64, a_name: &str, b_value: f64, b_name: &str) -> std::cmp::Ordering {
    b_value.total_cmp(&a_value).then_with(|| a_name.cmp(b_name))
}

pub fn unique_categories(contracts: &[Contract]) -> Vec<String> {
    contracts
        .iter()
        .map(|c| c.product.category_name.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn unique_brands(contracts: &[Contract]) -> Vec<String> {
    contracts
        .iter()
        .map(|c| c.brand.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn unique_states(contracts: &[Contract]) -> Vec<String> {
    contracts
        .iter()
        .map(|c| extract_state(&c.buyer.buyer_address))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::NaiveDate;

    use crate::domain::{Buyer, Consignee, Contract, Product, Seller};

    /// Minimal contract for rollup tests; only the fields the analytics read
    /// vary per call.
    pub fn contract(brand: &str, category: &str, value: f64, buyer_address: &str) -> Contract {
        Contract {
            contract_number: format!("GEMC-{}-{}", brand, value as u64),
            contract_status: "Completed".to_string(),
            contract_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            procurement_type: "Direct Purchase".to_string(),
            contract_value: value,
            brand: brand.to_string(),
            bid_number: None,
            buyer: Buyer {
                buyer_name: "NIC Procurement Cell".to_string(),
                buyer_email: "buyer@gov.in".to_string(),
                buyer_contact_number: "011-2430000".to_string(),
                buyer_address: buyer_address.to_string(),
                organization_name: "National Informatics Centre".to_string(),
                ministry: None,
                department: None,
            },
            seller: Seller::Named(format!("{brand} Sales")),
            consignee: Consignee {
                consignee_name: "Stores Section".to_string(),
                consignee_email: "stores@gov.in".to_string(),
                consignee_contact_number: "011-2430001".to_string(),
                consignee_address: buyer_address.to_string(),
            },
            product: Product {
                product_name: format!("{category} Unit"),
                product_model: "STD-1".to_string(),
                quantity: 1,
                unit_price: value,
                total_order_value: value,
                category_name: category.to_string(),
                catalogue_status: "Published".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::contract;
    use super::*;

    #[test]
    fn share_of_zero_total_is_zero() {
        assert_eq!(market_share(0.0, 0.0), 0.0);
        assert_eq!(market_share(50.0, 200.0), 25.0);
    }

    #[test]
    fn unique_helpers_sort_and_dedupe() {
        let contracts = vec![
            contract("Orbit", "Laser Printers", 100.0, "1 Park St, Kolkata, West Bengal, 700016"),
            contract("Aria", "Desktop Computers", 200.0, "9 FC Road, Pune, Maharashtra, 411004"),
            contract("Orbit", "Desktop Computers", 300.0, "9 FC Road, Pune, Maharashtra, 411004"),
        ];
        assert_eq!(unique_brands(&contracts), vec!["Aria", "Orbit"]);
        assert_eq!(
            unique_categories(&contracts),
            vec!["Desktop Computers", "Laser Printers"]
        );
        assert_eq!(unique_states(&contracts), vec!["Maharashtra", "West Bengal"]);
    }
}
