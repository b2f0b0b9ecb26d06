//! Parametrized filter predicates for the record tables.
//!
//! One evaluator per record kind replaces the per-page ad-hoc closures the
//! dashboard grew out of; every page builds a filter value from its controls
//! and calls `matches`. Numeric bounds treat 0 as "unset" and the date range
//! only applies when both ends are filled in, matching how the filter
//! controls behave.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Contract, Order, User, UserRole};

/// Inclusive date window. Half-open input (only one end set) is treated as
/// "no filter" because the pickers always submit both ends together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn is_set(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.from, self.to) {
            (Some(from), Some(to)) => from <= date && date <= to,
            _ => true,
        }
    }
}

/// Filter criteria for the contracts table and the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractFilter {
    /// Case-insensitive match across contract number, buyer name, seller
    /// name, product name and brand.
    pub search: String,
    /// Single-select brand ("" = all brands).
    pub brand: String,
    pub contract_status: Vec<String>,
    pub procurement_type: Vec<String>,
    pub catalogue_status: Vec<String>,
    pub seller_verification: Vec<String>,
    /// 0 disables the bound.
    pub min_value: f64,
    pub max_value: f64,
    pub date_range: DateRange,
}

impl ContractFilter {
    pub fn matches(&self, contract: &Contract) -> bool {
        if !self.search.is_empty() {
            let term = self.search.to_lowercase();
            let hit = contract.contract_number.to_lowercase().contains(&term)
                || contract.buyer.buyer_name.to_lowercase().contains(&term)
                || contract.seller.name().to_lowercase().contains(&term)
                || contract.product.product_name.to_lowercase().contains(&term)
                || contract.brand.to_lowercase().contains(&term);
            if !hit {
                return false;
            }
        }
        if !self.brand.is_empty() && contract.brand != self.brand {
            return false;
        }
        if !self.contract_status.is_empty()
            && !self.contract_status.contains(&contract.contract_status)
        {
            return false;
        }
        if !self.procurement_type.is_empty()
            && !self.procurement_type.contains(&contract.procurement_type)
        {
            return false;
        }
        if !self.catalogue_status.is_empty()
            && !self.catalogue_status.contains(&contract.product.catalogue_status)
        {
            return false;
        }
        if !self.seller_verification.is_empty()
            && !self
                .seller_verification
                .iter()
                .any(|s| s == contract.seller.verified_status())
        {
            return false;
        }
        if self.min_value > 0.0 && contract.contract_value < self.min_value {
            return false;
        }
        if self.max_value > 0.0 && contract.contract_value > self.max_value {
            return false;
        }
        self.date_range.contains(contract.contract_date)
    }

    /// Number of active criteria, shown as the filter-panel badge.
    pub fn active_count(&self) -> usize {
        let mut n = 0;
        if !self.search.is_empty() {
            n += 1;
        }
        if !self.brand.is_empty() {
            n += 1;
        }
        n += self.contract_status.len()
            + self.procurement_type.len()
            + self.catalogue_status.len()
            + self.seller_verification.len();
        if self.min_value > 0.0 {
            n += 1;
        }
        if self.max_value > 0.0 {
            n += 1;
        }
        if self.date_range.is_set() {
            n += 1;
        }
        n
    }
}

/// Filter criteria for the orders table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderFilter {
    /// Single-select status ("" = all).
    pub status: String,
    /// 0 disables the bound.
    pub min_amount: f64,
    pub max_amount: f64,
    pub date_range: DateRange,
}

impl OrderFilter {
    pub fn matches(&self, order: &Order) -> bool {
        if !self.status.is_empty() && order.status != self.status {
            return false;
        }
        if self.min_amount > 0.0 && order.total_price < self.min_amount {
            return false;
        }
        if self.max_amount > 0.0 && order.total_price > self.max_amount {
            return false;
        }
        self.date_range.contains(order.order_date)
    }

    pub fn active_count(&self) -> usize {
        let mut n = 0;
        if !self.status.is_empty() {
            n += 1;
        }
        if self.min_amount > 0.0 {
            n += 1;
        }
        if self.max_amount > 0.0 {
            n += 1;
        }
        if self.date_range.is_set() {
            n += 1;
        }
        n
    }
}

/// Filter criteria for the admin user table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    /// Case-insensitive match across name, email and organization.
    pub search: String,
    pub role: Option<UserRole>,
    /// None = both active and inactive accounts.
    pub active: Option<bool>,
    /// Substring match on the organization name.
    pub organization: String,
}

impl UserFilter {
    pub fn matches(&self, user: &User) -> bool {
        if !self.search.is_empty() {
            let term = self.search.to_lowercase();
            let hit = user.name.to_lowercase().contains(&term)
                || user.email.to_lowercase().contains(&term)
                || user.organization.to_lowercase().contains(&term);
            if !hit {
                return false;
            }
        }
        if let Some(role) = self.role {
            if user.role != role {
                return false;
            }
        }
        if let Some(active) = self.active {
            if user.is_active != active {
                return false;
            }
        }
        if !self.organization.is_empty() && !user.organization.contains(&self.organization) {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::analytics::fixtures::contract;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn date_range_needs_both_ends() {
        let open = DateRange {
            from: Some(date(2025, 1, 1)),
            to: None,
        };
        assert!(!open.is_set());
        assert!(open.contains(date(2024, 6, 1)));

        let closed = DateRange {
            from: Some(date(2025, 1, 1)),
            to: Some(date(2025, 1, 31)),
        };
        assert!(closed.contains(date(2025, 1, 1)));
        assert!(closed.contains(date(2025, 1, 31)));
        assert!(!closed.contains(date(2025, 2, 1)));
    }

    #[test]
    fn contract_search_spans_all_indexed_fields() {
        let c = contract("Orbit", "Desktop Computers", 100.0, "9 FC Road, Pune, Maharashtra, 411004");

        for term in ["orbit", "GEMC", "nic procurement", "desktop computers unit"] {
            let filter = ContractFilter {
                search: term.to_string(),
                ..Default::default()
            };
            assert!(filter.matches(&c), "term {term:?} should match");
        }

        let miss = ContractFilter {
            search: "thermal scanner".to_string(),
            ..Default::default()
        };
        assert!(!miss.matches(&c));
    }

    #[test]
    fn zero_bounds_are_unset() {
        let c = contract("Orbit", "X", 5_000.0, "9 FC Road, Pune, Maharashtra, 411004");
        let unset = ContractFilter::default();
        assert!(unset.matches(&c));
        assert_eq!(unset.active_count(), 0);

        let bounded = ContractFilter {
            min_value: 1_000.0,
            max_value: 4_000.0,
            ..Default::default()
        };
        assert!(!bounded.matches(&c));
        assert_eq!(bounded.active_count(), 2);
    }

    #[test]
    fn allow_lists_and_single_selects_combine() {
        let c = contract("Orbit", "X", 100.0, "9 FC Road, Pune, Maharashtra, 411004");

        let filter = ContractFilter {
            brand: "Orbit".to_string(),
            contract_status: vec!["Completed".to_string()],
            procurement_type: vec!["Direct Purchase".to_string()],
            ..Default::default()
        };
        assert!(filter.matches(&c));

        let wrong_brand = ContractFilter {
            brand: "Aria".to_string(),
            ..Default::default()
        };
        assert!(!wrong_brand.matches(&c));

        let wrong_status = ContractFilter {
            contract_status: vec!["Cancelled".to_string()],
            ..Default::default()
        };
        assert!(!wrong_status.matches(&c));
    }

    #[test]
    fn seller_verification_uses_accessor_defaults() {
        // Fixture sellers are name-only, which report "Unverified".
        let c = contract("Orbit", "X", 100.0, "9 FC Road, Pune, Maharashtra, 411004");
        let verified_only = ContractFilter {
            seller_verification: vec!["Verified".to_string()],
            ..Default::default()
        };
        assert!(!verified_only.matches(&c));

        let unverified = ContractFilter {
            seller_verification: vec!["Unverified".to_string()],
            ..Default::default()
        };
        assert!(unverified.matches(&c));
    }

    #[test]
    fn order_filter_bounds_and_status() {
        let order = Order {
            id: "ORD-1".to_string(),
            product: "Laser Printer".to_string(),
            quantity: 2,
            unit_price: 9_000.0,
            total_price: 18_000.0,
            order_date: date(2025, 4, 2),
            status: "Delivered".to_string(),
            seller: "Stellar Infotech".to_string(),
            oem: "PrintLine".to_string(),
        };

        assert!(OrderFilter::default().matches(&order));
        assert!(OrderFilter {
            status: "Delivered".to_string(),
            min_amount: 10_000.0,
            ..Default::default()
        }
        .matches(&order));
        assert!(!OrderFilter {
            status: "Pending".to_string(),
            ..Default::default()
        }
        .matches(&order));
        assert!(!OrderFilter {
            max_amount: 10_000.0,
            ..Default::default()
        }
        .matches(&order));
    }
}
