use std::collections::{BTreeSet, HashMap};

use crate::domain::Contract;

use super::{
    by_value_desc, extract_state, market_share, AnalyticsFilters, BrandPerformance,
    BrandStateData, CategoryAnalytics, StatePerformance,
};

/// Per-category rollup of the contract feed: totals plus brand and state
/// breakdowns, each row carrying its share of the parent total. Categories,
/// brands and states all come back sorted by value descending (name ascending
/// on ties).
pub fn category_analytics(
    contracts: &[Contract],
    filters: Option<&AnalyticsFilters>,
) -> Vec<CategoryAnalytics> {
    let filtered: Vec<&Contract> = contracts
        .iter()
        .filter(|&c| filters.map_or(true, |f| passes(c, f)))
        .collect();

    let mut by_category: HashMap<&str, Vec<&Contract>> = HashMap::new();
    for contract in filtered {
        by_category
            .entry(contract.product.category_name.as_str())
            .or_default()
            .push(contract);
    }

    let mut categories: Vec<CategoryAnalytics> = by_category
        .into_iter()
        .map(|(name, slice)| build_category(name, &slice))
        .collect();
    categories.sort_by(|a, b| {
        by_value_desc(a.total_value, &a.category_name, b.total_value, &b.category_name)
    });
    categories
}

fn passes(contract: &Contract, filters: &AnalyticsFilters) -> bool {
    if !filters.category.is_empty()
        && !filters.category.contains(&contract.product.category_name)
    {
        return false;
    }
    if !filters.brand.is_empty() && !filters.brand.contains(&contract.brand) {
        return false;
    }
    if !filters.state.is_empty()
        && !filters.state.contains(&extract_state(&contract.buyer.buyer_address))
    {
        return false;
    }
    filters.date_range.contains(contract.contract_date)
}

fn build_category(name: &str, contracts: &[&Contract]) -> CategoryAnalytics {
    let total_value: f64 = contracts.iter().map(|c| c.contract_value).sum();

    CategoryAnalytics {
        category_name: name.to_string(),
        total_contracts: contracts.len(),
        total_value,
        brands: brand_breakdown(contracts, total_value),
        states: state_breakdown(contracts),
    }
}

/// Brand rows with shares relative to `denominator` (the parent grouping's
/// total value). Shared with the competitor view, which passes the category
/// total while excluding the user's own brand from the rows.
pub(super) fn brand_breakdown(contracts: &[&Contract], denominator: f64) -> Vec<BrandPerformance> {
    let mut by_brand: HashMap<&str, Vec<&Contract>> = HashMap::new();
    for &contract in contracts {
        by_brand.entry(contract.brand.as_str()).or_default().push(contract);
    }

    let mut brands: Vec<BrandPerformance> = by_brand
        .into_iter()
        .map(|(brand, slice)| {
            let value: f64 = slice.iter().map(|c| c.contract_value).sum();
            let active_states: Vec<String> = slice
                .iter()
                .map(|c| extract_state(&c.buyer.buyer_address))
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect();
            BrandPerformance {
                brand_name: brand.to_string(),
                contract_count: slice.len(),
                contract_value: value,
                market_share: market_share(value, denominator),
                active_states,
            }
        })
        .collect();
    brands.sort_by(|a, b| {
        by_value_desc(a.contract_value, &a.brand_name, b.contract_value, &b.brand_name)
    });
    brands
}

/// State rows over the slice, each with a nested per-brand breakdown whose
/// shares are relative to the state total (not the category total).
pub(super) fn state_breakdown(contracts: &[&Contract]) -> Vec<StatePerformance> {
    let mut by_state: HashMap<String, Vec<&Contract>> = HashMap::new();
    for &contract in contracts {
        by_state
            .entry(extract_state(&contract.buyer.buyer_address))
            .or_default()
            .push(contract);
    }

    let mut states: Vec<StatePerformance> = by_state
        .into_iter()
        .map(|(state, slice)| {
            let state_value: f64 = slice.iter().map(|c| c.contract_value).sum();

            let mut by_brand: HashMap<&str, Vec<&Contract>> = HashMap::new();
            for &contract in &slice {
                by_brand.entry(contract.brand.as_str()).or_default().push(contract);
            }
            let mut brands: Vec<BrandStateData> = by_brand
                .into_iter()
                .map(|(brand, brand_slice)| {
                    let value: f64 = brand_slice.iter().map(|c| c.contract_value).sum();
                    BrandStateData {
                        brand_name: brand.to_string(),
                        contract_count: brand_slice.len(),
                        contract_value: value,
                        market_share: market_share(value, state_value),
                    }
                })
                .collect();
            brands.sort_by(|a, b| {
                by_value_desc(a.contract_value, &a.brand_name, b.contract_value, &b.brand_name)
            });

            StatePerformance {
                state_name: state,
                contract_count: slice.len(),
                contract_value: state_value,
                brands,
            }
        })
        .collect();
    states.sort_by(|a, b| {
        by_value_desc(a.contract_value, &a.state_name, b.contract_value, &b.state_name)
    });
    states
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::super::fixtures::contract;
    use super::*;
    use crate::filters::DateRange;

    const PUNE: &str = "9 FC Road, Pune, Maharashtra, 411004";
    const KOLKATA: &str = "1 Park St, Kolkata, West Bengal, 700016";

    #[test]
    fn worked_example_from_two_brands() {
        let contracts = vec![
            contract("A", "X", 100.0, PUNE),
            contract("B", "X", 300.0, PUNE),
        ];
        let analytics = category_analytics(&contracts, None);
        assert_eq!(analytics.len(), 1);

        let x = &analytics[0];
        assert_eq!(x.category_name, "X");
        assert_eq!(x.total_contracts, 2);
        assert_eq!(x.total_value, 400.0);

        // Ordered by value descending: B first.
        assert_eq!(x.brands[0].brand_name, "B");
        assert_eq!(x.brands[0].market_share, 75.0);
        assert_eq!(x.brands[1].brand_name, "A");
        assert_eq!(x.brands[1].market_share, 25.0);
    }

    #[test]
    fn brand_values_sum_to_category_total() {
        let contracts = vec![
            contract("A", "X", 120.0, PUNE),
            contract("B", "X", 80.0, KOLKATA),
            contract("C", "X", 200.0, PUNE),
            contract("A", "Y", 999.0, KOLKATA),
        ];
        let analytics = category_analytics(&contracts, None);
        for category in &analytics {
            let brand_sum: f64 = category.brands.iter().map(|b| b.contract_value).sum();
            assert_eq!(brand_sum, category.total_value);

            let share_sum: f64 = category.brands.iter().map(|b| b.market_share).sum();
            assert!((share_sum - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn state_shares_are_relative_to_the_state() {
        let contracts = vec![
            contract("A", "X", 100.0, PUNE),
            contract("B", "X", 100.0, PUNE),
            contract("A", "X", 500.0, KOLKATA),
        ];
        let analytics = category_analytics(&contracts, None);
        let states = &analytics[0].states;

        assert_eq!(states[0].state_name, "West Bengal");
        assert_eq!(states[0].brands[0].market_share, 100.0);

        let maharashtra = &states[1];
        assert_eq!(maharashtra.state_name, "Maharashtra");
        assert_eq!(maharashtra.contract_count, 2);
        for brand in &maharashtra.brands {
            assert_eq!(brand.market_share, 50.0);
        }
    }

    #[test]
    fn equal_values_tie_break_by_name() {
        let contracts = vec![
            contract("Zen", "X", 100.0, PUNE),
            contract("Aria", "X", 100.0, PUNE),
        ];
        let analytics = category_analytics(&contracts, None);
        let names: Vec<&str> = analytics[0].brands.iter().map(|b| b.brand_name.as_str()).collect();
        assert_eq!(names, vec!["Aria", "Zen"]);
    }

    #[test]
    fn zero_value_category_reports_zero_shares() {
        let contracts = vec![
            contract("A", "X", 0.0, PUNE),
            contract("B", "X", 0.0, KOLKATA),
        ];
        let analytics = category_analytics(&contracts, None);
        for brand in &analytics[0].brands {
            assert_eq!(brand.market_share, 0.0);
        }
    }

    #[test]
    fn filters_narrow_the_slice() {
        let mut early = contract("A", "X", 100.0, PUNE);
        early.contract_date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let contracts = vec![
            early,
            contract("A", "X", 200.0, PUNE),
            contract("B", "X", 300.0, KOLKATA),
            contract("B", "Y", 400.0, KOLKATA),
        ];

        let filters = AnalyticsFilters {
            category: vec!["X".to_string()],
            brand: vec!["A".to_string()],
            state: vec![],
            date_range: DateRange {
                from: Some(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()),
                to: Some(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()),
            },
        };
        let analytics = category_analytics(&contracts, Some(&filters));
        assert_eq!(analytics.len(), 1);
        assert_eq!(analytics[0].total_contracts, 1);
        assert_eq!(analytics[0].total_value, 200.0);

        let by_state = AnalyticsFilters {
            state: vec!["West Bengal".to_string()],
            ..Default::default()
        };
        let analytics = category_analytics(&contracts, Some(&by_state));
        assert_eq!(analytics.len(), 2);
        assert!(analytics
            .iter()
            .all(|c| c.states.iter().all(|s| s.state_name == "West Bengal")));
    }

    #[test]
    fn aggregation_is_idempotent() {
        let contracts = vec![
            contract("A", "X", 120.0, PUNE),
            contract("B", "X", 80.0, KOLKATA),
            contract("A", "Y", 50.0, KOLKATA),
        ];
        let filters = AnalyticsFilters {
            brand: vec!["A".to_string(), "B".to_string()],
            ..Default::default()
        };
        let first = category_analytics(&contracts, Some(&filters));
        let second = category_analytics(&contracts, Some(&filters));
        assert_eq!(first, second);
    }
}
