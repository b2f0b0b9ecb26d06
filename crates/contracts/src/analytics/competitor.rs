use crate::domain::Contract;

use super::category::{brand_breakdown, state_breakdown};
use super::{market_share, CompetitorAnalytics, UserPerformance};

/// Single-brand competitive view of one category: the user's own
/// count/value/share against every competing brand, plus the state-wise
/// breakdown over the whole category slice.
///
/// Competitor shares use the full category value as denominator, so the
/// user's share plus all competitor shares account for the entire category.
pub fn competitor_analytics(
    contracts: &[Contract],
    user_brand: &str,
    category: &str,
) -> CompetitorAnalytics {
    let category_contracts: Vec<&Contract> = contracts
        .iter()
        .filter(|c| c.product.category_name == category)
        .collect();

    let total_category_value: f64 = category_contracts.iter().map(|c| c.contract_value).sum();

    let user_contracts: Vec<&&Contract> = category_contracts
        .iter()
        .filter(|c| c.brand == user_brand)
        .collect();
    let user_value: f64 = user_contracts.iter().map(|c| c.contract_value).sum();

    let competitor_contracts: Vec<&Contract> = category_contracts
        .iter()
        .filter(|c| c.brand != user_brand)
        .copied()
        .collect();

    CompetitorAnalytics {
        user_brand: user_brand.to_string(),
        category: category.to_string(),
        total_category_value,
        total_category_contracts: category_contracts.len(),
        user_performance: UserPerformance {
            contract_count: user_contracts.len(),
            contract_value: user_value,
            market_share: market_share(user_value, total_category_value),
        },
        competitors: brand_breakdown(&competitor_contracts, total_category_value),
        location_analysis: state_breakdown(&category_contracts),
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::contract;
    use super::*;

    const PUNE: &str = "9 FC Road, Pune, Maharashtra, 411004";
    const KOLKATA: &str = "1 Park St, Kolkata, West Bengal, 700016";

    fn sample() -> Vec<Contract> {
        vec![
            contract("Orbit", "Desktop Computers", 400.0, PUNE),
            contract("Orbit", "Desktop Computers", 100.0, KOLKATA),
            contract("Aria", "Desktop Computers", 300.0, PUNE),
            contract("Zen", "Desktop Computers", 200.0, KOLKATA),
            contract("Orbit", "Laser Printers", 999.0, PUNE),
        ]
    }

    #[test]
    fn user_plus_competitors_cover_the_category() {
        let analytics = competitor_analytics(&sample(), "Orbit", "Desktop Computers");

        assert_eq!(analytics.total_category_contracts, 4);
        assert_eq!(analytics.total_category_value, 1000.0);
        assert_eq!(analytics.user_performance.contract_count, 2);
        assert_eq!(analytics.user_performance.contract_value, 500.0);
        assert_eq!(analytics.user_performance.market_share, 50.0);

        let competitor_value: f64 = analytics
            .competitors
            .iter()
            .map(|c| c.contract_value)
            .sum();
        assert_eq!(
            analytics.user_performance.contract_value + competitor_value,
            analytics.total_category_value
        );

        // Competitors never include the user's brand, sorted by value.
        let names: Vec<&str> = analytics
            .competitors
            .iter()
            .map(|c| c.brand_name.as_str())
            .collect();
        assert_eq!(names, vec!["Aria", "Zen"]);
        assert_eq!(analytics.competitors[0].market_share, 30.0);
    }

    #[test]
    fn location_analysis_spans_the_whole_category() {
        let analytics = competitor_analytics(&sample(), "Orbit", "Desktop Computers");
        let total_state_value: f64 = analytics
            .location_analysis
            .iter()
            .map(|s| s.contract_value)
            .sum();
        assert_eq!(total_state_value, analytics.total_category_value);
        assert_eq!(analytics.location_analysis[0].state_name, "Maharashtra");
    }

    #[test]
    fn absent_brand_or_category_yields_zeroes() {
        let analytics = competitor_analytics(&sample(), "Nimbus", "Desktop Computers");
        assert_eq!(analytics.user_performance.contract_count, 0);
        assert_eq!(analytics.user_performance.market_share, 0.0);
        assert_eq!(analytics.competitors.len(), 3);

        let empty = competitor_analytics(&sample(), "Orbit", "Office Chairs");
        assert_eq!(empty.total_category_contracts, 0);
        assert_eq!(empty.user_performance.market_share, 0.0);
        assert!(empty.competitors.is_empty());
        assert!(empty.location_analysis.is_empty());
    }
}
