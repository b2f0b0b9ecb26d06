use std::collections::BTreeSet;

use leptos::prelude::*;

use contracts::analytics::{
    category_analytics, unique_brands, unique_categories, unique_states, AnalyticsFilters,
};
use contracts::filters::DateRange;

use crate::pages::analytics::CategoryCard;
use crate::shared::components::{DateRangePicker, FilterPanel, StatCard};
use crate::shared::data::use_store;
use crate::shared::icons::icon;
use crate::shared::number_format::format_inr_compact;
use crate::shared::toast::use_toast;

fn toggle(list: &mut Vec<String>, value: &str) {
    if let Some(pos) = list.iter().position(|v| v == value) {
        list.remove(pos);
    } else {
        list.push(value.to_string());
    }
}

#[component]
fn AllowListGroup(
    label: &'static str,
    options: Signal<Vec<String>>,
    filters: RwSignal<AnalyticsFilters>,
    get: fn(&AnalyticsFilters) -> &Vec<String>,
    get_mut: fn(&mut AnalyticsFilters) -> &mut Vec<String>,
) -> impl IntoView {
    view! {
        <div class="field">
            <span class="field__label">{label}</span>
            <div class="checkbox-group">
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|option| {
                            let checked = option.clone();
                            let flipped = option.clone();
                            view! {
                                <label class="checkbox">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || {
                                            filters.with(|f| get(f).iter().any(|v| *v == checked))
                                        }
                                        on:change=move |_| {
                                            filters.update(|f| toggle(get_mut(f), &flipped));
                                        }
                                    />
                                    <span>{option}</span>
                                </label>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

/// Admin-wide market analysis: the full category/brand/state rollups over the
/// whole contract base, narrowed by multi-select allow-lists.
#[component]
pub fn CompetitorAnalyticsPage() -> impl IntoView {
    let store = use_store();
    let toasts = use_toast();
    let filters = RwSignal::new(AnalyticsFilters::default());
    let panel_expanded = RwSignal::new(true);

    let categories = Memo::new(move |_| store.contracts.with(|list| unique_categories(list)));
    let brands = Memo::new(move |_| store.contracts.with(|list| unique_brands(list)));
    let states = Memo::new(move |_| store.contracts.with(|list| unique_states(list)));

    let analytics = Memo::new(move |_| {
        let filters = filters.get();
        store
            .contracts
            .with(|list| category_analytics(list, Some(&filters)))
    });

    let market_value =
        Memo::new(move |_| analytics.get().iter().map(|c| c.total_value).sum::<f64>());
    let contract_count = Memo::new(move |_| {
        analytics
            .get()
            .iter()
            .map(|c| c.total_contracts)
            .sum::<usize>()
    });
    let brand_count = Memo::new(move |_| {
        analytics
            .get()
            .iter()
            .flat_map(|c| c.brands.iter().map(|b| b.brand_name.clone()))
            .collect::<BTreeSet<_>>()
            .len()
    });

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Competitor Analytics"</h1>
                // Exports are simulated; the button only acknowledges.
                <button
                    type="button"
                    class="button button--ghost"
                    on:click=move |_| {
                        toasts.info("Export queued", "Generating the full analytics report.");
                    }
                >
                    {icon("download")}
                    "Export Report"
                </button>
            </div>

            <div class="stat-grid">
                <StatCard
                    label="Total Market Value".to_string()
                    icon_name="trending-up".to_string()
                    value=Signal::derive(move || format_inr_compact(market_value.get()))
                    subtitle="Filtered data".to_string()
                />
                <StatCard
                    label="Active Categories".to_string()
                    icon_name="bar-chart".to_string()
                    value=Signal::derive(move || analytics.get().len().to_string())
                />
                <StatCard
                    label="Total Contracts".to_string()
                    icon_name="file-text".to_string()
                    value=Signal::derive(move || contract_count.get().to_string())
                />
                <StatCard
                    label="Competing Brands".to_string()
                    icon_name="users".to_string()
                    value=Signal::derive(move || brand_count.get().to_string())
                />
            </div>

            <FilterPanel
                is_expanded=panel_expanded
                active_filters_count=Signal::derive(move || filters.with(|f| f.active_count()))
                on_reset=Callback::new(move |_| filters.set(AnalyticsFilters::default()))
                filter_content=ChildrenFn::to_children(move || {
                    view! {
                        <div class="filter-grid">
                            <AllowListGroup
                                label="Categories"
                                options=Signal::derive(move || categories.get())
                                filters=filters
                                get=|f: &AnalyticsFilters| &f.category
                                get_mut=|f: &mut AnalyticsFilters| &mut f.category
                            />
                            <AllowListGroup
                                label="Brands"
                                options=Signal::derive(move || brands.get())
                                filters=filters
                                get=|f: &AnalyticsFilters| &f.brand
                                get_mut=|f: &mut AnalyticsFilters| &mut f.brand
                            />
                            <AllowListGroup
                                label="States"
                                options=Signal::derive(move || states.get())
                                filters=filters
                                get=|f: &AnalyticsFilters| &f.state
                                get_mut=|f: &mut AnalyticsFilters| &mut f.state
                            />
                            <DateRangePicker
                                value=Signal::derive(move || filters.with(|f| f.date_range))
                                on_change=Callback::new(move |range: DateRange| {
                                    filters.update(|f| f.date_range = range);
                                })
                                label="Contract date".to_string()
                            />
                        </div>
                    }
                    .into_any()
                })
            />

            {move || {
                let cards = analytics.get();
                if cards.is_empty() {
                    view! {
                        <div class="panel empty-state">
                            <p>"No contracts match the current filters."</p>
                        </div>
                    }
                    .into_any()
                } else {
                    cards
                        .into_iter()
                        .map(|category| view! { <CategoryCard category=category /> })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::demo;

    #[test]
    fn allow_lists_take_multiple_entries() {
        let contracts = demo::contracts();
        let filters = AnalyticsFilters {
            brand: vec!["TechNova".to_string(), "CoolMax".to_string()],
            ..Default::default()
        };

        let rollup = category_analytics(&contracts, Some(&filters));
        assert!(!rollup.is_empty());
        for category in &rollup {
            for brand in &category.brands {
                assert!(brand.brand_name == "TechNova" || brand.brand_name == "CoolMax");
            }
        }
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut list = Vec::new();
        toggle(&mut list, "Karnataka");
        toggle(&mut list, "Delhi");
        assert_eq!(list, vec!["Karnataka".to_string(), "Delhi".to_string()]);

        toggle(&mut list, "Karnataka");
        assert_eq!(list, vec!["Delhi".to_string()]);
    }
}
