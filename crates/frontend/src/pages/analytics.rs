use std::collections::BTreeSet;

use leptos::prelude::*;

use contracts::analytics::{category_analytics, unique_brands, CategoryAnalytics};
use contracts::domain::Contract;
use contracts::filters::{ContractFilter, DateRange};

use crate::shared::components::{BarChart, BarRow, DateRangePicker, FilterPanel, SearchableSelect};
use crate::shared::data::use_store;
use crate::shared::number_format::{format_inr, format_inr_compact, format_share};

fn single(value: String) -> Vec<String> {
    if value.is_empty() {
        Vec::new()
    } else {
        vec![value]
    }
}

fn first(list: &[String]) -> String {
    list.first().cloned().unwrap_or_default()
}

fn narrow(contracts: &[Contract], filter: &ContractFilter) -> Vec<Contract> {
    contracts
        .iter()
        .filter(|c| filter.matches(c))
        .cloned()
        .collect()
}

fn distinct(contracts: &[Contract], field: fn(&Contract) -> &str) -> Vec<String> {
    contracts
        .iter()
        .map(|c| field(c).to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[component]
pub(crate) fn CategoryCard(category: CategoryAnalytics) -> impl IntoView {
    let expanded = RwSignal::new(false);

    let brand_rows = category
        .brands
        .iter()
        .map(|b| BarRow {
            label: b.brand_name.clone(),
            value: b.contract_value,
            display: format!(
                "{} · {}",
                format_inr_compact(b.contract_value),
                format_share(b.market_share),
            ),
        })
        .collect::<Vec<_>>();

    let states = category.states.clone();

    view! {
        <div class="panel analytics-card">
            <div class="analytics-card__header">
                <h2>{category.category_name.clone()}</h2>
                <span class="page-header__meta">
                    {format!(
                        "{} contracts · {}",
                        category.total_contracts,
                        format_inr(category.total_value),
                    )}
                </span>
            </div>

            <h3>"Brand share"</h3>
            <BarChart rows=Signal::derive(move || brand_rows.clone()) />

            <button
                type="button"
                class="button button--ghost"
                on:click=move |_| expanded.update(|e| *e = !*e)
            >
                {move || {
                    if expanded.get() {
                        "Hide state breakdown"
                    } else {
                        "Show state breakdown"
                    }
                }}
            </button>

            <Show when=move || expanded.get()>
                <div class="analytics-card__states">
                    {states
                        .iter()
                        .map(|state| {
                            view! {
                                <div class="analytics-card__state">
                                    <h4>
                                        {state.state_name.clone()}
                                        <span class="page-header__meta">
                                            {format!(
                                                " · {} contracts · {}",
                                                state.contract_count,
                                                format_inr_compact(state.contract_value),
                                            )}
                                        </span>
                                    </h4>
                                    <table class="data-table data-table--compact">
                                        <thead>
                                            <tr>
                                                <th>"Brand"</th>
                                                <th class="data-table__num">"Contracts"</th>
                                                <th class="data-table__num">"Value"</th>
                                                <th class="data-table__num">"State share"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {state
                                                .brands
                                                .iter()
                                                .map(|b| {
                                                    view! {
                                                        <tr>
                                                            <td>{b.brand_name.clone()}</td>
                                                            <td class="data-table__num">
                                                                {b.contract_count}
                                                            </td>
                                                            <td class="data-table__num">
                                                                {format_inr(b.contract_value)}
                                                            </td>
                                                            <td class="data-table__num">
                                                                {format_share(b.market_share)}
                                                            </td>
                                                        </tr>
                                                    }
                                                })
                                                .collect_view()}
                                        </tbody>
                                    </table>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

/// Category analytics over the contract slice narrowed by brand, contract
/// status, procurement type and date range.
#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let store = use_store();
    let filter = RwSignal::new(ContractFilter::default());
    let panel_expanded = RwSignal::new(true);

    let brands = Memo::new(move |_| store.contracts.with(|list| unique_brands(list)));
    let statuses = Memo::new(move |_| {
        store
            .contracts
            .with(|list| distinct(list, |c| c.contract_status.as_str()))
    });
    let procurement_types = Memo::new(move |_| {
        store
            .contracts
            .with(|list| distinct(list, |c| c.procurement_type.as_str()))
    });

    let analytics = Memo::new(move |_| {
        let filter = filter.get();
        store
            .contracts
            .with(|list| category_analytics(&narrow(list, &filter), None))
    });

    let grand_total =
        Memo::new(move |_| analytics.get().iter().map(|c| c.total_value).sum::<f64>());

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Analytics"</h1>
                <span class="page-header__meta">
                    {move || {
                        format!(
                            "{} categories · {}",
                            analytics.get().len(),
                            format_inr(grand_total.get()),
                        )
                    }}
                </span>
            </div>

            <FilterPanel
                is_expanded=panel_expanded
                active_filters_count=Signal::derive(move || filter.with(|f| f.active_count()))
                on_reset=Callback::new(move |_| filter.set(ContractFilter::default()))
                filter_content=ChildrenFn::to_children(move || {
                    view! {
                        <div class="filter-grid">
                            <div class="field">
                                <span class="field__label">"Brand"</span>
                                <SearchableSelect
                                    options=Signal::derive(move || brands.get())
                                    value=Signal::derive(move || filter.with(|f| f.brand.clone()))
                                    placeholder="All brands".to_string()
                                    on_change=Callback::new(move |value| {
                                        filter.update(|f| f.brand = value);
                                    })
                                />
                            </div>
                            <div class="field">
                                <span class="field__label">"Contract status"</span>
                                <SearchableSelect
                                    options=Signal::derive(move || statuses.get())
                                    value=Signal::derive(move || {
                                        filter.with(|f| first(&f.contract_status))
                                    })
                                    placeholder="All statuses".to_string()
                                    on_change=Callback::new(move |value| {
                                        filter.update(|f| f.contract_status = single(value));
                                    })
                                />
                            </div>
                            <div class="field">
                                <span class="field__label">"Procurement type"</span>
                                <SearchableSelect
                                    options=Signal::derive(move || procurement_types.get())
                                    value=Signal::derive(move || {
                                        filter.with(|f| first(&f.procurement_type))
                                    })
                                    placeholder="All types".to_string()
                                    on_change=Callback::new(move |value| {
                                        filter.update(|f| f.procurement_type = single(value));
                                    })
                                />
                            </div>
                            <DateRangePicker
                                value=Signal::derive(move || filter.with(|f| f.date_range))
                                on_change=Callback::new(move |range: DateRange| {
                                    filter.update(|f| f.date_range = range);
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
    fn status_narrowing_feeds_the_rollup() {
        let contracts = demo::contracts();
        let filter = ContractFilter {
            contract_status: vec!["Completed".to_string()],
            ..Default::default()
        };

        let narrowed = narrow(&contracts, &filter);
        assert!(!narrowed.is_empty());
        assert!(narrowed.iter().all(|c| c.contract_status == "Completed"));

        let rollup = category_analytics(&narrowed, None);
        let counted: usize = rollup.iter().map(|c| c.total_contracts).sum();
        assert_eq!(counted, narrowed.len());
    }

    #[test]
    fn brand_and_procurement_narrowing_combine() {
        let contracts = demo::contracts();
        let filter = ContractFilter {
            brand: "TechNova".to_string(),
            procurement_type: vec!["Bid".to_string()],
            ..Default::default()
        };

        for contract in narrow(&contracts, &filter) {
            assert_eq!(contract.brand, "TechNova");
            assert_eq!(contract.procurement_type, "Bid");
        }
    }

    #[test]
    fn select_options_come_from_the_records() {
        let contracts = demo::contracts();

        let statuses = distinct(&contracts, |c| c.contract_status.as_str());
        assert!(statuses.contains(&"Completed".to_string()));

        let mut sorted = statuses.clone();
        sorted.sort();
        assert_eq!(statuses, sorted);
    }
}
