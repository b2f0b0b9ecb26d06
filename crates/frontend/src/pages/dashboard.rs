use std::collections::BTreeSet;

use leptos::prelude::*;

use contracts::analytics::{category_analytics, unique_brands};
use contracts::domain::Contract;
use contracts::filters::ContractFilter;

use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::components::{BarChart, BarRow, SearchableSelect, StatCard};
use crate::shared::data::use_store;
use crate::shared::date_utils::format_date;
use crate::shared::number_format::{format_inr, format_inr_compact};

/// Landing page: brand switcher, headline totals, category value chart and
/// the most recent contract awards. Everything recomputes synchronously from
/// the selected brand.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let store = use_store();

    let brand = RwSignal::new(String::new());

    let brands = Memo::new(move |_| store.contracts.with(|list| unique_brands(list)));

    let filtered = Memo::new(move |_| {
        let filter = ContractFilter {
            brand: brand.get(),
            ..Default::default()
        };
        store.contracts.with(|list| {
            list.iter()
                .filter(|c| filter.matches(c))
                .cloned()
                .collect::<Vec<Contract>>()
        })
    });

    let total_contracts = Memo::new(move |_| filtered.get().len());
    let total_value =
        Memo::new(move |_| filtered.get().iter().map(|c| c.contract_value).sum::<f64>());
    let order_count = Memo::new(move |_| store.orders.with(|list| list.len()));
    let seller_count = Memo::new(move |_| {
        filtered
            .get()
            .iter()
            .map(|c| c.seller.name().to_string())
            .collect::<BTreeSet<_>>()
            .len()
    });

    let category_rows = Memo::new(move |_| {
        category_analytics(&filtered.get(), None)
            .into_iter()
            .map(|cat| BarRow {
                label: cat.category_name,
                value: cat.total_value,
                display: format_inr_compact(cat.total_value),
            })
            .collect::<Vec<_>>()
    });

    let recent = Memo::new(move |_| {
        let mut sorted = filtered.get();
        sorted.sort_by(|a, b| b.contract_date.cmp(&a.contract_date));
        sorted.truncate(5);
        sorted
    });

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Dashboard"</h1>
                <div class="page-header__controls">
                    <SearchableSelect
                        options=Signal::derive(move || brands.get())
                        value=Signal::derive(move || brand.get())
                        placeholder="All brands".to_string()
                        on_change=Callback::new(move |value| brand.set(value))
                    />
                </div>
            </div>

            <div class="stat-grid">
                <StatCard
                    label="Total Contracts".to_string()
                    icon_name="file-text".to_string()
                    value=Signal::derive(move || total_contracts.get().to_string())
                    on_click=Callback::new(move |_| ctx.navigate(Page::Contracts))
                />
                <StatCard
                    label="Contract Value".to_string()
                    icon_name="trending-up".to_string()
                    value=Signal::derive(move || format_inr_compact(total_value.get()))
                />
                <StatCard
                    label="Active Sellers".to_string()
                    icon_name="store".to_string()
                    value=Signal::derive(move || seller_count.get().to_string())
                    on_click=Callback::new(move |_| ctx.navigate(Page::Sellers))
                />
                <StatCard
                    label="Orders".to_string()
                    icon_name="shopping-cart".to_string()
                    value=Signal::derive(move || order_count.get().to_string())
                    on_click=Callback::new(move |_| ctx.navigate(Page::Orders))
                />
            </div>

            <div class="panel">
                <h2>"Value by category"</h2>
                <BarChart rows=Signal::derive(move || category_rows.get()) />
            </div>

            <div class="panel">
                <h2>"Recent contracts"</h2>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Contract"</th>
                            <th>"Date"</th>
                            <th>"Buyer"</th>
                            <th>"Brand"</th>
                            <th class="data-table__num">"Value"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            recent
                                .get()
                                .into_iter()
                                .map(|c| {
                                    view! {
                                        <tr>
                                            <td>{c.contract_number.clone()}</td>
                                            <td>{format_date(c.contract_date)}</td>
                                            <td>{c.buyer.organization_name.clone()}</td>
                                            <td>{c.brand.clone()}</td>
                                            <td class="data-table__num">
                                                {format_inr(c.contract_value)}
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
