use leptos::prelude::*;

use contracts::filters::{DateRange, OrderFilter};

use crate::shared::components::{DateRangePicker, FilterPanel, SearchableSelect, StatCard};
use crate::shared::data::use_store;
use crate::shared::date_utils::format_date;
use crate::shared::number_format::{format_inr, format_inr_compact};

/// Orders table: lighter records than contracts, filtered by status, amount
/// bounds and order date.
#[component]
pub fn OrdersPage() -> impl IntoView {
    let store = use_store();
    let filter = RwSignal::new(OrderFilter::default());
    let panel_expanded = RwSignal::new(false);

    let statuses = Memo::new(move |_| {
        store.orders.with(|list| {
            let mut statuses = list
                .iter()
                .map(|o| o.status.clone())
                .collect::<std::collections::BTreeSet<_>>()
                .into_iter()
                .collect::<Vec<_>>();
            statuses.sort();
            statuses
        })
    });

    let filtered = Memo::new(move |_| {
        let filter = filter.get();
        store.orders.with(|list| {
            list.iter()
                .filter(|o| filter.matches(o))
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let total_value =
        Memo::new(move |_| filtered.get().iter().map(|o| o.total_price).sum::<f64>());
    let delivered = Memo::new(move |_| {
        filtered
            .get()
            .iter()
            .filter(|o| o.status == "Delivered")
            .count()
    });

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Orders"</h1>
            </div>

            <div class="stat-grid">
                <StatCard
                    label="Orders".to_string()
                    icon_name="shopping-cart".to_string()
                    value=Signal::derive(move || filtered.get().len().to_string())
                />
                <StatCard
                    label="Order Value".to_string()
                    icon_name="trending-up".to_string()
                    value=Signal::derive(move || format_inr_compact(total_value.get()))
                />
                <StatCard
                    label="Delivered".to_string()
                    icon_name="file-text".to_string()
                    value=Signal::derive(move || delivered.get().to_string())
                />
            </div>

            <FilterPanel
                is_expanded=panel_expanded
                active_filters_count=Signal::derive(move || filter.with(|f| f.active_count()))
                on_reset=Callback::new(move |_| filter.set(OrderFilter::default()))
                filter_content=ChildrenFn::to_children(move || {
                    view! {
                        <div class="filter-grid">
                            <div class="field">
                                <span class="field__label">"Status"</span>
                                <SearchableSelect
                                    options=Signal::derive(move || statuses.get())
                                    value=Signal::derive(move || filter.with(|f| f.status.clone()))
                                    placeholder="All statuses".to_string()
                                    on_change=Callback::new(move |status| {
                                        filter.update(|f| f.status = status);
                                    })
                                />
                            </div>
                            <div class="field">
                                <span class="field__label">"Amount range"</span>
                                <div class="field__pair">
                                    <input
                                        type="number"
                                        class="field__input"
                                        placeholder="Min"
                                        prop:value=move || {
                                            filter.with(|f| {
                                                if f.min_amount > 0.0 {
                                                    f.min_amount.to_string()
                                                } else {
                                                    String::new()
                                                }
                                            })
                                        }
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev)
                                                .parse::<f64>()
                                                .unwrap_or(0.0);
                                            filter.update(|f| f.min_amount = value);
                                        }
                                    />
                                    <input
                                        type="number"
                                        class="field__input"
                                        placeholder="Max"
                                        prop:value=move || {
                                            filter.with(|f| {
                                                if f.max_amount > 0.0 {
                                                    f.max_amount.to_string()
                                                } else {
                                                    String::new()
                                                }
                                            })
                                        }
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev)
                                                .parse::<f64>()
                                                .unwrap_or(0.0);
                                            filter.update(|f| f.max_amount = value);
                                        }
                                    />
                                </div>
                            </div>
                            <DateRangePicker
                                value=Signal::derive(move || filter.with(|f| f.date_range))
                                on_change=Callback::new(move |range: DateRange| {
                                    filter.update(|f| f.date_range = range);
                                })
                                label="Order date".to_string()
                            />
                        </div>
                    }
                    .into_any()
                })
            />

            <div class="panel">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Order"</th>
                            <th>"Product"</th>
                            <th>"Date"</th>
                            <th>"Seller"</th>
                            <th>"OEM"</th>
                            <th>"Status"</th>
                            <th class="data-table__num">"Qty"</th>
                            <th class="data-table__num">"Total"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = filtered.get();
                            if rows.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="8" class="empty-state">
                                            "No orders match the current filters."
                                        </td>
                                    </tr>
                                }
                                .into_any()
                            } else {
                                rows.into_iter()
                                    .map(|o| {
                                        view! {
                                            <tr>
                                                <td>{o.id.clone()}</td>
                                                <td>{o.product.clone()}</td>
                                                <td>{format_date(o.order_date)}</td>
                                                <td>{o.seller.clone()}</td>
                                                <td>{o.oem.clone()}</td>
                                                <td>
                                                    <span class="badge">{o.status.clone()}</span>
                                                </td>
                                                <td class="data-table__num">{o.quantity}</td>
                                                <td class="data-table__num">
                                                    {format_inr(o.total_price)}
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
