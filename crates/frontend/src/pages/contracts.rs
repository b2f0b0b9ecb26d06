use leptos::prelude::*;

use contracts::analytics::unique_brands;
use contracts::domain::Contract;
use contracts::filters::{ContractFilter, DateRange};

use crate::shared::components::{DateRangePicker, FilterPanel, SearchableSelect};
use crate::shared::data::use_store;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::number_format::format_inr;
use crate::shared::toast::use_toast;

const STATUS_OPTIONS: [&str; 3] = ["Completed", "In Progress", "Cancelled"];
const PROCUREMENT_OPTIONS: [&str; 3] = ["Direct Purchase", "Bid", "L1 Purchase"];
const CATALOGUE_OPTIONS: [&str; 2] = ["Published", "Pending Approval"];
const VERIFICATION_OPTIONS: [&str; 2] = ["Verified", "Unverified"];

fn toggle(list: &mut Vec<String>, value: &str) {
    if let Some(pos) = list.iter().position(|v| v == value) {
        list.remove(pos);
    } else {
        list.push(value.to_string());
    }
}

#[component]
fn CheckboxGroup(
    label: &'static str,
    options: &'static [&'static str],
    filter: RwSignal<ContractFilter>,
    get: fn(&ContractFilter) -> &Vec<String>,
    get_mut: fn(&mut ContractFilter) -> &mut Vec<String>,
) -> impl IntoView {
    view! {
        <div class="field">
            <span class="field__label">{label}</span>
            <div class="checkbox-group">
                {options
                    .iter()
                    .map(|&option| {
                        view! {
                            <label class="checkbox">
                                <input
                                    type="checkbox"
                                    prop:checked=move || {
                                        filter.with(|f| get(f).iter().any(|v| v == option))
                                    }
                                    on:change=move |_| {
                                        filter.update(|f| toggle(get_mut(f), option));
                                    }
                                />
                                <span>{option}</span>
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ContractRow(contract: Contract) -> impl IntoView {
    let expanded = RwSignal::new(false);
    let detail = contract.clone();

    view! {
        <tr class="data-table__row--clickable" on:click=move |_| expanded.update(|e| *e = !*e)>
            <td>{contract.contract_number.clone()}</td>
            <td>{format_date(contract.contract_date)}</td>
            <td>{contract.buyer.organization_name.clone()}</td>
            <td>{contract.seller.name().to_string()}</td>
            <td>{contract.brand.clone()}</td>
            <td>
                <span class="badge">{contract.contract_status.clone()}</span>
            </td>
            <td class="data-table__num">{format_inr(contract.contract_value)}</td>
        </tr>
        <Show when=move || expanded.get()>
            <tr class="data-table__detail">
                <td colspan="7">
                    <div class="detail-grid">
                        <div>
                            <span class="detail-grid__label">"Product"</span>
                            {format!(
                                "{} ({}), qty {} @ {}",
                                detail.product.product_name,
                                detail.product.product_model,
                                detail.product.quantity,
                                format_inr(detail.product.unit_price),
                            )}
                        </div>
                        <div>
                            <span class="detail-grid__label">"Category"</span>
                            {detail.product.category_name.clone()}
                        </div>
                        <div>
                            <span class="detail-grid__label">"Procurement"</span>
                            {detail.procurement_type.clone()}
                            {detail
                                .bid_number
                                .as_ref()
                                .map(|bid| format!(" ({bid})"))
                                .unwrap_or_default()}
                        </div>
                        <div>
                            <span class="detail-grid__label">"Buyer address"</span>
                            {detail.buyer.buyer_address.clone()}
                        </div>
                        <div>
                            <span class="detail-grid__label">"Seller"</span>
                            {format!(
                                "{} · {}",
                                detail.seller.name(),
                                detail.seller.verified_status(),
                            )}
                        </div>
                        <div>
                            <span class="detail-grid__label">"Consignee"</span>
                            {detail.consignee.consignee_address.clone()}
                        </div>
                    </div>
                </td>
            </tr>
        </Show>
    }
}

/// Contracts table with the consolidated filter panel.
#[component]
pub fn ContractsPage() -> impl IntoView {
    let store = use_store();
    let toasts = use_toast();
    let filter = RwSignal::new(ContractFilter::default());
    let panel_expanded = RwSignal::new(false);

    let brands = Memo::new(move |_| store.contracts.with(|list| unique_brands(list)));

    let filtered = Memo::new(move |_| {
        let filter = filter.get();
        store.contracts.with(|list| {
            list.iter()
                .filter(|c| filter.matches(c))
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let filtered_value = Memo::new(move |_| {
        filtered
            .get()
            .iter()
            .map(|c| c.contract_value)
            .sum::<f64>()
    });

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Contracts"</h1>
                <span class="page-header__meta">
                    {move || {
                        format!(
                            "{} contracts · {}",
                            filtered.get().len(),
                            format_inr(filtered_value.get()),
                        )
                    }}
                </span>
            </div>

            <div class="toolbar">
                <div class="toolbar__search">
                    {icon("search")}
                    <input
                        type="text"
                        class="field__input"
                        placeholder="Search contracts, buyers, sellers..."
                        prop:value=move || filter.with(|f| f.search.clone())
                        on:input=move |ev| {
                            filter.update(|f| f.search = event_target_value(&ev));
                        }
                    />
                </div>
                // Exports are simulated; the button only acknowledges.
                <button
                    type="button"
                    class="button button--ghost"
                    on:click=move |_| {
                        let count = filtered.get_untracked().len();
                        toasts.info(
                            "Export queued",
                            &format!("Preparing {count} contracts for download."),
                        );
                    }
                >
                    {icon("download")}
                    "Export"
                </button>
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
                                    on_change=Callback::new(move |brand| {
                                        filter.update(|f| f.brand = brand);
                                    })
                                />
                            </div>
                            <CheckboxGroup
                                label="Status"
                                options=&STATUS_OPTIONS
                                filter=filter
                                get=|f| &f.contract_status
                                get_mut=|f| &mut f.contract_status
                            />
                            <CheckboxGroup
                                label="Procurement type"
                                options=&PROCUREMENT_OPTIONS
                                filter=filter
                                get=|f| &f.procurement_type
                                get_mut=|f| &mut f.procurement_type
                            />
                            <CheckboxGroup
                                label="Catalogue status"
                                options=&CATALOGUE_OPTIONS
                                filter=filter
                                get=|f| &f.catalogue_status
                                get_mut=|f| &mut f.catalogue_status
                            />
                            <CheckboxGroup
                                label="Seller verification"
                                options=&VERIFICATION_OPTIONS
                                filter=filter
                                get=|f| &f.seller_verification
                                get_mut=|f| &mut f.seller_verification
                            />
                            <div class="field">
                                <span class="field__label">"Value range"</span>
                                <div class="field__pair">
                                    <input
                                        type="number"
                                        class="field__input"
                                        placeholder="Min"
                                        prop:value=move || {
                                            filter.with(|f| {
                                                if f.min_value > 0.0 {
                                                    f.min_value.to_string()
                                                } else {
                                                    String::new()
                                                }
                                            })
                                        }
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev)
                                                .parse::<f64>()
                                                .unwrap_or(0.0);
                                            filter.update(|f| f.min_value = value);
                                        }
                                    />
                                    <input
                                        type="number"
                                        class="field__input"
                                        placeholder="Max"
                                        prop:value=move || {
                                            filter.with(|f| {
                                                if f.max_value > 0.0 {
                                                    f.max_value.to_string()
                                                } else {
                                                    String::new()
                                                }
                                            })
                                        }
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev)
                                                .parse::<f64>()
                                                .unwrap_or(0.0);
                                            filter.update(|f| f.max_value = value);
                                        }
                                    />
                                </div>
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

            <div class="panel">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Contract"</th>
                            <th>"Date"</th>
                            <th>"Buyer"</th>
                            <th>"Seller"</th>
                            <th>"Brand"</th>
                            <th>"Status"</th>
                            <th class="data-table__num">"Value"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = filtered.get();
                            if rows.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="7" class="empty-state">
                                            "No contracts match the current filters."
                                        </td>
                                    </tr>
                                }
                                .into_any()
                            } else {
                                rows.into_iter()
                                    .map(|c| view! { <ContractRow contract=c /> })
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
