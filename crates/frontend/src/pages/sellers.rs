use std::collections::HashMap;

use leptos::prelude::*;

use chrono::NaiveDate;

use crate::shared::data::use_store;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::number_format::format_inr;

#[derive(Clone, Debug, PartialEq)]
struct SellerRow {
    name: String,
    gst_number: String,
    verified_status: String,
    brands: Vec<String>,
    contract_count: usize,
    contract_value: f64,
    last_contract: NaiveDate,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum SortField {
    Name,
    Contracts,
    Value,
}

/// Sellers aggregated from the contract feed, one row per seller name, with
/// sortable columns and a free-text search over the seller record.
#[component]
pub fn SellersPage() -> impl IntoView {
    let store = use_store();
    let search = RwSignal::new(String::new());
    let sort_field = RwSignal::new(SortField::Value);
    let sort_desc = RwSignal::new(true);

    let rows = Memo::new(move |_| {
        let term = search.get();
        store.contracts.with(|list| {
            let mut by_name: HashMap<String, SellerRow> = HashMap::new();
            for contract in list {
                if !term.is_empty() && !contract.seller.matches_term(&term) {
                    continue;
                }
                let row = by_name
                    .entry(contract.seller.name().to_string())
                    .or_insert_with(|| SellerRow {
                        name: contract.seller.name().to_string(),
                        gst_number: contract.seller.gst_number().to_string(),
                        verified_status: contract.seller.verified_status().to_string(),
                        brands: Vec::new(),
                        contract_count: 0,
                        contract_value: 0.0,
                        last_contract: contract.contract_date,
                    });
                row.contract_count += 1;
                row.contract_value += contract.contract_value;
                row.last_contract = row.last_contract.max(contract.contract_date);
                if !row.brands.contains(&contract.brand) {
                    row.brands.push(contract.brand.clone());
                }
            }

            let mut rows: Vec<SellerRow> = by_name.into_values().collect();
            for row in &mut rows {
                row.brands.sort();
            }

            let field = sort_field.get();
            let desc = sort_desc.get();
            rows.sort_by(|a, b| {
                let ord = match field {
                    SortField::Name => a.name.cmp(&b.name),
                    SortField::Contracts => a.contract_count.cmp(&b.contract_count),
                    SortField::Value => a.contract_value.total_cmp(&b.contract_value),
                };
                let ord = if desc { ord.reverse() } else { ord };
                ord.then_with(|| a.name.cmp(&b.name))
            });
            rows
        })
    });

    let sort_by = move |field: SortField| {
        if sort_field.get_untracked() == field {
            sort_desc.update(|d| *d = !*d);
        } else {
            sort_field.set(field);
            sort_desc.set(field != SortField::Name);
        }
    };

    let sort_marker = move |field: SortField| {
        if sort_field.get() == field {
            if sort_desc.get() { " ▾" } else { " ▴" }
        } else {
            ""
        }
    };

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Sellers"</h1>
                <span class="page-header__meta">
                    {move || format!("{} sellers", rows.get().len())}
                </span>
            </div>

            <div class="toolbar">
                <div class="toolbar__search">
                    {icon("search")}
                    <input
                        type="text"
                        class="field__input"
                        placeholder="Search name, email, address, GST..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="panel">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th
                                class="data-table__sortable"
                                on:click=move |_| sort_by(SortField::Name)
                            >
                                {move || format!("Seller{}", sort_marker(SortField::Name))}
                            </th>
                            <th>"GST"</th>
                            <th>"Verification"</th>
                            <th>"Brands"</th>
                            <th>"Latest contract"</th>
                            <th
                                class="data-table__num data-table__sortable"
                                on:click=move |_| sort_by(SortField::Contracts)
                            >
                                {move || format!("Contracts{}", sort_marker(SortField::Contracts))}
                            </th>
                            <th
                                class="data-table__num data-table__sortable"
                                on:click=move |_| sort_by(SortField::Value)
                            >
                                {move || format!("Value{}", sort_marker(SortField::Value))}
                            </th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = rows.get();
                            if rows.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="7" class="empty-state">
                                            "No sellers match the search."
                                        </td>
                                    </tr>
                                }
                                .into_any()
                            } else {
                                rows.into_iter()
                                    .map(|row| {
                                        view! {
                                            <tr>
                                                <td>{row.name}</td>
                                                <td>
                                                    {if row.gst_number.is_empty() {
                                                        "—".to_string()
                                                    } else {
                                                        row.gst_number
                                                    }}
                                                </td>
                                                <td>
                                                    <span class="badge">
                                                        {row.verified_status}
                                                    </span>
                                                </td>
                                                <td>{row.brands.join(", ")}</td>
                                                <td>{format_date(row.last_contract)}</td>
                                                <td class="data-table__num">
                                                    {row.contract_count}
                                                </td>
                                                <td class="data-table__num">
                                                    {format_inr(row.contract_value)}
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
