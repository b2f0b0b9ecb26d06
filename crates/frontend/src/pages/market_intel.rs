use leptos::prelude::*;

use contracts::analytics::competitor_analytics;

use crate::shared::components::{BarChart, BarRow, SearchableSelect, StatCard};
use crate::shared::data::use_store;
use crate::shared::icons::icon;
use crate::shared::number_format::{format_inr, format_inr_compact, format_share};
use crate::shared::toast::use_toast;
use crate::system::auth::context::use_auth;

/// Market intelligence for the signed-in brand: own position versus the
/// competing brands inside one category. Accounts without the analytics
/// panel see a locked screen with an access prompt instead.
#[component]
pub fn MarketIntelPage() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let store = use_store();
    let toasts = use_toast();

    let selected_category = RwSignal::new(String::new());

    let user_brand = Memo::new(move |_| {
        auth_state
            .get()
            .user
            .map(|u| u.primary_brand().to_string())
            .unwrap_or_default()
    });

    let unlocked = Memo::new(move |_| {
        auth_state
            .get()
            .user
            .map(|u| u.panel_access.analytics)
            .unwrap_or(false)
    });

    // Only categories the brand actually sells in are offered.
    let brand_categories = Memo::new(move |_| {
        let brand = user_brand.get();
        store.contracts.with(|list| {
            let mut categories = list
                .iter()
                .filter(|c| c.brand == brand)
                .map(|c| c.product.category_name.clone())
                .collect::<std::collections::BTreeSet<_>>()
                .into_iter()
                .collect::<Vec<_>>();
            categories.sort();
            categories
        })
    });

    let analysis = Memo::new(move |_| {
        let category = selected_category.get();
        if category.is_empty() {
            return None;
        }
        let brand = user_brand.get();
        Some(store.contracts.with(|list| {
            competitor_analytics(list, &brand, &category)
        }))
    });

    let request_access = move |_| {
        toasts.info(
            "Request sent",
            "An administrator will review your analytics access request.",
        );
    };

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Market Intelligence"</h1>
                <span class="page-header__meta">
                    {move || format!("Brand: {}", user_brand.get())}
                </span>
            </div>

            <Show
                when=move || unlocked.get()
                fallback=move || {
                    view! {
                        <div class="panel empty-state locked-state">
                            {icon("lock")}
                            <h2>"Analytics access required"</h2>
                            <p>
                                "Market intelligence is available to accounts with the \
                                 analytics panel enabled."
                            </p>
                            <button
                                type="button"
                                class="button button--primary"
                                on:click=request_access
                            >
                                "Request Access"
                            </button>
                        </div>
                    }
                }
            >
                <div class="panel">
                    <div class="field">
                        <span class="field__label">"Category"</span>
                        <SearchableSelect
                            options=Signal::derive(move || brand_categories.get())
                            value=Signal::derive(move || selected_category.get())
                            placeholder="Select a category".to_string()
                            on_change=Callback::new(move |value| selected_category.set(value))
                        />
                    </div>
                </div>

                {move || {
                    let Some(analysis) = analysis.get() else {
                        return view! {
                            <div class="panel empty-state">
                                <p>"Pick a category to see your market position."</p>
                            </div>
                        }
                        .into_any();
                    };

                    let competitor_rows = analysis
                        .competitors
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
                    let locations = analysis.location_analysis.clone();
                    let own_brand = analysis.user_brand.clone();

                    view! {
                        <div class="stat-grid">
                            <StatCard
                                label="Your Market Share".to_string()
                                icon_name="trending-up".to_string()
                                value=Signal::derive({
                                    let share = analysis.user_performance.market_share;
                                    move || format_share(share)
                                })
                            />
                            <StatCard
                                label="Your Contracts".to_string()
                                icon_name="file-text".to_string()
                                value=Signal::derive({
                                    let count = analysis.user_performance.contract_count;
                                    move || count.to_string()
                                })
                            />
                            <StatCard
                                label="Your Contract Value".to_string()
                                icon_name="credit-card".to_string()
                                value=Signal::derive({
                                    let value = analysis.user_performance.contract_value;
                                    move || format_inr_compact(value)
                                })
                            />
                            <StatCard
                                label="Category Value".to_string()
                                icon_name="bar-chart".to_string()
                                value=Signal::derive({
                                    let value = analysis.total_category_value;
                                    move || format_inr_compact(value)
                                })
                                subtitle=format!(
                                    "{} contracts in category",
                                    analysis.total_category_contracts,
                                )
                            />
                        </div>

                        <div class="panel">
                            <h2>"Competing brands"</h2>
                            <BarChart rows=Signal::derive(move || competitor_rows.clone()) />
                        </div>

                        <div class="panel">
                            <h2>"Where the category buys"</h2>
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"State"</th>
                                        <th class="data-table__num">"Contracts"</th>
                                        <th class="data-table__num">"Value"</th>
                                        <th class="data-table__num">"Your share there"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {locations
                                        .iter()
                                        .map(|state| {
                                            let own = state
                                                .brands
                                                .iter()
                                                .find(|b| b.brand_name == own_brand)
                                                .map(|b| b.market_share)
                                                .unwrap_or(0.0);
                                            view! {
                                                <tr>
                                                    <td>{state.state_name.clone()}</td>
                                                    <td class="data-table__num">
                                                        {state.contract_count}
                                                    </td>
                                                    <td class="data-table__num">
                                                        {format_inr(state.contract_value)}
                                                    </td>
                                                    <td class="data-table__num">
                                                        {format_share(own)}
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        </div>
                    }
                    .into_any()
                }}
            </Show>
        </div>
    }
}
