use leptos::prelude::*;

use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::sidebar::Sidebar;
use crate::layout::Shell;
use crate::pages;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;

#[component]
fn ActivePage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();

    move || {
        let page = ctx.active.get();
        let Some(user) = auth_state.get().user else {
            return view! { <></> }.into_any();
        };
        if !page.accessible_to(&user) {
            return view! {
                <div class="page">
                    <div class="empty-state">
                        <h2>"Access restricted"</h2>
                        <p>"Your account does not have access to this section."</p>
                    </div>
                </div>
            }
            .into_any();
        }
        match page {
            Page::Dashboard => view! { <pages::dashboard::DashboardPage /> }.into_any(),
            Page::Contracts => view! { <pages::contracts::ContractsPage /> }.into_any(),
            Page::Orders => view! { <pages::orders::OrdersPage /> }.into_any(),
            Page::Sellers => view! { <pages::sellers::SellersPage /> }.into_any(),
            Page::Analytics => view! { <pages::analytics::AnalyticsPage /> }.into_any(),
            Page::MarketIntel => view! { <pages::market_intel::MarketIntelPage /> }.into_any(),
            Page::CompetitorAnalytics => {
                view! { <pages::admin::competitor::CompetitorAnalyticsPage /> }.into_any()
            }
            Page::UserManagement => {
                view! { <pages::admin::users::UserManagementPage /> }.into_any()
            }
            Page::ManualEntry => view! { <pages::admin::manual_entry::ManualEntryPage /> }.into_any(),
            Page::DataUpload => view! { <pages::admin::data_upload::DataUploadPage /> }.into_any(),
            Page::Settings => view! { <pages::settings::SettingsPage /> }.into_any(),
        }
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <ActivePage /> }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().user.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
