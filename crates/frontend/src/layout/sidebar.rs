//! Sidebar with grouped navigation, gated by role and panel access.

use leptos::prelude::*;

use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    label: &'static str,
    items: Vec<Page>,
    admin_only: bool,
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label: "Overview",
            items: vec![Page::Dashboard],
            admin_only: false,
        },
        MenuGroup {
            label: "Records",
            items: vec![Page::Contracts, Page::Orders, Page::Sellers],
            admin_only: false,
        },
        MenuGroup {
            label: "Analytics",
            items: vec![Page::Analytics, Page::MarketIntel],
            admin_only: false,
        },
        MenuGroup {
            label: "Administration",
            items: vec![
                Page::CompetitorAnalytics,
                Page::UserManagement,
                Page::ManualEntry,
                Page::DataUpload,
            ],
            admin_only: true,
        },
        MenuGroup {
            label: "System",
            items: vec![Page::Settings],
            admin_only: false,
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, set_auth_state) = use_auth();

    let logout = move |_| {
        leptos::logging::log!("logout");
        set_auth_state.set(Default::default());
    };

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">
                {icon("bar-chart")}
                <span class="sidebar__brand-title">"GeM Insight"</span>
            </div>

            {move || {
                let user = auth_state.get().user;
                let Some(user) = user else {
                    return view! { <></> }.into_any();
                };
                menu_groups()
                    .into_iter()
                    .filter(|group| !group.admin_only || user.is_admin())
                    .map(|group| {
                        let items: Vec<Page> = group
                            .items
                            .iter()
                            .copied()
                            .filter(|page| page.accessible_to(&user))
                            .collect();
                        if items.is_empty() {
                            return view! { <></> }.into_any();
                        }
                        view! {
                            <div class="sidebar__group">
                                <div class="sidebar__group-label">{group.label}</div>
                                {items
                                    .into_iter()
                                    .map(|page| {
                                        view! {
                                            <button
                                                class=move || {
                                                    if ctx.active.get() == page {
                                                        "sidebar__item sidebar__item--active"
                                                    } else {
                                                        "sidebar__item"
                                                    }
                                                }
                                                on:click=move |_| ctx.navigate(page)
                                            >
                                                {icon(page.icon_name())}
                                                <span>{page.label()}</span>
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                        .into_any()
                    })
                    .collect_view()
                    .into_any()
            }}

            <div class="sidebar__footer">
                {move || {
                    auth_state.get().user.map(|user| {
                        view! {
                            <div class="sidebar__user">
                                <span class="sidebar__user-name">{user.name.clone()}</span>
                                <span class="badge badge--muted">{user.role.label()}</span>
                            </div>
                        }
                    })
                }}
                <button class="button button--secondary" on:click=logout>
                    {icon("log-out")}
                    "Sign out"
                </button>
            </div>
        </nav>
    }
}
