use leptos::prelude::*;

use contracts::domain::{PaymentStatus, User};

use crate::shared::components::StatCard;
use crate::shared::number_format::{format_inr, format_share};
use crate::shared::toast::use_toast;
use crate::system::auth::context::use_auth;

fn payment_badge_class(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Complete => "badge badge--success",
        PaymentStatus::Partial => "badge badge--warning",
        PaymentStatus::Pending => "badge",
        PaymentStatus::Failed => "badge badge--error",
    }
}

#[component]
fn ProfilePanel(user: User) -> impl IntoView {
    view! {
        <div class="panel">
            <h2>"Profile"</h2>
            <div class="detail-grid">
                <div>
                    <span class="detail-grid__label">"Name"</span>
                    {user.name.clone()}
                </div>
                <div>
                    <span class="detail-grid__label">"Email"</span>
                    {user.email.clone()}
                </div>
                <div>
                    <span class="detail-grid__label">"Phone"</span>
                    {user.phone.clone()}
                </div>
                <div>
                    <span class="detail-grid__label">"Organization"</span>
                    {user.organization.clone()}
                </div>
                <div>
                    <span class="detail-grid__label">"Role"</span>
                    {user.role.label()}
                </div>
                <div>
                    <span class="detail-grid__label">"Brands"</span>
                    {if user.brands.is_empty() {
                        "—".to_string()
                    } else {
                        user.brands.join(", ")
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn PasswordPanel() -> impl IntoView {
    let toasts = use_toast();

    let current = RwSignal::new(String::new());
    let next = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());

    // Local-only, like the rest of the session: nothing is persisted.
    let save = move |_| {
        if current.get_untracked().is_empty() || next.get_untracked().is_empty() {
            toasts.error("Missing fields", "Fill in the current and new password.");
            return;
        }
        if next.get_untracked() != confirm.get_untracked() {
            toasts.error("Passwords differ", "The new password and its confirmation must match.");
            return;
        }
        current.set(String::new());
        next.set(String::new());
        confirm.set(String::new());
        toasts.success("Password changed", "Your password has been updated.");
    };

    view! {
        <div class="panel">
            <h2>"Password"</h2>
            <div class="filter-grid">
                <label class="field">
                    <span class="field__label">"Current password"</span>
                    <input
                        type="password"
                        class="field__input"
                        prop:value=move || current.get()
                        on:input=move |ev| current.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"New password"</span>
                    <input
                        type="password"
                        class="field__input"
                        prop:value=move || next.get()
                        on:input=move |ev| next.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Confirm new password"</span>
                    <input
                        type="password"
                        class="field__input"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                </label>
            </div>
            <button type="button" class="button button--primary" on:click=save>
                "Change password"
            </button>
        </div>
    }
}

#[component]
fn NotificationsPanel() -> impl IntoView {
    let toasts = use_toast();

    let contract_alerts = RwSignal::new(true);
    let payment_alerts = RwSignal::new(true);
    let weekly_digest = RwSignal::new(false);

    view! {
        <div class="panel">
            <h2>"Notifications"</h2>
            <div class="checkbox-group">
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || contract_alerts.get()
                        on:change=move |ev| contract_alerts.set(event_target_checked(&ev))
                    />
                    <span>"New contract alerts"</span>
                </label>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || payment_alerts.get()
                        on:change=move |ev| payment_alerts.set(event_target_checked(&ev))
                    />
                    <span>"Payment updates"</span>
                </label>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || weekly_digest.get()
                        on:change=move |ev| weekly_digest.set(event_target_checked(&ev))
                    />
                    <span>"Weekly market digest"</span>
                </label>
            </div>
            <button
                type="button"
                class="button button--ghost"
                on:click=move |_| {
                    toasts.success("Preferences saved", "Notification settings updated.");
                }
            >
                "Save preferences"
            </button>
        </div>
    }
}

#[component]
fn AppearancePanel() -> impl IntoView {
    let toasts = use_toast();

    let dark_mode = RwSignal::new(false);
    let compact_view = RwSignal::new(false);
    let high_contrast = RwSignal::new(false);

    view! {
        <div class="panel">
            <h2>"Appearance"</h2>
            <div class="checkbox-group">
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || dark_mode.get()
                        on:change=move |ev| dark_mode.set(event_target_checked(&ev))
                    />
                    <span>"Dark mode"</span>
                </label>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || compact_view.get()
                        on:change=move |ev| compact_view.set(event_target_checked(&ev))
                    />
                    <span>"Compact view"</span>
                </label>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || high_contrast.get()
                        on:change=move |ev| high_contrast.set(event_target_checked(&ev))
                    />
                    <span>"High contrast"</span>
                </label>
            </div>
            <button
                type="button"
                class="button button--ghost"
                on:click=move |_| {
                    toasts.success("Appearance saved", "Display settings updated.");
                }
            >
                "Save appearance"
            </button>
        </div>
    }
}

/// Account settings: profile details, the commission summary, payment history
/// with derived settlement states, plus password, notification and appearance
/// panels.
#[component]
pub fn SettingsPage() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Settings"</h1>
            </div>

            {move || {
                let Some(user) = auth_state.get().user else {
                    return view! { <></> }.into_any();
                };

                let sales = user.sales_data.clone();
                let commission_due = sales.total_sales * sales.commission_rate;
                let transactions = user.transactions.clone();
                let has_transactions = !transactions.is_empty();

                view! {
                    <ProfilePanel user=user.clone() />

                    <div class="panel">
                        <h2>"Commission summary"</h2>
                        <div class="stat-grid">
                            <StatCard
                                label="Total Sales".to_string()
                                icon_name="trending-up".to_string()
                                value=Signal::derive({
                                    let total = sales.total_sales;
                                    move || format_inr(total)
                                })
                            />
                            <StatCard
                                label="Commission Rate".to_string()
                                icon_name="activity".to_string()
                                value=Signal::derive({
                                    let rate = sales.commission_rate;
                                    move || format_share(rate * 100.0)
                                })
                            />
                            <StatCard
                                label="Commission Due".to_string()
                                icon_name="credit-card".to_string()
                                value=Signal::derive(move || format_inr(commission_due))
                            />
                            <StatCard
                                label="Pending".to_string()
                                icon_name="credit-card".to_string()
                                value=Signal::derive({
                                    let pending = sales.pending_amount;
                                    move || format_inr(pending)
                                })
                                subtitle=format!("Paid: {}", format_inr(sales.paid_amount))
                            />
                        </div>
                    </div>

                    <div class="panel">
                        <h2>"Payment history"</h2>
                        {if has_transactions {
                            view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Date"</th>
                                            <th>"Description"</th>
                                            <th class="data-table__num">"Amount"</th>
                                            <th class="data-table__num">"Received"</th>
                                            <th class="data-table__num">"Balance"</th>
                                            <th>"Status"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {transactions
                                            .iter()
                                            .map(|t| {
                                                let status = t.payment_status();
                                                view! {
                                                    <tr>
                                                        <td>
                                                            {t.date
                                                                .format("%d-%m-%Y")
                                                                .to_string()}
                                                        </td>
                                                        <td>{t.description.clone()}</td>
                                                        <td class="data-table__num">
                                                            {format_inr(t.amount)}
                                                        </td>
                                                        <td class="data-table__num">
                                                            {t.receive_amount
                                                                .map(format_inr)
                                                                .unwrap_or_else(|| {
                                                                    "—".to_string()
                                                                })}
                                                        </td>
                                                        <td class="data-table__num">
                                                            {t.balance_amount
                                                                .map(format_inr)
                                                                .unwrap_or_else(|| {
                                                                    "—".to_string()
                                                                })}
                                                        </td>
                                                        <td>
                                                            <span class=payment_badge_class(
                                                                status,
                                                            )>
                                                                {status.label()}
                                                            </span>
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            }
                            .into_any()
                        } else {
                            view! {
                                <div class="empty-state">
                                    <p>"No payments recorded yet."</p>
                                </div>
                            }
                            .into_any()
                        }}
                    </div>

                }
                .into_any()
            }}

            <PasswordPanel />
            <NotificationsPanel />
            <AppearancePanel />
        </div>
    }
}
