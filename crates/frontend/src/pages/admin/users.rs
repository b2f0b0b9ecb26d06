use chrono::Utc;
use leptos::prelude::*;
use uuid::Uuid;

use contracts::domain::{
    balance_amount, PanelAccess, SalesData, Transaction, TransactionKind, TransactionStatus, User,
    UserRole,
};
use contracts::filters::UserFilter;
use contracts::store::DirectoryError;

use crate::shared::data::{use_store, RecordStore};
use crate::shared::icons::icon;
use crate::shared::number_format::format_inr;
use crate::shared::toast::{use_toast, ToastService};

fn run_transition(
    store: RecordStore,
    toasts: ToastService,
    success: &str,
    transition: impl FnOnce(&mut contracts::store::UserDirectory) -> Result<(), DirectoryError>,
) {
    let mut outcome = Ok(());
    let mut transition = Some(transition);
    store.users.update(|dir| {
        if let Some(t) = transition.take() {
            outcome = t(dir);
        }
    });
    match outcome {
        Ok(()) => toasts.success("Done", success),
        Err(err) => toasts.error("Update failed", &err.to_string()),
    }
}

#[component]
fn AddUserForm(on_close: Callback<()>) -> impl IntoView {
    let store = use_store();
    let toasts = use_toast();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let organization = RwSignal::new(String::new());
    let admin_role = RwSignal::new(false);

    let submit = move |_| {
        let name_v = name.get_untracked().trim().to_string();
        let email_v = email.get_untracked().trim().to_string();
        if name_v.is_empty() || email_v.is_empty() {
            toasts.error("Missing fields", "Name and email are required.");
            return;
        }
        let user = User {
            id: Uuid::new_v4().to_string(),
            name: name_v,
            email: email_v,
            phone: phone.get_untracked().trim().to_string(),
            role: if admin_role.get_untracked() {
                UserRole::Admin
            } else {
                UserRole::User
            },
            organization: organization.get_untracked().trim().to_string(),
            is_active: true,
            created_at: Utc::now(),
            last_login: None,
            sales_data: SalesData::empty(),
            panel_access: PanelAccess::minimal(),
            brands: vec![],
            transactions: vec![],
            initial_payment: None,
        };
        run_transition(store, toasts, "User created.", move |dir| dir.add(user));
        on_close.run(());
    };

    view! {
        <div class="panel form-panel">
            <h2>"New user"</h2>
            <div class="filter-grid">
                <div class="field">
                    <span class="field__label">"Name"</span>
                    <input
                        type="text"
                        class="field__input"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    <span class="field__label">"Email"</span>
                    <input
                        type="email"
                        class="field__input"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    <span class="field__label">"Phone"</span>
                    <input
                        type="text"
                        class="field__input"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    <span class="field__label">"Organization"</span>
                    <input
                        type="text"
                        class="field__input"
                        prop:value=move || organization.get()
                        on:input=move |ev| organization.set(event_target_value(&ev))
                    />
                </div>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || admin_role.get()
                        on:change=move |ev| admin_role.set(event_target_checked(&ev))
                    />
                    <span>"Administrator"</span>
                </label>
            </div>
            <div class="form-panel__actions">
                <button type="button" class="button button--primary" on:click=submit>
                    "Create user"
                </button>
                <button
                    type="button"
                    class="button button--ghost"
                    on:click=move |_| on_close.run(())
                >
                    "Cancel"
                </button>
            </div>
        </div>
    }
}

#[component]
fn PanelAccessEditor(user: User) -> impl IntoView {
    let store = use_store();
    let toasts = use_toast();
    let id = user.id.clone();
    let access = RwSignal::new(user.panel_access);

    let flags: [(&'static str, fn(&PanelAccess) -> bool, fn(&mut PanelAccess) -> &mut bool); 5] = [
        ("Dashboard", |a| a.dashboard, |a| &mut a.dashboard),
        ("Contracts", |a| a.contracts, |a| &mut a.contracts),
        ("Analytics", |a| a.analytics, |a| &mut a.analytics),
        ("Sellers", |a| a.sellers, |a| &mut a.sellers),
        ("Settings", |a| a.settings, |a| &mut a.settings),
    ];

    view! {
        <div class="field">
            <span class="field__label">"Panel access"</span>
            <div class="checkbox-group">
                {flags
                    .into_iter()
                    .map(|(label, get, get_mut)| {
                        let id = id.clone();
                        view! {
                            <label class="checkbox">
                                <input
                                    type="checkbox"
                                    prop:checked=move || access.with(|a| get(a))
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        access.update(|a| *get_mut(a) = checked);
                                        let next = access.get_untracked();
                                        let id = id.clone();
                                        run_transition(
                                            store,
                                            toasts,
                                            "Panel access updated.",
                                            move |dir| dir.set_panel_access(&id, next),
                                        );
                                    }
                                />
                                <span>{label}</span>
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn UserEditor(user: User) -> impl IntoView {
    let store = use_store();
    let toasts = use_toast();

    let brands_input = RwSignal::new(user.brands.join(", "));
    let payment_amount = RwSignal::new(String::new());
    let payment_received = RwSignal::new(String::new());
    let payment_note = RwSignal::new(String::new());

    let save_brands = {
        let id = user.id.clone();
        move |_| {
            let brands = brands_input
                .get_untracked()
                .split(',')
                .map(str::trim)
                .filter(|b| !b.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>();
            let id = id.clone();
            run_transition(store, toasts, "Brands updated.", move |dir| {
                dir.set_brands(&id, brands)
            });
        }
    };

    let record_payment = {
        let id = user.id.clone();
        move |_| {
            let Ok(amount) = payment_amount.get_untracked().parse::<f64>() else {
                toasts.error("Invalid amount", "Enter the payment amount as a number.");
                return;
            };
            if amount <= 0.0 {
                toasts.error("Invalid amount", "The payment amount must be positive.");
                return;
            }
            let received = payment_received
                .get_untracked()
                .parse::<f64>()
                .unwrap_or(amount);
            let description = {
                let note = payment_note.get_untracked();
                if note.trim().is_empty() {
                    "Commission payout".to_string()
                } else {
                    note.trim().to_string()
                }
            };
            let balance = balance_amount(amount, received);
            let transaction = Transaction {
                id: Uuid::new_v4().to_string(),
                date: Utc::now(),
                amount,
                kind: TransactionKind::Credit,
                description,
                status: TransactionStatus::Completed,
                receive_amount: Some(received),
                balance_amount: (balance > 0.0).then_some(balance),
            };
            let id = id.clone();
            run_transition(store, toasts, "Payment recorded.", move |dir| {
                dir.record_transaction(&id, transaction)
            });
            payment_amount.set(String::new());
            payment_received.set(String::new());
            payment_note.set(String::new());
        }
    };

    view! {
        <div class="panel form-panel">
            <h2>{format!("Manage {}", user.name)}</h2>

            <PanelAccessEditor user=user.clone() />

            <div class="field">
                <span class="field__label">"Brands (comma separated)"</span>
                <div class="field__pair">
                    <input
                        type="text"
                        class="field__input"
                        prop:value=move || brands_input.get()
                        on:input=move |ev| brands_input.set(event_target_value(&ev))
                    />
                    <button type="button" class="button button--ghost" on:click=save_brands>
                        "Save"
                    </button>
                </div>
            </div>

            <div class="field">
                <span class="field__label">"Record payment"</span>
                <div class="field__pair">
                    <input
                        type="number"
                        class="field__input"
                        placeholder="Amount"
                        prop:value=move || payment_amount.get()
                        on:input=move |ev| payment_amount.set(event_target_value(&ev))
                    />
                    <input
                        type="number"
                        class="field__input"
                        placeholder="Received (defaults to amount)"
                        prop:value=move || payment_received.get()
                        on:input=move |ev| payment_received.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        class="field__input"
                        placeholder="Description"
                        prop:value=move || payment_note.get()
                        on:input=move |ev| payment_note.set(event_target_value(&ev))
                    />
                    <button type="button" class="button button--primary" on:click=record_payment>
                        "Record"
                    </button>
                </div>
                <span class="field__hint">
                    {format!(
                        "Pending: {} · Paid: {}",
                        format_inr(user.sales_data.pending_amount),
                        format_inr(user.sales_data.paid_amount),
                    )}
                </span>
            </div>
        </div>
    }
}

/// Admin user directory: filterable table plus the per-user management
/// editor running the directory state transitions.
#[component]
pub fn UserManagementPage() -> impl IntoView {
    let store = use_store();
    let toasts = use_toast();

    let filter = RwSignal::new(UserFilter::default());
    let adding = RwSignal::new(false);
    let selected = RwSignal::new(None::<String>);

    let filtered = Memo::new(move |_| {
        let filter = filter.get();
        store.users.with(|dir| {
            dir.snapshot()
                .into_iter()
                .filter(|u| filter.matches(u))
                .collect::<Vec<_>>()
        })
    });

    let selected_user = Memo::new(move |_| {
        let id = selected.get()?;
        store.users.with(|dir| dir.get(&id).cloned())
    });

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"User Management"</h1>
                <button
                    type="button"
                    class="button button--primary"
                    on:click=move |_| adding.update(|a| *a = !*a)
                >
                    {icon("plus")}
                    "Add user"
                </button>
            </div>

            <Show when=move || adding.get()>
                <AddUserForm on_close=Callback::new(move |_| adding.set(false)) />
            </Show>

            <div class="toolbar">
                <div class="toolbar__search">
                    {icon("search")}
                    <input
                        type="text"
                        class="field__input"
                        placeholder="Search name, email, organization..."
                        prop:value=move || filter.with(|f| f.search.clone())
                        on:input=move |ev| {
                            filter.update(|f| f.search = event_target_value(&ev));
                        }
                    />
                </div>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || filter.with(|f| f.role == Some(UserRole::Admin))
                        on:change=move |ev| {
                            let admins_only = event_target_checked(&ev);
                            filter.update(|f| {
                                f.role = admins_only.then_some(UserRole::Admin);
                            });
                        }
                    />
                    <span>"Admins only"</span>
                </label>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || filter.with(|f| f.active == Some(true))
                        on:change=move |ev| {
                            let active_only = event_target_checked(&ev);
                            filter.update(|f| f.active = active_only.then_some(true));
                        }
                    />
                    <span>"Active only"</span>
                </label>
            </div>

            <div class="panel">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Organization"</th>
                            <th>"Role"</th>
                            <th>"Brands"</th>
                            <th>"Status"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            filtered
                                .get()
                                .into_iter()
                                .map(|u| {
                                    let id = u.id.clone();
                                    let toggle_id = u.id.clone();
                                    let is_active = u.is_active;
                                    view! {
                                        <tr>
                                            <td>{u.name.clone()}</td>
                                            <td>{u.email.clone()}</td>
                                            <td>{u.organization.clone()}</td>
                                            <td>{u.role.label()}</td>
                                            <td>
                                                {if u.brands.is_empty() {
                                                    "—".to_string()
                                                } else {
                                                    u.brands.join(", ")
                                                }}
                                            </td>
                                            <td>
                                                <span class=if is_active {
                                                    "badge badge--success"
                                                } else {
                                                    "badge badge--error"
                                                }>
                                                    {if is_active { "Active" } else { "Inactive" }}
                                                </span>
                                            </td>
                                            <td>
                                                <button
                                                    type="button"
                                                    class="button button--ghost"
                                                    on:click=move |_| {
                                                        let id = toggle_id.clone();
                                                        run_transition(
                                                            store,
                                                            toasts,
                                                            if is_active {
                                                                "User deactivated."
                                                            } else {
                                                                "User activated."
                                                            },
                                                            move |dir| {
                                                                dir.set_active(&id, !is_active)
                                                            },
                                                        );
                                                    }
                                                >
                                                    {if is_active { "Deactivate" } else { "Activate" }}
                                                </button>
                                                <button
                                                    type="button"
                                                    class="button button--ghost"
                                                    on:click=move |_| {
                                                        selected.set(Some(id.clone()));
                                                    }
                                                >
                                                    "Manage"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>

            {move || {
                selected_user
                    .get()
                    .map(|user| view! { <UserEditor user=user /> })
            }}
        </div>
    }
}
