use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use contracts::domain::{Buyer, Consignee, Contract, Product, Seller, SellerDetails};

use crate::layout::global_context::AppGlobalContext;
use crate::shared::data::use_store;
use crate::shared::date_utils::parse_input_date;
use crate::shared::number_format::format_inr;
use crate::shared::toast::use_toast;

const FORM_KEY: &str = "manual-entry";
const STEP_TITLES: [&str; 5] = ["Contract", "Buyer", "Seller", "Product", "Review"];

/// All form fields as entered, kept as strings so a half-filled draft
/// serializes losslessly into the global form state.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
struct ContractDraft {
    contract_number: String,
    contract_date: String,
    contract_status: String,
    procurement_type: String,
    contract_value: String,
    brand: String,
    bid_number: String,

    buyer_name: String,
    buyer_email: String,
    buyer_contact: String,
    buyer_address: String,
    organization_name: String,
    ministry: String,

    seller_detailed: bool,
    seller_name: String,
    seller_email: String,
    seller_contact: String,
    seller_address: String,
    seller_gst: String,
    seller_verified: bool,
    consignee_name: String,
    consignee_email: String,
    consignee_contact: String,
    consignee_address: String,

    product_name: String,
    product_model: String,
    quantity: String,
    unit_price: String,
    category_name: String,
    catalogue_status: String,
}

impl ContractDraft {
    fn total_value(&self) -> Option<f64> {
        let quantity = self.quantity.parse::<u32>().ok()?;
        let unit_price = self.unit_price.parse::<f64>().ok()?;
        Some(quantity as f64 * unit_price)
    }

    /// First problem with the given step, if any.
    fn validate_step(&self, step: usize) -> Option<&'static str> {
        match step {
            0 => {
                if self.contract_number.trim().is_empty() {
                    return Some("Contract number is required.");
                }
                if parse_input_date(&self.contract_date).is_none() {
                    return Some("Pick a contract date.");
                }
                if self.brand.trim().is_empty() {
                    return Some("Brand is required.");
                }
                if self.procurement_type == "Bid" && self.bid_number.trim().is_empty() {
                    return Some("Bid contracts need a bid number.");
                }
                None
            }
            1 => {
                if self.buyer_name.trim().is_empty() {
                    return Some("Buyer name is required.");
                }
                if self.organization_name.trim().is_empty() {
                    return Some("Organization is required.");
                }
                if self.buyer_address.trim().is_empty() {
                    return Some("Buyer address is required.");
                }
                None
            }
            2 => {
                if self.seller_name.trim().is_empty() {
                    return Some("Seller name is required.");
                }
                if self.seller_detailed && self.seller_gst.trim().is_empty() {
                    return Some("Detailed seller records need a GST number.");
                }
                None
            }
            3 => {
                if self.product_name.trim().is_empty() {
                    return Some("Product name is required.");
                }
                if self.quantity.parse::<u32>().map(|q| q == 0).unwrap_or(true) {
                    return Some("Quantity must be a positive whole number.");
                }
                if self
                    .unit_price
                    .parse::<f64>()
                    .map(|p| p <= 0.0)
                    .unwrap_or(true)
                {
                    return Some("Unit price must be a positive amount.");
                }
                if self.category_name.trim().is_empty() {
                    return Some("Category is required.");
                }
                None
            }
            _ => None,
        }
    }

    fn into_contract(self) -> Option<Contract> {
        let contract_date = parse_input_date(&self.contract_date)?;
        let quantity = self.quantity.parse::<u32>().ok()?;
        let unit_price = self.unit_price.parse::<f64>().ok()?;
        let total = quantity as f64 * unit_price;

        let seller = if self.seller_detailed {
            Seller::Detailed(SellerDetails {
                seller_name: self.seller_name.trim().to_string(),
                seller_email: self.seller_email.trim().to_string(),
                seller_contact_number: self.seller_contact.trim().to_string(),
                seller_address: self.seller_address.trim().to_string(),
                seller_gst_number: self.seller_gst.trim().to_string(),
                seller_verified_status: if self.seller_verified {
                    "Verified"
                } else {
                    "Unverified"
                }
                .to_string(),
            })
        } else {
            Seller::Named(self.seller_name.trim().to_string())
        };

        Some(Contract {
            contract_number: self.contract_number.trim().to_string(),
            contract_status: self.contract_status,
            contract_date,
            procurement_type: self.procurement_type,
            contract_value: total,
            brand: self.brand.trim().to_string(),
            bid_number: {
                let bid = self.bid_number.trim();
                (!bid.is_empty()).then(|| bid.to_string())
            },
            buyer: Buyer {
                buyer_name: self.buyer_name.trim().to_string(),
                buyer_email: self.buyer_email.trim().to_string(),
                buyer_contact_number: self.buyer_contact.trim().to_string(),
                buyer_address: self.buyer_address.trim().to_string(),
                organization_name: self.organization_name.trim().to_string(),
                ministry: {
                    let m = self.ministry.trim();
                    (!m.is_empty()).then(|| m.to_string())
                },
                department: None,
            },
            seller,
            consignee: Consignee {
                consignee_name: self.consignee_name.trim().to_string(),
                consignee_email: self.consignee_email.trim().to_string(),
                consignee_contact_number: self.consignee_contact.trim().to_string(),
                consignee_address: if self.consignee_address.trim().is_empty() {
                    self.buyer_address.trim().to_string()
                } else {
                    self.consignee_address.trim().to_string()
                },
            },
            product: Product {
                product_name: self.product_name.trim().to_string(),
                product_model: self.product_model.trim().to_string(),
                quantity,
                unit_price,
                total_order_value: total,
                category_name: self.category_name.trim().to_string(),
                catalogue_status: self.catalogue_status,
            },
        })
    }
}

fn fresh_draft() -> ContractDraft {
    ContractDraft {
        contract_status: "Completed".to_string(),
        procurement_type: "Direct Purchase".to_string(),
        catalogue_status: "Published".to_string(),
        ..Default::default()
    }
}

#[component]
fn TextField(
    label: &'static str,
    draft: RwSignal<ContractDraft>,
    get: fn(&ContractDraft) -> &String,
    get_mut: fn(&mut ContractDraft) -> &mut String,
    #[prop(optional)] input_type: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="field">
            <span class="field__label">{label}</span>
            <input
                type=input_type.unwrap_or("text")
                class="field__input"
                prop:value=move || draft.with(|d| get(d).clone())
                on:input=move |ev| {
                    draft.update(|d| *get_mut(d) = event_target_value(&ev));
                }
            />
        </div>
    }
}

#[component]
fn SelectField(
    label: &'static str,
    options: &'static [&'static str],
    draft: RwSignal<ContractDraft>,
    get: fn(&ContractDraft) -> &String,
    get_mut: fn(&mut ContractDraft) -> &mut String,
) -> impl IntoView {
    view! {
        <div class="field">
            <span class="field__label">{label}</span>
            <select
                class="field__input"
                prop:value=move || draft.with(|d| get(d).clone())
                on:change=move |ev| {
                    draft.update(|d| *get_mut(d) = event_target_value(&ev));
                }
            >
                {options
                    .iter()
                    .map(|&option| {
                        view! {
                            <option
                                value=option
                                selected=move || draft.with(|d| get(d) == option)
                            >
                                {option}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

/// Five-step contract entry wizard. Each step validates before advancing,
/// drafts survive navigation through the global form state, and the computed
/// total always follows quantity times unit price.
#[component]
pub fn ManualEntryPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let store = use_store();
    let toasts = use_toast();

    let restored = ctx
        .get_form_state(FORM_KEY)
        .and_then(|value| serde_json::from_value::<ContractDraft>(value).ok());
    let draft = RwSignal::new(restored.unwrap_or_else(fresh_draft));
    let step = RwSignal::new(0usize);
    let error = RwSignal::new(None::<&'static str>);

    let save_draft = move || {
        if let Ok(value) = serde_json::to_value(draft.get_untracked()) {
            ctx.set_form_state(FORM_KEY.to_string(), value);
        }
    };

    let back = move |_| {
        error.set(None);
        step.update(|s| *s = s.saturating_sub(1));
    };

    let next = move |_| {
        let current = step.get_untracked();
        if let Some(problem) = draft.with_untracked(|d| d.validate_step(current)) {
            error.set(Some(problem));
            return;
        }
        error.set(None);
        save_draft();
        step.update(|s| *s = (*s + 1).min(STEP_TITLES.len() - 1));
    };

    let submit = move |_| {
        for s in 0..STEP_TITLES.len() {
            if let Some(problem) = draft.with_untracked(|d| d.validate_step(s)) {
                error.set(Some(problem));
                step.set(s);
                return;
            }
        }
        match draft.get_untracked().into_contract() {
            Some(contract) => {
                let number = contract.contract_number.clone();
                store.add_contract(contract);
                ctx.set_form_state(FORM_KEY.to_string(), serde_json::Value::Null);
                draft.set(fresh_draft());
                step.set(0);
                error.set(None);
                toasts.success("Contract added", &format!("{number} is now in the dataset."));
            }
            None => error.set(Some("The draft has invalid values, check each step.")),
        }
    };

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Manual Entry"</h1>
            </div>

            <div class="panel form-panel">
                <div class="wizard-steps">
                    {STEP_TITLES
                        .iter()
                        .enumerate()
                        .map(|(index, title)| {
                            view! {
                                <span class=move || {
                                    if step.get() == index {
                                        "wizard-step wizard-step--active"
                                    } else if step.get() > index {
                                        "wizard-step wizard-step--done"
                                    } else {
                                        "wizard-step"
                                    }
                                }>
                                    {format!("{}. {title}", index + 1)}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>

                {move || {
                    error
                        .get()
                        .map(|message| view! { <div class="form-error">{message}</div> })
                }}

                {move || match step.get() {
                    0 => view! {
                        <div class="filter-grid">
                            <TextField
                                label="Contract number"
                                draft=draft
                                get=|d| &d.contract_number
                                get_mut=|d| &mut d.contract_number
                            />
                            <TextField
                                label="Contract date"
                                draft=draft
                                get=|d| &d.contract_date
                                get_mut=|d| &mut d.contract_date
                                input_type="date"
                            />
                            <SelectField
                                label="Status"
                                options=&["Completed", "In Progress", "Cancelled"]
                                draft=draft
                                get=|d| &d.contract_status
                                get_mut=|d| &mut d.contract_status
                            />
                            <SelectField
                                label="Procurement type"
                                options=&["Direct Purchase", "Bid", "L1 Purchase"]
                                draft=draft
                                get=|d| &d.procurement_type
                                get_mut=|d| &mut d.procurement_type
                            />
                            <TextField
                                label="Brand"
                                draft=draft
                                get=|d| &d.brand
                                get_mut=|d| &mut d.brand
                            />
                            <TextField
                                label="Bid number (bid contracts)"
                                draft=draft
                                get=|d| &d.bid_number
                                get_mut=|d| &mut d.bid_number
                            />
                        </div>
                    }
                    .into_any(),
                    1 => view! {
                        <div class="filter-grid">
                            <TextField
                                label="Buyer name"
                                draft=draft
                                get=|d| &d.buyer_name
                                get_mut=|d| &mut d.buyer_name
                            />
                            <TextField
                                label="Buyer email"
                                draft=draft
                                get=|d| &d.buyer_email
                                get_mut=|d| &mut d.buyer_email
                                input_type="email"
                            />
                            <TextField
                                label="Buyer contact"
                                draft=draft
                                get=|d| &d.buyer_contact
                                get_mut=|d| &mut d.buyer_contact
                            />
                            <TextField
                                label="Buyer address"
                                draft=draft
                                get=|d| &d.buyer_address
                                get_mut=|d| &mut d.buyer_address
                            />
                            <TextField
                                label="Organization"
                                draft=draft
                                get=|d| &d.organization_name
                                get_mut=|d| &mut d.organization_name
                            />
                            <TextField
                                label="Ministry (optional)"
                                draft=draft
                                get=|d| &d.ministry
                                get_mut=|d| &mut d.ministry
                            />
                        </div>
                    }
                    .into_any(),
                    2 => view! {
                        <div class="filter-grid">
                            <label class="checkbox">
                                <input
                                    type="checkbox"
                                    prop:checked=move || draft.with(|d| d.seller_detailed)
                                    on:change=move |ev| {
                                        let detailed = event_target_checked(&ev);
                                        draft.update(|d| d.seller_detailed = detailed);
                                    }
                                />
                                <span>"Full seller record (otherwise name only)"</span>
                            </label>
                            <TextField
                                label="Seller name"
                                draft=draft
                                get=|d| &d.seller_name
                                get_mut=|d| &mut d.seller_name
                            />
                            <Show when=move || draft.with(|d| d.seller_detailed)>
                                <TextField
                                    label="Seller email"
                                    draft=draft
                                    get=|d| &d.seller_email
                                    get_mut=|d| &mut d.seller_email
                                    input_type="email"
                                />
                                <TextField
                                    label="Seller contact"
                                    draft=draft
                                    get=|d| &d.seller_contact
                                    get_mut=|d| &mut d.seller_contact
                                />
                                <TextField
                                    label="Seller address"
                                    draft=draft
                                    get=|d| &d.seller_address
                                    get_mut=|d| &mut d.seller_address
                                />
                                <TextField
                                    label="GST number"
                                    draft=draft
                                    get=|d| &d.seller_gst
                                    get_mut=|d| &mut d.seller_gst
                                />
                                <label class="checkbox">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || draft.with(|d| d.seller_verified)
                                        on:change=move |ev| {
                                            let verified = event_target_checked(&ev);
                                            draft.update(|d| d.seller_verified = verified);
                                        }
                                    />
                                    <span>"Verified seller"</span>
                                </label>
                            </Show>
                            <TextField
                                label="Consignee name"
                                draft=draft
                                get=|d| &d.consignee_name
                                get_mut=|d| &mut d.consignee_name
                            />
                            <TextField
                                label="Consignee email"
                                draft=draft
                                get=|d| &d.consignee_email
                                get_mut=|d| &mut d.consignee_email
                                input_type="email"
                            />
                            <TextField
                                label="Consignee contact"
                                draft=draft
                                get=|d| &d.consignee_contact
                                get_mut=|d| &mut d.consignee_contact
                            />
                            <TextField
                                label="Consignee address (defaults to buyer)"
                                draft=draft
                                get=|d| &d.consignee_address
                                get_mut=|d| &mut d.consignee_address
                            />
                        </div>
                    }
                    .into_any(),
                    3 => view! {
                        <div class="filter-grid">
                            <TextField
                                label="Product name"
                                draft=draft
                                get=|d| &d.product_name
                                get_mut=|d| &mut d.product_name
                            />
                            <TextField
                                label="Model"
                                draft=draft
                                get=|d| &d.product_model
                                get_mut=|d| &mut d.product_model
                            />
                            <TextField
                                label="Quantity"
                                draft=draft
                                get=|d| &d.quantity
                                get_mut=|d| &mut d.quantity
                                input_type="number"
                            />
                            <TextField
                                label="Unit price"
                                draft=draft
                                get=|d| &d.unit_price
                                get_mut=|d| &mut d.unit_price
                                input_type="number"
                            />
                            <TextField
                                label="Category"
                                draft=draft
                                get=|d| &d.category_name
                                get_mut=|d| &mut d.category_name
                            />
                            <SelectField
                                label="Catalogue status"
                                options=&["Published", "Pending Approval"]
                                draft=draft
                                get=|d| &d.catalogue_status
                                get_mut=|d| &mut d.catalogue_status
                            />
                            <div class="field">
                                <span class="field__label">"Total value"</span>
                                <span class="field__computed">
                                    {move || {
                                        draft
                                            .with(|d| d.total_value())
                                            .map(format_inr)
                                            .unwrap_or_else(|| "—".to_string())
                                    }}
                                </span>
                            </div>
                        </div>
                    }
                    .into_any(),
                    _ => view! {
                        <div class="detail-grid">
                            {move || {
                                draft.with(|d| {
                                    let total = d
                                        .total_value()
                                        .map(format_inr)
                                        .unwrap_or_else(|| "—".to_string());
                                    view! {
                                        <div>
                                            <span class="detail-grid__label">"Contract"</span>
                                            {format!(
                                                "{} · {} · {}",
                                                d.contract_number,
                                                d.contract_status,
                                                d.procurement_type,
                                            )}
                                        </div>
                                        <div>
                                            <span class="detail-grid__label">"Buyer"</span>
                                            {format!(
                                                "{} ({})",
                                                d.buyer_name,
                                                d.organization_name,
                                            )}
                                        </div>
                                        <div>
                                            <span class="detail-grid__label">"Seller"</span>
                                            {d.seller_name.clone()}
                                        </div>
                                        <div>
                                            <span class="detail-grid__label">"Product"</span>
                                            {format!(
                                                "{} × {} ({})",
                                                d.quantity,
                                                d.product_name,
                                                d.category_name,
                                            )}
                                        </div>
                                        <div>
                                            <span class="detail-grid__label">"Total value"</span>
                                            {total}
                                        </div>
                                    }
                                })
                            }}
                        </div>
                    }
                    .into_any(),
                }}

                <div class="form-panel__actions">
                    <button
                        type="button"
                        class="button button--ghost"
                        disabled=move || step.get() == 0
                        on:click=back
                    >
                        "Back"
                    </button>
                    <Show
                        when=move || step.get() == STEP_TITLES.len() - 1
                        fallback=move || {
                            view! {
                                <button
                                    type="button"
                                    class="button button--primary"
                                    on:click=next
                                >
                                    "Next"
                                </button>
                            }
                        }
                    >
                        <button type="button" class="button button--primary" on:click=submit>
                            "Add contract"
                        </button>
                    </Show>
                    <button
                        type="button"
                        class="button button--ghost"
                        on:click=move |_| {
                            save_draft();
                            toasts.info("Draft saved", "The form will pick up where you left off.");
                        }
                    >
                        "Save draft"
                    </button>
                </div>
            </div>
        </div>
    }
}
