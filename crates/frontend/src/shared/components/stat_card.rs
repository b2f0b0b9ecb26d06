use leptos::prelude::*;

use crate::shared::icons::icon;

/// Summary card with a label, an icon and one formatted value.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Already formatted value
    #[prop(into)]
    value: Signal<String>,
    /// Optional subtitle below the value
    #[prop(optional)]
    subtitle: Option<String>,
    /// Optional click handler (cards that navigate somewhere)
    #[prop(optional)]
    on_click: Option<Callback<()>>,
) -> impl IntoView {
    let clickable = on_click.is_some();

    view! {
        <div
            class=move || {
                if clickable {
                    "stat-card stat-card--clickable"
                } else {
                    "stat-card"
                }
            }
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            <div class="stat-card__header">
                <span class="stat-card__label">{label}</span>
                {icon(&icon_name)}
            </div>
            <div class="stat-card__value">{move || value.get()}</div>
            {subtitle.map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
        </div>
    }
}
