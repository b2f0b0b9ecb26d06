use leptos::prelude::*;

use crate::shared::icons::icon;

/// Single-select dropdown with a search box over its options. An empty value
/// means "no selection" and is rendered as the placeholder.
#[component]
pub fn SearchableSelect(
    #[prop(into)] options: Signal<Vec<String>>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] placeholder: String,
    on_change: Callback<String>,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let query = RwSignal::new(String::new());

    let filtered = Memo::new(move |_| {
        let q = query.get().to_lowercase();
        options
            .get()
            .into_iter()
            .filter(|opt| q.is_empty() || opt.to_lowercase().contains(&q))
            .collect::<Vec<_>>()
    });

    let toggle = move |_| {
        open.update(|o| *o = !*o);
        query.set(String::new());
    };

    let placeholder_text = placeholder.clone();

    view! {
        <div class="select">
            <button type="button" class="select__trigger" on:click=toggle>
                <span class=move || {
                    if value.get().is_empty() {
                        "select__value select__value--placeholder"
                    } else {
                        "select__value"
                    }
                }>
                    {move || {
                        let v = value.get();
                        if v.is_empty() {
                            placeholder_text.clone()
                        } else {
                            v
                        }
                    }}
                </span>
                {icon("chevron-down")}
            </button>

            <Show when=move || open.get()>
                <div class="select__dropdown">
                    <input
                        type="text"
                        class="select__search"
                        placeholder="Search..."
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                    <div class="select__options">
                        <button
                            type="button"
                            class="select__option select__option--clear"
                            on:click=move |_| {
                                on_change.run(String::new());
                                open.set(false);
                            }
                        >
                            "All"
                        </button>
                        {move || {
                            filtered
                                .get()
                                .into_iter()
                                .map(|opt| {
                                    let selected = opt == value.get();
                                    let opt_value = opt.clone();
                                    view! {
                                        <button
                                            type="button"
                                            class="select__option"
                                            class:select__option--selected=selected
                                            on:click=move |_| {
                                                on_change.run(opt_value.clone());
                                                open.set(false);
                                            }
                                        >
                                            {opt}
                                        </button>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>
            </Show>
        </div>
    }
}
