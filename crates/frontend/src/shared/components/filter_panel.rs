use leptos::prelude::*;

use crate::shared::icons::icon;

/// Collapsible filter panel with an active-filter badge and a reset button.
#[component]
pub fn FilterPanel(
    #[prop(into)] is_expanded: RwSignal<bool>,
    #[prop(into)] active_filters_count: Signal<usize>,
    on_reset: Callback<()>,
    #[prop(into)] filter_content: ChildrenFn,
) -> impl IntoView {
    let toggle = move |_| is_expanded.update(|e| *e = !*e);

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left" on:click=toggle>
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>
                        {icon("chevron-down")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        if count > 0 {
                            view! {
                                <span class="badge badge--primary">{count}</span>
                            }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }}
                </div>
                <button
                    type="button"
                    class="button button--ghost"
                    disabled=move || active_filters_count.get() == 0
                    on:click=move |_| on_reset.run(())
                >
                    {icon("x")}
                    "Reset"
                </button>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    {filter_content()}
                </div>
            </div>
        </div>
    }
}
