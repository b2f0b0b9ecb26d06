use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;

/// Two-column application frame: collapsible sidebar on the left, the active
/// page in the content area.
#[component]
pub fn Shell(
    left: impl Fn() -> AnyView + Send + Sync + 'static,
    center: impl Fn() -> AnyView + Send + Sync + 'static,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="shell">
            <aside class=move || {
                if ctx.sidebar_open.get() {
                    "shell__sidebar"
                } else {
                    "shell__sidebar shell__sidebar--collapsed"
                }
            }>
                {left()}
            </aside>
            <main class="shell__content">
                {center()}
            </main>
        </div>
    }
}
