use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::routes::AppRoutes;
use crate::shared::data::RecordStore;
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    // Navigation state and per-form draft storage for the whole app.
    provide_context(AppGlobalContext::new());

    // The in-memory record store, seeded with the demo dataset.
    provide_context(RecordStore::new());

    // Centralized toast notifications.
    provide_context(ToastService::new());

    view! {
        <AuthProvider>
            <AppRoutes />
            <ToastHost />
        </AuthProvider>
    }
}
