//! Centralized toast notifications, provided via context like the modal
//! service: any page can push a toast, the host renders the stack and each
//! toast dismisses itself after a few seconds.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const AUTO_DISMISS_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn push(&self, kind: ToastKind, title: &str, message: &str) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                title: title.to_string(),
                message: message.to_string(),
                kind,
            })
        });

        let toasts = self.toasts;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(AUTO_DISMISS_MS).await;
            toasts.update(|list| list.retain(|t| t.id != id));
        });
    }

    pub fn info(&self, title: &str, message: &str) {
        self.push(ToastKind::Info, title, message);
    }

    pub fn success(&self, title: &str, message: &str) {
        self.push(ToastKind::Success, title, message);
    }

    pub fn error(&self, title: &str, message: &str) {
        self.push(ToastKind::Error, title, message);
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not found in context")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_toast();

    view! {
        <div class="toast-host">
            {move || {
                service
                    .toasts
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let kind_class = match toast.kind {
                            ToastKind::Info => "toast",
                            ToastKind::Success => "toast toast--success",
                            ToastKind::Error => "toast toast--error",
                        };
                        let id = toast.id;
                        view! {
                            <div class=kind_class on:click=move |_| service.dismiss(id)>
                                <div class="toast__title">{toast.title}</div>
                                <div class="toast__message">{toast.message}</div>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
