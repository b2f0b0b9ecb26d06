use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;

use crate::shared::icons::icon;
use crate::shared::toast::use_toast;

#[derive(Clone, Debug, PartialEq)]
enum UploadState {
    Idle,
    Selected { name: String, size_kb: f64 },
    Processing { name: String },
    Done { name: String },
}

/// Bulk upload screen. File contents are not parsed here; the selected file
/// is run through a simulated processing pass so the rest of the flow
/// (progress, completion toast) can be exercised end to end.
#[component]
pub fn DataUploadPage() -> impl IntoView {
    let toasts = use_toast();
    let state = RwSignal::new(UploadState::Idle);

    let on_file = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            state.set(UploadState::Idle);
            return;
        };
        state.set(UploadState::Selected {
            name: file.name(),
            size_kb: file.size() / 1024.0,
        });
    };

    let process = move |_| {
        let UploadState::Selected { name, .. } = state.get_untracked() else {
            return;
        };
        state.set(UploadState::Processing { name: name.clone() });
        spawn_local(async move {
            // Stand-in for the real import pipeline.
            gloo_timers::future::TimeoutFuture::new(1_500).await;
            toasts.success(
                "Upload processed",
                &format!("{name} has been queued for import."),
            );
            state.set(UploadState::Done { name });
        });
    };

    let reset = move |_| state.set(UploadState::Idle);

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Data Upload"</h1>
            </div>

            <div class="panel form-panel">
                <div class="upload-zone">
                    {icon("upload")}
                    <p>"Select a contract export to import into the dashboard."</p>
                    <input type="file" accept=".json,.csv,.xlsx" on:change=on_file />
                </div>

                {move || match state.get() {
                    UploadState::Idle => view! {
                        <p class="page-header__meta">"No file selected."</p>
                    }
                    .into_any(),
                    UploadState::Selected { name, size_kb } => view! {
                        <div class="upload-status">
                            <p>{format!("{name} · {size_kb:.1} KB")}</p>
                            <button
                                type="button"
                                class="button button--primary"
                                on:click=process
                            >
                                "Process file"
                            </button>
                        </div>
                    }
                    .into_any(),
                    UploadState::Processing { name } => view! {
                        <div class="upload-status">
                            <p>{format!("Processing {name}...")}</p>
                            <div class="progress progress--indeterminate"></div>
                        </div>
                    }
                    .into_any(),
                    UploadState::Done { name } => view! {
                        <div class="upload-status">
                            <p>{format!("{name} processed.")}</p>
                            <button
                                type="button"
                                class="button button--ghost"
                                on:click=reset
                            >
                                "Upload another file"
                            </button>
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}
