//! Toast stack rendering and dismissal scheduling.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages raise toasts through [`notify`]; the host renders the shared queue
//! in a fixed corner stack. Auto-dismissal is a browser timer, so it is
//! hydrate-gated like other wall-clock glue.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;
use uuid::Uuid;

use crate::state::toast::{Toast, ToastState, ToastVariant};

/// How long a toast stays up before dismissing itself.
pub const AUTO_DISMISS_MS: u64 = 5_000;

/// Push a toast and schedule its auto-dismissal.
pub fn notify(toasts: RwSignal<ToastState>, variant: ToastVariant, title: String) {
    if let Some(id) = toasts.try_update(|state| state.push(variant, title)) {
        schedule_dismiss(toasts, id);
    }
}

#[cfg(feature = "hydrate")]
fn schedule_dismiss(toasts: RwSignal<ToastState>, id: Uuid) {
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(AUTO_DISMISS_MS)).await;
        toasts.update(|state| state.dismiss(id));
    });
}

#[cfg(not(feature = "hydrate"))]
fn schedule_dismiss(toasts: RwSignal<ToastState>, id: Uuid) {
    let _ = (toasts, id);
}

fn toast_class(variant: ToastVariant) -> &'static str {
    match variant {
        ToastVariant::Info => "toast",
        ToastVariant::Destructive => "toast toast--destructive",
    }
}

/// Renders the toast queue with manual close buttons.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|Toast { id, variant, title }| {
                        view! {
                            <div class=toast_class(variant)>
                                <span class="toast__title">{title}</span>
                                <button
                                    class="toast__close"
                                    aria-label="Dismiss"
                                    on:click=move |_| toasts.update(|state| state.dismiss(id))
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
