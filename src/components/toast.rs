//! Toast Component
//!
//! Renders the current notification and arms its auto-dismiss timer. The
//! timer only clears the notification it was armed for, so a toast raised
//! later is never cut short by an earlier timer.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::state::{PartMasterState, Severity, NOTIFICATION_TIMEOUT_MS};

#[component]
pub fn Toast(state: RwSignal<PartMasterState>) -> impl IntoView {
    // One timer per notification, keyed by its sequence number
    let toast_seq = Memo::new(move |_| state.with(|s| s.notification.as_ref().map(|n| n.seq)));
    Effect::new(move |_| {
        if let Some(seq) = toast_seq.get() {
            spawn_local(async move {
                TimeoutFuture::new(NOTIFICATION_TIMEOUT_MS).await;
                state.update(|s| s.expire_notification(seq));
            });
        }
    });

    view! {
        {move || state.with(|s| s.notification.clone()).map(|toast| {
            let class = match toast.severity {
                Severity::Success => "toast success",
                Severity::Error => "toast error",
            };
            view! {
                <div class=class>
                    <span class="toast-message">{toast.message}</span>
                    <button
                        class="toast-dismiss"
                        on:click=move |_| state.update(|s| s.dismiss_notification())
                    >
                        "✕"
                    </button>
                </div>
            }
        })}
    }
}
