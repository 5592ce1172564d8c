//! Delete Confirm Dialog Component
//!
//! Confirmation prompt for the part pending deletion. The delete endpoint is
//! only hit after the user confirms here.

use leptos::prelude::*;

use crate::state::PartMasterState;

#[component]
pub fn DeleteConfirmDialog(
    state: RwSignal<PartMasterState>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let deleting = move || state.with(|s| s.delete_in_flight);

    view! {
        <div class="dialog-overlay">
            <div class="dialog confirm">
                <h2>"Confirm Deletion"</h2>
                <p>"Delete the following part?"</p>

                {move || state.with(|s| s.delete_target.clone()).map(|part| view! {
                    <dl class="confirm-target">
                        <dt>"Part No."</dt>
                        <dd>{part.id}</dd>
                        <dt>"Part Name"</dt>
                        <dd>{part.name}</dd>
                    </dl>
                })}

                <div class="dialog-actions">
                    <button
                        class="cancel-btn"
                        disabled=deleting
                        on:click=move |_| state.update(|s| s.cancel_delete())
                    >
                        "Cancel"
                    </button>
                    <button class="danger" disabled=deleting on:click=move |_| on_confirm.run(())>
                        {move || if deleting() { "Deleting..." } else { "Delete" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
