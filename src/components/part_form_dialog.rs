//! Part Form Dialog Component
//!
//! Create/edit modal bound to the reducer's form state. The part number is
//! shown but locked while editing; both buttons are locked while a save is
//! in flight.

use leptos::prelude::*;

use crate::state::{DialogMode, PartMasterState};
use crate::validate::{PART_ID_MAX, PART_ID_MIN, PART_NAME_MAX_LEN};

#[component]
pub fn PartFormDialog(
    state: RwSignal<PartMasterState>,
    #[prop(into)] on_save: Callback<()>,
) -> impl IntoView {
    let is_edit = move || state.with(|s| matches!(s.dialog, DialogMode::Edit { .. }));
    let saving = move || state.with(|s| s.save_in_flight);

    view! {
        <div class="dialog-overlay">
            <div class="dialog">
                <h2>
                    {move || if is_edit() { "Part Master - Edit" } else { "Part Master - Register" }}
                </h2>

                {move || state.with(|s| s.form_error.clone()).map(|message| view! {
                    <div class="alert error">{message}</div>
                })}

                <label class="form-field">
                    "Part No."
                    <input
                        type="number"
                        min=PART_ID_MIN
                        max=PART_ID_MAX
                        prop:value=move || state.with(|s| s.form.id_text.clone())
                        disabled=is_edit
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.form.id_text = value);
                        }
                    />
                </label>

                <label class="form-field">
                    "Part Name"
                    <input
                        type="text"
                        maxlength=PART_NAME_MAX_LEN
                        prop:value=move || state.with(|s| s.form.name_text.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.form.name_text = value);
                        }
                    />
                </label>

                <div class="dialog-actions">
                    <button
                        class="cancel-btn"
                        disabled=saving
                        on:click=move |_| state.update(|s| s.close_dialog())
                    >
                        "Cancel"
                    </button>
                    <button class="primary" disabled=saving on:click=move |_| on_save.run(())>
                        {move || {
                            if saving() {
                                "Saving..."
                            } else if is_edit() {
                                "Update"
                            } else {
                                "Register"
                            }
                        }}
                    </button>
                </div>
            </div>
        </div>
    }
}
