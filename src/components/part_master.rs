//! Part Master Screen Component
//!
//! Search, register, edit and delete part records. All business state lives
//! in the [`PartMasterState`] reducer; this component forwards user intents
//! to reducer transitions and dispatches the commands they return.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{DeleteConfirmDialog, PartFormDialog, Toast};
use crate::state::{DialogMode, ListState, PartMasterState, SaveCommand};

#[component]
pub fn PartMaster() -> impl IntoView {
    // Screen-local; created on mount, dropped on unmount
    let state = RwSignal::new(PartMasterState::new());

    let run_search = move || {
        let seq = state.try_update(|s| s.begin_search()).unwrap_or(0);
        let filter = state.with_untracked(|s| s.active_filter());
        spawn_local(async move {
            let result = api::list_parts(filter.as_deref()).await;
            if let Err(err) = &result {
                web_sys::console::error_1(&format!("[PartMaster] search failed: {err}").into());
            }
            state.update(|s| {
                s.finish_search(seq, result);
            });
        });
    };

    // Initial fetch on mount
    Effect::new(move |_| run_search());

    let on_save = move || {
        let Some(command) = state.try_update(|s| s.begin_save()).flatten() else {
            return;
        };
        spawn_local(async move {
            let result = match &command {
                SaveCommand::Create(part) => api::create_part(part).await,
                SaveCommand::Update { id, name } => api::update_part(*id, name).await,
            };
            let refresh = state.try_update(|s| s.finish_save(result)).unwrap_or(false);
            if refresh {
                run_search();
            }
        });
    };

    let on_confirm_delete = move || {
        let Some(id) = state.try_update(|s| s.begin_delete()).flatten() else {
            return;
        };
        spawn_local(async move {
            let result = api::delete_part(id).await;
            let refresh = state.try_update(|s| s.finish_delete(result)).unwrap_or(false);
            if refresh {
                run_search();
            }
        });
    };

    view! {
        <div class="page part-master">
            <h1>"Part Master"</h1>
            <p class="page-subtitle">"Register, update, and delete part records."</p>

            <div class="toolbar card">
                <input
                    type="number"
                    class="filter-input"
                    placeholder="Part number (at least)"
                    prop:value=move || state.with(|s| s.filter_text.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.filter_text = value);
                    }
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            run_search();
                        }
                    }
                />
                <button
                    class="search-btn"
                    disabled=move || state.with(|s| matches!(s.list, ListState::Loading))
                    on:click=move |_| run_search()
                >
                    "Search"
                </button>
                <button
                    class="create-btn primary"
                    on:click=move |_| state.update(|s| s.open_create())
                >
                    "New Part"
                </button>
            </div>

            {move || match state.with(|s| s.list.clone()) {
                ListState::Idle => view! { <span></span> }.into_any(),
                ListState::Loading => view! { <div class="loading">"Loading..."</div> }.into_any(),
                ListState::Error(message) => {
                    view! { <div class="alert error">{message}</div> }.into_any()
                }
                ListState::Loaded(parts) if parts.is_empty() => {
                    view! { <div class="alert info">"No parts found."</div> }.into_any()
                }
                ListState::Loaded(parts) => view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th class="col-id">"Part No."</th>
                                <th>"Part Name"</th>
                                <th class="col-actions">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || parts.clone()
                                key=|part| part.id
                                children=move |part| {
                                    let edit_target = part.clone();
                                    let delete_target = part.clone();
                                    view! {
                                        <tr>
                                            <td>{part.id}</td>
                                            <td>{part.name.clone()}</td>
                                            <td class="row-actions">
                                                <button
                                                    class="edit-btn"
                                                    title="Edit"
                                                    on:click=move |_| state.update(|s| s.open_edit(&edit_target))
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="delete-btn"
                                                    title="Delete"
                                                    on:click=move |_| state.update(|s| s.request_delete(delete_target.clone()))
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                }.into_any(),
            }}

            <Show when=move || state.with(|s| s.dialog != DialogMode::Closed)>
                <PartFormDialog state=state on_save=Callback::new(move |_| on_save()) />
            </Show>

            <Show when=move || state.with(|s| s.delete_target.is_some())>
                <DeleteConfirmDialog
                    state=state
                    on_confirm=Callback::new(move |_| on_confirm_delete())
                />
            </Show>

            <Toast state=state />
        </div>
    }
}
