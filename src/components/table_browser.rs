//! Table Browser Page Component
//!
//! Lists the tables of a library by name. Read-only lookup, no state beyond
//! the current query and its result.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::TableInfo;

#[component]
pub fn TableBrowser() -> impl IntoView {
    let (library, set_library) = signal(String::new());
    let (tables, set_tables) = signal(Vec::<TableInfo>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (searched, set_searched) = signal(false);

    let fetch_tables = move || {
        let name = library.get_untracked().trim().to_string();
        if name.is_empty() {
            return;
        }
        set_loading.set(true);
        set_error.set(None);
        set_tables.set(Vec::new());
        set_searched.set(true);
        spawn_local(async move {
            match api::list_tables(&name).await {
                Ok(found) => {
                    web_sys::console::log_1(
                        &format!("[TableBrowser] {} tables in {}", found.len(), name).into(),
                    );
                    set_tables.set(found);
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    };

    let blank = move || library.get().trim().is_empty();

    view! {
        <div class="page table-browser">
            <h1>"Table List"</h1>
            <p class="page-subtitle">"Enter a library name to list its tables."</p>

            <div class="toolbar card">
                <input
                    type="text"
                    class="library-input"
                    placeholder="e.g. QIWS"
                    prop:value=move || library.get()
                    on:input=move |ev| set_library.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            fetch_tables();
                        }
                    }
                />
                <button
                    class="primary"
                    disabled=move || loading.get() || blank()
                    on:click=move |_| fetch_tables()
                >
                    {move || if loading.get() { "Fetching..." } else { "Fetch" }}
                </button>
            </div>

            {move || error.get().map(|message| view! {
                <div class="alert error">{message}</div>
            })}

            <Show when=move || {
                searched.get() && !loading.get() && error.get().is_none() && tables.get().is_empty()
            }>
                <div class="alert info">"No tables found in the given library."</div>
            </Show>

            <Show when=move || !tables.get().is_empty()>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Table Name"</th>
                            <th>"Type"</th>
                            <th>"Label"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || tables.get()
                            key=|table| table.table_name.clone()
                            children=move |table| {
                                view! {
                                    <tr>
                                        <td>{table.table_name.clone()}</td>
                                        <td>{table.table_type.clone()}</td>
                                        <td>{table.table_text.clone()}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
