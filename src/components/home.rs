//! Home Page Component
//!
//! Dashboard with one card per console function.

use leptos::prelude::*;

use crate::app::Page;

/// Target page, title, description
const MENU_ITEMS: &[(Page, &str, &str)] = &[
    (
        Page::ConnectionTest,
        "Connection Test",
        "Check the connection to the AS400 database",
    ),
    (
        Page::Tables,
        "Table List",
        "Browse the tables of a library",
    ),
    (
        Page::PartMaster,
        "Part Master",
        "Register, update, and delete parts",
    ),
];

#[component]
pub fn Home(set_page: WriteSignal<Page>) -> impl IntoView {
    view! {
        <div class="page home">
            <h1>"Dashboard"</h1>
            <p class="page-subtitle">"Choose a function to work with the AS400 data."</p>

            <div class="menu-grid">
                {MENU_ITEMS.iter().map(|(page, title, description)| {
                    let page = *page;
                    view! {
                        <div class="card menu-card" on:click=move |_| set_page.set(page)>
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
