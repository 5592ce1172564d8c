//! Navigation Bar Component
//!
//! Top bar with one button per page; the active page is highlighted.

use leptos::prelude::*;

use crate::app::Page;

const NAV_ITEMS: &[(Page, &str)] = &[
    (Page::Home, "Home"),
    (Page::ConnectionTest, "Connection Test"),
    (Page::Tables, "Table List"),
    (Page::PartMaster, "Part Master"),
];

#[component]
pub fn NavBar(current_page: ReadSignal<Page>, set_page: WriteSignal<Page>) -> impl IntoView {
    view! {
        <header class="nav-bar">
            <span class="nav-title" on:click=move |_| set_page.set(Page::Home)>
                "AS400 Web Console"
            </span>
            <nav class="nav-links">
                {NAV_ITEMS.iter().map(|(page, label)| {
                    let page = *page;
                    view! {
                        <button
                            class=move || {
                                if current_page.get() == page {
                                    "nav-btn active"
                                } else {
                                    "nav-btn"
                                }
                            }
                            on:click=move |_| set_page.set(page)
                        >
                            {*label}
                        </button>
                    }
                }).collect_view()}
            </nav>
        </header>
    }
}
