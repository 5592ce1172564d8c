//! Midrange Console App
//!
//! Root component: navigation shell switching between the console pages.

use leptos::prelude::*;

use crate::components::{ConnectionTest, Home, NavBar, PartMaster, TableBrowser};

/// Console pages reachable from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    ConnectionTest,
    Tables,
    PartMaster,
}

#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(Page::Home);

    view! {
        <div class="app-layout">
            <NavBar current_page=page set_page=set_page />

            <main class="main-content">
                {move || match page.get() {
                    Page::Home => view! { <Home set_page=set_page /> }.into_any(),
                    Page::ConnectionTest => view! { <ConnectionTest /> }.into_any(),
                    Page::Tables => view! { <TableBrowser /> }.into_any(),
                    Page::PartMaster => view! { <PartMaster /> }.into_any(),
                }}
            </main>
        </div>
    }
}
