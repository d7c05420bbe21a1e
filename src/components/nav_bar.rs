//! Navigation Bar Component
//!
//! Switches between the page sections; exactly one button is active.

use leptos::prelude::*;

use crate::app::Page;

const PAGES: &[(Page, &str)] = &[
    (Page::Tasks, "Tasks"),
    (Page::Schedule, "Schedule"),
    (Page::Settings, "Settings"),
];

#[component]
pub fn NavBar(
    current_page: ReadSignal<Page>,
    set_current_page: WriteSignal<Page>,
) -> impl IntoView {
    view! {
        <nav class="nav-bar">
            {PAGES.iter().map(|(page, label)| {
                let page = *page;
                let is_active = move || current_page.get() == page;

                view! {
                    <button
                        class=move || if is_active() { "nav-btn active" } else { "nav-btn" }
                        on:click=move |_| set_current_page.set(page)
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
