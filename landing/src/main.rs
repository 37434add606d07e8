// TG Deploy site — Leptos 0.8 Edition
// Developed by The TG Deploy Team (c)2025

mod clipboard;
mod config;
mod content;
mod docs;
mod navigator;
mod pages;
mod sections;
mod sequencer;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use pages::{DocsPage, HomePage, NotFound};

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/docs") view=DocsPage />
            </Routes>
        </Router>
    }
}
