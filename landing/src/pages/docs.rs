// Docs page - sidebar navigator + static content blocks
use crate::clipboard::CopyFeedback;
use crate::config::Timing;
use crate::docs::{DocsContent, DocsNavBar, Sidebar};
use crate::navigator::DocsNavigator;
use leptos::prelude::*;

#[component]
pub fn DocsPage() -> impl IntoView {
    let nav = RwSignal::new(DocsNavigator::default());
    let feedback = CopyFeedback::new(Timing::default().copy_flash);

    view! {
        <div class="page docs">
            <DocsNavBar nav=nav />
            <div class="docs-layout">
                <Sidebar nav=nav />
                <DocsContent nav=nav feedback=feedback />
            </div>
            <Show when=move || nav.with(|n| n.sidebar_open())>
                <div class="docs-backdrop" on:click=move |_| nav.update(|n| n.close_sidebar())></div>
            </Show>
        </div>
    }
}
