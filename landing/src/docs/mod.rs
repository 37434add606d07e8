//! Documentation page building blocks.
//!
//! ```text
//! DocsPage
//! ├── DocsNavBar (menu toggle)
//! ├── Sidebar
//! │   └── SidebarGroup → SidebarLink
//! └── DocsContent (one block per ContentBlock)
//!     ├── GettingStarted / Installation / Configuration
//!     ├── Generate / ModelSelection / IdeSetup
//!     └── Overview (fallback)
//! ```

mod code_line;
mod guides;
mod overview;
mod reference;
mod sidebar;

pub use code_line::{CodeLine, OptionRow};
pub use sidebar::{DocsNavBar, Sidebar};

use crate::clipboard::CopyFeedback;
use crate::navigator::{ContentBlock, DocsNavigator};
use guides::{Configuration, GettingStarted, Installation};
use leptos::prelude::*;
use overview::Overview;
use reference::{Generate, IdeSetup, ModelSelection};

fn render_block(block: ContentBlock, nav: RwSignal<DocsNavigator>, feedback: CopyFeedback) -> AnyView {
    match block {
        ContentBlock::Overview => view! { <Overview nav=nav /> }.into_any(),
        ContentBlock::GettingStarted => view! { <GettingStarted nav=nav feedback=feedback /> }.into_any(),
        ContentBlock::Installation => view! { <Installation feedback=feedback /> }.into_any(),
        ContentBlock::Configuration => view! { <Configuration feedback=feedback /> }.into_any(),
        ContentBlock::Generate => view! { <Generate feedback=feedback /> }.into_any(),
        ContentBlock::ModelSelection => view! { <ModelSelection feedback=feedback /> }.into_any(),
        ContentBlock::IdeSetup => view! { <IdeSetup feedback=feedback /> }.into_any(),
    }
}

/// Content pane; re-renders only when the resolved block changes.
#[component]
pub fn DocsContent(nav: RwSignal<DocsNavigator>, feedback: CopyFeedback) -> impl IntoView {
    let block = Memo::new(move |_| nav.with(|n| n.block()));

    view! {
        <main class="docs-main" data-section=move || nav.with(|n| n.active().to_string())>
            <div class="docs-main-inner">
                {move || render_block(block.get(), nav, feedback)}
            </div>
        </main>
    }
}
