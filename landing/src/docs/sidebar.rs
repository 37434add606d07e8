use crate::content::{SIDEBAR_SECTIONS, SidebarItem, SidebarSection};
use crate::navigator::DocsNavigator;
use leptos::prelude::*;
use leptos_router::components::A;

/// Top bar of the docs page with the small-screen menu toggle.
#[component]
pub fn DocsNavBar(nav: RwSignal<DocsNavigator>) -> impl IntoView {
    let open = move || nav.with(|n| n.sidebar_open());

    view! {
        <nav class="nav docs-nav">
            <div class="nav-inner">
                <div class="nav-left">
                    <A href="/" attr:class="nav-brand">
                        <div class="window-dots">
                            <span class="dot red"></span>
                            <span class="dot yellow"></span>
                            <span class="dot green"></span>
                        </div>
                        <span class="nav-title">"FLUX"</span>
                        <span class="nav-subtitle">"CLI"</span>
                    </A>
                    <span class="nav-breadcrumb">"/ Документация"</span>
                </div>
                <button
                    class="menu-toggle"
                    on:click=move |_| nav.update(|n| n.toggle_sidebar())
                >
                    {move || if open() { "✕" } else { "☰" }}
                </button>
            </div>
        </nav>
    }
}

#[component]
pub fn Sidebar(nav: RwSignal<DocsNavigator>) -> impl IntoView {
    view! {
        <aside class=move || if nav.with(|n| n.sidebar_open()) { "docs-sidebar open" } else { "docs-sidebar" }>
            <div class="docs-sidebar-inner">
                <div class="docs-sidebar-title">
                    <span class="glyph">"[≡]"</span>
                    <h2>"Документация"</h2>
                </div>
                <nav class="docs-sidebar-nav">
                    {SIDEBAR_SECTIONS.iter().map(|section| view! {
                        <SidebarGroup nav=nav section=*section />
                    }).collect::<Vec<_>>()}
                </nav>
            </div>
        </aside>
    }
}

#[component]
fn SidebarGroup(nav: RwSignal<DocsNavigator>, section: SidebarSection) -> impl IntoView {
    let id = section.id;

    view! {
        <div class="sidebar-group">
            <div
                class=move || if nav.with(|n| n.is_active(id)) { "sidebar-heading active" } else { "sidebar-heading" }
                on:click=move |_| nav.update(|n| n.select(id))
            >
                <span class="glyph">{section.glyph}</span>
                <span class="sidebar-heading-title">{section.title}</span>
                <span class="chevron">"›"</span>
            </div>
            <div class="sidebar-items">
                {section.items.iter().map(|item| view! {
                    <SidebarLink nav=nav item=*item />
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
fn SidebarLink(nav: RwSignal<DocsNavigator>, item: SidebarItem) -> impl IntoView {
    let id = item.id;

    view! {
        <div
            class=move || if nav.with(|n| n.is_active(id)) { "sidebar-item active" } else { "sidebar-item" }
            on:click=move |_| nav.update(|n| n.select(id))
        >
            {item.title}
        </div>
    }
}
