use super::CopyMark;
use crate::clipboard::CopyFeedback;
use crate::config::{INSTALL_COMMAND, VERSION};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Nav(feedback: CopyFeedback) -> impl IntoView {
    view! {
        <nav class="nav">
            <div class="nav-inner">
                <div class="nav-left">
                    <div class="nav-brand">
                        <div class="window-dots">
                            <span class="dot red"></span>
                            <span class="dot yellow"></span>
                            <span class="dot green"></span>
                        </div>
                        <span class="nav-title">"TG"</span>
                        <span class="nav-subtitle">"DEPLOY"</span>
                    </div>
                    <div class="nav-links">
                        <a href="#features" class="nav-link">"Возможности"</a>
                        <a href="#models" class="nav-link">"Команды"</a>
                        <a href="#integrations" class="nav-link">"Интеграции"</a>
                        <A href="/docs" attr:class="nav-link">"Документация"</A>
                    </div>
                </div>
                <div class="nav-right">
                    <div class="nav-version">
                        <span class="pulse-dot"></span>
                        <span>{VERSION}</span>
                    </div>
                    <button
                        class="nav-cta"
                        on:click=move |_| feedback.copy(INSTALL_COMMAND, "nav-install")
                    >
                        <CopyMark feedback=feedback flag="nav-install" />
                        <span class="muted">"$"</span>
                        <span>"Установить"</span>
                    </button>
                </div>
            </div>
        </nav>
    }
}
