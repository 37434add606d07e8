use super::{CopyMark, Terminal};
use crate::clipboard::CopyFeedback;
use crate::config::INSTALL_COMMAND;
use leptos::prelude::*;
use leptos_router::components::A;

const HERO_ASCII: &str = r#"████████╗ ██████╗     ██████╗ ███████╗██████╗ ██╗      ██████╗ ██╗   ██╗
╚══██╔══╝██╔════╝     ██╔══██╗██╔════╝██╔══██╗██║     ██╔═══██╗╚██╗ ██╔╝
   ██║   ██║  ███╗    ██║  ██║█████╗  ██████╔╝██║     ██║   ██║ ╚████╔╝
   ██║   ██║   ██║    ██║  ██║██╔══╝  ██╔═══╝ ██║     ██║   ██║  ╚██╔╝
   ██║   ╚██████╔╝    ██████╔╝███████╗██║     ███████╗╚██████╔╝   ██║
   ╚═╝    ╚═════╝     ╚═════╝ ╚══════╝╚═╝     ╚══════╝ ╚═════╝    ╚═╝   "#;

#[component]
pub fn Hero(feedback: CopyFeedback) -> impl IntoView {
    view! {
        <section id="features" class="hero">
            <div class="container">
                <div class="hero-content">
                    <pre class="hero-ascii">{HERO_ASCII}</pre>

                    <h1 class="hero-title">
                        "Деплой одним сообщением "
                        <span class="hero-title-accent">"в Telegram"</span>
                        ","
                        <br />
                        "без "
                        <span class="hero-title-gradient">"консоли и VPN"</span>
                        "."
                    </h1>

                    <p class="hero-description">
                        "Напишите боту /deploy — и ваш сервис уже в продакшне. Откат, статус, логи — "
                        "всё прямо из Telegram. Работает с любым сервером и любым стеком."
                    </p>

                    <div class="hero-actions">
                        <button
                            class="btn btn-primary"
                            on:click=move |_| feedback.copy(INSTALL_COMMAND, "hero-install")
                        >
                            <CopyMark feedback=feedback flag="hero-install" />
                            <span class="muted">"$"</span>
                            <span>{INSTALL_COMMAND}</span>
                        </button>
                        <A href="/docs" attr:class="btn btn-secondary">
                            <span class="muted">"->"</span>
                            <span>"Документация"</span>
                        </A>
                    </div>
                </div>

                <Terminal />
            </div>
        </section>
    }
}
