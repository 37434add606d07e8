use super::CopyMark;
use crate::clipboard::CopyFeedback;
use crate::config::INSTALL_COMMAND;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn GetStarted(feedback: CopyFeedback) -> impl IntoView {
    view! {
        <section id="docs" class="get-started">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Начните деплоить из Telegram"</h2>
                    <p class="section-description">
                        "Три шага — и ваша команда деплоит сервисы прямо из мессенджера. "
                        "Без VPN, без SSH, без лишних инструментов."
                    </p>
                </div>

                <div class="steps-grid">
                    <StepCard
                        feedback=feedback
                        number="01"
                        title="Установка"
                        description="Установите пакет и создайте Telegram-бота через BotFather"
                        marker="$"
                        label=INSTALL_COMMAND
                        text=INSTALL_COMMAND
                        flag="init-cmd"
                    />
                    <StepCard
                        feedback=feedback
                        number="02"
                        title="Настройка"
                        description="Подключите сервер и добавьте BOT_TOKEN в конфиг"
                        marker="$"
                        label="tg-deploy init"
                        text="tg-deploy init --token=YOUR_BOT_TOKEN"
                        flag="generate-cmd"
                    />
                    <StepCard
                        feedback=feedback
                        number="03"
                        title="Деплой!"
                        description="Отправьте /deploy в Telegram — сервис уже в продакшне"
                        marker="✈"
                        label="/deploy main → production"
                        text="/deploy main → production"
                        flag="deploy-cmd"
                    />
                </div>

                <div class="get-started-actions">
                    <A href="/docs" attr:class="btn btn-primary btn-large">
                        <span class="muted">">"</span>
                        <span>"Начать сейчас"</span>
                    </A>
                    <button
                        class="install-line"
                        on:click=move |_| feedback.copy(INSTALL_COMMAND, "bottom-install")
                    >
                        <CopyMark feedback=feedback flag="bottom-install" />
                        <span>{format!("$ {INSTALL_COMMAND}")}</span>
                    </button>
                </div>
            </div>
        </section>
    }
}

/// One numbered step; `label` is what the card shows, `text` what it copies.
#[component]
fn StepCard(
    feedback: CopyFeedback,
    number: &'static str,
    title: &'static str,
    description: &'static str,
    marker: &'static str,
    label: &'static str,
    text: &'static str,
    flag: &'static str,
) -> impl IntoView {
    view! {
        <article class="step-card">
            <div class="step-number">{number}</div>
            <h3 class="step-title">{title}</h3>
            <p class="step-description">{description}</p>
            <button class="step-command" on:click=move |_| feedback.copy(text, flag)>
                <span class="step-command-text">
                    <span class="muted">{marker}" "</span>
                    <span>{label}</span>
                </span>
                <CopyMark feedback=feedback flag=flag />
            </button>
        </article>
    }
}
