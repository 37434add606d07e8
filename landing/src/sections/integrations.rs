use crate::content::{INTEGRATIONS, Integration};
use leptos::prelude::*;

#[component]
pub fn Integrations() -> impl IntoView {
    view! {
        <section id="integrations" class="integrations">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Работает с любой инфраструктурой"</h2>
                    <p class="section-description">
                        "TG Deploy подключается к любому серверу. Одна настройка — и команда деплоит из Telegram."
                    </p>
                </div>

                <div class="panel">
                    <div class="panel-header">
                        <div class="window-dots">
                            <span class="dot red"></span>
                            <span class="dot yellow"></span>
                            <span class="dot green"></span>
                        </div>
                        <span class="panel-title">"tg-deploy --list-integrations"</span>
                        <span class="panel-badge">
                            <span class="pulse-dot"></span>
                            "ВСЕ ПОДДЕРЖИВАЮТСЯ"
                        </span>
                    </div>

                    <div class="panel-body">
                        <div class="panel-command">"$ tg-deploy --list-integrations"</div>
                        <div class="integrations-grid">
                            {INTEGRATIONS.iter().map(|integration| view! {
                                <IntegrationRow integration=*integration />
                            }).collect::<Vec<_>>()}
                        </div>

                        <div class="panel-footer">
                            <div class="panel-hints">
                                <div>"$ tg-deploy connect --server=your-ip # Подключить сервер"</div>
                                <div>"$ tg-deploy status # Проверить интеграцию"</div>
                            </div>
                            <div class="panel-stats">
                                <span class="stat"><span class="dot green"></span>"6 активно"</span>
                                <span class="stat"><span class="pulse-dot"></span>"Без настройки"</span>
                            </div>
                        </div>
                    </div>
                </div>

                <p class="section-note">
                    <span class="accent">"*"</span>
                    " Любой стек - Любой сервер - Деплой прямо из Telegram"
                </p>
            </div>
        </section>
    }
}

#[component]
fn IntegrationRow(integration: Integration) -> impl IntoView {
    view! {
        <div class="integration-row">
            <div class="integration-name">
                <span class="integration-status">{integration.status}</span>
                <span>{integration.name}</span>
            </div>
            <div class="integration-desc">{integration.description}</div>
        </div>
    }
}
