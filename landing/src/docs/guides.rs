// Getting started, installation and configuration guides

use super::{CodeLine, OptionRow};
use crate::clipboard::CopyFeedback;
use crate::navigator::DocsNavigator;
use leptos::prelude::*;

const PROJECT_CONFIG: &str = r#"{
  "model": "claude-4-sonnet",
  "rules": [
    "Использовать TypeScript для новых файлов",
    "Следовать best practices React",
    "Добавлять обработку ошибок"
  ],
  "integrations": {
    "ide": "vscode",
    "ci": "github-actions"
  },
  "agents": {
    "reviewer": {
      "model": "claude-4",
      "focus": ["security", "performance"]
    }
  }
}"#;

#[component]
fn NumberedStep(number: &'static str, title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="docs-card">
            <h2 class="docs-card-title">
                <span class="step-badge">{number}</span>
                {title}
            </h2>
            {children()}
        </div>
    }
}

#[component]
pub fn GettingStarted(nav: RwSignal<DocsNavigator>, feedback: CopyFeedback) -> impl IntoView {
    view! {
        <div class="docs-block">
            <div class="docs-block-header">
                <h1>"Начало работы с FLUX CLI"</h1>
                <p class="lead">
                    "FLUX CLI - это AI-инструмент для разработки, который помогает деплоить быстрее прямо из терминала."
                </p>
            </div>

            <NumberedStep number="01" title="Установка">
                <p class="muted">"Установите FLUX CLI глобально через npm:"</p>
                <CodeLine feedback=feedback text="npm install -g flux" flag="install-cmd" />
            </NumberedStep>

            <NumberedStep number="02" title="Быстрый старт">
                <p class="muted">"Создайте свой первый AI-проект:"</p>
                <div class="code-lines">
                    <CodeLine feedback=feedback text="flux init my-project" flag="init-cmd" />
                    <CodeLine feedback=feedback text="cd my-project" flag="cd-cmd" />
                    <CodeLine
                        feedback=feedback
                        text="flux generate --model gpt-5 'Create a React component'"
                        label="flux generate --model gpt-5 \"Создать React-компонент\""
                        flag="generate-cmd"
                    />
                </div>
            </NumberedStep>

            <NumberedStep number="03" title="Что дальше?">
                <div class="link-cards">
                    <div class="link-card" on:click=move |_| nav.update(|n| n.select("configuration"))>
                        <h3>"Настроить AI-модели"</h3>
                        <p class="muted">"Выберите предпочитаемые модели и настройте параметры"</p>
                    </div>
                    <div class="link-card" on:click=move |_| nav.update(|n| n.select("ide-setup"))>
                        <h3>"Интеграция с IDE"</h3>
                        <p class="muted">"Подключите FLUX CLI к вашей среде разработки"</p>
                    </div>
                </div>
            </NumberedStep>
        </div>
    }
}

#[component]
pub fn Installation(feedback: CopyFeedback) -> impl IntoView {
    let downloads = [
        ("macOS:", "flux-darwin-x64"),
        ("Linux:", "flux-linux-x64"),
        ("Windows:", "flux-win-x64.exe"),
    ];

    view! {
        <div class="docs-block">
            <div class="docs-block-header">
                <h1>"Установка"</h1>
                <p class="lead">"Несколько способов установить FLUX CLI на вашу систему."</p>
            </div>

            <div class="docs-card">
                <h3>"NPM (рекомендуется)"</h3>
                <p class="muted">"Установите глобально для доступа из любой директории:"</p>
                <CodeLine feedback=feedback text="npm install -g flux" flag="npm-install" />
            </div>

            <div class="docs-card">
                <h3>"Yarn"</h3>
                <p class="muted">"Альтернативная установка через Yarn:"</p>
                <CodeLine feedback=feedback text="yarn global add flux" flag="yarn-install" />
            </div>

            <div class="docs-card">
                <h3>"Прямая загрузка"</h3>
                <p class="muted">"Скачайте готовые бинарники для вашей платформы:"</p>
                <div class="download-list">
                    {downloads.into_iter().map(|(platform, binary)| view! {
                        <div class="download-row">
                            <span class="download-platform">{platform}</span>
                            <code>{binary}</code>
                            <button class="download-btn">"Скачать"</button>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </div>

            <div class="docs-card">
                <h3>"Проверка"</h3>
                <p class="muted">"Проверьте установку:"</p>
                <CodeLine feedback=feedback text="flux --version" flag="version-check" />
            </div>
        </div>
    }
}

#[component]
pub fn Configuration(feedback: CopyFeedback) -> impl IntoView {
    view! {
        <div class="docs-block">
            <div class="docs-block-header">
                <h1>"Конфигурация"</h1>
                <p class="lead">"Настройте FLUX CLI под свой рабочий процесс."</p>
            </div>

            <div class="docs-card">
                <h2>"Глобальные настройки"</h2>
                <p class="muted">"Задайте глобальные параметры:"</p>
                <div class="code-lines">
                    <CodeLine feedback=feedback text="flux config set model gpt-5" flag="config-model" />
                    <CodeLine feedback=feedback text="flux config set auto-review true" flag="config-review" />
                </div>
            </div>

            <div class="docs-card">
                <h2>"Конфигурация проекта"</h2>
                <p class="muted">
                    "Создайте файл "<code>"flux.config.json"</code>" в корне проекта:"
                </p>
                <pre class="code-block">{PROJECT_CONFIG}</pre>
            </div>

            <div class="docs-card">
                <h2>"Переменные окружения"</h2>
                <div class="option-list">
                    <OptionRow name="FLUX_API_KEY" description="Ваш API-ключ FLUX CLI для премиум-функций" />
                    <OptionRow name="FLUX_MODEL" description="AI-модель по умолчанию (переопределяет конфиг)" />
                    <OptionRow name="FLUX_DEBUG" description="Включить отладочные логи (true/false)" />
                </div>
            </div>
        </div>
    }
}
