// Command, model and IDE reference pages

use super::{CodeLine, OptionRow};
use crate::clipboard::CopyFeedback;
use leptos::prelude::*;

#[component]
pub fn Generate(feedback: CopyFeedback) -> impl IntoView {
    view! {
        <div class="docs-block">
            <div class="docs-block-header">
                <h1>"flux generate"</h1>
                <p class="lead">"Генерируйте код, компоненты и целые фичи с помощью AI-моделей."</p>
            </div>

            <div class="docs-card">
                <h3>"Базовое использование"</h3>
                <CodeLine feedback=feedback text="flux generate [prompt]" flag="basic-generate" />
            </div>

            <div class="docs-card">
                <h3>"Опции"</h3>
                <div class="option-list">
                    <OptionRow name="--model, -m" description="Указать AI-модель (gpt-5, claude-4, gemini-2.5)" />
                    <OptionRow name="--context, -c" description="Включить контекст проекта (full, minimal, none)" />
                    <OptionRow name="--output, -o" description="Указать выходной файл или директорию" />
                    <OptionRow name="--interactive, -i" description="Интерактивный режим для уточнений" />
                </div>
            </div>

            <div class="docs-card">
                <h3>"Примеры"</h3>
                <div class="code-lines">
                    <p class="muted">"Создать React-компонент:"</p>
                    <CodeLine
                        feedback=feedback
                        text="flux generate 'Создать адаптивный navbar с переключением темы'"
                        label="flux generate \"Создать адаптивный navbar с переключением темы\""
                        flag="example-navbar"
                    />
                    <p class="muted">"Создать API-эндпоинты:"</p>
                    <CodeLine
                        feedback=feedback
                        text="flux generate --model claude-4 'Создать REST API для пользователей с авторизацией'"
                        label="flux generate --model claude-4 \"Создать REST API для пользователей с авторизацией\""
                        flag="example-api"
                    />
                </div>
            </div>
        </div>
    }
}

#[component]
fn ModelCard(
    name: &'static str,
    description: &'static str,
    tags: [&'static str; 3],
) -> impl IntoView {
    view! {
        <div class="model-card">
            <div class="model-card-header">
                <h4>{name}</h4>
                <span class="accent">"* Активна"</span>
            </div>
            <p class="muted">{description}</p>
            <div class="model-tags">
                {tags.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
pub fn ModelSelection(feedback: CopyFeedback) -> impl IntoView {
    view! {
        <div class="docs-block">
            <div class="docs-block-header">
                <h1>"Выбор модели"</h1>
                <p class="lead">"Выбирайте и настраивайте AI-модели для разных задач."</p>
            </div>

            <div class="docs-card">
                <h3>"Доступные модели"</h3>
                <div class="model-list">
                    <ModelCard
                        name="GPT-5 (OpenAI)"
                        description="Новейшая модель OpenAI с улучшенным рассуждением и генерацией кода"
                        tags=["Генерация кода", "Рассуждение", "Быстрая"]
                    />
                    <ModelCard
                        name="Claude-4 Sonnet (Anthropic)"
                        description="Отлично подходит для код-ревью и сложного анализа"
                        tags=["Код-ревью", "Анализ", "Детальная"]
                    />
                    <ModelCard
                        name="Gemini-2.5 Pro (Google)"
                        description="Идеальна для мультимодальных задач и работы с большим контекстом"
                        tags=["Мультимодальная", "Большой контекст", "Универсальная"]
                    />
                </div>
            </div>

            <div class="docs-card">
                <h3>"Команды для работы с моделями"</h3>
                <div class="code-lines">
                    <CodeLine feedback=feedback text="flux model list" flag="model-list" />
                    <CodeLine feedback=feedback text="flux model set gpt-5" flag="model-set" />
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn IdeSetup(feedback: CopyFeedback) -> impl IntoView {
    let vscode_features = [
        "Генерация кода прямо в редакторе",
        "AI-автодополнение",
        "Встроенные терминальные команды",
        "Код-ревью в реальном времени",
    ];

    view! {
        <div class="docs-block">
            <div class="docs-block-header">
                <h1>"Настройка IDE"</h1>
                <p class="lead">"Интегрируйте FLUX CLI с вашей средой разработки."</p>
            </div>

            <div class="docs-card">
                <h3>"Интеграция с VS Code"</h3>
                <p class="muted">"Установите расширение FLUX CLI для VS Code:"</p>
                <CodeLine
                    feedback=feedback
                    text="code --install-extension flux.vscode-extension"
                    flag="vscode-install"
                />
                <div class="feature-list">
                    <p>"Возможности:"</p>
                    <ul>
                        {vscode_features.into_iter().map(|feature| view! { <li>{feature}</li> }).collect::<Vec<_>>()}
                    </ul>
                </div>
            </div>

            <div class="docs-card">
                <h3>"JetBrains IDE"</h3>
                <p class="muted">"Совместимо с IntelliJ IDEA, WebStorm, PyCharm и другими:"</p>
                <CodeLine feedback=feedback text="flux ide setup jetbrains" flag="jetbrains-setup" />
            </div>

            <div class="docs-card">
                <h3>"Терминальная интеграция"</h3>
                <p class="muted">"Добавьте автодополнение и алиасы для shell:"</p>
                <div class="code-lines">
                    <CodeLine
                        feedback=feedback
                        text="flux completion bash >> ~/.bashrc"
                        flag="bash-completion"
                    />
                    <CodeLine
                        feedback=feedback
                        text="flux completion zsh >> ~/.zshrc"
                        flag="zsh-completion"
                    />
                </div>
            </div>
        </div>
    }
}
