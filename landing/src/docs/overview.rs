use crate::navigator::DocsNavigator;
use leptos::prelude::*;

const OVERVIEW_CARDS: [(&str, &str, &str, &str); 4] = [
    ("getting-started", "[>]", "Начало работы", "Быстрая установка и настройка"),
    ("commands", "[$]", "Команды", "Полный справочник CLI-команд"),
    ("models", "[*]", "AI-модели", "Настройка и использование AI-моделей"),
    ("integrations", "[~]", "Интеграции", "Настройка IDE и рабочих процессов"),
];

/// Fallback block for any section without dedicated content.
#[component]
pub fn Overview(nav: RwSignal<DocsNavigator>) -> impl IntoView {
    view! {
        <div class="docs-block">
            <div class="docs-block-header">
                <h1>"Документация"</h1>
                <p class="lead">"Выберите раздел в боковом меню для начала работы."</p>
            </div>
            <div class="link-cards">
                {OVERVIEW_CARDS.into_iter().map(|(id, glyph, title, description)| view! {
                    <div class="link-card" on:click=move |_| nav.update(|n| n.select(id))>
                        <span class="glyph">{glyph}</span>
                        <h3>{title}</h3>
                        <p class="muted">{description}</p>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
