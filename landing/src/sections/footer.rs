use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <p class="footer-tagline">"Создано для команд, которые ценят скорость."</p>
                <p class="footer-copyright">"TG Deploy. Деплой из Telegram. Без лишнего."</p>
            </div>
        </footer>
    }
}
