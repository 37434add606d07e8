use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="page not-found">
            <div class="container">
                <h1 class="page-title">"404"</h1>
                <p class="page-description">"Страница не найдена."</p>
                <A href="/" attr:class="btn btn-secondary">"На главную"</A>
            </div>
        </section>
    }
}
