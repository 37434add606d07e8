// Landing page - hero terminal, integrations, bot commands, get started
use crate::clipboard::CopyFeedback;
use crate::config::Timing;
use crate::sections::{BotCommands, Footer, GetStarted, Hero, Integrations, MatrixBackground, Nav};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let feedback = CopyFeedback::new(Timing::default().copy_flash);

    view! {
        <div class="page landing">
            <Nav feedback=feedback />
            <MatrixBackground />
            <main>
                <Hero feedback=feedback />
                <Integrations />
                <BotCommands />
                <GetStarted feedback=feedback />
            </main>
            <Footer />
        </div>
    }
}
