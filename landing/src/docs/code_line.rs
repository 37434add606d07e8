use crate::clipboard::CopyFeedback;
use crate::sections::CopyMark;
use leptos::prelude::*;

/// Clickable shell line that copies `text`.
///
/// `label` overrides what is displayed when the shown command differs from
/// the copied one (translated prompts, shell redirections).
#[component]
pub fn CodeLine(
    feedback: CopyFeedback,
    text: &'static str,
    flag: &'static str,
    #[prop(optional)] label: Option<&'static str>,
) -> impl IntoView {
    view! {
        <button class="code-line" on:click=move |_| feedback.copy(text, flag)>
            <span class="code-line-text">
                <span class="muted">"$"</span>
                " "
                <span>{label.unwrap_or(text)}</span>
            </span>
            <CopyMark feedback=feedback flag=flag />
        </button>
    }
}

/// Option row: flag name and what it does.
#[component]
pub fn OptionRow(name: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="option-row">
            <code>{name}</code>
            <p class="muted">{description}</p>
        </div>
    }
}
