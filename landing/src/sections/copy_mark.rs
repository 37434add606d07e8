use crate::clipboard::CopyFeedback;
use leptos::prelude::*;

/// Copy glyph that turns into a check mark while `flag` is lit.
#[component]
pub fn CopyMark(feedback: CopyFeedback, flag: &'static str) -> impl IntoView {
    view! {
        <span class=move || if feedback.is_copied(flag) { "copy-mark copied" } else { "copy-mark" }>
            {move || if feedback.is_copied(flag) { "✓" } else { "⧉" }}
        </span>
    }
}
