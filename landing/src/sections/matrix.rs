use crate::config::{MATRIX_ALPHABET, MATRIX_CELLS, Timing};
use leptos::prelude::*;

/// Map a roll in `[0, 1)` onto `alphabet`.
fn pick(alphabet: &[char], roll: f64) -> char {
    if alphabet.is_empty() {
        return ' ';
    }
    let idx = (roll * alphabet.len() as f64) as usize;
    alphabet[idx.min(alphabet.len() - 1)]
}

fn random_cells() -> Vec<char> {
    let alphabet: Vec<char> = MATRIX_ALPHABET.chars().collect();
    (0..MATRIX_CELLS)
        .map(|_| pick(&alphabet, js_sys::Math::random()))
        .collect()
}

/// Faint grid of random letters behind the landing page.
#[component]
pub fn MatrixBackground() -> impl IntoView {
    let (cells, set_cells) = signal(random_cells());

    match set_interval_with_handle(move || set_cells.set(random_cells()), Timing::default().matrix_refresh) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => tracing::warn!(?err, "could not start matrix refresh"),
    }

    view! {
        <div class="matrix-bg" aria-hidden="true">
            <div class="matrix-grid">
                {move || cells.get().into_iter().map(|c| view! {
                    <div class="matrix-cell">{c.to_string()}</div>
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_covers_whole_alphabet() {
        let alphabet: Vec<char> = MATRIX_ALPHABET.chars().collect();
        assert_eq!(pick(&alphabet, 0.0), 'D');
        assert_eq!(pick(&alphabet, 0.999_999), 'S');
        // Out-of-range rolls are clamped instead of indexing past the end.
        assert_eq!(pick(&alphabet, 1.0), 'S');
    }

    #[test]
    fn pick_on_empty_alphabet_is_blank() {
        assert_eq!(pick(&[], 0.5), ' ');
    }
}
