//! Copy-to-clipboard with a transient "copied" flag per button key.
//!
//! [`CopyFlags`] is the plain state: which keys are lit and which expiry
//! token is allowed to switch each one off. [`CopyFeedback`] wires it to the
//! browser clipboard and to Leptos timers. Each page creates its own
//! `CopyFeedback`; nothing is shared between pages.

use std::collections::HashMap;
use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Why a clipboard write did not happen.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("no browser window available")]
    NoWindow,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

impl From<JsValue> for ClipboardError {
    fn from(err: JsValue) -> Self {
        Self::Rejected(err.as_string().unwrap_or_else(|| format!("{err:?}")))
    }
}

/// Identifies one "copied" flash; only the latest token of a key may clear it.
pub type CopyToken = u64;

/// Keys currently showing the "copied" indicator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CopyFlags {
    lit: HashMap<String, CopyToken>,
    next_token: CopyToken,
}

impl CopyFlags {
    /// Light `key` and return the token its expiry must present.
    ///
    /// A newer mark supersedes any older token for the same key.
    pub fn mark_copied(&mut self, key: &str) -> CopyToken {
        self.next_token += 1;
        self.lit.insert(key.to_owned(), self.next_token);
        self.next_token
    }

    /// Switch `key` off if `token` is still the latest one. Returns whether it did.
    pub fn expire(&mut self, key: &str, token: CopyToken) -> bool {
        if self.lit.get(key) == Some(&token) {
            self.lit.remove(key);
            true
        } else {
            false
        }
    }

    pub fn is_copied(&self, key: &str) -> bool {
        self.lit.contains_key(key)
    }
}

/// Write `text` to the system clipboard.
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    let window = web_sys::window().ok_or(ClipboardError::NoWindow)?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise).await?;
    Ok(())
}

/// Reactive copy-flag handle owned by one page.
#[derive(Clone, Copy)]
pub struct CopyFeedback {
    flags: RwSignal<CopyFlags>,
    pending: StoredValue<HashMap<String, TimeoutHandle>>,
    flash: Duration,
}

impl CopyFeedback {
    /// Create the handle in the current reactive owner. Pending expiries are
    /// cleared when that owner is cleaned up.
    pub fn new(flash: Duration) -> Self {
        let feedback = Self {
            flags: RwSignal::new(CopyFlags::default()),
            pending: StoredValue::new(HashMap::new()),
            flash,
        };
        on_cleanup(move || {
            feedback.pending.try_update_value(|pending| {
                for (_, handle) in pending.drain() {
                    handle.clear();
                }
            });
        });
        feedback
    }

    /// Tracked read of the flag for `key`.
    pub fn is_copied(&self, key: &str) -> bool {
        self.flags.with(|flags| flags.is_copied(key))
    }

    /// Copy `text` and light `key` once the clipboard accepted it.
    ///
    /// Failures only reach the log; the button simply never shows "copied".
    pub fn copy(&self, text: &'static str, key: &'static str) {
        let feedback = *self;
        spawn_local(async move {
            match write_text(text).await {
                Ok(()) => feedback.flash(key),
                Err(err) => tracing::error!(%err, key, "failed to copy text"),
            }
        });
    }

    fn flash(&self, key: &'static str) {
        let Some(token) = self.flags.try_update(|flags| flags.mark_copied(key)) else {
            return;
        };

        let flags = self.flags;
        let expiry = set_timeout_with_handle(
            move || {
                flags.try_update(|flags| flags.expire(key, token));
            },
            self.flash,
        );

        match expiry {
            Ok(handle) => {
                let previous = self
                    .pending
                    .try_update_value(|pending| pending.insert(key.to_owned(), handle))
                    .flatten();
                if let Some(previous) = previous {
                    previous.clear();
                }
            }
            Err(err) => tracing::warn!(?err, key, "could not schedule copy flag expiry"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_then_expire_clears_flag() {
        let mut flags = CopyFlags::default();
        let token = flags.mark_copied("hero-install");
        assert!(flags.is_copied("hero-install"));

        assert!(flags.expire("hero-install", token));
        assert!(!flags.is_copied("hero-install"));
    }

    #[test]
    fn second_copy_supersedes_first_expiry() {
        let mut flags = CopyFlags::default();
        let first = flags.mark_copied("hero-install");
        let second = flags.mark_copied("hero-install");

        // The first timer fires while the second window is still open.
        assert!(!flags.expire("hero-install", first));
        assert!(flags.is_copied("hero-install"));

        assert!(flags.expire("hero-install", second));
        assert!(!flags.is_copied("hero-install"));

        // Only one clear ever happened.
        assert!(!flags.expire("hero-install", second));
    }

    #[test]
    fn keys_are_independent() {
        let mut flags = CopyFlags::default();
        let hero = flags.mark_copied("hero-install");
        let _nav = flags.mark_copied("nav-install");

        assert!(flags.expire("hero-install", hero));
        assert!(!flags.is_copied("hero-install"));
        assert!(flags.is_copied("nav-install"));
    }

    #[test]
    fn token_of_other_key_does_not_clear() {
        let mut flags = CopyFlags::default();
        let hero = flags.mark_copied("hero-install");
        flags.mark_copied("deploy-cmd");

        assert!(!flags.expire("deploy-cmd", hero));
        assert!(flags.is_copied("deploy-cmd"));
    }

    #[test]
    fn unknown_key_is_not_copied() {
        let flags = CopyFlags::default();
        assert!(!flags.is_copied("bottom-install"));
    }

    #[test]
    fn clipboard_error_messages() {
        assert_eq!(ClipboardError::NoWindow.to_string(), "no browser window available");
        assert_eq!(
            ClipboardError::Rejected("NotAllowedError".into()).to_string(),
            "clipboard write rejected: NotAllowedError"
        );
    }
}
