// Compile-time site settings
// Developed by The TG Deploy Team (c)2025

use std::time::Duration;

/// Version string used across the site (single source of truth)
pub const VERSION: &str = "v2.1.0";

/// Install command advertised in the nav, hero and call-to-action blocks
pub const INSTALL_COMMAND: &str = "pip install tg-deploy";

/// Prompt printed in front of every committed terminal command
pub const PROMPT: &str = "user@dev:~/project$";

/// Alphabet the matrix background draws from
pub const MATRIX_ALPHABET: &str = "DEPLOY01TGBOT10STATUS";

/// Number of cells in the matrix background
pub const MATRIX_CELLS: usize = 100;

/// Animation and feedback timings.
///
/// All views read their delays from here; tests build custom values to keep
/// schedules short and readable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    /// Delay between two typed characters
    pub type_step: Duration,
    /// Pause between the last typed character and the command commit
    pub commit_pause: Duration,
    /// Delay between the end of typing and the first output line
    pub output_lead: Duration,
    /// Delay between two output lines
    pub output_step: Duration,
    /// Pause after the last output line before the next sequence starts
    pub final_pause: Duration,
    /// Cursor blink period
    pub cursor_blink: Duration,
    /// How long a "copied" indicator stays on
    pub copy_flash: Duration,
    /// Matrix background refresh period
    pub matrix_refresh: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            type_step: Duration::from_millis(50),
            commit_pause: Duration::from_millis(500),
            output_lead: Duration::from_millis(1000),
            output_step: Duration::from_millis(800),
            final_pause: Duration::from_millis(2000),
            cursor_blink: Duration::from_millis(500),
            copy_flash: Duration::from_millis(2000),
            matrix_refresh: Duration::from_millis(1500),
        }
    }
}
