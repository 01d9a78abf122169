//! Password strength checking library
//!
//! Scores passwords against six composition criteria, suggests strong
//! passwords, and provides the small amount of state a front-end needs
//! (visibility toggle, clipboard copy, live clock).
//!
//! # Features
//!
//! - `async` (default): Enables async evaluation with cancellation support
//!   and the ticking clock
//! - `clipboard` (default): System clipboard via `arboard`
//! - `cli` (default): The `pass-checker` terminal front-end
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PASS_CHECKER_DEBOUNCE_MS`: Delay before a keystroke-driven evaluation
//!   (default: 300)
//! - `PASS_CHECKER_CLIPBOARD_SECS`: How long a one-shot copy keeps serving
//!   the clipboard on X11/Wayland (default: 30)
//!
//! # Example
//!
//! ```rust
//! use pass_checker::{score_password, suggest_password, StrengthCategory};
//! use secrecy::ExposeSecret;
//!
//! let score = score_password("Aa1!aaaaaa");
//! assert_eq!(score.value(), 6);
//! assert_eq!(score.category(), StrengthCategory::Strong);
//!
//! let suggestion = suggest_password();
//! assert_eq!(score_password(suggestion.expose_secret()).value(), 6);
//! ```

mod clipboard;
mod clock;
mod config;
mod evaluator;
mod field;
mod sections;
mod session;
mod suggest;
mod types;

// Public API
pub use clipboard::{
    copy_password, copy_password_with, ClipboardBackend, ClipboardError, MemoryClipboard,
};
pub use clock::{format_clock, now, CLOCK_FORMAT};
pub use config::{
    ansi256, get_clipboard_hold, get_debounce_delay, Theme, CLIPBOARD_HOLD_ENV, DEBOUNCE_ENV,
};
pub use evaluator::{evaluate_password_strength, score_password};
pub use field::PasswordField;
pub use sections::SCORING_SYMBOLS;
pub use session::{Command, Outcome, Session, HELP};
pub use suggest::{suggest_password, suggest_password_with, SUGGESTION_LENGTH, SUGGESTION_SYMBOLS};
pub use types::{PasswordEvaluation, StrengthCategory, StrengthScore, MAX_SCORE};

#[cfg(feature = "clipboard")]
pub use clipboard::SystemClipboard;

#[cfg(feature = "async")]
pub use clock::run_clock;

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_strength_tx;
