//! Password evaluation sections
//!
//! Each section checks one scoring criterion. A password scores one point
//! for every section that passes.

mod length;
mod symbols;
mod variety;

pub use length::{long_length_section, min_length_section};
pub use symbols::{symbol_section, SCORING_SYMBOLS};
pub use variety::{digit_section, lowercase_section, uppercase_section};

/// Result type for section evaluation functions.
/// - `Some(reason)` - Section failed with reason
/// - `None` - Section passed
pub type SectionResult = Option<String>;
