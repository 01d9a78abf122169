//! Score and category types produced by the evaluator.

use std::fmt;

/// Number of criteria a password is checked against.
pub const MAX_SCORE: u8 = 6;

/// Count of satisfied criteria, always in `0..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct StrengthScore(u8);

impl StrengthScore {
    /// Creates a score, clamping anything above [`MAX_SCORE`].
    pub fn new(value: u8) -> Self {
        Self(value.min(MAX_SCORE))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Score as a share of the maximum, in percent (drives the progress bar).
    pub fn percentage(&self) -> f64 {
        f64::from(self.0) / f64::from(MAX_SCORE) * 100.0
    }

    pub fn category(&self) -> StrengthCategory {
        StrengthCategory::from(*self)
    }
}

impl fmt::Display for StrengthScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, MAX_SCORE)
    }
}

/// Coarse bucketing of a [`StrengthScore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthCategory {
    Weak,
    Medium,
    Strong,
}

impl StrengthCategory {
    /// Label shown next to the progress bar.
    pub fn label(&self) -> &'static str {
        match self {
            StrengthCategory::Weak => "Weak 🔴",
            StrengthCategory::Medium => "Medium 🟡",
            StrengthCategory::Strong => "Strong 🟢",
        }
    }
}

impl From<StrengthScore> for StrengthCategory {
    fn from(score: StrengthScore) -> Self {
        match score.value() {
            0..=2 => StrengthCategory::Weak,
            3..=4 => StrengthCategory::Medium,
            _ => StrengthCategory::Strong,
        }
    }
}

impl fmt::Display for StrengthCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrengthCategory::Weak => "Weak",
            StrengthCategory::Medium => "Medium",
            StrengthCategory::Strong => "Strong",
        };
        f.write_str(name)
    }
}

/// Result of a full evaluation.
///
/// `score` is `None` only when the evaluation was cancelled.
/// `reasons` holds one hint per unmet criterion, in check order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PasswordEvaluation {
    pub score: Option<StrengthScore>,
    pub reasons: Vec<String>,
}

impl PasswordEvaluation {
    pub fn strength(&self) -> Option<StrengthCategory> {
        self.score.map(|s| s.category())
    }
}
