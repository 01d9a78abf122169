//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

#[cfg(feature = "tracing")]
use secrecy::ExposeSecret;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{
    digit_section, long_length_section, lowercase_section, min_length_section, symbol_section,
    uppercase_section, SectionResult,
};
use crate::types::{PasswordEvaluation, StrengthScore};

type Section = (&'static str, fn(&SecretString) -> SectionResult);

/// Sections in evaluation order. Each passing section is worth one point.
const SECTIONS: [Section; 6] = [
    ("min_length", min_length_section),
    ("long_length", long_length_section),
    ("lowercase", lowercase_section),
    ("uppercase", uppercase_section),
    ("digit", digit_section),
    ("symbol", symbol_section),
];

/// Scores a password: one point per satisfied criterion, 0 to 6.
///
/// Total and deterministic; the empty string scores 0.
pub fn score_password(password: &str) -> StrengthScore {
    let pwd = SecretString::new(password.into());
    let passed = SECTIONS
        .iter()
        .filter(|(_, section_fn)| section_fn(&pwd).is_none())
        .count();
    StrengthScore::new(passed as u8)
}

/// Evaluates password strength and returns a detailed evaluation.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `token` - Optional cancellation token (async feature only)
///
/// # Returns
/// A `PasswordEvaluation` containing the score and one reason per unmet
/// criterion. The score is `None` if the evaluation was cancelled.
pub fn evaluate_password_strength(
    password: &SecretString,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> PasswordEvaluation {
    let mut reasons = Vec::new();
    let mut passed: u8 = 0;

    for (_section_name, section_fn) in SECTIONS {
        // Check cancellation before each section (async only)
        #[cfg(feature = "async")]
        {
            if let Some(ref t) = token {
                if t.is_cancelled() {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("evaluation cancelled before section: {}", _section_name);
                    reasons.push("Evaluation cancelled".to_string());
                    return PasswordEvaluation {
                        score: None,
                        reasons,
                    };
                }
            }
        }

        match section_fn(password) {
            Some(reason) => {
                #[cfg(feature = "tracing")]
                tracing::trace!("section failed: {}", _section_name);
                reasons.push(reason);
            }
            None => passed += 1,
        }
    }

    let score = StrengthScore::new(passed);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        length = password.expose_secret().chars().count(),
        score = score.value(),
        "password evaluated"
    );

    PasswordEvaluation {
        score: Some(score),
        reasons,
    }
}

/// Async version that sends evaluation result via channel.
///
/// Waits for the configured debounce delay first, so that a newer keystroke
/// can cancel `token` before any work is done.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordEvaluation>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("evaluation is about to start...");

    tokio::time::sleep(crate::config::get_debounce_delay()).await;
    let evaluation = evaluate_password_strength(password, Some(token));

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;
    use crate::types::StrengthCategory;
    use serial_test::serial;

    #[tokio::test]
    async fn test_evaluate_with_cancellation() {
        let token = CancellationToken::new();
        token.cancel();

        let pwd = SecretString::new("SomePassword123!".to_string().into());
        let evaluation = evaluate_password_strength(&pwd, Some(token));

        assert_eq!(evaluation.strength(), None);
        assert!(evaluation.score.is_none());
        assert_eq!(evaluation.reasons, vec!["Evaluation cancelled".to_string()]);
    }

    #[tokio::test]
    async fn test_evaluate_without_cancellation() {
        let token = CancellationToken::new();

        let pwd = SecretString::new("TestPass123!".to_string().into());
        let evaluation = evaluate_password_strength(&pwd, Some(token));

        assert_eq!(evaluation.strength(), Some(StrengthCategory::Strong));
        assert_eq!(evaluation.score.map(|s| s.value()), Some(6));
    }

    #[tokio::test(start_paused = true)]
    #[serial]
    async fn test_evaluate_password_strength_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        let pwd = SecretString::new("TestPass123!".to_string().into());

        evaluate_password_strength_tx(&pwd, token, tx).await;

        let evaluation = rx.recv().await.expect("Should receive evaluation");
        assert_eq!(evaluation.score.map(|s| s.value()), Some(6));
    }

    #[tokio::test(start_paused = true)]
    #[serial]
    async fn test_evaluate_tx_cancelled_during_debounce() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        let task = {
            let token = token.clone();
            tokio::spawn(async move {
                let pwd = SecretString::new("abc".to_string().into());
                evaluate_password_strength_tx(&pwd, token, tx).await;
            })
        };
        token.cancel();
        task.await.expect("evaluation task panicked");

        let evaluation = rx.recv().await.expect("Should receive evaluation");
        assert!(evaluation.score.is_none());
    }

    #[tokio::test(start_paused = true)]
    #[serial]
    async fn test_evaluate_tx_closed_channel() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        let pwd = SecretString::new("abc".to_string().into());
        // must not panic when nobody is listening
        evaluate_password_strength_tx(&pwd, CancellationToken::new(), tx).await;
    }
}
