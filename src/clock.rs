//! Live clock.

use std::fmt;

use chrono::{DateTime, Local, TimeZone};

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

/// e.g. `Friday, 01 March 2024 | 09:05:07`
pub const CLOCK_FORMAT: &str = "%A, %d %B %Y | %H:%M:%S";

pub fn format_clock<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    time.format(CLOCK_FORMAT).to_string()
}

/// Current local time, formatted.
pub fn now() -> String {
    format_clock(&Local::now())
}

/// Calls `tick` with the formatted local time once a second until `token`
/// is cancelled. The first tick fires immediately.
#[cfg(feature = "async")]
pub async fn run_clock<F>(token: CancellationToken, mut tick: F)
where
    F: FnMut(String),
{
    let mut interval = tokio::time::interval(std::time::Duration::from_secs(1));
    loop {
        tokio::select! {
            _ = token.cancelled() => {
                #[cfg(feature = "tracing")]
                tracing::debug!("clock stopped");
                break;
            }
            _ = interval.tick() => tick(now()),
        }
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_run_clock_ticks_until_cancelled() {
        let token = CancellationToken::new();
        let stopper = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(3500)).await;
            stopper.cancel();
        });

        let mut ticks = Vec::new();
        run_clock(token, |t| ticks.push(t)).await;

        assert!((3..=5).contains(&ticks.len()), "got {} ticks", ticks.len());
        assert!(ticks.iter().all(|t| t.contains(" | ")));
    }

    #[tokio::test]
    async fn test_run_clock_already_cancelled() {
        let token = CancellationToken::new();
        token.cancel();

        let mut ticks = 0;
        run_clock(token, |_| ticks += 1).await;
        // the immediate first tick may or may not win the race
        assert!(ticks <= 1);
    }
}
