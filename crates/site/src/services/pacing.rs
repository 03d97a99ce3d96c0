//! Simulated latency for mock operations.
//!
//! The mock backends answer instantly, which reads as broken in a UI that
//! shows spinners and typing indicators. [`Pacing::Simulated`] injects the
//! delays a real backend would have; [`Pacing::Instant`] skips them so
//! tests never sleep.

use std::time::Duration;

use rand::Rng as _;

/// Whether service calls sleep to imitate backend latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pacing {
    /// Human-scale delays on login, form submission, and chat replies.
    #[default]
    Simulated,
    /// No delays. Used by tests and the CLI.
    Instant,
}

impl Pacing {
    /// Authentication round-trip, roughly one second.
    pub async fn auth_delay(self) {
        self.sleep(Duration::from_millis(1000)).await;
    }

    /// Form submission acknowledgment.
    pub async fn submit_delay(self) {
        self.sleep(Duration::from_millis(800)).await;
    }

    /// Assistant "typing" pause: a fixed second plus up to a second of
    /// jitter. The jitter is drawn before any await so the thread-local
    /// generator never crosses a suspension point.
    pub async fn typing_delay(self) {
        let jitter = rand::rng().random_range(0..1000);
        self.sleep(Duration::from_millis(1000 + jitter)).await;
    }

    async fn sleep(self, duration: Duration) {
        if self == Self::Simulated {
            tokio::time::sleep(duration).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_instant_pacing_does_not_sleep() {
        let started = std::time::Instant::now();
        Pacing::Instant.auth_delay().await;
        Pacing::Instant.submit_delay().await;
        Pacing::Instant.typing_delay().await;
        assert!(started.elapsed() < Duration::from_millis(100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_typing_delay_is_at_least_a_second() {
        let started = tokio::time::Instant::now();
        Pacing::Simulated.typing_delay().await;
        assert!(started.elapsed() >= Duration::from_millis(1000));
    }
}
