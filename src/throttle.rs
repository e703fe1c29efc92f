//! Crude request pacing.
//!
//! Every outbound request sleeps for the same fixed interval first. There is
//! no token accounting and no backoff; one request is in flight at a time.

use std::time::Duration;
use tracing::debug;

/// Fixed-interval delay applied before each request
#[derive(Clone, Debug)]
pub struct Throttle {
    delay: Duration,
}

impl Throttle {
    /// Create a throttle that waits `delay` before every request
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// The configured delay
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Sleep for the configured delay.
    pub async fn wait(&self) {
        if self.delay.is_zero() {
            return;
        }
        debug!("Waiting {:?} before next request", self.delay);
        tokio::time::sleep(self.delay).await;
    }
}
