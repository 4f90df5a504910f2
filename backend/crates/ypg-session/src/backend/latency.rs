use std::time::Duration;

/// Fixed artificial delay standing in for a network round trip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Latency(Duration);

impl Latency {
    pub fn new(delay: Duration) -> Self {
        Self(delay)
    }

    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }

    /// No delay at all.
    pub fn none() -> Self {
        Self(Duration::ZERO)
    }

    pub fn delay(&self) -> Duration {
        self.0
    }

    pub async fn simulate(&self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}
