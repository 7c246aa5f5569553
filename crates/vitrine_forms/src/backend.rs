//! Delivery backends
//!
//! The seam where a real newsletter service would plug in. The
//! reference backend performs no network call: it awaits a fixed delay
//! standing in for a backend round trip, then reports success.

use std::time::Duration;

use thiserror::Error;
use tracing::debug;

/// What a signup hands to the backend. `consent` is always true by the
/// time a subscription is built; the consent gate runs first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subscription {
    pub first_name: String,
    pub email: String,
    pub consent: bool,
}

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("network error: {0}")]
    Network(String),

    #[error("service responded with status {0}")]
    Status(u16),
}

/// Asynchronous newsletter delivery.
#[allow(async_fn_in_trait)]
pub trait SubmitBackend {
    async fn deliver(&self, subscription: &Subscription) -> Result<(), DeliveryError>;
}

/// Stand-in backend: waits out a fixed delay, then succeeds.
#[derive(Clone, Debug)]
pub struct SimulatedBackend {
    delay: Duration,
}

impl SimulatedBackend {
    pub fn new() -> Self {
        Self {
            delay: Duration::from_secs(2),
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmitBackend for SimulatedBackend {
    async fn deliver(&self, subscription: &Subscription) -> Result<(), DeliveryError> {
        tokio::time::sleep(self.delay).await;
        debug!("delivered subscription for {}", subscription.email);
        Ok(())
    }
}
