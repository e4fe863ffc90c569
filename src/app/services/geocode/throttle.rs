//! Minimum-delay serialization of provider calls
//!
//! The provider's usage policy mandates spacing between requests; this is a
//! resource-protection measure, not an algorithm correctness requirement.

use super::{GeocodeHit, Geocoder};
use crate::Result;
use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Wraps any [`Geocoder`], serializing calls and enforcing a minimum delay
/// between successive calls. Holding the mutex across the wait keeps
/// requests strictly sequential even if callers ever overlap.
pub struct Throttled<G> {
    inner: G,
    min_delay: Duration,
    last_call: Mutex<Option<Instant>>,
}

impl<G> Throttled<G> {
    pub fn new(inner: G, min_delay: Duration) -> Self {
        Self {
            inner,
            min_delay,
            last_call: Mutex::new(None),
        }
    }
}

#[async_trait]
impl<G: Geocoder> Geocoder for Throttled<G> {
    async fn geocode(&self, query: &str) -> Result<Option<GeocodeHit>> {
        {
            let mut last_call = self.last_call.lock().await;
            if let Some(previous) = *last_call {
                let elapsed = previous.elapsed();
                if elapsed < self.min_delay {
                    tokio::time::sleep(self.min_delay - elapsed).await;
                }
            }
            *last_call = Some(Instant::now());
        }

        self.inner.geocode(query).await
    }
}
