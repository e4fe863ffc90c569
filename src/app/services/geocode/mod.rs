//! Coordinate resolution for derived buses
//!
//! The resolver degrades a bus name gracefully through progressive
//! relaxation until the provider returns a hit or the token sequence is
//! exhausted. The provider itself is a capability object injected by the
//! caller: [`NominatimClient`] for real runs, a test double elsewhere.
//! [`Throttled`] serializes provider calls and enforces the minimum
//! inter-call delay the provider's usage policy mandates.

pub mod country;
pub mod nominatim;
pub mod resolver;
pub mod throttle;

#[cfg(test)]
pub mod tests;

pub use nominatim::NominatimClient;
pub use resolver::{resolve_location, ResolvedLocation};
pub use throttle::Throttled;

use crate::Result;
use async_trait::async_trait;

/// One successful provider lookup
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeHit {
    pub longitude: f64,
    pub latitude: f64,
    /// The provider's resolved address string
    pub display_name: String,
}

/// Capability port for an external geocoding provider.
///
/// `Ok(None)` is a legitimate miss; `Err` is a transport or protocol
/// failure, which callers isolate per lookup.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, query: &str) -> Result<Option<GeocodeHit>>;
}
