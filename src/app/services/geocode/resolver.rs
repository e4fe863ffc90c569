//! Progressive-relaxation address resolution

use super::{country, Geocoder};
use tracing::{debug, info, warn};

/// Outcome of resolving one bus name.
///
/// Unresolved coordinates are a valid terminal state, not an error; the bus
/// record is emitted either way.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedLocation {
    /// Longitude
    pub x: Option<f64>,
    /// Latitude
    pub y: Option<f64>,
    /// The provider's resolved address, present only on success
    pub address: Option<String>,
}

impl ResolvedLocation {
    /// Terminal state for a name the provider could not resolve
    pub fn unresolved() -> Self {
        Self::default()
    }
}

/// Resolve a canonical bus name to a coordinate, relaxing the query until
/// the provider answers or the token sequence is exhausted.
///
/// The name is a whitespace-separated token sequence whose last token is a
/// country code or name. A recognized ISO-2 last token is first replaced by
/// the full country name. On a miss with more than two tokens, the
/// second-to-last token is dropped and the lookup retried: the last token is
/// the country anchor and the first the proper name, so the interior
/// qualifier is the least discriminating. The token count strictly
/// decreases, bounding the loop at `len - 2` attempts past the first.
///
/// A provider error is isolated here: it logs a warning and yields an
/// unresolved location so one bus cannot abort the others.
pub async fn resolve_location<G>(name: Option<&str>, provider: &G) -> ResolvedLocation
where
    G: Geocoder + ?Sized,
{
    let Some(name) = name else {
        return ResolvedLocation::unresolved();
    };

    let mut tokens: Vec<String> = name.split_whitespace().map(str::to_string).collect();
    if tokens.is_empty() {
        return ResolvedLocation::unresolved();
    }

    if let Some(last) = tokens.last_mut() {
        if let Some(full) = country::full_name(last) {
            *last = full.to_string();
        }
    }

    loop {
        let query = tokens.join(" ");
        match provider.geocode(&query).await {
            Ok(Some(hit)) => {
                info!("Found: {} for: {}", hit.display_name, query);
                return ResolvedLocation {
                    x: Some(hit.longitude),
                    y: Some(hit.latitude),
                    address: Some(hit.display_name),
                };
            }
            Ok(None) if tokens.len() > 2 => {
                let dropped = tokens.remove(tokens.len() - 2);
                debug!("No match for: {} (dropping '{}')", query, dropped);
            }
            Ok(None) => {
                info!("{} not found", query);
                return ResolvedLocation::unresolved();
            }
            Err(error) => {
                warn!("Geocoding failed for '{}': {}", query, error);
                return ResolvedLocation::unresolved();
            }
        }
    }
}
