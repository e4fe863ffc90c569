//! Nominatim search client

use super::{GeocodeHit, Geocoder};
use crate::constants::{GEOCODE_TIMEOUT_SECS, GEOCODER_USER_AGENT, NOMINATIM_BASE_URL};
use crate::{Error, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Geocoding provider backed by the Nominatim `/search` API.
///
/// Callers are expected to wrap this in a
/// [`Throttled`](super::Throttled) before issuing bulk lookups; Nominatim's
/// usage policy limits request rates.
pub struct NominatimClient {
    http: reqwest::Client,
    base_url: String,
}

/// One entry of a Nominatim search response (coordinates arrive as strings)
#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
    display_name: String,
}

impl NominatimClient {
    /// Client against the public Nominatim endpoint
    pub fn new() -> Result<Self> {
        Self::with_base_url(NOMINATIM_BASE_URL)
    }

    /// Client against a custom endpoint (self-hosted instances, tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(GEOCODER_USER_AGENT)
            .timeout(Duration::from_secs(GEOCODE_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::geocoding("failed to build HTTP client", Some(e)))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl Geocoder for NominatimClient {
    async fn geocode(&self, query: &str) -> Result<Option<GeocodeHit>> {
        let url = format!("{}/search", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("q", query), ("format", "jsonv2"), ("limit", "1")])
            .send()
            .await
            .map_err(|e| Error::geocoding(format!("request failed for '{}'", query), Some(e)))?
            .error_for_status()
            .map_err(|e| Error::geocoding(format!("server rejected '{}'", query), Some(e)))?;

        let body = response
            .text()
            .await
            .map_err(|e| Error::geocoding("failed to read response body", Some(e)))?;

        let results: Vec<SearchResult> = serde_json::from_str(&body)
            .map_err(|e| Error::geocoding(format!("unexpected response format: {}", e), None))?;

        match results.into_iter().next() {
            None => Ok(None),
            Some(result) => {
                let longitude = result.lon.parse::<f64>().map_err(|_| {
                    Error::geocoding(format!("invalid longitude '{}'", result.lon), None)
                })?;
                let latitude = result.lat.parse::<f64>().map_err(|_| {
                    Error::geocoding(format!("invalid latitude '{}'", result.lat), None)
                })?;
                Ok(Some(GeocodeHit {
                    longitude,
                    latitude,
                    display_name: result.display_name,
                }))
            }
        }
    }
}
