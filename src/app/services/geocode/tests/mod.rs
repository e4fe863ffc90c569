//! Tests and mock provider for the geocoding service


use super::{GeocodeHit, Geocoder};
use crate::{Error, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Test double: answers only configured queries and records every query it
/// receives, in order.
pub struct MockGeocoder {
    hits: HashMap<String, GeocodeHit>,
    queries: Mutex<Vec<String>>,
    fail_with_transport_error: bool,
}

impl MockGeocoder {
    pub fn new() -> Self {
        Self {
            hits: HashMap::new(),
            queries: Mutex::new(Vec::new()),
            fail_with_transport_error: false,
        }
    }

    /// Configure a hit for an exact query string
    pub fn with_hit(mut self, query: &str, longitude: f64, latitude: f64) -> Self {
        self.hits.insert(
            query.to_string(),
            GeocodeHit {
                longitude,
                latitude,
                display_name: format!("{} (resolved)", query),
            },
        );
        self
    }

    /// Make every call fail with a transport error
    pub fn failing() -> Self {
        Self {
            fail_with_transport_error: true,
            ..Self::new()
        }
    }

    /// Queries received so far, in call order
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl Geocoder for MockGeocoder {
    async fn geocode(&self, query: &str) -> Result<Option<GeocodeHit>> {
        self.queries.lock().unwrap().push(query.to_string());
        if self.fail_with_transport_error {
            return Err(Error::geocoding("simulated transport failure", None));
        }
        Ok(self.hits.get(query).cloned())
    }
}
