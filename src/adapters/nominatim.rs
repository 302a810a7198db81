use crate::domain::model::Coordinate;
use crate::domain::ports::{Geocoder, GeocoderConfig};
use crate::utils::error::{OrderError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// One search hit from a Nominatim-compatible endpoint. The jsonv2
/// format carries coordinates as strings.
#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
}

pub struct NominatimGeocoder<C: GeocoderConfig> {
    config: C,
    client: Client,
}

impl<C: GeocoderConfig> NominatimGeocoder<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Single resolution attempt against the configured endpoint.
    async fn lookup(&self, location: &str) -> Result<Coordinate> {
        let response = self
            .client
            .get(self.config.endpoint())
            .query(&[("q", location), ("format", "jsonv2"), ("limit", "1")])
            .header(reqwest::header::USER_AGENT, self.config.user_agent())
            .timeout(self.config.request_timeout())
            .send()
            .await?;

        tracing::debug!("Geocoder response status: {}", response.status());
        let hits: Vec<SearchHit> = response.error_for_status()?.json().await?;

        let Some(hit) = hits.into_iter().next() else {
            return Err(OrderError::GeocodeNotFound {
                query: location.to_string(),
            });
        };

        let latitude: f64 = hit.lat.parse().map_err(|_| OrderError::Parse {
            reason: format!("geocoder returned non-numeric latitude '{}'", hit.lat),
        })?;
        let longitude: f64 = hit.lon.parse().map_err(|_| OrderError::Parse {
            reason: format!("geocoder returned non-numeric longitude '{}'", hit.lon),
        })?;

        let coordinate = Coordinate {
            latitude,
            longitude,
        };
        if !coordinate.in_bounds() {
            return Err(OrderError::Parse {
                reason: format!(
                    "geocoder returned out-of-range coordinate ({}, {})",
                    latitude, longitude
                ),
            });
        }
        Ok(coordinate)
    }
}

/// Timeouts, connection failures and 5xx responses are worth retrying;
/// everything else is permanent.
fn is_transient(error: &OrderError) -> bool {
    match error {
        OrderError::Http(e) => {
            e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
        }
        _ => false,
    }
}

#[async_trait]
impl<C: GeocoderConfig> Geocoder for NominatimGeocoder<C> {
    /// Bounded retry as a counted loop with a fixed backoff. Not-found
    /// is returned immediately; only transient failures consume the
    /// retry budget, and exhausting it reports a timeout.
    async fn resolve(&self, location: &str) -> Result<Coordinate> {
        let attempts = self.config.max_retries() + 1;

        for attempt in 1..=attempts {
            tracing::debug!("Resolving '{}' (attempt {}/{})", location, attempt, attempts);
            match self.lookup(location).await {
                Ok(coordinate) => return Ok(coordinate),
                Err(error) if is_transient(&error) => {
                    tracing::warn!(
                        "Transient geocoding failure for '{}' on attempt {}: {}",
                        location,
                        attempt,
                        error
                    );
                    if attempt < attempts {
                        tokio::time::sleep(self.config.backoff()).await;
                    }
                }
                Err(error) => return Err(error),
            }
        }

        tracing::error!("Giving up on '{}' after {} attempts", location, attempts);
        Err(OrderError::GeocodeTimeout {
            query: location.to_string(),
            attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::time::Duration;

    struct MockConfig {
        endpoint: String,
        timeout: Duration,
        max_retries: u32,
    }

    impl MockConfig {
        fn new(endpoint: String, max_retries: u32) -> Self {
            Self {
                endpoint,
                timeout: Duration::from_millis(100),
                max_retries,
            }
        }
    }

    impl GeocoderConfig for MockConfig {
        fn endpoint(&self) -> &str {
            &self.endpoint
        }

        fn request_timeout(&self) -> Duration {
            self.timeout
        }

        fn max_retries(&self) -> u32 {
            self.max_retries
        }

        fn backoff(&self) -> Duration {
            Duration::ZERO
        }

        fn user_agent(&self) -> &str {
            "standup-order-tests"
        }
    }

    #[tokio::test]
    async fn test_resolve_parses_first_hit() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/search")
                .query_param("q", "Dayton, OH")
                .query_param("format", "jsonv2")
                .query_param("limit", "1");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([
                    {"lat": "39.7589478", "lon": "-84.1916069", "display_name": "Dayton, Ohio"},
                ]));
        });

        let geocoder = NominatimGeocoder::new(MockConfig::new(server.url("/search"), 3));
        let coordinate = geocoder.resolve("Dayton, OH").await.unwrap();

        api_mock.assert();
        assert_eq!(coordinate.latitude, 39.7589478);
        assert_eq!(coordinate.longitude, -84.1916069);
    }

    #[tokio::test]
    async fn test_not_found_is_returned_without_retry() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/search");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([]));
        });

        let geocoder = NominatimGeocoder::new(MockConfig::new(server.url("/search"), 3));
        let result = geocoder.resolve("Atlantis").await;

        assert!(matches!(result, Err(OrderError::GeocodeNotFound { .. })));
        api_mock.assert_hits(1);
    }

    #[tokio::test]
    async fn test_timeout_is_retried_exactly_max_retries_times() {
        let server = MockServer::start();
        // Responds slower than the client timeout, so every attempt
        // times out.
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/search");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([]))
                .delay(Duration::from_millis(500));
        });

        let geocoder = NominatimGeocoder::new(MockConfig::new(server.url("/search"), 2));
        let result = geocoder.resolve("Dayton, OH").await;

        match result {
            Err(OrderError::GeocodeTimeout { attempts, .. }) => assert_eq!(attempts, 3),
            other => panic!("expected GeocodeTimeout, got {:?}", other),
        }
        api_mock.assert_hits(3);
    }

    #[tokio::test]
    async fn test_server_error_is_retried_then_reported() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/search");
            then.status(503);
        });

        let geocoder = NominatimGeocoder::new(MockConfig::new(server.url("/search"), 1));
        let result = geocoder.resolve("Dayton, OH").await;

        assert!(matches!(result, Err(OrderError::GeocodeTimeout { .. })));
        api_mock.assert_hits(2);
    }

    #[tokio::test]
    async fn test_non_numeric_coordinate_is_a_parse_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/search");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([
                    {"lat": "not-a-number", "lon": "-84.19"},
                ]));
        });

        let geocoder = NominatimGeocoder::new(MockConfig::new(server.url("/search"), 3));
        let result = geocoder.resolve("Dayton, OH").await;

        assert!(matches!(result, Err(OrderError::Parse { .. })));
    }
}
