use crate::domain::model::Coordinate;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Narrow boundary to the external geocoding service: free text in,
/// coordinate pair out, or a resolution failure. Implementations own
/// their retry policy; `resolve` must not block past the configured
/// retry budget.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn resolve(&self, location: &str) -> Result<Coordinate>;
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait GeocoderConfig: Send + Sync {
    fn endpoint(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn max_retries(&self) -> u32;
    fn backoff(&self) -> Duration;
    fn user_agent(&self) -> &str;
}
