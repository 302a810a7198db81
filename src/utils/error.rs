use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("geocoding '{query}' timed out after {attempts} attempts; the service may be busy, try again later")]
    GeocodeTimeout { query: String, attempts: u32 },

    #[error("no location found for '{query}'; refine the place name and retry")]
    GeocodeNotFound { query: String },

    #[error("roster has no members with resolved coordinates")]
    EmptyRoster,

    #[error("malformed data: {reason}")]
    Parse { reason: String },

    #[error("invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("geocoding request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OrderError>;
