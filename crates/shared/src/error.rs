//! Error types for twinseed

use thiserror::Error;

/// Error returned when a `--domains` entry matches no known seeder
#[derive(Debug, Error)]
#[error("Domain '{name}' not found. Available domains: {}", available.join(", "))]
pub struct UnknownDomainError {
    pub name: String,
    pub available: Vec<String>,
}

/// Error returned when the ingestion service rejects a whole request
#[derive(Debug, Error)]
#[error("Service returned {status} for {endpoint}: {body}")]
pub struct ServiceError {
    pub endpoint: String,
    pub status: u16,
    pub body: String,
}

/// General twinseed error type
///
/// Partial per-item failures are not errors; they are reported through
/// `BulkOutcome`. Everything here aborts the current domain.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    UnknownDomain(#[from] UnknownDomainError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("Domain '{0}' has no registered namespace")]
    UnregisteredDomain(String),

    #[error("Transport error talking to {url}: {message}")]
    Transport { url: String, message: String },

    #[error("Could not decode response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, SeedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_domain_lists_available() {
        let err: SeedError = UnknownDomainError {
            name: "space".to_string(),
            available: vec!["aerospace".to_string(), "energy".to_string()],
        }
        .into();

        let message = err.to_string();
        assert!(message.contains("'space'"));
        assert!(message.contains("aerospace, energy"));
    }

    #[test]
    fn test_service_error_message() {
        let err = SeedError::from(ServiceError {
            endpoint: "/api/v1/twins/bulk".to_string(),
            status: 503,
            body: "unavailable".to_string(),
        });

        assert_eq!(
            err.to_string(),
            "Service returned 503 for /api/v1/twins/bulk: unavailable"
        );
    }
}
