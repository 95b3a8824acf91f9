use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Rate-quote provider errors.
///
/// Every failure is opaque to the caller beyond its kind; whether it is shown
/// as a warning depends on the manual-mode switch.
#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("missing API credential: set {variable}")]
    MissingCredential { variable: &'static str },

    #[error("quote request failed: {0}")]
    Request(String),

    #[error("quote provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed quote payload: {0}")]
    Malformed(String),
}

/// Handoff delivery errors.
#[derive(Error, Debug)]
pub enum HandoffError {
    #[error("transfer proof is required before sending")]
    MissingProof,

    #[error("transfer proof not found: {path}")]
    ProofNotFound { path: String },

    #[error("handoff delivery failed: {0}")]
    Delivery(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Quote(#[from] QuoteError),

    #[error(transparent)]
    Handoff(#[from] HandoffError),

    #[error("access denied: {0}")]
    AccessDenied(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("connection error: {0}")]
    Connection(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        // dialoguer::Error wraps an IO error
        Error::Io(std::io::Error::other(err.to_string()))
    }
}
