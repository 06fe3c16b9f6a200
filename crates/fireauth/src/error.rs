//! Error types for fireauth
//!
//! Two tiers, mirroring how callers react to them:
//! - Validation: caller input is wrong; retrying with the same input never helps
//! - Everything else: signing, key material, configuration and I/O failures

use thiserror::Error;

/// Result type for fireauth operations
pub type Result<T> = std::result::Result<T, Error>;

/// Input problems detected before any cryptographic work is done
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    /// The uid was empty
    #[error("uid must be provided")]
    EmptyUid,

    /// The uid exceeded the maximum length
    #[error("uid must not be longer than {max} characters (got {length})")]
    UidTooLong { length: usize, max: usize },

    /// The issuer identity was empty
    #[error("issuer must be provided")]
    MissingIssuer,

    /// A developer claim used a name owned by the protocol
    #[error("developer claims cannot contain a reserved key: {key}")]
    ReservedClaim { key: String },
}

/// Main error type for fireauth
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Caller input failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The signing library failed to produce a token
    ///
    /// The underlying cause is kept intact so callers can inspect it. The
    /// issuer never retries these.
    #[error("failed to sign custom token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    /// The private key could not be parsed as an RSA PEM key
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(#[source] jsonwebtoken::errors::Error),

    /// Options or service account file are incomplete
    #[error("{message}")]
    Configuration {
        message: String,
        key: Option<String>,
    },

    /// Environment configuration could not be resolved
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            key: None,
        }
    }

    /// Create a configuration error naming the offending key
    pub fn configuration_with_key(message: impl Into<String>, key: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            key: Some(key.into()),
        }
    }

    /// True for caller-input problems
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// True for failures raised by the signing library
    pub fn is_signing(&self) -> bool {
        matches!(self, Self::Signing(_))
    }

    /// The validation failure, if this is one
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}
