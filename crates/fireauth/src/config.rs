//! Application options
//!
//! Options can be built in code or resolved from the environment:
//!
//! | variable                          | field                  |
//! |-----------------------------------|------------------------|
//! | `FIREAUTH_SERVICE_ACCOUNT_PATH`   | `service_account_path` |

use std::path::PathBuf;
use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::credentials::ServiceAccountCredential;
use crate::error::{Error, Result};

/// Environment variable prefix used by [`Options::from_env`]
pub const ENV_PREFIX: &str = "FIREAUTH";

/// Options used to build an [`App`](crate::App)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Options {
    /// Path to the service account JSON key file
    #[serde(default)]
    pub service_account_path: Option<PathBuf>,

    /// Credential loaded from `service_account_path`, or supplied directly
    #[serde(skip)]
    pub service_account_credential: Option<Arc<ServiceAccountCredential>>,
}

impl Options {
    /// Options pointing at a key file
    pub fn with_service_account_path(path: impl Into<PathBuf>) -> Self {
        Self {
            service_account_path: Some(path.into()),
            service_account_credential: None,
        }
    }

    /// Options carrying an already loaded credential
    pub fn with_credential(credential: ServiceAccountCredential) -> Self {
        Self {
            service_account_path: None,
            service_account_credential: Some(Arc::new(credential)),
        }
    }

    /// Resolve options from `FIREAUTH_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the environment cannot be deserialized.
    pub fn from_env() -> Result<Self> {
        let options: Self = config::Config::builder()
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;

        debug!(
            service_account_path = ?options.service_account_path,
            "Resolved options from environment"
        );
        Ok(options)
    }

    /// Load the service account credential unless one is already present
    ///
    /// # Errors
    ///
    /// - [`Error::Configuration`] when neither a credential nor a path is set
    /// - any error from [`ServiceAccountCredential::from_file`]
    pub fn ensure_service_account(&mut self) -> Result<&Arc<ServiceAccountCredential>> {
        if self.service_account_credential.is_none() {
            let path = match &self.service_account_path {
                Some(path) if !path.as_os_str().is_empty() => path,
                _ => {
                    return Err(Error::configuration_with_key(
                        "ServiceAccountPath cannot be empty.",
                        "service_account_path",
                    ));
                }
            };
            let credential = ServiceAccountCredential::from_file(path)?;
            self.service_account_credential = Some(Arc::new(credential));
        }

        self.service_account_credential
            .as_ref()
            .ok_or_else(|| Error::configuration("service account credential was not loaded"))
    }
}
