//! Application facade
//!
//! Ties a loaded service account to a [`TokenFactory`] so callers only pass
//! a uid and optional developer claims.

use std::sync::Arc;

use tracing::debug;

use crate::clock::Clock;
use crate::config::Options;
use crate::credentials::ServiceAccountCredential;
use crate::error::Result;
use crate::token::{Claims, IdToken};
use crate::token_factory::TokenFactory;

/// A configured application
#[derive(Debug, Clone)]
pub struct App {
    credential: Arc<ServiceAccountCredential>,
    token_factory: TokenFactory,
}

impl App {
    /// Build an app, loading the service account if needed
    ///
    /// # Errors
    ///
    /// Returns any error from [`Options::ensure_service_account`].
    pub fn new(mut options: Options) -> Result<Self> {
        let credential = Arc::clone(options.ensure_service_account()?);
        let token_factory = TokenFactory::from_credential(&credential);

        debug!(
            project_id = %credential.project_id(),
            issuer = %token_factory.issuer(),
            "Initialized app"
        );

        Ok(Self {
            credential,
            token_factory,
        })
    }

    /// Replace the time source used for issuance
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.token_factory = self.token_factory.with_clock(clock);
        self
    }

    /// Project the service account belongs to
    pub fn project_id(&self) -> &str {
        self.credential.project_id()
    }

    /// The token factory backing this app
    pub fn token_factory(&self) -> &TokenFactory {
        &self.token_factory
    }

    /// Mint a custom token for `uid`
    ///
    /// # Errors
    ///
    /// See [`crate::create_custom_token`].
    pub fn create_custom_token(&self, uid: &str, developer_claims: Option<&Claims>) -> Result<String> {
        debug!(
            uid = uid,
            developer_claims = developer_claims.map_or(0, Claims::len),
            "Creating custom token"
        );
        self.token_factory.create_custom_token(uid, developer_claims)
    }

    /// Wrap claims produced by an external verifier
    pub fn id_token(&self, verified_claims: Claims) -> IdToken {
        IdToken::new(verified_claims)
    }
}
