//! Custom token issuance
//!
//! A custom token is an RS256-signed JWT minted by a trusted server holding a
//! service account key. The client application exchanges it with the identity
//! provider for a session credential.
//!
//! # Claim layout
//!
//! | claim    | value                                              |
//! |----------|----------------------------------------------------|
//! | `uid`    | the application user id                            |
//! | `iss`    | issuer identity (service account email)            |
//! | `sub`    | issuer identity, identical to `iss`                |
//! | `aud`    | [`FIREBASE_AUDIENCE`]                              |
//! | `iat`    | clock now, unix seconds                            |
//! | `exp`    | `iat` + [`TOKEN_LIFETIME`]                         |
//! | `claims` | developer claims, omitted when absent or empty     |

use std::sync::Arc;
use std::time::Duration;

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};

use crate::clock::{Clock, SystemClock};
use crate::credentials::ServiceAccountCredential;
use crate::error::{Error, Result, ValidationError};
use crate::reserved::is_reserved;
use crate::token::Claims;

/// Audience every custom token is addressed to
pub const FIREBASE_AUDIENCE: &str =
    "https://identitytoolkit.googleapis.com/google.identity.identitytoolkit.v1.IdentityToolkit";

/// Fixed validity window of a custom token
pub const TOKEN_LIFETIME: Duration = Duration::from_secs(60 * 60);

/// Longest accepted uid, in characters
pub const MAX_UID_LENGTH: usize = 128;

/// Payload of a custom token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomTokenClaims {
    /// Application user id
    pub uid: String,
    /// Issuer identity
    pub iss: String,
    /// Same as `iss`
    pub sub: String,
    /// Always [`FIREBASE_AUDIENCE`]
    pub aud: String,
    /// Issued at, unix seconds
    pub iat: i64,
    /// Expiry, unix seconds
    pub exp: i64,
    /// Developer claims
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claims: Option<Claims>,
}

fn validate_uid_length(uid: &str) -> std::result::Result<(), ValidationError> {
    let length = uid.chars().count();
    if length > MAX_UID_LENGTH {
        return Err(ValidationError::UidTooLong {
            length,
            max: MAX_UID_LENGTH,
        });
    }
    Ok(())
}

/// Reject developer claims that use a reserved name
///
/// # Errors
///
/// Returns [`ValidationError::ReservedClaim`] for the first offending key in
/// the claim set's iteration order.
pub fn validate_developer_claims(claims: &Claims) -> std::result::Result<(), ValidationError> {
    match claims.keys().find(|key| is_reserved(key)) {
        Some(key) => Err(ValidationError::ReservedClaim { key: key.clone() }),
        None => Ok(()),
    }
}

/// Build the payload of a custom token without signing it
///
/// # Errors
///
/// Returns a [`ValidationError`] when the uid is empty or too long, the
/// issuer is empty, or a developer claim uses a reserved name.
pub fn build_custom_token_claims(
    uid: &str,
    developer_claims: Option<&Claims>,
    issuer: &str,
    clock: &dyn Clock,
) -> std::result::Result<CustomTokenClaims, ValidationError> {
    if uid.is_empty() {
        return Err(ValidationError::EmptyUid);
    }
    if issuer.is_empty() {
        return Err(ValidationError::MissingIssuer);
    }
    validate_uid_length(uid)?;

    let claims = match developer_claims {
        Some(claims) => {
            validate_developer_claims(claims)?;
            (!claims.is_empty()).then(|| claims.clone())
        }
        None => None,
    };

    let iat = clock.now().timestamp();
    Ok(CustomTokenClaims {
        uid: uid.to_string(),
        iss: issuer.to_string(),
        sub: issuer.to_string(),
        aud: FIREBASE_AUDIENCE.to_string(),
        iat,
        exp: iat + TOKEN_LIFETIME.as_secs() as i64,
        claims,
    })
}

/// Mint a signed custom token for `uid`
///
/// All validation happens before signing, so a failed call never yields a
/// partial token.
///
/// # Errors
///
/// - [`Error::Validation`] for an empty or overlong uid, an empty issuer, or a
///   developer claim using a reserved name
/// - [`Error::Signing`] when the signing library rejects the key or fails to
///   encode the token
pub fn create_custom_token(
    uid: &str,
    developer_claims: Option<&Claims>,
    issuer: &str,
    key: &EncodingKey,
    clock: &dyn Clock,
) -> Result<String> {
    let claims = build_custom_token_claims(uid, developer_claims, issuer, clock)?;
    encode(&Header::new(Algorithm::RS256), &claims, key).map_err(Error::Signing)
}

/// Issues custom tokens for a single issuer identity and key
#[derive(Clone)]
pub struct TokenFactory {
    issuer: String,
    key: EncodingKey,
    clock: Arc<dyn Clock>,
}

// Manual Debug impl so the signing key never reaches logs
impl std::fmt::Debug for TokenFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenFactory")
            .field("issuer", &self.issuer)
            .field("key", &"<redacted>")
            .field("clock", &self.clock)
            .finish()
    }
}

impl TokenFactory {
    /// Create a factory on the system clock
    pub fn new(issuer: impl Into<String>, key: EncodingKey) -> Self {
        Self {
            issuer: issuer.into(),
            key,
            clock: Arc::new(SystemClock),
        }
    }

    /// Create a factory whose issuer is the service account email
    pub fn from_credential(credential: &ServiceAccountCredential) -> Self {
        Self::new(credential.client_email(), credential.encoding_key().clone())
    }

    /// Replace the time source
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Issuer identity written to `iss` and `sub`
    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Mint a custom token for `uid`
    ///
    /// # Errors
    ///
    /// See [`create_custom_token`].
    pub fn create_custom_token(&self, uid: &str, developer_claims: Option<&Claims>) -> Result<String> {
        create_custom_token(
            uid,
            developer_claims,
            &self.issuer,
            &self.key,
            self.clock.as_ref(),
        )
    }
}
