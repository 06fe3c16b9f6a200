//! # fireauth - Firebase custom tokens and ID token claims
//!
//! Mint RS256-signed custom tokens with a service account key, and read
//! verified ID token claims through a typed, read-only view.
//!
//! ## Architecture
//!
//! - [`token_factory`] - custom token issuance and claim validation
//! - [`reserved`] - protocol-owned claim names, sorted once, binary searched
//! - [`token`] - [`IdToken`] claim view over an already verified claim set
//! - [`clock`] - injectable time source
//! - [`credentials`] - service account key file loading
//! - [`config`] - [`Options`], resolvable from `FIREAUTH_*` variables
//! - [`app`] - [`App`] facade combining the above
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fireauth::{App, Options};
//! use serde_json::json;
//!
//! let app = App::new(Options::with_service_account_path("service-account.json"))?;
//!
//! let claims = json!({"premium": true}).as_object().cloned();
//! let token = app.create_custom_token("user-123", claims.as_ref())?;
//! println!("{token}");
//! # Ok::<(), fireauth::Error>(())
//! ```
//!
//! ## What is not here
//!
//! Signature verification of ID tokens, token exchange with the identity
//! provider, and revocation. [`IdToken`] trusts its input.

pub mod app;
pub mod clock;
pub mod config;
pub mod credentials;
pub mod error;
pub mod reserved;
pub mod token;
pub mod token_factory;

#[doc(inline)]
pub use app::App;
#[doc(inline)]
pub use clock::{Clock, FixedClock, SystemClock};
#[doc(inline)]
pub use config::Options;
#[doc(inline)]
pub use credentials::ServiceAccountCredential;
#[doc(inline)]
pub use error::{Error, Result, ValidationError};
#[doc(inline)]
pub use reserved::{ReservedNames, is_reserved, reserved_names};
#[doc(inline)]
pub use token::{Claims, IdToken};
#[doc(inline)]
pub use token_factory::{
    CustomTokenClaims, FIREBASE_AUDIENCE, MAX_UID_LENGTH, TOKEN_LIFETIME, TokenFactory,
    create_custom_token,
};
