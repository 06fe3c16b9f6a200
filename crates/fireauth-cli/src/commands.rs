//! Command implementations

use std::io::Write;
use std::path::PathBuf;

use clap::Subcommand;
use fireauth::token_factory::validate_developer_claims;
use fireauth::{App, Claims, Options, reserved_names};
use tracing::{debug, info};

use crate::error::{CliError, CliResult};

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Mint a custom token and print it
    Mint {
        /// Service account JSON key file
        #[arg(long, short = 's', env = "FIREAUTH_SERVICE_ACCOUNT_PATH")]
        service_account: PathBuf,

        /// User id to embed in the token
        #[arg(long, short = 'u')]
        uid: String,

        /// Developer claims as a JSON object
        #[arg(long, short = 'c')]
        claims: Option<String>,
    },

    /// Print the reserved claim names in lookup order
    Reserved,

    /// Check developer claims against the reserved names without signing
    CheckClaims {
        /// Developer claims as a JSON object
        claims: String,
    },
}

impl Command {
    /// Run the command, writing results to `out`
    ///
    /// # Errors
    ///
    /// Returns `CliError` for malformed claims, credential problems, rejected
    /// input, or a failed write.
    pub fn execute(&self, out: &mut impl Write) -> CliResult<()> {
        match self {
            Self::Mint {
                service_account,
                uid,
                claims,
            } => {
                let claims = claims.as_deref().map(parse_claims).transpose()?;
                let app = App::new(Options::with_service_account_path(service_account))?;
                let token = app.create_custom_token(uid, claims.as_ref())?;
                info!(project_id = %app.project_id(), uid = %uid, "Minted custom token");
                writeln!(out, "{token}")?;
            }
            Self::Reserved => {
                for name in reserved_names().iter() {
                    writeln!(out, "{name}")?;
                }
            }
            Self::CheckClaims { claims } => {
                let claims = parse_claims(claims)?;
                validate_developer_claims(&claims).map_err(fireauth::Error::from)?;
                debug!(count = claims.len(), "Developer claims accepted");
                writeln!(out, "ok")?;
            }
        }
        Ok(())
    }
}

/// Parse a JSON object into a claim set
///
/// # Errors
///
/// Returns `CliError::Json` for invalid JSON and `CliError::InvalidArguments`
/// when the value is not an object.
pub fn parse_claims(raw: &str) -> CliResult<Claims> {
    match serde_json::from_str(raw)? {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(CliError::InvalidArguments(format!(
            "claims must be a JSON object, got {other}"
        ))),
    }
}
