//! # fireauth CLI
//!
//! Mint custom tokens from a service account key file and check developer
//! claims against the reserved claim names.
//!
//! ## Usage
//!
//! ```bash
//! # Mint a token (path may also come from FIREAUTH_SERVICE_ACCOUNT_PATH)
//! fireauth mint --service-account key.json --uid user-123 --claims '{"admin": true}'
//!
//! # List reserved claim names
//! fireauth reserved
//!
//! # Check developer claims without signing
//! fireauth check-claims '{"admin": true, "aud": "x"}'
//! ```

pub mod commands;
pub mod error;

use std::io::Write;

use clap::Parser;
use tracing::Level;

pub use commands::Command;
pub use error::{CliError, CliResult};

/// fireauth - Firebase custom token tool
#[derive(Parser, Debug)]
#[command(
    name = "fireauth",
    version,
    about = "Mint Firebase custom tokens from a service account key",
    author
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging (-v, -vv, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Execute the CLI command against stdout
    ///
    /// # Errors
    ///
    /// Returns `CliError` if command execution fails.
    pub fn execute(self) -> CliResult<()> {
        self.init_tracing();

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.command.execute(&mut out)?;
        out.flush()?;
        Ok(())
    }

    fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// Initialize tracing subscriber based on verbosity level
    fn init_tracing(&self) {
        tracing_subscriber::fmt()
            .with_max_level(self.log_level())
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "fireauth",
            "mint",
            "--service-account",
            "key.json",
            "--uid",
            "user-1",
        ]);
        assert!(cli.is_ok());
    }

    #[test]
    fn test_verbosity_levels() {
        let cli = Cli::try_parse_from(["fireauth", "-vv", "reserved"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.log_level(), Level::DEBUG);

        let cli = Cli::try_parse_from(["fireauth", "-q", "reserved"]).unwrap();
        assert_eq!(cli.log_level(), Level::ERROR);

        let cli = Cli::try_parse_from(["fireauth", "reserved"]).unwrap();
        assert_eq!(cli.log_level(), Level::WARN);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let cli = Cli::try_parse_from(["fireauth", "-q", "-v", "reserved"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_mint_requires_uid() {
        let cli = Cli::try_parse_from(["fireauth", "mint", "--service-account", "key.json"]);
        assert!(cli.is_err());
    }
}
