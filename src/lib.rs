//! Kreatisite - domain availability checks and registration via the AWS CLI
//!
//! Builds `aws route53domains` command lines from typed requests, runs them,
//! and turns the captured output into a success/failure exit code.

pub mod aws;
pub mod cli;
pub mod domain;
pub mod error;
pub mod report;
pub mod types;

// Re-export commonly used types
pub use error::{KreatisiteError, Result};
pub use types::{AvailabilityStatus, CommandInvocation, Outcome, RegistrationRequest, Settings};

// Re-export main functionality
pub use aws::{CommandRunner, ProcessRunner, RecordingRunner};
pub use domain::{AvailabilityChecker, DomainRegistrar};
pub use report::report;

use tracing_subscriber::EnvFilter;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "KREATISITE_LOG";

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}

/// Install the stderr log subscriber, filtered by `KREATISITE_LOG` (default `error`)
pub fn init_logging() -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
}
