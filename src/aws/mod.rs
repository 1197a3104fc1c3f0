//! AWS CLI invocation: argument vectors, process runners and outcome classification

pub mod command;
pub mod executor;
pub mod runner;

// Re-export main functionality
pub use executor::{classify, execute};
pub use runner::{ProcessRunner, RecordingRunner};

use crate::error::Result;
use crate::types::CommandInvocation;
use async_trait::async_trait;

/// AWS CLI service namespace for Route53 Domains
pub const ROUTE53_DOMAINS: &str = "route53domains";

/// Trait for spawning the external tool
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `argv[0]` with the remaining tokens and wait for it to exit
    async fn run(&self, argv: &[String]) -> Result<CommandInvocation>;
}
