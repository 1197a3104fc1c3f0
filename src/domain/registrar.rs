//! Domain registration

use crate::aws::{command, execute, CommandRunner, ProcessRunner};
use crate::domain::config::validate_config_document;
use crate::error::{KreatisiteError, Result};
use crate::report::report_to_stdio;
use crate::types::{Outcome, RegistrationRequest, DEFAULT_AWS_PROGRAM};
use serde::Deserialize;

/// Registers domains through `aws route53domains register-domain`
pub struct DomainRegistrar<R = ProcessRunner> {
    runner: R,
    program: String,
}

impl DomainRegistrar<ProcessRunner> {
    /// Create a registrar that spawns the `aws` executable
    pub fn new() -> Self {
        Self::with_runner(ProcessRunner::new(), DEFAULT_AWS_PROGRAM)
    }
}

impl<R: CommandRunner> DomainRegistrar<R> {
    /// Create a registrar with a custom runner and AWS CLI program
    pub fn with_runner(runner: R, program: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Validate the config document, then run the registration.
    ///
    /// Config problems are reported before anything is spawned.
    pub async fn register(&self, request: &RegistrationRequest) -> Result<Outcome> {
        if request.domain_name().is_empty() {
            return Err(KreatisiteError::validation("Domain name cannot be empty"));
        }

        validate_config_document(request.config_path())?;

        let argv = command::register_domain(&self.program, request);
        let mut outcome = execute(&self.runner, argv).await?;
        outcome.operation_id = parse_operation_id(&outcome.stdout);

        tracing::info!(
            domain = %request.domain_name(),
            duration_years = request.duration_years(),
            auto_renew = request.auto_renew(),
            operation_id = ?outcome.operation_id,
            "Domain registration submitted"
        );

        Ok(outcome)
    }

    /// Register a domain, print the result and return the process exit code
    pub async fn register_domain(&self, request: &RegistrationRequest) -> i32 {
        report_to_stdio(self.register(request).await)
    }
}

impl Default for DomainRegistrar<ProcessRunner> {
    fn default() -> Self {
        Self::new()
    }
}

/// `register-domain` JSON reply
#[derive(Debug, Deserialize)]
struct RegisterResponse {
    #[serde(rename = "OperationId")]
    operation_id: String,
}

fn parse_operation_id(stdout: &str) -> Option<String> {
    serde_json::from_str::<RegisterResponse>(stdout.trim())
        .ok()
        .map(|reply| reply.operation_id)
}
