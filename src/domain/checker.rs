//! Domain availability checker

use crate::aws::{command, execute, CommandRunner, ProcessRunner};
use crate::error::{KreatisiteError, Result};
use crate::report::report_to_stdio;
use crate::types::{AvailabilityStatus, Outcome, DEFAULT_AWS_PROGRAM};
use serde::Deserialize;
use std::time::Instant;

/// Checks whether a domain can be registered through Route53 Domains
pub struct AvailabilityChecker<R = ProcessRunner> {
    runner: R,
    program: String,
}

impl AvailabilityChecker<ProcessRunner> {
    /// Create a checker that spawns the `aws` executable
    pub fn new() -> Self {
        Self::with_runner(ProcessRunner::new(), DEFAULT_AWS_PROGRAM)
    }
}

impl<R: CommandRunner> AvailabilityChecker<R> {
    /// Create a checker with a custom runner and AWS CLI program
    pub fn with_runner(runner: R, program: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Run the availability check and classify the result
    pub async fn check(&self, domain_name: &str) -> Result<Outcome> {
        if domain_name.is_empty() {
            return Err(KreatisiteError::validation("Domain name cannot be empty"));
        }

        let start_time = Instant::now();
        let argv = command::check_domain_availability(&self.program, domain_name);
        let mut outcome = execute(&self.runner, argv).await?;
        outcome.availability = parse_availability(&outcome.stdout);

        tracing::info!(
            domain = %domain_name,
            availability = ?outcome.availability,
            duration_ms = %start_time.elapsed().as_millis(),
            "Domain availability check completed"
        );

        Ok(outcome)
    }

    /// Check a domain, print the result and return the process exit code
    pub async fn check_availability(&self, domain_name: &str) -> i32 {
        report_to_stdio(self.check(domain_name).await)
    }
}

impl Default for AvailabilityChecker<ProcessRunner> {
    fn default() -> Self {
        Self::new()
    }
}

/// `check-domain-availability` JSON reply
#[derive(Debug, Deserialize)]
struct AvailabilityResponse {
    #[serde(rename = "Availability")]
    availability: String,
}

/// Best-effort read of the availability field; unknown output yields `None`.
fn parse_availability(stdout: &str) -> Option<AvailabilityStatus> {
    serde_json::from_str::<AvailabilityResponse>(stdout.trim())
        .ok()
        .map(|reply| AvailabilityStatus::from_route53(&reply.availability))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aws::RecordingRunner;
    use crate::report::report;

    fn checker(runner: RecordingRunner) -> AvailabilityChecker<RecordingRunner> {
        AvailabilityChecker::with_runner(runner, "aws")
    }

    #[tokio::test]
    async fn test_available_domain_relays_stdout() {
        let checker = checker(RecordingRunner::replying("{\"Available\": true}\n", "", 0));
        let (mut out, mut err) = (Vec::new(), Vec::new());

        let code = report(checker.check("example.com").await, &mut out, &mut err);

        assert_eq!(code, 0);
        assert!(String::from_utf8(out).unwrap().contains("{\"Available\": true}"));
        assert!(err.is_empty());
        assert_eq!(
            checker.runner().last_call().unwrap(),
            vec!["aws", "route53domains", "check-domain-availability", "--domain-name", "example.com"]
        );
    }

    #[tokio::test]
    async fn test_validation_exception_fails() {
        let checker = checker(RecordingRunner::replying(
            "",
            "An error occurred (ValidationException): Invalid domain",
            1,
        ));
        let (mut out, mut err) = (Vec::new(), Vec::new());

        let code = report(checker.check("invalid-domain").await, &mut out, &mut err);

        assert_eq!(code, 1);
        assert!(String::from_utf8(err)
            .unwrap()
            .contains("Error: An error occurred (ValidationException): Invalid domain"));
    }

    #[tokio::test]
    async fn test_stderr_with_zero_exit_fails() {
        let checker = checker(RecordingRunner::replying("{\"Availability\": \"AVAILABLE\"}", "warning", 0));
        let (mut out, mut err) = (Vec::new(), Vec::new());

        let code = report(checker.check("example.com").await, &mut out, &mut err);

        assert_eq!(code, 1);
        assert!(String::from_utf8(out).unwrap().contains("AVAILABLE"));
        assert_eq!(String::from_utf8(err).unwrap(), "Error: warning\n");
    }

    #[tokio::test]
    async fn test_invocation_failure() {
        let checker = checker(RecordingRunner::failing("Connection error"));
        let (mut out, mut err) = (Vec::new(), Vec::new());

        let code = report(checker.check("example.com").await, &mut out, &mut err);

        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert!(String::from_utf8(err)
            .unwrap()
            .contains("Error executing AWS command: Connection error"));
    }

    #[tokio::test]
    async fn test_availability_is_parsed() {
        let checker = checker(RecordingRunner::replying("{\"Availability\": \"UNAVAILABLE\"}", "", 0));
        let outcome = checker.check("google.com").await.unwrap();
        assert_eq!(outcome.availability, Some(AvailabilityStatus::Taken));
    }

    #[tokio::test]
    async fn test_empty_domain_never_spawns() {
        let checker = checker(RecordingRunner::replying("", "", 0));
        let err = checker.check("").await.unwrap_err();

        assert!(matches!(err, KreatisiteError::Validation { .. }));
        assert_eq!(checker.runner().call_count(), 0);
    }

    #[test]
    fn test_parse_availability_ignores_non_json() {
        assert_eq!(parse_availability("not json"), None);
        assert_eq!(
            parse_availability("{\"Availability\": \"AVAILABLE\"}"),
            Some(AvailabilityStatus::Available)
        );
    }
}
