//! Shared execute-and-classify step used by every operation

use super::CommandRunner;
use crate::error::{KreatisiteError, Result};
use crate::types::{CommandInvocation, Outcome};

/// Run `argv` once and classify what the tool produced
pub async fn execute<R>(runner: &R, argv: Vec<String>) -> Result<Outcome>
where
    R: CommandRunner + ?Sized,
{
    tracing::debug!(command = %argv.join(" "), "Running AWS command");
    let invocation = runner.run(&argv).await?;
    classify(invocation)
}

/// Any diagnostic output fails the operation, whatever the exit status was.
pub fn classify(invocation: CommandInvocation) -> Result<Outcome> {
    if !invocation.stderr.is_empty() {
        tracing::debug!(
            exit_status = ?invocation.exit_status,
            "External tool wrote to stderr"
        );
        return Err(KreatisiteError::tool_diagnostic(
            invocation.stdout,
            invocation.stderr,
        ));
    }

    if invocation.exit_status != Some(0) {
        tracing::warn!(
            exit_status = ?invocation.exit_status,
            "External tool exited unsuccessfully without diagnostics"
        );
    }

    Ok(Outcome::from(invocation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aws::RecordingRunner;

    fn invocation(stdout: &str, stderr: &str, exit_status: Option<i32>) -> CommandInvocation {
        CommandInvocation::new(vec!["aws".to_string()], stdout, stderr, exit_status)
    }

    #[test]
    fn test_clean_exit_is_success() {
        let outcome = classify(invocation("{\"Available\": true}", "", Some(0))).unwrap();
        assert_eq!(outcome.stdout, "{\"Available\": true}");
        assert_eq!(outcome.exit_status, Some(0));
    }

    #[test]
    fn test_stderr_fails_even_on_zero_exit() {
        let err = classify(invocation("partial", "deprecation warning", Some(0))).unwrap_err();
        assert_eq!(
            err,
            KreatisiteError::tool_diagnostic("partial", "deprecation warning")
        );
    }

    #[test]
    fn test_whitespace_only_stderr_still_fails() {
        let err = classify(invocation("", "\n", Some(0))).unwrap_err();
        assert_eq!(err.to_string(), "Error: ");
    }

    #[test]
    fn test_nonzero_exit_without_stderr_is_success() {
        assert!(classify(invocation("", "", Some(255))).is_ok());
        assert!(classify(invocation("", "", None)).is_ok());
    }

    #[tokio::test]
    async fn test_execute_passes_argv_to_runner() {
        let runner = RecordingRunner::replying("ok", "", 0);
        let argv = vec!["aws".to_string(), "route53domains".to_string()];
        let outcome = execute(&runner, argv.clone()).await.unwrap();

        assert_eq!(outcome.argv, argv);
        assert_eq!(runner.last_call(), Some(argv));
    }

    #[tokio::test]
    async fn test_execute_propagates_invocation_errors() {
        let runner = RecordingRunner::failing("Connection error");
        let err = execute(&runner, vec!["aws".to_string()]).await.unwrap_err();
        assert_eq!(err, KreatisiteError::invocation("Connection error"));
    }
}
