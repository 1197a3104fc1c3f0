//! Rendering operation results to the terminal

use crate::error::{KreatisiteError, Result};
use crate::types::Outcome;
use std::io::{self, Write};

/// Exit code for a successful operation
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for any failed operation
pub const EXIT_FAILURE: i32 = 1;

/// Write an operation result to `out`/`err` and return its exit code
pub fn report<O, E>(result: Result<Outcome>, out: &mut O, err: &mut E) -> i32
where
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    // Write errors on the output streams are ignored.
    match result {
        Ok(outcome) => {
            relay_stdout(&outcome.stdout, out);
            EXIT_SUCCESS
        }
        Err(KreatisiteError::ToolDiagnostic { stdout, stderr }) => {
            relay_stdout(&stdout, out);
            let _ = writeln!(err, "Error: {}", stderr.trim());
            EXIT_FAILURE
        }
        Err(e) => {
            report_error(&e, err);
            EXIT_FAILURE
        }
    }
}

/// Write an error and its hint lines
pub fn report_error<E>(error: &KreatisiteError, err: &mut E)
where
    E: Write + ?Sized,
{
    let _ = writeln!(err, "{}", error);
    for line in error.hint() {
        let _ = writeln!(err, "{}", line);
    }
}

/// [`report`] on the process's own stdout and stderr
pub fn report_to_stdio(result: Result<Outcome>) -> i32 {
    let stdout = io::stdout();
    let stderr = io::stderr();
    let code = report(result, &mut stdout.lock(), &mut stderr.lock());
    let _ = io::stdout().flush();
    code
}

fn relay_stdout<O>(stdout: &str, out: &mut O)
where
    O: Write + ?Sized,
{
    if !stdout.is_empty() {
        let _ = writeln!(out, "{}", stdout.trim());
    }
}
