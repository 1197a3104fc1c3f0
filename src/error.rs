//! Error handling for kreatisite
//!
//! Every variant renders as the exact line the CLI prints on stderr, so the
//! reporter never has to re-format an error before showing it.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Example configuration shipped next to the binary's default config path
pub const EXAMPLE_CONFIG_FILE: &str = "aws-register-domain.yaml.example";

/// Main error type for kreatisite
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KreatisiteError {
    #[error("Error: Config file '{}' not found", .path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("Error: Cannot read config file '{}': {message}", .path.display())]
    ConfigRead { path: PathBuf, message: String },

    #[error("Error parsing YAML config file: {message}")]
    ConfigParse { message: String },

    /// The external tool wrote to its diagnostic stream.
    #[error("Error: {}", .stderr.trim())]
    ToolDiagnostic { stdout: String, stderr: String },

    #[error("Error executing AWS command: {message}")]
    Invocation { message: String },

    #[error("Error: Missing required commands: {}", .commands.join(", "))]
    MissingDependencies { commands: Vec<String> },

    #[error("Error: {message}")]
    Validation { message: String },
}

impl KreatisiteError {
    /// Create a config-not-found error
    pub fn config_not_found(path: impl AsRef<Path>) -> Self {
        Self::ConfigNotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a config read error
    pub fn config_read(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::ConfigRead {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    /// Create a YAML parse error
    pub fn config_parse(message: impl Into<String>) -> Self {
        Self::ConfigParse {
            message: message.into(),
        }
    }

    /// Create a tool diagnostic error from captured streams
    pub fn tool_diagnostic(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self::ToolDiagnostic {
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// Create an invocation error
    pub fn invocation(message: impl Into<String>) -> Self {
        Self::Invocation {
            message: message.into(),
        }
    }

    /// Create a missing dependencies error
    pub fn missing_dependencies(commands: Vec<String>) -> Self {
        Self::MissingDependencies { commands }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Whether the error was raised before any process was spawned
    pub fn is_pre_spawn(&self) -> bool {
        !matches!(self, Self::ToolDiagnostic { .. } | Self::Invocation { .. })
    }

    /// Follow-up lines telling the user how to recover
    pub fn hint(&self) -> Vec<String> {
        match self {
            Self::ConfigNotFound { path } => {
                let path = path.display();
                vec![
                    format!("Copy the example file: cp {} {}", EXAMPLE_CONFIG_FILE, path),
                    format!("Edit {} with your information", path),
                ]
            }
            Self::MissingDependencies { .. } => vec![
                "Please install AWS CLI and make sure it is on your PATH: https://aws.amazon.com/cli/"
                    .to_string(),
            ],
            _ => Vec::new(),
        }
    }
}

impl From<serde_yaml::Error> for KreatisiteError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::config_parse(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, KreatisiteError>;
