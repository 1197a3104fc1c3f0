//! Core types and structures for kreatisite

use crate::error::{KreatisiteError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Default AWS CLI executable
pub const DEFAULT_AWS_PROGRAM: &str = "aws";

/// Default registration config document
pub const DEFAULT_CONFIG_FILE: &str = "aws-register-domain.yaml";

/// Domain availability as reported by Route53 Domains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityStatus {
    Available,
    Taken,
    Unknown,
}

impl AvailabilityStatus {
    /// Map a Route53 `Availability` value (`AVAILABLE`, `UNAVAILABLE_PREMIUM`, ...)
    pub fn from_route53(value: &str) -> Self {
        let value = value.trim().to_uppercase();
        if value.starts_with("AVAILABLE") {
            AvailabilityStatus::Available
        } else if value.starts_with("UNAVAILABLE") || value == "RESERVED" {
            AvailabilityStatus::Taken
        } else {
            AvailabilityStatus::Unknown
        }
    }
}

impl std::fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AvailabilityStatus::Available => write!(f, "available"),
            AvailabilityStatus::Taken => write!(f, "taken"),
            AvailabilityStatus::Unknown => write!(f, "unknown"),
        }
    }
}

/// A domain registration request, validated at construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    domain_name: String,
    duration_years: u32,
    auto_renew: bool,
    config_path: PathBuf,
}

impl RegistrationRequest {
    /// One-year registration with auto-renew enabled
    pub fn new(domain_name: impl Into<String>, config_path: impl Into<PathBuf>) -> Self {
        Self {
            domain_name: domain_name.into(),
            duration_years: 1,
            auto_renew: true,
            config_path: config_path.into(),
        }
    }

    /// Set the registration period; zero years is rejected
    pub fn with_duration_years(mut self, years: u32) -> Result<Self> {
        if years == 0 {
            return Err(KreatisiteError::validation(
                "Duration in years must be a positive integer",
            ));
        }
        self.duration_years = years;
        Ok(self)
    }

    pub fn with_auto_renew(mut self, auto_renew: bool) -> Self {
        self.auto_renew = auto_renew;
        self
    }

    pub fn domain_name(&self) -> &str {
        &self.domain_name
    }

    pub fn duration_years(&self) -> u32 {
        self.duration_years
    }

    pub fn auto_renew(&self) -> bool {
        self.auto_renew
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }
}

/// One finished run of the external tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandInvocation {
    pub argv: Vec<String>,
    pub stdout: String,
    pub stderr: String,
    /// `None` when the child was terminated by a signal
    pub exit_status: Option<i32>,
}

impl CommandInvocation {
    pub fn new(
        argv: Vec<String>,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
        exit_status: Option<i32>,
    ) -> Self {
        Self {
            argv,
            stdout: stdout.into(),
            stderr: stderr.into(),
            exit_status,
        }
    }
}

/// Successful result of an operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub argv: Vec<String>,
    pub stdout: String,
    pub exit_status: Option<i32>,
    /// Parsed from `check-domain-availability` replies
    pub availability: Option<AvailabilityStatus>,
    /// Parsed from `register-domain` replies
    pub operation_id: Option<String>,
}

impl From<CommandInvocation> for Outcome {
    fn from(invocation: CommandInvocation) -> Self {
        Self {
            argv: invocation.argv,
            stdout: invocation.stdout,
            exit_status: invocation.exit_status,
            availability: None,
            operation_id: None,
        }
    }
}

/// Runtime settings read from the environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub aws_program: String,
    pub default_config_file: PathBuf,
}

impl Settings {
    /// Read `KREATISITE_AWS_CLI` and `KREATISITE_CONFIG_FILE`
    pub fn from_env() -> Self {
        let aws_program = env::var("KREATISITE_AWS_CLI")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_AWS_PROGRAM.to_string());
        let default_config_file = env::var("KREATISITE_CONFIG_FILE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        Self {
            aws_program,
            default_config_file,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            aws_program: DEFAULT_AWS_PROGRAM.to_string(),
            default_config_file: PathBuf::from(DEFAULT_CONFIG_FILE),
        }
    }
}
