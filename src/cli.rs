//! Command line interface

use crate::aws::ProcessRunner;
use crate::domain::{AvailabilityChecker, DomainRegistrar};
use crate::error::{KreatisiteError, Result};
use crate::report::{report_error, EXIT_FAILURE, EXIT_SUCCESS};
use crate::types::{RegistrationRequest, Settings};
use clap::{Parser, Subcommand};
use std::env;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "kreatisite", version)]
#[command(about = "Kreatisite - A command line application")]
#[command(after_help = "For more information, visit https://devixlabs.com")]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Display detailed help information
    Help,

    /// Check domain availability using AWS Route53
    CheckDomain {
        /// Domain name to check (e.g., example.com)
        domain_name: String,
    },

    /// Register a domain using AWS Route53
    RegisterDomain {
        /// Domain name to register (e.g., example.com)
        domain_name: String,

        /// YAML config file with contact information (default: aws-register-domain.yaml)
        #[arg(long = "config-file")]
        config_file: Option<PathBuf>,

        /// Number of years to register the domain
        #[arg(long = "duration-in-years", default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        duration_in_years: u32,

        /// Disable auto-renewal (auto-renew is on by default)
        #[arg(long = "no-auto-renew")]
        no_auto_renew: bool,
    },
}

/// Dispatch a parsed command line and return the process exit code
pub async fn run(cli: Cli, settings: &Settings) -> i32 {
    match cli.command {
        None | Some(Commands::Help) => {
            print_help();
            EXIT_SUCCESS
        }
        Some(Commands::CheckDomain { domain_name }) => {
            if let Err(e) = check_dependencies(&[settings.aws_program.as_str()]) {
                report_error(&e, &mut io::stderr());
                return EXIT_FAILURE;
            }
            AvailabilityChecker::with_runner(ProcessRunner::new(), settings.aws_program.clone())
                .check_availability(&domain_name)
                .await
        }
        Some(Commands::RegisterDomain {
            domain_name,
            config_file,
            duration_in_years,
            no_auto_renew,
        }) => {
            let config_file = config_file.unwrap_or_else(|| settings.default_config_file.clone());
            let request = match RegistrationRequest::new(domain_name, config_file)
                .with_duration_years(duration_in_years)
            {
                Ok(request) => request.with_auto_renew(!no_auto_renew),
                Err(e) => {
                    report_error(&e, &mut io::stderr());
                    return EXIT_FAILURE;
                }
            };
            if let Err(e) = check_dependencies(&[settings.aws_program.as_str()]) {
                report_error(&e, &mut io::stderr());
                return EXIT_FAILURE;
            }
            DomainRegistrar::with_runner(ProcessRunner::new(), settings.aws_program.clone())
                .register_domain(&request)
                .await
        }
    }
}

/// Fail with every command in `commands` that cannot be found
pub fn check_dependencies(commands: &[&str]) -> Result<()> {
    let search_path = env::var_os("PATH");
    let missing: Vec<String> = commands
        .iter()
        .filter(|command| find_executable(command, search_path.as_deref()).is_none())
        .map(|command| command.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        tracing::debug!(missing = ?missing, "Required commands not found");
        Err(KreatisiteError::missing_dependencies(missing))
    }
}

/// Resolve `command` the way a shell would: paths are taken as-is, bare names are searched on `PATH`.
pub fn find_executable(command: &str, search_path: Option<&std::ffi::OsStr>) -> Option<PathBuf> {
    let candidate = Path::new(command);
    if candidate.components().count() > 1 {
        return is_executable(candidate).then(|| candidate.to_path_buf());
    }

    let search_path = search_path?;
    env::split_paths(search_path).find_map(|dir| {
        executable_names(command)
            .into_iter()
            .map(|name| dir.join(name))
            .find(|path| is_executable(path))
    })
}

#[cfg(windows)]
fn executable_names(command: &str) -> Vec<String> {
    vec![
        command.to_string(),
        format!("{}.exe", command),
        format!("{}.cmd", command),
    ]
}

#[cfg(not(windows))]
fn executable_names(command: &str) -> Vec<String> {
    vec![command.to_string()]
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Detailed help text
pub const HELP_TEXT: &str = "
Kreatisite Command Line Application
=================================

DESCRIPTION
-----------
Kreatisite checks domain availability and registers domains through
the AWS Route53 Domains command line interface.

USAGE
-----
kreatisite [command] [options]

COMMANDS
--------
help              Display this detailed help information
check-domain      Check domain availability using AWS Route53
register-domain   Register a domain using AWS Route53

REGISTER-DOMAIN OPTIONS
-----------------------
--config-file <PATH>       YAML file with contact information
                           (default: aws-register-domain.yaml)
--duration-in-years <N>    Number of years to register the domain (default: 1)
--no-auto-renew            Disable auto-renewal (auto-renew is on by default)

EXAMPLES
--------
# Display help
kreatisite help

# Check domain availability
kreatisite check-domain example.com

# Register a domain for two years without auto-renewal
kreatisite register-domain example.com --duration-in-years 2 --no-auto-renew

ENVIRONMENT VARIABLES
---------------------
KREATISITE_AWS_CLI       AWS CLI executable (default: aws)
KREATISITE_CONFIG_FILE   Default registration config file
KREATISITE_LOG           Log filter, e.g. debug (default: error)

NOTES
-----
The AWS CLI must be installed and configured with credentials.
Contact privacy protection is always enabled for registrations.
";

/// Print detailed help information
pub fn print_help() {
    println!("{}", HELP_TEXT);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check_domain() {
        let cli = Cli::try_parse_from(["kreatisite", "check-domain", "example.com"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::CheckDomain {
                domain_name: "example.com".to_string()
            })
        );
    }

    #[test]
    fn test_parse_register_domain_defaults() {
        let cli = Cli::try_parse_from(["kreatisite", "register-domain", "example.com"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::RegisterDomain {
                domain_name: "example.com".to_string(),
                config_file: None,
                duration_in_years: 1,
                no_auto_renew: false,
            })
        );
    }

    #[test]
    fn test_parse_register_domain_options() {
        let cli = Cli::try_parse_from([
            "kreatisite",
            "register-domain",
            "example.com",
            "--config-file",
            "config.yaml",
            "--duration-in-years",
            "2",
            "--no-auto-renew",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::RegisterDomain {
                domain_name: "example.com".to_string(),
                config_file: Some(PathBuf::from("config.yaml")),
                duration_in_years: 2,
                no_auto_renew: true,
            })
        );
    }

    #[test]
    fn test_zero_duration_is_rejected() {
        let result = Cli::try_parse_from([
            "kreatisite",
            "register-domain",
            "example.com",
            "--duration-in-years",
            "0",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_domain_name_is_rejected() {
        assert!(Cli::try_parse_from(["kreatisite", "check-domain"]).is_err());
        assert!(Cli::try_parse_from(["kreatisite", "register-domain"]).is_err());
    }

    #[test]
    fn test_help_subcommand_and_no_command() {
        let cli = Cli::try_parse_from(["kreatisite", "help"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Help));
        let cli = Cli::try_parse_from(["kreatisite"]).unwrap();
        assert_eq!(cli.command, None);
    }

    #[test]
    fn test_help_text_lists_commands() {
        assert!(HELP_TEXT.contains("Kreatisite Command Line Application"));
        for section in ["DESCRIPTION", "USAGE", "COMMANDS", "EXAMPLES"] {
            assert!(HELP_TEXT.contains(section));
        }
        assert!(HELP_TEXT.contains("check-domain"));
        assert!(HELP_TEXT.contains("register-domain"));
    }

    #[test]
    fn test_find_executable_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_executable("aws", Some(dir.path().as_os_str())).is_none());
        assert!(find_executable("aws", None).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_find_executable_on_search_path() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let tool = dir.path().join("aws");
        std::fs::write(&tool, "#!/bin/sh\n").unwrap();

        // Not executable yet
        assert!(find_executable("aws", Some(dir.path().as_os_str())).is_none());

        std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755)).unwrap();
        assert_eq!(find_executable("aws", Some(dir.path().as_os_str())), Some(tool.clone()));
        assert_eq!(find_executable(tool.to_str().unwrap(), None), Some(tool));
    }

    #[test]
    fn test_check_dependencies_reports_missing() {
        let err = check_dependencies(&["kreatisite-no-such-program-4f2a"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error: Missing required commands: kreatisite-no-such-program-4f2a"
        );
    }
}
