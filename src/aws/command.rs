//! Argument vectors for `aws route53domains`

use super::ROUTE53_DOMAINS;
use crate::types::RegistrationRequest;

/// Contact privacy flags, always requested on registration
pub const PRIVACY_FLAGS: [&str; 3] = [
    "--privacy-protect-admin-contact",
    "--privacy-protect-registrant-contact",
    "--privacy-protect-tech-contact",
];

/// `aws route53domains check-domain-availability --domain-name <domain>`
pub fn check_domain_availability(program: &str, domain_name: &str) -> Vec<String> {
    vec![
        program.to_string(),
        ROUTE53_DOMAINS.to_string(),
        "check-domain-availability".to_string(),
        "--domain-name".to_string(),
        domain_name.to_string(),
    ]
}

/// `aws route53domains register-domain ...` with contact details read from the config document
pub fn register_domain(program: &str, request: &RegistrationRequest) -> Vec<String> {
    let mut argv = vec![
        program.to_string(),
        ROUTE53_DOMAINS.to_string(),
        "register-domain".to_string(),
        "--domain-name".to_string(),
        request.domain_name().to_string(),
        "--duration-in-years".to_string(),
        request.duration_years().to_string(),
    ];

    argv.push(if request.auto_renew() {
        "--auto-renew".to_string()
    } else {
        "--no-auto-renew".to_string()
    });

    argv.extend(PRIVACY_FLAGS.iter().map(|flag| flag.to_string()));

    argv.push("--cli-input-yaml".to_string());
    argv.push(format!("file://{}", request.config_path().display()));

    argv
}
