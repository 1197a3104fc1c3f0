//! Domain operations: availability checks and registration

pub mod checker;
pub mod config;
pub mod registrar;

// Re-export main functionality
pub use checker::AvailabilityChecker;
pub use config::validate_config_document;
pub use registrar::DomainRegistrar;
