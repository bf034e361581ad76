//! CLI command implementations.
//!
//! Available commands:
//! - **estimate**: Estimate complexity for stdin, inline text, files or directories
//! - **init**: Write a default `.bigo.toml`
//! - **rules**: Print the effective rule table

pub mod estimate;
pub mod init;
pub mod rules;

pub use estimate::{handle_estimate, EstimateConfig, EstimateOutcome};
pub use init::init_config;
pub use rules::print_rules;
