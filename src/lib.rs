// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod complexity;
pub mod config;
pub mod errors;
pub mod io;
pub mod report;

// Re-export commonly used types
pub use crate::complexity::{
    estimate_complexity, ComplexityEstimator, ComplexityLevel, Condition, Estimate, LoopCount,
    Profile, Rule, RuleOptions, RuleSet, Tone, Trigger,
};

pub use crate::config::{load_config, BigoConfig};

pub use crate::errors::{Error, Result};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::report::{EstimateReport, SnippetEstimate, SnippetSource};
