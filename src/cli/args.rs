use crate::complexity::{ComplexityLevel, Profile};
use crate::io::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bigo")]
#[command(about = "Heuristic Big-O estimator for code snippets", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv)
    /// -v: debug logging
    /// -vv: trace logging
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate the time complexity of snippets
    Estimate {
        /// Files or directories to estimate (reads stdin when empty)
        paths: Vec<PathBuf>,

        /// Estimate this text instead of reading files
        #[arg(long, conflicts_with = "paths")]
        code: Option<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Rule profile, overriding the config file
        #[arg(long, value_enum, env = "BIGO_PROFILE")]
        profile: Option<Profile>,

        /// Configuration file (defaults to the nearest .bigo.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Show which rule produced each label
        #[arg(long)]
        explain: bool,

        /// Exit with status 1 when any estimate grows faster than this label
        #[arg(long = "fail-above", value_parser = parse_level)]
        fail_above: Option<ComplexityLevel>,

        /// Disable colored output
        #[arg(long)]
        plain: bool,

        /// Number of worker threads (0 = one per core)
        #[arg(short = 'j', long, default_value = "0")]
        jobs: usize,
    },

    /// Print the effective rule table in evaluation order
    Rules {
        /// Rule profile, overriding the config file
        #[arg(long, value_enum, env = "BIGO_PROFILE")]
        profile: Option<Profile>,

        /// Configuration file (defaults to the nearest .bigo.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

fn parse_level(s: &str) -> Result<ComplexityLevel, String> {
    s.parse::<ComplexityLevel>().map_err(|e| e.to_string())
}

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_accepts_ascii_threshold() {
        let cli = Cli::try_parse_from(["bigo", "estimate", "--code", "x", "--fail-above", "O(n^2)"])
            .unwrap();
        match cli.command {
            Commands::Estimate { fail_above, code, .. } => {
                assert_eq!(fail_above, Some(ComplexityLevel::Quadratic));
                assert_eq!(code.as_deref(), Some("x"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_code_conflicts_with_paths() {
        let result = Cli::try_parse_from(["bigo", "estimate", "a.js", "--code", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbosity_is_global() {
        let cli = Cli::try_parse_from(["bigo", "rules", "-vv"]).unwrap();
        assert_eq!(cli.verbosity, 2);
    }
}
