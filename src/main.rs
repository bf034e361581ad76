use anyhow::Result;
use bigo_estimator::cli::{self, Commands};
use bigo_estimator::commands::{self, EstimateConfig};
use tracing::info;

fn main() -> Result<()> {
    let cli = cli::parse_args();
    cli::init_logging(cli.verbosity)?;

    match cli.command {
        Commands::Estimate {
            paths,
            code,
            format,
            output,
            profile,
            config,
            explain,
            fail_above,
            plain,
            jobs,
        } => {
            cli::configure_thread_pool(jobs);
            let outcome = commands::handle_estimate(EstimateConfig {
                paths,
                code,
                format,
                output,
                profile,
                config,
                explain,
                fail_above,
                plain,
            })?;
            info!(
                estimated = outcome.estimated,
                skipped = outcome.skipped,
                exceeding = outcome.exceeding,
                "Estimate run finished"
            );
            if !outcome.passed() {
                std::process::exit(1);
            }
        }
        Commands::Rules { profile, config } => {
            commands::print_rules(profile, config.as_deref())?;
        }
        Commands::Init { force } => {
            commands::init_config(force)?;
        }
    }

    Ok(())
}
