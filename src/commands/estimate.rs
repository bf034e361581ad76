use crate::complexity::{ComplexityEstimator, ComplexityLevel, Profile};
use crate::config::{self, BigoConfig, InputConfig};
use crate::errors::Result;
use crate::io::output::{create_writer, OutputFormat};
use crate::io::walker::FileWalker;
use crate::io::{self, SourceText};
use crate::report::{EstimateReport, SkippedInput, SnippetEstimate, SnippetSource};
use rayon::prelude::*;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub struct EstimateConfig {
    pub paths: Vec<PathBuf>,
    pub code: Option<String>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub profile: Option<Profile>,
    pub config: Option<PathBuf>,
    pub explain: bool,
    pub fail_above: Option<ComplexityLevel>,
    pub plain: bool,
}

/// Result of an estimate run, used by `main` for the exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstimateOutcome {
    pub estimated: usize,
    pub skipped: usize,
    pub exceeding: usize,
}

impl EstimateOutcome {
    pub fn passed(&self) -> bool {
        self.exceeding == 0
    }
}

/// Load the explicit config file when given, otherwise the discovered one,
/// then apply a CLI profile override.
pub fn resolve_config(path: Option<&Path>, profile: Option<Profile>) -> Result<BigoConfig> {
    let mut config = match path {
        Some(path) => config::load_config_from_path(path)?,
        None => config::load_config(),
    };
    if let Some(profile) = profile {
        config.rules.profile = profile;
    }
    Ok(config)
}

pub fn handle_estimate(options: EstimateConfig) -> anyhow::Result<EstimateOutcome> {
    let config = resolve_config(options.config.as_deref(), options.profile)?;
    let estimator = ComplexityEstimator::new(config.rules.build_rule_set()?);
    let input = config.input();
    debug!(
        profile = %config.rules.profile,
        rules = estimator.rules().rules().len(),
        "Estimator ready"
    );

    let (estimates, skipped) = match options.code {
        Some(code) => (
            vec![estimate_text(&estimator, SnippetSource::Inline, &code)],
            Vec::new(),
        ),
        None if options.paths.is_empty() => estimate_stdin(&estimator, input.max_bytes)?,
        None => {
            let (files, mut missing) = collect_files(&options.paths, &input)?;
            info!("Estimating {} files", files.len());
            let (estimates, mut unreadable) = estimate_files(&estimator, &files, input.max_bytes);
            missing.append(&mut unreadable);
            (estimates, missing)
        }
    };

    let report = EstimateReport::new(config.rules.profile, estimates, skipped);
    let exceeding = options
        .fail_above
        .map_or(0, |limit| report.exceeding(limit).len());

    let format = options
        .format
        .or_else(|| config.output.as_ref().and_then(|o| o.default_format))
        .unwrap_or(OutputFormat::Terminal);
    let use_color = config
        .output
        .as_ref()
        .and_then(|o| o.use_color)
        .unwrap_or(true);
    if options.plain || options.output.is_some() || !use_color {
        colored::control::set_override(false);
    }

    match &options.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| crate::Error::file_system(path, e))?;
            create_writer(format, BufWriter::new(file), options.explain).write_report(&report)?;
        }
        None => {
            let stdout = std::io::stdout();
            create_writer(format, stdout.lock(), options.explain).write_report(&report)?;
        }
    }

    if let Some(limit) = options.fail_above {
        if exceeding > 0 {
            warn!("{} snippet(s) exceed {}", exceeding, limit);
        }
    }

    Ok(EstimateOutcome {
        estimated: report.estimates.len(),
        skipped: report.skipped.len(),
        exceeding,
    })
}

pub fn estimate_text(
    estimator: &ComplexityEstimator,
    source: SnippetSource,
    text: &str,
) -> SnippetEstimate {
    SnippetEstimate {
        source,
        bytes: text.len(),
        estimate: estimator.estimate_detailed(text),
    }
}

fn estimate_stdin(
    estimator: &ComplexityEstimator,
    max_bytes: u64,
) -> Result<(Vec<SnippetEstimate>, Vec<SkippedInput>)> {
    match io::read_stdin(max_bytes)? {
        SourceText::Text(text) => Ok((
            vec![estimate_text(estimator, SnippetSource::Stdin, &text)],
            Vec::new(),
        )),
        SourceText::TooLarge { bytes } => Ok((
            Vec::new(),
            vec![SkippedInput {
                source: SnippetSource::Stdin,
                reason: too_large(bytes, max_bytes),
            }],
        )),
    }
}

/// Expand directories into snippet files; explicit file paths are kept
/// regardless of extension. Paths that do not exist are reported as skipped.
pub fn collect_files(
    paths: &[PathBuf],
    input: &InputConfig,
) -> Result<(Vec<PathBuf>, Vec<SkippedInput>)> {
    let mut files = Vec::new();
    let mut skipped = Vec::new();

    for path in paths {
        if path.is_dir() {
            let walker = FileWalker::new(path.clone())
                .with_extensions(input.extensions.clone())
                .with_ignore_patterns(&input.ignore)?;
            files.extend(walker.walk()?);
        } else if path.exists() {
            files.push(path.clone());
        } else {
            warn!("Skipping {}: no such file or directory", path.display());
            skipped.push(SkippedInput {
                source: SnippetSource::File(path.display().to_string()),
                reason: "no such file or directory".to_string(),
            });
        }
    }

    Ok((files, skipped))
}

/// Read and estimate files in parallel; output order follows `files`.
pub fn estimate_files(
    estimator: &ComplexityEstimator,
    files: &[PathBuf],
    max_bytes: u64,
) -> (Vec<SnippetEstimate>, Vec<SkippedInput>) {
    let results: Vec<std::result::Result<SnippetEstimate, SkippedInput>> = files
        .par_iter()
        .map(|path| {
            let source = SnippetSource::File(path.display().to_string());
            match io::read_source(path, max_bytes) {
                Ok(SourceText::Text(text)) => Ok(estimate_text(estimator, source, &text)),
                Ok(SourceText::TooLarge { bytes }) => {
                    warn!("Skipping {}: {}", path.display(), too_large(bytes, max_bytes));
                    Err(SkippedInput {
                        source,
                        reason: too_large(bytes, max_bytes),
                    })
                }
                Err(e) => {
                    warn!("Skipping {}: {}", path.display(), e);
                    Err(SkippedInput {
                        source,
                        reason: e.to_string(),
                    })
                }
            }
        })
        .collect();

    let mut estimates = Vec::with_capacity(results.len());
    let mut skipped = Vec::new();
    for result in results {
        match result {
            Ok(estimate) => estimates.push(estimate),
            Err(skip) => skipped.push(skip),
        }
    }
    (estimates, skipped)
}

fn too_large(bytes: u64, max_bytes: u64) -> String {
    format!("{bytes} bytes exceeds the {max_bytes} byte limit")
}
