use std::fs;
use std::path::{Path, PathBuf};

use super::core::BigoConfig;
use crate::errors::{Error, Result};

/// File name searched for in the working directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".bigo.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse and validate config from a TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<BigoConfig> {
    let config: BigoConfig = toml::from_str(contents)?;

    // Compile extra rules up front so bad patterns surface at load time
    config.rules.build_rule_set()?;

    if let Some(input) = &config.input {
        if input.max_bytes == 0 {
            return Err(Error::Configuration(
                "input.max_bytes must be greater than zero".to_string(),
            ));
        }
        for pattern in &input.ignore {
            glob::Pattern::new(pattern)?;
        }
    }

    Ok(config)
}

/// Load an explicitly requested config file; any failure is an error
pub fn load_config_from_path(path: &Path) -> Result<BigoConfig> {
    let contents = fs::read_to_string(path).map_err(|e| Error::file_system(path, e))?;
    parse_and_validate_config(&contents).map_err(|e| e.with_context(path.display().to_string()))
}

/// Try loading a discovered config; missing files are silent, broken ones warn
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<BigoConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            tracing::warn!("Ignoring {}: {}. Using defaults.", config_path.display(), e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        tracing::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for the nearest valid config
pub fn discover_config(start: PathBuf) -> BigoConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            tracing::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            BigoConfig::default()
        })
}

pub fn load_config() -> BigoConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            tracing::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            BigoConfig::default()
        }
    }
}
