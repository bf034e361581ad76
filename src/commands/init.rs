use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = r#"# bigo configuration

[rules]
# "canonical" or "broad"
profile = "canonical"
# Toggle overrides on top of the profile
# power_triggers = false
# memo_guard = true
# generic_sort = false
# left_shift = true

# Extra pattern rules, merged into the table by priority
# [[rules.extra]]
# name = "bisect"
# pattern = "bisect"
# label = "O(log n)"
# priority = 35

[input]
extensions = ["js", "jsx", "ts", "tsx", "py", "rb", "java", "kt", "go", "rs", "c", "h", "cpp", "hpp", "cs", "swift", "php"]
ignore = ["**/node_modules/**", "**/target/**", "*.min.js"]
max_bytes = 1048576

[output]
default_format = "terminal"
"#;

pub fn init_config(force: bool) -> Result<()> {
    init_config_at(&PathBuf::from(CONFIG_FILE_NAME), force)
}

pub fn init_config_at(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(config_path, DEFAULT_CONFIG)?;
    println!("Created {} configuration file", config_path.display());

    Ok(())
}
