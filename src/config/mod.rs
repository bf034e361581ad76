mod core;
mod loader;

pub use self::core::{
    default_extensions, BigoConfig, ExtraRuleConfig, InputConfig, OutputConfig, RulesConfig,
    DEFAULT_MAX_BYTES,
};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from_path,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
