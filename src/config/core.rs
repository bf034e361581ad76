use crate::complexity::{
    ComplexityLevel, Condition, Profile, Rule, RuleOptions, RuleSet, Trigger,
};
use crate::errors::{Error, Result};
use crate::io::output::OutputFormat;
use serde::{Deserialize, Serialize};

/// Default cap on input size, in bytes
pub const DEFAULT_MAX_BYTES: u64 = 1024 * 1024;

/// Root configuration structure, read from `.bigo.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BigoConfig {
    /// Rule table selection
    #[serde(default)]
    pub rules: RulesConfig,

    /// Input discovery
    #[serde(default)]
    pub input: Option<InputConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RulesConfig {
    #[serde(default)]
    pub profile: Profile,

    /// Toggle overrides applied on top of the profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_triggers: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo_guard: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generic_sort: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_shift: Option<bool>,

    /// Additional pattern rules merged into the table by priority
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<ExtraRuleConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtraRuleConfig {
    pub name: String,
    pub pattern: String,
    pub label: ComplexityLevel,
    pub priority: u8,
    #[serde(default = "default_case_insensitive")]
    pub case_insensitive: bool,
}

fn default_case_insensitive() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InputConfig {
    /// File extensions picked up when walking directories
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Glob patterns excluded from directory walks
    #[serde(default)]
    pub ignore: Vec<String>,
    /// Files larger than this are skipped
    #[serde(default = "default_max_bytes")]
    pub max_bytes: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            ignore: Vec::new(),
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }
}

pub fn default_extensions() -> Vec<String> {
    [
        "js", "jsx", "ts", "tsx", "py", "rb", "java", "kt", "go", "rs", "c", "h", "cpp", "hpp",
        "cs", "swift", "php",
    ]
    .iter()
    .map(|ext| ext.to_string())
    .collect()
}

fn default_max_bytes() -> u64 {
    DEFAULT_MAX_BYTES
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    pub default_format: Option<OutputFormat>,
    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
}

impl RulesConfig {
    /// Profile options with the toggle overrides applied
    pub fn options(&self) -> RuleOptions {
        let base = self.profile.options();
        RuleOptions {
            power_triggers: self.power_triggers.unwrap_or(base.power_triggers),
            memo_guard: self.memo_guard.unwrap_or(base.memo_guard),
            generic_sort: self.generic_sort.unwrap_or(base.generic_sort),
            left_shift: self.left_shift.unwrap_or(base.left_shift),
        }
    }

    pub fn build_rule_set(&self) -> Result<RuleSet> {
        self.extra
            .iter()
            .try_fold(RuleSet::from_options(self.options()), |set, extra| -> Result<RuleSet> {
                Ok(set.with_rule(extra.to_rule()?))
            })
    }
}

impl ExtraRuleConfig {
    pub fn to_rule(&self) -> Result<Rule> {
        if self.label == ComplexityLevel::Unknown {
            return Err(Error::Configuration(format!(
                "rule '{}' cannot produce Unknown; it is the fallback when no rule fires",
                self.name
            )));
        }

        let trigger = Trigger::compile(self.name.clone(), &self.pattern, self.case_insensitive)?;
        Ok(Rule::new(
            self.name.clone(),
            self.priority,
            self.label,
            Condition::Matches(trigger),
        ))
    }
}

impl BigoConfig {
    pub fn input(&self) -> InputConfig {
        self.input.clone().unwrap_or_default()
    }
}
