use crate::commands::estimate::resolve_config;
use crate::complexity::Profile;
use crate::io::output::write_rules;
use anyhow::Result;
use std::path::Path;

pub fn print_rules(profile: Option<Profile>, config: Option<&Path>) -> Result<()> {
    let config = resolve_config(config, profile)?;
    let rules = config.rules.build_rule_set()?;

    println!("Profile: {}", config.rules.profile);
    let stdout = std::io::stdout();
    write_rules(&mut stdout.lock(), &rules)
}
