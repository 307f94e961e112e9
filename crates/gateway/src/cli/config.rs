//! `shiplog config` subcommands.

use shiplog_domain::config::{Config, ConfigSeverity};

/// Print every validation issue; returns false if any is an error.
pub fn validate(config: &Config, config_path: &str) -> bool {
    let issues = config.validate();

    if issues.is_empty() {
        println!("{config_path}: OK");
        return true;
    }

    let mut valid = true;
    for issue in &issues {
        match issue.severity {
            ConfigSeverity::Warning => println!("warning: {issue}"),
            ConfigSeverity::Error => {
                println!("error: {issue}");
                valid = false;
            }
        }
    }
    valid
}

/// Dump the resolved configuration (defaults applied) as TOML.
pub fn show(config: &Config) {
    match toml::to_string_pretty(config) {
        Ok(rendered) => println!("{rendered}"),
        Err(e) => eprintln!("failed to render config: {e}"),
    }
}
