//! Config command - list the options available to templates

use crate::cli::SourceArgs;
use crate::output;
use anyhow::Result;
use colored::Colorize;
use docjinja_core::config::{json_type_name, resolve_config_path, CONTEXT_KEY};
use docjinja_core::ConfigOptions;

pub fn run(source: SourceArgs, json: bool, verbose: bool) -> Result<()> {
    let config_path = resolve_config_path(&source.srcdir, source.config.as_deref());
    let config = ConfigOptions::from_file(&config_path)?;

    if json {
        output::print_json(&serde_json::to_string_pretty(&config)?)?;
        return Ok(());
    }

    if verbose {
        output::print_text(&format!(
            "{} {}",
            "Configuration:".bold(),
            config_path.display()
        ))?;
    }

    if config.is_empty() {
        output::print_text(&format!("{} No options defined", "!".yellow()))?;
        return Ok(());
    }

    for (key, value) in config.as_map() {
        output::print_text(&format!(
            "{}.{} ({})",
            CONTEXT_KEY,
            key,
            json_type_name(value)
        ))?;
    }

    Ok(())
}
