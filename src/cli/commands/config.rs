//! Config command implementations.
//!
//! This module implements the `termfx config` subcommands for managing
//! configuration without editing JSON directly.

use std::io::{self, Write};
use std::path::Path;

use crate::ansi::{BOLD, CYAN, FAINT, RESET};
use crate::color::{colorize, Color};
use crate::config::{
    metadata::{self, KeyMetadata},
    FieldError, TermfxConfig,
};

/// Result type for config command operations.
pub type ConfigCommandResult = Result<(), ConfigCommandError>;

/// Error type for config command operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigCommandError {
    /// A key was unknown or a value failed validation.
    #[error("{0}")]
    FieldError(#[from] FieldError),

    /// The config file could not be read or written.
    #[error("Config error: {0}")]
    ConfigError(#[from] crate::config::ConfigError),

    /// The requested section does not exist.
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// Writing the report failed.
    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}

fn ok_mark() -> String {
    colorize("✓", Color::Green)
}

/// Show all config values in a human-readable format.
pub fn config_show(
    out: &mut impl Write,
    path: &Path,
    section_filter: Option<&str>,
) -> ConfigCommandResult {
    let config = TermfxConfig::load(Some(path))?;

    let sections: Vec<&str> = match section_filter {
        Some(filter) if TermfxConfig::fields_for_section(filter).is_some() => vec![filter],
        Some(filter) => return Err(ConfigCommandError::UnknownSection(filter.into())),
        None => TermfxConfig::section_names().to_vec(),
    };

    writeln!(out, "{BOLD}=== termfx config ==={RESET}")?;
    writeln!(out)?;

    for section in sections {
        writeln!(out, "{CYAN}{section}{RESET}")?;
        if let Some(fields) = TermfxConfig::fields_for_section(section) {
            for field in fields {
                let key = format!("{section}.{field}");
                let value = config.get_by_path(&key).unwrap_or_else(|_| "?".into());
                writeln!(out, "  {:<24} {}", field, value)?;
            }
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Get a specific config value.
pub fn config_get(out: &mut impl Write, path: &Path, key: &str) -> ConfigCommandResult {
    let config = TermfxConfig::load(Some(path))?;
    let value = config.get_by_path(key)?;
    writeln!(out, "{value}")?;
    Ok(())
}

/// Set a config value and save.
pub fn config_set(out: &mut impl Write, path: &Path, key: &str, value: &str) -> ConfigCommandResult {
    let mut config = TermfxConfig::load(Some(path))?;
    let old_value = config.get_by_path(key).ok();

    config.set_by_path(key, value)?;
    config.save(Some(path))?;

    let new_value = config.get_by_path(key)?;
    match old_value {
        Some(old) if old != new_value => {
            writeln!(out, "{} {key}: {old} → {new_value}", ok_mark())?
        }
        Some(_) => writeln!(out, "{} {key} unchanged: {new_value}", colorize("⚠", Color::Yellow))?,
        None => writeln!(out, "{} {key} = {new_value}", ok_mark())?,
    }

    Ok(())
}

/// Reset everything, a section, or a single key to defaults, and save.
pub fn config_reset(out: &mut impl Write, path: &Path, key: Option<&str>) -> ConfigCommandResult {
    let mut config = TermfxConfig::load(Some(path))?;

    match key {
        Some(k) if TermfxConfig::fields_for_section(k).is_some() => {
            config.reset_section(k)?;
            writeln!(out, "{} Reset section '{k}' to defaults", ok_mark())?;
        }
        Some(k) if k.contains('.') => {
            config.reset_field(k)?;
            let new_value = config.get_by_path(k)?;
            writeln!(out, "{} Reset {k} to default: {new_value}", ok_mark())?;
        }
        Some(k) => return Err(ConfigCommandError::UnknownSection(k.into())),
        None => {
            config = TermfxConfig::default();
            writeln!(out, "{} Reset all config to defaults", ok_mark())?;
        }
    }

    config.save(Some(path))?;
    Ok(())
}

/// Show documentation for one key, one section, or every key.
pub fn config_explain(out: &mut impl Write, key: Option<&str>) -> ConfigCommandResult {
    match key {
        Some(k) => explain_key(out, k),
        None => explain_all(out),
    }
}

fn explain_key(out: &mut impl Write, key: &str) -> ConfigCommandResult {
    if let Some(meta) = metadata::get_metadata(key) {
        return print_key_help(out, meta);
    }

    if TermfxConfig::fields_for_section(key).is_some() {
        writeln!(out, "{BOLD}{key}{RESET} section")?;
        writeln!(out)?;
        for meta in metadata::keys_for_section(key) {
            let field = meta
                .key
                .strip_prefix(&format!("{key}."))
                .unwrap_or(meta.key);
            writeln!(out, "  {CYAN}{field}{RESET}")?;
            writeln!(out, "    {}", meta.description)?;
            writeln!(out)?;
        }
        return Ok(());
    }

    let matches = metadata::search_keys(key);
    if matches.is_empty() {
        return Err(ConfigCommandError::FieldError(FieldError::UnknownKey(
            key.into(),
        )));
    }

    writeln!(out, "{}", colorize("Did you mean:", Color::Yellow))?;
    for meta in matches.iter().take(5) {
        writeln!(out, "  {}", meta.key)?;
    }
    Ok(())
}

fn explain_all(out: &mut impl Write) -> ConfigCommandResult {
    writeln!(out, "{BOLD}=== termfx config keys ==={RESET}")?;
    writeln!(out)?;
    writeln!(
        out,
        "Use {CYAN}termfx config explain <key>{RESET} for details."
    )?;
    writeln!(out)?;

    for &section in TermfxConfig::section_names() {
        writeln!(out, "{BOLD}{section}{RESET}")?;
        for meta in metadata::keys_for_section(section) {
            // First sentence only.
            let desc = meta
                .description
                .split(". ")
                .next()
                .unwrap_or(meta.description)
                .trim_end_matches('.');
            let field = meta.key.split_once('.').map_or(meta.key, |(_, f)| f);
            writeln!(out, "  {CYAN}{field}{RESET}")?;
            writeln!(out, "    {desc}")?;
        }
        writeln!(out)?;
    }

    Ok(())
}

fn print_key_help(out: &mut impl Write, meta: &KeyMetadata) -> ConfigCommandResult {
    writeln!(out, "{BOLD}{}{RESET}", meta.key)?;
    writeln!(out)?;
    writeln!(out, "  {}", meta.description)?;
    writeln!(out)?;
    writeln!(out, "  {FAINT}Type:{RESET}     {}", meta.value_type)?;
    writeln!(out, "  {FAINT}Default:{RESET}  {}", meta.default)?;
    writeln!(out)?;
    writeln!(out, "  {FAINT}Examples:{RESET}")?;
    for example in meta.examples {
        writeln!(out, "    termfx config set {} {}", meta.key, example)?;
    }
    Ok(())
}

/// List all valid config keys.
pub fn config_keys(out: &mut impl Write) -> ConfigCommandResult {
    for key in TermfxConfig::all_keys() {
        writeln!(out, "{key}")?;
    }
    Ok(())
}
