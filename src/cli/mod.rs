//! CLI commands and argument handling.
//!
//! This module contains the clap CLI definitions. Command bodies live in
//! `commands/`, one module per concern.

pub mod commands;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

pub use std::process::ExitCode;

use crate::color::{colorize, Color};
use crate::config::{TermfxConfig, CONFIG_FILE};
use crate::loader::LoaderKind;
use crate::output::Output;

/// Result of running one command: the exit code, or an error to report.
pub type CliResult = anyhow::Result<ExitCode>;

/// Exit code used when a demo is interrupted with Ctrl+C.
pub const EXIT_INTERRUPTED: u8 = 130;

/// ANSI colors, progress bars and animated loaders for the terminal.
#[derive(Parser, Debug)]
#[command(name = "termfx")]
#[command(author, version = crate::VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file.
    #[arg(long, global = true, env = "TERMFX_CONFIG", default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level commands for termfx.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a message in color.
    ///
    /// Examples:
    ///   termfx colorize "Hello"            # white, or colorize.default_color
    ///   termfx colorize "Failed" -c red
    Colorize(ColorizeCommand),

    /// Print a message once in every color.
    Palette(PaletteCommand),

    /// Animate a progress bar from 0% to 100%.
    ///
    /// The bar is redrawn in place on one line.
    Progress(ProgressCommand),

    /// Run an animated loader for a while, then stop it.
    ///
    /// Press Ctrl+C to stop early; the cursor is always restored.
    Loader(LoaderCommand),

    /// Manage termfx configuration.
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions.
    ///
    /// Outputs completion script to stdout for bash, zsh, or fish.
    Completions(CompletionsCommand),
}

/// Arguments for the colorize command.
#[derive(Args, Debug)]
pub struct ColorizeCommand {
    /// Text to colorize.
    pub message: String,

    /// Color name (defaults to colorize.default_color).
    #[arg(short = 'c', long, value_enum)]
    pub color: Option<Color>,
}

/// Arguments for the palette command.
#[derive(Args, Debug)]
pub struct PaletteCommand {
    /// Text to print in each color.
    #[arg(default_value = "Hello, terminal")]
    pub message: String,
}

/// Arguments for the progress command.
#[derive(Args, Debug)]
pub struct ProgressCommand {
    /// Bar width in characters (defaults to progress.width).
    #[arg(short = 'w', long)]
    pub width: Option<usize>,

    /// Milliseconds between steps (defaults to progress.step_ms).
    #[arg(long)]
    pub step_ms: Option<u64>,

    /// Fraction added per step.
    #[arg(long, default_value = "0.01")]
    pub step: f64,
}

/// Arguments for the loader command.
#[derive(Args, Debug)]
pub struct LoaderCommand {
    /// Animation kind (defaults to loader.kind).
    #[arg(short = 'k', long, value_enum)]
    pub kind: Option<LoaderKind>,

    /// Text shown after the frame (defaults to loader.message).
    #[arg(short = 'm', long)]
    pub message: Option<String>,

    /// Milliseconds between frames (defaults to loader.interval_ms).
    #[arg(short = 'i', long)]
    pub interval_ms: Option<u64>,

    /// How long to run before stopping (defaults to loader.duration_ms).
    #[arg(short = 'd', long)]
    pub duration_ms: Option<u64>,

    /// Draw the first frame immediately.
    #[arg(long)]
    pub immediate: bool,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show all configuration values.
    Show(ConfigShowCommand),

    /// Get a specific config value.
    ///
    /// Use dot notation (e.g., progress.width).
    Get(ConfigGetCommand),

    /// Set a config value.
    ///
    /// Use dot notation for keys. Values are validated before saving.
    Set(ConfigSetCommand),

    /// Reset config to defaults.
    ///
    /// Resets everything, one section, or one key.
    Reset(ConfigResetCommand),

    /// Show documentation for config keys.
    Explain(ConfigExplainCommand),

    /// List all valid config keys.
    Keys,
}

/// Arguments for 'config show' command.
#[derive(Args, Debug)]
pub struct ConfigShowCommand {
    /// Filter to a specific section (e.g., 'progress').
    #[arg(short = 's', long)]
    pub section: Option<String>,
}

/// Arguments for 'config get' command.
#[derive(Args, Debug)]
pub struct ConfigGetCommand {
    /// Config key in dot notation (e.g., loader.kind).
    pub key: String,
}

/// Arguments for 'config set' command.
#[derive(Args, Debug)]
pub struct ConfigSetCommand {
    /// Config key in dot notation.
    pub key: String,
    /// New value.
    pub value: String,
}

/// Arguments for 'config reset' command.
#[derive(Args, Debug)]
pub struct ConfigResetCommand {
    /// Section or key to reset. Resets everything if omitted.
    pub key: Option<String>,
}

/// Arguments for 'config explain' command.
#[derive(Args, Debug)]
pub struct ConfigExplainCommand {
    /// Key or section to explain. Lists every key if omitted.
    pub key: Option<String>,
}

/// Arguments for the completions command.
#[derive(Args, Debug)]
pub struct CompletionsCommand {
    /// Shell to generate completions for.
    #[arg(value_parser = ["bash", "zsh", "fish"])]
    pub shell: String,
}

// ============================================================================
// Command implementations
// ============================================================================

fn load_config(path: &Path) -> anyhow::Result<TermfxConfig> {
    use anyhow::Context;

    TermfxConfig::load(Some(path))
        .with_context(|| format!("could not load config from {}", path.display()))
}

impl ColorizeCommand {
    /// Execute the colorize command.
    pub fn execute(&self, config_path: &Path) -> CliResult {
        let config = load_config(config_path)?;
        let color = self.color.unwrap_or(config.colorize.default_color);
        commands::colorize::print_colorized(&mut std::io::stdout(), &self.message, color)?;
        Ok(ExitCode::SUCCESS)
    }
}

impl PaletteCommand {
    /// Execute the palette command.
    pub fn execute(&self) -> CliResult {
        commands::colorize::print_palette(&mut std::io::stdout(), &self.message)?;
        Ok(ExitCode::SUCCESS)
    }
}

impl ProgressCommand {
    /// Execute the progress command.
    pub async fn execute(&self, config_path: &Path) -> CliResult {
        let config = load_config(config_path)?;
        let settings = commands::progress_cmd::ProgressDemo {
            width: self.width.unwrap_or(config.progress.width),
            style: config.progress.style(),
            step: self.step,
            step_ms: self.step_ms.unwrap_or(config.progress.step_ms),
        };

        let mut stdout = std::io::stdout();
        let finished = tokio::select! {
            result = commands::progress_cmd::run_progress(&mut stdout, &settings) => {
                result?;
                true
            }
            _ = tokio::signal::ctrl_c() => false,
        };

        if finished {
            Ok(ExitCode::SUCCESS)
        } else {
            crate::progress::finish_progress(&mut std::io::stdout())?;
            Ok(ExitCode::from(EXIT_INTERRUPTED))
        }
    }
}

impl LoaderCommand {
    /// Execute the loader command.
    pub async fn execute(&self, config_path: &Path) -> CliResult {
        let config = load_config(config_path)?;
        let mut options = config.loader.options();
        if let Some(ms) = self.interval_ms {
            options.interval = std::time::Duration::from_millis(ms);
        }
        options.immediate_first_frame |= self.immediate;

        let demo = commands::loader::LoaderDemo {
            kind: self.kind.unwrap_or(config.loader.kind),
            message: self
                .message
                .clone()
                .unwrap_or_else(|| config.loader.message.clone()),
            options,
            duration: std::time::Duration::from_millis(
                self.duration_ms.unwrap_or(config.loader.duration_ms),
            ),
        };

        let outcome =
            commands::loader::run_loader(&Output::stdout(), &demo, tokio::signal::ctrl_c())
                .await?;
        Ok(match outcome {
            commands::loader::LoaderOutcome::Completed => ExitCode::SUCCESS,
            commands::loader::LoaderOutcome::Interrupted => ExitCode::from(EXIT_INTERRUPTED),
        })
    }
}

impl ConfigCommands {
    /// Execute a config subcommand.
    pub fn execute(&self, config_path: &Path) -> CliResult {
        use commands::config;

        let mut stdout = std::io::stdout();
        match self {
            ConfigCommands::Show(c) => {
                config::config_show(&mut stdout, config_path, c.section.as_deref())?
            }
            ConfigCommands::Get(c) => config::config_get(&mut stdout, config_path, &c.key)?,
            ConfigCommands::Set(c) => {
                config::config_set(&mut stdout, config_path, &c.key, &c.value)?
            }
            ConfigCommands::Reset(c) => {
                config::config_reset(&mut stdout, config_path, c.key.as_deref())?
            }
            ConfigCommands::Explain(c) => config::config_explain(&mut stdout, c.key.as_deref())?,
            ConfigCommands::Keys => config::config_keys(&mut stdout)?,
        }
        Ok(ExitCode::SUCCESS)
    }
}

impl CompletionsCommand {
    /// Execute the completions command - generates shell completions.
    pub fn execute(&self) -> CliResult {
        commands::completions::completions(&self.shell)?;
        Ok(ExitCode::SUCCESS)
    }
}

/// Turn a command result into the process exit code, reporting errors.
pub fn handle_result(result: CliResult) -> ExitCode {
    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", colorize("Error:", Color::Red));
            ExitCode::FAILURE
        }
    }
}
