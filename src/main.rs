//! termfx - ANSI colors, in-place progress bars and animated loaders.
//!
//! This is the main entry point for the termfx CLI tool.

use clap::Parser;
use termfx::cli::{handle_result, Cli, CliResult, Commands, ExitCode};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so they never mix with rendered output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.as_path();

    let result: CliResult = match &cli.command {
        None => {
            println!("termfx - ANSI colors, progress bars and loaders for the terminal.");
            println!();
            println!("Run 'termfx --help' for available commands.");
            println!();
            println!("Quick start:");
            println!("  termfx colorize \"Hi\" -c green   # Print in color");
            println!("  termfx palette                  # Show all eight colors");
            println!("  termfx progress                 # Animate a progress bar");
            println!("  termfx loader -k spin           # Run a spinner for 5 seconds");
            Ok(ExitCode::SUCCESS)
        }
        Some(cmd) => match cmd {
            Commands::Colorize(c) => c.execute(config_path),
            Commands::Palette(c) => c.execute(),
            Commands::Progress(c) => c.execute(config_path).await,
            Commands::Loader(c) => c.execute(config_path).await,
            Commands::Config(c) => c.execute(config_path),
            Commands::Completions(c) => c.execute(),
        },
    };

    handle_result(result)
}
