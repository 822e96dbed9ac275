//! Completions command implementation.
//!
//! This module implements the `termfx completions` command for generating shell completions.

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;

/// Result type for completions command operations.
pub type CompletionsCommandResult = Result<(), CompletionsCommandError>;

/// Error type for completions command operations.
#[derive(Debug, thiserror::Error)]
pub enum CompletionsCommandError {
    /// The specified shell is not supported for completions.
    #[error("Unsupported shell: {0}")]
    UnsupportedShell(String),
}

fn parse_shell(shell: &str) -> Result<Shell, CompletionsCommandError> {
    match shell {
        "bash" => Ok(Shell::Bash),
        "zsh" => Ok(Shell::Zsh),
        "fish" => Ok(Shell::Fish),
        _ => Err(CompletionsCommandError::UnsupportedShell(shell.to_string())),
    }
}

/// Write the completion script for `shell` to `out`.
pub fn write_completions(out: &mut impl Write, shell: &str) -> CompletionsCommandResult {
    let shell = parse_shell(shell)?;
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "termfx", out);
    Ok(())
}

/// Execute the completions command.
pub fn completions(shell: &str) -> CompletionsCommandResult {
    write_completions(&mut io::stdout(), shell)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completions_command_error_display() {
        let err = CompletionsCommandError::UnsupportedShell("powershell".to_string());
        assert!(err.to_string().contains("Unsupported shell"));
        assert!(err.to_string().contains("powershell"));
    }

    #[test]
    fn test_write_completions_bash_mentions_subcommands() {
        let mut buf = Vec::new();
        write_completions(&mut buf, "bash").unwrap();
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("termfx"));
        assert!(script.contains("loader"));
    }

    #[test]
    fn test_write_completions_rejects_unknown_shell() {
        let mut buf = Vec::new();
        assert!(matches!(
            write_completions(&mut buf, "tcsh"),
            Err(CompletionsCommandError::UnsupportedShell(_))
        ));
        assert!(buf.is_empty());
    }
}
