//! CLI definition and shared handler helpers.

use std::env;
use std::ffi::OsStr;
use std::path::Path;

use clap::{Parser, Subcommand};
use hermes_config::constants::env_vars;

pub mod explain;
pub mod generate;
pub mod init;

#[derive(Debug, Parser)]
#[command(name = "hermes")]
#[command(about = "Hermes is a smart CLI assistant that translates natural language to shell commands")]
#[command(version)]
#[command(after_help = "Quick start:\n  \
    hermes gen list all files        # generate a command\n  \
    hermes exp -- ls -la             # explain a command\n  \
    hermes init zsh >> ~/.zshrc      # install shell integration\n\n\
    Set your Gemini API key via the GEMINI_API_KEY environment variable,\n\
    the --gemini-api-key flag, or ~/.config/hermes/config.toml.")]
pub struct Cli {
    /// Gemini API key for command generation and explanation
    #[arg(long, global = true, value_name = "KEY")]
    pub gemini_api_key: Option<String>,

    /// Model to use (defaults to gemini-2.5-flash)
    #[arg(long, global = true, value_name = "MODEL")]
    pub model: Option<String>,

    /// Verbose diagnostics on stderr
    #[arg(long, global = true)]
    pub debug: bool,

    /// Return this command instead of calling the provider (testing)
    #[arg(long, global = true, value_name = "COMMAND")]
    pub mock_response: Option<String>,

    /// Force the safety verdict from an exit code (testing)
    #[arg(long, global = true, value_name = "CODE")]
    pub mock_exit_code: Option<i32>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate shell commands from natural language
    #[command(visible_alias = "gen")]
    Generate {
        /// Natural language query, e.g. `hermes gen list all files`
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        query: Vec<String>,
    },

    /// Explain what a shell command does
    #[command(visible_alias = "exp")]
    Explain {
        /// Command to explain; use `--` before commands with flags
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// Generate a shell integration script (zsh, bash, fish)
    Init {
        /// Target shell
        shell: String,
    },
}

/// Print a one-time stderr hint when the generated command is not being
/// consumed by the shell integration. The integration sets
/// `HERMES_SHELL_INTEGRATION=1` when invoking the binary.
pub(crate) fn maybe_print_integration_tip() {
    if env::var(env_vars::SHELL_INTEGRATION).as_deref() == Ok("1") {
        return;
    }
    if env::var(env_vars::SUPPRESS_INTEGRATION_TIP).as_deref() == Ok("1") {
        return;
    }
    let Ok(shell_path) = env::var("SHELL") else {
        // No shell detected, probably running in a script
        return;
    };

    let shell_name = Path::new(&shell_path).file_name().and_then(OsStr::to_str);
    if shell_name == Some("zsh") {
        eprintln!();
        eprintln!("   TIP: Enable shell integration for the best experience!");
        eprintln!("   Run: hermes init zsh >> ~/.zshrc && source ~/.zshrc");
        eprintln!("   This allows hermes to put commands directly in your shell buffer.");
        eprintln!("   To suppress this tip: export HERMES_SUPPRESS_INTEGRATION_TIP=1");
        eprintln!();
    }
}
