//! hermes - terminal AI helper that translates natural language to shell
//! commands.
//!
//! Thin binary entry point that delegates to the CLI handlers in `cli/`.
//! The process exit code is a wire contract with the shell integration
//! emitted by `hermes init`; see `hermes_core::exit_codes`.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use hermes_config::{ConfigOverrides, HermesConfig};
use hermes_core::{exit_codes, CliError};

mod cli;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    // Load .env (non-fatal if missing)
    hermes_config::api_keys::load_dotenv();

    // clap's default usage-error exit code (2) belongs to configuration
    // errors in our contract, so map parse failures to the invalid-usage
    // code ourselves. Help and version still exit 0.
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let code = if err.use_stderr() {
                exit_codes::INVALID
            } else {
                exit_codes::SUCCESS
            };
            err.print().ok();
            std::process::exit(code);
        }
    };
    init_tracing(args.debug);

    let config = HermesConfig::load(ConfigOverrides {
        gemini_api_key: args.gemini_api_key.clone(),
        model: args.model.clone(),
        debug: args.debug,
        mock_response: args.mock_response.clone(),
        mock_exit_code: args.mock_exit_code,
    });

    let exit_code = match run(args.command, &config).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("hermes: {err:#}");
            err.downcast_ref::<CliError>()
                .map(CliError::exit_code)
                .unwrap_or(exit_codes::ERROR)
        }
    };

    std::process::exit(exit_code);
}

async fn run(command: Option<Commands>, config: &HermesConfig) -> Result<i32> {
    match command {
        Some(Commands::Generate { query }) => {
            cli::generate::handle_generate_command(config, &query.join(" ")).await
        }
        Some(Commands::Explain { command }) => {
            cli::explain::handle_explain_command(config, &command.join(" ")).await
        }
        Some(Commands::Init { shell }) => cli::init::handle_init_command(&shell),
        None => {
            Cli::command().print_help().ok();
            println!();
            Ok(exit_codes::SUCCESS)
        }
    }
}

/// Tracing goes to stderr: stdout is reserved for the generated command so
/// shell integration can capture it verbatim.
fn init_tracing(debug: bool) {
    use tracing_subscriber::EnvFilter;

    let default_filter = if debug {
        "hermes=debug,hermes_core=debug,hermes_config=debug"
    } else {
        "hermes=warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
