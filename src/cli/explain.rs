//! The explain command: render what a shell command does.

use anyhow::Result;
use hermes_config::HermesConfig;
use hermes_core::exit_codes;
use hermes_core::llm::{make_client, ExplainRequest};
use hermes_core::CliError;

pub async fn handle_explain_command(config: &HermesConfig, command: &str) -> Result<i32> {
    println!("Explaining command: '{command}'");

    let client = make_client(config)?;
    let response = client
        .explain_command(ExplainRequest {
            command: command.to_string(),
        })
        .await
        .map_err(CliError::Api)?;

    println!("Command explanation:\n{}", response.explanation);

    Ok(exit_codes::SUCCESS)
}
