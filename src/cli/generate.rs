//! The generate command: natural language in, shell command out, safety
//! exit code alongside.

use anyhow::Result;
use hermes_config::HermesConfig;
use hermes_core::llm::{make_client, GenerateRequest};
use hermes_core::{CliError, SafetyAnalyzer};

/// Generate a command for `query`, classify it, print it to stdout, and
/// return the safety exit code for the caller to pass to the shell.
pub async fn handle_generate_command(config: &HermesConfig, query: &str) -> Result<i32> {
    // Immediate feedback on stderr; stdout stays clean for the command.
    eprintln!("\u{2514}\u{2500} Generating command for: '{query}'");

    let client = make_client(config)?;
    let response = client
        .generate_command(GenerateRequest {
            query: query.to_string(),
        })
        .await
        .map_err(CliError::Api)?;

    tracing::debug!(
        command = %response.command,
        provider_opinion = %response.safety,
        reasoning = %response.reasoning,
        "provider response"
    );

    let analyzer = SafetyAnalyzer::new();
    let assessment = match config.mock_exit_code {
        // Deterministic seam for shell-integration tests: bypasses both the
        // rule tables and the merge.
        Some(forced) => analyzer.analyze_with_forced_exit(&response.command, forced),
        None => analyzer
            .analyze(&response.command)
            .merge_with_model(response.safety),
    };

    tracing::debug!(
        level = %assessment.level,
        reason = %assessment.reason,
        source = %assessment.source,
        "safety assessment"
    );

    // Output only the command, for the shell buffer.
    println!("{}", response.command);

    super::maybe_print_integration_tip();

    Ok(assessment.exit_code())
}

#[cfg(test)]
mod tests {
    use hermes_core::exit_codes;

    use super::*;

    fn mock_config(response: &str) -> HermesConfig {
        HermesConfig {
            mock_response: Some(response.to_string()),
            ..HermesConfig::default()
        }
    }

    #[tokio::test]
    async fn safe_generation_exits_zero() {
        let code = handle_generate_command(&mock_config("ls -la"), "list files")
            .await
            .unwrap();
        assert_eq!(code, exit_codes::SUCCESS);
    }

    #[tokio::test]
    async fn flagged_generation_exits_with_the_attention_sentinel() {
        let code = handle_generate_command(&mock_config("rm -rf /"), "delete everything")
            .await
            .unwrap();
        assert_eq!(code, exit_codes::ATTENTION);
    }

    #[tokio::test]
    async fn forced_exit_code_wins_over_the_rule_tables() {
        let mut config = mock_config("rm -rf /");
        config.mock_exit_code = Some(exit_codes::SUCCESS);
        let code = handle_generate_command(&config, "delete everything")
            .await
            .unwrap();
        assert_eq!(code, exit_codes::SUCCESS);
    }

    #[tokio::test]
    async fn missing_api_key_surfaces_a_config_error() {
        let err = handle_generate_command(&HermesConfig::default(), "list files")
            .await
            .unwrap_err();
        let cli_err = err.downcast_ref::<CliError>().expect("CliError");
        assert_eq!(cli_err.exit_code(), exit_codes::CONFIG);
    }
}
