//! Client factory: picks the provider implementation from configuration.

use hermes_config::constants::models;
use hermes_config::HermesConfig;

use super::gemini::GeminiProvider;
use super::mock::MockClient;
use super::provider::LlmClient;
use crate::error::CliError;

pub type AnyClient = Box<dyn LlmClient>;

/// Build the configured client. The mock provider wins whenever
/// `mock_response` is set; otherwise a Gemini API key is required.
pub fn make_client(config: &HermesConfig) -> Result<AnyClient, CliError> {
    if let Some(response) = &config.mock_response {
        return Ok(Box::new(MockClient::new(Some(response.clone()))));
    }

    let api_key = config
        .gemini_api_key
        .as_deref()
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .ok_or_else(|| {
            CliError::Config(
                "Gemini API key is required. Set it via (in priority order):\n\
                 \x20 - CLI flag: --gemini-api-key\n\
                 \x20 - Environment variable: GEMINI_API_KEY\n\
                 \x20 - Config file: ~/.config/hermes/config.toml"
                    .to_string(),
            )
        })?;

    let model = config
        .model
        .clone()
        .unwrap_or_else(|| models::DEFAULT_MODEL.to_string());

    Ok(Box::new(GeminiProvider::new(api_key.to_string(), model)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_api_key_is_a_config_error() {
        let config = HermesConfig::default();
        let err = make_client(&config).err().expect("expected config error");
        assert_eq!(err.exit_code(), crate::exit_codes::CONFIG);
    }

    #[test]
    fn mock_response_bypasses_the_api_key_requirement() {
        let config = HermesConfig {
            mock_response: Some("ls -la".to_string()),
            ..HermesConfig::default()
        };
        assert!(make_client(&config).is_ok());
    }

    #[test]
    fn api_key_selects_the_gemini_provider() {
        let config = HermesConfig {
            gemini_api_key: Some("test-key".to_string()),
            ..HermesConfig::default()
        };
        assert!(make_client(&config).is_ok());
    }
}
