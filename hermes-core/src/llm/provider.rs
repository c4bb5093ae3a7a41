//! Provider abstraction for command generation and explanation.
//!
//! The provider is the second, optional safety judge: alongside the
//! generated command it returns its own [`SafetyLevel`] opinion, which the
//! caller fuses with the pattern classifier's verdict.

use async_trait::async_trait;
use thiserror::Error;

use crate::safety::SafetyLevel;

/// Request for command generation from natural language.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub query: String,
}

/// Response from command generation.
#[derive(Debug, Clone)]
pub struct GenerateResponse {
    /// Generated shell command
    pub command: String,
    /// The provider's own assessment of the command's safety
    pub safety: SafetyLevel,
    /// Short justification of the command and the safety call
    pub reasoning: String,
}

/// Request for explaining an existing shell command.
#[derive(Debug, Clone)]
pub struct ExplainRequest {
    pub command: String,
}

/// Response from command explanation, already rendered for the terminal.
#[derive(Debug, Clone)]
pub struct ExplainResponse {
    pub explanation: String,
}

/// Provider call failures. These surface as ordinary tool errors (exit code
/// class 1-9), never as a safety verdict.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("{provider} network error: {source}")]
    Network {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} API error (HTTP {status}): {message}")]
    Api {
        provider: &'static str,
        status: u16,
        message: String,
    },

    #[error("{provider} returned an unparseable response: {message}")]
    Parse {
        provider: &'static str,
        message: String,
    },

    #[error("{provider} returned no content")]
    EmptyResponse { provider: &'static str },
}

/// Contract for AI providers.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Generate a shell command from natural language.
    async fn generate_command(
        &self,
        request: GenerateRequest,
    ) -> Result<GenerateResponse, LlmError>;

    /// Explain what a shell command does.
    async fn explain_command(&self, request: ExplainRequest)
        -> Result<ExplainResponse, LlmError>;
}
