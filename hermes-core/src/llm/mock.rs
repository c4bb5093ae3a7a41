//! Deterministic provider for tests and offline use.
//!
//! Selected by `--mock-response`; no network calls, stable output for a
//! given input.

use std::collections::HashMap;

use async_trait::async_trait;

use super::provider::{
    ExplainRequest, ExplainResponse, GenerateRequest, GenerateResponse, LlmClient, LlmError,
};
use crate::safety::SafetyLevel;

/// Signatures the mock uses to mimic the provider's conservative safety
/// opinion on its own canned output.
const DANGEROUS_SIGNATURES: &[&str] = &[
    "rm -rf",
    "sudo",
    "dd ",
    "mkfs",
    "fdisk",
    "systemctl start",
    "systemctl stop",
    "apt install",
    "yum install",
    "pacman -S",
];

pub struct MockClient {
    static_command: Option<String>,
    responses: HashMap<&'static str, &'static str>,
    explanations: HashMap<&'static str, &'static str>,
}

impl MockClient {
    /// `static_command`, when set, is returned for every generation request
    /// and as the explanation body, overriding the canned maps.
    pub fn new(static_command: Option<String>) -> Self {
        let responses = HashMap::from([
            ("list files", "ls -la"),
            ("list all files", "ls -la"),
            ("delete everything", "rm -rf /"),
            ("install vim", "sudo apt install vim"),
            ("check disk usage", "df -h"),
            ("show processes", "ps aux"),
            ("find python files", "find . -name '*.py'"),
        ]);
        let explanations = HashMap::from([
            (
                "ls -la",
                "List all files and directories in long format, including hidden files",
            ),
            (
                "rm -rf /",
                "DANGEROUS: Recursively remove all files starting from root directory",
            ),
            (
                "sudo apt install vim",
                "Install vim text editor using apt package manager with sudo privileges",
            ),
            ("df -h", "Display filesystem disk usage in human-readable format"),
            ("ps aux", "Show all running processes with detailed information"),
            (
                "find . -name '*.py'",
                "Find all Python files in current directory and subdirectories",
            ),
        ]);
        Self {
            static_command: static_command.filter(|command| !command.is_empty()),
            responses,
            explanations,
        }
    }

    fn opinion_for(command: &str) -> SafetyLevel {
        if DANGEROUS_SIGNATURES
            .iter()
            .any(|signature| command.contains(signature))
        {
            SafetyLevel::Attention
        } else {
            SafetyLevel::Safe
        }
    }
}

#[async_trait]
impl LlmClient for MockClient {
    async fn generate_command(
        &self,
        request: GenerateRequest,
    ) -> Result<GenerateResponse, LlmError> {
        if let Some(command) = &self.static_command {
            return Ok(GenerateResponse {
                command: command.clone(),
                safety: Self::opinion_for(command),
                reasoning: format!("mock static response for: {}", request.query),
            });
        }

        if let Some(command) = self.responses.get(request.query.as_str()) {
            return Ok(GenerateResponse {
                command: (*command).to_string(),
                safety: Self::opinion_for(command),
                reasoning: format!("mock reasoning for: {}", request.query),
            });
        }

        Ok(GenerateResponse {
            command: format!("echo 'mock command for: {}'", request.query),
            safety: SafetyLevel::Safe,
            reasoning: "mock default response".to_string(),
        })
    }

    async fn explain_command(
        &self,
        request: ExplainRequest,
    ) -> Result<ExplainResponse, LlmError> {
        if let Some(response) = &self.static_command {
            return Ok(ExplainResponse {
                explanation: response.clone(),
            });
        }

        if let Some(explanation) = self.explanations.get(request.command.as_str()) {
            return Ok(ExplainResponse {
                explanation: (*explanation).to_string(),
            });
        }

        Ok(ExplainResponse {
            explanation: format!("mock explanation for command: {}", request.command),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn static_command_overrides_canned_responses() {
        let client = MockClient::new(Some("rm -rf /tmp/cache".to_string()));
        let response = client
            .generate_command(GenerateRequest {
                query: "list files".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(response.command, "rm -rf /tmp/cache");
        assert_eq!(response.safety, SafetyLevel::Attention);
    }

    #[tokio::test]
    async fn canned_queries_carry_a_conservative_opinion() {
        let client = MockClient::new(None);

        let safe = client
            .generate_command(GenerateRequest {
                query: "list files".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(safe.command, "ls -la");
        assert_eq!(safe.safety, SafetyLevel::Safe);

        let flagged = client
            .generate_command(GenerateRequest {
                query: "install vim".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(flagged.command, "sudo apt install vim");
        assert_eq!(flagged.safety, SafetyLevel::Attention);
    }

    #[tokio::test]
    async fn unknown_queries_fall_back_to_an_echo() {
        let client = MockClient::new(None);
        let response = client
            .generate_command(GenerateRequest {
                query: "do something novel".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(response.command, "echo 'mock command for: do something novel'");
        assert_eq!(response.safety, SafetyLevel::Safe);
    }

    #[tokio::test]
    async fn explanations_are_deterministic() {
        let client = MockClient::new(None);
        let request = ExplainRequest {
            command: "ls -la".to_string(),
        };
        let first = client.explain_command(request.clone()).await.unwrap();
        let second = client.explain_command(request).await.unwrap();
        assert_eq!(first.explanation, second.explanation);
        assert!(first.explanation.contains("hidden files"));
    }
}
