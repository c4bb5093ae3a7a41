//! Gemini provider over the REST `generateContent` endpoint.
//!
//! Both operations prompt for a bare-JSON reply and parse it into typed
//! payloads. Models still occasionally wrap JSON in markdown code fences, so
//! responses are stripped before parsing.

use serde::{Deserialize, Serialize};

use async_trait::async_trait;
use hermes_config::constants::{env_vars, urls};

use super::provider::{
    ExplainRequest, ExplainResponse, GenerateRequest, GenerateResponse, LlmClient, LlmError,
};
use crate::safety::SafetyLevel;

const PROVIDER: &str = "gemini";

pub struct GeminiProvider {
    api_key: String,
    http_client: reqwest::Client,
    base_url: String,
    model: String,
}

impl GeminiProvider {
    pub fn new(api_key: String, model: String) -> Self {
        let base_url = std::env::var(env_vars::GEMINI_BASE_URL)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| urls::GEMINI_API_BASE.to_string());
        Self::with_base_url(api_key, model, base_url)
    }

    pub fn with_base_url(api_key: String, model: String, base_url: String) -> Self {
        Self {
            api_key,
            http_client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        }
    }

    /// Run one `generateContent` round-trip and return the first candidate's
    /// text.
    async fn request_text(&self, prompt: String) -> Result<String, LlmError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|source| LlmError::Network {
                provider: PROVIDER,
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                provider: PROVIDER,
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateContentResponse =
            response.json().await.map_err(|err| LlmError::Parse {
                provider: PROVIDER,
                message: err.to_string(),
            })?;

        body.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .filter(|text| !text.is_empty())
            .ok_or(LlmError::EmptyResponse { provider: PROVIDER })
    }
}

#[async_trait]
impl LlmClient for GeminiProvider {
    async fn generate_command(
        &self,
        request: GenerateRequest,
    ) -> Result<GenerateResponse, LlmError> {
        let text = self.request_text(build_generate_prompt(&request.query)).await?;
        parse_generate_payload(&text)
    }

    async fn explain_command(
        &self,
        request: ExplainRequest,
    ) -> Result<ExplainResponse, LlmError> {
        let text = self.request_text(build_explain_prompt(&request.command)).await?;
        parse_explain_payload(&text)
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

/// Structured payload the generation prompt asks for.
#[derive(Debug, Deserialize)]
struct GeneratePayload {
    command: String,
    #[serde(default)]
    safety: String,
    #[serde(default)]
    explanation: String,
}

#[derive(Debug, Deserialize)]
struct ExplainPayload {
    #[serde(default)]
    explanation: Vec<ExplanationSection>,
}

/// One section of a structured explanation.
#[derive(Debug, Deserialize)]
struct ExplanationSection {
    text: String,
    #[serde(default)]
    details: Vec<String>,
}

// ---------------------------------------------------------------------------
// Prompts
// ---------------------------------------------------------------------------

fn build_generate_prompt(query: &str) -> String {
    format!(
        r#"You are an expert system administrator that translates natural language queries into shell commands.

CRITICAL: Your response MUST be ONLY a valid JSON object. Do NOT wrap it in markdown code blocks. Do NOT add any text before or after the JSON.

Your response MUST be a valid JSON object with exactly this schema:
{{
  "command": "<the generated shell command>",
  "safety": "<SAFE | ATTENTION>",
  "explanation": "<brief explanation of the command and safety reasoning>"
}}

Safety Guidelines:
- SAFE: Read-only operations, basic file listing, navigation, help commands
- ATTENTION: File modifications, system changes, network operations, anything requiring sudo

Important Rules:
1. Generate the EXACT command needed, no explanations outside the JSON
2. Commands should be compatible with bash/zsh
3. Use standard Unix utilities when possible
4. Be conservative with safety assessment - prefer ATTENTION when uncertain
5. RESPOND WITH ONLY JSON - NO MARKDOWN, NO BACKTICKS, NO EXTRA TEXT

User Query: {query}"#
    )
}

fn build_explain_prompt(command: &str) -> String {
    format!(
        r#"You are an expert system administrator. Explain this shell command in a structured, educational format.

CRITICAL: Your response MUST be ONLY a valid JSON object. Do NOT wrap it in markdown code blocks. Do NOT add any text before or after the JSON.

Your response MUST be a valid JSON object with exactly this schema:
{{
  "explanation": [
    {{
      "text": "main command or section description",
      "details": ["flag explanations", "option explanations"]
    }}
  ]
}}

Structure Guidelines:
- Each main command/section gets its own object in the explanation array
- Put the main description in "text" field
- Put flag/option explanations in "details" array
- For piped commands, separate each part into different objects
- Use clear, educational language
- RESPOND WITH ONLY JSON - NO MARKDOWN, NO BACKTICKS, NO EXTRA TEXT

Command to explain: {command}"#
    )
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

fn parse_generate_payload(text: &str) -> Result<GenerateResponse, LlmError> {
    let cleaned = strip_code_fences(text);
    let payload: GeneratePayload =
        serde_json::from_str(cleaned).map_err(|err| LlmError::Parse {
            provider: PROVIDER,
            message: err.to_string(),
        })?;

    Ok(GenerateResponse {
        command: payload.command,
        safety: parse_safety_label(&payload.safety),
        reasoning: payload.explanation,
    })
}

fn parse_explain_payload(text: &str) -> Result<ExplainResponse, LlmError> {
    let cleaned = strip_code_fences(text);
    let payload: ExplainPayload =
        serde_json::from_str(cleaned).map_err(|err| LlmError::Parse {
            provider: PROVIDER,
            message: err.to_string(),
        })?;

    Ok(ExplainResponse {
        explanation: format_explanation(&payload.explanation),
    })
}

/// Unknown labels resolve to attention: a model that cannot follow the
/// response schema does not get the benefit of the doubt.
fn parse_safety_label(label: &str) -> SafetyLevel {
    match label {
        "SAFE" => SafetyLevel::Safe,
        _ => SafetyLevel::Attention,
    }
}

/// Render structured explanation sections as nested bullet points.
fn format_explanation(sections: &[ExplanationSection]) -> String {
    let mut rendered = String::new();
    for section in sections {
        rendered.push_str(&format!("\u{2022} {}\n", section.text));
        for detail in &section.details {
            rendered.push_str(&format!("  \u{2022} {detail}\n"));
        }
    }
    rendered
}

/// Remove markdown code fences (```json ... ``` or ``` ... ```) that models
/// sometimes wrap around the payload despite the prompt.
fn strip_code_fences(text: &str) -> &str {
    let mut text = text.trim();
    if let Some(rest) = text.strip_prefix("```json") {
        text = rest.trim_start();
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest.trim_start();
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest.trim_end();
    }
    text
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn strips_json_code_fences() {
        let fenced = "```json\n{\"command\": \"ls\"}\n```";
        assert_eq!(strip_code_fences(fenced), "{\"command\": \"ls\"}");

        let bare_fence = "```\n{\"command\": \"ls\"}\n```";
        assert_eq!(strip_code_fences(bare_fence), "{\"command\": \"ls\"}");

        let unfenced = "{\"command\": \"ls\"}";
        assert_eq!(strip_code_fences(unfenced), unfenced);
    }

    #[test]
    fn parses_generate_payload() {
        let response = parse_generate_payload(
            r#"{"command": "ls -la", "safety": "SAFE", "explanation": "lists files"}"#,
        )
        .unwrap();
        assert_eq!(response.command, "ls -la");
        assert_eq!(response.safety, SafetyLevel::Safe);
        assert_eq!(response.reasoning, "lists files");
    }

    #[test]
    fn parses_fenced_generate_payload() {
        let response = parse_generate_payload(
            "```json\n{\"command\": \"sudo apt install vim\", \"safety\": \"ATTENTION\", \"explanation\": \"needs sudo\"}\n```",
        )
        .unwrap();
        assert_eq!(response.command, "sudo apt install vim");
        assert_eq!(response.safety, SafetyLevel::Attention);
    }

    #[test]
    fn unknown_safety_labels_resolve_to_attention() {
        assert_eq!(parse_safety_label("SAFE"), SafetyLevel::Safe);
        assert_eq!(parse_safety_label("ATTENTION"), SafetyLevel::Attention);
        assert_eq!(parse_safety_label("MOSTLY_HARMLESS"), SafetyLevel::Attention);
        assert_eq!(parse_safety_label(""), SafetyLevel::Attention);
    }

    #[test]
    fn rejects_malformed_payload() {
        let err = parse_generate_payload("not json at all").unwrap_err();
        assert!(matches!(err, LlmError::Parse { provider: "gemini", .. }));
    }

    #[test]
    fn renders_explanation_sections_as_bullets() {
        let response = parse_explain_payload(
            r#"{"explanation": [
                {"text": "ls lists directory contents", "details": ["-l long format", "-a include hidden files"]},
                {"text": "output is sorted alphabetically", "details": []}
            ]}"#,
        )
        .unwrap();
        assert_eq!(
            response.explanation,
            "\u{2022} ls lists directory contents\n  \u{2022} -l long format\n  \u{2022} -a include hidden files\n\u{2022} output is sorted alphabetically\n"
        );
    }

    #[test]
    fn prompts_pin_the_json_contract() {
        let generate = build_generate_prompt("list all files");
        assert!(generate.contains("\"command\""));
        assert!(generate.contains("SAFE | ATTENTION"));
        assert!(generate.contains("User Query: list all files"));

        let explain = build_explain_prompt("ls -la");
        assert!(explain.contains("\"explanation\""));
        assert!(explain.contains("Command to explain: ls -la"));
    }
}
