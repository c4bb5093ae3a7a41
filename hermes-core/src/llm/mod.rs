//! LLM client layer: provider abstraction, the Gemini implementation, and a
//! deterministic mock for tests and offline runs.

pub mod client;
pub mod gemini;
pub mod mock;
pub mod provider;

pub use client::{make_client, AnyClient};
pub use gemini::GeminiProvider;
pub use mock::MockClient;
pub use provider::{
    ExplainRequest, ExplainResponse, GenerateRequest, GenerateResponse, LlmClient, LlmError,
};
