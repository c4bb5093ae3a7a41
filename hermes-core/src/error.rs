//! CLI error type carrying a process exit code.

use thiserror::Error;

use crate::exit_codes;
use crate::llm::LlmError;

/// Failure modes of a CLI invocation, each mapped to an exit code in the
/// ordinary-error class (1-9). Safety verdicts are not errors and never
/// travel through this type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Missing or unusable configuration (exit code 2)
    #[error("{0}")]
    Config(String),

    /// Invalid CLI usage (exit code 3)
    #[error("{0}")]
    InvalidArgument(String),

    /// Provider call failed (exit code 4)
    #[error(transparent)]
    Api(#[from] LlmError),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) => exit_codes::CONFIG,
            CliError::InvalidArgument(_) => exit_codes::INVALID,
            CliError::Api(_) => exit_codes::API,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::LlmError;

    #[test]
    fn variants_map_to_documented_codes() {
        assert_eq!(CliError::Config("no key".into()).exit_code(), 2);
        assert_eq!(CliError::InvalidArgument("bad shell".into()).exit_code(), 3);
        let api = CliError::Api(LlmError::EmptyResponse { provider: "gemini" });
        assert_eq!(api.exit_code(), 4);
    }
}
