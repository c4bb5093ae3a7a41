//! Core library for hermes.
//!
//! Three pieces: the command safety engine ([`safety`]), the LLM client
//! layer ([`llm`]), and the process exit code contract ([`exit_codes`]).
//! The binary crate wires them together; nothing here touches global state
//! or performs logging of its own.

pub mod error;
pub mod exit_codes;
pub mod llm;
pub mod safety;

pub use error::CliError;
pub use safety::{DecisionSource, SafetyAnalyzer, SafetyAssessment, SafetyLevel};
