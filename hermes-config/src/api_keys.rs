//! API key retrieval from environment variables, `.env` files, and
//! configuration files.
//!
//! Environment variables take priority over configuration file values so a
//! key checked into a config file never shadows the ambient credentials of
//! the shell session.

use std::env;

use crate::constants::env_vars;

/// Load environment variables from a `.env` file in the current directory.
///
/// Missing files are fine; any other failure is logged as a warning and
/// otherwise ignored so a broken `.env` never blocks the CLI.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!("loaded environment variables from {}", path.display());
        }
        Err(dotenvy::Error::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => {
            tracing::warn!("failed to load .env file: {err}");
        }
    }
}

/// Resolve the Gemini API key: environment first, then the config file value.
pub fn resolve_gemini_api_key(config_value: Option<&str>) -> Option<String> {
    if let Ok(key) = env::var(env_vars::GEMINI_API_KEY) {
        if !key.trim().is_empty() {
            return Some(key);
        }
    }
    config_value
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(ToOwned::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the process-wide env var is not mutated concurrently.
    #[test]
    fn resolution_prefers_env_over_config_file() {
        env::remove_var(env_vars::GEMINI_API_KEY);
        assert_eq!(
            resolve_gemini_api_key(Some("from-file")),
            Some("from-file".to_string())
        );
        assert_eq!(resolve_gemini_api_key(Some("   ")), None);
        assert_eq!(resolve_gemini_api_key(None), None);

        env::set_var(env_vars::GEMINI_API_KEY, "from-env");
        assert_eq!(
            resolve_gemini_api_key(Some("from-file")),
            Some("from-env".to_string())
        );
        env::remove_var(env_vars::GEMINI_API_KEY);
    }
}
