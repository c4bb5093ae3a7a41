//! Centralized constants so endpoint, model, and environment variable names
//! are not hardcoded throughout the codebase.

/// URL constants for API endpoints
pub mod urls {
    pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
}

/// Environment variable names
pub mod env_vars {
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
    /// Overrides the provider base URL (self-hosted proxies, tests)
    pub const GEMINI_BASE_URL: &str = "GEMINI_BASE_URL";
    /// Set by the generated shell functions so the binary knows the exit
    /// code is actually being consumed
    pub const SHELL_INTEGRATION: &str = "HERMES_SHELL_INTEGRATION";
    pub const SUPPRESS_INTEGRATION_TIP: &str = "HERMES_SUPPRESS_INTEGRATION_TIP";
}

/// Model identifiers
pub mod models {
    pub const GEMINI_2_5_FLASH: &str = "gemini-2.5-flash";
    pub const GEMINI_2_5_PRO: &str = "gemini-2.5-pro";

    pub const DEFAULT_MODEL: &str = GEMINI_2_5_FLASH;
}

/// Configuration file locations
pub mod defaults {
    pub const CONFIG_DIR_NAME: &str = "hermes";
    pub const CONFIG_FILE_NAME: &str = "config.toml";
}
