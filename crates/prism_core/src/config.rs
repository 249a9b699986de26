//! Injected configuration for the analysis pipeline.
//!
//! Credentials and overrides are resolved once at a binary entry point
//! (usually via [`PrismConfig::from_env`]) and passed down as a value.
//! Library code never reads the process environment.

/// Everything the pipeline needs to talk to its backends.
#[derive(Debug, Clone, Default)]
pub struct PrismConfig {
    /// API key for the news search backend. `None` disables retrieval.
    pub gnews_api_key: Option<String>,
    /// Base URL override for the news search backend.
    pub gnews_base_url: Option<String>,
    /// API key for the generative backend. `None` disables generative
    /// synthesis.
    pub gemini_api_key: Option<String>,
    /// Base URL override for the generative backend.
    pub gemini_base_url: Option<String>,
    /// Model identifier override for the generative backend.
    pub gemini_model: Option<String>,
    /// When set, both backends are bypassed and a templated offline report
    /// is returned instantly.
    pub demo_mode: bool,
}

impl PrismConfig {
    pub const ENV_GNEWS_API_KEY: &'static str = "PRISM_GNEWS_API_KEY";
    pub const ENV_GNEWS_BASE_URL: &'static str = "PRISM_GNEWS_BASE_URL";
    pub const ENV_GEMINI_API_KEY: &'static str = "PRISM_GEMINI_API_KEY";
    pub const ENV_GEMINI_BASE_URL: &'static str = "PRISM_GEMINI_BASE_URL";
    pub const ENV_GEMINI_MODEL: &'static str = "PRISM_GEMINI_MODEL";

    /// Read configuration from the process environment. Intended for `main`
    /// functions only; the result is handed into the pipeline as a value.
    pub fn from_env() -> Self {
        Self {
            gnews_api_key: env_non_empty(Self::ENV_GNEWS_API_KEY),
            gnews_base_url: env_non_empty(Self::ENV_GNEWS_BASE_URL),
            gemini_api_key: env_non_empty(Self::ENV_GEMINI_API_KEY),
            gemini_base_url: env_non_empty(Self::ENV_GEMINI_BASE_URL),
            gemini_model: env_non_empty(Self::ENV_GEMINI_MODEL),
            demo_mode: false,
        }
    }

    pub fn has_news_credentials(&self) -> bool {
        self.gnews_api_key.is_some()
    }

    pub fn has_generative_credentials(&self) -> bool {
        self.gemini_api_key.is_some()
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
