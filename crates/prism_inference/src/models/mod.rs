use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use prism_core::{PrismConfig, Result};

pub mod canned;
pub mod gemini;

pub use canned::CannedGenerator;
pub use gemini::GeminiModel;

/// A text-generation backend. Given a prompt, produces raw model output;
/// the caller is responsible for parsing and validating it.
#[async_trait]
pub trait Generator: Send + Sync + fmt::Debug {
    /// Returns the name of the backend, for logging.
    fn name(&self) -> &str;

    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Build the configured generative backend, if any.
///
/// Returns `Ok(None)` when no generative credentials are configured; the
/// pipeline then runs extractive-only.
pub fn create_generator(config: &PrismConfig) -> Result<Option<Arc<dyn Generator>>> {
    match &config.gemini_api_key {
        Some(key) => {
            let model = GeminiModel::new(
                Some(key.clone()),
                config.gemini_base_url.as_deref(),
                config.gemini_model.as_deref(),
            )?;
            info!("🧠 Generative backend initialized (using {})", model.name());
            Ok(Some(Arc::new(model)))
        }
        None => Ok(None),
    }
}
