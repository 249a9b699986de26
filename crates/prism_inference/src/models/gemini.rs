use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::Url;

use prism_core::{Error, Result};

use super::Generator;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Gemini REST API client.
pub struct GeminiModel {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl fmt::Debug for GeminiModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiModel")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

impl GeminiModel {
    pub fn new(
        api_key: Option<String>,
        base_url: Option<&str>,
        model: Option<&str>,
    ) -> Result<Self> {
        let api_key = api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| Error::Config("Gemini API key is required".to_string()))?;

        let base_url = base_url.unwrap_or(DEFAULT_BASE_URL).trim_end_matches('/').to_string();
        Url::parse(&base_url)
            .map_err(|e| Error::Config(format!("Invalid Gemini base URL {}: {}", base_url, e)))?;

        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            api_key,
            base_url,
            model: model.unwrap_or(DEFAULT_MODEL).to_string(),
        })
    }
}

#[async_trait]
impl Generator for GeminiModel {
    fn name(&self) -> &str {
        "Gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Inference(format!(
                "generative API returned status {}",
                response.status()
            )));
        }

        let body: GenerateResponse = response.json().await?;
        body.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| Error::Inference("empty response from generative API".to_string()))
    }
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_requires_api_key() {
        let result = GeminiModel::new(None, None, None);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "Configuration error: Gemini API key is required"
        );

        assert!(GeminiModel::new(Some("test-key".to_string()), None, None).is_ok());
    }

    #[test]
    fn test_model_rejects_invalid_base_url() {
        let result = GeminiModel::new(Some("test-key".to_string()), Some("::bogus::"), None);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let model = GeminiModel::new(Some("super-secret".to_string()), None, None).unwrap();
        let debug = format!("{:?}", model);
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_response_deserialization() {
        let body = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "{\"critic\": {}}"}], "role": "model"}}
            ]
        }"#;
        let parsed: GenerateResponse = serde_json::from_str(body).unwrap();
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .unwrap();
        assert!(text.contains("critic"));
    }
}
