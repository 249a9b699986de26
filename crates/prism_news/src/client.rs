use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use url::Url;

use prism_core::{Article, Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://gnews.io/api/v4/search";

const MAX_RESULTS: u32 = 25;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// A backend that can search recent news for a query string, optionally
/// scoped to a two-letter country code.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Returns the name of the backend, for logging.
    fn name(&self) -> &str;

    /// Runs one search request. Errors are real transport or provider
    /// failures; an empty vec is a valid "nothing found" answer.
    async fn search(&self, query: &str, country: Option<&str>) -> Result<Vec<Article>>;
}

/// GNews search API client.
pub struct GnewsClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl fmt::Debug for GnewsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GnewsClient")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl GnewsClient {
    pub fn new(api_key: impl Into<String>, base_url: Option<&str>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::Config("GNews API key is required".to_string()));
        }

        let base_url = base_url.unwrap_or(DEFAULT_BASE_URL).trim_end_matches('/').to_string();
        Url::parse(&base_url)
            .map_err(|e| Error::Config(format!("Invalid GNews base URL {}: {}", base_url, e)))?;

        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            api_key,
            base_url,
        })
    }
}

#[async_trait]
impl NewsSource for GnewsClient {
    fn name(&self) -> &str {
        "GNews"
    }

    async fn search(&self, query: &str, country: Option<&str>) -> Result<Vec<Article>> {
        let mut request = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", query),
                ("token", self.api_key.as_str()),
                ("lang", "en"),
                ("sortby", "relevance"),
            ])
            .query(&[("max", MAX_RESULTS)]);

        if let Some(code) = country {
            request = request.query(&[("country", code)]);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(Error::Retrieval(format!(
                "search API returned status {}",
                response.status()
            )));
        }

        let body: SearchResponse = response.json().await?;
        tracing::debug!("GNews returned {} articles for '{}'", body.articles.len(), query);

        Ok(body
            .articles
            .into_iter()
            .filter(|raw| !raw.title.trim().is_empty())
            .map(RawArticle::into_article)
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    articles: Vec<RawArticle>,
}

#[derive(Debug, Deserialize)]
struct RawArticle {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    source: RawSource,
    #[serde(default, rename = "publishedAt")]
    published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize)]
struct RawSource {
    #[serde(default)]
    name: String,
}

impl RawArticle {
    fn into_article(self) -> Article {
        Article {
            title: self.title,
            description: self.description,
            url: self.url,
            source: self.source.name,
            published_at: self.published_at.unwrap_or_else(Utc::now),
        }
    }
}
