use std::sync::Arc;

use tracing::{debug, warn};

use prism_core::{Article, Region};

use crate::client::NewsSource;
use crate::query::optimize_query;

/// Cascading news retrieval over a [`NewsSource`].
///
/// Tries query variants in decreasing order of specificity and stops at the
/// first non-empty result set:
///
/// 1. optimized keyword phrase, scoped to the region,
/// 2. the raw topic, scoped to the region,
/// 3. the optimized (or raw) topic with the region scope removed.
///
/// Provider errors count as zero results for that attempt; the retriever
/// itself never fails.
pub struct NewsRetriever {
    source: Arc<dyn NewsSource>,
}

impl NewsRetriever {
    pub fn new(source: Arc<dyn NewsSource>) -> Self {
        Self { source }
    }

    pub async fn retrieve(&self, topic: &str, region: Region) -> Vec<Article> {
        let country = region.country_code();
        let optimized = optimize_query(topic);

        let mut attempts: Vec<(&str, Option<&str>)> = Vec::new();
        if let Some(phrase) = optimized.as_deref() {
            attempts.push((phrase, country));
        }
        attempts.push((topic, country));
        if country.is_some() {
            attempts.push((optimized.as_deref().unwrap_or(topic), None));
        }

        for (query, scope) in attempts {
            match self.source.search(query, scope).await {
                Ok(articles) if !articles.is_empty() => {
                    debug!(
                        "{} returned {} articles for '{}' (country: {:?})",
                        self.source.name(),
                        articles.len(),
                        query,
                        scope
                    );
                    return articles;
                }
                Ok(_) => {
                    debug!(
                        "{} returned no articles for '{}' (country: {:?})",
                        self.source.name(),
                        query,
                        scope
                    );
                }
                Err(e) => {
                    warn!(
                        "{} search failed for '{}' (country: {:?}): {}",
                        self.source.name(),
                        query,
                        scope,
                        e
                    );
                }
            }
        }

        Vec::new()
    }
}
