//! The analysis pipeline entry point.
//!
//! Orchestrates retrieval, drift filtering, intensity ranking and section
//! synthesis behind a single call that never panics and never returns Err:
//! every failure path degrades to a lower-fidelity result or an explicit
//! error outcome.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use prism_core::{
    Analysis, AnalysisOutcome, Article, Error, Intensity, PrismConfig, Result, Settings,
};
use prism_inference::models::create_generator;
use prism_inference::{build_prompt, parse_digest, validate_and_fix, Generator};
use prism_news::{GnewsClient, NewsRetriever};

use crate::backup::backup_report;
use crate::filter::{apply_intensity, strict_topic_filter};
use crate::points::{build_benefits, build_concerns, build_key_data};

pub const BLANK_TOPIC_ERROR: &str = "Please enter a valid topic.";
pub const NO_BACKEND_ERROR: &str =
    "No analysis backend is configured. Check your API keys.";
pub const NO_ARTICLES_ERROR: &str = "No reliable articles found for this topic.";
pub const GENERATION_ERROR: &str =
    "Live news was unavailable and generative synthesis failed. Please try again later.";

pub struct Analyzer {
    retriever: Option<NewsRetriever>,
    generator: Option<Arc<dyn Generator>>,
    demo_mode: bool,
}

impl Analyzer {
    pub fn new(
        retriever: Option<NewsRetriever>,
        generator: Option<Arc<dyn Generator>>,
        demo_mode: bool,
    ) -> Self {
        Self {
            retriever,
            generator,
            demo_mode,
        }
    }

    /// Wire up backends from an injected configuration. Missing credentials
    /// disable the corresponding backend rather than failing construction.
    pub fn from_config(config: &PrismConfig) -> Result<Self> {
        let retriever = match &config.gnews_api_key {
            Some(key) => {
                let client = GnewsClient::new(key.clone(), config.gnews_base_url.as_deref())?;
                info!("📰 News retrieval initialized (using GNews)");
                Some(NewsRetriever::new(Arc::new(client)))
            }
            None => {
                warn!("No news API key configured; retrieval disabled");
                None
            }
        };

        let generator = create_generator(config)?;
        if generator.is_none() {
            warn!("No generative API key configured; running extractive-only");
        }

        Ok(Self::new(retriever, generator, config.demo_mode))
    }

    pub fn has_retrieval(&self) -> bool {
        self.retriever.is_some()
    }

    pub fn has_generator(&self) -> bool {
        self.generator.is_some()
    }

    pub fn demo_mode(&self) -> bool {
        self.demo_mode
    }

    /// Analyze a topic. The sole contract the presentation layer depends
    /// on: on success the result always carries three populated sections,
    /// on failure a single human-readable error string.
    pub async fn analyze(&self, topic: &str, settings: &Settings) -> AnalysisOutcome {
        let topic = topic.trim();
        if topic.is_empty() {
            return AnalysisOutcome::failure(BLANK_TOPIC_ERROR);
        }

        if self.demo_mode {
            debug!("Demo mode on; returning backup report for '{}'", topic);
            return AnalysisOutcome::Report(backup_report(topic));
        }

        if self.retriever.is_none() && self.generator.is_none() {
            return AnalysisOutcome::failure(NO_BACKEND_ERROR);
        }

        let articles = match &self.retriever {
            Some(retriever) => retriever.retrieve(topic, settings.region).await,
            None => Vec::new(),
        };

        let filtered = strict_topic_filter(articles, topic);
        let ranked = apply_intensity(filtered, settings.intensity);

        if !ranked.is_empty() {
            if self.generator.is_some() {
                match self.generate_report(topic, settings.intensity, &ranked).await {
                    Ok(report) => return AnalysisOutcome::Report(report),
                    Err(e) => {
                        warn!("Generative synthesis failed, falling back to extractive: {}", e)
                    }
                }
            }
            return AnalysisOutcome::Report(extractive_report(
                topic,
                settings.intensity,
                &ranked,
            ));
        }

        // No usable articles survived. Fall back to model knowledge when a
        // generator is available; otherwise report the gap explicitly.
        if self.generator.is_some() {
            match self.generate_report(topic, settings.intensity, &[]).await {
                Ok(report) => return AnalysisOutcome::Report(report),
                Err(e) => {
                    warn!("Knowledge-based synthesis failed for '{}': {}", topic, e);
                    return match e {
                        Error::Config(_) => AnalysisOutcome::failure(
                            "Generative backend is not configured. Check your API key.",
                        ),
                        _ => AnalysisOutcome::failure(GENERATION_ERROR),
                    };
                }
            }
        }

        AnalysisOutcome::failure(NO_ARTICLES_ERROR)
    }

    async fn generate_report(
        &self,
        topic: &str,
        intensity: Intensity,
        articles: &[Article],
    ) -> Result<Analysis> {
        let generator = self
            .generator
            .as_ref()
            .ok_or_else(|| Error::Config("no generative backend configured".to_string()))?;

        let prompt = build_prompt(topic, intensity, articles);
        let raw = generator.generate(&prompt).await?;
        let value = parse_digest(&raw)?;
        let sections = validate_and_fix(&value);

        Ok(Analysis {
            topic: topic.to_string(),
            generated_at: Utc::now(),
            critic: sections.critic,
            facts: sections.facts,
            proponent: sections.proponent,
            sources: collect_sources(articles),
        })
    }
}

fn extractive_report(topic: &str, intensity: Intensity, articles: &[Article]) -> Analysis {
    Analysis {
        topic: topic.to_string(),
        generated_at: Utc::now(),
        critic: prism_core::Section::new("Concerns", build_concerns(articles, intensity)),
        facts: prism_core::Section::new("Key Data", build_key_data(articles)),
        proponent: prism_core::Section::new("Benefits", build_benefits(articles)),
        sources: collect_sources(articles),
    }
}

/// Distinct source names in first-appearance order.
fn collect_sources(articles: &[Article]) -> Vec<String> {
    let mut sources: Vec<String> = Vec::new();
    for article in articles {
        let name = article.source.trim();
        if name.is_empty() || sources.iter().any(|s| s.eq_ignore_ascii_case(name)) {
            continue;
        }
        sources.push(name.to_string());
    }
    sources
}
