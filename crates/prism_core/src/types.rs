use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::text::normalize;

/// A news article as returned by the retrieval backend. Owned transiently
/// by one analysis call; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
    pub source: String,
    pub published_at: DateTime<Utc>,
}

/// Geographic scope for news retrieval. Non-global variants map to the
/// two-letter country code the search API expects.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    #[default]
    Global,
    UnitedStates,
    UnitedKingdom,
    India,
    Australia,
    Canada,
}

impl Region {
    pub fn country_code(self) -> Option<&'static str> {
        match self {
            Region::Global => None,
            Region::UnitedStates => Some("us"),
            Region::UnitedKingdom => Some("gb"),
            Region::India => Some("in"),
            Region::Australia => Some("au"),
            Region::Canada => Some("ca"),
        }
    }

    /// Forgiving parser for user-supplied region strings. Unknown input
    /// falls back to `Global` rather than failing the request.
    pub fn parse_loose(value: &str) -> Self {
        match normalize(value).as_str() {
            "us" | "usa" | "united states" | "united-states" => Region::UnitedStates,
            "uk" | "gb" | "united kingdom" | "united-kingdom" => Region::UnitedKingdom,
            "in" | "india" => Region::India,
            "au" | "australia" => Region::Australia,
            "ca" | "canada" => Region::Canada,
            _ => Region::Global,
        }
    }
}

/// How critically retrieved content is framed. Affects tone and article
/// ranking, never the shape of the output.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Intensity {
    #[default]
    Standard,
    Skeptical,
    Ruthless,
}

impl Intensity {
    pub fn parse_loose(value: &str) -> Self {
        match normalize(value).as_str() {
            "skeptical" => Intensity::Skeptical,
            "ruthless" => Intensity::Ruthless,
            _ => Intensity::Standard,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Intensity::Standard => "Standard",
            Intensity::Skeptical => "Skeptical",
            Intensity::Ruthless => "Ruthless",
        }
    }
}

/// Per-request analysis settings.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub region: Region,
    #[serde(default)]
    pub intensity: Intensity,
}

/// One labeled viewpoint of the digest. `points` is never empty on any
/// success path; failure paths substitute explanatory placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub points: Vec<String>,
}

impl Section {
    pub fn new(title: impl Into<String>, points: Vec<String>) -> Self {
        Self {
            title: title.into(),
            points,
        }
    }
}

/// The three-section opinion digest produced by a successful analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    pub topic: String,
    pub generated_at: DateTime<Utc>,
    pub critic: Section,
    pub facts: Section,
    pub proponent: Section,
    /// Names of the news sources that contributed articles. Empty when the
    /// digest came from model knowledge or the offline backup.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
}

/// What the pipeline entry point hands back: either a complete digest or a
/// single-field error record. Serialized untagged so callers see either the
/// full report object or `{"error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    Report(Analysis),
    Failure { error: String },
}

impl AnalysisOutcome {
    pub fn failure(message: impl Into<String>) -> Self {
        AnalysisOutcome::Failure {
            error: message.into(),
        }
    }

    pub fn as_report(&self) -> Option<&Analysis> {
        match self {
            AnalysisOutcome::Report(analysis) => Some(analysis),
            AnalysisOutcome::Failure { .. } => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, AnalysisOutcome::Failure { .. })
    }
}
