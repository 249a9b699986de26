//! Search query optimization.
//!
//! Search providers do better with a short keyword phrase than a full
//! sentence. The optimizer distills a topic down to its high-signal terms;
//! when nothing is gained over the raw topic it stands aside.

use prism_core::text::normalize;

const MAX_TERMS: usize = 6;

/// Common words that carry no topical signal in a news query.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "in", "on", "at", "to", "for", "of", "with", "by", "from", "and", "or",
    "is", "are", "was", "were", "be", "been", "being", "will", "would", "could", "should",
    "what", "who", "which", "when", "where", "how", "why", "about", "into", "over", "under",
    "this", "that", "these", "those", "its", "their", "his", "her", "our", "your",
];

/// Distill a topic into a short keyword phrase.
///
/// Returns `None` when the distilled phrase is empty or adds nothing over
/// the raw topic, so the caller can skip the redundant query attempt.
pub fn optimize_query(topic: &str) -> Option<String> {
    let mut terms: Vec<String> = Vec::new();

    for word in topic.split_whitespace() {
        let clean: String = word.chars().filter(|c| c.is_alphanumeric()).collect();
        if clean.is_empty() {
            continue;
        }

        // Short all-caps tokens (AI, EU, US) are high-signal; everything
        // else below three characters is noise.
        let is_acronym = clean.len() >= 2 && clean.chars().all(|c| c.is_uppercase());
        if clean.len() < 3 && !is_acronym {
            continue;
        }

        let lower = clean.to_lowercase();
        if STOP_WORDS.contains(&lower.as_str()) {
            continue;
        }
        if terms.iter().any(|t| t.eq_ignore_ascii_case(&clean)) {
            continue;
        }

        terms.push(clean);
        if terms.len() >= MAX_TERMS {
            break;
        }
    }

    if terms.is_empty() {
        return None;
    }

    let phrase = terms.join(" ");
    if normalize(&phrase) == normalize(topic) {
        return None;
    }
    Some(phrase)
}
