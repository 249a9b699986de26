//! Text normalization used for comparison throughout the pipeline.
//!
//! Normalized strings are never shown to the user; they exist so that
//! filtering and deduplication treat "Bitcoin ", "BITCOIN" and "bitcoin"
//! as the same thing.

/// Canonical form of a string: trimmed, lowercased, internal whitespace
/// collapsed to single spaces. Idempotent.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// True when the normalized topic appears as a literal substring of the
/// normalized text. Empty topics match nothing.
pub fn topic_in_text(topic: &str, text: &str) -> bool {
    let topic = normalize(topic);
    if topic.is_empty() {
        return false;
    }
    normalize(text).contains(&topic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  AI   Regulation \n"), "ai regulation");
        assert_eq!(normalize("Bitcoin"), "bitcoin");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for input in ["  Mixed   CASE  text ", "plain", "", "\tTabs\tand\nnewlines"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_topic_in_text() {
        assert!(topic_in_text("Bitcoin", "Bitcoin surges past $100k"));
        assert!(topic_in_text("bitcoin", "Why BITCOIN matters"));
        assert!(topic_in_text("AI Regulation", "New rules on ai   regulation land in the EU"));
        assert!(!topic_in_text("Bitcoin", "Ethereum hits new highs"));
        assert!(!topic_in_text("", "anything at all"));
        assert!(!topic_in_text("   ", "anything at all"));
    }
}
