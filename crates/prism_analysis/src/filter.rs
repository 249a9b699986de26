//! Topic-drift filtering and intensity ranking.

use prism_core::text::{normalize, topic_in_text};
use prism_core::{Article, Intensity};

/// Keep only articles that literally mention the topic in their title or
/// description. Search providers return loosely related results; this is
/// what stops the digest from discussing an unrelated subject.
pub fn strict_topic_filter(articles: Vec<Article>, topic: &str) -> Vec<Article> {
    articles
        .into_iter()
        .filter(|article| {
            let blob = format!("{} {}", article.title, article.description);
            topic_in_text(topic, &blob)
        })
        .collect()
}

/// Keyword lists that bias article selection per intensity. Standard has no
/// bias at all.
pub fn intensity_keywords(intensity: Intensity) -> &'static [&'static str] {
    match intensity {
        Intensity::Standard => &[],
        Intensity::Skeptical => &[
            "controversy",
            "criticism",
            "concern",
            "risk",
            "issue",
            "questioned",
            "debate",
            "problem",
            "doubt",
        ],
        Intensity::Ruthless => &[
            "fraud",
            "scam",
            "arrest",
            "ban",
            "probe",
            "crackdown",
            "illegal",
            "failure",
            "collapse",
            "accused",
        ],
    }
}

/// Number of intensity keywords appearing in the article's text.
pub fn score_article(article: &Article, keywords: &[&str]) -> usize {
    let text = normalize(&format!("{} {}", article.title, article.description));
    keywords.iter().filter(|k| text.contains(*k)).count()
}

/// Rank articles by intensity signal, strongest first, dropping articles
/// with no signal. When nothing scores above zero the original order is
/// returned unchanged so weak coverage still produces a digest.
pub fn apply_intensity(articles: Vec<Article>, intensity: Intensity) -> Vec<Article> {
    if intensity == Intensity::Standard || articles.is_empty() {
        return articles;
    }

    let keywords = intensity_keywords(intensity);
    let mut scored: Vec<(usize, Article)> = articles
        .iter()
        .map(|article| (score_article(article, keywords), article.clone()))
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));

    let ranked: Vec<Article> = scored
        .into_iter()
        .filter(|(score, _)| *score > 0)
        .map(|(_, article)| article)
        .collect();

    if ranked.is_empty() {
        articles
    } else {
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn article(title: &str, description: &str) -> Article {
        Article {
            title: title.to_string(),
            description: description.to_string(),
            url: "https://example.com".to_string(),
            source: "Example Wire".to_string(),
            published_at: Utc::now(),
        }
    }

    #[test]
    fn test_filter_drops_off_topic_articles() {
        let articles = vec![
            article("Bitcoin surges past $100k", "Crypto markets rally."),
            article("Ethereum upgrade lands", "Unrelated to the topic."),
            article("Markets wobble", "Analysts cite BITCOIN volatility."),
        ];

        let filtered = strict_topic_filter(articles, "Bitcoin");
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|a| {
            let blob = format!("{} {}", a.title, a.description).to_lowercase();
            blob.contains("bitcoin")
        }));
    }

    #[test]
    fn test_filter_is_case_insensitive_on_both_sides() {
        let articles = vec![article("AI REGULATION moves forward", "")];
        assert_eq!(strict_topic_filter(articles, "ai regulation").len(), 1);
    }

    #[test]
    fn test_filter_can_empty_the_set() {
        let articles = vec![article("Something else entirely", "No mention here.")];
        assert!(strict_topic_filter(articles, "Bitcoin").is_empty());
    }

    #[test]
    fn test_standard_intensity_is_a_no_op() {
        let articles = vec![
            article("calm report", "nothing dramatic"),
            article("fraud probe launched", "collapse feared"),
        ];
        let ranked = apply_intensity(articles.clone(), Intensity::Standard);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].title, "calm report");
    }

    #[test]
    fn test_ruthless_ranks_strong_signals_first() {
        let articles = vec![
            article("calm report", "nothing dramatic"),
            article("fraud probe launched", "scandal deepens amid collapse"),
            article("ban considered", "regulators weigh action"),
        ];
        let ranked = apply_intensity(articles, Intensity::Ruthless);
        // The zero-signal article is dropped, strongest signal leads.
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].title, "fraud probe launched");
        assert_eq!(ranked[1].title, "ban considered");
    }

    #[test]
    fn test_no_signal_falls_back_to_original_order() {
        let articles = vec![
            article("first calm report", "nothing to see"),
            article("second calm report", "still nothing"),
        ];
        let ranked = apply_intensity(articles, Intensity::Ruthless);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].title, "first calm report");
    }

    #[test]
    fn test_score_article_counts_keywords() {
        let a = article("fraud and scam alleged", "authorities launch probe");
        assert_eq!(score_article(&a, intensity_keywords(Intensity::Ruthless)), 3);
        assert_eq!(score_article(&a, intensity_keywords(Intensity::Standard)), 0);
    }
}
