//! Prompt construction for the generative backend.

use prism_core::{Article, Intensity};

/// Articles beyond this count add cost without adding signal.
const MAX_PROMPT_ARTICLES: usize = 12;

pub fn tone_instruction(intensity: Intensity) -> &'static str {
    match intensity {
        Intensity::Standard => {
            "Keep a balanced, neutral tone. Weigh concerns and benefits evenly."
        }
        Intensity::Skeptical => {
            "Take a critical stance. Emphasize controversies, risks and unresolved questions."
        }
        Intensity::Ruthless => {
            "Be aggressive and cynical. Lead with failures, scandals and worst-case readings."
        }
    }
}

/// Build the full prompt for a three-section digest.
///
/// When `articles` is empty the model is asked to answer from its general
/// knowledge instead of from source text.
pub fn build_prompt(topic: &str, intensity: Intensity, articles: &[Article]) -> String {
    let mut prompt = format!(
        "You are a news analyst. Produce an opinion digest about \"{}\".\n{}\n\
         Respond with ONLY a JSON object, no commentary, with exactly these keys:\n\
         \"critic\", \"facts\", \"proponent\" - each an object with a \"title\" string\n\
         and a \"points\" array of short strings.\n\
         \"critic\" covers concerns, \"facts\" covers verifiable data,\n\
         \"proponent\" covers benefits.\n",
        topic,
        tone_instruction(intensity)
    );

    if articles.is_empty() {
        prompt.push_str("No source articles are available; answer from your general knowledge.\n");
    } else {
        prompt.push_str("Base every point on the source articles below.\n\nSource articles:\n");
        for article in articles.iter().take(MAX_PROMPT_ARTICLES) {
            prompt.push_str(&format!(
                "- {}: {} ({})\n",
                article.title, article.description, article.source
            ));
        }
    }

    prompt
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
    fn test_prompt_embeds_topic_and_articles() {
        let articles = vec![article("Bitcoin surges", "Price rose sharply overnight.")];
        let prompt = build_prompt("Bitcoin", Intensity::Standard, &articles);
        assert!(prompt.contains("\"Bitcoin\""));
        assert!(prompt.contains("Bitcoin surges"));
        assert!(prompt.contains("Example Wire"));
        assert!(prompt.contains("\"critic\""));
    }

    #[test]
    fn test_knowledge_prompt_when_no_articles() {
        let prompt = build_prompt("Bitcoin", Intensity::Standard, &[]);
        assert!(prompt.contains("general knowledge"));
        assert!(!prompt.contains("Source articles:"));
    }

    #[test]
    fn test_tone_follows_intensity() {
        let standard = build_prompt("X", Intensity::Standard, &[]);
        let ruthless = build_prompt("X", Intensity::Ruthless, &[]);
        assert!(standard.contains("balanced"));
        assert!(ruthless.contains("cynical"));
        assert_ne!(standard, ruthless);
    }

    #[test]
    fn test_caps_article_count() {
        let articles: Vec<Article> = (0..40)
            .map(|i| article(&format!("headline {}", i), "body"))
            .collect();
        let prompt = build_prompt("X", Intensity::Standard, &articles);
        assert!(prompt.contains("headline 11"));
        assert!(!prompt.contains("headline 12"));
    }
}
