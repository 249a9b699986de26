//! Offline backup report used by demo mode.

use chrono::Utc;

use prism_core::{Analysis, Section};

/// Templated digest returned instantly when demo mode is on. No network
/// access, always three populated sections.
pub fn backup_report(topic: &str) -> Analysis {
    Analysis {
        topic: topic.to_string(),
        generated_at: Utc::now(),
        critic: Section::new(
            "Concerns",
            vec![
                format!("Critics argue that {} moves faster than oversight can follow.", topic),
                format!("Open questions remain about the long-term costs of {}.", topic),
                "Demo mode is on; these points are illustrative, not live reporting.".to_string(),
            ],
        ),
        facts: Section::new(
            "Key Data",
            vec![
                format!("{} has drawn sustained media coverage in recent months.", topic),
                "Coverage spans mainstream outlets and specialist publications.".to_string(),
            ],
        ),
        proponent: Section::new(
            "Benefits",
            vec![
                format!("Supporters credit {} with opening new opportunities.", topic),
                format!("Early adopters report tangible gains from {}.", topic),
            ],
        ),
        sources: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backup_report_is_complete() {
        let report = backup_report("AI Regulation");
        assert_eq!(report.topic, "AI Regulation");
        assert!(!report.critic.points.is_empty());
        assert!(!report.facts.points.is_empty());
        assert!(!report.proponent.points.is_empty());
        assert!(report.critic.points[0].contains("AI Regulation"));
        assert!(report.sources.is_empty());
    }
}
