//! Extractive section building: deduplicated snippets pulled straight from
//! article text, no generative model involved.

use std::collections::HashSet;

use prism_core::text::normalize;
use prism_core::{Article, Intensity};

const MAX_POINTS: usize = 6;

/// Which article field a point is pulled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointField {
    Title,
    Description,
}

/// Collect up to `limit` distinct snippets in first-appearance order.
/// Candidates are keyed by their normalized form, so case and whitespace
/// variants count as duplicates.
pub fn build_points(articles: &[Article], field: PointField, limit: usize) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut points: Vec<String> = Vec::new();

    for article in articles {
        let value = match field {
            PointField::Title => article.title.as_str(),
            PointField::Description => article.description.as_str(),
        };
        let key = normalize(value);
        if key.is_empty() || !seen.insert(key) {
            continue;
        }
        points.push(value.to_string());
        if points.len() >= limit {
            break;
        }
    }

    points
}

/// Concerns: deduplicated titles of the intensity-ranked set.
pub fn build_concerns(articles: &[Article], intensity: Intensity) -> Vec<String> {
    let points = build_points(articles, PointField::Title, MAX_POINTS);
    if !points.is_empty() {
        return points;
    }
    vec![
        "Limited critical reporting available so far.".to_string(),
        format!(
            "No strong negative signals detected under {} analysis.",
            intensity.label()
        ),
    ]
}

/// Key Data: deduplicated descriptions in retrieval order.
pub fn build_key_data(articles: &[Article]) -> Vec<String> {
    let points = build_points(articles, PointField::Description, MAX_POINTS);
    if !points.is_empty() {
        return points;
    }
    vec!["No independently verifiable factual data extracted.".to_string()]
}

/// Benefits: descriptions read in reverse article order, which diversifies
/// selection away from the Concerns slice when no sentiment signal exists.
pub fn build_benefits(articles: &[Article]) -> Vec<String> {
    let reversed: Vec<Article> = articles.iter().rev().cloned().collect();
    let points = build_points(&reversed, PointField::Description, MAX_POINTS);
    if !points.is_empty() {
        return points;
    }
    vec!["No clearly reported positive outcomes identified.".to_string()]
}
