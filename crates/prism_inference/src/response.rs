//! Parsing and validation of generative backend output.
//!
//! Models are asked for a JSON object with `critic`, `facts` and
//! `proponent` keys, but the response shape is never trusted: fences are
//! stripped, the JSON is located inside surrounding prose if needed, and
//! every section is coerced into the canonical `{title, points}` form.

use serde_json::Value;

use prism_core::{Error, Result, Section};

pub const PLACEHOLDER_POINT: &str = "Data unavailable.";

/// (key, default title) for the three required sections.
pub const SECTION_KEYS: [(&str, &str); 3] = [
    ("critic", "Concerns"),
    ("facts", "Key Data"),
    ("proponent", "Benefits"),
];

/// The canonical three sections of a digest, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSet {
    pub critic: Section,
    pub facts: Section,
    pub proponent: Section,
}

/// Strip Markdown code fences from a model response.
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

/// Parse a raw model response into a JSON value.
///
/// Tolerates code fences and prose around the object; fails only when no
/// JSON object can be extracted at all.
pub fn parse_digest(raw: &str) -> Result<Value> {
    let stripped = strip_code_fences(raw);
    if let Ok(value) = serde_json::from_str::<Value>(stripped) {
        if value.is_object() {
            return Ok(value);
        }
    }

    // Models sometimes wrap the object in commentary; take the outermost
    // braces and retry.
    if let (Some(start), Some(end)) = (stripped.find('{'), stripped.rfind('}')) {
        if start < end {
            if let Ok(value) = serde_json::from_str::<Value>(&stripped[start..=end]) {
                if value.is_object() {
                    return Ok(value);
                }
            }
        }
    }

    Err(Error::Inference(
        "generative backend returned no parseable JSON object".to_string(),
    ))
}

/// Coerce a parsed model response into the canonical three-section shape.
///
/// - a missing or unusable section becomes a placeholder section,
/// - a bare list of strings is wrapped under the default title,
/// - an object without a usable `points` array is replaced wholesale,
/// - empty point lists get a single placeholder point.
pub fn validate_and_fix(value: &Value) -> SectionSet {
    SectionSet {
        critic: fix_section(value.get("critic"), SECTION_KEYS[0].1),
        facts: fix_section(value.get("facts"), SECTION_KEYS[1].1),
        proponent: fix_section(value.get("proponent"), SECTION_KEYS[2].1),
    }
}

fn placeholder(title: &str) -> Section {
    Section::new(title, vec![PLACEHOLDER_POINT.to_string()])
}

fn fix_section(value: Option<&Value>, default_title: &str) -> Section {
    let Some(value) = value else {
        return placeholder(default_title);
    };

    match value {
        Value::Array(items) => {
            let points = string_points(items);
            if points.is_empty() {
                placeholder(default_title)
            } else {
                Section::new(default_title, points)
            }
        }
        Value::Object(map) => {
            let title = map
                .get("title")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .unwrap_or(default_title)
                .to_string();

            let Some(Value::Array(items)) = map.get("points") else {
                return placeholder(default_title);
            };

            let mut points = string_points(items);
            if points.is_empty() {
                points.push(PLACEHOLDER_POINT.to_string());
            }
            Section { title, points }
        }
        _ => placeholder(default_title),
    }
}

fn string_points(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("{\"a\":1}"), "{\"a\":1}");
        assert_eq!(strip_code_fences("  {\"a\":1}  "), "{\"a\":1}");
    }

    #[test]
    fn test_parse_digest_with_fences() {
        let value = parse_digest("```json\n{\"critic\": [\"x\"]}\n```").unwrap();
        assert_eq!(value["critic"][0], "x");
    }

    #[test]
    fn test_parse_digest_with_surrounding_prose() {
        let value =
            parse_digest("Here is the digest you asked for: {\"facts\": {\"points\": []}} Enjoy!")
                .unwrap();
        assert!(value.get("facts").is_some());
    }

    #[test]
    fn test_parse_digest_rejects_garbage() {
        assert!(parse_digest("no json here").is_err());
        assert!(parse_digest("").is_err());
        assert!(parse_digest("[1, 2, 3]").is_err());
    }

    #[test]
    fn test_validate_empty_object_yields_placeholders() {
        let sections = validate_and_fix(&json!({}));
        assert_eq!(sections.critic, placeholder("Concerns"));
        assert_eq!(sections.facts, placeholder("Key Data"));
        assert_eq!(sections.proponent, placeholder("Benefits"));
    }

    #[test]
    fn test_validate_wraps_bare_list() {
        let sections = validate_and_fix(&json!({"critic": ["a", "b"]}));
        assert_eq!(sections.critic.title, "Concerns");
        assert_eq!(sections.critic.points, vec!["a", "b"]);
        // The other two sections are filled in.
        assert_eq!(sections.facts.points, vec![PLACEHOLDER_POINT]);
        assert_eq!(sections.proponent.points, vec![PLACEHOLDER_POINT]);
    }

    #[test]
    fn test_validate_keeps_well_formed_sections() {
        let sections = validate_and_fix(&json!({
            "critic": {"title": "Worries", "points": ["w1", "w2"]},
            "facts": {"title": "Numbers", "points": ["n1"]},
            "proponent": {"title": "Upside", "points": ["u1"]}
        }));
        assert_eq!(sections.critic.title, "Worries");
        assert_eq!(sections.critic.points, vec!["w1", "w2"]);
        assert_eq!(sections.facts.title, "Numbers");
        assert_eq!(sections.proponent.points, vec!["u1"]);
    }

    #[test]
    fn test_validate_replaces_object_without_points() {
        let sections = validate_and_fix(&json!({
            "critic": {"title": "Worries"},
            "facts": {"title": "Numbers", "points": "not a list"}
        }));
        assert_eq!(sections.critic, placeholder("Concerns"));
        assert_eq!(sections.facts, placeholder("Key Data"));
    }

    #[test]
    fn test_validate_pads_empty_points() {
        let sections = validate_and_fix(&json!({
            "critic": {"title": "Worries", "points": []}
        }));
        assert_eq!(sections.critic.title, "Worries");
        assert_eq!(sections.critic.points, vec![PLACEHOLDER_POINT]);
    }

    #[test]
    fn test_validate_drops_non_string_points() {
        let sections = validate_and_fix(&json!({
            "facts": {"points": ["keep", 42, null, "  ", "also keep"]}
        }));
        assert_eq!(sections.facts.points, vec!["keep", "also keep"]);
    }
}
