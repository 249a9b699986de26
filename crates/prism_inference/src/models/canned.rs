use std::fmt;

use async_trait::async_trait;

use prism_core::Result;

use super::Generator;

/// Offline generator that answers every prompt with a fixed payload.
///
/// The default payload is a fence-wrapped three-section digest, so the full
/// parse/validate path gets exercised without network access. Tests can
/// script any payload they need via [`CannedGenerator::with_payload`].
#[derive(Clone)]
pub struct CannedGenerator {
    payload: String,
}

impl fmt::Debug for CannedGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CannedGenerator").finish()
    }
}

impl CannedGenerator {
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

impl Default for CannedGenerator {
    fn default() -> Self {
        Self::with_payload(
            r#"```json
{
  "critic": {
    "title": "Concerns",
    "points": [
      "Coverage of this topic remains contested.",
      "Several outlets flag unresolved questions."
    ]
  },
  "facts": {
    "title": "Key Data",
    "points": [
      "Reporting on this topic is ongoing.",
      "Multiple sources have published recent updates."
    ]
  },
  "proponent": {
    "title": "Benefits",
    "points": [
      "Supporters point to early positive signals.",
      "Analysts see room for improvement over time."
    ]
  }
}
```"#,
        )
    }
}

#[async_trait]
impl Generator for CannedGenerator {
    fn name(&self) -> &str {
        "Canned"
    }

    async fn generate(&self, _prompt: &str) -> Result<String> {
        Ok(self.payload.clone())
    }
}
