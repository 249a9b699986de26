use axum::{extract::State, response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use prism_core::{Intensity, Region, Settings};

use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub topic: String,
    /// Free-form region string; unknown values fall back to global.
    #[serde(default)]
    pub region: Option<String>,
    /// Free-form intensity string; unknown values fall back to standard.
    #[serde(default)]
    pub intensity: Option<String>,
}

impl AnalyzeRequest {
    fn settings(&self) -> Settings {
        Settings {
            region: Region::parse_loose(self.region.as_deref().unwrap_or_default()),
            intensity: Intensity::parse_loose(self.intensity.as_deref().unwrap_or_default()),
        }
    }
}

/// The error outcome travels as payload, not protocol: HTTP 200 either way.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeRequest>,
) -> impl IntoResponse {
    let settings = request.settings();
    let outcome = state.analyzer.analyze(&request.topic, &settings).await;
    Json(outcome)
}

pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "retrieval": state.analyzer.has_retrieval(),
        "generative": state.analyzer.has_generator(),
        "demo_mode": state.analyzer.demo_mode(),
    }))
}
