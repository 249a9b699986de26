use std::sync::Arc;

use prism_analysis::Analyzer;

pub struct AppState {
    pub analyzer: Arc<Analyzer>,
}
