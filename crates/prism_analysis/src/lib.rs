pub mod backup;
pub mod filter;
pub mod pipeline;
pub mod points;

pub use filter::{apply_intensity, strict_topic_filter};
pub use pipeline::Analyzer;

pub mod prelude {
    pub use crate::pipeline::Analyzer;
    pub use prism_core::{
        Analysis, AnalysisOutcome, Article, Error, Intensity, PrismConfig, Region, Result,
        Section, Settings,
    };
}
