pub mod config;
pub mod error;
pub mod text;
pub mod types;

pub use config::PrismConfig;
pub use error::Error;
pub use types::{Analysis, AnalysisOutcome, Article, Intensity, Region, Section, Settings};

pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use crate::config::PrismConfig;
    pub use crate::types::{
        Analysis, AnalysisOutcome, Article, Intensity, Region, Section, Settings,
    };
    pub use crate::{Error, Result};
}
