pub mod models;
pub mod prompt;
pub mod response;

pub use models::{create_generator, Generator};
pub use prompt::build_prompt;
pub use response::{parse_digest, validate_and_fix, SectionSet};

pub mod prelude {
    pub use crate::models::{create_generator, Generator};
    pub use crate::prompt::build_prompt;
    pub use crate::response::{parse_digest, validate_and_fix, SectionSet};
    pub use prism_core::{Error, Result};
}
