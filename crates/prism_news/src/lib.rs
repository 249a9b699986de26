pub mod client;
pub mod query;
pub mod retriever;

pub use client::{GnewsClient, NewsSource};
pub use query::optimize_query;
pub use retriever::NewsRetriever;

pub mod prelude {
    pub use crate::client::{GnewsClient, NewsSource};
    pub use crate::retriever::NewsRetriever;
    pub use prism_core::{Article, Error, Result};
}
