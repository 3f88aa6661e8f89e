//! Keyword-driven RTI relevance scoring and content templating.
//!
//! Everything here is a plain function over borrowed text: no I/O, no shared
//! state. The only non-determinism lives in [`content`], where the blog title
//! and call-to-action are drawn from a caller-supplied RNG.

pub mod content;
pub mod keywords;
pub mod models;
pub mod scorer;
pub mod topic;

pub use content::{
    generate_blog_content, generate_blog_content_with, generate_content,
    generate_content_with, generate_social_content,
};
pub use models::{create_model, KeywordModel, RelevanceModel};
pub use scorer::analyze;
pub use topic::Topic;

pub mod prelude {
    pub use super::models::{create_model, RelevanceModel};
    pub use super::{analyze, generate_blog_content, generate_social_content, Topic};
    pub use rti_core::{ArticleBrief, BlogContent, Error, RelevanceAnalysis, Result, SocialContent};
}
