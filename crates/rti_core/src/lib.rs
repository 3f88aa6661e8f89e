pub mod error;
pub mod stats;
pub mod storage;
pub mod types;

pub use error::{Error, Result};
pub use stats::{DashboardStats, RelevanceBand, SourceStats};
pub use storage::ArticleStorage;
pub use types::{
    Article, ArticleBrief, ArticleSource, ArticleStatus, BlogContent, GeneratedContent,
    KeywordMatches, RelevanceAnalysis, RtiCategory, SocialContent,
};
