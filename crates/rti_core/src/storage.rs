use async_trait::async_trait;
use crate::types::{Article, ArticleStatus};
use crate::Result;

#[async_trait]
pub trait ArticleStorage: Send + Sync {
    /// Store an article, replacing any previous version with the same id
    async fn store_article(&self, article: &Article) -> Result<()>;

    /// Get a single article by id
    async fn get_article(&self, id: u64) -> Result<Option<Article>>;

    /// List all stored articles, newest first
    async fn list_articles(&self) -> Result<Vec<Article>>;

    /// Move an article to a new pipeline status
    async fn set_status(&self, id: u64, status: ArticleStatus) -> Result<()>;
}
