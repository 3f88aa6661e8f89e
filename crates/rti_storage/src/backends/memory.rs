use async_trait::async_trait;
use rti_core::{Article, ArticleStatus, ArticleStorage, Error, Result};
use std::sync::Arc;
use tokio::sync::RwLock;
use crate::StorageBackend;

#[derive(Debug, Default)]
pub struct MemoryStore {
    articles: Vec<Article>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store_article(&mut self, article: &Article) {
        if let Some(existing) = self.articles.iter_mut().find(|a| a.id == article.id) {
            *existing = article.clone();
        } else {
            self.articles.push(article.clone());
        }
    }

    pub fn get_article(&self, id: u64) -> Option<Article> {
        self.articles.iter().find(|a| a.id == id).cloned()
    }

    pub fn list_articles(&self) -> Vec<Article> {
        let mut articles = self.articles.clone();
        articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        articles
    }

    pub fn set_status(&mut self, id: u64, status: ArticleStatus) -> Result<()> {
        let article = self
            .articles
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| Error::NotFound(format!("article {}", id)))?;
        article.status = status;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    store: Arc<RwLock<MemoryStore>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageBackend for MemoryStorage {
    fn get_error_message() -> &'static str {
        "Memory storage should be available"
    }

    async fn new() -> Result<Self> where Self: Sized {
        Ok(MemoryStorage::new())
    }
}

#[async_trait]
impl ArticleStorage for MemoryStorage {
    async fn store_article(&self, article: &Article) -> Result<()> {
        let mut store = self.store.write().await;
        store.store_article(article);
        Ok(())
    }

    async fn get_article(&self, id: u64) -> Result<Option<Article>> {
        let store = self.store.read().await;
        Ok(store.get_article(id))
    }

    async fn list_articles(&self) -> Result<Vec<Article>> {
        let store = self.store.read().await;
        Ok(store.list_articles())
    }

    async fn set_status(&self, id: u64, status: ArticleStatus) -> Result<()> {
        let mut store = self.store.write().await;
        store.set_status(id, status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use rti_core::ArticleSource;

    fn article(id: u64, hours_ago: i64, title: &str) -> Article {
        Article {
            id,
            title: title.to_string(),
            summary: "Residents complained to the civic body.".to_string(),
            content: String::new(),
            source: ArticleSource::TheHindu,
            published_at: Utc::now() - Duration::hours(hours_ago),
            rti_relevance: 0.5,
            rti_categories: vec![],
            rti_queries: vec![],
            status: ArticleStatus::Pending,
        }
    }

    #[tokio::test]
    async fn test_memory_storage() {
        let storage = MemoryStorage::new();
        storage.store_article(&article(1, 5, "Older")).await.unwrap();
        storage.store_article(&article(2, 1, "Newer")).await.unwrap();

        let listed = storage.list_articles().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].title, "Newer");

        let found = storage.get_article(1).await.unwrap();
        assert_eq!(found.map(|a| a.title), Some("Older".to_string()));
        assert!(storage.get_article(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_store_replaces_same_id() {
        let storage = MemoryStorage::new();
        storage.store_article(&article(1, 5, "First")).await.unwrap();
        storage.store_article(&article(1, 5, "Second")).await.unwrap();

        let listed = storage.list_articles().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "Second");
    }

    #[tokio::test]
    async fn test_set_status() {
        let storage = MemoryStorage::new();
        storage.store_article(&article(3, 1, "Pending")).await.unwrap();
        storage.set_status(3, ArticleStatus::Exported).await.unwrap();
        assert_eq!(
            storage.get_article(3).await.unwrap().unwrap().status,
            ArticleStatus::Exported
        );
        assert!(matches!(
            storage.set_status(4, ArticleStatus::Processed).await,
            Err(Error::NotFound(_))
        ));
    }
}
