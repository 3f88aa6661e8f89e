use std::sync::Arc;

use async_trait::async_trait;
use rti_analysis::RelevanceModel;
use rti_core::stats::RTI_RELEVANT_THRESHOLD;
use rti_core::{Article, ArticleStorage, Error, Result};

use crate::logging::Logger;

pub mod mock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestStatus {
    New,
    Updated,
    Unchanged,
}

impl IngestStatus {
    pub fn emoji(&self) -> &'static str {
        match self {
            IngestStatus::New => "🆕",
            IngestStatus::Updated => "📝",
            IngestStatus::Unchanged => "⏭️",
        }
    }
}

#[async_trait]
pub trait Feed: Send + Sync {
    /// Returns the name of the feed
    fn name(&self) -> &str;

    /// Fetches the current batch of articles, unscored
    async fn fetch_articles(&mut self) -> Result<Vec<Article>>;

    /// Returns a list of CLI shorthand names for this feed
    fn cli_names(&self) -> Vec<&str> {
        vec![]
    }
}

/// Pulls articles from every registered feed, scores them and stores the result.
pub struct FeedManager {
    storage: Arc<dyn ArticleStorage>,
    model: Arc<dyn RelevanceModel>,
    feeds: Vec<Box<dyn Feed>>,
    logger: Logger,
}

impl FeedManager {
    pub fn new(storage: Arc<dyn ArticleStorage>, model: Arc<dyn RelevanceModel>) -> Self {
        Self {
            storage,
            model,
            feeds: Vec::new(),
            logger: Logger::new().with_prefix("[feed]".to_string()),
        }
    }

    pub fn add_feed(&mut self, feed: Box<dyn Feed>) {
        self.feeds.push(feed);
    }

    pub fn feed_names(&self) -> Vec<String> {
        self.feeds.iter().map(|f| f.name().to_string()).collect()
    }

    /// Each feed's name with its CLI shorthands.
    pub fn feed_aliases(&self) -> Vec<(String, Vec<String>)> {
        self.feeds
            .iter()
            .map(|f| {
                let aliases = f.cli_names().into_iter().map(str::to_string).collect();
                (f.name().to_string(), aliases)
            })
            .collect()
    }

    fn feed_matches(&self, index: usize, name: &str) -> bool {
        let feed = &self.feeds[index];
        feed.name() == name || feed.cli_names().contains(&name)
    }

    pub fn storage(&self) -> Arc<dyn ArticleStorage> {
        self.storage.clone()
    }

    /// A copy of `article` carrying the model's relevance score and categories.
    /// Request queries are only attached to RTI-relevant articles.
    pub fn score_article(&self, article: &Article) -> Article {
        let analysis = self.model.analyze(&article.full_text());
        let mut scored = article.clone();
        scored.rti_relevance = analysis.rti_relevance;
        scored.rti_categories = analysis.categories;
        scored.rti_queries = if analysis.rti_relevance > RTI_RELEVANT_THRESHOLD {
            analysis.suggested_queries
        } else {
            Vec::new()
        };
        scored
    }

    pub async fn ingest(&self, article: &Article) -> Result<(Article, IngestStatus)> {
        let scored = self.score_article(article);

        let status = match self.storage.get_article(scored.id).await? {
            Some(existing) if existing.title == scored.title && existing.content == scored.content => {
                IngestStatus::Unchanged
            }
            Some(_) => IngestStatus::Updated,
            None => IngestStatus::New,
        };

        self.storage.store_article(&scored).await?;
        Ok((scored, status))
    }

    pub async fn refresh(&mut self) -> Result<Vec<(Article, IngestStatus)>> {
        self.refresh_matching(None).await
    }

    /// Refresh only the feeds answering to `name`, either their own name or
    /// one of their CLI shorthands. `None` refreshes every feed.
    pub async fn refresh_matching(&mut self, name: Option<&str>) -> Result<Vec<(Article, IngestStatus)>> {
        let selected: Vec<usize> = (0..self.feeds.len())
            .filter(|&index| name.map_or(true, |name| self.feed_matches(index, name)))
            .collect();
        if let (Some(name), true) = (name, selected.is_empty()) {
            return Err(Error::Feed(format!("No feed found for {}", name)));
        }

        let mut results = Vec::new();

        for index in selected {
            let name = self.feeds[index].name().to_string();
            let logger = self.logger.clone().with_prefix(format!("[{}]", name));

            let articles = match self.feeds[index].fetch_articles().await {
                Ok(articles) => articles,
                Err(e) => {
                    logger.error(&format!("Failed to fetch articles: {}", e));
                    continue;
                }
            };
            if articles.is_empty() {
                logger.warn("Feed returned no articles");
                continue;
            }
            logger.info(&format!("Fetched {} articles", articles.len()));

            for article in &articles {
                match self.ingest(article).await {
                    Ok((scored, status)) => {
                        logger.debug(&format!(
                            "{} {} ({:.0}%)",
                            status.emoji(),
                            scored.title,
                            scored.rti_relevance * 100.0
                        ));
                        results.push((scored, status));
                    }
                    Err(e) => logger.error(&format!("Failed to store article {}: {}", article.id, e)),
                }
            }
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feeds::mock::MockFeed;
    use rti_analysis::KeywordModel;
    use rti_core::{ArticleSource, ArticleStatus, RtiCategory};
    use rti_storage::MemoryStorage;
    use chrono::Utc;

    struct FailingFeed;

    #[async_trait]
    impl Feed for FailingFeed {
        fn name(&self) -> &str {
            "failing"
        }

        async fn fetch_articles(&mut self) -> Result<Vec<Article>> {
            Err(Error::Feed("upstream unavailable".to_string()))
        }
    }

    struct QuietFeed;

    #[async_trait]
    impl Feed for QuietFeed {
        fn name(&self) -> &str {
            "quiet"
        }

        async fn fetch_articles(&mut self) -> Result<Vec<Article>> {
            Ok(Vec::new())
        }
    }

    fn manager() -> FeedManager {
        FeedManager::new(Arc::new(MemoryStorage::new()), Arc::new(KeywordModel::new()))
    }

    fn article(title: &str, summary: &str) -> Article {
        Article {
            id: 1,
            title: title.to_string(),
            summary: summary.to_string(),
            content: String::new(),
            source: ArticleSource::TheHindu,
            published_at: Utc::now(),
            rti_relevance: 0.0,
            rti_categories: vec![],
            rti_queries: vec![],
            status: ArticleStatus::Pending,
        }
    }

    #[test]
    fn test_score_article_fills_relevance() {
        let scored = manager().score_article(&article(
            "Health Department Audit Reveals Equipment Shortages",
            "The state audit flagged a shortage of ventilators.",
        ));
        assert!(scored.rti_relevance > RTI_RELEVANT_THRESHOLD);
        assert!(scored.rti_categories.contains(&RtiCategory::Transparency));
        assert!(!scored.rti_queries.is_empty());
    }

    #[test]
    fn test_low_relevance_gets_no_queries() {
        let scored = manager().score_article(&article("Cricket season opens", "A sunny day at the ground."));
        assert!(scored.rti_relevance <= RTI_RELEVANT_THRESHOLD);
        assert!(scored.rti_queries.is_empty());
    }

    #[tokio::test]
    async fn test_ingest_statuses() {
        let manager = manager();
        let first = article("Water Supply Issues Plague Residential Areas", "Dry taps.");

        let (_, status) = manager.ingest(&first).await.unwrap();
        assert_eq!(status, IngestStatus::New);

        let (_, status) = manager.ingest(&first).await.unwrap();
        assert_eq!(status, IngestStatus::Unchanged);

        let mut changed = first.clone();
        changed.content = "Tankers have been dispatched.".to_string();
        let (_, status) = manager.ingest(&changed).await.unwrap();
        assert_eq!(status, IngestStatus::Updated);
    }

    #[tokio::test]
    async fn test_refresh_skips_failing_feeds() {
        let mut manager = manager();
        manager.add_feed(Box::new(FailingFeed));
        manager.add_feed(Box::new(MockFeed::with_seed(3).with_count(10)));
        assert_eq!(manager.feed_names(), vec!["failing".to_string(), "mock".to_string()]);

        let results = manager.refresh().await.unwrap();
        assert_eq!(results.len(), 10);
        assert!(results.iter().all(|(_, status)| *status == IngestStatus::New));

        let stored = manager.storage().list_articles().await.unwrap();
        assert_eq!(stored.len(), 10);
        assert!(stored.iter().all(|a| (0.0..=1.0).contains(&a.rti_relevance)));
    }

    #[tokio::test]
    async fn test_refresh_selects_feed_by_cli_name() {
        let mut manager = manager();
        manager.add_feed(Box::new(QuietFeed));
        manager.add_feed(Box::new(MockFeed::with_seed(5).with_count(3)));
        assert_eq!(
            manager.feed_aliases(),
            vec![
                ("quiet".to_string(), vec![]),
                ("mock".to_string(), vec!["mock".to_string(), "demo".to_string()]),
            ]
        );

        assert!(manager.refresh_matching(Some("quiet")).await.unwrap().is_empty());
        assert_eq!(manager.refresh_matching(Some("demo")).await.unwrap().len(), 3);
        assert!(matches!(
            manager.refresh_matching(Some("nytimes")).await,
            Err(Error::Feed(_))
        ));
    }
}
