//! Dashboard aggregates over scored articles.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Article, ArticleSource, ArticleStatus};

/// Lower bound of the "High" relevance band.
pub const HIGH_RELEVANCE: f64 = 0.8;
/// Lower bound of the "Medium" relevance band.
pub const MEDIUM_RELEVANCE: f64 = 0.6;
/// Articles scoring strictly above this count as RTI relevant.
pub const RTI_RELEVANT_THRESHOLD: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelevanceBand {
    High,
    Medium,
    Low,
}

impl RelevanceBand {
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_RELEVANCE {
            RelevanceBand::High
        } else if score >= MEDIUM_RELEVANCE {
            RelevanceBand::Medium
        } else {
            RelevanceBand::Low
        }
    }
}

impl fmt::Display for RelevanceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RelevanceBand::High => "High",
            RelevanceBand::Medium => "Medium",
            RelevanceBand::Low => "Low",
        };
        f.write_str(label)
    }
}

pub fn is_rti_relevant(article: &Article) -> bool {
    article.rti_relevance > RTI_RELEVANT_THRESHOLD
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_articles: usize,
    pub rti_relevant: usize,
    pub pending: usize,
    pub processed: usize,
    pub exported: usize,
}

impl DashboardStats {
    pub fn from_articles(articles: &[Article]) -> Self {
        let count_status = |status: ArticleStatus| {
            articles.iter().filter(|a| a.status == status).count()
        };

        Self {
            total_articles: articles.len(),
            rti_relevant: articles.iter().filter(|a| is_rti_relevant(a)).count(),
            pending: count_status(ArticleStatus::Pending),
            processed: count_status(ArticleStatus::Processed),
            exported: count_status(ArticleStatus::Exported),
        }
    }
}

/// Per-outlet activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceStats {
    pub source: ArticleSource,
    pub articles: usize,
    pub rti_relevant: usize,
    /// Percentage of the outlet's articles that are RTI relevant.
    pub relevance_rate: f64,
}

impl SourceStats {
    pub fn for_source(source: ArticleSource, articles: &[Article]) -> Self {
        let from_source: Vec<&Article> = articles.iter().filter(|a| a.source == source).collect();
        let rti_relevant = from_source.iter().filter(|a| is_rti_relevant(a)).count();
        let relevance_rate = if from_source.is_empty() {
            0.0
        } else {
            rti_relevant as f64 / from_source.len() as f64 * 100.0
        };

        Self {
            source,
            articles: from_source.len(),
            rti_relevant,
            relevance_rate,
        }
    }

    pub fn all(articles: &[Article]) -> Vec<Self> {
        ArticleSource::ALL
            .iter()
            .map(|source| Self::for_source(*source, articles))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn article(id: u64, source: ArticleSource, relevance: f64, status: ArticleStatus) -> Article {
        Article {
            id,
            title: format!("Article {}", id),
            summary: String::new(),
            content: String::new(),
            source,
            published_at: Utc::now(),
            rti_relevance: relevance,
            rti_categories: vec![],
            rti_queries: vec![],
            status,
        }
    }

    #[test]
    fn test_relevance_band_thresholds() {
        assert_eq!(RelevanceBand::from_score(0.95), RelevanceBand::High);
        assert_eq!(RelevanceBand::from_score(0.8), RelevanceBand::High);
        assert_eq!(RelevanceBand::from_score(0.79), RelevanceBand::Medium);
        assert_eq!(RelevanceBand::from_score(0.6), RelevanceBand::Medium);
        assert_eq!(RelevanceBand::from_score(0.59), RelevanceBand::Low);
        assert_eq!(RelevanceBand::from_score(0.0), RelevanceBand::Low);
    }

    #[test]
    fn test_dashboard_stats() {
        let articles = vec![
            article(1, ArticleSource::TheHindu, 0.9, ArticleStatus::Pending),
            article(2, ArticleSource::TheHindu, 0.6, ArticleStatus::Processed),
            article(3, ArticleSource::TimesOfIndia, 0.7, ArticleStatus::Processed),
            article(4, ArticleSource::TimesOfIndia, 0.1, ArticleStatus::Exported),
        ];

        let stats = DashboardStats::from_articles(&articles);
        assert_eq!(stats.total_articles, 4);
        // 0.6 is not strictly above the threshold
        assert_eq!(stats.rti_relevant, 2);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.processed, 2);
        assert_eq!(stats.exported, 1);
    }

    #[test]
    fn test_source_stats() {
        let articles = vec![
            article(1, ArticleSource::TheHindu, 0.9, ArticleStatus::Pending),
            article(2, ArticleSource::TheHindu, 0.2, ArticleStatus::Pending),
        ];

        let stats = SourceStats::all(&articles);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].source, ArticleSource::TheHindu);
        assert_eq!(stats[0].articles, 2);
        assert_eq!(stats[0].rti_relevant, 1);
        assert!((stats[0].relevance_rate - 50.0).abs() < 1e-9);
        assert_eq!(stats[1].articles, 0);
        assert_eq!(stats[1].relevance_rate, 0.0);
    }
}
