use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use rti_core::{Article, Error, RelevanceBand, Result};

/// Relevance selector offered by the export screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelevanceFilter {
    #[default]
    All,
    High,
    Medium,
    Low,
}

impl RelevanceFilter {
    pub fn matches(&self, score: f64) -> bool {
        let band = RelevanceBand::from_score(score);
        match self {
            RelevanceFilter::All => true,
            RelevanceFilter::High => band == RelevanceBand::High,
            RelevanceFilter::Medium => band == RelevanceBand::Medium,
            RelevanceFilter::Low => band == RelevanceBand::Low,
        }
    }
}

impl fmt::Display for RelevanceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RelevanceFilter::All => "all",
            RelevanceFilter::High => "high",
            RelevanceFilter::Medium => "medium",
            RelevanceFilter::Low => "low",
        };
        f.write_str(name)
    }
}

impl FromStr for RelevanceFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(RelevanceFilter::All),
            "high" => Ok(RelevanceFilter::High),
            "medium" => Ok(RelevanceFilter::Medium),
            "low" => Ok(RelevanceFilter::Low),
            other => Err(Error::InvalidInput(format!(
                "Unknown relevance filter: {}. Expected all, high, medium or low",
                other
            ))),
        }
    }
}

pub const DEFAULT_EXPORT_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportFilter {
    /// Keep articles published within this many days of the export time.
    pub days: i64,
    pub relevance: RelevanceFilter,
}

impl Default for ExportFilter {
    fn default() -> Self {
        Self {
            days: DEFAULT_EXPORT_DAYS,
            relevance: RelevanceFilter::All,
        }
    }
}

impl ExportFilter {
    pub fn new(days: i64, relevance: RelevanceFilter) -> Result<Self> {
        if days <= 0 {
            return Err(Error::InvalidInput(format!("days must be positive, got {}", days)));
        }
        Ok(Self { days, relevance })
    }

    pub fn matches(&self, article: &Article, now: DateTime<Utc>) -> bool {
        let cutoff = now - Duration::days(self.days);
        article.published_at >= cutoff && self.relevance.matches(article.rti_relevance)
    }

    pub fn apply(&self, articles: &[Article], now: DateTime<Utc>) -> Vec<Article> {
        articles
            .iter()
            .filter(|a| self.matches(a, now))
            .cloned()
            .collect()
    }
}
