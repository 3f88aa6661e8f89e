use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// News outlets the monitor knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArticleSource {
    #[serde(rename = "The Hindu")]
    TheHindu,
    #[serde(rename = "Times of India")]
    TimesOfIndia,
}

impl ArticleSource {
    pub const ALL: [ArticleSource; 2] = [ArticleSource::TheHindu, ArticleSource::TimesOfIndia];

    pub fn name(&self) -> &'static str {
        match self {
            ArticleSource::TheHindu => "The Hindu",
            ArticleSource::TimesOfIndia => "Times of India",
        }
    }
}

impl fmt::Display for ArticleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where an article sits in the review pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    Pending,
    Processed,
    Exported,
}

impl ArticleStatus {
    pub const ALL: [ArticleStatus; 3] = [
        ArticleStatus::Pending,
        ArticleStatus::Processed,
        ArticleStatus::Exported,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Pending => "pending",
            ArticleStatus::Processed => "processed",
            ArticleStatus::Exported => "exported",
        }
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(ArticleStatus::Pending),
            "processed" => Ok(ArticleStatus::Processed),
            "exported" => Ok(ArticleStatus::Exported),
            other => Err(Error::InvalidInput(format!("unknown article status: {}", other))),
        }
    }
}

/// Category tags attached by the relevance scorer, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RtiCategory {
    #[serde(rename = "Government Entity")]
    GovernmentEntity,
    #[serde(rename = "Service Issues")]
    ServiceIssues,
    #[serde(rename = "Public Services")]
    PublicServices,
    #[serde(rename = "Transparency")]
    Transparency,
    #[serde(rename = "RTI Mentioned")]
    RtiMentioned,
    #[serde(rename = "Citizen Interest")]
    CitizenInterest,
}

impl RtiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            RtiCategory::GovernmentEntity => "Government Entity",
            RtiCategory::ServiceIssues => "Service Issues",
            RtiCategory::PublicServices => "Public Services",
            RtiCategory::Transparency => "Transparency",
            RtiCategory::RtiMentioned => "RTI Mentioned",
            RtiCategory::CitizenInterest => "Citizen Interest",
        }
    }
}

impl fmt::Display for RtiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: u64,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub source: ArticleSource,
    pub published_at: DateTime<Utc>,
    pub rti_relevance: f64,
    pub rti_categories: Vec<RtiCategory>,
    pub rti_queries: Vec<String>,
    pub status: ArticleStatus,
}

impl Article {
    /// Title, summary and body joined into the text the scorer reads.
    pub fn full_text(&self) -> String {
        format!("{}\n{}\n{}", self.title, self.summary, self.content)
    }
}

/// The slice of an article the content templater needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleBrief {
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub rti_relevance: f64,
}

impl ArticleBrief {
    pub fn new(title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            rti_relevance: 0.0,
        }
    }

    pub fn with_relevance(mut self, rti_relevance: f64) -> Self {
        self.rti_relevance = rti_relevance;
        self
    }

    /// Parse a brief from untyped JSON. A missing or non-string `title` or
    /// `summary` is invalid input; empty strings are accepted.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value)
            .map_err(|e| Error::InvalidInput(format!("invalid article brief: {}", e)))
    }
}

impl From<&Article> for ArticleBrief {
    fn from(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            summary: article.summary.clone(),
            rti_relevance: article.rti_relevance,
        }
    }
}

/// Keywords that matched in each rule group, kept for inspection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordMatches {
    pub government_entities: Vec<String>,
    pub issues: Vec<String>,
    pub services: Vec<String>,
    pub transparency_indicators: Vec<String>,
}

impl KeywordMatches {
    pub fn is_empty(&self) -> bool {
        self.government_entities.is_empty()
            && self.issues.is_empty()
            && self.services.is_empty()
            && self.transparency_indicators.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelevanceAnalysis {
    pub rti_relevance: f64,
    pub categories: Vec<RtiCategory>,
    pub suggested_queries: Vec<String>,
    pub public_authority: String,
    pub analysis: KeywordMatches,
}

impl RelevanceAnalysis {
    pub fn has_category(&self, category: RtiCategory) -> bool {
        self.categories.contains(&category)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogContent {
    pub title: String,
    pub intro: String,
    pub what_happened: String,
    pub how_rti_helps: String,
    pub rti_queries: Vec<String>,
    pub public_authority: String,
    pub cta: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialContent {
    pub twitter: String,
    pub linkedin: String,
    pub instagram: String,
}

/// Blog and social variants produced for one article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub blog: BlogContent,
    pub social: SocialContent,
}
