//! Serialization of scored articles and generated content for download.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use rti_core::{Article, Error, Result};

pub mod content;
pub mod filter;

pub use content::content_to_markdown;
pub use filter::{ExportFilter, RelevanceFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Json,
    Markdown,
}

impl ExportFormat {
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "rti-articles.csv",
            ExportFormat::Json => "rti-articles.json",
            ExportFormat::Markdown => "rti-articles.md",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
            ExportFormat::Markdown => "text/markdown",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Markdown => "markdown",
        };
        f.write_str(name)
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            other => Err(Error::InvalidInput(format!(
                "Unknown export format: {}. Expected csv, json or markdown",
                other
            ))),
        }
    }
}

pub const CSV_HEADERS: [&str; 6] = [
    "Title",
    "Source",
    "Published Date",
    "RTI Relevance",
    "Categories",
    "Status",
];

/// Render `articles` in `format`; `now` stamps the Markdown header.
pub fn export_articles(articles: &[Article], format: ExportFormat, now: DateTime<Utc>) -> Result<String> {
    debug!(count = articles.len(), %format, "Exporting articles");
    match format {
        ExportFormat::Csv => Ok(to_csv(articles)),
        ExportFormat::Json => to_json(articles),
        ExportFormat::Markdown => Ok(to_markdown(articles, now)),
    }
}

pub fn to_csv(articles: &[Article]) -> String {
    let mut lines = vec![CSV_HEADERS.join(",")];
    for article in articles {
        let row = [
            quote_csv(&article.title),
            csv_field(article.source.name()),
            article.published_at.format("%Y-%m-%d %H:%M").to_string(),
            format_relevance(article.rti_relevance),
            quote_csv(&category_list(article, "; ")),
            article.status.to_string(),
        ];
        lines.push(row.join(","));
    }
    lines.join("\n")
}

pub fn to_json(articles: &[Article]) -> Result<String> {
    Ok(serde_json::to_string_pretty(articles)?)
}

pub fn to_markdown(articles: &[Article], now: DateTime<Utc>) -> String {
    let mut sections = vec![
        "# RTI Articles Export".to_string(),
        format!("\nExported on: {}", now.format("%B %d, %Y")),
        format!("\nTotal articles: {}", articles.len()),
        "\n---\n".to_string(),
    ];

    for article in articles {
        let categories = if article.rti_categories.is_empty() {
            "None".to_string()
        } else {
            category_list(article, ", ")
        };
        sections.push(
            [
                format!("## {}", article.title),
                format!("**Source:** {}", article.source),
                format!("**Published:** {}", article.published_at.format("%B %d, %Y %H:%M")),
                format!("**RTI Relevance:** {}", format_relevance(article.rti_relevance)),
                format!("**Categories:** {}", categories),
                format!("**Status:** {}", article.status),
                String::new(),
                article.summary.clone(),
                "\n---\n".to_string(),
            ]
            .join("\n"),
        );
    }

    sections.join("\n")
}

/// Relevance as a percentage with one decimal, e.g. `85.0%`.
pub fn format_relevance(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

fn category_list(article: &Article, separator: &str) -> String {
    article
        .rti_categories
        .iter()
        .map(|c| c.label())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Always quote, doubling embedded quotes.
pub fn quote_csv(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Quote only when the value contains a delimiter, quote or line break.
pub fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        quote_csv(value)
    } else {
        value.to_string()
    }
}
