use std::fmt;
use std::sync::Arc;

use rti_core::{Error, RelevanceAnalysis, Result};
use tracing::debug;

use crate::scorer;

/// A scorer that maps article text to an RTI relevance analysis.
pub trait RelevanceModel: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    fn analyze(&self, text: &str) -> RelevanceAnalysis;
}

/// The rule-based keyword scorer.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordModel;

impl KeywordModel {
    pub fn new() -> Self {
        Self
    }
}

impl RelevanceModel for KeywordModel {
    fn name(&self) -> &str {
        "keyword"
    }

    fn analyze(&self, text: &str) -> RelevanceAnalysis {
        let analysis = scorer::analyze(text);
        debug!(
            score = analysis.rti_relevance,
            categories = analysis.categories.len(),
            "Scored {} characters",
            text.len()
        );
        analysis
    }
}

pub fn create_model(name: &str) -> Result<Arc<dyn RelevanceModel>> {
    match name.trim().to_lowercase().as_str() {
        "keyword" | "keywords" | "default" => Ok(Arc::new(KeywordModel::new())),
        other => Err(Error::InvalidInput(format!(
            "Unknown relevance model: {}. Available models: keyword",
            other
        ))),
    }
}
