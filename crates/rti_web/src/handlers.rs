use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use rti_analysis::generate_content as generate_for_brief;
use rti_core::{
    Article, ArticleBrief, ArticleStatus, DashboardStats, Error, GeneratedContent,
    RelevanceAnalysis, SourceStats,
};
use rti_export::{export_articles, ExportFilter, ExportFormat, RelevanceFilter};

use crate::error::ApiError;
use crate::AppState;

type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Default, Deserialize)]
pub struct ArticleQuery {
    pub relevance: Option<String>,
    pub days: Option<i64>,
    pub status: Option<String>,
}

impl ArticleQuery {
    fn filter(&self) -> rti_core::Result<Option<ExportFilter>> {
        if self.relevance.is_none() && self.days.is_none() {
            return Ok(None);
        }
        build_filter(self.relevance.as_deref(), self.days).map(Some)
    }
}

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    pub format: Option<String>,
    pub relevance: Option<String>,
    pub days: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub dashboard: DashboardStats,
    pub sources: Vec<SourceStats>,
}

fn build_filter(relevance: Option<&str>, days: Option<i64>) -> rti_core::Result<ExportFilter> {
    let relevance = match relevance {
        Some(value) => value.parse::<RelevanceFilter>()?,
        None => RelevanceFilter::All,
    };
    ExportFilter::new(days.unwrap_or(rti_export::filter::DEFAULT_EXPORT_DAYS), relevance)
}

async fn find_article(state: &AppState, id: u64) -> ApiResult<Article> {
    state
        .storage
        .get_article(id)
        .await?
        .ok_or_else(|| ApiError(Error::NotFound(format!("article {}", id))))
}

pub async fn list_articles(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ArticleQuery>,
) -> ApiResult<Json<Vec<Article>>> {
    let articles = state.storage.list_articles().await?;
    let mut articles = match query.filter()? {
        Some(filter) => filter.apply(&articles, Utc::now()),
        None => articles,
    };
    if let Some(status) = query.status.as_deref() {
        let status = status.parse::<ArticleStatus>()?;
        articles.retain(|article| article.status == status);
    }
    Ok(Json(articles))
}

pub async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> ApiResult<Json<Article>> {
    Ok(Json(find_article(&state, id).await?))
}

pub async fn get_article_content(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> ApiResult<Json<GeneratedContent>> {
    let article = find_article(&state, id).await?;
    Ok(Json(generate_for_brief(&ArticleBrief::from(&article))))
}

pub async fn analyze_text(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeRequest>,
) -> ApiResult<Json<RelevanceAnalysis>> {
    let text = request
        .text
        .ok_or_else(|| ApiError(Error::InvalidInput("text is required".to_string())))?;
    Ok(Json(state.model.analyze(&text)))
}

pub async fn generate_content(
    Json(body): Json<serde_json::Value>,
) -> ApiResult<Json<GeneratedContent>> {
    let brief = ArticleBrief::from_value(body)?;
    Ok(Json(generate_for_brief(&brief)))
}

pub async fn get_stats(State(state): State<Arc<AppState>>) -> ApiResult<Json<StatsResponse>> {
    let articles = state.storage.list_articles().await?;
    Ok(Json(StatsResponse {
        dashboard: DashboardStats::from_articles(&articles),
        sources: SourceStats::all(&articles),
    }))
}

pub async fn export(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ExportQuery>,
) -> ApiResult<impl IntoResponse> {
    let format = match query.format.as_deref() {
        Some(value) => value.parse::<ExportFormat>()?,
        None => ExportFormat::Csv,
    };
    let filter = build_filter(query.relevance.as_deref(), query.days)?;

    let now = Utc::now();
    let articles = filter.apply(&state.storage.list_articles().await?, now);
    let body = export_articles(&articles, format, now)?;

    for article in &articles {
        state.storage.set_status(article.id, ArticleStatus::Exported).await?;
    }
    info!("📦 Exported {} articles as {}", articles.len(), format);

    Ok((
        [
            (header::CONTENT_TYPE, format.mime_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", format.file_name()),
            ),
        ],
        body,
    ))
}
