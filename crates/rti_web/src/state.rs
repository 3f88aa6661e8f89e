use std::sync::Arc;
use rti_analysis::RelevanceModel;
use rti_core::ArticleStorage;

pub struct AppState {
    pub model: Arc<dyn RelevanceModel>,
    pub storage: Arc<dyn ArticleStorage>,
}
