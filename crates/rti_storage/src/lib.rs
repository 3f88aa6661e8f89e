use async_trait::async_trait;
use rti_core::{ArticleStorage, Error, Result};
use std::sync::Arc;
use tracing::info;

pub mod backends;

pub use backends::*;

#[async_trait]
pub trait StorageBackend: Send + Sync {
    fn get_error_message() -> &'static str;
    async fn new() -> Result<Self> where Self: Sized;
}

/// Backend names accepted by [`create_storage`].
pub const AVAILABLE_BACKENDS: &[&str] = &["memory"];

pub async fn create_storage(kind: &str) -> Result<Arc<dyn ArticleStorage>> {
    match kind.trim().to_lowercase().as_str() {
        "memory" => {
            let storage = <MemoryStorage as StorageBackend>::new().await.map_err(|e| {
                Error::Storage(format!("{}: {}", MemoryStorage::get_error_message(), e))
            })?;
            info!("💾 Using in-memory article storage");
            Ok(Arc::new(storage))
        }
        other => Err(Error::Storage(format!(
            "Unsupported storage backend: {}. Available backends: {}",
            other,
            AVAILABLE_BACKENDS.join(", ")
        ))),
    }
}

pub mod prelude {
    pub use super::backends::*;
    pub use super::{create_storage, StorageBackend};
}
