//! Shared application state

use std::sync::Arc;

use crate::domain::VectorStore;
use crate::infrastructure::{AnswerPipeline, IngestionPipeline};

/// Application state constructed once at startup and injected into handlers.
///
/// Holds the two request pipelines plus the vector store handle used by the
/// readiness probe. Everything behind `Arc` so the state is cheap to clone
/// per request.
#[derive(Clone)]
pub struct AppState {
    pub ingestion: Arc<IngestionPipeline>,
    pub answering: Arc<AnswerPipeline>,
    pub vector_store: Arc<dyn VectorStore>,
}

impl AppState {
    /// Create the application state
    pub fn new(
        ingestion: Arc<IngestionPipeline>,
        answering: Arc<AnswerPipeline>,
        vector_store: Arc<dyn VectorStore>,
    ) -> Self {
        Self {
            ingestion,
            answering,
            vector_store,
        }
    }
}
