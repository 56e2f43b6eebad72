//! docuchat
//!
//! A small retrieval-augmented-generation service: upload a PDF, have it
//! chunked, embedded via the Gemini embedding API and stored in Qdrant, then
//! ask questions answered from the retrieved chunks by the Gemini generative
//! API. A static chat page is served alongside the two endpoints.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::{AnswerGenerator, ChunkingConfig, EmbeddingProvider, VectorStore};
use infrastructure::{
    AnswerPipeline, GeminiEmbeddingProvider, GeminiGenerator, HttpClient, IngestionConfig,
    IngestionPipeline, PdfExtractor, QdrantVectorStore, RetrievalConfig, SlidingWindowChunker,
};
use tracing::info;

/// Create the application state with all pipelines initialized.
///
/// Provider handles are constructed once here and injected into the
/// pipelines, so tests can swap them for the mock implementations.
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let api_key = std::env::var("GEMINI_API_KEY")
        .map_err(|_| anyhow::anyhow!("GEMINI_API_KEY environment variable is required"))?;

    let http_client = HttpClient::new();

    let embedder: Arc<dyn EmbeddingProvider> = Arc::new(GeminiEmbeddingProvider::new(
        http_client.clone(),
        api_key.clone(),
        config.embedding.model.clone(),
        config.embedding.dimensions,
    ));

    let generator: Arc<dyn AnswerGenerator> = Arc::new(GeminiGenerator::new(
        http_client,
        api_key,
        config.generation.model.clone(),
    ));

    info!(url = %config.qdrant.url, "connecting to qdrant");
    let vector_store: Arc<dyn VectorStore> = Arc::new(QdrantVectorStore::new(&config.qdrant.url)?);

    let ingestion = Arc::new(IngestionPipeline::new(
        Arc::new(PdfExtractor::new()),
        Arc::new(SlidingWindowChunker::new()),
        Arc::clone(&embedder),
        Arc::clone(&vector_store),
        IngestionConfig::new(config.qdrant.collection.clone(), config.embedding.dimensions)
            .with_chunking(ChunkingConfig::new(
                config.ingestion.chunk_size,
                config.ingestion.chunk_overlap,
            ))
            .with_embed_concurrency(config.ingestion.embed_concurrency),
    )?);

    let answering = Arc::new(AnswerPipeline::new(
        embedder,
        Arc::clone(&vector_store),
        generator,
        RetrievalConfig::new(
            config.qdrant.collection.clone(),
            config.embedding.dimensions,
            config.retrieval.top_k,
        ),
    )?);

    Ok(AppState::new(ingestion, answering, vector_store))
}
