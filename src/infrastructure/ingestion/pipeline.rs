//! Ingestion pipeline: extract, chunk, embed, store

use std::sync::Arc;

use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::{
    ChunkingConfig, ChunkingStrategy, DomainError, EmbeddingProvider, Point, TextExtractor,
    VectorStore,
};

/// Configuration for the ingestion pipeline
#[derive(Debug, Clone)]
pub struct IngestionConfig {
    /// Target collection name
    pub collection: String,
    /// Collection vector dimensionality; must match the embedder's output
    pub dimensions: usize,
    /// Chunking window configuration
    pub chunking: ChunkingConfig,
    /// Maximum number of in-flight embedding calls per document
    pub embed_concurrency: usize,
}

impl IngestionConfig {
    /// Create a new configuration with default chunking and concurrency
    pub fn new(collection: impl Into<String>, dimensions: usize) -> Self {
        Self {
            collection: collection.into(),
            dimensions,
            chunking: ChunkingConfig::default(),
            embed_concurrency: 8,
        }
    }

    /// Set the chunking configuration
    pub fn with_chunking(mut self, chunking: ChunkingConfig) -> Self {
        self.chunking = chunking;
        self
    }

    /// Set the embedding concurrency limit
    pub fn with_embed_concurrency(mut self, embed_concurrency: usize) -> Self {
        self.embed_concurrency = embed_concurrency;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.collection.is_empty() {
            return Err(DomainError::validation("collection name must not be empty"));
        }

        if self.dimensions == 0 {
            return Err(DomainError::validation("dimensions must be greater than 0"));
        }

        if self.embed_concurrency == 0 {
            return Err(DomainError::validation(
                "embed_concurrency must be greater than 0",
            ));
        }

        self.chunking.validate()
    }
}

/// Outcome of a successful ingestion
#[derive(Debug, Clone)]
pub struct IngestionReport {
    /// Number of points written to the collection
    pub chunks_ingested: usize,
}

/// Orchestrates one document's journey from upload payload to stored points.
///
/// Every step is a hard dependency on the previous one; the first failure
/// aborts the whole request and nothing written earlier is rolled back
/// (the single bulk upsert at the end keeps that window closed in practice).
#[derive(Debug)]
pub struct IngestionPipeline {
    extractor: Arc<dyn TextExtractor>,
    chunker: Arc<dyn ChunkingStrategy>,
    embedder: Arc<dyn EmbeddingProvider>,
    store: Arc<dyn VectorStore>,
    config: IngestionConfig,
}

impl IngestionPipeline {
    /// Create a new ingestion pipeline
    pub fn new(
        extractor: Arc<dyn TextExtractor>,
        chunker: Arc<dyn ChunkingStrategy>,
        embedder: Arc<dyn EmbeddingProvider>,
        store: Arc<dyn VectorStore>,
        config: IngestionConfig,
    ) -> Result<Self, DomainError> {
        config.validate()?;

        Ok(Self {
            extractor,
            chunker,
            embedder,
            store,
            config,
        })
    }

    /// Ingest one uploaded document payload
    pub async fn ingest(&self, payload: &[u8]) -> Result<IngestionReport, DomainError> {
        self.store
            .ensure_collection(&self.config.collection, self.config.dimensions)
            .await?;

        let text = self.extractor.extract(payload)?;
        let chunks = self.chunker.chunk(&text, &self.config.chunking)?;

        if chunks.is_empty() {
            info!(collection = %self.config.collection, "document produced no chunks");
            return Ok(IngestionReport { chunks_ingested: 0 });
        }

        debug!(chunks = chunks.len(), "embedding document chunks");

        let dimensions = self.config.dimensions;
        let points: Vec<Point> = stream::iter(chunks.into_iter().map(|chunk| {
            let embedder = Arc::clone(&self.embedder);
            async move {
                let vector = embedder.embed(&chunk.content).await?;

                if vector.len() != dimensions {
                    return Err(DomainError::configuration(format!(
                        "embedding dimensionality {} does not match collection dimensionality {}",
                        vector.len(),
                        dimensions
                    )));
                }

                Ok(Point::new(Uuid::new_v4().to_string(), vector, chunk.content))
            }
        }))
        .buffered(self.config.embed_concurrency)
        .try_collect()
        .await?;

        let chunks_ingested = points.len();
        self.store.upsert(&self.config.collection, points).await?;

        info!(
            collection = %self.config.collection,
            points = chunks_ingested,
            "document ingested"
        );

        Ok(IngestionReport { chunks_ingested })
    }
}
