//! Infrastructure layer - provider implementations and pipelines

pub mod answering;
pub mod embedding;
pub mod generation;
pub mod http_client;
pub mod ingestion;
pub mod logging;
pub mod vector_store;

pub use answering::{Answer, AnswerPipeline, RetrievalConfig, HANDOFF_MESSAGE};
pub use embedding::GeminiEmbeddingProvider;
pub use generation::GeminiGenerator;
pub use http_client::{HttpClient, HttpClientTrait};
pub use ingestion::{IngestionConfig, IngestionPipeline, IngestionReport, PdfExtractor, SlidingWindowChunker};
pub use vector_store::QdrantVectorStore;
