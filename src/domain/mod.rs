//! Domain layer - core traits and types

pub mod embedding;
pub mod error;
pub mod generation;
pub mod ingestion;
pub mod vector_store;

pub use embedding::EmbeddingProvider;
pub use error::DomainError;
pub use generation::AnswerGenerator;
pub use ingestion::{Chunk, ChunkingConfig, ChunkingStrategy, TextExtractor};
pub use vector_store::{Point, ScoredPoint, VectorStore};
