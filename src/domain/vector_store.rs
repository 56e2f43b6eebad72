//! Vector store trait and point types

use async_trait::async_trait;
use std::fmt::Debug;

use crate::domain::DomainError;

/// The unit persisted in the vector store
#[derive(Debug, Clone)]
pub struct Point {
    /// Unique identifier, freshly generated per chunk
    pub id: String,
    /// Embedding vector; length must match the collection dimensionality
    pub vector: Vec<f32>,
    /// The chunk's original text, stored as payload for retrieval
    pub text: String,
}

impl Point {
    /// Create a new point
    pub fn new(id: impl Into<String>, vector: Vec<f32>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            vector,
            text: text.into(),
        }
    }
}

/// A point returned from a nearest-neighbor search
#[derive(Debug, Clone)]
pub struct ScoredPoint {
    pub id: String,
    pub text: String,
    pub score: f32,
}

impl ScoredPoint {
    pub fn new(id: impl Into<String>, text: impl Into<String>, score: f32) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            score,
        }
    }
}

/// Trait for vector store backends
#[async_trait]
pub trait VectorStore: Send + Sync + Debug {
    /// Create the collection if it does not exist yet.
    ///
    /// Check-then-create; a concurrent create racing the check is treated as
    /// benign by implementations.
    async fn ensure_collection(&self, name: &str, dimensions: usize) -> Result<(), DomainError>;

    /// Bulk-write points into the collection, waiting for durability
    async fn upsert(&self, collection: &str, points: Vec<Point>) -> Result<(), DomainError>;

    /// Return the top-K nearest points to the query vector, best first
    async fn search(
        &self,
        collection: &str,
        vector: &[f32],
        top_k: usize,
    ) -> Result<Vec<ScoredPoint>, DomainError>;

    /// Check that the store is reachable
    async fn health_check(&self) -> Result<bool, DomainError>;
}
