//! Answer pipeline: retrieve context, generate, post-process

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{AnswerGenerator, DomainError, EmbeddingProvider, VectorStore};

/// Fixed reply returned whenever the generator signals it cannot answer
pub const HANDOFF_MESSAGE: &str =
    "I'm not sure, let me connect you to a human agent for further assistance.";

/// Phrases that mark a generator response as "cannot answer", matched
/// case-insensitively against the raw response before any parsing
const FALLBACK_PHRASES: [&str; 2] = ["not sure", "connect you to a human"];

/// Configuration for the answer pipeline
#[derive(Debug, Clone)]
pub struct RetrievalConfig {
    /// Collection to search
    pub collection: String,
    /// Collection vector dimensionality; must match the embedder's output
    pub dimensions: usize,
    /// Number of nearest points to retrieve
    pub top_k: usize,
}

impl RetrievalConfig {
    /// Create a new retrieval configuration
    pub fn new(collection: impl Into<String>, dimensions: usize, top_k: usize) -> Self {
        Self {
            collection: collection.into(),
            dimensions,
            top_k,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.collection.is_empty() {
            return Err(DomainError::validation("collection name must not be empty"));
        }

        if self.dimensions == 0 {
            return Err(DomainError::validation("dimensions must be greater than 0"));
        }

        if self.top_k == 0 {
            return Err(DomainError::validation("top_k must be greater than 0"));
        }

        Ok(())
    }
}

/// The post-processed outcome of one question
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    /// The generator signalled it cannot answer; reply with [`HANDOFF_MESSAGE`]
    Handoff,
    /// Parsed structured response, returned to the client as-is
    Structured(serde_json::Value),
}

impl Answer {
    /// The JSON value to place in the response `message` field
    pub fn into_message(self) -> serde_json::Value {
        match self {
            Answer::Handoff => serde_json::Value::String(HANDOFF_MESSAGE.to_string()),
            Answer::Structured(value) => value,
        }
    }
}

/// Orchestrates one question: embed, search, assemble context, generate,
/// then scan for the fallback phrases before parsing the structured reply.
#[derive(Debug)]
pub struct AnswerPipeline {
    embedder: Arc<dyn EmbeddingProvider>,
    store: Arc<dyn VectorStore>,
    generator: Arc<dyn AnswerGenerator>,
    config: RetrievalConfig,
}

impl AnswerPipeline {
    /// Create a new answer pipeline
    pub fn new(
        embedder: Arc<dyn EmbeddingProvider>,
        store: Arc<dyn VectorStore>,
        generator: Arc<dyn AnswerGenerator>,
        config: RetrievalConfig,
    ) -> Result<Self, DomainError> {
        config.validate()?;

        Ok(Self {
            embedder,
            store,
            generator,
            config,
        })
    }

    /// Answer one user question from the stored document chunks
    pub async fn answer(&self, query: &str) -> Result<Answer, DomainError> {
        let query = query.trim();

        if query.is_empty() {
            return Err(DomainError::validation("Query is required"));
        }

        let vector = self.embedder.embed(query).await?;

        if vector.len() != self.config.dimensions {
            return Err(DomainError::configuration(format!(
                "embedding dimensionality {} does not match collection dimensionality {}",
                vector.len(),
                self.config.dimensions
            )));
        }

        let hits = self
            .store
            .search(&self.config.collection, &vector, self.config.top_k)
            .await?;

        debug!(hits = hits.len(), "retrieved context chunks");

        // Retrieved texts in rank order, newline-separated; scores are not used
        let context = hits
            .iter()
            .map(|hit| hit.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        let instruction = build_system_instruction(&context);
        let raw = self.generator.generate(&instruction, query).await?;

        if contains_fallback_phrase(&raw) {
            info!("generator could not answer, handing off");
            return Ok(Answer::Handoff);
        }

        let parsed = serde_json::from_str(&raw).map_err(|e| {
            DomainError::response_format(format!("generator returned malformed JSON: {}", e))
        })?;

        Ok(Answer::Structured(parsed))
    }
}

fn build_system_instruction(context: &str) -> String {
    format!(
        "You are a document assistant. Use the following context to answer the user's \
         question. If the answer is not in the context, say \"I'm not sure, let me connect \
         you to a human agent.\"\n\nContext:\n{}",
        context
    )
}

fn contains_fallback_phrase(text: &str) -> bool {
    let lowered = text.to_lowercase();
    FALLBACK_PHRASES.iter().any(|phrase| lowered.contains(phrase))
}
