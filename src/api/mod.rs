//! API layer - HTTP endpoints and shared state

pub mod ask;
pub mod health;
pub mod router;
pub mod state;
pub mod types;
pub mod upload;

pub use router::create_router;
pub use state::AppState;

#[cfg(test)]
pub mod test_support {
    //! Builds an [`AppState`] over the domain mocks for handler tests

    use std::sync::Arc;

    use super::AppState;
    use crate::domain::embedding::mock::MockEmbeddingProvider;
    use crate::domain::generation::mock::MockAnswerGenerator;
    use crate::domain::ingestion::mock::MockTextExtractor;
    use crate::domain::vector_store::mock::MockVectorStore;
    use crate::infrastructure::{
        AnswerPipeline, IngestionConfig, IngestionPipeline, RetrievalConfig, SlidingWindowChunker,
    };

    pub const TEST_COLLECTION: &str = "docs";
    pub const TEST_DIMENSIONS: usize = 16;

    /// State whose generator always answers `{"answer": "ok"}`
    pub fn create_test_state(extracted_text: &str) -> (AppState, Arc<MockVectorStore>) {
        create_test_state_with_generator(
            extracted_text,
            Arc::new(MockAnswerGenerator::with_response("{\"answer\": \"ok\"}")),
        )
    }

    /// State with a caller-provided generator, extraction fixed to the given text
    pub fn create_test_state_with_generator(
        extracted_text: &str,
        generator: Arc<MockAnswerGenerator>,
    ) -> (AppState, Arc<MockVectorStore>) {
        let store = Arc::new(MockVectorStore::with_collection(
            TEST_COLLECTION,
            TEST_DIMENSIONS,
        ));
        let embedder = Arc::new(MockEmbeddingProvider::new(TEST_DIMENSIONS));

        let ingestion = Arc::new(
            IngestionPipeline::new(
                Arc::new(MockTextExtractor::with_text(extracted_text)),
                Arc::new(SlidingWindowChunker::new()),
                embedder.clone(),
                store.clone(),
                IngestionConfig::new(TEST_COLLECTION, TEST_DIMENSIONS),
            )
            .unwrap(),
        );

        let answering = Arc::new(
            AnswerPipeline::new(
                embedder,
                store.clone(),
                generator,
                RetrievalConfig::new(TEST_COLLECTION, TEST_DIMENSIONS, 5),
            )
            .unwrap(),
        );

        let state = AppState::new(ingestion, answering, store.clone());
        (state, store)
    }

    /// Multipart request body with one field holding a fake PDF payload;
    /// returns (content-type header value, body bytes)
    pub fn multipart_body(field_name: &str, content: &[u8]) -> (String, Vec<u8>) {
        let boundary = "test-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"doc.pdf\"\r\n",
                field_name
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/pdf\r\n\r\n");
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());

        (format!("multipart/form-data; boundary={}", boundary), body)
    }
}
