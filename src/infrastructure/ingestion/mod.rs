//! Document ingestion: extraction, chunking, and the pipeline itself

pub mod chunker;
pub mod pdf;
pub mod pipeline;

pub use chunker::SlidingWindowChunker;
pub use pdf::PdfExtractor;
pub use pipeline::{IngestionConfig, IngestionPipeline, IngestionReport};
