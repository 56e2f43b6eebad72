//! Application configuration loading

mod app_config;

pub use app_config::{
    AppConfig, EmbeddingConfig, GenerationConfig, IngestionSettings, LogFormat, LoggingConfig,
    QdrantConfig, RetrievalSettings, ServerConfig,
};
