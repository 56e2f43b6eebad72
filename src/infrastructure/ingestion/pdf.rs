//! PDF text extraction

use crate::domain::{DomainError, TextExtractor};

/// Text extractor for PDF payloads, backed by the `pdf-extract` crate
#[derive(Debug, Clone, Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    /// Create a new PDF extractor
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PdfExtractor {
    fn extract(&self, data: &[u8]) -> Result<String, DomainError> {
        pdf_extract::extract_text_from_mem(data)
            .map_err(|e| DomainError::extraction(format!("Failed to extract PDF text: {}", e)))
    }

    fn name(&self) -> &'static str {
        "pdf"
    }
}
