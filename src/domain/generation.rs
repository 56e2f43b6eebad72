//! Answer generator trait definition

use async_trait::async_trait;
use std::fmt::Debug;

use crate::domain::DomainError;

/// Trait for generative answer providers
///
/// Given a system instruction (which carries the retrieved context) and the
/// user's question, produces the raw response text. Parsing of that text is
/// the caller's concern.
#[async_trait]
pub trait AnswerGenerator: Send + Sync + Debug {
    /// Generate an answer for the question under the given instruction
    async fn generate(
        &self,
        system_instruction: &str,
        question: &str,
    ) -> Result<String, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}
