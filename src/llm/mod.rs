//! The completion capability used by the structured extractor.

pub mod errors;
pub mod gemini;

pub use errors::CompletionError;
pub use gemini::GeminiClient;

use async_trait::async_trait;

/// Prompt in, model text out.
///
/// Implementations are constructed explicitly and handed to the pipeline;
/// tests substitute a fake.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Completion: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}
