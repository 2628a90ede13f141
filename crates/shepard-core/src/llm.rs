use async_trait::async_trait;

use crate::error::Error;

/// Produces the raw text response for a composed prompt.
///
/// One request, one response; no streaming, no tool use. Tests
/// substitute a deterministic stand-in instead of calling a real
/// completion service.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, Error>;
}
