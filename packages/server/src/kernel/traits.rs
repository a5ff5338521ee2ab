// Trait definitions for dependency injection
//
// Infrastructure traits only - no business logic. Prompt construction and
// reply interpretation are domain functions that use these traits.

use anyhow::Result;
use async_trait::async_trait;

/// Boundary abstraction over the external LLM completion service.
///
/// One prompt in, raw reply text out. Failure modes (auth, network,
/// provider error, malformed provider response) are not distinguished;
/// they all surface as a single error carrying the underlying message.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Send a single-turn prompt and return the raw reply text.
    async fn send_prompt(&self, prompt: &str) -> Result<String>;
}
