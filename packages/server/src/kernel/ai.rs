// Model gateway implementation backed by the Anthropic Messages API
//
// This is the infrastructure implementation of ModelGateway. Which prompts
// to send lives in the scanner domain.

use anthropic_client::AnthropicClient;
use anyhow::{Context, Result};
use async_trait::async_trait;

use super::ModelGateway;

/// Model used for all scam analysis completions.
const ANALYSIS_MODEL: &str = "claude-sonnet-4-20250514";

/// Output budget for a single analysis reply.
const MAX_TOKENS: u32 = 1024;

#[async_trait]
impl ModelGateway for AnthropicClient {
    async fn send_prompt(&self, prompt: &str) -> Result<String> {
        tracing::debug!(
            prompt_length = prompt.len(),
            model = ANALYSIS_MODEL,
            "Calling Anthropic API"
        );

        let reply = self
            .complete(ANALYSIS_MODEL, MAX_TOKENS, prompt)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    model = ANALYSIS_MODEL,
                    "Anthropic API call failed"
                );
                e
            })
            .context("Failed to call Anthropic API")?;

        tracing::debug!(
            reply_length = reply.len(),
            model = ANALYSIS_MODEL,
            "Anthropic reply received"
        );

        Ok(reply)
    }
}
