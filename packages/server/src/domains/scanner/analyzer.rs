//! Pipeline orchestration: signals -> prompt -> gateway -> normalize.
//!
//! Each function makes exactly one model call with no retry; normalization
//! absorbs every failure, so these functions are infallible.

use crate::kernel::ModelGateway;

use super::heuristics::{link_signals, phone_signals};
use super::normalize::{normalize_email, normalize_link, normalize_phone};
use super::prompts::{email_prompt, link_prompt, phone_prompt};
use super::types::{EmailScanResult, LinkScanResult, PhoneScanResult};

/// Analyze email content for scam indicators.
pub async fn analyze_email(gateway: &dyn ModelGateway, email_text: &str) -> EmailScanResult {
    let prompt = email_prompt(email_text);
    let outcome = gateway.send_prompt(&prompt).await;
    normalize_email(outcome)
}

/// Analyze a URL for scam indicators.
pub async fn analyze_link(gateway: &dyn ModelGateway, url: &str) -> LinkScanResult {
    let signals = link_signals(url);
    let prompt = link_prompt(url, &signals);
    let outcome = gateway.send_prompt(&prompt).await;
    normalize_link(outcome, &signals)
}

/// Analyze a phone number for scam indicators.
pub async fn analyze_phone(gateway: &dyn ModelGateway, phone: &str) -> PhoneScanResult {
    let signals = phone_signals(phone);
    let prompt = phone_prompt(phone, &signals);
    let outcome = gateway.send_prompt(&prompt).await;
    normalize_phone(outcome, &signals)
}
