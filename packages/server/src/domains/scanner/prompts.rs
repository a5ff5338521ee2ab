//! Prompt templates for the three scan kinds.
//!
//! Each template embeds the raw input and the heuristic signals, targets a
//! senior/non-technical audience, and instructs the model to reply with
//! only a JSON object matching the kind-specific field list. Rendering is
//! deterministic; every model call is a single independent request.

use super::types::{LinkSignals, PhoneSignals};

/// Prompt for email body analysis. Expected reply fields:
/// risk, score, explanation, indicators.
pub fn email_prompt(email_text: &str) -> String {
    format!(
        r#"You are a scam detection expert helping seniors stay safe online. Analyze this email for scam indicators.

Email content:
{email_text}

Analyze this email and provide a response in this EXACT JSON format:
{{
    "risk": "safe" or "suspicious" or "danger",
    "score": 0-100 (0 = completely safe, 100 = definitely a scam),
    "explanation": "A clear, simple explanation in 2-3 sentences that a senior citizen can easily understand. Avoid technical jargon.",
    "indicators": ["list", "of", "specific", "red", "flags", "found"]
}}

Key things to check:
- Urgency tactics (demanding immediate action)
- Requests for personal information or money
- Poor grammar and spelling
- Suspicious sender addresses
- Too-good-to-be-true offers
- Threats or fear tactics
- Impersonation of official organizations

Respond ONLY with valid JSON. Use simple, friendly language in the explanation."#
    )
}

/// Prompt for URL analysis. Expected reply fields: risk, score, explanation.
pub fn link_prompt(url: &str, signals: &LinkSignals) -> String {
    format!(
        r#"You are a scam detection expert helping seniors stay safe online. Analyze this URL for scam indicators.

URL: {url}
Domain: {host}
Has HTTPS: {has_https}
Domain age: {domain_age}

Analyze this link and provide a response in this EXACT JSON format:
{{
    "risk": "safe" or "suspicious" or "danger",
    "score": 0-100 (0 = completely safe, 100 = definitely a scam),
    "explanation": "A clear, simple explanation in 2-3 sentences that a senior citizen can easily understand. Avoid technical jargon."
}}

Key things to check:
- Suspicious domain names (misspellings of known brands, random characters)
- Lack of HTTPS (not secure)
- URL shorteners hiding the real destination
- Unusual top-level domains (.tk, .xyz, etc.)
- URLs trying to look like legitimate companies (paypa1.com instead of paypal.com)
- Very long or obfuscated URLs

Respond ONLY with valid JSON. Use simple, friendly language in the explanation."#,
        host = signals.host,
        has_https = signals.has_https,
        domain_age = signals.domain_age_label,
    )
}

/// Prompt for phone number analysis. Expected reply fields:
/// risk, score, explanation.
pub fn phone_prompt(phone: &str, signals: &PhoneSignals) -> String {
    format!(
        r#"You are a scam detection expert helping seniors stay safe from phone scams. Analyze this phone number.

Phone number: {phone}
Cleaned format: {cleaned}
Valid format: {valid}

Analyze this phone number and provide a response in this EXACT JSON format:
{{
    "risk": "safe" or "suspicious" or "danger",
    "score": 0-100 (0 = completely safe, 100 = definitely a scam),
    "explanation": "A clear, simple explanation in 2-3 sentences that a senior citizen can easily understand. Avoid technical jargon."
}}

Key things to check:
- Spoofed or invalid numbers
- International numbers claiming to be local organizations
- Premium rate numbers (900, 976, etc.)
- Numbers associated with common scam types:
  - IRS/tax scams
  - Tech support scams
  - Prize/lottery scams
  - Social Security scams
  - Bank/credit card scams

Respond ONLY with valid JSON. Use simple, friendly language in the explanation."#,
        cleaned = signals.cleaned,
        valid = signals.likely_valid_length,
    )
}
