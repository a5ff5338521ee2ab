//! Cheap local signals computed before prompting.
//!
//! Pure, total functions over the raw input string. They never fail and
//! never touch the network. The signals are descriptive context for the
//! model prompt plus the non-model-derived result fields; the model is
//! free to disregard them.

use url::Url;

use super::types::{LinkSignals, PhoneSignals};

/// TLDs commonly seen on freshly registered throwaway domains. A real
/// deployment would consult WHOIS instead; that is out of scope here.
const SUSPICIOUS_TLDS: [&str; 7] = [".tk", ".ml", ".ga", ".cf", ".gq", ".xyz", ".top"];

/// Premium-rate number prefixes.
const PREMIUM_RATE_PREFIXES: [&str; 2] = ["+1900", "+1976"];

/// Compute URL signals: HTTPS presence and a domain-age label derived
/// solely from the static suspicious-TLD set.
pub fn link_signals(url: &str) -> LinkSignals {
    let has_https = url.starts_with("https://");

    // Host portion of the URL; if it has no parseable host, treat the
    // whole input as the host.
    let host = Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_owned))
        .unwrap_or_else(|| url.trim().to_owned());

    let domain_age_label = if host.is_empty() {
        "Unknown"
    } else if SUSPICIOUS_TLDS.iter().any(|tld| host.ends_with(tld)) {
        "Recently registered (suspicious)"
    } else {
        "Established domain"
    };

    LinkSignals {
        has_https,
        host,
        domain_age_label,
    }
}

/// Compute phone signals: a digits-only normalization, a length sanity
/// check, and a simulated report count for known scam patterns.
pub fn phone_signals(phone: &str) -> PhoneSignals {
    let cleaned: String = phone
        .char_indices()
        .filter(|&(i, c)| c.is_ascii_digit() || (c == '+' && i == 0))
        .map(|(_, c)| c)
        .collect();

    let likely_valid_length = cleaned.len() >= 10;

    let flagged = phone.to_lowercase().contains("spam likely")
        || PREMIUM_RATE_PREFIXES
            .iter()
            .any(|prefix| phone.starts_with(prefix));
    let reports = if flagged { 5 } else { 0 };

    PhoneSignals {
        cleaned,
        likely_valid_length,
        reports,
    }
}
