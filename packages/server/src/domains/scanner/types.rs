//! Request-scoped value types for the scam analysis pipeline.

use serde::{Deserialize, Serialize};

/// Risk verdict shown to the end user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Risk {
    Safe,
    Suspicious,
    Danger,
}

impl Risk {
    /// Parse one of the three enumerated labels. Anything else is `None`;
    /// callers default to `Suspicious`.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "safe" => Some(Risk::Safe),
            "suspicious" => Some(Risk::Suspicious),
            "danger" => Some(Risk::Danger),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Risk::Safe => "safe",
            Risk::Suspicious => "suspicious",
            Risk::Danger => "danger",
        }
    }
}

/// Locally computed facts about a URL, derived before prompting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSignals {
    /// Input starts with the literal "https://" prefix
    pub has_https: bool,
    /// Host portion of the URL, or the whole input if it has no parseable host
    pub host: String,
    /// One of "Recently registered (suspicious)", "Established domain", "Unknown"
    pub domain_age_label: &'static str,
}

/// Locally computed facts about a phone number, derived before prompting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneSignals {
    /// Input with everything but digits and a leading '+' removed
    pub cleaned: String,
    /// Cleaned form is at least 10 characters
    pub likely_valid_length: bool,
    /// Simulated report count: 5 for known scam patterns, 0 otherwise
    pub reports: u32,
}

/// Analysis result for an email scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailScanResult {
    pub risk: Risk,
    pub score: u8,
    pub explanation: String,
    pub indicators: Vec<String>,
}

/// Analysis result for a link scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkScanResult {
    pub risk: Risk,
    pub score: u8,
    pub explanation: String,
    pub domain_age: String,
    pub ssl_valid: bool,
}

/// Analysis result for a phone scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneScanResult {
    pub risk: Risk,
    pub score: u8,
    pub explanation: String,
    pub reports: u32,
}
