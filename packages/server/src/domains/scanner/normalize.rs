//! Normalization of free-form model replies into fixed result shapes.
//!
//! The model is asked for JSON but often wraps it in prose, so extraction
//! is best-effort: a greedy first-`{` to last-`}` substring parse, then a
//! whole-reply parse. Both stages return explicit `Option`/`Result` values
//! so the degraded fallback is an ordinary, testable branch.
//!
//! Whatever happens upstream (gateway failure, unparseable reply, bad
//! field types), these functions always return a well-formed result. The
//! degraded result deliberately reads as a cautious verdict rather than a
//! raw error, so a non-technical caller still gets usable advice.

use anyhow::{anyhow, Result};
use serde_json::Value;

use super::types::{EmailScanResult, LinkScanResult, LinkSignals, PhoneScanResult, PhoneSignals, Risk};

/// Locate and parse a JSON object within a free-form reply.
///
/// Tries the greedy first-`{` to last-`}` substring first (tolerating
/// leading and trailing prose), then the whole reply. Only objects count;
/// a reply that parses to a bare number or string is a miss.
pub fn extract_json(reply: &str) -> Option<Value> {
    if let (Some(start), Some(end)) = (reply.find('{'), reply.rfind('}')) {
        if start < end {
            if let Ok(value) = serde_json::from_str::<Value>(&reply[start..=end]) {
                if value.is_object() {
                    return Some(value);
                }
            }
        }
    }

    serde_json::from_str::<Value>(reply.trim())
        .ok()
        .filter(Value::is_object)
}

/// Read the risk label, defaulting to `Suspicious` when the field is
/// missing, non-string, or not one of the three known labels.
fn read_risk(value: &Value) -> Risk {
    value
        .get("risk")
        .and_then(Value::as_str)
        .and_then(Risk::parse)
        .unwrap_or(Risk::Suspicious)
}

/// Coerce the score to an integer clamped to [0, 100].
///
/// Missing field defaults to 50. A present but non-numeric value is a
/// coercion failure, which callers treat as a normalization failure.
fn read_score(value: &Value) -> Result<u8> {
    let Some(raw) = value.get("score") else {
        return Ok(50);
    };

    let score = if let Some(n) = raw.as_i64() {
        n
    } else if let Some(f) = raw.as_f64() {
        f as i64
    } else if let Some(s) = raw.as_str() {
        s.trim()
            .parse::<i64>()
            .map_err(|_| anyhow!("score {s:?} is not a number"))?
    } else {
        return Err(anyhow!("score field is not a number"));
    };

    Ok(score.clamp(0, 100) as u8)
}

fn read_explanation(value: &Value, default: &str) -> String {
    value
        .get("explanation")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(default)
        .to_owned()
}

/// String elements of the indicators array; anything else yields an empty
/// list, never an absent field.
fn read_indicators(value: &Value) -> Vec<String> {
    value
        .get("indicators")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

fn email_from_reply(reply: &str) -> Result<EmailScanResult> {
    let value = extract_json(reply).ok_or_else(|| anyhow!("model reply was not valid JSON"))?;
    Ok(EmailScanResult {
        risk: read_risk(&value),
        score: read_score(&value)?,
        explanation: read_explanation(&value, "Unable to fully analyze this email."),
        indicators: read_indicators(&value),
    })
}

fn link_from_reply(reply: &str, signals: &LinkSignals) -> Result<LinkScanResult> {
    let value = extract_json(reply).ok_or_else(|| anyhow!("model reply was not valid JSON"))?;
    Ok(LinkScanResult {
        risk: read_risk(&value),
        score: read_score(&value)?,
        explanation: read_explanation(&value, "Unable to fully analyze this link."),
        domain_age: signals.domain_age_label.to_owned(),
        ssl_valid: signals.has_https,
    })
}

fn phone_from_reply(reply: &str, signals: &PhoneSignals) -> Result<PhoneScanResult> {
    let value = extract_json(reply).ok_or_else(|| anyhow!("model reply was not valid JSON"))?;
    Ok(PhoneScanResult {
        risk: read_risk(&value),
        score: read_score(&value)?,
        explanation: read_explanation(&value, "Unable to fully analyze this phone number."),
        reports: signals.reports,
    })
}

/// Normalize an email-scan gateway outcome; never fails.
pub fn normalize_email(outcome: Result<String>) -> EmailScanResult {
    match outcome.and_then(|reply| email_from_reply(&reply)) {
        Ok(result) => result,
        Err(e) => EmailScanResult {
            risk: Risk::Suspicious,
            score: 50,
            explanation: format!(
                "We couldn't complete the analysis, but please be cautious with this email. Error: {e:#}"
            ),
            indicators: vec!["Analysis incomplete".to_owned()],
        },
    }
}

/// Normalize a link-scan gateway outcome; never fails.
pub fn normalize_link(outcome: Result<String>, signals: &LinkSignals) -> LinkScanResult {
    match outcome.and_then(|reply| link_from_reply(&reply, signals)) {
        Ok(result) => result,
        Err(e) => LinkScanResult {
            risk: Risk::Suspicious,
            score: 50,
            explanation: format!(
                "We couldn't complete the analysis, but please be cautious with this link. Error: {e:#}"
            ),
            domain_age: signals.domain_age_label.to_owned(),
            ssl_valid: signals.has_https,
        },
    }
}

/// Normalize a phone-scan gateway outcome; never fails.
pub fn normalize_phone(outcome: Result<String>, signals: &PhoneSignals) -> PhoneScanResult {
    match outcome.and_then(|reply| phone_from_reply(&reply, signals)) {
        Ok(result) => result,
        Err(e) => PhoneScanResult {
            risk: Risk::Suspicious,
            score: 50,
            explanation: format!(
                "We couldn't complete the analysis, but please be cautious with calls from this number. Error: {e:#}"
            ),
            reports: signals.reports,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::scanner::heuristics::{link_signals, phone_signals};

    #[test]
    fn test_extract_json_ignores_surrounding_prose() {
        let reply = "Sure! Here you go: {\"risk\":\"safe\",\"score\":3,\"explanation\":\"ok\"}  Hope that helps!";
        let value = extract_json(reply).expect("embedded object should parse");
        assert_eq!(value["risk"], "safe");
        assert_eq!(value["score"], 3);
    }

    #[test]
    fn test_extract_json_whole_reply() {
        let value = extract_json("  {\"risk\": \"danger\"}  ").unwrap();
        assert_eq!(value["risk"], "danger");
    }

    #[test]
    fn test_extract_json_rejects_non_objects() {
        assert!(extract_json("42").is_none());
        assert!(extract_json("\"risk\"").is_none());
        assert!(extract_json("no json here").is_none());
    }

    #[test]
    fn test_extract_json_nested_braces() {
        // The greedy span covers nested objects in one pass
        let reply = "prefix {\"a\": {\"b\": 1}} suffix";
        let value = extract_json(reply).unwrap();
        assert_eq!(value["a"]["b"], 1);
    }

    #[test]
    fn test_email_fields_pass_through() {
        let reply = r#"{"risk":"danger","score":95,"explanation":"This is a scam.","indicators":["urgency","asks for money"]}"#;
        let result = normalize_email(Ok(reply.to_owned()));
        assert_eq!(result.risk, Risk::Danger);
        assert_eq!(result.score, 95);
        assert_eq!(result.explanation, "This is a scam.");
        assert_eq!(result.indicators, vec!["urgency", "asks for money"]);
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let result = normalize_email(Ok("{}".to_owned()));
        assert_eq!(result.risk, Risk::Suspicious);
        assert_eq!(result.score, 50);
        assert_eq!(result.explanation, "Unable to fully analyze this email.");
        assert!(result.indicators.is_empty());
    }

    #[test]
    fn test_invalid_risk_label_defaults_to_suspicious() {
        let result = normalize_email(Ok(r#"{"risk":"danger!","score":10}"#.to_owned()));
        assert_eq!(result.risk, Risk::Suspicious);
        assert_eq!(result.score, 10);
    }

    #[test]
    fn test_out_of_range_scores_are_clamped() {
        let high = normalize_email(Ok(r#"{"score": 250}"#.to_owned()));
        assert_eq!(high.score, 100);
        let low = normalize_email(Ok(r#"{"score": -3}"#.to_owned()));
        assert_eq!(low.score, 0);
    }

    #[test]
    fn test_numeric_string_score_is_coerced() {
        let result = normalize_email(Ok(r#"{"score": "95"}"#.to_owned()));
        assert_eq!(result.score, 95);
    }

    #[test]
    fn test_non_numeric_score_routes_to_degraded_result() {
        let result = normalize_email(Ok(r#"{"risk":"safe","score":"high"}"#.to_owned()));
        assert_eq!(result.risk, Risk::Suspicious);
        assert_eq!(result.score, 50);
        assert_eq!(result.indicators, vec!["Analysis incomplete"]);
        assert!(result.explanation.contains("We couldn't complete the analysis"));
    }

    #[test]
    fn test_gateway_failure_degrades_email_result() {
        let result = normalize_email(Err(anyhow!("connection refused")));
        assert_eq!(result.risk, Risk::Suspicious);
        assert_eq!(result.score, 50);
        assert_eq!(result.indicators, vec!["Analysis incomplete"]);
        assert!(result.explanation.contains("connection refused"));
        assert!(result
            .explanation
            .contains("please be cautious with this email"));
    }

    #[test]
    fn test_link_heuristic_fields_never_come_from_model() {
        let signals = link_signals("http://free-prize.xyz/claim");
        // Model tries to claim the link is old and secure; we ignore it
        let reply = r#"{"risk":"safe","score":1,"explanation":"ok","domain_age":"20 years","ssl_valid":true}"#;
        let result = normalize_link(Ok(reply.to_owned()), &signals);
        assert_eq!(result.domain_age, "Recently registered (suspicious)");
        assert!(!result.ssl_valid);
        assert_eq!(result.risk, Risk::Safe);
    }

    #[test]
    fn test_gateway_failure_degrades_link_result() {
        let signals = link_signals("https://example.com");
        let result = normalize_link(Err(anyhow!("timeout")), &signals);
        assert_eq!(result.risk, Risk::Suspicious);
        assert_eq!(result.score, 50);
        assert_eq!(result.domain_age, "Established domain");
        assert!(result.ssl_valid);
        assert!(result.explanation.contains("timeout"));
    }

    #[test]
    fn test_phone_reports_come_from_heuristics() {
        let signals = phone_signals("+1900-555-0100");
        let reply = r#"{"risk":"danger","score":90,"explanation":"Premium rate number.","reports":9000}"#;
        let result = normalize_phone(Ok(reply.to_owned()), &signals);
        assert_eq!(result.reports, 5);
        assert_eq!(result.score, 90);
    }

    #[test]
    fn test_unparseable_reply_degrades_phone_result() {
        let signals = phone_signals("+15551234567");
        let result = normalize_phone(Ok("I can't answer that.".to_owned()), &signals);
        assert_eq!(result.risk, Risk::Suspicious);
        assert_eq!(result.score, 50);
        assert_eq!(result.reports, 0);
        assert!(result
            .explanation
            .contains("please be cautious with calls from this number"));
    }
}
