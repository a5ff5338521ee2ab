//! Scam analysis pipeline: heuristics -> prompt -> model -> normalization.
//!
//! Everything in this module is request-scoped and stateless. The only
//! fallible step is the model call, and `normalize` absorbs that failure
//! into a fixed degraded result, so the pipeline as a whole never errors.

pub mod analyzer;
pub mod heuristics;
pub mod normalize;
pub mod prompts;
pub mod types;

pub use analyzer::{analyze_email, analyze_link, analyze_phone};
pub use types::{EmailScanResult, LinkScanResult, LinkSignals, PhoneScanResult, PhoneSignals, Risk};
