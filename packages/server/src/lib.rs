//! Halo Gate API server library
//!
//! Anti-scam security toolkit: forwards user-supplied email text, URLs,
//! and phone numbers to an LLM for risk classification and normalizes the
//! model's free-form reply into a fixed JSON shape.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::Config;
