//! Infrastructure layer: the model gateway trait and its Anthropic adapter.
//!
//! Business logic (what to prompt for, how to read replies) lives in
//! `domains::scanner`.

pub mod ai;
pub mod traits;

pub use traits::ModelGateway;
