//! HTTP surface: application state, router assembly, and route handlers.

pub mod app;
pub mod routes;

pub use app::{build_app, AppState};
