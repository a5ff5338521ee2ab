//! Scan endpoints: one per scan kind.
//!
//! Each handler validates the single required field, runs the analysis
//! pipeline synchronously from the caller's perspective, and returns the
//! result as JSON. The pipeline absorbs gateway and model-output failures
//! into a degraded result, so errors here mean either bad input (400) or
//! a programming defect (500).

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::domains::scanner::{
    analyze_email, analyze_link, analyze_phone, EmailScanResult, LinkScanResult, PhoneScanResult,
};
use crate::server::app::AppState;

#[derive(Debug, Deserialize)]
pub struct EmailScanRequest {
    /// Email content to analyze
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct LinkScanRequest {
    /// URL to analyze
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct PhoneScanRequest {
    /// Phone number to analyze
    pub phone: String,
}

/// Error response carrying a `detail` message, matching the shape clients
/// already expect for body-validation rejections.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            detail: detail.into(),
        }
    }

    /// Defect path: the pipeline is designed never to error, so reaching
    /// this means a programming error, reported generically.
    pub fn internal(message: impl std::fmt::Display) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: format!("Analysis failed: {message}"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

/// Analyze email content for scam indicators.
///
/// Returns a risk assessment with an explanation in senior-friendly
/// language.
pub async fn scan_email_handler(
    State(state): State<AppState>,
    Json(request): Json<EmailScanRequest>,
) -> Result<Json<EmailScanResult>, ApiError> {
    if request.text.trim().is_empty() {
        return Err(ApiError::bad_request("text must not be empty"));
    }

    tracing::info!(text_length = request.text.len(), "Email scan requested");
    let result = analyze_email(state.gateway.as_ref(), &request.text).await;
    Ok(Json(result))
}

/// Analyze a URL for potential scam indicators.
pub async fn scan_link_handler(
    State(state): State<AppState>,
    Json(request): Json<LinkScanRequest>,
) -> Result<Json<LinkScanResult>, ApiError> {
    if request.url.trim().is_empty() {
        return Err(ApiError::bad_request("url must not be empty"));
    }

    tracing::info!(url = %request.url, "Link scan requested");
    let result = analyze_link(state.gateway.as_ref(), &request.url).await;
    Ok(Json(result))
}

/// Analyze a phone number for scam indicators.
pub async fn scan_phone_handler(
    State(state): State<AppState>,
    Json(request): Json<PhoneScanRequest>,
) -> Result<Json<PhoneScanResult>, ApiError> {
    if request.phone.trim().is_empty() {
        return Err(ApiError::bad_request("phone must not be empty"));
    }

    tracing::info!("Phone scan requested");
    let result = analyze_phone(state.gateway.as_ref(), &request.phone).await;
    Ok(Json(result))
}
