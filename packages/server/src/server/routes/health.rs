use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct BannerResponse {
    message: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
}

/// Static service banner.
pub async fn root_handler() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: "Halo Gate API - Anti-Scam Security Toolkit".to_string(),
    })
}

/// Liveness check. The pipeline holds no connections or state, so being
/// able to answer at all means the service is healthy.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
