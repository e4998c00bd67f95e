//! Ping Handler
//!
//! 健康检查

use axum::Json;
use serde::Serialize;

use crate::infrastructure::http::dto::ApiResponse;

/// Ping 响应
#[derive(Serialize)]
pub struct PingResponse {
    pub service: &'static str,
    pub version: &'static str,
}

/// Ping endpoint
pub async fn ping() -> Json<ApiResponse<PingResponse>> {
    Json(ApiResponse::success(PingResponse {
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    }))
}
