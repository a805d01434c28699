use axum::http::StatusCode;

/// Liveness check for `GET /healthz`.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Readiness check for `GET /readyz`.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
