use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid request body: {0}")]
    Body(#[from] JsonRejection),
}

impl ApiError {
    fn info(&self) -> (StatusCode, String) {
        tracing::info!("api request error: {}", self);
        match self {
            Self::Body(rejection) => (rejection.status(), rejection.body_text()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, detail) = self.info();
        (status_code, Json(ErrorResponse { detail })).into_response()
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

/// `Json` extractor whose rejections are reported as [`ApiError`].
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);
