use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("Too many requests. Try again soon.")]
    RateLimited,

    #[error("Menu source responded with {0}")]
    MenuFetch(StatusCode),

    #[error("Menu source unreachable: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Mail dispatch failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("Internal error: {0}")]
    InternalError(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            AppError::MenuFetch { .. } | AppError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            AppError::Smtp { .. } | AppError::InternalError { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.to_string()).into_response()
    }
}
