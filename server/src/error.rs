use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("cannot encode page seed: {0}")]
    Seed(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Seed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        error!(error = %self, "Page render failed");
        (status, self.to_string()).into_response()
    }
}
