use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::exchange::commands::ExchangeError;
use crate::listing::draft::DraftError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("상품을 찾을 수 없습니다: {0}")]
    ListingNotFound(String),

    #[error("프로필을 찾을 수 없습니다: {0}")]
    ProfileNotFound(String),

    #[error(transparent)]
    Draft(#[from] DraftError),

    #[error(transparent)]
    Exchange(#[from] ExchangeError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::ListingNotFound(_) => "LISTING_NOT_FOUND",
            AppError::ProfileNotFound(_) => "PROFILE_NOT_FOUND",
            AppError::Draft(_) => "INVALID_DRAFT",
            AppError::Exchange(e) => e.code(),
            AppError::Database(_) => "DATABASE_ERROR",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::ListingNotFound(_) | AppError::ProfileNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Draft(_) | AppError::Exchange(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut body = serde_json::json!({
            "error": self.to_string(),
            "code": self.code(),
        });
        if let AppError::Draft(DraftError::Invalid { issues }) = &self {
            body["issues"] = serde_json::json!(issues);
        }

        (self.status(), Json(body)).into_response()
    }
}
