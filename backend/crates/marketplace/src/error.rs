//! Marketplace Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::value_objects::AdValidationError;

pub type MarketplaceResult<T> = Result<T, MarketplaceError>;

#[derive(Debug, Error)]
pub enum MarketplaceError {
    /// Body is not JSON or misses a field
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Validation failed: {0}")]
    Validation(#[from] AdValidationError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl MarketplaceError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            MarketplaceError::InvalidJson(_) | MarketplaceError::Validation(_) => {
                ErrorKind::BadRequest
            }
            MarketplaceError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn to_app_error(&self) -> AppError {
        match self {
            MarketplaceError::Database(_) => AppError::internal("Internal server error"),
            _ => AppError::bad_request(self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            MarketplaceError::Database(e) => {
                tracing::error!(error = %e, "Marketplace database error");
            }
            _ => {
                tracing::debug!(error = %self, "Rejected ad");
            }
        }
    }
}

impl IntoResponse for MarketplaceError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            MarketplaceError::InvalidJson("eof".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            MarketplaceError::from(AdValidationError::TitleLength(1)).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            MarketplaceError::Database(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_database_details_are_hidden() {
        let app = MarketplaceError::Database(sqlx::Error::PoolTimedOut).to_app_error();
        assert_eq!(app.message(), "Internal server error");
    }
}
