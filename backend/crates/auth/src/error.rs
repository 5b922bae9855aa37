//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::headers::HeaderError;
use platform::password::PasswordPolicyError;
use thiserror::Error;

use crate::domain::service::token_codec::TokenError;
use crate::domain::value_object::LoginError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Why a token-bearing request was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnauthorizedReason {
    /// Bad signature, wrong algorithm, malformed or expired token
    #[error("{0}")]
    InvalidToken(#[from] TokenError),

    /// No session holds the presented refresh token
    #[error("entity not found")]
    EntityNotFound,

    /// The access token does not belong to the session's current pair
    #[error("token pair mismatch")]
    TokenPairMismatch,
}

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Login or password does not satisfy the format rules
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Login already registered
    #[error("User already exists")]
    UserAlreadyExists,

    /// Unknown login or wrong password (deliberately not distinguished)
    #[error("Invalid login or password")]
    InvalidCredentials,

    #[error("Unauthorized: {0}")]
    Unauthorized(UnauthorizedReason),

    /// Logout found no session for the access token
    #[error("Session not found")]
    SessionNotFound,

    /// Missing required header
    #[error("Missing required header: {0}")]
    MissingHeader(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidInput(_)
            | AuthError::InvalidCredentials
            | AuthError::MissingHeader(_) => ErrorKind::BadRequest,
            AuthError::UserAlreadyExists => ErrorKind::Conflict,
            // Not a JWT at all: the request itself is bad
            AuthError::Unauthorized(UnauthorizedReason::InvalidToken(TokenError::Malformed)) => {
                ErrorKind::BadRequest
            }
            AuthError::Unauthorized(_) => ErrorKind::Unauthorized,
            AuthError::SessionNotFound => ErrorKind::NotFound,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Server-side details stay in the log.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Database(_) | AuthError::Internal(_) => {
                AppError::internal("Internal server error")
            }
            AuthError::InvalidCredentials => AppError::new(self.kind(), self.to_string())
                .with_action("Check your login and password"),
            AuthError::Unauthorized(_) => {
                AppError::new(self.kind(), self.to_string()).with_action("Sign in again")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::Unauthorized(UnauthorizedReason::TokenPairMismatch) => {
                tracing::warn!("Token pair mismatch on refresh");
            }
            AuthError::Unauthorized(UnauthorizedReason::InvalidToken(
                TokenError::InvalidSignature | TokenError::UnsupportedAlgorithm(_),
            )) => {
                tracing::warn!(error = %self, "Forged or foreign token presented");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<UnauthorizedReason> for AuthError {
    fn from(reason: UnauthorizedReason) -> Self {
        AuthError::Unauthorized(reason)
    }
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Signing(msg) => AuthError::Internal(msg),
            other => AuthError::Unauthorized(UnauthorizedReason::InvalidToken(other)),
        }
    }
}

impl From<LoginError> for AuthError {
    fn from(err: LoginError) -> Self {
        AuthError::InvalidInput(err.to_string())
    }
}

impl From<PasswordPolicyError> for AuthError {
    fn from(err: PasswordPolicyError) -> Self {
        AuthError::InvalidInput(err.to_string())
    }
}

impl From<HeaderError> for AuthError {
    fn from(err: HeaderError) -> Self {
        match err {
            HeaderError::Missing(header) => AuthError::MissingHeader(header),
            HeaderError::Invalid(header) => {
                AuthError::Internal(format!("cannot encode header {header}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AuthError::InvalidInput("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AuthError::UserAlreadyExists.status_code(), StatusCode::CONFLICT);
        assert_eq!(AuthError::InvalidCredentials.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AuthError::Unauthorized(UnauthorizedReason::TokenPairMismatch).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AuthError::SessionNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AuthError::MissingHeader("X-Access-Token".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AuthError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_malformed_token_is_bad_request() {
        let err: AuthError = TokenError::Malformed.into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err: AuthError = TokenError::InvalidSignature.into();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        let err: AuthError = TokenError::Expired.into();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_token_errors_are_unauthorized() {
        let err: AuthError = TokenError::Expired.into();
        assert!(matches!(
            err,
            AuthError::Unauthorized(UnauthorizedReason::InvalidToken(TokenError::Expired))
        ));

        let err: AuthError = TokenError::Signing("bad".into()).into();
        assert!(matches!(err, AuthError::Internal(_)));
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let app = AuthError::Internal("connection refused at 10.0.0.1".into()).to_app_error();
        assert!(!app.message().contains("10.0.0.1"));
    }

    #[test]
    fn test_validation_errors_map_to_invalid_input() {
        let err: AuthError = LoginError::TooShort { min: 3, actual: 1 }.into();
        assert!(matches!(err, AuthError::InvalidInput(_)));

        let err: AuthError = PasswordPolicyError::MissingDigit.into();
        assert!(matches!(err, AuthError::InvalidInput(_)));
    }
}
