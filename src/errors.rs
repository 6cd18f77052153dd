use actix_multipart::MultipartError;
use actix_web::error::BlockingError;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use diesel::r2d2::PoolError;
use thiserror::Error;

pub type AppResult<T> = std::result::Result<T, AppError>;

/// Every failure a request can run into, mapped onto an HTTP response.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing ID")]
    MissingId,

    #[error("The monster with ID = {0} not found.")]
    MonsterNotFound(i32),

    #[error("The battle with ID = {0} not found.")]
    BattleNotFound(i32),

    #[error("{0}")]
    InvalidMonster(String),

    #[error("Wrong data mapping.")]
    WrongDataMapping,

    #[error("{0}")]
    BadRequest(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("connection pool error: {0}")]
    Pool(#[from] PoolError),

    #[error("migration error: {0}")]
    Migration(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("blocking task was cancelled")]
    Blocking(#[from] BlockingError),
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingId
            | AppError::InvalidMonster(_)
            | AppError::WrongDataMapping
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MonsterNotFound(_) | AppError::BattleNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Config(_)
            | AppError::Database(_)
            | AppError::Pool(_)
            | AppError::Migration(_)
            | AppError::Io(_)
            | AppError::Blocking(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            return HttpResponse::build(status).json("An internal server error occurred.");
        }

        tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        HttpResponse::build(status).json(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_keep_their_message() {
        assert_eq!(AppError::MissingId.to_string(), "Missing ID");
        assert_eq!(
            AppError::BattleNotFound(123).to_string(),
            "The battle with ID = 123 not found."
        );
        assert_eq!(
            AppError::MonsterNotFound(7).to_string(),
            "The monster with ID = 7 not found."
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::MissingId.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::WrongDataMapping.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::BattleNotFound(1).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Database(diesel::result::Error::NotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
