use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use contracts::domain::a001_notification::query::FilterError;
use thiserror::Error;

/// Ошибки HTTP-обработчиков
#[derive(Debug, Error)]
pub enum AppError {
    /// Unknown `isAction` value: the page does not exist
    #[error(transparent)]
    InvalidFilter(#[from] FilterError),

    #[error("validation failed: {0}")]
    Validation(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidFilter(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!("{} -> {}", self, status);
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let err = AppError::from(FilterError::InvalidValue("maybe".into()));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "unsupported isAction value: maybe");
        assert_eq!(
            AppError::Validation("empty".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }
}
