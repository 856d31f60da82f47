use crate::errors::{
    error::{ErrorResponse, ValidationErrorResponse},
    repository::RepositoryError,
    service::ServiceError,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use std::collections::BTreeMap;
use tracing::error;

pub const INTERNAL_ERROR_MESSAGE: &str = "An internal server error occurred";

#[derive(Debug)]
pub enum HttpError {
    Validation(BTreeMap<String, String>),
    BadRequest { message: String, path: String },
    NotFound { message: String, path: String },
    Internal { path: String },
}

impl HttpError {
    pub fn from_service(err: ServiceError, path: &str) -> Self {
        let path = path.to_string();

        match err {
            ServiceError::Validation(errors) => HttpError::Validation(errors),
            ServiceError::NotFound(message) => HttpError::NotFound { message, path },
            ServiceError::Repo(RepositoryError::NotFound) => HttpError::NotFound {
                message: "Not found".into(),
                path,
            },
            other => {
                error!("Unhandled service error on {path}: {other}");
                HttpError::Internal { path }
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::Validation(_) | HttpError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            HttpError::NotFound { .. } => StatusCode::NOT_FOUND,
            HttpError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let timestamp = Utc::now().naive_utc();

        let (message, path) = match self {
            HttpError::Validation(errors) => {
                let body = Json(ValidationErrorResponse {
                    status: status.as_u16(),
                    message: "Validation failed".into(),
                    timestamp,
                    errors,
                });
                return (status, body).into_response();
            }
            HttpError::BadRequest { message, path } | HttpError::NotFound { message, path } => {
                (message, path)
            }
            HttpError::Internal { path } => (INTERNAL_ERROR_MESSAGE.to_string(), path),
        };

        let body = Json(ErrorResponse {
            status: status.as_u16(),
            message,
            timestamp,
            path,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_keeps_service_message() {
        let err = HttpError::from_service(
            ServiceError::NotFound("Product with id=7 not found".into()),
            "/api/products/7",
        );

        match err {
            HttpError::NotFound { ref message, ref path } => {
                assert_eq!(message, "Product with id=7 not found");
                assert_eq!(path, "/api/products/7");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn validation_maps_to_bad_request() {
        let err = HttpError::from_service(ServiceError::field("name", "taken"), "/api/products");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn driver_errors_are_hidden_behind_500() {
        let err = HttpError::from_service(
            ServiceError::Repo(RepositoryError::Sqlx(sqlx::Error::PoolTimedOut)),
            "/api/products",
        );
        assert!(matches!(err, HttpError::Internal { .. }));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
