mod error;
mod http;
mod repository;
mod service;

pub use self::error::{ErrorResponse, ValidationErrorResponse};
pub use self::http::{HttpError, INTERNAL_ERROR_MESSAGE};
pub use self::repository::RepositoryError;
pub use self::service::ServiceError;
