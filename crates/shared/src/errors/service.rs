use crate::errors::repository::RepositoryError;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("{0}")]
    NotFound(String),

    #[error("Validation failed: {0:?}")]
    Validation(BTreeMap<String, String>),
}

impl ServiceError {
    pub fn field(field: &str, message: &str) -> Self {
        let mut errors = BTreeMap::new();
        errors.insert(field.to_string(), message.to_string());
        ServiceError::Validation(errors)
    }
}
