use axum::{
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use shared::errors::HttpError;
use std::collections::BTreeMap;
use validator::{Validate, ValidationErrors};

/// JSON body that is deserialized and then validated.
pub struct SimpleValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let path = req.uri().path().to_string();

        let axum::Json(json_value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| HttpError::BadRequest {
                message: rejection.body_text(),
                path,
            })?;

        json_value
            .validate()
            .map_err(|errors| HttpError::Validation(field_errors(&errors)))?;

        Ok(Self(json_value))
    }
}

/// Query string that is deserialized and then validated.
pub struct ValidatedQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| HttpError::BadRequest {
                message: rejection.body_text(),
                path: parts.uri.path().to_string(),
            })?;

        value
            .validate()
            .map_err(|errors| HttpError::Validation(field_errors(&errors)))?;

        Ok(Self(value))
    }
}

/// One message per field: the first rule that failed.
pub fn field_errors(errors: &ValidationErrors) -> BTreeMap<String, String> {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, field_errors)| {
            let first = field_errors.first()?;
            let message = first
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid {field}"));
            Some((field.to_string(), message))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::requests::{CreateProductRequest, FindAllProducts};

    #[test]
    fn keeps_first_message_per_field() {
        let req = CreateProductRequest {
            name: Some(" ".into()),
            price: None,
            amount: Some(-3),
            ..Default::default()
        };

        let errors = req.validate().unwrap_err();
        let map = field_errors(&errors);

        assert_eq!(map.len(), 3);
        assert_eq!(map["name"], "must not be blank");
        assert_eq!(map["price"], "must not be null");
        assert_eq!(map["amount"], "must be greater than or equal to 0");
    }

    #[test]
    fn paging_errors_are_keyed_by_parameter() {
        let errors = FindAllProducts { page: -1, size: 0 }.validate().unwrap_err();
        let map = field_errors(&errors);

        assert_eq!(map["page"], "must be greater than or equal to 0");
        assert_eq!(map["size"], "must be greater than or equal to 1");
    }
}
