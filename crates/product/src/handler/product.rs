use crate::{
    abstract_trait::product::service::{DynProductCommandService, DynProductQueryService},
    domain::requests::{CreateProductRequest, FindAllProducts},
    middleware::validate::{SimpleValidatedJson, ValidatedQuery},
    state::AppState,
};
use axum::{
    Json, Router,
    extract::{Extension, Path, rejection::PathRejection},
    http::{StatusCode, Uri},
    response::IntoResponse,
    routing::get,
};
use shared::errors::HttpError;
use std::sync::Arc;

pub async fn get_products(
    Extension(service): Extension<DynProductQueryService>,
    uri: Uri,
    ValidatedQuery(params): ValidatedQuery<FindAllProducts>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service
        .find_all(&params)
        .await
        .map_err(|e| HttpError::from_service(e, uri.path()))?;

    Ok((StatusCode::OK, Json(response)))
}

pub async fn get_product(
    Extension(service): Extension<DynProductQueryService>,
    uri: Uri,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let Path(id) = id.map_err(|rejection| HttpError::BadRequest {
        message: rejection.body_text(),
        path: uri.path().to_string(),
    })?;

    let response = service
        .find_by_id(id)
        .await
        .map_err(|e| HttpError::from_service(e, uri.path()))?;

    Ok((StatusCode::OK, Json(response)))
}

pub async fn create_product(
    Extension(service): Extension<DynProductCommandService>,
    uri: Uri,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service
        .create_product(&body)
        .await
        .map_err(|e| HttpError::from_service(e, uri.path()))?;

    Ok((StatusCode::CREATED, Json(response)))
}

pub fn product_routes(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/products", get(get_products).post(create_product))
        .route("/api/products/", get(get_products).post(create_product))
        .route("/api/products/{id}", get(get_product))
        .layer(Extension(app_state.di_container.product_query.clone()))
        .layer(Extension(app_state.di_container.product_command.clone()))
}
