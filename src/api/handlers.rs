use super::error::{ApiError, ErrorBody};
use crate::model::{CreateProductRequest, Product, ProductId};
use crate::service::CatalogService;
use crate::validation::validate_create_request;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::debug;

/// `GET /products`
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    summary = "Get all products",
    responses(
        (status = 200, description = "Every product in the catalog", body = [Product])
    )
)]
pub async fn list_products(
    State(service): State<CatalogService>,
) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(service.list_all().await?))
}

/// `GET /products/{id}`
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Products",
    summary = "Get product by ID",
    params(("id" = String, Path, description = "Product identifier")),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "No product with this identifier")
    )
)]
pub async fn get_product(
    State(service): State<CatalogService>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    service
        .get_by_id(&ProductId::from(id))
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// `POST /products`
///
/// Decoding failures are reported as 400 like validation failures.
#[utoipa::path(
    post,
    path = "/products",
    tag = "Products",
    summary = "Create a new product",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Invalid product data", body = ErrorBody)
    )
)]
pub async fn create_product(
    State(service): State<CatalogService>,
    payload: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!(error = %rejection, "Rejected request body");
        ApiError::MalformedBody(rejection.body_text())
    })?;

    let params = validate_create_request(&request)?;
    let product = service.create(params).await?;
    Ok((StatusCode::CREATED, Json(product)))
}
