//! # HTTP Surface
//!
//! | Method | Path | Success | Failure |
//! |---|---|---|---|
//! | GET | `/products` | 200, JSON array | — |
//! | GET | `/products/{id}` | 200, JSON product | 404, empty |
//! | POST | `/products` | 201, JSON product | 400, JSON error body |
//! | GET | `/api-docs/openapi.json` | 200, OpenAPI document | — |

pub mod error;
pub mod handlers;

pub use error::{ApiError, ErrorBody};

use crate::model::{CreateProductRequest, Product};
use crate::service::CatalogService;
use crate::validation::FieldError;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Generated OpenAPI description of the catalog routes.
#[derive(OpenApi)]
#[openapi(
    info(title = "Product Catalog API", description = "In-memory product catalog"),
    paths(
        handlers::list_products,
        handlers::get_product,
        handlers::create_product
    ),
    components(schemas(Product, CreateProductRequest, ErrorBody, FieldError)),
    tags((name = "Products", description = "Product management APIs"))
)]
pub struct ApiDoc;

/// Builds the catalog router around an already wired service.
pub fn router(service: CatalogService) -> Router {
    // Built once and served as static JSON.
    let openapi = Arc::new(ApiDoc::openapi());

    Router::new()
        .route(
            "/products",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route("/products/{id}", get(handlers::get_product))
        .route(
            OPENAPI_PATH,
            get(move || async move {
                ([(header::CACHE_CONTROL, "no-store")], Json(openapi.as_ref())).into_response()
            }),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
