use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire shape of `POST /products`.
///
/// Every field is optional at this level so that a missing or out-of-range value is
/// reported by the validator as a field violation instead of failing JSON decoding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    #[serde(default)]
    #[schema(example = "Wireless Mouse")]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    #[schema(example = 29.99)]
    pub price: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub stock: Option<i64>,
}
