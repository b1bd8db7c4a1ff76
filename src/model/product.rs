/// Represents a product in the catalog.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be kept by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for Product`](#impl-ActorEntity-for-Product) for the
/// save-time invariant and identifier handling.
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use utoipa::ToSchema;
use uuid::Uuid;

/// Type-safe identifier for Products.
///
/// Serialized as a plain JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// A new random identifier (UUID v4, hyphenated).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// `None` until the store assigns one on first save.
    #[schema(value_type = String, example = "3f2b1c9e-8d4a-4f6e-9b7a-1c2d3e4f5a6b")]
    pub id: Option<ProductId>,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: Option<String>,
    pub stock: u32,
}

impl Product {
    /// Creates a new, not yet stored Product.
    ///
    /// # Arguments
    /// * `name` - Product name
    /// * `price` - Unit price, must be positive
    /// * `stock` - Units on hand
    ///
    /// # Notes
    /// The `id` field starts out empty and is set by the store.
    pub fn new(name: impl Into<String>, price: f64, stock: u32) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            price,
            category: None,
            stock,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// A validated request to add a product.
///
/// Produced by [`validate_create_request`](crate::validation::validate_create_request);
/// holding one means every field constraint has already been checked.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCreate {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: Option<String>,
    /// Defaults to 0 when absent.
    pub stock: Option<u32>,
}

impl From<ProductCreate> for Product {
    fn from(params: ProductCreate) -> Self {
        Self {
            id: None,
            name: params.name,
            description: params.description,
            price: params.price,
            category: params.category,
            stock: params.stock.unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_defaults_stock_to_zero() {
        let product = Product::from(ProductCreate {
            name: "Widget".into(),
            description: None,
            price: 5.0,
            category: None,
            stock: None,
        });
        assert_eq!(product.stock, 0);
        assert!(product.id.is_none());
    }

    #[test]
    fn test_product_json_shape() {
        let mut product = Product::new("Wireless Mouse", 29.99, 50).with_category("Electronics");
        product.id = Some(ProductId::from("abc"));

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "abc",
                "name": "Wireless Mouse",
                "description": null,
                "price": 29.99,
                "category": "Electronics",
                "stock": 50
            })
        );
    }

    #[test]
    fn test_generated_ids_differ() {
        let a = ProductId::generate();
        let b = ProductId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 36);
    }
}
