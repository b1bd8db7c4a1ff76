//! Validation of `POST /products` payloads.
//!
//! [`validate_create_request`] checks every field and reports all violations at once;
//! it never stops at the first failure.

use crate::model::{CreateProductRequest, ProductCreate};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

pub const NAME_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 500;
pub const CATEGORY_MAX_CHARS: usize = 50;
/// Largest accepted stock count (a signed 32-bit integer on the wire).
pub const STOCK_MAX: u32 = i32::MAX as u32;

/// One violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Every constraint a rejected request violated, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }

    /// True if any violation concerns `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

/// Checks a creation payload and turns it into a [`ProductCreate`].
///
/// Lengths are counted in Unicode scalar values, not bytes or UTF-16 units.
pub fn validate_create_request(
    request: &CreateProductRequest,
) -> Result<ProductCreate, ValidationErrors> {
    let mut errors = Vec::new();

    let name = match request.name.as_deref() {
        None => {
            errors.push(FieldError::new("name", "Product name is required"));
            None
        }
        Some(name) => {
            if name.trim().is_empty() {
                errors.push(FieldError::new("name", "Product name is required"));
            }
            let len = name.chars().count();
            if len == 0 || len > NAME_MAX_CHARS {
                errors.push(FieldError::new(
                    "name",
                    format!("Product name must be between 1 and {NAME_MAX_CHARS} characters"),
                ));
            }
            Some(name.to_string())
        }
    };

    if let Some(description) = request.description.as_deref() {
        if description.chars().count() > DESCRIPTION_MAX_CHARS {
            errors.push(FieldError::new(
                "description",
                format!("Description cannot exceed {DESCRIPTION_MAX_CHARS} characters"),
            ));
        }
    }

    let price = match request.price {
        None => {
            errors.push(FieldError::new("price", "Price is required"));
            None
        }
        Some(price) if !(price.is_finite() && price > 0.0) => {
            errors.push(FieldError::new("price", "Price must be a positive value"));
            None
        }
        Some(price) => Some(price),
    };

    if let Some(category) = request.category.as_deref() {
        if category.chars().count() > CATEGORY_MAX_CHARS {
            errors.push(FieldError::new(
                "category",
                format!("Category cannot exceed {CATEGORY_MAX_CHARS} characters"),
            ));
        }
    }

    let stock = match request.stock {
        None => None,
        Some(stock) if stock < 0 => {
            errors.push(FieldError::new("stock", "Stock cannot be negative"));
            None
        }
        Some(stock) => match u32::try_from(stock) {
            Ok(stock) if stock <= STOCK_MAX => Some(stock),
            _ => {
                errors.push(FieldError::new("stock", "Stock is out of range"));
                None
            }
        },
    };

    match (name, price) {
        (Some(name), Some(price)) if errors.is_empty() => Ok(ProductCreate {
            name,
            description: request.description.clone(),
            price,
            category: request.category.clone(),
            stock,
        }),
        _ => Err(ValidationErrors { errors }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, price: f64) -> CreateProductRequest {
        CreateProductRequest {
            name: Some(name.to_string()),
            price: Some(price),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_request_passes_through() {
        let req = CreateProductRequest {
            name: Some("Wireless Mouse".into()),
            description: Some("2.4 GHz".into()),
            price: Some(29.99),
            category: Some("Electronics".into()),
            stock: Some(50),
        };
        let create = validate_create_request(&req).unwrap();
        assert_eq!(
            create,
            ProductCreate {
                name: "Wireless Mouse".into(),
                description: Some("2.4 GHz".into()),
                price: 29.99,
                category: Some("Electronics".into()),
                stock: Some(50),
            }
        );
    }

    #[test]
    fn test_absent_stock_stays_absent() {
        let create = validate_create_request(&request("Widget", 5.0)).unwrap();
        assert_eq!(create.stock, None);
    }

    #[test]
    fn test_blank_name_and_negative_price_are_both_reported() {
        let err = validate_create_request(&request("", -10.0)).unwrap_err();
        assert!(err.has_field("name"));
        assert!(err.has_field("price"));
        assert!(err.errors().len() >= 2);
    }

    #[test]
    fn test_missing_required_fields() {
        let err = validate_create_request(&CreateProductRequest::default()).unwrap_err();
        assert_eq!(
            err.into_errors(),
            vec![
                FieldError::new("name", "Product name is required"),
                FieldError::new("price", "Price is required"),
            ]
        );
    }

    #[test]
    fn test_whitespace_name_is_blank() {
        let err = validate_create_request(&request("   ", 1.0)).unwrap_err();
        assert_eq!(
            err.errors(),
            &[FieldError::new("name", "Product name is required")]
        );
    }

    #[test]
    fn test_zero_price_rejected() {
        let err = validate_create_request(&request("Widget", 0.0)).unwrap_err();
        assert_eq!(
            err.errors(),
            &[FieldError::new("price", "Price must be a positive value")]
        );
    }

    #[test]
    fn test_length_limits_are_inclusive() {
        let req = CreateProductRequest {
            name: Some("n".repeat(NAME_MAX_CHARS)),
            description: Some("d".repeat(DESCRIPTION_MAX_CHARS)),
            category: Some("c".repeat(CATEGORY_MAX_CHARS)),
            price: Some(1.0),
            stock: Some(0),
        };
        assert!(validate_create_request(&req).is_ok());

        let req = CreateProductRequest {
            name: Some("n".repeat(NAME_MAX_CHARS + 1)),
            description: Some("d".repeat(DESCRIPTION_MAX_CHARS + 1)),
            category: Some("c".repeat(CATEGORY_MAX_CHARS + 1)),
            price: Some(1.0),
            stock: None,
        };
        let err = validate_create_request(&req).unwrap_err();
        assert!(err.has_field("name"));
        assert!(err.has_field("description"));
        assert!(err.has_field("category"));
        assert_eq!(err.errors().len(), 3);
    }

    #[test]
    fn test_lengths_count_characters_not_bytes() {
        // 100 two-byte characters is still within the name limit.
        let req = request(&"é".repeat(NAME_MAX_CHARS), 1.0);
        assert!(validate_create_request(&req).is_ok());
    }

    #[test]
    fn test_stock_bounds() {
        let mut req = request("Widget", 1.0);
        req.stock = Some(-1);
        let err = validate_create_request(&req).unwrap_err();
        assert_eq!(err.errors(), &[FieldError::new("stock", "Stock cannot be negative")]);

        req.stock = Some(i64::from(STOCK_MAX));
        assert_eq!(validate_create_request(&req).unwrap().stock, Some(STOCK_MAX));

        for too_big in [i64::from(STOCK_MAX) + 1, 3_000_000_000, i64::from(u32::MAX) + 1] {
            req.stock = Some(too_big);
            let err = validate_create_request(&req).unwrap_err();
            assert_eq!(err.errors(), &[FieldError::new("stock", "Stock is out of range")]);
        }
    }

    #[test]
    fn test_astral_characters_count_once() {
        // Each emoji is one character even though it takes two UTF-16 units.
        let req = request(&"\u{1F600}".repeat(NAME_MAX_CHARS), 1.0);
        assert!(validate_create_request(&req).is_ok());

        let req = request(&"\u{1F600}".repeat(NAME_MAX_CHARS + 1), 1.0);
        let err = validate_create_request(&req).unwrap_err();
        assert!(err.has_field("name"));
    }
}
