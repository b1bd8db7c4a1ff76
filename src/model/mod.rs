//! Pure data structures: the stored [`Product`] entity, the validated
//! [`ProductCreate`] value the service turns into one, and the
//! [`CreateProductRequest`] wire DTO.

pub mod product;
pub mod request;

pub use product::*;
pub use request::*;
