//! Core domain types.
//!
//! These types represent the pure catalog model, independent of any
//! infrastructure concerns (database, hosted document store, etc.).
//!
//! # Structure
//!
//! - `product` - Product types (`Product`, `NewProduct`, `ProductDraft`)
//! - `seed` - The hardcoded fallback product set

mod product;
mod seed;

// Re-export product types at the domain level for convenience
pub use product::{ImageRef, NewProduct, PLACEHOLDER_IMAGE, Product, ProductDraft};
pub use seed::seed_products;
