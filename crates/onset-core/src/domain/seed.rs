//! The hardcoded fallback product set.
//!
//! Shown before the first successful remote fetch and kept whenever that
//! fetch returns nothing or fails. Seed ids are static literals; live
//! products get opaque store-assigned ids instead.

use super::product::{ImageRef, Product};

/// Build the seed list, in display order.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: "seed-hoodie".to_string(),
            name: "Onset Hoodie".to_string(),
            price: 18_000,
            image: ImageRef::Url("/products/hoodie.png".to_string()),
        },
        Product {
            id: "seed-cap".to_string(),
            name: "Onset Cap".to_string(),
            price: 7_500,
            image: ImageRef::Url("/products/cap.png".to_string()),
        },
        Product {
            id: "seed-tshirt".to_string(),
            name: "Onset T-Shirt".to_string(),
            price: 10_000,
            image: ImageRef::Url("/products/tshirt.png".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_unique() {
        let seed = seed_products();
        assert_eq!(seed.len(), 3);
        for (i, a) in seed.iter().enumerate() {
            for b in &seed[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
