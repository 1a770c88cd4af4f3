//! The in-process catalog cache.
//!
//! An explicitly owned, injectable ordered list of products - the single
//! source of truth for rendering. It starts as the seed list, is replaced
//! wholesale by the first successful remote fetch, and is mutated
//! incrementally by add/delete afterwards.

use crate::domain::Product;

/// Ordered list of product records with unique ids.
///
/// Ordering is insertion order; there is no sorting guarantee. The cache
/// itself does no I/O - [`crate::services::CatalogService`] owns the
/// write-through discipline that keeps it consistent with the store.
#[derive(Debug, Clone, Default)]
pub struct CatalogCache {
    items: Vec<Product>,
}

impl CatalogCache {
    /// Create a cache holding the given products.
    pub fn new(items: Vec<Product>) -> Self {
        debug_assert!(ids_unique(&items), "catalog cache ids must be unique");
        Self { items }
    }

    /// All products, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.items
    }

    /// Replace the entire contents (first successful remote fetch).
    pub fn replace(&mut self, items: Vec<Product>) {
        debug_assert!(ids_unique(&items), "catalog cache ids must be unique");
        self.items = items;
    }

    /// Append one product. The id must not already be present.
    pub fn push(&mut self, product: Product) {
        debug_assert!(
            !self.contains_id(&product.id),
            "duplicate catalog id {}",
            product.id
        );
        self.items.push(product);
    }

    /// Remove the product with the given id, if present.
    ///
    /// Relative order of the remaining entries is preserved.
    pub fn remove(&mut self, id: &str) -> Option<Product> {
        let index = self.items.iter().position(|p| p.id == id)?;
        Some(self.items.remove(index))
    }

    /// Whether a product with the given id is present.
    pub fn contains_id(&self, id: &str) -> bool {
        self.items.iter().any(|p| p.id == id)
    }

    /// Number of cached products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn ids_unique(items: &[Product]) -> bool {
    items
        .iter()
        .enumerate()
        .all(|(i, a)| items[i + 1..].iter().all(|b| a.id != b.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ImageRef;

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {id}"),
            price: 1000,
            image: ImageRef::Url("/products/placeholder.png".to_string()),
        }
    }

    #[test]
    fn test_push_appends_in_order() {
        let mut cache = CatalogCache::default();
        cache.push(product("a"));
        cache.push(product("b"));
        let ids: Vec<&str> = cache.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_replace_discards_previous_contents() {
        let mut cache = CatalogCache::new(vec![product("seed-1"), product("seed-2")]);
        cache.replace(vec![product("x")]);
        assert_eq!(cache.len(), 1);
        assert!(cache.contains_id("x"));
        assert!(!cache.contains_id("seed-1"));
    }

    #[test]
    fn test_remove_preserves_relative_order() {
        let mut cache = CatalogCache::new(vec![product("a"), product("b"), product("c")]);
        let removed = cache.remove("b").unwrap();
        assert_eq!(removed.id, "b");
        let ids: Vec<&str> = cache.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut cache = CatalogCache::new(vec![product("a")]);
        assert!(cache.remove("missing").is_none());
        assert_eq!(cache.len(), 1);
    }
}
