//! Product domain types.
//!
//! A [`Product`] is one sellable item in the catalog. `Product` carries the
//! store-assigned id; [`NewProduct`] is validated input that hasn't been
//! persisted yet; [`ProductDraft`] is the raw admin-form input that must
//! pass validation before any store access happens.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ports::CatalogError;

/// Image shown for catalog documents that carry no image field.
pub const PLACEHOLDER_IMAGE: &str = "/products/placeholder.png";

// ─────────────────────────────────────────────────────────────────────────────
// Image References
// ─────────────────────────────────────────────────────────────────────────────

/// Reference to product image data.
///
/// Seed entries point at hosted paths; admin-uploaded entries inline the
/// image as a base64 data payload. Either form round-trips through a single
/// string (`data:<media-type>;base64,<payload>` for inline data), which is
/// also how the field is stored in catalog documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ImageRef {
    /// URL or site-relative path to a hosted image.
    Url(String),
    /// Inline base64-encoded image payload.
    Inline {
        /// Media type of the payload (e.g., "image/png").
        media_type: String,
        /// Base64-encoded image bytes.
        data: String,
    },
}

impl ImageRef {
    /// Build an inline reference from raw image bytes.
    pub fn inline_from_bytes(media_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self::Inline {
            media_type: media_type.into(),
            data: BASE64.encode(bytes),
        }
    }

    /// Whether this reference carries no usable image data.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Url(url) => url.trim().is_empty(),
            Self::Inline { data, .. } => data.trim().is_empty(),
        }
    }
}

impl From<String> for ImageRef {
    fn from(value: String) -> Self {
        // Anything that isn't a well-formed data payload is treated as a URL.
        if let Some(rest) = value.strip_prefix("data:") {
            if let Some((media_type, data)) = rest.split_once(";base64,") {
                return Self::Inline {
                    media_type: media_type.to_string(),
                    data: data.to_string(),
                };
            }
        }
        Self::Url(value)
    }
}

impl From<ImageRef> for String {
    fn from(value: ImageRef) -> Self {
        match value {
            ImageRef::Url(url) => url,
            ImageRef::Inline { media_type, data } => format!("data:{media_type};base64,{data}"),
        }
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from(self.clone()))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Product Types
// ─────────────────────────────────────────────────────────────────────────────

/// A product that exists in the catalog with a store-assigned id.
///
/// Use `NewProduct` for products that haven't been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Opaque identifier, assigned by the catalog store on creation
    /// (static literal for seed entries).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Price in Malawian kwacha, whole units.
    pub price: u64,
    /// Reference to the product image.
    pub image: ImageRef,
}

impl Product {
    /// Decode a product from a catalog store document.
    ///
    /// Documents come from a schemaless store, so fields are decoded
    /// defensively: `name` and `price` are mandatory (missing or malformed
    /// values reject the document), while a missing `image` falls back to
    /// [`PLACEHOLDER_IMAGE`]. `price` is accepted as a JSON number or a
    /// numeric string.
    pub fn from_document(id: &str, fields: &serde_json::Value) -> Result<Self, CatalogError> {
        let name = fields
            .get("name")
            .and_then(serde_json::Value::as_str)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| {
                CatalogError::Validation(format!("document {id}: missing or empty name"))
            })?;

        let price = fields
            .get("price")
            .and_then(decode_price)
            .ok_or_else(|| {
                CatalogError::Validation(format!("document {id}: missing or invalid price"))
            })?;

        let image = fields
            .get("image")
            .and_then(serde_json::Value::as_str)
            .map(|raw| ImageRef::from(raw.to_string()))
            .filter(|image| !image.is_empty())
            .unwrap_or_else(|| ImageRef::Url(PLACEHOLDER_IMAGE.to_string()));

        Ok(Self {
            id: id.to_string(),
            name: name.to_string(),
            price,
            image,
        })
    }
}

/// A product to be created in the catalog (no id yet).
///
/// Obtained by validating a [`ProductDraft`]. After creation, the store
/// returns the id and the synchronizer builds the cached `Product` from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    /// Display name (validated non-empty).
    pub name: String,
    /// Price in Malawian kwacha, whole units.
    pub price: u64,
    /// Reference to the product image (validated non-empty).
    pub image: ImageRef,
}

impl NewProduct {
    /// Attach the store-assigned id, producing a persisted `Product`.
    pub fn into_product(self, id: String) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            image: self.image,
        }
    }

    /// Serialize into the field payload submitted to the catalog store.
    pub fn to_fields(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "price": self.price,
            "image": String::from(self.image.clone()),
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Admin Form Input
// ─────────────────────────────────────────────────────────────────────────────

/// Raw admin-form input for a new product.
///
/// Nothing here is trusted: the price is still text and the image may be
/// missing. [`ProductDraft::validate`] is the only way to turn a draft into
/// a [`NewProduct`], which keeps validation strictly ahead of any store
/// access.
#[derive(Debug, Clone, Default)]
pub struct ProductDraft {
    /// Display name as typed.
    pub name: String,
    /// Price as typed (thousands separators tolerated).
    pub price: String,
    /// Uploaded or referenced image, if any.
    pub image: Option<ImageRef>,
}

impl ProductDraft {
    /// Validate the draft into a `NewProduct`.
    ///
    /// Rejects an empty name, a price that doesn't parse to a non-negative
    /// number, and a missing or empty image. Performs no I/O.
    pub fn validate(self) -> Result<NewProduct, CatalogError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CatalogError::Validation(
                "product name must not be empty".to_string(),
            ));
        }

        let price = parse_price(&self.price).ok_or_else(|| {
            CatalogError::Validation(format!(
                "price {:?} is not a non-negative number",
                self.price
            ))
        })?;

        let image = self
            .image
            .filter(|image| !image.is_empty())
            .ok_or_else(|| CatalogError::Validation("a product image is required".to_string()))?;

        Ok(NewProduct {
            name: name.to_string(),
            price,
            image,
        })
    }
}

/// Parse a price string into whole kwacha.
///
/// Tolerates thousands separators and surrounding whitespace ("18,000" and
/// "18000" are the same price). Fractional input rounds to the nearest
/// whole unit; negative and non-numeric input is rejected.
fn parse_price(raw: &str) -> Option<u64> {
    let cleaned: String = raw.trim().replace([',', ' '], "");
    if cleaned.is_empty() {
        return None;
    }
    if let Ok(price) = cleaned.parse::<u64>() {
        return Some(price);
    }
    match cleaned.parse::<f64>() {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Ok(value) if value.is_finite() && value >= 0.0 => Some(value.round() as u64),
        _ => None,
    }
}

/// Decode a price from a document field value (number or numeric string).
fn decode_price(value: &serde_json::Value) -> Option<u64> {
    if let Some(price) = value.as_u64() {
        return Some(price);
    }
    match value {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        serde_json::Value::Number(n) => n
            .as_f64()
            .filter(|v| v.is_finite() && *v >= 0.0)
            .map(|v| v.round() as u64),
        serde_json::Value::String(s) => parse_price(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, price: &str, image: Option<ImageRef>) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            price: price.to_string(),
            image,
        }
    }

    fn cap_image() -> ImageRef {
        ImageRef::Url("/products/cap.png".to_string())
    }

    #[test]
    fn test_validate_accepts_well_formed_draft() {
        let new = draft("Onset Cap", "7,500", Some(cap_image())).validate().unwrap();
        assert_eq!(new.name, "Onset Cap");
        assert_eq!(new.price, 7500);
        assert_eq!(new.image, cap_image());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let err = draft("   ", "7500", Some(cap_image())).validate().unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
    }

    #[test]
    fn test_validate_rejects_bad_price() {
        for price in ["", "free", "-100", "NaN"] {
            let err = draft("Onset Cap", price, Some(cap_image()))
                .validate()
                .unwrap_err();
            assert!(matches!(err, CatalogError::Validation(_)), "price {price:?}");
        }
    }

    #[test]
    fn test_validate_rejects_missing_image() {
        let err = draft("Onset Cap", "7500", None).validate().unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));

        let empty = ImageRef::Url("  ".to_string());
        let err = draft("Onset Cap", "7500", Some(empty)).validate().unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
    }

    #[test]
    fn test_image_ref_data_payload_round_trip() {
        let image = ImageRef::inline_from_bytes("image/png", b"not-really-a-png");
        let encoded = String::from(image.clone());
        assert!(encoded.starts_with("data:image/png;base64,"));
        assert_eq!(ImageRef::from(encoded), image);
    }

    #[test]
    fn test_image_ref_plain_string_is_url() {
        let image = ImageRef::from("/products/hoodie.png".to_string());
        assert_eq!(image, ImageRef::Url("/products/hoodie.png".to_string()));
    }

    #[test]
    fn test_from_document_decodes_full_document() {
        let fields = serde_json::json!({
            "name": "Onset Hoodie",
            "price": 18000,
            "image": "/products/hoodie.png",
        });
        let product = Product::from_document("a1", &fields).unwrap();
        assert_eq!(product.id, "a1");
        assert_eq!(product.name, "Onset Hoodie");
        assert_eq!(product.price, 18000);
        assert_eq!(product.image, ImageRef::Url("/products/hoodie.png".to_string()));
    }

    #[test]
    fn test_from_document_accepts_string_price() {
        let fields = serde_json::json!({ "name": "Onset Cap", "price": "7,500" });
        let product = Product::from_document("a2", &fields).unwrap();
        assert_eq!(product.price, 7500);
    }

    #[test]
    fn test_from_document_defaults_missing_image() {
        let fields = serde_json::json!({ "name": "Onset Cap", "price": 7500 });
        let product = Product::from_document("a2", &fields).unwrap();
        assert_eq!(product.image, ImageRef::Url(PLACEHOLDER_IMAGE.to_string()));
    }

    #[test]
    fn test_from_document_rejects_missing_mandatory_fields() {
        let no_name = serde_json::json!({ "price": 7500 });
        assert!(Product::from_document("a3", &no_name).is_err());

        let no_price = serde_json::json!({ "name": "Onset Cap" });
        assert!(Product::from_document("a4", &no_price).is_err());

        let bad_price = serde_json::json!({ "name": "Onset Cap", "price": "soon" });
        assert!(Product::from_document("a5", &bad_price).is_err());
    }

    #[test]
    fn test_to_fields_round_trips_through_decode() {
        let new = NewProduct {
            name: "Onset T-Shirt".to_string(),
            price: 10000,
            image: ImageRef::inline_from_bytes("image/jpeg", b"bytes"),
        };
        let product = Product::from_document("t1", &new.to_fields()).unwrap();
        assert_eq!(product.name, new.name);
        assert_eq!(product.price, new.price);
        assert_eq!(product.image, new.image);
    }
}
