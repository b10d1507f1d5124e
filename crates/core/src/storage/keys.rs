//! Key scheme shared by every storage backend.
//!
//! Products live in a single partition (`PK = PRODUCT`) with the product id
//! as sort key. The encoded item is kept whole in the `Payload` attribute.

/// Partition key attribute name.
pub const PK: &str = "PK";
/// Sort key attribute name.
pub const SK: &str = "SK";
/// Attribute holding the JSON-encoded item.
pub const PAYLOAD: &str = "Payload";

/// Partition key value for every product record.
pub const PRODUCT_PARTITION: &str = "PRODUCT";

/// Generate the partition key for a product.
///
/// Pattern: `PRODUCT`
pub fn product_pk() -> &'static str {
    PRODUCT_PARTITION
}

/// Generate the sort key for a product.
///
/// Pattern: `<product_id>` (the id is used verbatim)
pub fn product_sk(product_id: &str) -> String {
    product_id.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_pk() {
        assert_eq!(product_pk(), "PRODUCT");
    }

    #[test]
    fn test_product_sk_is_the_id() {
        assert_eq!(
            product_sk("550e8400-e29b-41d4-a716-446655440001"),
            "550e8400-e29b-41d4-a716-446655440001"
        );
    }

    #[test]
    fn test_attribute_names() {
        assert_eq!(PK, "PK");
        assert_eq!(SK, "SK");
        assert_eq!(PAYLOAD, "Payload");
    }
}
