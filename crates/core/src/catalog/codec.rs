//! JSON wire encoding for [`CatalogItem`].
//!
//! The same encoding is used for HTTP bodies and for the `Payload` attribute
//! stored by every backend.

use super::error::DecodeError;
use super::types::CatalogItem;

/// Decodes a JSON object into a [`CatalogItem`].
///
/// Unknown fields are ignored and missing optional fields take their default
/// value. Anything other than a JSON object (arrays included) is rejected.
pub fn decode(bytes: impl AsRef<[u8]>) -> Result<CatalogItem, DecodeError> {
    let value: serde_json::Value = serde_json::from_slice(bytes.as_ref())?;
    if !value.is_object() {
        return Err(DecodeError("expected a JSON object".to_string()));
    }
    Ok(serde_json::from_value(value)?)
}

/// Encodes a [`CatalogItem`] as a JSON object.
///
/// JSON has no NaN or infinity: a non-finite `price` is written as `null`
/// and decodes back as `0.0`. Storage refuses such items, see
/// [`StoredRecord::for_item`](crate::storage::StoredRecord::for_item).
pub fn encode(item: &CatalogItem) -> Vec<u8> {
    // Only strings, a float and a list of strings: serialization cannot fail.
    serde_json::to_vec(item).expect("CatalogItem serialization is infallible")
}

/// Encodes a [`CatalogItem`] as a JSON string, the form stored in `Payload`.
pub fn encode_to_string(item: &CatalogItem) -> String {
    serde_json::to_string(item).expect("CatalogItem serialization is infallible")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_finite_price_is_lossy() {
        let item = CatalogItem::new("Shoe").with_price(f32::NAN);

        let value: serde_json::Value = serde_json::from_slice(&encode(&item)).unwrap();
        assert!(value["price"].is_null());
        assert_eq!(decode(encode(&item)).unwrap().price, 0.0);
    }

    fn sample_item() -> CatalogItem {
        CatalogItem {
            id: "5c61f497e5fdadefe84ff9b9".to_string(),
            name: "Yoga Mat".to_string(),
            short_description: "Limited Edition Mat".to_string(),
            description: "Limited edition yoga mat".to_string(),
            image_url1: "/static/images/yogamat_square.jpg".to_string(),
            image_url2: "/static/images/yogamat_thumb2.jpg".to_string(),
            image_url3: "/static/images/yogamat_thumb3.jpg".to_string(),
            price: 62.5,
            tags: vec!["mat".to_string(), "yoga".to_string()],
        }
    }

    #[test]
    fn test_round_trip() {
        let item = sample_item();
        assert_eq!(decode(encode(&item)).unwrap(), item);
        assert_eq!(decode(encode_to_string(&item)).unwrap(), item);
    }

    #[test]
    fn test_round_trip_fractional_price() {
        let item = CatalogItem::new("Shoe").with_price(19.99).with_tags(["run"]);
        let decoded = decode(encode(&item)).unwrap();
        assert_eq!(decoded.price, 19.99_f32);
        assert_eq!(decoded, item);
    }

    #[test]
    fn test_round_trip_preserves_tag_order() {
        let item = CatalogItem::new("Bottle").with_tags(["z", "a", "m"]);
        let decoded = decode(encode(&item)).unwrap();
        assert_eq!(decoded.tags, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_decode_minimal_payload_uses_defaults() {
        let item = decode(br#"{"name": "Shoe"}"#).unwrap();
        assert_eq!(item, CatalogItem::new("Shoe"));
    }

    #[test]
    fn test_decode_null_tags() {
        let item = decode(br#"{"name": "Shoe", "tags": null}"#).unwrap();
        assert!(item.tags.is_empty());
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let item = decode(br#"{"name": "Shoe", "color": "red", "stock": 4}"#).unwrap();
        assert_eq!(item.name, "Shoe");
    }

    #[test]
    fn test_decode_rejects_missing_name() {
        assert!(decode(br#"{"price": 10}"#).is_err());
    }

    #[test]
    fn test_decode_rejects_non_object() {
        assert!(decode(br#"["id", "Shoe"]"#).is_err());
        assert!(decode(br#""Shoe""#).is_err());
        assert!(decode(b"42").is_err());
    }

    #[test]
    fn test_decode_rejects_malformed_json() {
        assert!(decode(b"{not json").is_err());
        assert!(decode(b"").is_err());
    }

    #[test]
    fn test_decode_rejects_wrong_field_type() {
        assert!(decode(br#"{"name": "Shoe", "price": "cheap"}"#).is_err());
        assert!(decode(br#"{"name": "Shoe", "tags": "run"}"#).is_err());
    }

    #[test]
    fn test_encode_uses_wire_field_names() {
        let encoded = encode_to_string(&sample_item());
        assert!(encoded.contains(r#""shortDescription":"Limited Edition Mat""#));
        assert!(encoded.contains(r#""imageUrl1":"/static/images/yogamat_square.jpg""#));
        assert!(encoded.contains(r#""tags":["mat","yoga"]"#));
    }
}
