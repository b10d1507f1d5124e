use uuid::Uuid;

use super::types::CatalogItem;

/// Source of identifiers for newly created items.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Random UUID v4 identifiers in hyphenated form (36 characters).
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Prepares a decoded create request for storage.
///
/// Any identifier supplied by the caller is discarded and replaced with a
/// freshly generated one. The generator is invoked exactly once.
pub fn assign_new_id(item: CatalogItem, ids: &dyn IdGenerator) -> CatalogItem {
    item.with_id(ids.generate())
}
