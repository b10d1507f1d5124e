//! Bulk load of products from a JSON file.
//!
//! The file holds a JSON array of product objects. Products keep the id
//! they carry; those without one get a generated id. A product that fails
//! to decode or store is logged and skipped, the rest are still loaded.

use std::path::Path;

use anyhow::{Context, Result};
use catalog_core::catalog::{assign_new_id, decode, IdGenerator};
use catalog_core::storage::CatalogRepository;

/// Outcome of a seed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub added: usize,
    pub failed: usize,
}

/// Reads `path` and adds every product it contains.
///
/// Only an unreadable file or a document that is not a JSON array is an
/// error; per-product failures are counted in the report.
pub async fn seed_from_file(
    repo: &dyn CatalogRepository,
    ids: &dyn IdGenerator,
    path: &Path,
) -> Result<SeedReport> {
    let contents = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;

    seed_from_slice(repo, ids, &contents).await
}

/// Adds every product in a JSON array.
pub async fn seed_from_slice(
    repo: &dyn CatalogRepository,
    ids: &dyn IdGenerator,
    contents: &[u8],
) -> Result<SeedReport> {
    let products: Vec<serde_json::Value> =
        serde_json::from_slice(contents).context("Seed data must be a JSON array")?;

    let mut report = SeedReport::default();

    for (index, product) in products.iter().enumerate() {
        let item = match decode(product.to_string()) {
            Ok(item) if item.has_id() => item,
            Ok(item) => assign_new_id(item, ids),
            Err(e) => {
                tracing::error!(index, error = %e, "Skipping invalid product");
                report.failed += 1;
                continue;
            }
        };

        match repo.add_item(&item).await {
            Ok(()) => {
                tracing::debug!(product_id = %item.id, name = %item.name, "Seeded product");
                report.added += 1;
            }
            Err(e) => {
                tracing::error!(product_id = %item.id, error = %e, "Failed to add product");
                report.failed += 1;
            }
        }
    }

    Ok(report)
}
