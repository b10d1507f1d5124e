//! Product handlers.
//!
//! Each handler performs exactly one repository call. Status mapping and
//! logging of failures happen in [`AppError`].

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};

use catalog_core::catalog::{
    assign_new_id, decode, AllCatalogItemsResponse, CatalogItem, CatalogItemCreateResponse,
};

use crate::{handlers::AppError, state::AppState};

/// Create a new product (POST /products).
///
/// Any `id` in the body is ignored; the service assigns a fresh one.
pub async fn create_product(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CatalogItemCreateResponse>, AppError> {
    let item = decode(&body)?;
    let item = assign_new_id(item, state.id_generator.as_ref());

    state.catalog_repo.add_item(&item).await?;

    tracing::info!(product_id = %item.id, name = %item.name, "Created new product");

    Ok(Json(CatalogItemCreateResponse::created(item)))
}

/// Get a single product by ID (GET /products/{id}).
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CatalogItem>, AppError> {
    tracing::debug!(product_id = %id, "Received get product request");

    let item = state.catalog_repo.get_item(&id).await?;

    Ok(Json(item))
}

/// List all products (GET /products).
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<AllCatalogItemsResponse>, AppError> {
    let items = state.catalog_repo.get_all_items().await?;

    tracing::debug!(count = items.len(), "Listed products");

    Ok(Json(AllCatalogItemsResponse::new(items)))
}
