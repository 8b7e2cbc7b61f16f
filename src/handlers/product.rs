// src/handlers/product.rs
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use crate::database;
use crate::dtos::product::{ProductCreatedResponse, ProductRequest};
use crate::dtos::MessageResponse;
use crate::error::AppError;
use crate::models::product::Product;
use crate::state::AppState;
use tracing::{info, instrument};

// GET /products - List all products
#[instrument(skip(state))]
pub async fn get_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, AppError> {
    const CONTEXT: &str = "Failed to fetch products";

    let mut conn = database::acquire(&state.db_pool, CONTEXT).await?;
    let products = sqlx::query_as::<_, Product>(
        "SELECT product_id, name, description,
                CAST(price AS DOUBLE) AS price,
                stock_quantity, supplier_id
         FROM products ORDER BY product_id"
    )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| AppError::query(e, CONTEXT))?;

    Ok(Json(products))
}

// GET /products/:id - Get single product
#[instrument(skip(state))]
pub async fn get_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Product>, AppError> {
    const CONTEXT: &str = "Failed to fetch product";

    let mut conn = database::acquire(&state.db_pool, CONTEXT).await?;
    let product = sqlx::query_as::<_, Product>(
        "SELECT product_id, name, description,
                CAST(price AS DOUBLE) AS price,
                stock_quantity, supplier_id
         FROM products WHERE product_id = ?"
    )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| AppError::query(e, CONTEXT))?
    .ok_or_else(|| AppError::not_found("Product not found"))?;

    Ok(Json(product))
}

// POST /products - Create new product
#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<Json<ProductCreatedResponse>, AppError> {
    const CONTEXT: &str = "Failed to add product";

    let Json(payload) = payload?;
    let payload = payload.normalize()?;

    // An unknown supplier_id fails the foreign key and is reported like any other write failure.
    let mut conn = database::acquire(&state.db_pool, CONTEXT).await?;
    let result = sqlx::query(
        "INSERT INTO products (name, description, price, stock_quantity, supplier_id)
         VALUES (?, ?, ?, ?, ?)"
    )
    .bind(&payload.name)
    .bind(&payload.description)
    .bind(payload.price)
    .bind(payload.stock_quantity)
    .bind(payload.supplier_id)
    .execute(&mut *conn)
    .await
    .map_err(|e| AppError::query(e, CONTEXT))?;

    let product_id = result.last_insert_id() as i64;
    info!(product_id, "Product added");

    Ok(Json(ProductCreatedResponse {
        message: "Product added",
        product_id,
    }))
}

// PUT /products/:id - Replace every mutable field of a product
#[instrument(skip(state, payload))]
pub async fn update_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    const CONTEXT: &str = "Failed to update product";

    let Json(payload) = payload?;
    let payload = payload.normalize()?;

    let mut conn = database::acquire(&state.db_pool, CONTEXT).await?;
    let result = sqlx::query(
        "UPDATE products SET
         name = ?,
         description = ?,
         price = ?,
         stock_quantity = ?,
         supplier_id = ?
         WHERE product_id = ?"
    )
    .bind(&payload.name)
    .bind(&payload.description)
    .bind(payload.price)
    .bind(payload.stock_quantity)
    .bind(payload.supplier_id)
    .bind(id)
    .execute(&mut *conn)
    .await
    .map_err(|e| AppError::query(e, CONTEXT))?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Product not found"));
    }

    Ok(Json(MessageResponse { message: "Product updated" }))
}

// DELETE /products/:id - Delete product
#[instrument(skip(state))]
pub async fn delete_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    const CONTEXT: &str = "Failed to delete product";

    let mut conn = database::acquire(&state.db_pool, CONTEXT).await?;
    let result = sqlx::query("DELETE FROM products WHERE product_id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(|e| AppError::query(e, CONTEXT))?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Product not found"));
    }

    Ok(Json(MessageResponse { message: "Product deleted" }))
}
