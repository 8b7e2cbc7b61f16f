// src/dtos/product.rs
use serde::{Deserialize, Serialize};

use super::{non_empty, non_zero, require_name};
use crate::error::AppError;

/// Body of both POST and PUT: an update replaces every mutable field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock_quantity: i32,
    pub supplier_id: Option<i32>,
}

impl ProductRequest {
    /// Runs the presence checks and folds blank optionals into `None`.
    pub fn normalize(self) -> Result<Self, AppError> {
        require_name(&self.name)?;
        Ok(Self {
            description: non_empty(self.description),
            supplier_id: non_zero(self.supplier_id),
            ..self
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ProductCreatedResponse {
    pub message: &'static str,
    #[serde(rename = "productId")]
    pub product_id: i64,
}
