pub mod product;
pub mod supplier;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Empty strings are stored as NULL.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Id `0` means "no id".
pub(crate) fn non_zero(value: Option<i32>) -> Option<i32> {
    value.filter(|id| *id != 0)
}

pub(crate) fn require_name(name: &str) -> Result<(), crate::error::AppError> {
    if name.trim().is_empty() {
        return Err(crate::error::AppError::validation("name is required"));
    }
    Ok(())
}
