use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Supplier {
    pub supplier_id: i32,
    pub name: String,
    pub contact_info: Option<String>,
}
