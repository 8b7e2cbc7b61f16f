// src/dtos/supplier.rs
use serde::{Deserialize, Serialize};

use super::{non_empty, non_zero, require_name};
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateSupplierRequest {
    /// Client-chosen primary key; the database assigns one when absent.
    pub supplier_id: Option<i32>,
    pub name: String,
    pub contact_info: Option<String>,
}

impl CreateSupplierRequest {
    pub fn normalize(self) -> Result<Self, AppError> {
        require_name(&self.name)?;
        Ok(Self {
            supplier_id: non_zero(self.supplier_id),
            contact_info: non_empty(self.contact_info),
            ..self
        })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdateSupplierRequest {
    pub name: String,
    pub contact_info: Option<String>,
}

impl UpdateSupplierRequest {
    pub fn normalize(self) -> Result<Self, AppError> {
        require_name(&self.name)?;
        Ok(Self {
            contact_info: non_empty(self.contact_info),
            ..self
        })
    }
}

#[derive(Debug, Serialize)]
pub struct SupplierCreatedResponse {
    pub message: &'static str,
    #[serde(rename = "supplierId")]
    pub supplier_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn supplier_id_is_optional() {
        let req: CreateSupplierRequest =
            serde_json::from_value(json!({ "name": "Acme", "contact_info": "a@x.com" })).unwrap();
        let req = req.normalize().unwrap();
        assert_eq!(req.supplier_id, None);
        assert_eq!(req.contact_info.as_deref(), Some("a@x.com"));
    }

    #[test]
    fn zero_supplier_id_means_auto_assign() {
        let req: CreateSupplierRequest =
            serde_json::from_value(json!({ "supplier_id": 0, "name": "Acme", "contact_info": "" }))
                .unwrap();
        let req = req.normalize().unwrap();
        assert_eq!(req.supplier_id, None);
        assert_eq!(req.contact_info, None);
    }

    #[test]
    fn explicit_supplier_id_is_kept() {
        let req: CreateSupplierRequest =
            serde_json::from_value(json!({ "supplier_id": 5, "name": "Acme" })).unwrap();
        assert_eq!(req.normalize().unwrap().supplier_id, Some(5));
    }

    #[test]
    fn update_ignores_id_in_body_and_requires_name() {
        let req: UpdateSupplierRequest =
            serde_json::from_value(json!({ "supplier_id": 9, "name": "Acme Ltd" })).unwrap();
        assert_eq!(req.normalize().unwrap().contact_info, None);

        let blank: UpdateSupplierRequest = serde_json::from_value(json!({ "name": "" })).unwrap();
        assert!(blank.normalize().is_err());
    }
}
