use axum::extract::{rejection::JsonRejection, Path, State};
use axum::Json;
use sqlx::mysql::MySqlArguments;
use sqlx::query::Query;
use sqlx::MySql;
use crate::database;
use crate::dtos::supplier::{CreateSupplierRequest, SupplierCreatedResponse, UpdateSupplierRequest};
use crate::dtos::MessageResponse;
use crate::error::AppError;
use crate::models::supplier::Supplier;
use crate::state::AppState;
use tracing::{info, instrument};

/// A unique violation on insert means the client-chosen id is taken.
fn map_unique_violation(err: sqlx::Error, context: &'static str) -> AppError {
    match err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::duplicate_key("Supplier ID already exists")
        }
        other => AppError::query(other, context),
    }
}

/// The two shapes of supplier insert. Whether the primary key column is part
/// of the statement depends on whether the client chose the id.
#[derive(Debug, PartialEq)]
enum SupplierInsert<'a> {
    WithId {
        supplier_id: i32,
        name: &'a str,
        contact_info: Option<&'a str>,
    },
    AutoId {
        name: &'a str,
        contact_info: Option<&'a str>,
    },
}

impl<'a> SupplierInsert<'a> {
    fn from_request(req: &'a CreateSupplierRequest) -> Self {
        match req.supplier_id {
            Some(supplier_id) => SupplierInsert::WithId {
                supplier_id,
                name: &req.name,
                contact_info: req.contact_info.as_deref(),
            },
            None => SupplierInsert::AutoId {
                name: &req.name,
                contact_info: req.contact_info.as_deref(),
            },
        }
    }

    fn sql(&self) -> &'static str {
        match self {
            SupplierInsert::WithId { .. } => {
                "INSERT INTO suppliers (supplier_id, name, contact_info) VALUES (?, ?, ?)"
            }
            SupplierInsert::AutoId { .. } => {
                "INSERT INTO suppliers (name, contact_info) VALUES (?, ?)"
            }
        }
    }

    fn query(&self) -> Query<'static, MySql, MySqlArguments> {
        let query = sqlx::query(self.sql());
        match *self {
            SupplierInsert::WithId { supplier_id, name, contact_info } => query
                .bind(supplier_id)
                .bind(name.to_owned())
                .bind(contact_info.map(str::to_owned)),
            SupplierInsert::AutoId { name, contact_info } => query
                .bind(name.to_owned())
                .bind(contact_info.map(str::to_owned)),
        }
    }

    /// The id reported back to the client.
    fn supplier_id(&self, last_insert_id: u64) -> i64 {
        match self {
            SupplierInsert::WithId { supplier_id, .. } => i64::from(*supplier_id),
            SupplierInsert::AutoId { .. } => last_insert_id as i64,
        }
    }
}

#[instrument(skip(db_pool))]
pub async fn list_suppliers(
    State(AppState { db_pool }): State<AppState>,
) -> Result<Json<Vec<Supplier>>, AppError> {
    const CONTEXT: &str = "Failed to fetch suppliers";

    let mut conn = database::acquire(&db_pool, CONTEXT).await?;
    let suppliers = sqlx::query_as::<_, Supplier>(
        "SELECT supplier_id, name, contact_info FROM suppliers ORDER BY supplier_id",
    )
    .fetch_all(&mut *conn)
    .await
    .map_err(|e| AppError::query(e, CONTEXT))?;

    Ok(Json(suppliers))
}

#[instrument(skip(db_pool))]
pub async fn get_supplier(
    State(AppState { db_pool }): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Supplier>, AppError> {
    const CONTEXT: &str = "Failed to fetch supplier";

    let mut conn = database::acquire(&db_pool, CONTEXT).await?;
    let supplier = sqlx::query_as::<_, Supplier>(
        "SELECT supplier_id, name, contact_info FROM suppliers WHERE supplier_id = ?",
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await
    .map_err(|e| AppError::query(e, CONTEXT))?
    .ok_or_else(|| AppError::not_found("Supplier not found"))?;

    Ok(Json(supplier))
}

#[instrument(skip(db_pool, payload))]
pub async fn create_supplier(
    State(AppState { db_pool }): State<AppState>,
    payload: Result<Json<CreateSupplierRequest>, JsonRejection>,
) -> Result<Json<SupplierCreatedResponse>, AppError> {
    const CONTEXT: &str = "Failed to add supplier";

    let Json(req) = payload?;
    let req = req.normalize()?;
    let insert = SupplierInsert::from_request(&req);

    let mut conn = database::acquire(&db_pool, CONTEXT).await?;
    let result = insert
        .query()
        .execute(&mut *conn)
        .await
        .map_err(|e| map_unique_violation(e, CONTEXT))?;

    let supplier_id = insert.supplier_id(result.last_insert_id());
    info!(supplier_id, "Supplier added");

    Ok(Json(SupplierCreatedResponse {
        message: "Supplier added",
        supplier_id,
    }))
}

#[instrument(skip(db_pool, payload))]
pub async fn update_supplier(
    State(AppState { db_pool }): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<UpdateSupplierRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    const CONTEXT: &str = "Failed to update supplier";

    let Json(req) = payload?;
    let req = req.normalize()?;

    let mut conn = database::acquire(&db_pool, CONTEXT).await?;
    let result = sqlx::query(
        "UPDATE suppliers SET name = ?, contact_info = ? WHERE supplier_id = ?",
    )
    .bind(&req.name)
    .bind(&req.contact_info)
    .bind(id)
    .execute(&mut *conn)
    .await
    .map_err(|e| AppError::query(e, CONTEXT))?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Supplier not found"));
    }

    Ok(Json(MessageResponse { message: "Supplier updated" }))
}

#[instrument(skip(db_pool))]
pub async fn delete_supplier(
    State(AppState { db_pool }): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    const CONTEXT: &str = "Failed to delete supplier";

    // Products pointing at this supplier are left to the foreign key; a RESTRICT failure is a plain 500.
    let mut conn = database::acquire(&db_pool, CONTEXT).await?;
    let result = sqlx::query("DELETE FROM suppliers WHERE supplier_id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(|e| AppError::query(e, CONTEXT))?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Supplier not found"));
    }

    Ok(Json(MessageResponse { message: "Supplier deleted" }))
}
