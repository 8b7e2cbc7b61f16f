// src/state.rs
use sqlx::MySqlPool;

#[derive(Clone)]
pub struct AppState {
    pub db_pool: MySqlPool,
}

impl AppState {
    pub fn new(db_pool: MySqlPool) -> Self {
        Self { db_pool }
    }
}
