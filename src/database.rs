// src/database.rs
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::pool::PoolConnection;
use sqlx::{MySql, MySqlPool};

use crate::config::DatabaseConfig;
use crate::error::AppError;

pub fn connect_options(db: &DatabaseConfig) -> MySqlConnectOptions {
    MySqlConnectOptions::new()
        .host(&db.host)
        .port(db.port)
        .username(&db.user)
        .password(&db.password)
        .database(&db.name)
}

/// Builds the pool without opening a connection; connections are made on first acquire.
pub fn create_pool(db: &DatabaseConfig) -> MySqlPool {
    MySqlPoolOptions::new()
        .max_connections(db.max_connections)
        .acquire_timeout(db.acquire_timeout)
        .connect_lazy_with(connect_options(db))
}

/// Checks out one connection for the current request.
///
/// The connection goes back to the pool when the guard is dropped, on success
/// and error paths alike.
pub async fn acquire(
    pool: &MySqlPool,
    context: &'static str,
) -> Result<PoolConnection<MySql>, AppError> {
    pool.acquire()
        .await
        .map_err(|e| AppError::connection(e, context))
}

pub async fn ping(pool: &MySqlPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Config for a server that refuses connections; acquires fail fast.
#[cfg(test)]
pub(crate) fn unreachable_db() -> DatabaseConfig {
    DatabaseConfig {
        host: "127.0.0.1".to_string(),
        user: "root".to_string(),
        password: String::new(),
        name: "scm_system".to_string(),
        // nothing listens on port 1
        port: 1,
        max_connections: 2,
        acquire_timeout: std::time::Duration::from_millis(300),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_options_carry_config() {
        let options = connect_options(&unreachable_db());
        assert_eq!(options.get_host(), "127.0.0.1");
        assert_eq!(options.get_port(), 1);
        assert_eq!(options.get_username(), "root");
        assert_eq!(options.get_database(), Some("scm_system"));
    }

    #[tokio::test]
    async fn acquire_maps_failure_to_connection_error() {
        let pool = create_pool(&unreachable_db());
        let err = acquire(&pool, "Failed to fetch products").await.unwrap_err();
        match err {
            AppError::ConnectionError { context, .. } => {
                assert_eq!(context, "Failed to fetch products")
            }
            other => panic!("expected connection error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn ping_fails_when_server_is_down() {
        let pool = create_pool(&unreachable_db());
        assert!(ping(&pool).await.is_err());
    }
}
