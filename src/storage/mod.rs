//! Key-value storage module for SQLite persistence.
//!
//! The entire menu collection is stored as one JSON array blob under a single
//! key, mirroring the browser-local storage the console originally used.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

use chrono::Utc;

use crate::errors::AppError;
use crate::models::MenuItem;

/// Storage key holding the serialized menu collection.
pub const MENU_ITEMS_KEY: &str = "menuItems";

/// Initialize the key-value store and run migrations.
pub async fn init_storage(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    // Ensure the parent directory exists
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await.ok();
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

    let options = SqliteConnectOptions::from_str(&db_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Create the key-value table if it does not exist.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Persistence adapter for the menu collection.
///
/// `load` never fails: read or parse errors are logged and treated as an
/// empty collection. `save` surfaces failures as a typed result so the
/// caller can decide whether to notify the operator.
#[derive(Clone)]
pub struct MenuStorage {
    pool: SqlitePool,
}

impl MenuStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Load the menu collection from the storage key.
    ///
    /// A missing key yields an empty collection. Records that fail
    /// validation (e.g. a negative price) are skipped with a warning;
    /// the remaining records survive.
    pub async fn load(&self) -> Vec<MenuItem> {
        let row: Option<(String,)> = match sqlx::query_as("SELECT value FROM kv WHERE key = ?")
            .bind(MENU_ITEMS_KEY)
            .fetch_optional(&self.pool)
            .await
        {
            Ok(row) => row,
            Err(e) => {
                tracing::error!("Error loading menu items: {}", e);
                return Vec::new();
            }
        };

        let Some((raw,)) = row else {
            return Vec::new();
        };

        let values: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(values) => values,
            Err(e) => {
                tracing::error!("Error parsing menu items: {}", e);
                return Vec::new();
            }
        };

        let mut items = Vec::with_capacity(values.len());
        for value in values {
            match serde_json::from_value::<MenuItem>(value) {
                Ok(item) => items.push(item),
                Err(e) => tracing::warn!("Skipping invalid menu record: {}", e),
            }
        }
        items
    }

    /// Serialize the full collection and overwrite the storage key.
    pub async fn save(&self, items: &[MenuItem]) -> Result<(), AppError> {
        let json = serde_json::to_string(items)?;
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO kv (key, value, updated_at) VALUES (?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
            "#,
        )
        .bind(MENU_ITEMS_KEY)
        .bind(&json)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
