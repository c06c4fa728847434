//! Database connection handling
//!
//! The [`Database`] struct owns the connection pool for the single on-disk
//! SQLite file. It is constructed once at application startup and handed to
//! the command surface; repositories borrow pooled connections from it.
//! Foreign-key enforcement is switched on for every pooled connection.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result as AnyResult};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use tracing::info;

use crate::error::Result;
use crate::migrations;
use crate::models::SchemaStatus;

/// Type alias for the database connection pool
pub type DbPool = Pool<SqliteConnectionManager>;
/// Type alias for a pooled connection
pub type DbConnection = r2d2::PooledConnection<SqliteConnectionManager>;

/// Default pool size when none is configured
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Owns the pool for the backing SQLite file and the schema state that
/// resulted from running migrations at startup.
pub struct Database {
    pool: DbPool,
    schema_status: SchemaStatus,
}

impl Database {
    /// Open (or create) the database file and bring its schema up to date.
    ///
    /// Fails when the file cannot be opened or locked; a failed migration
    /// step does not fail construction and is reported through
    /// [`Database::schema_status`] instead.
    pub fn new(database_path: &str) -> AnyResult<Self> {
        Self::with_pool_size(database_path, DEFAULT_MAX_CONNECTIONS)
    }

    /// Open the database with an explicit pool size.
    pub fn with_pool_size(database_path: &str, max_connections: u32) -> AnyResult<Self> {
        if let Some(parent) = Path::new(database_path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }

        let manager = SqliteConnectionManager::file(database_path)
            .with_init(|conn| conn.execute_batch("PRAGMA foreign_keys = ON;"));
        let pool = Pool::builder()
            .max_size(max_connections)
            .build(manager)
            .context("Failed to create database connection pool")?;

        let mut conn = pool.get().context("Failed to open database connection")?;
        let schema_status = migrations::run(&mut conn);
        info!(
            path = database_path,
            version = schema_status.version,
            degraded = schema_status.degraded,
            "database ready"
        );

        Ok(Self { pool, schema_status })
    }

    /// Get a connection from the pool
    pub fn get_connection(&self) -> Result<DbConnection> {
        Ok(self.pool.get()?)
    }

    /// Schema state recorded by the migration runner at startup
    #[must_use]
    pub fn schema_status(&self) -> &SchemaStatus {
        &self.schema_status
    }
}
