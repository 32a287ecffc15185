use shared::{
    config::DatabaseConfig,
    error::{AppError, AppResult},
};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use std::str::FromStr;

pub mod model;

// Each statement is idempotent so the schema can be synchronized on every start.
const SCHEMA: [&str; 4] = [
    r#"
        CREATE TABLE IF NOT EXISTS customers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            phone TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
    "#,
    r#"
        CREATE TABLE IF NOT EXISTS rooms (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            number TEXT NOT NULL,
            room_type TEXT NOT NULL,
            price TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'available'
                CHECK (status IN ('available', 'occupied')),
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
    "#,
    r#"
        CREATE TABLE IF NOT EXISTS reservations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            customer_id INTEGER NOT NULL REFERENCES customers (id) ON DELETE CASCADE,
            room_id INTEGER NOT NULL REFERENCES rooms (id) ON DELETE CASCADE,
            check_in TEXT NOT NULL,
            check_out TEXT,
            status TEXT NOT NULL DEFAULT 'confirmed'
                CHECK (status IN ('confirmed', 'cancelled')),
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
    "#,
    r#"
        CREATE INDEX IF NOT EXISTS reservations_customer_id_idx
        ON reservations (customer_id)
    "#,
];

fn make_sqlite_connect_options(cfg: &DatabaseConfig) -> AppResult<SqliteConnectOptions> {
    SqliteConnectOptions::from_str(&cfg.url)
        .map(|options| options.foreign_keys(true))
        .map_err(AppError::SpecificOperationError)
}

#[derive(Clone)]
pub struct ConnectionPool(SqlitePool);

impl ConnectionPool {
    pub fn new(pool: SqlitePool) -> Self {
        Self(pool)
    }

    pub fn inner_ref(&self) -> &SqlitePool {
        &self.0
    }

    pub async fn begin(&self) -> AppResult<sqlx::Transaction<'_, sqlx::Sqlite>> {
        self.0.begin().await.map_err(AppError::TransactionError)
    }

    pub async fn close(&self) {
        self.0.close().await
    }
}

// Connections are opened on first use. They are never recycled, which keeps
// an in-memory database alive for the lifetime of the pool.
pub fn connect_database_with(cfg: &DatabaseConfig) -> AppResult<ConnectionPool> {
    let options = make_sqlite_connect_options(cfg)?;
    let pool = SqlitePoolOptions::new()
        .max_connections(cfg.max_connections)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_lazy_with(options);
    Ok(ConnectionPool::new(pool))
}

pub async fn sync_schema(db: &ConnectionPool) -> AppResult<()> {
    let mut tx = db.begin().await?;

    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
    }

    tx.commit().await.map_err(AppError::TransactionError)?;
    tracing::info!("database schema synchronized");

    Ok(())
}

#[cfg(test)]
pub(crate) async fn prepare(pool: SqlitePool) -> ConnectionPool {
    let db = ConnectionPool::new(pool);
    sync_schema(&db).await.unwrap();
    db
}
