//! SQLite-backed, append-only history of fetched quotes.
//!
//! The store is opened once at startup: the data directory is created if needed and
//! the schema is applied with `CREATE TABLE IF NOT EXISTS`. The resulting handle
//! wraps a `sqlx` pool and is cheap to clone into every request. Concurrent inserts
//! are serialized by SQLite itself (WAL journal plus a busy timeout), so no lock is
//! held on this side.
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, Utc};
use log::{debug, info};
use quote_common::QuoteError;
use rust_decimal::Decimal;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

use crate::model::record::QuoteRecord;

const MAX_CONNECTIONS: u32 = 8;
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS currency_quotes (
    id          TEXT PRIMARY KEY NOT NULL,
    value       REAL NOT NULL,
    code        TEXT NOT NULL,
    codein      TEXT NOT NULL,
    high        REAL NOT NULL,
    low         REAL NOT NULL,
    name        TEXT NOT NULL,
    pct_change  REAL NOT NULL,
    created_at  TEXT NOT NULL,
    updated_at  TEXT NOT NULL,
    deleted_at  TEXT
)";

const INSERT: &str = "INSERT INTO currency_quotes
    (id, value, code, codein, high, low, name, pct_change, created_at, updated_at, deleted_at)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";

const SELECT_LATEST: &str = "SELECT id, value, code, codein, high, low, name, pct_change,
    created_at, updated_at, deleted_at
    FROM currency_quotes ORDER BY created_at DESC LIMIT 1";

/// Shared handle to the quote history table.
#[derive(Clone)]
pub struct QuoteStore {
    pool: SqlitePool,
    insert_timeout: Duration,
}

#[derive(sqlx::FromRow)]
struct QuoteRow {
    id: String,
    value: f64,
    code: String,
    codein: String,
    high: f64,
    low: f64,
    name: String,
    pct_change: f64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl QuoteStore {
    /// Open (creating if missing) `dir/file` and make sure the table exists.
    pub async fn open(dir: &Path, file: &str, insert_timeout: Duration) -> Result<Self, QuoteError> {
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| {
                QuoteError::Store(format!("failed to create data folder {}: {}", dir.display(), e))
            })?;
            info!("Created data folder {}", dir.display());
        }

        let path = dir.join(file);
        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(BUSY_TIMEOUT);
        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await
            .map_err(|e| QuoteError::Store(format!("failed to open db {}: {}", path.display(), e)))?;

        let store = Self { pool, insert_timeout };
        store.migrate().await?;
        info!("Quote store ready at {}", path.display());
        Ok(store)
    }

    /// Private in-memory database, gone when the store is dropped.
    pub async fn in_memory(insert_timeout: Duration) -> Result<Self, QuoteError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| QuoteError::Store(format!("failed to open db: {}", e)))?;
        // Every connection to `:memory:` is a separate database, so keep exactly one alive.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| QuoteError::Store(format!("failed to open db: {}", e)))?;

        let store = Self { pool, insert_timeout };
        store.migrate().await?;
        Ok(store)
    }

    async fn migrate(&self) -> Result<(), QuoteError> {
        sqlx::query(CREATE_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| QuoteError::Store(format!("failed to migrate db: {}", e)))?;
        Ok(())
    }

    /// Append one record. Bounded by the insert timeout.
    pub async fn insert(&self, record: &QuoteRecord) -> Result<(), QuoteError> {
        let query = sqlx::query(INSERT)
            .bind(record.id.as_str())
            .bind(real_from_decimal(record.value)?)
            .bind(record.code.as_str())
            .bind(record.codein.as_str())
            .bind(real_from_decimal(record.high)?)
            .bind(real_from_decimal(record.low)?)
            .bind(record.name.as_str())
            .bind(real_from_decimal(record.pct_change)?)
            .bind(record.created_at)
            .bind(record.updated_at)
            .bind(record.deleted_at);

        tokio::time::timeout(self.insert_timeout, query.execute(&self.pool))
            .await
            .map_err(|_| {
                QuoteError::Store(format!(
                    "insert timed out after {} ms",
                    self.insert_timeout.as_millis()
                ))
            })?
            .map_err(|e| QuoteError::Store(format!("failed to create currency quote: {}", e)))?;

        debug!("Stored quote {} ({} {})", record.id, record.code, record.value);
        Ok(())
    }

    /// Number of stored records.
    pub async fn count(&self) -> Result<i64, QuoteError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM currency_quotes")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| QuoteError::Store(format!("failed to count currency quotes: {}", e)))
    }

    /// Most recently created record, if any.
    pub async fn latest(&self) -> Result<Option<QuoteRecord>, QuoteError> {
        let row = sqlx::query_as::<_, QuoteRow>(SELECT_LATEST)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| QuoteError::Store(format!("failed to read currency quote: {}", e)))?;

        row.map(QuoteRecord::try_from).transpose()
    }
}

impl TryFrom<QuoteRow> for QuoteRecord {
    type Error = QuoteError;

    fn try_from(row: QuoteRow) -> Result<Self, Self::Error> {
        Ok(QuoteRecord {
            id: row.id,
            value: decimal_from_real(row.value)?,
            code: row.code,
            codein: row.codein,
            high: decimal_from_real(row.high)?,
            low: decimal_from_real(row.low)?,
            name: row.name,
            pct_change: decimal_from_real(row.pct_change)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        })
    }
}

// Both directions go through the shortest decimal text so 5.32 stays 5.32.
fn real_from_decimal(value: Decimal) -> Result<f64, QuoteError> {
    value
        .to_string()
        .parse::<f64>()
        .map_err(|e| QuoteError::Store(format!("{} is not storable as REAL: {}", value, e)))
}

fn decimal_from_real(value: f64) -> Result<Decimal, QuoteError> {
    Decimal::from_str(&value.to_string())
        .map_err(|e| QuoteError::Store(format!("stored value {} is not a decimal: {}", value, e)))
}
