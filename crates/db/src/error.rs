//! Storage-layer error type.
//!
//! Every repository call returns [`StoreError`]. Raw `sqlx` errors are
//! classified on conversion so callers can tell a duplicate SKU from a broken
//! constraint from an unreachable database without inspecting driver codes.

use sqlx::error::ErrorKind;
use stockroom_core::error::CoreError;
use stockroom_core::inventory::ENTITY_INVENTORY_ITEM;

/// SQLite primary result codes that mean the database cannot serve requests.
///
/// `SQLITE_BUSY` (5), `SQLITE_LOCKED` (6), `SQLITE_IOERR` (10),
/// `SQLITE_CANTOPEN` (14).
const UNAVAILABLE_CODES: &[i32] = &[5, 6, 10, 14];

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// An insert collided with an existing SKU.
    #[error("Duplicate SKU: {sku}")]
    DuplicateKey { sku: String },

    /// A schema rule (NOT NULL, CHECK, foreign key) rejected the write.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// The database could not be reached or opened.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Applying embedded migrations failed.
    #[error("Migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Any other database error.
    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl StoreError {
    /// Attach the offending SKU to a [`StoreError::DuplicateKey`].
    pub(crate) fn for_sku(self, sku: &str) -> Self {
        match self {
            Self::DuplicateKey { .. } => Self::DuplicateKey {
                sku: sku.to_string(),
            },
            other => other,
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => match db_err.kind() {
                ErrorKind::UniqueViolation => Self::DuplicateKey { sku: String::new() },
                ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation
                | ErrorKind::ForeignKeyViolation => {
                    Self::ConstraintViolation(db_err.message().to_string())
                }
                _ if is_unavailable_code(db_err.code().as_deref()) => {
                    Self::StorageUnavailable(db_err.message().to_string())
                }
                _ => Self::Database(sqlx::Error::Database(db_err)),
            },
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Configuration(_) => Self::StorageUnavailable(err.to_string()),
            other => Self::Database(other),
        }
    }
}

/// Check whether an extended SQLite result code maps to an unavailable store.
fn is_unavailable_code(code: Option<&str>) -> bool {
    code.and_then(|c| c.parse::<i32>().ok())
        .map(|c| UNAVAILABLE_CODES.contains(&(c & 0xff)))
        .unwrap_or(false)
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateKey { sku } => CoreError::DuplicateKey {
                entity: ENTITY_INVENTORY_ITEM,
                key: sku,
            },
            StoreError::ConstraintViolation(msg) => CoreError::ConstraintViolation(msg),
            StoreError::StorageUnavailable(msg) => CoreError::StorageUnavailable(msg),
            StoreError::Migration(err) => CoreError::Internal(err.to_string()),
            StoreError::Database(err) => CoreError::Internal(err.to_string()),
        }
    }
}
