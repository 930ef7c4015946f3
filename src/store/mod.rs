//! Contact persistence: the store trait and its PostgreSQL and in-memory backends.

mod memory;
mod postgres;

pub use memory::MemoryContactStore;
pub use postgres::{ensure_contact_table, ensure_database_exists, PgContactStore};

use crate::error::AppError;
use crate::model::{Contact, ContactDraft};
use async_trait::async_trait;

/// Durable keyed collection of contacts. Every operation is atomic with respect to the others.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Every contact, in insertion order.
    async fn find_all(&self) -> Result<Vec<Contact>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Contact>, AppError>;

    /// Case-insensitive, unanchored match on `name`. An empty substring matches all.
    async fn find_by_name_contains(&self, substring: &str) -> Result<Vec<Contact>, AppError>;

    /// Insert when `draft.id` is `None` (a fresh id is assigned), otherwise overwrite that row.
    /// Overwriting an absent id fails with `AppError::NotFound`.
    async fn save(&self, draft: ContactDraft) -> Result<Contact, AppError>;

    /// Remove the row if present. Returns whether a row was removed.
    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Cheap liveness check of the backing engine.
    async fn ping(&self) -> Result<(), AppError>;
}
