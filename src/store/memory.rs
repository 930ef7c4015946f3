//! In-memory contact store for tests and `CONTACT_STORE=memory`.

use super::ContactStore;
use crate::error::AppError;
use crate::model::{Contact, ContactDraft};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::RwLock;

#[derive(Default)]
struct Inner {
    /// Keyed by id; ids only grow, so key order is insertion order.
    rows: BTreeMap<i64, Contact>,
    last_id: i64,
}

/// Map and id counter behind one lock. The lock is never held across an await.
#[derive(Default)]
pub struct MemoryContactStore {
    inner: RwLock<Inner>,
}

impl MemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Inner>, AppError> {
        self.inner
            .read()
            .map_err(|_| AppError::Store("contact store lock poisoned".into()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Inner>, AppError> {
        self.inner
            .write()
            .map_err(|_| AppError::Store("contact store lock poisoned".into()))
    }
}

#[async_trait]
impl ContactStore for MemoryContactStore {
    async fn find_all(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.read()?.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Contact>, AppError> {
        Ok(self.read()?.rows.get(&id).cloned())
    }

    async fn find_by_name_contains(&self, substring: &str) -> Result<Vec<Contact>, AppError> {
        let needle = substring.to_lowercase();
        Ok(self
            .read()?
            .rows
            .values()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn save(&self, draft: ContactDraft) -> Result<Contact, AppError> {
        let mut inner = self.write()?;
        match draft.id {
            None => {
                inner.last_id += 1;
                let contact = Contact {
                    id: inner.last_id,
                    name: draft.name,
                };
                inner.rows.insert(contact.id, contact.clone());
                Ok(contact)
            }
            Some(id) => {
                let row = inner
                    .rows
                    .get_mut(&id)
                    .ok_or_else(|| AppError::NotFound(id.to_string()))?;
                row.name = draft.name;
                Ok(row.clone())
            }
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.write()?.rows.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.read().map(|_| ())
    }
}
