//! Contact orchestration over any `ContactStore`.

use super::validation::validate_name;
use crate::error::AppError;
use crate::model::{Contact, ContactDraft};
use crate::store::ContactStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct ContactService {
    store: Arc<dyn ContactStore>,
}

impl ContactService {
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        ContactService { store }
    }

    pub fn store(&self) -> &Arc<dyn ContactStore> {
        &self.store
    }

    /// No filter lists everything; any filter (including "") is a case-insensitive substring search.
    pub async fn list_contacts(&self, name_filter: Option<&str>) -> Result<Vec<Contact>, AppError> {
        match name_filter {
            None => self.store.find_all().await,
            Some(f) => self.store.find_by_name_contains(f).await,
        }
    }

    pub async fn get_contact(&self, id: i64) -> Result<Option<Contact>, AppError> {
        self.store.find_by_id(id).await
    }

    pub async fn create_contact(&self, name: Option<String>) -> Result<Contact, AppError> {
        let name = validate_name(name)?;
        let contact = self.store.save(ContactDraft::new(name)).await?;
        tracing::info!(id = contact.id, "contact created");
        Ok(contact)
    }

    /// `existing` must already be resolved by the caller; existence is not re-checked here.
    pub async fn update_contact(&self, existing: Contact, new_name: Option<String>) -> Result<Contact, AppError> {
        let name = validate_name(new_name)?;
        let mut draft = ContactDraft::from(existing);
        draft.name = name;
        let contact = self.store.save(draft).await?;
        tracing::info!(id = contact.id, "contact updated");
        Ok(contact)
    }

    /// Idempotent. Returns whether a row was removed.
    pub async fn delete_contact(&self, id: i64) -> Result<bool, AppError> {
        let removed = self.store.delete_by_id(id).await?;
        if removed {
            tracing::info!(id, "contact deleted");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryContactStore;

    fn service() -> ContactService {
        ContactService::new(Arc::new(MemoryContactStore::new()))
    }

    #[tokio::test]
    async fn created_contact_is_readable() {
        let svc = service();
        let c = svc.create_contact(Some("F Smith".into())).await.unwrap();
        let got = svc.get_contact(c.id).await.unwrap().unwrap();
        assert_eq!(got.name, "F Smith");
        assert_eq!(got.id, c.id);
    }

    #[tokio::test]
    async fn blank_create_persists_nothing() {
        let svc = service();
        for name in [None, Some(""), Some(" ")] {
            let res = svc.create_contact(name.map(String::from)).await;
            assert!(matches!(res, Err(AppError::Validation(_))));
        }
        assert!(svc.list_contacts(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_replaces_name_and_keeps_id() {
        let svc = service();
        let c = svc.create_contact(Some("G Doe".into())).await.unwrap();
        let u = svc.update_contact(c.clone(), Some("G Smith".into())).await.unwrap();
        assert_eq!(u.id, c.id);
        assert_eq!(svc.get_contact(c.id).await.unwrap().unwrap().name, "G Smith");
    }

    #[tokio::test]
    async fn blank_update_leaves_record_unchanged() {
        let svc = service();
        let c = svc.create_contact(Some("H Doe".into())).await.unwrap();
        let res = svc.update_contact(c.clone(), Some("  ".into())).await;
        assert!(matches!(res, Err(AppError::Validation(_))));
        assert_eq!(svc.get_contact(c.id).await.unwrap(), Some(c));
    }

    #[tokio::test]
    async fn empty_filter_differs_from_absent_only_in_path() {
        let svc = service();
        svc.create_contact(Some("Bruce Wayne".into())).await.unwrap();
        svc.create_contact(Some("Clark Kent".into())).await.unwrap();
        assert_eq!(svc.list_contacts(Some("")).await.unwrap().len(), 2);
        assert_eq!(svc.list_contacts(None).await.unwrap().len(), 2);
        let found = svc.list_contacts(Some("wAyNe")).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Bruce Wayne");
    }

    #[tokio::test]
    async fn delete_reports_removal_once() {
        let svc = service();
        let c = svc.create_contact(Some("H Smith".into())).await.unwrap();
        assert!(svc.delete_contact(c.id).await.unwrap());
        assert!(!svc.delete_contact(c.id).await.unwrap());
    }
}
