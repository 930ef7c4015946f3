//! Shared application state for all routes.

use crate::service::ContactService;
use crate::store::ContactStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub contacts: ContactService,
}

impl AppState {
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        AppState {
            contacts: ContactService::new(store),
        }
    }
}
