//! Contact API: CRUD REST backend for a single contact entity.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{Settings, StoreKind};
pub use error::{AppError, ConfigError};
pub use model::{Contact, ContactDraft};
pub use routes::{app, common_routes, contact_routes};
pub use service::ContactService;
pub use state::AppState;
pub use store::{ensure_contact_table, ensure_database_exists, ContactStore, MemoryContactStore, PgContactStore};
