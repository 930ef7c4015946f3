//! ContactService: the business layer between handlers and the store.

mod contact;
mod validation;
pub use contact::ContactService;
pub use validation::validate_name;
