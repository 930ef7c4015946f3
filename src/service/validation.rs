//! Name validation shared by create and update.

use crate::error::AppError;

/// A name is valid when present and not made only of whitespace. Valid names are kept verbatim.
pub fn validate_name(name: Option<String>) -> Result<String, AppError> {
    match name {
        Some(n) if !n.trim().is_empty() => Ok(n),
        Some(_) => Err(AppError::Validation("name must not be blank".into())),
        None => Err(AppError::Validation("name is required".into())),
    }
}
