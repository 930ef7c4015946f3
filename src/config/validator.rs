//! Settings validation.

use crate::error::ConfigError;

const MAX_IDENTIFIER_LEN: usize = 63;

/// Schema names must be plain PostgreSQL identifiers: a letter or underscore, then letters, digits, underscores.
pub fn validate_schema_name(name: &str) -> Result<(), ConfigError> {
    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .map(|c| c.is_ascii_alphabetic() || c == '_')
        .unwrap_or(false);
    let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid_start || !valid_rest || name.len() > MAX_IDENTIFIER_LEN {
        return Err(ConfigError::InvalidSchema(name.to_string()));
    }
    Ok(())
}
