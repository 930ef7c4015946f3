//! Optional `name` search filter from the query string.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};

/// `None` when no `name` key is present, `Some("")` for `?name=` or a bare `?name`.
/// A repeated key is joined with `,` (`?name=a&name=b` filters on `"a,b"`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameFilter(pub Option<String>);

#[async_trait]
impl<S> FromRequestParts<S> for NameFilter
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        let values: Vec<String> = pairs
            .into_iter()
            .filter(|(k, _)| k == "name")
            .map(|(_, v)| v)
            .collect();
        if values.is_empty() {
            return Ok(NameFilter(None));
        }
        Ok(NameFilter(Some(values.join(","))))
    }
}
