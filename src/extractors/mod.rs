//! Request extractors with rejections mapped onto `AppError`.

mod json;
mod query;
pub use json::JsonBody;
pub use query::NameFilter;
