pub mod types;
mod loader;
pub mod validator;

pub use types::*;
pub use validator::*;
