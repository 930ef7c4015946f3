//! Contact CRUD route table.

use crate::handlers::contact::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn contact_routes(state: AppState) -> Router {
    Router::new()
        .route("/contact", get(list).post(create))
        .route(
            "/contact/:id",
            get(read).put(update).delete(delete_handler),
        )
        .with_state(state)
}
