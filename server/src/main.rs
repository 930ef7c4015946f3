//! Contact server: reads settings from the environment (and `.env`), prepares the store, serves the API.
//!
//! Run from repo root: `cargo run -p contact-server`
//! In-memory store, no database needed: `CONTACT_STORE=memory cargo run -p contact-server`

use contact_api::{
    app,
    ensure_contact_table,
    ensure_database_exists,
    AppState,
    ContactStore,
    MemoryContactStore,
    PgContactStore,
    Settings,
    StoreKind,
};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("contact_api=info,contact_server=info,tower_http=info")),
        )
        .init();

    let store: Arc<dyn ContactStore> = match settings.store {
        StoreKind::Memory => {
            tracing::warn!("using in-memory contact store; data is lost on restart");
            Arc::new(MemoryContactStore::new())
        }
        StoreKind::Postgres => {
            ensure_database_exists(&settings.database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(settings.max_connections)
                .connect(&settings.database_url)
                .await?;
            ensure_contact_table(&pool, &settings.schema).await?;
            Arc::new(PgContactStore::new(pool, settings.schema.clone()))
        }
    };

    let router = app(AppState::new(store), settings.body_limit_bytes);
    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
