//! PostgreSQL-backed contact store. The table lives in the schema given at construction.

use super::ContactStore;
use crate::error::{AppError, ConfigError};
use crate::model::{Contact, ContactDraft};
use crate::sql::{self, QueryBuf};
use async_trait::async_trait;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

#[derive(Clone)]
pub struct PgContactStore {
    pool: PgPool,
    schema: String,
}

impl PgContactStore {
    pub fn new(pool: PgPool, schema: impl Into<String>) -> Self {
        PgContactStore {
            pool,
            schema: schema.into(),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn fetch_many(&self, q: &QueryBuf) -> Result<Vec<Contact>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let args = sql::to_arguments(&q.params)?;
        let rows = sqlx::query_as_with::<_, Contact, _>(&q.sql, args)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn fetch_optional(&self, q: &QueryBuf) -> Result<Option<Contact>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let args = sql::to_arguments(&q.params)?;
        let row = sqlx::query_as_with::<_, Contact, _>(&q.sql, args)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}

#[async_trait]
impl ContactStore for PgContactStore {
    async fn find_all(&self) -> Result<Vec<Contact>, AppError> {
        self.fetch_many(&sql::select_all(&self.schema)).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Contact>, AppError> {
        self.fetch_optional(&sql::select_by_id(&self.schema, id)).await
    }

    async fn find_by_name_contains(&self, substring: &str) -> Result<Vec<Contact>, AppError> {
        self.fetch_many(&sql::select_name_contains(&self.schema, substring))
            .await
    }

    async fn save(&self, draft: ContactDraft) -> Result<Contact, AppError> {
        match draft.id {
            None => {
                let q = sql::insert(&self.schema, &draft.name);
                self.fetch_optional(&q)
                    .await?
                    .ok_or_else(|| AppError::Store("insert returned no row".into()))
            }
            Some(id) => {
                let q = sql::update(&self.schema, id, &draft.name);
                self.fetch_optional(&q)
                    .await?
                    .ok_or_else(|| AppError::NotFound(id.to_string()))
            }
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let q = sql::delete(&self.schema, id);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let args = sql::to_arguments(&q.params)?;
        let result = sqlx::query_with(&q.sql, args).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|_| invalid_url(database_url))?;
    let mut conn: sqlx::PgConnection = opts.connect().await.map_err(AppError::Db)?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await
        .map_err(AppError::Db)?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", sql::quoted(&db_name)))
            .execute(&mut conn)
            .await
            .map_err(AppError::Db)?;
    }
    Ok(())
}

/// Split `scheme://authority/dbname?query` into an admin URL (db `postgres`) and the db name.
/// The path is the first `/` after the authority; a URL without one has an empty db name.
fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let authority_start = url.find("://").ok_or_else(|| invalid_url(url))? + 3;
    let rest = &url[authority_start..];
    let authority_end = rest.find(['/', '?']).unwrap_or(rest.len());
    let base = &url[..authority_start + authority_end];
    let after_authority = &rest[authority_end..];
    let (path, query) = match after_authority.find('?') {
        Some(i) => (&after_authority[..i], &after_authority[i..]),
        None => (after_authority, ""),
    };
    let db_name = path.strip_prefix('/').unwrap_or(path).trim();
    let admin_url = format!("{}/postgres{}", base, query);
    Ok((admin_url, db_name.to_string()))
}

fn invalid_url(url: &str) -> AppError {
    AppError::Config(ConfigError::InvalidValue {
        var: "DATABASE_URL",
        value: url.to_string(),
    })
}

/// Create the schema and the `contact` table when missing. Ids come from the `BIGSERIAL` sequence,
/// so they are never reused after a delete.
pub async fn ensure_contact_table(pool: &PgPool, schema: &str) -> Result<(), AppError> {
    sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", sql::quoted(schema)))
        .execute(pool)
        .await?;
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL
        )
        "#,
        sql::qualified_table(schema, sql::CONTACT_TABLE)
    );
    sqlx::query(&ddl).execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_name_is_split_from_url() {
        let (admin, name) = parse_db_name_from_url("postgres://u:p@localhost:5432/contacts").unwrap();
        assert_eq!(admin, "postgres://u:p@localhost:5432/postgres");
        assert_eq!(name, "contacts");
    }

    #[test]
    fn query_string_is_kept_on_admin_url() {
        let (admin, name) = parse_db_name_from_url("postgres://localhost/contacts?sslmode=disable").unwrap();
        assert_eq!(admin, "postgres://localhost/postgres?sslmode=disable");
        assert_eq!(name, "contacts");
    }

    #[test]
    fn slash_in_query_does_not_move_the_path() {
        let (admin, name) =
            parse_db_name_from_url("postgres://localhost:5432/contacts?sslrootcert=/etc/ca.pem").unwrap();
        assert_eq!(admin, "postgres://localhost:5432/postgres?sslrootcert=/etc/ca.pem");
        assert_eq!(name, "contacts");
    }

    #[test]
    fn url_without_database_has_empty_name() {
        let (admin, name) = parse_db_name_from_url("postgres://localhost").unwrap();
        assert_eq!(admin, "postgres://localhost/postgres");
        assert_eq!(name, "");
        let (admin, name) = parse_db_name_from_url("postgres://localhost?sslmode=disable").unwrap();
        assert_eq!(admin, "postgres://localhost/postgres?sslmode=disable");
        assert_eq!(name, "");
    }

    #[test]
    fn url_without_scheme_is_rejected() {
        assert!(parse_db_name_from_url("localhost").is_err());
    }
}
