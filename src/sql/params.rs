//! Bind values for built queries.

use sqlx::postgres::PgArguments;
use sqlx::Arguments;

/// A value bound to a positional placeholder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SqlParam {
    Int(i64),
    Text(String),
}

/// Collect params into sqlx arguments, in placeholder order.
pub fn to_arguments(params: &[SqlParam]) -> Result<PgArguments, sqlx::Error> {
    let mut args = PgArguments::default();
    for p in params {
        match p {
            SqlParam::Int(n) => args.add(*n),
            SqlParam::Text(s) => args.add(s.clone()),
        }
        .map_err(sqlx::Error::Encode)?;
    }
    Ok(args)
}
