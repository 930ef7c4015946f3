//! Builds parameterized SELECT, INSERT, UPDATE, DELETE for the contact table.

use super::params::SqlParam;

pub const CONTACT_TABLE: &str = "contact";

const CONTACT_COLUMNS: &str = "\"id\", \"name\"";

/// Quote identifier for PostgreSQL.
pub fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Full qualified table name.
pub fn qualified_table(schema: &str, table: &str) -> String {
    format!("{}.{}", quoted(schema), quoted(table))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: SqlParam) -> u32 {
        let n = self.params.len() as u32 + 1;
        self.params.push(v);
        n
    }
}

/// Escape `LIKE` metacharacters so the filter matches literally, then wrap in `%...%`.
pub fn contains_pattern(substring: &str) -> String {
    let mut out = String::with_capacity(substring.len() + 2);
    out.push('%');
    for c in substring.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('%');
    out
}

/// SELECT every row in id order.
pub fn select_all(schema: &str) -> QueryBuf {
    let mut q = QueryBuf::new();
    let table = qualified_table(schema, CONTACT_TABLE);
    q.sql = format!("SELECT {} FROM {} ORDER BY \"id\"", CONTACT_COLUMNS, table);
    q
}

/// SELECT by primary key.
pub fn select_by_id(schema: &str, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let table = qualified_table(schema, CONTACT_TABLE);
    let n = q.push_param(SqlParam::Int(id));
    q.sql = format!("SELECT {} FROM {} WHERE \"id\" = ${}", CONTACT_COLUMNS, table, n);
    q
}

/// SELECT rows whose name contains `substring`, ignoring case. Empty substring matches all rows.
pub fn select_name_contains(schema: &str, substring: &str) -> QueryBuf {
    let mut q = QueryBuf::new();
    let table = qualified_table(schema, CONTACT_TABLE);
    let n = q.push_param(SqlParam::Text(contains_pattern(substring)));
    q.sql = format!(
        "SELECT {} FROM {} WHERE \"name\" ILIKE ${} ESCAPE '\\' ORDER BY \"id\"",
        CONTACT_COLUMNS, table, n
    );
    q
}

/// INSERT with a sequence-assigned id.
pub fn insert(schema: &str, name: &str) -> QueryBuf {
    let mut q = QueryBuf::new();
    let table = qualified_table(schema, CONTACT_TABLE);
    let n = q.push_param(SqlParam::Text(name.to_string()));
    q.sql = format!(
        "INSERT INTO {} (\"name\") VALUES (${}) RETURNING {}",
        table, n, CONTACT_COLUMNS
    );
    q
}

/// UPDATE name by id. Returns no row when the id is absent.
pub fn update(schema: &str, id: i64, name: &str) -> QueryBuf {
    let mut q = QueryBuf::new();
    let table = qualified_table(schema, CONTACT_TABLE);
    let name_param = q.push_param(SqlParam::Text(name.to_string()));
    let id_param = q.push_param(SqlParam::Int(id));
    q.sql = format!(
        "UPDATE {} SET \"name\" = ${} WHERE \"id\" = ${} RETURNING {}",
        table, name_param, id_param, CONTACT_COLUMNS
    );
    q
}

/// DELETE by id.
pub fn delete(schema: &str, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let table = qualified_table(schema, CONTACT_TABLE);
    let n = q.push_param(SqlParam::Int(id));
    q.sql = format!("DELETE FROM {} WHERE \"id\" = ${}", table, n);
    q
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_escapes_like_metacharacters() {
        assert_eq!(contains_pattern("bru"), "%bru%");
        assert_eq!(contains_pattern(""), "%%");
        assert_eq!(contains_pattern("50%_off\\"), "%50\\%\\_off\\\\%");
    }

    #[test]
    fn identifiers_are_quoted() {
        assert_eq!(qualified_table("public", "contact"), "\"public\".\"contact\"");
        assert_eq!(quoted("we\"ird"), "\"we\"\"ird\"");
    }

    #[test]
    fn update_numbers_params_in_order() {
        let q = update("public", 9, "G Smith");
        assert_eq!(
            q.sql,
            "UPDATE \"public\".\"contact\" SET \"name\" = $1 WHERE \"id\" = $2 RETURNING \"id\", \"name\""
        );
        assert_eq!(
            q.params,
            vec![SqlParam::Text("G Smith".into()), SqlParam::Int(9)]
        );
    }

    #[test]
    fn search_uses_ilike_with_escape() {
        let q = select_name_contains("app", "Wayne");
        assert!(q.sql.contains("ILIKE $1 ESCAPE '\\'"));
        assert!(q.sql.ends_with("ORDER BY \"id\""));
        assert_eq!(q.params, vec![SqlParam::Text("%Wayne%".into())]);
    }
}
