//! Raw SQL helpers.

use crate::constraint::Engine;

/// Quote an identifier for use in a raw query.
///
/// Names that are already quoted are returned as is. PostgreSQL, SQLite and
/// unknown engines all use ANSI double quotes.
pub fn quote(name: &str, engine: &Engine) -> String {
    match engine {
        Engine::Postgresql | Engine::Sqlite | Engine::Unsupported(_) => {
            if name.len() >= 2 && name.starts_with('"') && name.ends_with('"') {
                name.to_string()
            } else {
                format!("\"{}\"", name.replace('"', "\"\""))
            }
        }
    }
}

/// Quote an absolute `table.column` reference.
pub fn column(table: &str, column: &str, engine: &Engine) -> String {
    format!("{}.{}", quote(table, engine), quote(column, engine))
}

/// Normalize all whitespace in a SQL string to single delimiters.
pub fn clean(sql: &str, delimiter: &str) -> String {
    sql.split_whitespace().collect::<Vec<_>>().join(delimiter)
}
