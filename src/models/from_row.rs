use rusqlite::Row;

/// Build a model from a named-column SQLite row.
pub trait FromSqliteRow: Sized {
    fn from_row(row: &Row) -> rusqlite::Result<Self>;
}
