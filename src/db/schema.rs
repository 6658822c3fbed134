pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS books (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT,
    genre TEXT,
    rating INTEGER,
    comment TEXT,
    read_time INTEGER,
    date_read DATE
);

CREATE INDEX IF NOT EXISTS idx_books_date_read ON books(date_read);
"#;

/// Tables `migrations::run` guarantees to exist
pub const TABLES: &[&str] = &["books"];
