use chrono::NaiveDate;
use rusqlite::{params, Connection, Result, Row};

/// A stored reading record. Never updated or deleted once created.
///
/// The columns are nullable, so rows written by other tools may lack a
/// rating or a date. Missing text loads as empty and missing minutes as 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub genre: String,
    pub rating: Option<i32>,
    pub comment: String,
    /// Minutes spent reading, `read_time` column.
    pub read_minutes: i32,
    pub date_read: Option<NaiveDate>,
}

/// A record about to be appended; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub genre: String,
    pub rating: i32,
    pub comment: String,
    pub read_minutes: i32,
    pub date_read: NaiveDate,
}

impl Book {
    fn from_row(row: &Row<'_>) -> Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            genre: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            rating: row.get(3)?,
            comment: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
            read_minutes: row.get::<_, Option<i32>>(5)?.unwrap_or(0),
            date_read: row.get(6)?,
        })
    }

    /// Append a record and return it with its assigned id.
    pub fn create(conn: &Connection, book: &NewBook) -> Result<Self> {
        conn.execute(
            "INSERT INTO books (title, genre, rating, comment, read_time, date_read)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                book.title,
                book.genre,
                book.rating,
                book.comment,
                book.read_minutes,
                book.date_read,
            ],
        )?;
        let id = conn.last_insert_rowid();
        log::info!("Recorded book {id} ({})", book.genre);

        Ok(Self {
            id,
            title: book.title.clone(),
            genre: book.genre.clone(),
            rating: Some(book.rating),
            comment: book.comment.clone(),
            read_minutes: book.read_minutes,
            date_read: Some(book.date_read),
        })
    }

    /// Snapshot of every record, in insertion order.
    pub fn find_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, title, genre, rating, comment, read_time, date_read
             FROM books ORDER BY id",
        )?;
        let rows = stmt.query_map([], Self::from_row)?;

        rows.collect()
    }

    pub fn count(conn: &Connection) -> Result<i64> {
        conn.query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))
    }
}
