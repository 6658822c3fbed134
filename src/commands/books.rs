use crate::db::{with_connection, Database};
use crate::error::AppError;
use crate::models::{Book, Genre};

use super::{AddBookRequest, BookResponse};

/// Validate a form submission and append it to the store.
pub fn add_book(db: &Database, request: AddBookRequest) -> Result<BookResponse, AppError> {
    let book = request
        .into_new_book()
        .inspect_err(|e| log::warn!("Rejected book form: {e}"))?;
    let saved = with_connection(db, "save book", |conn| Book::create(conn, &book))?;
    Ok(BookResponse::from(saved))
}

/// Every record in store order.
pub fn get_history(db: &Database) -> Result<Vec<BookResponse>, AppError> {
    let books = with_connection(db, "load books", Book::find_all)?;
    Ok(books.into_iter().map(BookResponse::from).collect())
}

/// Genre labels the form offers.
pub fn get_genres() -> Vec<&'static str> {
    Genre::ALL.iter().map(|genre| genre.as_str()).collect()
}
