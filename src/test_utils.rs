//! Shared test utilities for the reading log.
//!
//! This module provides common setup functions used across test modules.

#![cfg(test)]

use crate::db::{migrations, Database};
use crate::models::{Book, NewBook};
use chrono::NaiveDate;
use tempfile::{tempdir, TempDir};

/// Create a temporary test database with the schema applied.
///
/// Returns a tuple of (Database, TempDir). The TempDir must be kept alive
/// for the duration of the test to prevent the database file from being deleted.
pub fn setup_test_db() -> (Database, TempDir) {
    let dir = tempdir().expect("Failed to create temp directory for test DB");
    let db_path = dir.path().join("test.db");
    let db = Database::open(&db_path).expect("Failed to open test database");
    migrations::run(db.connection()).expect("Failed to run migrations on test DB");
    (db, dir)
}

/// A record with the fields aggregation cares about; the rest are filler.
pub fn new_book(genre: &str, (year, month, day): (i32, u32, u32), read_minutes: i32) -> NewBook {
    NewBook {
        title: format!("{genre} book"),
        genre: genre.to_string(),
        rating: 3,
        comment: String::new(),
        read_minutes,
        date_read: NaiveDate::from_ymd_opt(year, month, day).expect("valid test date"),
    }
}

/// An already-stored record, for tests of the pure aggregators.
pub fn stored_book(id: i64, genre: &str, date: (i32, u32, u32), read_minutes: i32) -> Book {
    let new = new_book(genre, date, read_minutes);
    Book {
        id,
        title: new.title,
        genre: new.genre,
        rating: Some(new.rating),
        comment: new.comment,
        read_minutes: new.read_minutes,
        date_read: Some(new.date_read),
    }
}
