// src/commands/dtos.rs

use crate::constants::{DATE_FORMAT, DEFAULT_RATING};
use crate::error::AppError;
use crate::models::{Book, NewBook};
use crate::stats::{GenreShare, MonthBucket, MonthRange};
use crate::validation::{
    parse_date_read, parse_integer, validate_comment, validate_genre, validate_rating,
    validate_read_minutes, validate_title,
};
use serde::{Deserialize, Serialize};

/// Raw form submission. Every field arrives as text and is validated by
/// `into_new_book` before anything reaches the store.
#[derive(Debug, Clone, Deserialize)]
pub struct AddBookRequest {
    pub title: String,
    pub genre: String,
    pub rating: String,
    pub comment: String,
    pub read_minutes: String,
    pub date_read: String,
}

impl AddBookRequest {
    pub fn into_new_book(self) -> Result<NewBook, AppError> {
        let genre = validate_genre(&self.genre)?;
        let rating = validate_rating(parse_integer("rating", &self.rating)?)?;
        let read_minutes = validate_read_minutes(parse_integer("read_minutes", &self.read_minutes)?)?;
        let date_read = parse_date_read(&self.date_read)?;

        Ok(NewBook {
            title: validate_title(&self.title)?.to_string(),
            genre: genre.as_str().to_string(),
            rating,
            comment: validate_comment(&self.comment)?.to_string(),
            read_minutes,
            date_read,
        })
    }
}

impl Default for AddBookRequest {
    fn default() -> Self {
        Self {
            title: String::new(),
            genre: String::new(),
            rating: DEFAULT_RATING.to_string(),
            comment: String::new(),
            read_minutes: "0".to_string(),
            date_read: chrono::Local::now().date_naive().format(DATE_FORMAT).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookResponse {
    pub id: i64,
    pub title: String,
    pub genre: String,
    pub rating: Option<i32>,
    pub comment: String,
    pub read_minutes: i32,
    pub date_read: Option<String>,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            genre: book.genre,
            rating: book.rating,
            comment: book.comment,
            read_minutes: book.read_minutes,
            date_read: book.date_read.map(|d| d.format(DATE_FORMAT).to_string()),
        }
    }
}

/// One point of a monthly chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthValue {
    pub month: String,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreShareResponse {
    pub genre: String,
    pub count: u32,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeResponse {
    pub start: String,
    pub end: String,
}

impl From<&MonthRange> for RangeResponse {
    fn from(range: &MonthRange) -> Self {
        Self {
            start: range.start().to_string(),
            end: range.end().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardResponse {
    pub range: RangeResponse,
    pub total_books: usize,
    pub monthly_counts: Vec<MonthValue>,
    pub monthly_minutes: Vec<MonthValue>,
    pub genres: Vec<GenreShareResponse>,
    pub history: Vec<BookResponse>,
}

pub(crate) fn monthly_counts(series: &[MonthBucket]) -> Vec<MonthValue> {
    series
        .iter()
        .map(|bucket| MonthValue {
            month: bucket.month.to_string(),
            value: i64::from(bucket.count),
        })
        .collect()
}

pub(crate) fn monthly_minutes(series: &[MonthBucket]) -> Vec<MonthValue> {
    series
        .iter()
        .map(|bucket| MonthValue {
            month: bucket.month.to_string(),
            value: bucket.total_minutes,
        })
        .collect()
}

pub(crate) fn genre_shares(share: &GenreShare) -> Vec<GenreShareResponse> {
    share
        .by_count()
        .into_iter()
        .map(|(genre, count)| GenreShareResponse {
            genre: genre.to_string(),
            count,
            percent: share.percent(genre),
        })
        .collect()
}
