use crate::db::{with_connection, Database};
use crate::error::AppError;
use crate::models::Book;
use crate::stats::{genre_share, monthly_series, MonthRange};

use super::dtos::{genre_shares, monthly_counts, monthly_minutes};
use super::{BookResponse, DashboardResponse, RangeResponse};

/// Read every record once and derive all dashboard sections from that snapshot.
pub fn get_dashboard(db: &Database, range: &MonthRange) -> Result<DashboardResponse, AppError> {
    let books = with_connection(db, "load dashboard", Book::find_all)?;
    log::debug!("Building dashboard for {range} from {} records", books.len());
    Ok(build_dashboard(books, range))
}

pub fn build_dashboard(books: Vec<Book>, range: &MonthRange) -> DashboardResponse {
    let series = monthly_series(&books, range);
    let share = genre_share(&books);

    DashboardResponse {
        range: RangeResponse::from(range),
        total_books: books.len(),
        monthly_counts: monthly_counts(&series),
        monthly_minutes: monthly_minutes(&series),
        genres: genre_shares(&share),
        history: books.into_iter().map(BookResponse::from).collect(),
    }
}
