use std::collections::HashMap;

use super::month::{MonthRange, YearMonth};
use crate::models::Book;

/// One month of the dashboard x-axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthBucket {
    pub month: YearMonth,
    pub count: u32,
    pub total_minutes: i64,
}

impl MonthBucket {
    fn empty(month: YearMonth) -> Self {
        Self { month, count: 0, total_minutes: 0 }
    }
}

/// Zero-filled monthly series over `range`, one bucket per month in
/// ascending order. Records dated outside the range, or not dated at all,
/// are left out.
pub fn monthly_series(books: &[Book], range: &MonthRange) -> Vec<MonthBucket> {
    let mut by_month: HashMap<YearMonth, MonthBucket> = HashMap::new();
    for book in books {
        let Some(date) = book.date_read else {
            continue;
        };
        let month = YearMonth::from(date);
        if !range.contains(month) {
            continue;
        }
        let bucket = by_month.entry(month).or_insert_with(|| MonthBucket::empty(month));
        bucket.count += 1;
        bucket.total_minutes += i64::from(book.read_minutes);
    }

    range
        .months()
        .map(|month| by_month.remove(&month).unwrap_or_else(|| MonthBucket::empty(month)))
        .collect()
}
