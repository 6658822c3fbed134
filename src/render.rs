//! Plain-text and JSON rendering of command results.
//!
//! Everything writes into a caller-supplied `Write` so output can be
//! captured in tests; nothing here computes series of its own.

use std::io::{self, Write};

use serde::Serialize;

use crate::commands::{BookResponse, DashboardResponse, GenreShareResponse, MonthValue};

/// Widest bar drawn for the largest value of a chart.
const BAR_WIDTH: i64 = 40;
const BAR_CHAR: char = '#';

pub fn json<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

pub fn dashboard<W: Write>(out: &mut W, dashboard: &DashboardResponse) -> io::Result<()> {
    writeln!(out, "Reading log {} to {}", dashboard.range.start, dashboard.range.end)?;
    writeln!(out, "Total records: {}", dashboard.total_books)?;
    writeln!(out)?;

    heading(out, "Books per month")?;
    bar_chart(out, &dashboard.monthly_counts, "")?;
    writeln!(out)?;

    heading(out, "Genre share")?;
    genre_share(out, &dashboard.genres)?;
    writeln!(out)?;

    heading(out, "Minutes per month")?;
    bar_chart(out, &dashboard.monthly_minutes, " min")?;
    writeln!(out)?;

    heading(out, "History")?;
    history(out, &dashboard.history)
}

pub fn history<W: Write>(out: &mut W, books: &[BookResponse]) -> io::Result<()> {
    if books.is_empty() {
        return writeln!(out, "No records yet.");
    }
    for book in books {
        match book.rating {
            Some(rating) => writeln!(out, "{} ({rating}/5)", book.title)?,
            None => writeln!(out, "{} (unrated)", book.title)?,
        }
        writeln!(out, "  Genre: {}", book.genre)?;
        writeln!(out, "  Reading time: {} min", book.read_minutes)?;
        writeln!(out, "  Finished: {}", date_or_unknown(book))?;
        writeln!(out, "  Comment: {}", book.comment)?;
        writeln!(out, "---")?;
    }
    Ok(())
}

pub fn genres<W: Write>(out: &mut W, genres: &[&str]) -> io::Result<()> {
    for genre in genres {
        writeln!(out, "{genre}")?;
    }
    Ok(())
}

pub fn saved<W: Write>(out: &mut W, book: &BookResponse) -> io::Result<()> {
    writeln!(out, "Saved #{}: {} ({})", book.id, book.title, date_or_unknown(book))
}

fn date_or_unknown(book: &BookResponse) -> &str {
    book.date_read.as_deref().unwrap_or("unknown")
}

fn heading<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(title.chars().count()))
}

fn bar_chart<W: Write>(out: &mut W, series: &[MonthValue], unit: &str) -> io::Result<()> {
    let max = series.iter().map(|v| v.value).max().unwrap_or(0);
    for point in series {
        let bar = bar(point.value, max);
        writeln!(out, "{} | {bar} {}{unit}", point.month, point.value)?;
    }
    Ok(())
}

fn genre_share<W: Write>(out: &mut W, genres: &[GenreShareResponse]) -> io::Result<()> {
    if genres.is_empty() {
        return writeln!(out, "No records yet.");
    }
    let label_width = genres
        .iter()
        .map(|g| g.genre.chars().count())
        .max()
        .unwrap_or(0);
    for share in genres {
        writeln!(
            out,
            "{:<label_width$}  {:>5.1}%  ({})",
            share.genre, share.percent, share.count
        )?;
    }
    Ok(())
}

/// Bar proportional to `value / max`; any non-zero value gets at least one mark.
fn bar(value: i64, max: i64) -> String {
    if value <= 0 || max <= 0 {
        return String::new();
    }
    let len = (value.saturating_mul(BAR_WIDTH) / max).max(1);
    let len = usize::try_from(len).unwrap_or(0);
    std::iter::repeat(BAR_CHAR).take(len).collect()
}
