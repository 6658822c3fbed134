use std::collections::BTreeMap;

use crate::models::Book;

/// Record count per genre label. Only labels that occur are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreShare {
    counts: BTreeMap<String, u32>,
    total: u32,
}

impl GenreShare {
    pub fn count(&self, genre: &str) -> u32 {
        self.counts.get(genre).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Share of `genre` in percent, 0.0 when nothing is recorded.
    pub fn percent(&self, genre: &str) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.count(genre)) / f64::from(self.total) * 100.0
    }

    /// Labels with their counts, largest first; ties by label.
    pub fn by_count(&self) -> Vec<(&str, u32)> {
        let mut entries: Vec<(&str, u32)> = self
            .counts
            .iter()
            .map(|(genre, count)| (genre.as_str(), *count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

/// Count records per genre. Records without a genre (NULL or blank in the
/// store) are neither a slice nor part of the total.
pub fn genre_share(books: &[Book]) -> GenreShare {
    let mut share = GenreShare::default();
    for book in books.iter().filter(|b| !b.genre.trim().is_empty()) {
        *share.counts.entry(book.genre.clone()).or_insert(0) += 1;
        share.total += 1;
    }
    share
}
