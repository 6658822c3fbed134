//! Derived dashboard series. Everything here is pure: the caller reads the
//! records and passes them in.

pub mod genre;
pub mod month;
pub mod monthly;

pub use genre::{genre_share, GenreShare};
pub use month::{MonthRange, YearMonth};
pub use monthly::{monthly_series, MonthBucket};
