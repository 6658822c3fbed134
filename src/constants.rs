// src/constants.rs

/// Lowest rating the form accepts
pub const MIN_RATING: i32 = 1;

/// Highest rating the form accepts
pub const MAX_RATING: i32 = 5;

/// Rating preselected by the form
pub const DEFAULT_RATING: i32 = 3;

/// Maximum title length
pub const MAX_TITLE_LEN: usize = 500;

/// Maximum comment length
pub const MAX_COMMENT_LEN: usize = 10_000;

/// Maximum genre label length
pub const MAX_GENRE_LEN: usize = 100;

/// First month of the default dashboard range (year, month)
pub const DEFAULT_START_MONTH: (i32, u32) = (2023, 1);

/// Last month of the default dashboard range (year, month)
pub const DEFAULT_END_MONTH: (i32, u32) = (2025, 12);

/// Longest dashboard range accepted, in months
pub const MAX_RANGE_MONTHS: i64 = 1200;

/// Date format used for `date_read` at the form boundary and in storage
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Database file name inside the data directory
pub const DB_FILE_NAME: &str = "reading_log.db";

/// Config file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";
