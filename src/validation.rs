use chrono::NaiveDate;

use crate::constants::*;
use crate::error::AppError;
use crate::models::Genre;

/// Parse an integer form field. Blank input is rejected, never coerced to 0.
pub fn parse_integer(field: &'static str, raw: &str) -> Result<i32, AppError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AppError::invalid(field, "is required"));
    }
    raw.parse()
        .map_err(|_| AppError::invalid(field, format!("'{raw}' is not a whole number")))
}

/// Validate rating (1-5).
pub fn validate_rating(rating: i32) -> Result<i32, AppError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(AppError::invalid(
            "rating",
            format!("must be {MIN_RATING}-{MAX_RATING}, got {rating}"),
        ));
    }
    Ok(rating)
}

/// Validate minutes spent reading.
pub fn validate_read_minutes(minutes: i32) -> Result<i32, AppError> {
    if minutes < 0 {
        return Err(AppError::invalid("read_minutes", "cannot be negative"));
    }
    Ok(minutes)
}

/// Validate title. Empty titles are allowed.
pub fn validate_title(title: &str) -> Result<&str, AppError> {
    let title = title.trim();
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(AppError::invalid(
            "title",
            format!("cannot exceed {MAX_TITLE_LEN} characters"),
        ));
    }
    Ok(title)
}

/// Validate comment. Empty comments are allowed; the text is stored as typed.
pub fn validate_comment(comment: &str) -> Result<&str, AppError> {
    if comment.chars().count() > MAX_COMMENT_LEN {
        return Err(AppError::invalid(
            "comment",
            format!("cannot exceed {MAX_COMMENT_LEN} characters"),
        ));
    }
    Ok(comment)
}

/// Validate genre against the choices the form offers.
pub fn validate_genre(genre: &str) -> Result<Genre, AppError> {
    if genre.trim().is_empty() {
        return Err(AppError::invalid("genre", "cannot be empty"));
    }
    if genre.len() > MAX_GENRE_LEN {
        return Err(AppError::invalid(
            "genre",
            format!("cannot exceed {MAX_GENRE_LEN} characters"),
        ));
    }
    genre.parse()
}

/// Parse the date a book was finished (YYYY-MM-DD).
pub fn parse_date_read(raw: &str) -> Result<NaiveDate, AppError> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| AppError::invalid("date_read", format!("'{raw}' is not a YYYY-MM-DD date")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer_valid() {
        assert_eq!(parse_integer("read_minutes", "45").unwrap(), 45);
        assert_eq!(parse_integer("read_minutes", " 7 ").unwrap(), 7);
        assert_eq!(parse_integer("read_minutes", "-3").unwrap(), -3);
    }

    #[test]
    fn test_parse_integer_rejects_non_numeric() {
        assert!(parse_integer("read_minutes", "forty").is_err());
        assert!(parse_integer("read_minutes", "4.5").is_err());
        assert!(parse_integer("read_minutes", "").is_err());
        assert!(parse_integer("read_minutes", "   ").is_err());
    }

    #[test]
    fn test_parse_integer_names_field() {
        let err = parse_integer("rating", "x").unwrap_err();
        assert!(err.to_string().starts_with("Invalid rating"));
    }

    #[test]
    fn test_validate_rating_valid() {
        for rating in MIN_RATING..=MAX_RATING {
            assert_eq!(validate_rating(rating).unwrap(), rating);
        }
    }

    #[test]
    fn test_validate_rating_out_of_range() {
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
        assert!(validate_rating(-1).is_err());
    }

    #[test]
    fn test_validate_read_minutes() {
        assert_eq!(validate_read_minutes(0).unwrap(), 0);
        assert_eq!(validate_read_minutes(600).unwrap(), 600);
        assert!(validate_read_minutes(-1).is_err());
    }

    #[test]
    fn test_validate_title() {
        assert_eq!(validate_title("  Dune ").unwrap(), "Dune");
        assert_eq!(validate_title("").unwrap(), "");
        assert!(validate_title(&"x".repeat(MAX_TITLE_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_comment_is_kept_verbatim() {
        assert_eq!(validate_comment("line one\nline two\n").unwrap(), "line one\nline two\n");
        assert_eq!(validate_comment("  spaced  ").unwrap(), "  spaced  ");
        assert_eq!(validate_comment("").unwrap(), "");
        assert!(validate_comment(&"x".repeat(MAX_COMMENT_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_genre() {
        assert_eq!(validate_genre("Novel").unwrap(), Genre::Novel);
        assert!(validate_genre("").is_err());
        assert!(validate_genre("Cookbook").is_err());
    }

    #[test]
    fn test_parse_date_read() {
        assert_eq!(
            parse_date_read("2024-03-05").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
        );
        assert!(parse_date_read("2024-02-30").is_err());
        assert!(parse_date_read("05/03/2024").is_err());
        assert!(parse_date_read("").is_err());
    }
}
