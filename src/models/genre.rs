use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Genres offered by the form. Stored records carry the label as free text,
/// so labels outside this set still load and aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
    Business,
    Novel,
    Mystery,
    Essay,
    SelfHelp,
    Other,
}

impl Genre {
    pub const ALL: [Genre; 6] = [
        Genre::Business,
        Genre::Novel,
        Genre::Mystery,
        Genre::Essay,
        Genre::SelfHelp,
        Genre::Other,
    ];

    /// Label written to the `genre` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Genre::Business => "Business",
            Genre::Novel => "Novel",
            Genre::Mystery => "Mystery",
            Genre::Essay => "Essay",
            Genre::SelfHelp => "Self-help",
            Genre::Other => "Other",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();

        Genre::ALL
            .into_iter()
            .find(|genre| genre.as_str().replace('-', "").to_lowercase() == normalized)
            .ok_or_else(|| {
                let choices: Vec<&str> = Genre::ALL.iter().map(|g| g.as_str()).collect();
                AppError::invalid(
                    "genre",
                    format!("'{}' is not one of {}", s.trim(), choices.join(", ")),
                )
            })
    }
}
