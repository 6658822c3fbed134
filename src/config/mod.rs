mod file_config;

pub use file_config::FileConfig;

use crate::stats::{MonthRange, YearMonth};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Values given on the command line. `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub db_path: Option<PathBuf>,
    pub start_month: Option<YearMonth>,
    pub end_month: Option<YearMonth>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub range: MonthRange,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and an optional TOML file.
    /// CLI values win over the file, the file wins over built-in defaults.
    /// `default_db_path` is only called when neither source names a database.
    pub fn resolve<F>(cli: &CliConfig, file_config: Option<FileConfig>, default_db_path: F) -> Result<Self>
    where
        F: FnOnce() -> Result<PathBuf>,
    {
        let file = file_config.unwrap_or_default();

        let db_path = match cli.db_path.clone().or_else(|| file.db_path.map(PathBuf::from)) {
            Some(path) => path,
            None => default_db_path()?,
        };

        let defaults = MonthRange::default();
        let start = match cli.start_month {
            Some(month) => month,
            None => file
                .start_month
                .as_deref()
                .map(str::parse::<YearMonth>)
                .transpose()?
                .unwrap_or(defaults.start()),
        };
        let end = match cli.end_month {
            Some(month) => month,
            None => file
                .end_month
                .as_deref()
                .map(str::parse::<YearMonth>)
                .transpose()?
                .unwrap_or(defaults.end()),
        };
        let range = MonthRange::new(start, end)?;

        Ok(Self { db_path, range })
    }
}

/// Load the config file. An explicitly named file must exist; the default
/// location is optional.
pub fn load_file_config(explicit: Option<&Path>, default: Option<PathBuf>) -> Result<Option<FileConfig>> {
    if let Some(path) = explicit {
        return FileConfig::load(path).map(Some);
    }
    match default {
        Some(path) if path.exists() => {
            log::debug!("Loading config from {}", path.display());
            FileConfig::load(&path).map(Some)
        }
        Some(_) | None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    fn fallback() -> Result<PathBuf> {
        Ok(PathBuf::from("/data/reading_log.db"))
    }

    #[test]
    fn test_defaults_when_nothing_given() {
        let config = AppConfig::resolve(&CliConfig::default(), None, fallback).unwrap();

        assert_eq!(config.db_path, PathBuf::from("/data/reading_log.db"));
        assert_eq!(config.range, MonthRange::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = FileConfig {
            db_path: Some("/from/file.db".into()),
            start_month: Some("2024-01".into()),
            end_month: Some("2024-06".into()),
        };

        let config = AppConfig::resolve(&CliConfig::default(), Some(file), fallback).unwrap();

        assert_eq!(config.db_path, PathBuf::from("/from/file.db"));
        assert_eq!(config.range.start(), ym(2024, 1));
        assert_eq!(config.range.end(), ym(2024, 6));
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = FileConfig {
            db_path: Some("/from/file.db".into()),
            start_month: Some("2024-01".into()),
            end_month: Some("2024-06".into()),
        };
        let cli = CliConfig {
            db_path: Some(PathBuf::from("/from/cli.db")),
            start_month: Some(ym(2023, 5)),
            end_month: None,
        };

        let config = AppConfig::resolve(&cli, Some(file), fallback).unwrap();

        assert_eq!(config.db_path, PathBuf::from("/from/cli.db"));
        assert_eq!(config.range.start(), ym(2023, 5));
        assert_eq!(config.range.end(), ym(2024, 6));
    }

    #[test]
    fn test_default_db_path_not_called_when_configured() {
        let cli = CliConfig {
            db_path: Some(PathBuf::from("/x.db")),
            ..CliConfig::default()
        };
        let config = AppConfig::resolve(&cli, None, || anyhow::bail!("should not be called")).unwrap();
        assert_eq!(config.db_path, PathBuf::from("/x.db"));
    }

    #[test]
    fn test_malformed_month_in_file_fails() {
        let file = FileConfig {
            start_month: Some("January".into()),
            ..FileConfig::default()
        };
        assert!(AppConfig::resolve(&CliConfig::default(), Some(file), fallback).is_err());
    }

    #[test]
    fn test_reversed_range_fails() {
        let cli = CliConfig {
            start_month: Some(ym(2026, 1)),
            ..CliConfig::default()
        };
        assert!(AppConfig::resolve(&cli, None, fallback).is_err());
    }

    #[test]
    fn test_oversized_range_fails() {
        let cli = CliConfig {
            start_month: Some(ym(1, 1)),
            end_month: Some(ym(2_000_000_000, 12)),
            ..CliConfig::default()
        };
        let err = AppConfig::resolve(&cli, None, fallback).unwrap_err();
        assert!(err.to_string().contains("more than 1200 months"));
    }

    #[test]
    fn test_load_file_config_default_location_is_optional() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("config.toml");
        assert!(load_file_config(None, Some(missing)).unwrap().is_none());
        assert!(load_file_config(None, None).unwrap().is_none());
    }

    #[test]
    fn test_load_file_config_explicit_must_exist() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("config.toml");
        assert!(load_file_config(Some(missing.as_path()), None).is_err());
    }

    #[test]
    fn test_load_file_config_reads_default_location() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "end_month = \"2026-12\"\n").unwrap();

        let config = load_file_config(None, Some(path)).unwrap().unwrap();
        assert_eq!(config.end_month.as_deref(), Some("2026-12"));
    }
}
