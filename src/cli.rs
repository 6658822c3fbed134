use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

use crate::commands::{self, AddBookRequest};
use crate::config::{AppConfig, CliConfig};
use crate::db::Database;
use crate::render;
use crate::stats::YearMonth;

#[derive(Parser, Debug)]
#[command(name = "reading-log", version, about = "Record the books you read and chart them")]
pub struct Cli {
    /// SQLite file holding the reading log
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// TOML config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Record a book you finished
    Add(AddArgs),

    /// Monthly counts, genre share, monthly minutes and history
    Dashboard {
        /// First month to chart (YYYY-MM)
        #[arg(long)]
        from: Option<YearMonth>,

        /// Last month to chart (YYYY-MM)
        #[arg(long)]
        to: Option<YearMonth>,

        #[arg(long)]
        json: bool,
    },

    /// Every recorded book
    History {
        #[arg(long)]
        json: bool,
    },

    /// Genres the add form accepts
    Genres,
}

/// Form fields. Numbers and dates are taken as text and validated before
/// anything is stored.
#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(long, default_value = "")]
    pub title: String,

    #[arg(long)]
    pub genre: String,

    /// 1-5
    #[arg(long, default_value = "3", allow_hyphen_values = true)]
    pub rating: String,

    #[arg(long, default_value = "")]
    pub comment: String,

    /// Minutes spent reading
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub minutes: String,

    /// Date finished, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<String>,
}

impl From<AddArgs> for AddBookRequest {
    fn from(args: AddArgs) -> Self {
        let defaults = AddBookRequest::default();
        Self {
            title: args.title,
            genre: args.genre,
            rating: args.rating,
            comment: args.comment,
            read_minutes: args.minutes,
            date_read: args.date.unwrap_or(defaults.date_read),
        }
    }
}

impl Cli {
    pub fn config_overrides(&self) -> CliConfig {
        let (start_month, end_month) = match &self.command {
            Command::Dashboard { from, to, .. } => (*from, *to),
            Command::Add(_) | Command::History { .. } | Command::Genres => (None, None),
        };
        CliConfig {
            db_path: self.db.clone(),
            start_month,
            end_month,
        }
    }
}

/// Run one command against an open store, writing its output to `out`.
pub fn execute<W: Write>(
    command: Command,
    db: &Database,
    config: &AppConfig,
    out: &mut W,
) -> anyhow::Result<()> {
    match command {
        Command::Add(args) => {
            let book = commands::add_book(db, AddBookRequest::from(args))?;
            render::saved(out, &book)?;
        }
        Command::Dashboard { json, .. } => {
            let dashboard = commands::get_dashboard(db, &config.range)?;
            if json {
                render::json(out, &dashboard)?;
            } else {
                render::dashboard(out, &dashboard)?;
            }
        }
        Command::History { json } => {
            let history = commands::get_history(db)?;
            if json {
                render::json(out, &history)?;
            } else {
                render::history(out, &history)?;
            }
        }
        Command::Genres => render::genres(out, &commands::get_genres())?,
    }
    Ok(())
}
