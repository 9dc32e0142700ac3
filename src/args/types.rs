use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

use crate::score::WindowSize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Html,
}

#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Strokes-gained and critical-error report for logged rounds")]
pub struct Cli {
    /// TOML file with defaults for any of the options below.
    #[arg(long, value_parser = crate::args::validation::check_readable_file)]
    pub config_toml: Option<PathBuf>,
    /// SQLite database with `rounds` and `round_holes`; created if missing.
    #[arg(long)]
    pub db: Option<PathBuf>,
    /// JSON export to read rounds from instead of a database.
    #[arg(long, value_parser = crate::args::validation::check_readable_file)]
    pub input_json: Option<PathBuf>,
    /// JSON export loaded into the database before reporting.
    #[arg(long, value_parser = crate::args::validation::check_readable_file)]
    pub populate_json: Option<PathBuf>,
    #[arg(long)]
    pub owner: Option<String>,
    /// Rounds per window: 5, 10 or 20.
    #[arg(long)]
    pub window: Option<WindowSize>,
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    /// Write the report here instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Recompute and store the breakdown of every hole in both windows.
    #[arg(long)]
    pub refresh_breakdowns: bool,
    /// Print the scorecard of this round instead of the dashboard.
    #[arg(long)]
    pub round: Option<String>,
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub db: Option<PathBuf>,
    pub input_json: Option<PathBuf>,
    pub populate_json: Option<PathBuf>,
    pub owner: Option<String>,
    pub window: Option<WindowSize>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub refresh_breakdowns: Option<bool>,
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreSource {
    Sqlite {
        path: PathBuf,
        populate_json: Option<PathBuf>,
    },
    Json(PathBuf),
}

/// Resolved run configuration: CLI values over file values over defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub store: StoreSource,
    pub owner: String,
    pub window: WindowSize,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub refresh_breakdowns: bool,
    pub round: Option<String>,
    pub log_level: String,
}
