use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tracing::info;

use rusty_golf_insights::args::{AppConfig, Cli, OutputFormat, StoreSource, load_config};
use rusty_golf_insights::logging::init_tracing;
use rusty_golf_insights::score::{
    load_dashboard, load_scorecard, refresh_breakdowns, select_window_rounds,
};
use rusty_golf_insights::storage::{MemoryStorage, SqliteStorage, Storage, read_export};
use rusty_golf_insights::view::{
    render_dashboard_html, render_dashboard_text, render_scorecard_html, render_scorecard_text,
};

fn open_storage(config: &AppConfig) -> Result<Box<dyn Storage>> {
    match &config.store {
        StoreSource::Sqlite {
            path,
            populate_json,
        } => {
            let storage = SqliteStorage::open(path)
                .with_context(|| format!("open sqlite db {}", path.display()))?;
            if let Some(json) = populate_json {
                let export = read_export(json)
                    .with_context(|| format!("read export {}", json.display()))?;
                storage
                    .prefill_from_export(&export)
                    .with_context(|| format!("populate from {}", json.display()))?;
            }
            Ok(Box::new(storage))
        }
        StoreSource::Json(path) => {
            let storage = MemoryStorage::from_json_file(path)
                .with_context(|| format!("load export {}", path.display()))?;
            Ok(Box::new(storage))
        }
    }
}

fn refresh(storage: &dyn Storage, config: &AppConfig) -> Result<()> {
    let rounds = storage.recent_rounds(&config.owner, config.window.rounds() * 2)?;
    let ids = select_window_rounds(&rounds, config.window).all_ids();
    let holes = storage.holes_for_rounds(&ids)?;
    let written = refresh_breakdowns(storage, &holes)?;
    info!(written, "stored breakdowns");
    Ok(())
}

fn render(storage: &dyn Storage, config: &AppConfig) -> Result<String> {
    if let Some(round_id) = &config.round {
        let card = load_scorecard(storage, round_id)?;
        return Ok(match config.format {
            OutputFormat::Text => render_scorecard_text(round_id, &card),
            OutputFormat::Json => serde_json::to_string_pretty(&card)?,
            OutputFormat::Html => render_scorecard_html(round_id, &card).into_string(),
        });
    }
    let dashboard = load_dashboard(storage, &config.owner, config.window)?;
    Ok(match config.format {
        OutputFormat::Text => render_dashboard_text(&config.owner, &dashboard),
        OutputFormat::Json => serde_json::to_string_pretty(&dashboard)?,
        OutputFormat::Html => render_dashboard_html(&config.owner, &dashboard).into_string(),
    })
}

fn write_output(output: Option<&Path>, report: &str) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, report)
            .with_context(|| format!("write report {}", path.display())),
        None => {
            print!("{report}");
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli)?;
    init_tracing(&config.log_level);
    info!(owner = %config.owner, window = %config.window, "building report");

    let storage = open_storage(&config)?;
    if config.refresh_breakdowns {
        refresh(storage.as_ref(), &config)?;
    }
    let report = render(storage.as_ref(), &config)?;
    write_output(config.output.as_deref(), &report)
}
