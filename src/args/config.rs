use anyhow::{Context, Result, bail};

use crate::args::types::{AppConfig, Cli, FileConfig, StoreSource};
use crate::args::validation::check_readable_file;

const DEFAULT_LOG_LEVEL: &str = "info";

/// Load config from CLI and optional TOML file.
///
/// # Errors
/// Returns an error if the config file is unreadable or invalid, if no
/// owner is given, or if both or neither of `--db` and `--input-json` are
/// set.
pub fn load_config(cli: Cli) -> Result<AppConfig> {
    let file_config = read_file_config(&cli)?;

    let db = cli.db.or(file_config.db);
    let input_json = cli.input_json.or(file_config.input_json);
    let populate_json = cli.populate_json.or(file_config.populate_json);

    let store = match (db, input_json) {
        (Some(path), None) => StoreSource::Sqlite {
            path,
            populate_json: populate_json
                .map(|p| check_readable_file(&p.to_string_lossy()).map_err(anyhow::Error::msg))
                .transpose()
                .context("populate json")?,
        },
        (None, Some(path)) => {
            if populate_json.is_some() {
                bail!("--populate-json needs --db");
            }
            let path = check_readable_file(&path.to_string_lossy())
                .map_err(anyhow::Error::msg)
                .context("input json")?;
            StoreSource::Json(path)
        }
        (Some(_), Some(_)) => bail!("use either --db or --input-json, not both"),
        (None, None) => bail!("missing --db or --input-json"),
    };

    let owner = cli
        .owner
        .or(file_config.owner)
        .filter(|o| !o.trim().is_empty())
        .context("missing --owner")?;

    Ok(AppConfig {
        store,
        owner,
        window: cli.window.or(file_config.window).unwrap_or_default(),
        format: cli.format.or(file_config.format).unwrap_or_default(),
        output: cli.output.or(file_config.output),
        refresh_breakdowns: cli.refresh_breakdowns
            || file_config.refresh_breakdowns.unwrap_or(false),
        round: cli.round,
        log_level: cli
            .log_level
            .or(file_config.log_level)
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
    })
}

fn read_file_config(cli: &Cli) -> Result<FileConfig> {
    match cli.config_toml.as_ref() {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("read config toml {}", path.display()))?;
            toml::from_str::<FileConfig>(&contents)
                .with_context(|| format!("parse config toml {}", path.display()))
        }
        None => Ok(FileConfig::default()),
    }
}
