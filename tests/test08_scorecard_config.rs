mod common;

use std::io::Write;

use rusty_golf_insights::args::{Cli, OutputFormat, StoreSource, load_config};
use rusty_golf_insights::model::{HoleRecord, ScoreDisplay};
use rusty_golf_insights::score::{WindowSize, load_scorecard, scorecard};
use rusty_golf_insights::storage::MemoryStorage;

#[test]
fn scorecard_totals_only_scored_holes() {
    let holes = vec![
        common::hole("r1", 3, HoleRecord::new(5)),
        common::hole("r1", 2, common::blow_up_par4()),
        common::hole("r1", 1, common::regulation_par4()),
    ];
    let card = scorecard(&holes);
    let numbers: Vec<i32> = card.lines.iter().map(|l| l.hole_number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    assert_eq!(card.total_par, 13);
    assert_eq!(card.total_score, 11);
    assert_eq!(card.to_par, 3);
    assert_eq!(card.holes_scored, 2);

    assert_eq!(card.lines[0].score_display, Some(ScoreDisplay::Par));
    assert_eq!(card.lines[1].score_display, Some(ScoreDisplay::TripleBogey));
    assert_eq!(card.lines[1].critical_errors, 3);
    assert_eq!(card.lines[2].score_display, None);
    assert_eq!(card.lines[2].critical_errors, 0);
}

#[test]
fn impossible_par_stays_out_of_totals() {
    let broken = HoleRecord {
        hole_par: i32::MIN,
        score: Some(i32::MAX),
        ..HoleRecord::default()
    };
    let holes = vec![
        common::hole("r1", 1, common::regulation_par4()),
        common::hole("r1", 2, broken),
    ];
    let card = scorecard(&holes);
    assert_eq!(card.lines.len(), 2);
    assert_eq!(card.total_par, 4);
    assert_eq!(card.total_score, 4);
    assert_eq!(card.to_par, 0);
    assert_eq!(card.holes_scored, 1);
    assert_eq!(card.lines[1].score_display, None);
    assert_eq!(card.lines[1].critical_errors, 0);
}

#[test]
fn load_scorecard_for_unknown_round_is_empty() -> Result<(), Box<dyn std::error::Error>> {
    let storage = MemoryStorage::from_export(&serde_json::from_str(include_str!(
        "test06_rounds_export.json"
    ))?);
    let card = load_scorecard(&storage, "round-a")?;
    assert_eq!(card.lines.len(), 3);
    assert_eq!(card.to_par, 1);

    let empty = load_scorecard(&storage, "nope")?;
    assert!(empty.lines.is_empty());
    assert_eq!(empty.total_par, 0);
    Ok(())
}

#[test]
fn cli_values_win_over_toml() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let toml_path = dir.path().join("insights.toml");
    let mut file = std::fs::File::create(&toml_path)?;
    writeln!(file, "db = \"from-file.db\"")?;
    writeln!(file, "owner = \"file-owner\"")?;
    writeln!(file, "window = 20")?;
    writeln!(file, "format = \"html\"")?;

    let cli = Cli {
        config_toml: Some(toml_path),
        owner: Some("cli-owner".to_string()),
        ..Cli::default()
    };
    let config = load_config(cli)?;
    assert_eq!(config.owner, "cli-owner");
    assert_eq!(config.window, WindowSize::Twenty);
    assert_eq!(config.format, OutputFormat::Html);
    assert_eq!(
        config.store,
        StoreSource::Sqlite {
            path: "from-file.db".into(),
            populate_json: None,
        }
    );
    assert_eq!(config.log_level, "info");
    Ok(())
}

#[test]
fn config_rejects_bad_input() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;

    let both = Cli {
        db: Some("a.db".into()),
        input_json: Some("b.json".into()),
        owner: Some("me".to_string()),
        ..Cli::default()
    };
    assert!(load_config(both).is_err());

    let no_owner = Cli {
        db: Some("a.db".into()),
        ..Cli::default()
    };
    assert!(load_config(no_owner).is_err());

    let toml_path = dir.path().join("bad.toml");
    std::fs::write(&toml_path, "window = 7\n")?;
    let bad_window = Cli {
        config_toml: Some(toml_path),
        db: Some("a.db".into()),
        owner: Some("me".to_string()),
        ..Cli::default()
    };
    assert!(load_config(bad_window).is_err());
    Ok(())
}
