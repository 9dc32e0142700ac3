mod common;

use rusty_golf_insights::model::{
    CoachingFocus, ExportHole, ExportRound, HoleRecord, RoundExport, RoundHole, SgCategory,
    StoredBreakdown,
};
use rusty_golf_insights::score::{
    DashboardMetric, WindowSize, build_dashboard, load_dashboard, partition_holes,
    refresh_breakdowns, select_window_rounds,
};
use rusty_golf_insights::storage::{MemoryStorage, Storage};

/// Twelve rounds, one per day. The last five are clean regulation rounds,
/// the five before them are blow-ups, the oldest two are par-5 bogeys.
fn export() -> RoundExport {
    let rounds = (1..=12u32)
        .map(|day| {
            let id = format!("r{day:02}");
            let record: HoleRecord = match day {
                8..=12 => common::regulation_par4(),
                3..=7 => common::blow_up_par4(),
                _ => common::par5_bogey(),
            };
            let holes = (1..=2)
                .map(|n| ExportHole {
                    id: format!("{id}-h{n:02}"),
                    hole_number: n,
                    record: record.clone(),
                })
                .collect();
            ExportRound {
                holes,
                ..export_round(&id, day)
            }
        })
        .collect();
    RoundExport { rounds }
}

fn export_round(id: &str, day: u32) -> ExportRound {
    let summary = common::round(id, day);
    ExportRound {
        id: summary.id,
        owner_id: summary.owner_id,
        played_at: summary.played_at,
        status: summary.status,
        notes: None,
        holes: Vec::new(),
    }
}

#[test]
fn holes_land_in_their_window() {
    let export = export();
    let summaries: Vec<_> = export.rounds.iter().map(ExportRound::summary).collect();
    let holes: Vec<RoundHole> = export.rounds.iter().flat_map(ExportRound::round_holes).collect();

    let rounds = select_window_rounds(&summaries, WindowSize::Five);
    let windows = partition_holes(holes, &rounds, WindowSize::Five);
    assert_eq!(windows.current.round_count, 5);
    assert_eq!(windows.previous.round_count, 5);
    assert_eq!(windows.current.holes.len(), 10);
    assert_eq!(windows.previous.holes.len(), 10);
    assert!(windows.current.holes.iter().all(|h| h.score == Some(4)));
    assert!(windows.previous.holes.iter().all(|h| h.score == Some(7)));
}

#[test]
fn dashboard_compares_windows() -> Result<(), Box<dyn std::error::Error>> {
    let storage = MemoryStorage::from_export(&export());
    let dashboard = load_dashboard(&storage, common::OWNER, WindowSize::Five)?;

    assert_eq!(dashboard.current.rounds, 5);
    assert_eq!(dashboard.current.critical_errors_per_round, Some(0.0));
    // three errors per blow-up hole, two holes per round
    assert_eq!(dashboard.previous.critical_errors_per_round, Some(6.0));

    let errors = dashboard
        .deltas
        .iter()
        .find(|d| d.metric == DashboardMetric::CriticalErrorsPerRound)
        .ok_or("missing errors delta")?;
    assert_eq!(errors.delta, Some(-6.0));
    assert_eq!(errors.improved(), Some(true));

    let gir = dashboard
        .deltas
        .iter()
        .find(|d| d.metric == DashboardMetric::GirRate)
        .ok_or("missing gir delta")?;
    assert_eq!(gir.current, Some(100.0));
    assert_eq!(gir.previous, Some(0.0));
    assert_eq!(gir.describe().as_deref(), Some("+100pp vs previous period"));

    // regulation golf: putting is weakest, then off the tee
    let focuses: Vec<_> = dashboard.coaching.iter().map(|c| c.focus).collect();
    assert_eq!(
        focuses,
        vec![
            CoachingFocus::Category(SgCategory::Putting),
            CoachingFocus::Category(SgCategory::OffTee),
        ]
    );
    Ok(())
}

#[test]
fn owner_without_rounds_gets_empty_dashboard() -> Result<(), Box<dyn std::error::Error>> {
    let storage = MemoryStorage::from_export(&export());
    let dashboard = load_dashboard(&storage, "someone-else", WindowSize::Ten)?;
    assert_eq!(dashboard.current.aggregate.total_holes, 0);
    assert_eq!(dashboard.current.critical_errors_per_round, None);
    assert!(dashboard.deltas.iter().all(|d| d.delta.is_none()));
    assert!(dashboard.coaching.is_empty());
    Ok(())
}

#[test]
fn build_dashboard_is_deterministic() {
    let export = export();
    let summaries: Vec<_> = export.rounds.iter().map(ExportRound::summary).collect();
    let holes: Vec<RoundHole> = export.rounds.iter().flat_map(ExportRound::round_holes).collect();
    let rounds = select_window_rounds(&summaries, WindowSize::Ten);
    let windows = partition_holes(holes, &rounds, WindowSize::Ten);
    assert_eq!(build_dashboard(&windows), build_dashboard(&windows));
    assert_eq!(windows.previous.round_count, 2);
}

#[test]
fn refresh_writes_tagged_breakdowns() -> Result<(), Box<dyn std::error::Error>> {
    let storage = MemoryStorage::from_export(&export());
    let ids = vec!["r12".to_string()];
    let holes = storage.holes_for_rounds(&ids)?;
    assert!(holes.iter().all(|h| h.record.stored.is_none()));

    let written = refresh_breakdowns(&storage, &holes)?;
    assert_eq!(written, 2);

    let holes = storage.holes_for_rounds(&ids)?;
    let stored: &StoredBreakdown = holes[0].record.stored.as_ref().ok_or("not stored")?;
    assert!(stored.is_current_model());
    assert_eq!(stored.total, Some(-0.01));

    assert!(storage.store_breakdown("missing", stored).is_err());
    Ok(())
}
