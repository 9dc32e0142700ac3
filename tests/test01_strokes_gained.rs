mod common;

use rusty_golf_insights::model::{
    ApproachZone, Confidence, ErrorSide, HoleRecord, ProximityBucket, StoredBreakdown, TeeResult,
};
use rusty_golf_insights::strokes_gained::{
    PARALLEL_BATCH_THRESHOLD, compute_breakdown, compute_breakdowns, effective_breakdown,
};

#[test]
fn regulation_par4_breakdown() {
    let sg = compute_breakdown(&common::regulation_par4());
    assert_eq!(sg.off_tee, Some(0.03));
    assert_eq!(sg.approach, Some(0.4));
    assert_eq!(sg.short_game, None);
    assert_eq!(sg.putting, Some(-0.44));
    assert_eq!(sg.total, Some(-0.01));
    assert_eq!(sg.confidence, Confidence::High);
}

#[test]
fn par3_has_no_tee_phase() {
    let mut hole = common::regulation_par4();
    hole.hole_par = 3;
    hole.tee_result = Some(TeeResult::Fairway);
    let sg = compute_breakdown(&hole);
    assert_eq!(sg.off_tee, None);
    assert!(sg.approach.is_some());
}

#[test]
fn missed_green_uses_short_game() {
    let sg = compute_breakdown(&common::blow_up_par4());
    // 4.05 - (1 + 4.15)
    assert_eq!(sg.off_tee, Some(-1.1));
    // 3.15 + 0.12 - (1 + 2.55)
    assert_eq!(sg.approach, Some(-0.28));
    // 2.55 - 2.8
    assert_eq!(sg.short_game, Some(-0.25));
    // no first-putt bucket, and GIR is false
    assert_eq!(sg.putting, None);
    // -1.1 - 0.28 - 0.25 - 0.25 penalty stroke
    assert_eq!(sg.total, Some(-1.88));
}

#[test]
fn defaults_fill_missing_buckets() {
    let hole = HoleRecord {
        hole_par: 4,
        approach_zone: Some(ApproachZone::Under60),
        green_in_regulation: Some(true),
        ..HoleRecord::default()
    };
    // 2.55 - (1 + 1.95)
    assert_eq!(compute_breakdown(&hole).approach, Some(-0.4));

    let hole = HoleRecord {
        green_in_regulation: Some(false),
        ..hole
    };
    // 2.55 - (1 + 2.4)
    assert_eq!(compute_breakdown(&hole).approach, Some(-0.85));
}

#[test]
fn scramble_outcome_wins_over_putts() {
    let hole = HoleRecord {
        hole_par: 4,
        putts: Some(3),
        green_in_regulation: Some(false),
        approach_error_side: Some(ErrorSide::GoodSide),
        scrambling_attempted: true,
        scrambling_succeeded: Some(true),
        ..HoleRecord::default()
    };
    assert_eq!(compute_breakdown(&hole).short_game, Some(0.35));
}

#[test]
fn total_is_null_only_without_phases_and_penalties() {
    let bare = HoleRecord::new(4);
    let sg = compute_breakdown(&bare);
    assert_eq!(sg.total, None);
    assert_eq!(sg.confidence, Confidence::Low);

    let penalised = HoleRecord {
        penalties: 2,
        ..bare
    };
    assert_eq!(compute_breakdown(&penalised).total, Some(-0.5));
}

#[test]
fn first_putt_falls_back_to_gir_proximity() {
    let hole = HoleRecord {
        hole_par: 3,
        putts: Some(1),
        green_in_regulation: Some(true),
        gir_proximity_bucket: Some(ProximityBucket::Under3m),
        ..HoleRecord::default()
    };
    assert_eq!(compute_breakdown(&hole).putting, Some(0.22));
}

#[test]
fn stored_values_only_fill_gaps() {
    let mut hole = HoleRecord::new(4);
    hole.putts = Some(2);
    hole.first_putt_bucket = Some(ProximityBucket::Over10m);
    hole.stored = Some(StoredBreakdown {
        off_tee: Some(0.5),
        putting: Some(9.0),
        total: Some(1.0),
        ..StoredBreakdown::default()
    });
    let sg = effective_breakdown(&hole);
    assert_eq!(sg.off_tee, Some(0.5));
    assert_eq!(sg.putting, Some(0.13));
    // re-summed from the merged components, not the live or stored total
    assert_eq!(sg.total, Some(0.63));

    hole.penalties = 2;
    assert_eq!(effective_breakdown(&hole).total, Some(0.13));
}

#[test]
fn stored_total_used_when_nothing_else_known() {
    let mut hole = HoleRecord::new(4);
    hole.stored = Some(StoredBreakdown {
        total: Some(-0.75),
        ..StoredBreakdown::default()
    });
    let sg = effective_breakdown(&hole);
    assert_eq!(sg.total, Some(-0.75));
    assert_eq!(sg.putting, None);
}

#[test]
fn batch_matches_single_records() {
    let holes: Vec<HoleRecord> = (0..PARALLEL_BATCH_THRESHOLD + 3)
        .map(|i| match i % 3 {
            0 => common::regulation_par4(),
            1 => common::par5_bogey(),
            _ => common::blow_up_par4(),
        })
        .collect();
    let batch = compute_breakdowns(&holes);
    assert_eq!(batch.len(), holes.len());
    for (hole, sg) in holes.iter().zip(&batch) {
        assert_eq!(*sg, compute_breakdown(hole));
    }
}
