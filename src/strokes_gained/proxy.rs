use rayon::prelude::*;

use crate::model::{Confidence, HoleRecord, SgCategory, StrokesGainedBreakdown};
use crate::strokes_gained::tables::{ExpectedStrokesTable, V1_BUCKET_PROXY, lookup};

/// Batches at least this large are evaluated on the rayon pool.
pub const PARALLEL_BATCH_THRESHOLD: usize = 512;

/// Cached components further than this many strokes from zero are ignored.
pub const STORED_VALUE_LIMIT: f64 = 100.0;

/// Round to 3 decimals, half away from zero.
#[must_use]
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Strokes gained by a phase: expected before, minus the shot itself and
/// the expectation after it.
fn gained(before: f64, after: f64) -> f64 {
    round3(before - (1.0 + after))
}

fn off_tee(table: &ExpectedStrokesTable, record: &HoleRecord) -> Option<f64> {
    let before = lookup(table.tee_baseline, record.hole_par)?;
    let after = lookup(table.after_tee, (record.hole_par, record.tee_result?))?;
    Some(gained(before, after))
}

fn approach(table: &ExpectedStrokesTable, record: &HoleRecord) -> Option<f64> {
    let zone = lookup(table.approach_start, record.approach_zone?)?;
    let lie = record
        .approach_lie
        .and_then(|lie| lookup(table.lie_penalty, lie))
        .unwrap_or(0.0);
    let after = match record.green_in_regulation? {
        true => record
            .gir_proximity_bucket
            .and_then(|bucket| lookup(table.after_green_hit, bucket))
            .unwrap_or(table.after_green_hit_default),
        false => record
            .approach_error_side
            .and_then(|side| lookup(table.after_green_missed, side))
            .unwrap_or(table.after_green_missed_default),
    };
    Some(gained(zone + lie, after))
}

fn short_game(table: &ExpectedStrokesTable, record: &HoleRecord) -> Option<f64> {
    if record.green_in_regulation != Some(false) {
        return None;
    }
    let start = record
        .approach_error_side
        .and_then(|side| lookup(table.short_game_start, side))
        .unwrap_or(table.short_game_start_default);
    let cost = match (record.scrambling_succeeded, record.putts()) {
        (Some(true), _) => table.scramble_saved_cost,
        (Some(false), _) => table.scramble_failed_cost,
        (None, Some(putts)) => table.short_game_putt_cost[(putts.max(1) - 1).min(2) as usize],
        (None, None) => return None,
    };
    Some(round3(start - cost))
}

fn putting(table: &ExpectedStrokesTable, record: &HoleRecord) -> Option<f64> {
    let expected = lookup(table.first_putt, record.putting_bucket()?)?;
    let putts = record.putts()?;
    Some(round3(expected - f64::from(putts)))
}

fn confidence(record: &HoleRecord) -> Confidence {
    let signals = [
        record.score().is_some(),
        record.tee_result.is_some() || record.is_par3(),
        record.approach_zone.is_some(),
        record.green_in_regulation.is_some(),
        record.putts().is_some(),
        record.putting_bucket().is_some(),
        record.approach_lie.is_some(),
    ];
    Confidence::from_signals(signals.iter().filter(|s| **s).count())
}

fn penalty_adjustment(table: &ExpectedStrokesTable, record: &HoleRecord) -> f64 {
    -table.penalty_stroke_cost * f64::from(record.penalties)
}

/// Evaluate a hole against an explicit table.
#[must_use]
pub fn compute_breakdown_with(
    table: &ExpectedStrokesTable,
    record: &HoleRecord,
) -> StrokesGainedBreakdown {
    let off_tee = off_tee(table, record);
    let approach = approach(table, record);
    let short_game = short_game(table, record);
    let putting = putting(table, record);

    let phases: Vec<f64> = [off_tee, approach, short_game, putting]
        .into_iter()
        .flatten()
        .collect();
    let total = if phases.is_empty() && record.penalties == 0 {
        None
    } else {
        Some(round3(
            phases.iter().sum::<f64>() + penalty_adjustment(table, record),
        ))
    };

    StrokesGainedBreakdown {
        off_tee,
        approach,
        short_game,
        putting,
        total,
        confidence: confidence(record),
    }
}

/// Strokes-gained breakdown for one hole using the shipped tables.
#[must_use]
pub fn compute_breakdown(record: &HoleRecord) -> StrokesGainedBreakdown {
    compute_breakdown_with(&V1_BUCKET_PROXY, record)
}

/// Breakdowns for a batch of holes, in input order.
#[must_use]
pub fn compute_breakdowns(records: &[HoleRecord]) -> Vec<StrokesGainedBreakdown> {
    if records.len() >= PARALLEL_BATCH_THRESHOLD {
        records.par_iter().map(compute_breakdown).collect()
    } else {
        records.iter().map(compute_breakdown).collect()
    }
}

fn usable(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && v.abs() <= STORED_VALUE_LIMIT)
}

/// Live breakdown with any missing component taken from the stored copy.
///
/// When a stored component fills a gap the total is re-summed from the
/// merged components and the penalty strokes, so it always agrees with
/// them. Stored values outside [`STORED_VALUE_LIMIT`] are ignored.
#[must_use]
pub fn effective_breakdown(record: &HoleRecord) -> StrokesGainedBreakdown {
    let live = compute_breakdown(record);
    let Some(stored) = record.stored.as_ref() else {
        return live;
    };

    let mut filled = false;
    let mut pick = |category: SgCategory| match live.category(category) {
        Some(value) => Some(value),
        None => {
            let value = usable(stored.category(category));
            filled |= value.is_some();
            value
        }
    };
    let off_tee = pick(SgCategory::OffTee);
    let approach = pick(SgCategory::Approach);
    let short_game = pick(SgCategory::ShortGame);
    let putting = pick(SgCategory::Putting);

    let total = if filled {
        let phases: f64 = [off_tee, approach, short_game, putting]
            .into_iter()
            .flatten()
            .sum();
        Some(round3(
            phases + penalty_adjustment(&V1_BUCKET_PROXY, record),
        ))
    } else {
        live.total.or(usable(stored.total))
    };

    StrokesGainedBreakdown {
        off_tee,
        approach,
        short_game,
        putting,
        total,
        confidence: live.confidence,
    }
}
