use tracing::debug;

use crate::critical_errors::classify_scored;
use crate::model::{
    ApproachTarget, Confidence, ErrorSide, HoleRecord, SgCategory, SgMeans, TeeResult,
    WindowAggregate,
};
use crate::score::comparison::round_to;
use crate::strokes_gained::effective_breakdown;

/// Whole percentage of `part` over `whole`, `None` when nothing was tracked.
#[must_use]
pub fn percent(part: usize, whole: usize) -> Option<f64> {
    (whole > 0).then(|| (part as f64 / whole as f64 * 100.0).round())
}

/// Mean over values already on the 0.001 grid.
///
/// Sums are kept in integer thousandths so the result does not depend on
/// the order the holes arrive in, and the mean is rounded once, half away
/// from zero, without going back through floating point.
#[derive(Debug, Default, Clone, Copy)]
struct MilliMean {
    sum: i64,
    n: usize,
}

impl MilliMean {
    fn push(&mut self, value: Option<f64>) {
        if let Some(v) = value.filter(|v| v.is_finite()) {
            self.sum = self.sum.saturating_add((v * 1000.0).round() as i64);
            self.n += 1;
        }
    }

    fn mean(&self) -> Option<f64> {
        let n = i128::try_from(self.n).ok().filter(|n| *n > 0)?;
        let sum = i128::from(self.sum);
        let thousandths = (2 * sum + sum.signum() * n) / (2 * n);
        Some(thousandths as f64 / 1000.0)
    }
}

#[derive(Debug, Default)]
struct SgAccumulator {
    total: MilliMean,
    off_tee: MilliMean,
    approach: MilliMean,
    short_game: MilliMean,
    putting: MilliMean,
}

impl SgAccumulator {
    fn means(&self) -> SgMeans {
        SgMeans {
            total: self.total.mean(),
            off_tee: self.off_tee.mean(),
            approach: self.approach.mean(),
            short_game: self.short_game.mean(),
            putting: self.putting.mean(),
        }
    }
}

/// Summarise the holes of one window.
///
/// Only scored holes are aggregated; the rest are counted in
/// `unscored_holes`. Every rate divides by the holes where its field was
/// captured, never by the whole window.
#[must_use]
pub fn aggregate(records: &[HoleRecord]) -> WindowAggregate {
    let mut agg = WindowAggregate::default();
    let mut sg = SgAccumulator::default();
    let mut high_confidence = 0usize;

    for record in records {
        let Some(flags) = classify_scored(record) else {
            agg.unscored_holes += 1;
            continue;
        };
        agg.total_holes += 1;
        agg.critical_errors.add(&flags);

        if let Some(rating) = record.mental_commitment {
            agg.mental.add(rating);
        }

        if record.has_approach() {
            if let Some(target) = record.approach_target {
                agg.target_tracked += 1;
                agg.flag_targets += usize::from(target == ApproachTarget::Flag);
            }
            if let Some(side) = record.approach_error_side {
                agg.error_side_tracked += 1;
                agg.bad_side_misses += usize::from(side == ErrorSide::BadSide);
            }
            if let Some(tee) = record.tee_result {
                agg.fairway_tracked += 1;
                agg.fairways += usize::from(tee == TeeResult::Fairway);
            }
        }

        if let Some(gir) = record.green_in_regulation {
            agg.gir_tracked += 1;
            agg.gir_count += usize::from(gir);
            if !gir {
                if let Some(saved) = record.scrambling_succeeded {
                    agg.scrambling_tracked += 1;
                    agg.scrambles_made += usize::from(saved);
                }
            }
        }

        if let Some(putts) = record.putts() {
            agg.putts_tracked += 1;
            agg.three_putt_count += usize::from(putts >= 3);
        }

        agg.penalties_total += u64::from(record.penalties);
        agg.penalty_holes += usize::from(flags.penalty_incurred);
        agg.complete_holes += usize::from(record.is_complete());

        let breakdown = effective_breakdown(record);
        sg.total.push(breakdown.total);
        sg.off_tee.push(breakdown.category(SgCategory::OffTee));
        sg.approach.push(breakdown.category(SgCategory::Approach));
        sg.short_game.push(breakdown.category(SgCategory::ShortGame));
        sg.putting.push(breakdown.category(SgCategory::Putting));
        high_confidence += usize::from(breakdown.confidence == Confidence::High);
    }

    let holes = agg.total_holes;
    agg.mental_routine_rate = percent(agg.mental.routine_perfect, agg.mental.tracked());
    agg.center_target_rate = percent(agg.target_tracked - agg.flag_targets, agg.target_tracked);
    agg.gir_rate = percent(agg.gir_count, agg.gir_tracked);
    agg.three_putt_rate = percent(agg.three_putt_count, agg.putts_tracked);
    agg.fairway_rate = percent(agg.fairways, agg.fairway_tracked);
    agg.scrambling_rate = percent(agg.scrambles_made, agg.scrambling_tracked);
    agg.penalties_per_hole =
        (holes > 0).then(|| round_to(agg.penalties_total as f64 / holes as f64, 2));
    agg.penalty_hole_rate = percent(agg.penalty_holes, holes);
    agg.completeness_rate = percent(agg.complete_holes, holes);
    agg.strokes_gained = sg.means();
    agg.high_confidence_rate = percent(high_confidence, holes);

    debug!(
        records = records.len(),
        scored = holes,
        critical_errors = agg.critical_errors.total,
        "aggregated window"
    );
    agg
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mean_of(values: &[f64]) -> Option<f64> {
        let mut acc = MilliMean::default();
        for v in values {
            acc.push(Some(*v));
        }
        acc.mean()
    }

    #[test]
    fn mean_rounds_half_away_from_zero() {
        assert_eq!(mean_of(&[-2.047, -2.048]), Some(-2.048));
        assert_eq!(mean_of(&[2.047, 2.048]), Some(2.048));
        assert_eq!(mean_of(&[0.001, 0.002]), Some(0.002));
        assert_eq!(mean_of(&[-0.001, 0.0]), Some(-0.001));
        assert_eq!(mean_of(&[0.1, 0.2, 0.4]), Some(0.233));
        assert_eq!(mean_of(&[]), None);
    }

    #[test]
    fn every_odd_pair_rounds_away_from_zero() {
        for milli in -5000i64..5000 {
            let a = milli as f64 / 1000.0;
            let b = (milli + 1) as f64 / 1000.0;
            let away = if milli >= 0 { milli + 1 } else { milli };
            assert_eq!(mean_of(&[a, b]), Some(away as f64 / 1000.0), "pair {a} {b}");
        }
    }

    #[test]
    fn huge_values_do_not_overflow() {
        assert!(mean_of(&[1e17, 1e17, -1e300]).is_some());
        assert_eq!(mean_of(&[f64::NAN, 1.0]), Some(1.0));
    }
}
