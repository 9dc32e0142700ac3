use crate::model::{CriticalErrorFlags, HoleRecord, TeeResult};

/// Classify a hole against the five critical errors.
///
/// A missing score or putt count compares as zero, so an unscored hole
/// comes back clean, as does a hole whose par is not 3, 4 or 5. Use
/// [`classify_scored`] when those must not count as clean ones.
#[must_use]
pub fn classify(record: &HoleRecord) -> CriticalErrorFlags {
    let over_par = record.to_par().unwrap_or(0);
    let putts = record.putts().unwrap_or(0);

    let bogey_on_par5 = record.hole_par == 5 && over_par >= 1;
    let double_or_worse = over_par >= 2;
    let three_putt = putts >= 3;
    let bogey_after_short_approach =
        over_par >= 1 && record.approach_zone.is_some_and(|zone| zone.is_short());
    let penalty_incurred = record.penalties >= 1 || record.tee_result == Some(TeeResult::Penalty);

    let count = [
        bogey_on_par5,
        double_or_worse,
        three_putt,
        bogey_after_short_approach,
        penalty_incurred,
    ]
    .iter()
    .filter(|flag| **flag)
    .count();

    CriticalErrorFlags {
        bogey_on_par5,
        double_or_worse,
        three_putt,
        bogey_after_short_approach,
        penalty_incurred,
        count: count as u8,
    }
}

/// Classify only holes that were scored on a valid par.
#[must_use]
pub fn classify_scored(record: &HoleRecord) -> Option<CriticalErrorFlags> {
    record.to_par().map(|_| classify(record))
}
