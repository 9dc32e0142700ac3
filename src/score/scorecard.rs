use crate::critical_errors::classify_scored;
use crate::error::InsightsError;
use crate::model::{RoundHole, RoundScorecard, ScoreDisplay, ScorecardLine};
use crate::storage::Storage;

/// Per-hole lines and totals for one round.
///
/// `to_par` only counts scored holes, so a round in progress reads as the
/// score relative to the holes played so far. A hole with an impossible par
/// is listed but left out of every total.
#[must_use]
pub fn scorecard(holes: &[RoundHole]) -> RoundScorecard {
    let mut ordered: Vec<&RoundHole> = holes.iter().collect();
    ordered.sort_by_key(|h| h.hole_number);

    let mut card = RoundScorecard::default();
    for hole in ordered {
        let record = &hole.record;
        let to_par = record.to_par();
        if let Some(par) = record.par() {
            card.total_par = card.total_par.saturating_add(par);
        }
        if let (Some(score), Some(diff)) = (record.score(), to_par) {
            card.total_score = card.total_score.saturating_add(score);
            card.to_par = card.to_par.saturating_add(diff);
            card.holes_scored += 1;
        }
        card.lines.push(ScorecardLine {
            hole_number: hole.hole_number,
            par: record.hole_par,
            score: record.score(),
            putts: record.putts(),
            score_display: to_par.map(ScoreDisplay::from),
            critical_errors: classify_scored(record).map_or(0, |flags| flags.count),
        });
    }
    card
}

/// # Errors
/// Returns an error if the store cannot be read.
pub fn load_scorecard(
    storage: &dyn Storage,
    round_id: &str,
) -> Result<RoundScorecard, InsightsError> {
    let holes = storage.holes_for_rounds(&[round_id.to_string()])?;
    Ok(scorecard(&holes))
}
