use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::model::breakdown::StoredBreakdown;
use crate::model::categories::{
    ApproachLie, ApproachTarget, ApproachZone, ErrorSide, MentalCommitment, ProximityBucket,
    TeeResult, lenient,
};

/// One golfer's observations for one hole of one round.
///
/// Every observation except par is optional because capture may be partial.
/// The engine only reads these; the `record_*`/`set_*` methods are the
/// capture-side edits that keep the first-putt bucket consistent.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoleRecord {
    pub hole_par: i32,
    #[serde(default)]
    pub score: Option<i32>,
    #[serde(default)]
    pub putts: Option<i32>,
    #[serde(default, with = "lenient")]
    pub tee_result: Option<TeeResult>,
    #[serde(default, with = "lenient")]
    pub approach_zone: Option<ApproachZone>,
    #[serde(default, with = "lenient")]
    pub approach_lie: Option<ApproachLie>,
    #[serde(default, with = "lenient")]
    pub approach_target: Option<ApproachTarget>,
    #[serde(default, with = "lenient")]
    pub approach_error_side: Option<ErrorSide>,
    #[serde(default, alias = "gir")]
    pub green_in_regulation: Option<bool>,
    #[serde(default, with = "lenient")]
    pub gir_proximity_bucket: Option<ProximityBucket>,
    #[serde(default, with = "lenient")]
    pub first_putt_bucket: Option<ProximityBucket>,
    #[serde(default)]
    pub first_putt_overridden: bool,
    #[serde(default)]
    pub scrambling_attempted: bool,
    #[serde(default)]
    pub scrambling_succeeded: Option<bool>,
    #[serde(default, deserialize_with = "penalty_count")]
    pub penalties: u32,
    #[serde(default, with = "lenient")]
    pub mental_commitment: Option<MentalCommitment>,
    /// Breakdown cached by the store, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stored: Option<StoredBreakdown>,
}

impl HoleRecord {
    #[must_use]
    pub fn new(hole_par: i32) -> Self {
        Self {
            hole_par,
            ..Self::default()
        }
    }

    /// Strokes taken; a non-positive score is not a real observation.
    #[must_use]
    pub fn score(&self) -> Option<i32> {
        self.score.filter(|s| *s > 0)
    }

    #[must_use]
    pub fn putts(&self) -> Option<i32> {
        self.putts.filter(|p| *p >= 0)
    }

    /// Par, when it is one a hole can have (3, 4 or 5).
    #[must_use]
    pub fn par(&self) -> Option<i32> {
        Some(self.hole_par).filter(|p| (3..=5).contains(p))
    }

    #[must_use]
    pub fn is_par3(&self) -> bool {
        self.hole_par == 3
    }

    /// Par 4 and par 5 holes have a tee shot that is not the approach.
    #[must_use]
    pub fn has_approach(&self) -> bool {
        matches!(self.par(), Some(4 | 5))
    }

    /// Score relative to par, when the hole was scored on a valid par.
    #[must_use]
    pub fn to_par(&self) -> Option<i32> {
        self.score()?.checked_sub(self.par()?)
    }

    /// Bucket used for the putting expectation: the first-putt bucket, or the
    /// GIR proximity when the green was hit and no first putt was recorded.
    #[must_use]
    pub fn putting_bucket(&self) -> Option<ProximityBucket> {
        self.first_putt_bucket.or(match self.green_in_regulation {
            Some(true) => self.gir_proximity_bucket,
            _ => None,
        })
    }

    fn approach_fields_present(&self) -> bool {
        self.approach_zone.is_some()
            && self.approach_lie.is_some()
            && self.approach_target.is_some()
            && self.approach_error_side.is_some()
    }

    /// A hole counts as complete when every field the dashboard relies on
    /// was captured.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.mental_commitment.is_some()
            && self.tee_result.is_some()
            && (self.is_par3() || self.approach_fields_present())
            && self.green_in_regulation.is_some()
            && self.putts().is_some()
            && self.first_putt_bucket.is_some()
    }

    /// Green hit in regulation. Clears any scramble and re-derives the first
    /// putt unless the user set it by hand.
    pub fn record_green_hit(&mut self, proximity: Option<ProximityBucket>) {
        self.green_in_regulation = Some(true);
        self.gir_proximity_bucket = proximity;
        self.scrambling_attempted = false;
        self.scrambling_succeeded = None;
        if !self.first_putt_overridden {
            self.first_putt_bucket = proximity;
        }
    }

    /// Green missed. An auto-copied first-putt bucket no longer has a source
    /// and is dropped; a hand-set one stays.
    pub fn record_green_missed(&mut self) {
        self.green_in_regulation = Some(false);
        self.gir_proximity_bucket = None;
        if !self.first_putt_overridden {
            self.first_putt_bucket = None;
        }
    }

    pub fn set_gir_proximity(&mut self, bucket: Option<ProximityBucket>) {
        self.gir_proximity_bucket = bucket;
        if self.green_in_regulation == Some(true) && !self.first_putt_overridden {
            self.first_putt_bucket = bucket;
        }
    }

    /// Explicit first-putt edit; decouples the bucket from GIR proximity.
    pub fn set_first_putt_bucket(&mut self, bucket: Option<ProximityBucket>) {
        self.first_putt_bucket = bucket;
        self.first_putt_overridden = true;
    }

    pub fn record_scramble(&mut self, succeeded: bool) {
        self.scrambling_attempted = true;
        self.scrambling_succeeded = Some(succeeded);
    }

    /// Capture progress for this hole.
    #[must_use]
    pub fn capture_checklist(&self) -> CaptureChecklist {
        let mut items = vec![
            ChecklistItem::new(CaptureStep::Score, self.score().is_some()),
            ChecklistItem::new(CaptureStep::Mental, self.mental_commitment.is_some()),
            ChecklistItem::new(CaptureStep::Tee, self.tee_result.is_some()),
            ChecklistItem::new(CaptureStep::Gir, self.green_in_regulation.is_some()),
            ChecklistItem::new(CaptureStep::Putts, self.putts().is_some()),
            ChecklistItem::new(CaptureStep::FirstPutt, self.first_putt_bucket.is_some()),
        ];
        if self.has_approach() {
            items.insert(
                3,
                ChecklistItem::new(CaptureStep::Approach, self.approach_fields_present()),
            );
        }
        CaptureChecklist { items }
    }
}

/// Penalty strokes from an export. Anything but a non-negative integer reads
/// as none.
fn penalty_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(raw
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0))
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum CaptureStep {
    Score,
    Mental,
    Tee,
    Approach,
    Gir,
    Putts,
    FirstPutt,
}

impl CaptureStep {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Score => "Score",
            Self::Mental => "Mental",
            Self::Tee => "Tee shot",
            Self::Approach => "Approach",
            Self::Gir => "GIR",
            Self::Putts => "Putts",
            Self::FirstPutt => "First putt distance",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChecklistItem {
    pub step: CaptureStep,
    pub done: bool,
}

impl ChecklistItem {
    fn new(step: CaptureStep, done: bool) -> Self {
        Self { step, done }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CaptureChecklist {
    pub items: Vec<ChecklistItem>,
}

impl CaptureChecklist {
    #[must_use]
    pub fn done(&self) -> usize {
        self.items.iter().filter(|i| i.done).count()
    }

    #[must_use]
    pub fn percent(&self) -> u32 {
        if self.items.is_empty() {
            return 0;
        }
        let pct = self.done() as f64 / self.items.len() as f64 * 100.0;
        pct.round() as u32
    }

    #[must_use]
    pub fn missing(&self) -> Vec<CaptureStep> {
        self.items.iter().filter(|i| !i.done).map(|i| i.step).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_putt_follows_proximity_until_overridden() {
        let mut hole = HoleRecord::new(4);
        hole.record_green_hit(Some(ProximityBucket::From3To5m));
        assert_eq!(hole.first_putt_bucket, Some(ProximityBucket::From3To5m));
        assert!(!hole.first_putt_overridden);

        hole.set_gir_proximity(Some(ProximityBucket::Under3m));
        assert_eq!(hole.first_putt_bucket, Some(ProximityBucket::Under3m));

        hole.set_first_putt_bucket(Some(ProximityBucket::Over10m));
        assert!(hole.first_putt_overridden);

        hole.set_gir_proximity(Some(ProximityBucket::From5To10m));
        assert_eq!(hole.first_putt_bucket, Some(ProximityBucket::Over10m));
        assert_eq!(hole.gir_proximity_bucket, Some(ProximityBucket::From5To10m));
    }

    #[test]
    fn missing_the_green_drops_only_the_derived_bucket() {
        let mut hole = HoleRecord::new(4);
        hole.record_green_hit(Some(ProximityBucket::From3To5m));
        hole.record_green_missed();
        assert_eq!(hole.first_putt_bucket, None);
        assert_eq!(hole.gir_proximity_bucket, None);

        hole.set_first_putt_bucket(Some(ProximityBucket::Under3m));
        hole.record_green_missed();
        assert_eq!(hole.first_putt_bucket, Some(ProximityBucket::Under3m));
    }

    #[test]
    fn hitting_the_green_clears_the_scramble() {
        let mut hole = HoleRecord::new(4);
        hole.record_green_missed();
        hole.record_scramble(false);
        assert_eq!(hole.scrambling_succeeded, Some(false));
        hole.record_green_hit(None);
        assert!(!hole.scrambling_attempted);
        assert_eq!(hole.scrambling_succeeded, None);
    }

    #[test]
    fn checklist_adds_approach_for_par4() {
        let par3 = HoleRecord::new(3).capture_checklist();
        let par4 = HoleRecord::new(4).capture_checklist();
        assert_eq!(par3.items.len(), 6);
        assert_eq!(par4.items.len(), 7);
        assert_eq!(par4.items[3].step, CaptureStep::Approach);
        assert_eq!(par4.percent(), 0);
    }

    #[test]
    fn out_of_range_counts_read_as_absent() {
        let hole = HoleRecord {
            hole_par: 4,
            score: Some(0),
            putts: Some(-1),
            ..HoleRecord::default()
        };
        assert_eq!(hole.score(), None);
        assert_eq!(hole.putts(), None);
        assert_eq!(hole.to_par(), None);
    }

    #[test]
    fn impossible_par_has_no_to_par() {
        let hole = HoleRecord {
            hole_par: i32::MIN,
            score: Some(i32::MAX),
            ..HoleRecord::default()
        };
        assert_eq!(hole.par(), None);
        assert_eq!(hole.to_par(), None);
        assert!(!hole.has_approach());
    }

    #[test]
    fn malformed_penalties_read_as_none() -> Result<(), serde_json::Error> {
        for raw in ["-2", "1.5", "\"two\"", "null", "99999999999"] {
            let hole: HoleRecord =
                serde_json::from_str(&format!(r#"{{"holePar": 4, "penalties": {raw}}}"#))?;
            assert_eq!(hole.penalties, 0, "penalties={raw}");
        }
        let hole: HoleRecord = serde_json::from_str(r#"{"holePar": 4, "penalties": 2}"#)?;
        assert_eq!(hole.penalties, 2);
        Ok(())
    }
}
