use serde::{Deserialize, Serialize};

use crate::model::breakdown::SgMeans;
use crate::model::categories::MentalCommitment;
use crate::model::critical::CriticalErrorTotals;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MentalCounts {
    pub routine_perfect: usize,
    pub hesitated: usize,
    pub lost_focus: usize,
}

impl MentalCounts {
    pub fn add(&mut self, rating: MentalCommitment) {
        match rating {
            MentalCommitment::RoutinePerfect => self.routine_perfect += 1,
            MentalCommitment::Hesitated => self.hesitated += 1,
            MentalCommitment::LostFocus => self.lost_focus += 1,
        }
    }

    #[must_use]
    pub fn tracked(&self) -> usize {
        self.routine_perfect + self.hesitated + self.lost_focus
    }
}

/// Summary statistics for the holes of one window.
///
/// Rates are whole percentages and are `None` when nothing was tracked.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WindowAggregate {
    pub total_holes: usize,
    pub unscored_holes: usize,

    pub critical_errors: CriticalErrorTotals,

    pub mental: MentalCounts,
    pub mental_routine_rate: Option<f64>,

    pub target_tracked: usize,
    pub flag_targets: usize,
    pub center_target_rate: Option<f64>,
    pub error_side_tracked: usize,
    pub bad_side_misses: usize,

    pub gir_count: usize,
    pub gir_tracked: usize,
    pub gir_rate: Option<f64>,

    pub three_putt_count: usize,
    pub putts_tracked: usize,
    pub three_putt_rate: Option<f64>,

    pub fairways: usize,
    pub fairway_tracked: usize,
    pub fairway_rate: Option<f64>,

    pub scrambles_made: usize,
    pub scrambling_tracked: usize,
    pub scrambling_rate: Option<f64>,

    pub penalties_total: u64,
    pub penalties_per_hole: Option<f64>,
    pub penalty_holes: usize,
    pub penalty_hole_rate: Option<f64>,

    pub complete_holes: usize,
    pub completeness_rate: Option<f64>,

    pub strokes_gained: SgMeans,
    pub high_confidence_rate: Option<f64>,
}
