//! Expected strokes-to-finish lookup tables.
//!
//! Every constant of the model lives here as data. The evaluation code in
//! `proxy.rs` only looks values up, so a new table version can be added
//! without touching control flow.

use crate::model::{ApproachLie, ApproachZone, ErrorSide, MODEL_VERSION, ProximityBucket, TeeResult};

#[derive(Debug, Clone, Copy)]
pub struct ExpectedStrokesTable {
    pub version: &'static str,
    /// Expected strokes from the tee, keyed by par.
    pub tee_baseline: &'static [(i32, f64)],
    /// Expected strokes after the tee shot, keyed by par and result.
    pub after_tee: &'static [((i32, TeeResult), f64)],
    pub approach_start: &'static [(ApproachZone, f64)],
    pub lie_penalty: &'static [(ApproachLie, f64)],
    pub after_green_hit: &'static [(ProximityBucket, f64)],
    pub after_green_hit_default: f64,
    pub after_green_missed: &'static [(ErrorSide, f64)],
    pub after_green_missed_default: f64,
    pub short_game_start: &'static [(ErrorSide, f64)],
    pub short_game_start_default: f64,
    pub scramble_saved_cost: f64,
    pub scramble_failed_cost: f64,
    /// Short-game cost by putt count when the scramble outcome is unknown.
    /// Index 0 is one putt or fewer, index 2 is three or more.
    pub short_game_putt_cost: [f64; 3],
    pub first_putt: &'static [(ProximityBucket, f64)],
    pub penalty_stroke_cost: f64,
}

pub const V1_BUCKET_PROXY: ExpectedStrokesTable = ExpectedStrokesTable {
    version: MODEL_VERSION,
    tee_baseline: &[(4, 4.05), (5, 4.85)],
    after_tee: &[
        ((4, TeeResult::Fairway), 3.02),
        ((4, TeeResult::Left), 3.24),
        ((4, TeeResult::Right), 3.24),
        ((4, TeeResult::Penalty), 4.15),
        ((5, TeeResult::Fairway), 3.78),
        ((5, TeeResult::Left), 3.98),
        ((5, TeeResult::Right), 3.98),
        ((5, TeeResult::Penalty), 4.95),
    ],
    approach_start: &[
        (ApproachZone::Under60, 2.55),
        (ApproachZone::From60To90, 2.75),
        (ApproachZone::From90To135, 2.95),
        (ApproachZone::From135To180, 3.15),
        (ApproachZone::Over180, 3.45),
    ],
    lie_penalty: &[
        (ApproachLie::Fairway, 0.0),
        (ApproachLie::Rough, 0.12),
        (ApproachLie::Bunker, 0.25),
        (ApproachLie::Recovery, 0.45),
    ],
    after_green_hit: &[
        (ProximityBucket::Under3m, 1.25),
        (ProximityBucket::From3To5m, 1.55),
        (ProximityBucket::From5To10m, 1.85),
        (ProximityBucket::Over10m, 2.15),
    ],
    after_green_hit_default: 1.95,
    after_green_missed: &[(ErrorSide::GoodSide, 2.25), (ErrorSide::BadSide, 2.55)],
    after_green_missed_default: 2.4,
    short_game_start: &[(ErrorSide::GoodSide, 2.35), (ErrorSide::BadSide, 2.55)],
    short_game_start_default: 2.35,
    scramble_saved_cost: 2.0,
    scramble_failed_cost: 2.8,
    short_game_putt_cost: [2.1, 2.5, 2.9],
    first_putt: &[
        (ProximityBucket::Under3m, 1.22),
        (ProximityBucket::From3To5m, 1.56),
        (ProximityBucket::From5To10m, 1.84),
        (ProximityBucket::Over10m, 2.13),
    ],
    penalty_stroke_cost: 0.25,
};

/// Linear lookup in a small keyed table.
#[must_use]
pub fn lookup<K: PartialEq + Copy>(table: &[(K, f64)], key: K) -> Option<f64> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}
