#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};

use rusty_golf_insights::model::{
    ApproachLie, ApproachTarget, ApproachZone, ErrorSide, HoleRecord, MentalCommitment,
    ProximityBucket, RoundHole, RoundStatus, RoundSummary, TeeResult,
};
use rusty_golf_insights::storage::SqliteStorage;

pub const OWNER: &str = "golfer-1";

pub fn played_at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, day, 8, 30, 0)
        .single()
        .expect("valid fixture date")
}

/// Par 4 played textbook: fairway, 90-135 from the fairway, on in
/// regulation at 3-5m, two putts.
pub fn regulation_par4() -> HoleRecord {
    HoleRecord {
        hole_par: 4,
        score: Some(4),
        putts: Some(2),
        tee_result: Some(TeeResult::Fairway),
        approach_zone: Some(ApproachZone::From90To135),
        approach_lie: Some(ApproachLie::Fairway),
        approach_target: Some(ApproachTarget::CenterGreen),
        approach_error_side: Some(ErrorSide::GoodSide),
        green_in_regulation: Some(true),
        gir_proximity_bucket: Some(ProximityBucket::From3To5m),
        first_putt_bucket: Some(ProximityBucket::From3To5m),
        mental_commitment: Some(MentalCommitment::RoutinePerfect),
        ..HoleRecord::default()
    }
}

/// Par 5 bogey after a short approach, nothing else captured.
pub fn par5_bogey() -> HoleRecord {
    HoleRecord {
        hole_par: 5,
        score: Some(6),
        putts: Some(2),
        approach_zone: Some(ApproachZone::Under60),
        ..HoleRecord::default()
    }
}

/// Missed green to the bad side, failed scramble, three putts, double.
pub fn blow_up_par4() -> HoleRecord {
    HoleRecord {
        hole_par: 4,
        score: Some(7),
        putts: Some(3),
        tee_result: Some(TeeResult::Penalty),
        approach_zone: Some(ApproachZone::From135To180),
        approach_lie: Some(ApproachLie::Rough),
        approach_target: Some(ApproachTarget::Flag),
        approach_error_side: Some(ErrorSide::BadSide),
        green_in_regulation: Some(false),
        scrambling_attempted: true,
        scrambling_succeeded: Some(false),
        penalties: 1,
        mental_commitment: Some(MentalCommitment::LostFocus),
        ..HoleRecord::default()
    }
}

pub fn round(id: &str, day: u32) -> RoundSummary {
    RoundSummary {
        id: id.to_string(),
        owner_id: OWNER.to_string(),
        played_at: played_at(day),
        status: RoundStatus::Finished,
        notes: None,
    }
}

pub fn hole(round_id: &str, hole_number: i32, record: HoleRecord) -> RoundHole {
    RoundHole {
        id: format!("{round_id}-h{hole_number:02}"),
        round_id: round_id.to_string(),
        hole_number,
        record,
    }
}

/// Fresh SQLite store in a temporary directory. Keep the `TempDir` alive
/// for as long as the store is used.
pub fn temp_sqlite() -> Result<(tempfile::TempDir, SqliteStorage), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let storage = SqliteStorage::open(&dir.path().join("rounds.db"))?;
    Ok((dir, storage))
}
