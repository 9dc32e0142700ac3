use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::hole::HoleRecord;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RoundStatus {
    #[default]
    InProgress,
    Finished,
}

impl RoundStatus {
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "in_progress" => Some(Self::InProgress),
            "finished" => Some(Self::Finished),
            _ => None,
        }
    }

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::Finished => "finished",
        }
    }
}

impl fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoundSummary {
    pub id: String,
    pub owner_id: String,
    pub played_at: DateTime<Utc>,
    #[serde(default)]
    pub status: RoundStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A hole row as fetched from the store.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoundHole {
    pub id: String,
    pub round_id: String,
    pub hole_number: i32,
    pub record: HoleRecord,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub enum ScoreDisplay {
    Condor,
    Albatross,
    Eagle,
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
    TripleBogey,
    QuadrupleOrWorse,
}

impl ScoreDisplay {
    #[must_use]
    pub fn from_to_par(to_par: i32) -> Self {
        match to_par {
            i32::MIN..=-4 => Self::Condor,
            -3 => Self::Albatross,
            -2 => Self::Eagle,
            -1 => Self::Birdie,
            0 => Self::Par,
            1 => Self::Bogey,
            2 => Self::DoubleBogey,
            3 => Self::TripleBogey,
            _ => Self::QuadrupleOrWorse,
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Condor => "condor",
            Self::Albatross => "albatross",
            Self::Eagle => "eagle",
            Self::Birdie => "birdie",
            Self::Par => "par",
            Self::Bogey => "bogey",
            Self::DoubleBogey => "double-bogey",
            Self::TripleBogey => "triple-bogey",
            Self::QuadrupleOrWorse => "quadruple-bogey",
        }
    }
}

impl From<i32> for ScoreDisplay {
    fn from(value: i32) -> Self {
        Self::from_to_par(value)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScorecardLine {
    pub hole_number: i32,
    pub par: i32,
    pub score: Option<i32>,
    pub putts: Option<i32>,
    pub score_display: Option<ScoreDisplay>,
    pub critical_errors: u8,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoundScorecard {
    pub total_score: i32,
    pub total_par: i32,
    pub to_par: i32,
    pub holes_scored: usize,
    pub lines: Vec<ScorecardLine>,
}

/// JSON export of rounds and their holes, used to seed or back a store.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct RoundExport {
    pub rounds: Vec<ExportRound>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExportRound {
    pub id: String,
    pub owner_id: String,
    pub played_at: DateTime<Utc>,
    #[serde(default)]
    pub status: RoundStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub holes: Vec<ExportHole>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExportHole {
    pub id: String,
    pub hole_number: i32,
    #[serde(flatten)]
    pub record: HoleRecord,
}

impl ExportRound {
    #[must_use]
    pub fn summary(&self) -> RoundSummary {
        RoundSummary {
            id: self.id.clone(),
            owner_id: self.owner_id.clone(),
            played_at: self.played_at,
            status: self.status,
            notes: self.notes.clone(),
        }
    }

    #[must_use]
    pub fn round_holes(&self) -> Vec<RoundHole> {
        self.holes
            .iter()
            .map(|hole| RoundHole {
                id: hole.id.clone(),
                round_id: self.id.clone(),
                hole_number: hole.hole_number,
                record: hole.record.clone(),
            })
            .collect()
    }
}
