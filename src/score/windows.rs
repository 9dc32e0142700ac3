use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::InsightsError;
use crate::model::{HoleRecord, RoundHole, RoundSummary};

/// Number of rounds in each comparison window.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(try_from = "u32", into = "u32")]
pub enum WindowSize {
    Five,
    #[default]
    Ten,
    Twenty,
}

impl WindowSize {
    pub const ALL: [WindowSize; 3] = [WindowSize::Five, WindowSize::Ten, WindowSize::Twenty];

    #[must_use]
    pub fn rounds(self) -> usize {
        match self {
            Self::Five => 5,
            Self::Ten => 10,
            Self::Twenty => 20,
        }
    }
}

impl TryFrom<u32> for WindowSize {
    type Error = InsightsError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            5 => Ok(Self::Five),
            10 => Ok(Self::Ten),
            20 => Ok(Self::Twenty),
            other => Err(InsightsError::Config(format!(
                "window size must be 5, 10 or 20, got {other}"
            ))),
        }
    }
}

impl From<WindowSize> for u32 {
    fn from(value: WindowSize) -> Self {
        match value {
            WindowSize::Five => 5,
            WindowSize::Ten => 10,
            WindowSize::Twenty => 20,
        }
    }
}

impl FromStr for WindowSize {
    type Err = InsightsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s
            .trim()
            .parse()
            .map_err(|_| InsightsError::Config(format!("window size '{s}' is not a number")))?;
        Self::try_from(value)
    }
}

impl fmt::Display for WindowSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rounds())
    }
}

/// Round ids of the current window and the one before it, most recent first.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WindowRounds {
    pub current: Vec<String>,
    pub previous: Vec<String>,
}

impl WindowRounds {
    #[must_use]
    pub fn all_ids(&self) -> Vec<String> {
        self.current.iter().chain(&self.previous).cloned().collect()
    }
}

/// Pick the current and previous windows from an owner's rounds.
///
/// Rounds are ordered by `played_at` descending, ties by id, so the result
/// does not depend on the order the store returned them in.
#[must_use]
pub fn select_window_rounds(rounds: &[RoundSummary], size: WindowSize) -> WindowRounds {
    let mut ordered: Vec<&RoundSummary> = rounds.iter().collect();
    ordered.sort_by(|a, b| b.played_at.cmp(&a.played_at).then_with(|| a.id.cmp(&b.id)));

    let n = size.rounds();
    let mut ids = ordered.into_iter().map(|r| r.id.clone());
    let current: Vec<String> = ids.by_ref().take(n).collect();
    let previous: Vec<String> = ids.take(n).collect();
    WindowRounds { current, previous }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WindowSlice {
    pub round_count: usize,
    pub holes: Vec<HoleRecord>,
}

/// The `{current, previous}` pair the dashboard compares.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoundWindows {
    pub size: WindowSize,
    pub current: WindowSlice,
    pub previous: WindowSlice,
}

/// Split fetched hole rows between the two windows. Holes belonging to
/// neither window are dropped.
#[must_use]
pub fn partition_holes(
    holes: Vec<RoundHole>,
    rounds: &WindowRounds,
    size: WindowSize,
) -> RoundWindows {
    let current_ids: HashSet<&str, RandomState> =
        rounds.current.iter().map(String::as_str).collect();
    let previous_ids: HashSet<&str, RandomState> =
        rounds.previous.iter().map(String::as_str).collect();

    let mut windows = RoundWindows {
        size,
        current: WindowSlice {
            round_count: rounds.current.len(),
            holes: Vec::new(),
        },
        previous: WindowSlice {
            round_count: rounds.previous.len(),
            holes: Vec::new(),
        },
    };
    for hole in holes {
        if current_ids.contains(hole.round_id.as_str()) {
            windows.current.holes.push(hole.record);
        } else if previous_ids.contains(hole.round_id.as_str()) {
            windows.previous.holes.push(hole.record);
        }
    }
    windows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn round(id: &str, day: u32) -> RoundSummary {
        RoundSummary {
            id: id.to_string(),
            owner_id: "golfer".to_string(),
            played_at: Utc.with_ymd_and_hms(2024, 5, day, 9, 0, 0).unwrap(),
            status: crate::model::RoundStatus::Finished,
            notes: None,
        }
    }

    #[test]
    fn window_size_accepts_only_known_values() {
        assert_eq!("20".parse::<WindowSize>().unwrap(), WindowSize::Twenty);
        assert!("7".parse::<WindowSize>().is_err());
        assert!("ten".parse::<WindowSize>().is_err());
        assert_eq!(WindowSize::default().rounds(), 10);
        let parsed: WindowSize = serde_json::from_str("5").unwrap();
        assert_eq!(parsed, WindowSize::Five);
        assert!(serde_json::from_str::<WindowSize>("6").is_err());
    }

    #[test]
    fn windows_do_not_overlap() {
        let rounds: Vec<RoundSummary> = (1..=12)
            .map(|d| round(&format!("r{d:02}"), d))
            .collect();
        let w = select_window_rounds(&rounds, WindowSize::Five);
        assert_eq!(w.current, vec!["r12", "r11", "r10", "r09", "r08"]);
        assert_eq!(w.previous, vec!["r07", "r06", "r05", "r04", "r03"]);
    }

    #[test]
    fn short_history_leaves_previous_partial() {
        let rounds = vec![round("a", 1), round("b", 2), round("c", 2)];
        let w = select_window_rounds(&rounds, WindowSize::Five);
        assert_eq!(w.current, vec!["b", "c", "a"]);
        assert!(w.previous.is_empty());
    }
}
