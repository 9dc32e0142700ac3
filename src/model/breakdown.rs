use serde::{Deserialize, Serialize};
use std::fmt;

/// Version tag of the expected-strokes tables shipped with this crate.
pub const MODEL_VERSION: &str = "v1_bucket_proxy";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    #[must_use]
    pub fn from_signals(signals: usize) -> Self {
        match signals {
            6.. => Self::High,
            4..=5 => Self::Medium,
            _ => Self::Low,
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The four phases of play strokes gained is attributed to.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum SgCategory {
    OffTee,
    Approach,
    ShortGame,
    Putting,
}

impl SgCategory {
    pub const ALL: [SgCategory; 4] = [
        SgCategory::OffTee,
        SgCategory::Approach,
        SgCategory::ShortGame,
        SgCategory::Putting,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::OffTee => "Off the tee",
            Self::Approach => "Approach",
            Self::ShortGame => "Short game",
            Self::Putting => "Putting",
        }
    }
}

/// Strokes-gained estimate for one hole.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StrokesGainedBreakdown {
    pub off_tee: Option<f64>,
    pub approach: Option<f64>,
    pub short_game: Option<f64>,
    pub putting: Option<f64>,
    pub total: Option<f64>,
    pub confidence: Confidence,
}

impl StrokesGainedBreakdown {
    #[must_use]
    pub fn category(&self, category: SgCategory) -> Option<f64> {
        match category {
            SgCategory::OffTee => self.off_tee,
            SgCategory::Approach => self.approach,
            SgCategory::ShortGame => self.short_game,
            SgCategory::Putting => self.putting,
        }
    }
}

/// Breakdown as cached in the store, tagged with the model that produced it.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoredBreakdown {
    #[serde(default)]
    pub off_tee: Option<f64>,
    #[serde(default)]
    pub approach: Option<f64>,
    #[serde(default)]
    pub short_game: Option<f64>,
    #[serde(default)]
    pub putting: Option<f64>,
    #[serde(default)]
    pub total: Option<f64>,
    #[serde(default)]
    pub confidence: Option<Confidence>,
    #[serde(default)]
    pub model_version: Option<String>,
}

impl StoredBreakdown {
    #[must_use]
    pub fn from_breakdown(breakdown: &StrokesGainedBreakdown) -> Self {
        Self {
            off_tee: breakdown.off_tee,
            approach: breakdown.approach,
            short_game: breakdown.short_game,
            putting: breakdown.putting,
            total: breakdown.total,
            confidence: Some(breakdown.confidence),
            model_version: Some(MODEL_VERSION.to_string()),
        }
    }

    #[must_use]
    pub fn category(&self, category: SgCategory) -> Option<f64> {
        match category {
            SgCategory::OffTee => self.off_tee,
            SgCategory::Approach => self.approach,
            SgCategory::ShortGame => self.short_game,
            SgCategory::Putting => self.putting,
        }
    }

    #[must_use]
    pub fn is_current_model(&self) -> bool {
        self.model_version.as_deref() == Some(MODEL_VERSION)
    }
}

/// Mean strokes gained per category over a window.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SgMeans {
    pub total: Option<f64>,
    pub off_tee: Option<f64>,
    pub approach: Option<f64>,
    pub short_game: Option<f64>,
    pub putting: Option<f64>,
}

impl SgMeans {
    #[must_use]
    pub fn category(&self, category: SgCategory) -> Option<f64> {
        match category {
            SgCategory::OffTee => self.off_tee,
            SgCategory::Approach => self.approach,
            SgCategory::ShortGame => self.short_game,
            SgCategory::Putting => self.putting,
        }
    }
}
