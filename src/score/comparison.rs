use serde::{Deserialize, Serialize};

use crate::model::WindowAggregate;

/// Round to `decimals` places, half away from zero.
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Critical errors per round for a window; the aggregate itself does not
/// know where rounds start and end.
#[must_use]
pub fn errors_per_round(total_errors: usize, rounds: usize) -> Option<f64> {
    (rounds > 0).then(|| total_errors as f64 / rounds as f64)
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum DashboardMetric {
    CriticalErrorsPerRound,
    MentalRoutineRate,
    CenterTargetRate,
    PenaltiesPerHole,
    StrokesGainedTotal,
    GirRate,
    ThreePuttRate,
    FairwayRate,
    ScramblingRate,
    CompletenessRate,
}

impl DashboardMetric {
    pub const ALL: [DashboardMetric; 10] = [
        DashboardMetric::CriticalErrorsPerRound,
        DashboardMetric::MentalRoutineRate,
        DashboardMetric::CenterTargetRate,
        DashboardMetric::PenaltiesPerHole,
        DashboardMetric::StrokesGainedTotal,
        DashboardMetric::GirRate,
        DashboardMetric::ThreePuttRate,
        DashboardMetric::FairwayRate,
        DashboardMetric::ScramblingRate,
        DashboardMetric::CompletenessRate,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::CriticalErrorsPerRound => "Critical errors per round",
            Self::MentalRoutineRate => "Mental routine",
            Self::CenterTargetRate => "Center-green targets",
            Self::PenaltiesPerHole => "Penalties per hole",
            Self::StrokesGainedTotal => "Strokes gained per hole",
            Self::GirRate => "GIR",
            Self::ThreePuttRate => "3-putts",
            Self::FairwayRate => "Fairways",
            Self::ScramblingRate => "Scrambling",
            Self::CompletenessRate => "Data completeness",
        }
    }

    #[must_use]
    pub fn decimals(self) -> i32 {
        match self {
            Self::CriticalErrorsPerRound => 1,
            Self::PenaltiesPerHole | Self::StrokesGainedTotal => 2,
            _ => 0,
        }
    }

    /// Rates are whole percentages and their deltas are percentage points.
    #[must_use]
    pub fn is_rate(self) -> bool {
        self.decimals() == 0
    }

    /// Whether a falling value is an improvement.
    #[must_use]
    pub fn lower_is_better(self) -> bool {
        matches!(
            self,
            Self::CriticalErrorsPerRound | Self::PenaltiesPerHole | Self::ThreePuttRate
        )
    }

    fn value(self, aggregate: &WindowAggregate, errors_per_round: Option<f64>) -> Option<f64> {
        match self {
            Self::CriticalErrorsPerRound => errors_per_round,
            Self::MentalRoutineRate => aggregate.mental_routine_rate,
            Self::CenterTargetRate => aggregate.center_target_rate,
            Self::PenaltiesPerHole => aggregate.penalties_per_hole,
            Self::StrokesGainedTotal => aggregate.strokes_gained.total,
            Self::GirRate => aggregate.gir_rate,
            Self::ThreePuttRate => aggregate.three_putt_rate,
            Self::FairwayRate => aggregate.fairway_rate,
            Self::ScramblingRate => aggregate.scrambling_rate,
            Self::CompletenessRate => aggregate.completeness_rate,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetricDelta {
    pub metric: DashboardMetric,
    pub current: Option<f64>,
    pub previous: Option<f64>,
    pub delta: Option<f64>,
}

impl MetricDelta {
    #[must_use]
    pub fn new(metric: DashboardMetric, current: Option<f64>, previous: Option<f64>) -> Self {
        let delta = match (current, previous) {
            (Some(c), Some(p)) => Some(round_to(c - p, metric.decimals())),
            _ => None,
        };
        Self {
            metric,
            current,
            previous,
            delta,
        }
    }

    /// Human-readable change against the previous window.
    #[must_use]
    pub fn describe(&self) -> Option<String> {
        let delta = self.delta?;
        if delta == 0.0 {
            return Some("no change vs previous period".to_string());
        }
        let sign = if delta > 0.0 { "+" } else { "" };
        let unit = if self.metric.is_rate() { "pp" } else { "" };
        let decimals = usize::try_from(self.metric.decimals()).unwrap_or(0);
        Some(format!("{sign}{delta:.decimals$}{unit} vs previous period"))
    }

    /// `Some(true)` when the metric moved in the good direction.
    #[must_use]
    pub fn improved(&self) -> Option<bool> {
        let delta = self.delta?;
        if delta == 0.0 {
            return None;
        }
        Some((delta < 0.0) == self.metric.lower_is_better())
    }
}

/// Period-over-period deltas for every dashboard metric.
#[must_use]
pub fn compare_windows(
    current: &WindowAggregate,
    previous: &WindowAggregate,
    current_errors_per_round: Option<f64>,
    previous_errors_per_round: Option<f64>,
) -> Vec<MetricDelta> {
    DashboardMetric::ALL
        .into_iter()
        .map(|metric| {
            MetricDelta::new(
                metric,
                metric.value(current, current_errors_per_round),
                metric.value(previous, previous_errors_per_round),
            )
        })
        .collect()
}
