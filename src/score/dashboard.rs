use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::InsightsError;
use crate::model::{CoachingItem, RoundHole, StoredBreakdown, WindowAggregate};
use crate::score::aggregator::aggregate;
use crate::score::coaching::generate;
use crate::score::comparison::{MetricDelta, compare_windows, errors_per_round};
use crate::score::windows::{
    RoundWindows, WindowSize, WindowSlice, partition_holes, select_window_rounds,
};
use crate::storage::Storage;
use crate::strokes_gained::compute_breakdowns;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WindowReport {
    pub rounds: usize,
    pub aggregate: WindowAggregate,
    pub critical_errors_per_round: Option<f64>,
}

impl WindowReport {
    fn from_slice(slice: &WindowSlice) -> Self {
        let aggregate = aggregate(&slice.holes);
        let critical_errors_per_round =
            errors_per_round(aggregate.critical_errors.total, slice.round_count);
        Self {
            rounds: slice.round_count,
            aggregate,
            critical_errors_per_round,
        }
    }
}

/// Everything the dashboard shows for one window pair.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub window_size: WindowSize,
    pub current: WindowReport,
    pub previous: WindowReport,
    pub deltas: Vec<MetricDelta>,
    pub coaching: Vec<CoachingItem>,
}

#[must_use]
pub fn build_dashboard(windows: &RoundWindows) -> Dashboard {
    let (current, previous) = rayon::join(
        || WindowReport::from_slice(&windows.current),
        || WindowReport::from_slice(&windows.previous),
    );
    let deltas = compare_windows(
        &current.aggregate,
        &previous.aggregate,
        current.critical_errors_per_round,
        previous.critical_errors_per_round,
    );
    let coaching = generate(
        &current.aggregate.strokes_gained,
        current.aggregate.mental_routine_rate,
        current.critical_errors_per_round,
    );
    Dashboard {
        window_size: windows.size,
        current,
        previous,
        deltas,
        coaching,
    }
}

/// Fetch the `2 × size` most recent rounds of an owner and build the
/// dashboard from them.
///
/// # Errors
/// Returns an error if the store cannot be read.
pub fn load_dashboard(
    storage: &dyn Storage,
    owner_id: &str,
    size: WindowSize,
) -> Result<Dashboard, InsightsError> {
    let rounds = storage.recent_rounds(owner_id, size.rounds() * 2)?;
    let window_rounds = select_window_rounds(&rounds, size);
    let holes = storage.holes_for_rounds(&window_rounds.all_ids())?;
    debug!(
        owner_id,
        rounds = rounds.len(),
        holes = holes.len(),
        "loaded dashboard inputs"
    );
    let windows = partition_holes(holes, &window_rounds, size);
    if windows.current.holes.is_empty() {
        warn!(owner_id, "no holes in the current window");
    }
    Ok(build_dashboard(&windows))
}

/// Recompute and cache the breakdown of every hole.
///
/// Returns the number of holes written.
///
/// # Errors
/// Returns an error on the first failed write.
pub fn refresh_breakdowns(
    storage: &dyn Storage,
    holes: &[RoundHole],
) -> Result<usize, InsightsError> {
    let records: Vec<_> = holes.iter().map(|h| h.record.clone()).collect();
    let breakdowns = compute_breakdowns(&records);
    for (hole, breakdown) in holes.iter().zip(&breakdowns) {
        storage.store_breakdown(&hole.id, &StoredBreakdown::from_breakdown(breakdown))?;
    }
    info!(holes = holes.len(), "refreshed stored breakdowns");
    Ok(holes.len())
}
