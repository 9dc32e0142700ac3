use crate::model::{CoachingFocus, CoachingItem, SgCategory, SgMeans};

/// Mental-routine rate (percent) below which the routine item is added.
pub const MENTAL_ROUTINE_THRESHOLD: f64 = 70.0;
/// Critical errors per round above which the error item is added.
pub const CRITICAL_ERRORS_THRESHOLD: f64 = 2.0;

const MAX_ITEMS: usize = 3;
const WEAKEST_CATEGORIES: usize = 2;

/// Ranking order; equal means keep this order.
const CANDIDATES: [SgCategory; 4] = [
    SgCategory::Approach,
    SgCategory::Putting,
    SgCategory::OffTee,
    SgCategory::ShortGame,
];

fn catalog(focus: CoachingFocus) -> CoachingItem {
    let (title, detail) = match focus {
        CoachingFocus::Category(SgCategory::Approach) => (
            "Approach under pressure",
            "Aim for the center of the green when a miss is expensive. Goal: raise SG Approach through conservative decisions.",
        ),
        CoachingFocus::Category(SgCategory::Putting) => (
            "Distance control on the green",
            "Book one weekly session of ladder drills and 1-2m putts to cut down on 3-putts.",
        ),
        CoachingFocus::Category(SgCategory::OffTee) => (
            "Keep the tee shot in play",
            "Adjust the tee target to find more usable fairways and fewer penalties from the tee.",
        ),
        CoachingFocus::Category(SgCategory::ShortGame) => (
            "Competitive scrambling",
            "Practice chips and pitches from varied lies with a two-putt plan to convert more pars.",
        ),
        CoachingFocus::MentalRoutine => (
            "Steady mental routine",
            "Add a checkpoint every 3 holes: breathe, pick a clear target and commit before the shot.",
        ),
        CoachingFocus::CriticalErrors => (
            "Cut the critical errors",
            "Set a personal risk rule: no attacking the flag without a clean lie and a clear angle.",
        ),
    };
    CoachingItem {
        focus,
        title: title.to_string(),
        detail: detail.to_string(),
    }
}

/// Prioritised coaching items for a window, at most three.
///
/// The two weakest strokes-gained categories come first (categories with no
/// mean are skipped, not treated as worst), then the mental-routine item and
/// the critical-error item when their thresholds are crossed.
#[must_use]
pub fn generate(
    sg: &SgMeans,
    mental_routine_rate: Option<f64>,
    critical_errors_per_round: Option<f64>,
) -> Vec<CoachingItem> {
    let mut ranked: Vec<(SgCategory, f64)> = CANDIDATES
        .into_iter()
        .filter_map(|category| {
            sg.category(category)
                .filter(|v| v.is_finite())
                .map(|v| (category, v))
        })
        .collect();
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut items: Vec<CoachingItem> = ranked
        .into_iter()
        .take(WEAKEST_CATEGORIES)
        .map(|(category, _)| catalog(CoachingFocus::Category(category)))
        .collect();

    if mental_routine_rate.is_some_and(|rate| rate < MENTAL_ROUTINE_THRESHOLD) {
        items.push(catalog(CoachingFocus::MentalRoutine));
    }
    if critical_errors_per_round.is_some_and(|rate| rate > CRITICAL_ERRORS_THRESHOLD) {
        items.push(catalog(CoachingFocus::CriticalErrors));
    }

    items.truncate(MAX_ITEMS);
    items
}
