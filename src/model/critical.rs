use serde::{Deserialize, Serialize};

/// The five costly per-hole outcomes tracked as avoidable mistakes.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum CriticalErrorKind {
    BogeyOnPar5,
    DoubleOrWorse,
    ThreePutt,
    BogeyAfterShortApproach,
    PenaltyIncurred,
}

impl CriticalErrorKind {
    pub const ALL: [CriticalErrorKind; 5] = [
        CriticalErrorKind::BogeyOnPar5,
        CriticalErrorKind::DoubleOrWorse,
        CriticalErrorKind::ThreePutt,
        CriticalErrorKind::BogeyAfterShortApproach,
        CriticalErrorKind::PenaltyIncurred,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::BogeyOnPar5 => "Bogey on par 5",
            Self::DoubleOrWorse => "Double bogey or worse",
            Self::ThreePutt => "3-putt",
            Self::BogeyAfterShortApproach => "Bogey after short approach",
            Self::PenaltyIncurred => "Penalty",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CriticalErrorFlags {
    pub bogey_on_par5: bool,
    pub double_or_worse: bool,
    pub three_putt: bool,
    pub bogey_after_short_approach: bool,
    pub penalty_incurred: bool,
    pub count: u8,
}

impl CriticalErrorFlags {
    #[must_use]
    pub fn is_set(&self, kind: CriticalErrorKind) -> bool {
        match kind {
            CriticalErrorKind::BogeyOnPar5 => self.bogey_on_par5,
            CriticalErrorKind::DoubleOrWorse => self.double_or_worse,
            CriticalErrorKind::ThreePutt => self.three_putt,
            CriticalErrorKind::BogeyAfterShortApproach => self.bogey_after_short_approach,
            CriticalErrorKind::PenaltyIncurred => self.penalty_incurred,
        }
    }

    /// Kinds that are set, in canonical order.
    #[must_use]
    pub fn kinds(&self) -> Vec<CriticalErrorKind> {
        CriticalErrorKind::ALL
            .into_iter()
            .filter(|kind| self.is_set(*kind))
            .collect()
    }
}

/// Critical-error totals over a window.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CriticalErrorTotals {
    pub total: usize,
    pub bogey_on_par5: usize,
    pub double_or_worse: usize,
    pub three_putt: usize,
    pub bogey_after_short_approach: usize,
    pub penalty_incurred: usize,
}

impl CriticalErrorTotals {
    pub fn add(&mut self, flags: &CriticalErrorFlags) {
        self.total += usize::from(flags.count);
        self.bogey_on_par5 += usize::from(flags.bogey_on_par5);
        self.double_or_worse += usize::from(flags.double_or_worse);
        self.three_putt += usize::from(flags.three_putt);
        self.bogey_after_short_approach += usize::from(flags.bogey_after_short_approach);
        self.penalty_incurred += usize::from(flags.penalty_incurred);
    }

    #[must_use]
    pub fn by_kind(&self, kind: CriticalErrorKind) -> usize {
        match kind {
            CriticalErrorKind::BogeyOnPar5 => self.bogey_on_par5,
            CriticalErrorKind::DoubleOrWorse => self.double_or_worse,
            CriticalErrorKind::ThreePutt => self.three_putt,
            CriticalErrorKind::BogeyAfterShortApproach => self.bogey_after_short_approach,
            CriticalErrorKind::PenaltyIncurred => self.penalty_incurred,
        }
    }
}
