use serde::{Deserialize, Serialize};

use crate::model::breakdown::SgCategory;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum CoachingFocus {
    Category(SgCategory),
    MentalRoutine,
    CriticalErrors,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CoachingItem {
    pub focus: CoachingFocus,
    pub title: String,
    pub detail: String,
}
