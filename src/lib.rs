pub mod args;
pub mod critical_errors;
pub mod error;
pub mod logging;
pub mod model;
pub mod score;
pub mod storage;
pub mod strokes_gained;
pub mod view;

pub use critical_errors::{classify, classify_scored};
pub use error::InsightsError;
pub use score::{aggregate, generate};
pub use strokes_gained::{compute_breakdown, compute_breakdowns};
