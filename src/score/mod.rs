pub mod aggregator;
pub mod coaching;
pub mod comparison;
pub mod dashboard;
pub mod scorecard;
pub mod windows;

pub use aggregator::{aggregate, percent};
pub use coaching::generate;
pub use comparison::*;
pub use dashboard::*;
pub use scorecard::*;
pub use windows::*;
