pub mod proxy;
pub mod tables;

pub use proxy::*;
pub use tables::{ExpectedStrokesTable, V1_BUCKET_PROXY};
