mod config;
pub mod types;
pub mod validation;

pub use config::load_config;
pub use types::{AppConfig, Cli, FileConfig, OutputFormat, StoreSource};
