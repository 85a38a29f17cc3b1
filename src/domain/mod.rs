pub mod config;
pub mod constants;
pub mod context;

pub use config::SimConfig;
pub use context::{Mode, StepContext};
