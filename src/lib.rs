pub mod config;
pub mod core;
pub mod domain;
pub mod scenarios;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::SmokeConfig;
pub use core::{engine::SmokeEngine, runner::TestRunner};
pub use utils::error::{Result, SmokeError};
