pub mod engine;
pub mod runner;
pub mod specificity;
pub mod summary;

pub use crate::domain::model::{HttpMethod, RunSummary, TestCase, TestOutcome};
pub use crate::domain::ports::{RunnerSettings, Scenario};
pub use crate::utils::error::Result;
