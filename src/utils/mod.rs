pub mod error;
pub mod logger;
pub mod monitor;
pub mod preview;
pub mod validation;
