pub mod checker;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod graph;

pub use checker::{CheckOutcome, GraphRoundTripChecker};
pub use config::CheckerConfig;
pub use error::{CheckResult, GraphCheckError};
