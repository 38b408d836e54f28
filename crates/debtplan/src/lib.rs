//! Command-line front end for the debt payoff simulator
//!
//! Loads YAML scenarios, runs them through `debtplan_core`, and renders the
//! results as plain-text tables or JSON.

pub mod logging;
pub mod report;
pub mod scenario;
pub mod util;

pub use logging::{LogTarget, init_logging};
pub use scenario::{ScenarioData, ScenarioError};
