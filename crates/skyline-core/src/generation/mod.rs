//! Generation - founding airlines and the built-in scenario set

mod airline;
pub mod scenarios;

pub use airline::*;
pub use scenarios::Scenario;
