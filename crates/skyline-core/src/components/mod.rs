//! Airline state: the aggregate root and the entities it owns.
//!
//! Components are plain data with small invariant-keeping helpers.
//! Day-to-day behavior lives in systems.

mod airline;
mod fleet;
mod route;

pub use airline::*;
pub use fleet::*;
pub use route::*;
