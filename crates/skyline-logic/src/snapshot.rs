//! Read-only airline figures handed to the event generator and the
//! objective evaluator.

use serde::{Deserialize, Serialize};

/// Point-in-time view of the airline's headline numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AirlineSnapshot {
    pub day: u32,
    pub cash: f64,
    pub reputation: i32,
    pub passengers_carried: u64,
    pub net_profit: f64,
    pub active_routes: u32,
    pub fleet_size: u32,
}
