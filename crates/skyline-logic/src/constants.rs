//! Game constants: probability tables, reputation bounds, scheduling limits.
//!
//! Plain values with no engine dependency. The generator, the economics
//! calculator and the engine crate all read from here.

pub mod reputation {
    pub const MIN: i32 = 0;
    pub const MAX: i32 = 100;
    pub const STARTING: i32 = 50;

    /// Clamp a reputation score into its legal range.
    pub fn clamp(value: i32) -> i32 {
        value.clamp(MIN, MAX)
    }
}

pub mod probabilities {
    /// Chance that any event originates on a given day.
    pub const BASE_EVENT_PROBABILITY: f64 = 0.12;

    /// Fraction of current cash lost per severity step for cash-scaled events.
    pub const CASH_IMPACT_RATE: f64 = 0.02;
}

pub mod finance {
    /// Cash below this at the end of a day means bankruptcy.
    pub const BANKRUPTCY_THRESHOLD: f64 = 0.0;
}

pub mod scheduling {
    /// Hours per day an aircraft can be scheduled.
    pub const MAX_DAILY_BLOCK_HOURS: f64 = 18.0;
    /// Ground time added to every flight leg.
    pub const TURNAROUND_HOURS: f64 = 0.5;
    pub const MAX_FLIGHTS_PER_DAY: u32 = 8;
}

pub mod demand {
    /// Daily passengers between two airports with a demand index of 1.0.
    pub const BASE_ROUTE_DEMAND: f64 = 900.0;
    /// Distance at which baseline demand halves.
    pub const DEMAND_HALF_DISTANCE_KM: f64 = 20_000.0;
    pub const MIN_PRICE_FACTOR: f64 = 0.25;
    pub const MAX_PRICE_FACTOR: f64 = 2.0;
}
