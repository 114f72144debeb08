//! Engine errors.
//!
//! Only precondition violations and rejected player operations are errors.
//! Bankruptcy, unmet objectives and empty flights are ordinary state.

use thiserror::Error;

use crate::components::{AircraftId, RouteId};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("invalid session state: {0}")]
    InvalidState(&'static str),

    #[error("unknown airport: {0}")]
    UnknownAirport(String),

    #[error("unknown aircraft type: {0}")]
    UnknownAircraftType(String),

    #[error("unknown route: {0}")]
    UnknownRoute(RouteId),

    #[error("unknown aircraft: {0}")]
    UnknownAircraft(AircraftId),

    #[error("insufficient funds: need {needed:.2}, have {available:.2}")]
    InsufficientFunds { needed: f64, available: f64 },

    #[error("invalid route: {0}")]
    InvalidRoute(String),

    #[error("aircraft {0} is already assigned to another route")]
    AircraftUnavailable(AircraftId),

    #[error("route of {distance_km:.0} km exceeds aircraft range of {range_km:.0} km")]
    OutOfRange { distance_km: f64, range_km: f64 },

    #[error("invalid ticket price: {0}")]
    InvalidPrice(f64),
}
