//! Aircraft owned or leased by the airline.

use serde::{Deserialize, Serialize};
use skyline_logic::catalog::AircraftType;

use super::RouteId;

pub type AircraftId = u32;

/// How the airline holds an aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Ownership {
    Leased { daily_rate: f64 },
    Owned,
}

/// One airframe in the fleet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aircraft {
    pub id: AircraftId,
    pub registration: String,
    /// Resolved catalog record, kept so a saved game never needs the catalog.
    pub aircraft_type: AircraftType,
    pub ownership: Ownership,
    pub assigned_route: Option<RouteId>,
    /// Day the airframe joined the fleet.
    pub acquired_on: u32,
}

impl Aircraft {
    pub fn new(
        id: AircraftId,
        registration: impl Into<String>,
        aircraft_type: AircraftType,
        ownership: Ownership,
        acquired_on: u32,
    ) -> Self {
        Self {
            id,
            registration: registration.into(),
            aircraft_type,
            ownership,
            assigned_route: None,
            acquired_on,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.assigned_route.is_none()
    }

    pub fn can_reach(&self, distance_km: f64) -> bool {
        self.aircraft_type.range_km >= distance_km
    }

    pub fn seats(&self) -> u32 {
        self.aircraft_type.seats
    }

    /// Daily lease rate, zero for owned airframes.
    pub fn daily_lease_rate(&self) -> f64 {
        match self.ownership {
            Ownership::Leased { daily_rate } => daily_rate,
            Ownership::Owned => 0.0,
        }
    }
}
