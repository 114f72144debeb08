//! Routes flown by the airline.

use serde::{Deserialize, Serialize};
use skyline_logic::catalog::AircraftType;
use skyline_logic::economics::RouteInputs;

use super::AircraftId;

pub type RouteId = u32;

/// A scheduled city pair. Closed routes are deactivated, never removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: RouteId,
    pub origin: String,
    pub destination: String,
    pub distance_km: f64,
    pub ticket_price: f64,
    /// Baseline daily passengers for this city pair.
    pub base_demand: f64,
    pub origin_landing_fee: f64,
    pub destination_landing_fee: f64,
    pub assigned_aircraft: Option<AircraftId>,
    pub active: bool,
    pub opened_on: u32,
}

impl Route {
    /// True when the route will fly today.
    pub fn is_operating(&self) -> bool {
        self.active && self.assigned_aircraft.is_some()
    }

    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.origin == a && self.destination == b) || (self.origin == b && self.destination == a)
    }

    pub fn label(&self) -> String {
        format!("{}-{}", self.origin, self.destination)
    }

    /// Calculator inputs for today.
    pub fn inputs<'a>(&self, aircraft: Option<&'a AircraftType>, reputation: i32) -> RouteInputs<'a> {
        RouteInputs {
            active: self.active,
            distance_km: self.distance_km,
            ticket_price: self.ticket_price,
            base_demand: self.base_demand,
            reputation,
            origin_landing_fee: self.origin_landing_fee,
            destination_landing_fee: self.destination_landing_fee,
            aircraft,
        }
    }
}
