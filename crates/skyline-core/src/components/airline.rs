//! The airline aggregate root.

use serde::{Deserialize, Serialize};
use skyline_logic::constants::{finance, reputation};
use skyline_logic::snapshot::AirlineSnapshot;

use super::{Aircraft, AircraftId, Route, RouteId};
use crate::systems::EventLedger;

/// The player's airline. Everything the turn processor mutates lives here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airline {
    pub id: u64,
    pub name: String,
    /// Airport code of the home hub.
    pub home_hub: String,
    /// May dip below zero; the session decides what that means.
    pub cash: f64,
    reputation: i32,
    current_day: u32,
    pub fleet: Vec<Aircraft>,
    pub routes: Vec<Route>,
    pub passengers_carried: u64,
    /// Cumulative operating profit (revenue minus operating cost).
    pub net_profit: f64,
    pub active_events: EventLedger,
    next_aircraft_id: AircraftId,
    next_route_id: RouteId,
}

impl Airline {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        home_hub: impl Into<String>,
        cash: f64,
        starting_reputation: i32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            home_hub: home_hub.into(),
            cash,
            reputation: reputation::clamp(starting_reputation),
            current_day: 0,
            fleet: Vec::new(),
            routes: Vec::new(),
            passengers_carried: 0,
            net_profit: 0.0,
            active_events: EventLedger::new(),
            next_aircraft_id: 1,
            next_route_id: 1,
        }
    }

    pub fn reputation(&self) -> i32 {
        self.reputation
    }

    /// Shift reputation, clamping to bounds. Returns the new score.
    pub fn adjust_reputation(&mut self, delta: i32) -> i32 {
        self.reputation = reputation::clamp(self.reputation.saturating_add(delta));
        self.reputation
    }

    pub fn current_day(&self) -> u32 {
        self.current_day
    }

    /// Move the calendar forward one day. Returns the new day.
    pub fn advance_day(&mut self) -> u32 {
        self.current_day += 1;
        self.current_day
    }

    pub fn is_bankrupt(&self) -> bool {
        self.cash < finance::BANKRUPTCY_THRESHOLD
    }

    pub fn active_route_count(&self) -> u32 {
        self.routes.iter().filter(|r| r.active).count() as u32
    }

    pub fn seat_capacity(&self) -> u32 {
        self.fleet.iter().map(Aircraft::seats).sum()
    }

    /// Sum of the lease rates agreed for the leased part of the fleet.
    pub fn daily_lease_commitment(&self) -> f64 {
        self.fleet.iter().map(Aircraft::daily_lease_rate).sum()
    }

    pub fn snapshot(&self) -> AirlineSnapshot {
        AirlineSnapshot {
            day: self.current_day,
            cash: self.cash,
            reputation: self.reputation,
            passengers_carried: self.passengers_carried,
            net_profit: self.net_profit,
            active_routes: self.active_route_count(),
            fleet_size: self.fleet.len() as u32,
        }
    }

    pub fn aircraft(&self, id: AircraftId) -> Option<&Aircraft> {
        self.fleet.iter().find(|a| a.id == id)
    }

    pub fn aircraft_mut(&mut self, id: AircraftId) -> Option<&mut Aircraft> {
        self.fleet.iter_mut().find(|a| a.id == id)
    }

    pub fn route(&self, id: RouteId) -> Option<&Route> {
        self.routes.iter().find(|r| r.id == id)
    }

    pub fn route_mut(&mut self, id: RouteId) -> Option<&mut Route> {
        self.routes.iter_mut().find(|r| r.id == id)
    }

    pub(crate) fn next_aircraft_id(&mut self) -> AircraftId {
        let id = self.next_aircraft_id;
        self.next_aircraft_id += 1;
        id
    }

    pub(crate) fn next_route_id(&mut self) -> RouteId {
        let id = self.next_route_id;
        self.next_route_id += 1;
        id
    }

    /// Short prefix used for aircraft registrations, e.g. "SKY" for Skyline Air.
    pub fn registration_prefix(&self) -> String {
        let letters: String = self
            .name
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .take(3)
            .collect::<String>()
            .to_ascii_uppercase();
        if letters.is_empty() {
            "AIR".to_string()
        } else {
            letters
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_airline_starts_on_day_zero() {
        let airline = Airline::new(1, "Skyline Air", "JFK", 5_000_000.0, 50);
        assert_eq!(airline.current_day(), 0);
        assert_eq!(airline.reputation(), 50);
        assert!(airline.fleet.is_empty());
        assert!(airline.active_events.is_empty());
    }

    #[test]
    fn test_reputation_is_clamped() {
        let mut airline = Airline::new(1, "Skyline Air", "JFK", 0.0, 150);
        assert_eq!(airline.reputation(), reputation::MAX);
        assert_eq!(airline.adjust_reputation(-500), reputation::MIN);
        assert_eq!(airline.adjust_reputation(i32::MAX), reputation::MAX);
        assert_eq!(airline.adjust_reputation(i32::MIN), reputation::MIN);
    }

    #[test]
    fn test_advance_day_is_monotonic() {
        let mut airline = Airline::new(1, "Skyline Air", "JFK", 0.0, 50);
        assert_eq!(airline.advance_day(), 1);
        assert_eq!(airline.advance_day(), 2);
        assert_eq!(airline.current_day(), 2);
    }

    #[test]
    fn test_bankruptcy_is_derived_from_cash() {
        let mut airline = Airline::new(1, "Skyline Air", "JFK", 0.0, 50);
        assert!(!airline.is_bankrupt());
        airline.cash = -0.01;
        assert!(airline.is_bankrupt());
        airline.cash = 10.0;
        assert!(!airline.is_bankrupt());
    }

    #[test]
    fn test_fleet_totals() {
        use crate::components::Ownership;
        use skyline_logic::catalog::{ReferenceData, StaticCatalog};

        let catalog = StaticCatalog::builtin().unwrap();
        let a320 = catalog.aircraft_type("A320").unwrap();
        let e175 = catalog.aircraft_type("E175").unwrap();
        let mut airline = Airline::new(1, "Skyline Air", "JFK", 0.0, 50);
        assert_eq!(airline.seat_capacity(), 0);
        assert_eq!(airline.daily_lease_commitment(), 0.0);

        airline.fleet.push(Aircraft::new(
            1,
            "SKY001",
            a320.clone(),
            Ownership::Leased { daily_rate: a320.lease_per_day },
            0,
        ));
        airline
            .fleet
            .push(Aircraft::new(2, "SKY002", e175.clone(), Ownership::Owned, 0));

        assert_eq!(airline.seat_capacity(), a320.seats + e175.seats);
        assert_eq!(airline.daily_lease_commitment(), a320.lease_per_day);
    }

    #[test]
    fn test_registration_prefix() {
        assert_eq!(Airline::new(1, "Skyline Air", "JFK", 0.0, 50).registration_prefix(), "SKY");
        assert_eq!(Airline::new(1, "42", "JFK", 0.0, 50).registration_prefix(), "AIR");
    }
}
