//! Pure route economics: demand, revenue, operating cost and load factor
//! for one route over one day.
//!
//! The calculator never mutates anything. The engine assembles a
//! [`RouteInputs`] from its route and aircraft, passes in today's aggregate
//! event modifiers and applies the returned figures itself.

use serde::{Deserialize, Serialize};

use crate::catalog::{Airport, AircraftType};
use crate::constants::{demand, scheduling};

/// Tunable economic constants. Defaults are a reasonable narrow-body world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyParams {
    pub fuel_price_per_kg: f64,
    pub crew_hourly_wage: f64,
    pub handling_fee_per_passenger: f64,
    /// Fare per km a typical passenger expects to pay.
    pub reference_fare_per_km: f64,
    /// Floor for the expected fare on short hops.
    pub minimum_reference_fare: f64,
}

impl Default for EconomyParams {
    fn default() -> Self {
        Self {
            fuel_price_per_kg: 0.85,
            crew_hourly_wage: 85.0,
            handling_fee_per_passenger: 6.0,
            reference_fare_per_km: 0.12,
            minimum_reference_fare: 79.0,
        }
    }
}

/// Everything the calculator needs to know about a route for one day.
#[derive(Debug, Clone, Copy)]
pub struct RouteInputs<'a> {
    pub active: bool,
    pub distance_km: f64,
    pub ticket_price: f64,
    /// Baseline daily passengers at reference fare and neutral reputation.
    pub base_demand: f64,
    pub reputation: i32,
    pub origin_landing_fee: f64,
    pub destination_landing_fee: f64,
    pub aircraft: Option<&'a AircraftType>,
}

/// One route's figures for one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteDailyResult {
    pub flights: u32,
    pub seat_capacity: u32,
    pub passengers: u32,
    pub revenue: f64,
    pub fuel_cost: f64,
    pub crew_cost: f64,
    pub maintenance_cost: f64,
    pub fees: f64,
    pub operating_cost: f64,
    pub profit: f64,
    pub load_factor: f64,
}

impl RouteDailyResult {
    /// Result for a route that did not fly today.
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        self.flights == 0
    }
}

/// Baseline daily demand between two airports, before price and reputation.
pub fn estimate_base_demand(origin: &Airport, destination: &Airport, distance_km: f64) -> f64 {
    let pull = (origin.demand_index.max(0.0) * destination.demand_index.max(0.0)).sqrt();
    let distance_decay = 1.0 / (1.0 + distance_km.max(0.0) / demand::DEMAND_HALF_DISTANCE_KM);
    demand::BASE_ROUTE_DEMAND * pull * distance_decay
}

/// Fare a typical passenger expects for this distance.
pub fn reference_fare(distance_km: f64, params: &EconomyParams) -> f64 {
    (distance_km * params.reference_fare_per_km).max(params.minimum_reference_fare)
}

/// Hours one leg occupies the aircraft, turnaround included.
pub fn block_hours(distance_km: f64, aircraft: &AircraftType) -> f64 {
    distance_km / aircraft.cruise_speed_kmh.max(1.0) + scheduling::TURNAROUND_HOURS
}

/// Legs the aircraft can fly in a day on this route.
pub fn flights_per_day(distance_km: f64, aircraft: &AircraftType) -> u32 {
    let legs = (scheduling::MAX_DAILY_BLOCK_HOURS / block_hours(distance_km, aircraft)).floor() as u32;
    legs.clamp(1, scheduling::MAX_FLIGHTS_PER_DAY)
}

/// Demand multiplier from reputation: 0.5 at 0, 1.0 at 50, 1.5 at 100.
pub fn reputation_factor(reputation: i32) -> f64 {
    0.5 + reputation as f64 / 100.0
}

/// Demand multiplier from pricing relative to the reference fare.
pub fn price_factor(ticket_price: f64, reference: f64) -> f64 {
    if ticket_price <= 0.0 {
        return demand::MAX_PRICE_FACTOR;
    }
    (reference / ticket_price).clamp(demand::MIN_PRICE_FACTOR, demand::MAX_PRICE_FACTOR)
}

/// Compute one route's day. Inactive routes and routes without an aircraft
/// produce an all-zero result.
pub fn compute_daily_result(
    route: &RouteInputs<'_>,
    demand_modifier: f64,
    cost_modifier: f64,
    params: &EconomyParams,
) -> RouteDailyResult {
    let aircraft = match route.aircraft {
        Some(aircraft) if route.active => aircraft,
        _ => return RouteDailyResult::idle(),
    };

    let hours = block_hours(route.distance_km, aircraft);
    let flights = flights_per_day(route.distance_km, aircraft);
    let seat_capacity = aircraft.seats * flights;

    let base = route.base_demand
        * reputation_factor(route.reputation)
        * price_factor(route.ticket_price, reference_fare(route.distance_km, params));
    // Excess demand is lost, not carried over.
    let passengers = (base * demand_modifier)
        .round()
        .clamp(0.0, seat_capacity as f64) as u32;

    let revenue = route.ticket_price * passengers as f64;

    let legs = flights as f64;
    let fuel_cost = route.distance_km * aircraft.fuel_burn_kg_per_km * params.fuel_price_per_kg * legs
        * cost_modifier;
    let crew_cost = aircraft.crew as f64 * params.crew_hourly_wage * hours * legs * cost_modifier;
    let maintenance_cost = aircraft.maintenance_per_hour * hours * legs * cost_modifier;
    let fees = ((route.origin_landing_fee + route.destination_landing_fee) * legs
        + params.handling_fee_per_passenger * passengers as f64)
        * cost_modifier;
    let operating_cost = fuel_cost + crew_cost + maintenance_cost + fees;

    let load_factor = if seat_capacity > 0 {
        passengers as f64 / seat_capacity as f64
    } else {
        0.0
    };

    RouteDailyResult {
        flights,
        seat_capacity,
        passengers,
        revenue,
        fuel_cost,
        crew_cost,
        maintenance_cost,
        fees,
        operating_cost,
        profit: revenue - operating_cost,
        load_factor,
    }
}
