//! Network planning: fleet acquisition, route opening and aircraft
//! assignment.
//!
//! These run between turns at the player's request. They validate against
//! the reference catalog and the airline's current state, and reject with an
//! [`EngineError`] instead of partially applying.

use skyline_logic::catalog::{great_circle_km, ReferenceData};
use skyline_logic::economics::estimate_base_demand;

use crate::components::{Aircraft, AircraftId, Airline, Ownership, Route, RouteId};
use crate::error::EngineError;

fn charge(airline: &mut Airline, amount: f64) -> Result<(), EngineError> {
    if amount > airline.cash {
        return Err(EngineError::InsufficientFunds {
            needed: amount,
            available: airline.cash,
        });
    }
    airline.cash -= amount;
    Ok(())
}

fn add_aircraft(
    airline: &mut Airline,
    catalog: &dyn ReferenceData,
    type_code: &str,
    ownership: impl FnOnce(f64, f64) -> (Ownership, f64),
) -> Result<AircraftId, EngineError> {
    let aircraft_type = catalog
        .aircraft_type(type_code)
        .ok_or_else(|| EngineError::UnknownAircraftType(type_code.to_string()))?;

    let (ownership, price) = ownership(aircraft_type.lease_per_day, aircraft_type.purchase_price);
    charge(airline, price)?;

    let id = airline.next_aircraft_id();
    let registration = format!("{}-{:03}", airline.registration_prefix(), id);
    let day = airline.current_day();
    airline
        .fleet
        .push(Aircraft::new(id, registration, aircraft_type, ownership, day));
    Ok(id)
}

/// Lease an aircraft, paying `deposit_days` of lease up front.
pub fn lease_aircraft(
    airline: &mut Airline,
    catalog: &dyn ReferenceData,
    type_code: &str,
    deposit_days: u32,
) -> Result<AircraftId, EngineError> {
    add_aircraft(airline, catalog, type_code, |daily_rate, _| {
        (Ownership::Leased { daily_rate }, daily_rate * deposit_days as f64)
    })
}

/// Buy an aircraft outright.
pub fn purchase_aircraft(
    airline: &mut Airline,
    catalog: &dyn ReferenceData,
    type_code: &str,
) -> Result<AircraftId, EngineError> {
    add_aircraft(airline, catalog, type_code, |_, price| (Ownership::Owned, price))
}

fn validate_price(price: f64) -> Result<(), EngineError> {
    if price.is_finite() && price > 0.0 {
        Ok(())
    } else {
        Err(EngineError::InvalidPrice(price))
    }
}

/// Open a new route between two catalog airports.
pub fn open_route(
    airline: &mut Airline,
    catalog: &dyn ReferenceData,
    origin: &str,
    destination: &str,
    ticket_price: f64,
) -> Result<RouteId, EngineError> {
    validate_price(ticket_price)?;

    let from = catalog
        .airport(origin)
        .ok_or_else(|| EngineError::UnknownAirport(origin.to_string()))?;
    let to = catalog
        .airport(destination)
        .ok_or_else(|| EngineError::UnknownAirport(destination.to_string()))?;

    if from.code == to.code {
        return Err(EngineError::InvalidRoute(format!(
            "origin and destination are both {}",
            from.code
        )));
    }
    if airline
        .routes
        .iter()
        .any(|r| r.active && r.connects(&from.code, &to.code))
    {
        return Err(EngineError::InvalidRoute(format!(
            "{}-{} is already served",
            from.code, to.code
        )));
    }

    let distance_km = great_circle_km(&from, &to);
    let id = airline.next_route_id();
    let opened_on = airline.current_day();
    airline.routes.push(Route {
        id,
        origin: from.code.clone(),
        destination: to.code.clone(),
        distance_km,
        ticket_price,
        base_demand: estimate_base_demand(&from, &to, distance_km),
        origin_landing_fee: from.landing_fee,
        destination_landing_fee: to.landing_fee,
        assigned_aircraft: None,
        active: true,
        opened_on,
    });
    Ok(id)
}

/// Put an idle aircraft on a route, freeing whatever flew it before.
pub fn assign_aircraft(
    airline: &mut Airline,
    route_id: RouteId,
    aircraft_id: AircraftId,
) -> Result<(), EngineError> {
    let route = airline
        .route(route_id)
        .ok_or(EngineError::UnknownRoute(route_id))?;
    if !route.active {
        return Err(EngineError::InvalidRoute(format!("{} is closed", route.label())));
    }
    let distance_km = route.distance_km;
    let previous = route.assigned_aircraft;

    let aircraft = airline
        .aircraft(aircraft_id)
        .ok_or(EngineError::UnknownAircraft(aircraft_id))?;
    match aircraft.assigned_route {
        Some(current) if current == route_id => return Ok(()),
        Some(_) => return Err(EngineError::AircraftUnavailable(aircraft_id)),
        None => {}
    }
    if !aircraft.can_reach(distance_km) {
        return Err(EngineError::OutOfRange {
            distance_km,
            range_km: aircraft.aircraft_type.range_km,
        });
    }

    if let Some(old) = previous.and_then(|id| airline.aircraft_mut(id)) {
        old.assigned_route = None;
    }
    if let Some(aircraft) = airline.aircraft_mut(aircraft_id) {
        aircraft.assigned_route = Some(route_id);
    }
    if let Some(route) = airline.route_mut(route_id) {
        route.assigned_aircraft = Some(aircraft_id);
    }
    Ok(())
}

/// Take the aircraft off a route. Returns the freed aircraft, if any.
pub fn unassign_aircraft(
    airline: &mut Airline,
    route_id: RouteId,
) -> Result<Option<AircraftId>, EngineError> {
    let route = airline
        .route_mut(route_id)
        .ok_or(EngineError::UnknownRoute(route_id))?;
    let freed = route.assigned_aircraft.take();
    if let Some(aircraft) = freed.and_then(|id| airline.aircraft_mut(id)) {
        aircraft.assigned_route = None;
    }
    Ok(freed)
}

/// Deactivate a route and free its aircraft. Closing twice is a no-op.
pub fn close_route(airline: &mut Airline, route_id: RouteId) -> Result<(), EngineError> {
    unassign_aircraft(airline, route_id)?;
    if let Some(route) = airline.route_mut(route_id) {
        route.active = false;
    }
    Ok(())
}

pub fn set_ticket_price(
    airline: &mut Airline,
    route_id: RouteId,
    ticket_price: f64,
) -> Result<(), EngineError> {
    validate_price(ticket_price)?;
    let route = airline
        .route_mut(route_id)
        .ok_or(EngineError::UnknownRoute(route_id))?;
    route.ticket_price = ticket_price;
    Ok(())
}
