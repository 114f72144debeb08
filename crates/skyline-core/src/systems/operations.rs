//! Daily operations: the turn processor.
//!
//! One call advances the airline by exactly one day. The order of steps is
//! fixed so a seeded generator always replays the same run.

use serde::{Deserialize, Serialize};
use skyline_logic::economics::{compute_daily_result, EconomyParams, RouteDailyResult};
use skyline_logic::events::GameEvent;
use skyline_logic::generator::EventGenerator;

use crate::components::{Airline, RouteId};

/// One route's contribution to the day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteOutcome {
    pub route_id: RouteId,
    pub result: RouteDailyResult,
}

/// What happened on one simulated day. Display-only for collaborators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyOperationsSummary {
    pub day: u32,
    pub revenue: f64,
    pub operating_cost: f64,
    /// Cash after minus cash before, event impacts included.
    pub net_cash_change: f64,
    pub passengers: u64,
    pub new_events: Vec<GameEvent>,
    pub expired_events: Vec<GameEvent>,
    pub route_results: Vec<RouteOutcome>,
    pub demand_modifier: f64,
    pub cost_modifier: f64,
    pub closing_cash: f64,
    pub closing_reputation: i32,
}

impl DailyOperationsSummary {
    pub fn operating_profit(&self) -> f64 {
        self.revenue - self.operating_cost
    }
}

/// Append a new event to the ledger and apply its one-time effects. This is
/// the only place one-time impacts touch the airline.
pub fn apply_new_event(airline: &mut Airline, event: GameEvent) {
    airline.cash += event.financial_impact;
    airline.adjust_reputation(event.reputation_delta);
    airline.active_events.append(event);
}

/// Advance the airline by one day.
pub fn process_day(
    airline: &mut Airline,
    generator: &mut EventGenerator,
    params: &EconomyParams,
) -> DailyOperationsSummary {
    let opening_cash = airline.cash;

    // 1. Calendar
    let day = airline.advance_day();

    // 2. Today's event, one-time effects applied on arrival
    let mut new_events = Vec::new();
    if let Some(event) = generator.try_generate_event(day, &airline.snapshot()) {
        log::info!(
            "Day {}: {} ({} {}) demand x{:.2} cost x{:.2} cash {:+.0} reputation {:+}",
            day,
            event.title,
            event.severity.label(),
            event.category.label(),
            event.demand_multiplier,
            event.cost_multiplier,
            event.financial_impact,
            event.reputation_delta,
        );
        new_events.push(event.clone());
        apply_new_event(airline, event);
    }

    // 3. Expire lapsed ledger entries
    let expired_events = airline.active_events.expire_lapsed(day);
    for event in &expired_events {
        log::debug!("Day {}: {} has ended", day, event.title);
    }

    // 4. Aggregate modifiers
    let demand_modifier = airline.active_events.demand_modifier();
    let cost_modifier = airline.active_events.cost_modifier();

    // 5. Route economics
    let reputation = airline.reputation();
    let mut revenue = 0.0;
    let mut operating_cost = 0.0;
    let mut passengers: u64 = 0;
    let mut route_results = Vec::new();

    for route in airline.routes.iter().filter(|r| r.is_operating()) {
        let aircraft = route
            .assigned_aircraft
            .and_then(|id| airline.aircraft(id))
            .map(|a| &a.aircraft_type);
        let result = compute_daily_result(
            &route.inputs(aircraft, reputation),
            demand_modifier,
            cost_modifier,
            params,
        );
        revenue += result.revenue;
        operating_cost += result.operating_cost;
        passengers += result.passengers as u64;
        route_results.push(RouteOutcome {
            route_id: route.id,
            result,
        });
    }

    // 6. Apply to the airline
    let operating_profit = revenue - operating_cost;
    airline.cash += operating_profit;
    airline.net_profit += operating_profit;
    airline.passengers_carried += passengers;

    // 7. Summary
    let summary = DailyOperationsSummary {
        day,
        revenue,
        operating_cost,
        net_cash_change: airline.cash - opening_cash,
        passengers,
        new_events,
        expired_events,
        route_results,
        demand_modifier,
        cost_modifier,
        closing_cash: airline.cash,
        closing_reputation: airline.reputation(),
    };

    log::debug!(
        "Day {}: {} pax, revenue {:.0}, cost {:.0}, cash {:.0}",
        day,
        summary.passengers,
        summary.revenue,
        summary.operating_cost,
        summary.closing_cash,
    );

    summary
}
