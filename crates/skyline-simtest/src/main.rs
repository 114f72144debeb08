//! Skyline Headless Simulation Harness
//!
//! Runs seeded sessions end to end and validates engine invariants.
//! Runs entirely in-process, with no UI and no save files on disk.
//!
//! Usage:
//!   cargo run -p skyline-simtest
//!   cargo run -p skyline-simtest -- --days 730 --seed 7 --verbose

use clap::Parser;
use serde::Serialize;
use skyline_core::prelude::*;
use skyline_logic::catalog::{great_circle_km, Airport, ReferenceData, StaticCatalog};
use skyline_logic::economics::{
    compute_daily_result, estimate_base_demand, reference_fare, EconomyParams, RouteInputs,
};
use skyline_logic::events::{EventCategory, Severity};
use skyline_logic::generator::EventGenerator;
use skyline_logic::snapshot::AirlineSnapshot;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

#[derive(Parser)]
#[command(name = "skyline-simtest")]
#[command(about = "Headless simulation harness for Skyline")]
struct Options {
    /// Days to simulate per session
    #[arg(long, default_value_t = 365)]
    days: u32,

    /// Seed for every generated session
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Print every check and enable engine logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let options = Options::parse();
    if options.verbose {
        pretty_env_logger::init();
    }
    println!("=== Skyline Simulation Harness ===");
    println!("seed {}, {} days\n", options.seed, options.days);

    let catalog = match StaticCatalog::builtin() {
        Ok(catalog) => catalog,
        Err(e) => {
            println!("  ✗ catalog_parse: {}", e);
            std::process::exit(1);
        }
    };

    let mut results = Vec::new();

    // 1. Reference data
    results.extend(validate_catalog(&catalog));

    // 2. Event generator distributions
    results.extend(validate_event_generator(&options));

    // 3. Route economics sweep
    results.extend(validate_route_economics(&catalog));

    // 4. Free-play session
    results.extend(validate_free_play(&catalog, &options));

    // 5. Built-in scenarios on autopilot
    results.extend(validate_scenarios(&catalog, &options));

    // 6. Save/load replay
    results.extend(validate_save_replay(&catalog, &options));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || options.verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

fn check(name: &str, passed: bool, detail: impl Into<String>) -> TestResult {
    TestResult {
        name: name.into(),
        passed,
        detail: detail.into(),
    }
}

/// Open routes from the hub to its nearest neighbours, one per idle
/// aircraft, priced at the reference fare.
fn autopilot_network(session: &mut GameSession, catalog: &StaticCatalog) -> usize {
    let Some(airline) = session.player_airline() else {
        return 0;
    };
    let Some(hub) = catalog.airport(&airline.home_hub) else {
        return 0;
    };
    let params = session.config().economy;
    let idle: Vec<(AircraftId, f64)> = airline
        .fleet
        .iter()
        .filter(|a| a.is_idle())
        .map(|a| (a.id, a.aircraft_type.range_km))
        .collect();

    let mut neighbours: Vec<(Airport, f64)> = catalog
        .airports()
        .filter(|a| a.code != hub.code)
        .map(|a| (a.clone(), great_circle_km(&hub, a)))
        .collect();
    neighbours.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut opened = 0;
    let mut targets = neighbours.into_iter();
    for (aircraft, range_km) in idle {
        let Some((destination, distance)) = targets.by_ref().find(|(_, d)| *d <= range_km) else {
            break;
        };
        let fare = reference_fare(distance, &params);
        if let Ok(route) = session.open_route(&hub.code, &destination.code, fare, catalog) {
            if session.assign_aircraft(route, aircraft).is_ok() {
                opened += 1;
            }
        }
    }
    opened
}

// ── 1. Reference data ───────────────────────────────────────────────────

fn validate_catalog(catalog: &StaticCatalog) -> Vec<TestResult> {
    println!("--- Reference Data ---");
    let mut results = Vec::new();

    let airports: Vec<&Airport> = catalog.airports().collect();
    results.push(check(
        "catalog_airports",
        airports.len() >= 10,
        format!("{} airports loaded", airports.len()),
    ));

    let bad_coords: Vec<_> = airports
        .iter()
        .filter(|a| a.latitude.abs() > 90.0 || a.longitude.abs() > 180.0)
        .map(|a| a.code.as_str())
        .collect();
    results.push(check(
        "catalog_coordinates",
        bad_coords.is_empty(),
        if bad_coords.is_empty() {
            "all coordinates in range".to_string()
        } else {
            format!("bad coordinates: {}", bad_coords.join(", "))
        },
    ));

    let bad_types: Vec<_> = catalog
        .aircraft_types()
        .filter(|t| {
            t.seats == 0 || t.range_km <= 0.0 || t.cruise_speed_kmh <= 0.0 || t.lease_per_day <= 0.0
        })
        .map(|t| t.code.as_str())
        .collect();
    results.push(check(
        "catalog_aircraft_types",
        bad_types.is_empty() && catalog.aircraft_types().count() > 0,
        format!(
            "{} aircraft types, {} invalid",
            catalog.aircraft_types().count(),
            bad_types.len()
        ),
    ));

    let missing: Vec<String> = scenarios::builtin()
        .into_iter()
        .filter(|s| {
            catalog.airport(&s.home_hub).is_none()
                || s.starting_fleet.iter().any(|c| catalog.aircraft_type(c).is_none())
        })
        .map(|s| s.id)
        .collect();
    results.push(check(
        "scenario_references",
        missing.is_empty(),
        if missing.is_empty() {
            "all scenario hubs and fleets resolve".to_string()
        } else {
            format!("unresolved: {}", missing.join(", "))
        },
    ));

    results
}

// ── 2. Event generator ──────────────────────────────────────────────────

fn validate_event_generator(options: &Options) -> Vec<TestResult> {
    println!("--- Event Generator ---");
    let mut results = Vec::new();
    let airline = AirlineSnapshot {
        cash: 5_000_000.0,
        reputation: 50,
        ..Default::default()
    };

    let mut generator = EventGenerator::seeded(options.seed);
    let days = 1_000;
    let event_days = (1..=days)
        .filter(|&day| generator.try_generate_event(day, &airline).is_some())
        .count();
    let rate = event_days as f64 / days as f64;
    results.push(check(
        "event_rate",
        (rate - 0.12).abs() < 0.04,
        format!("{} event days in {} ({:.1}%)", event_days, days, rate * 100.0),
    ));

    let mut generator = EventGenerator::seeded(options.seed).with_probability(1.0);
    let samples = 50_000;
    let mut categories = [0usize; 6];
    let mut severities = [0usize; 4];
    for day in 1..=samples {
        if let Some(event) = generator.try_generate_event(day, &airline) {
            if let Some(i) = EventCategory::ALL.iter().position(|c| *c == event.category) {
                categories[i] += 1;
            }
            if let Some(i) = Severity::ALL.iter().position(|s| *s == event.severity) {
                severities[i] += 1;
            }
        }
    }

    let worst_category = EventCategory::ALL
        .iter()
        .zip(categories)
        .map(|(c, n)| (n as f64 / samples as f64 - c.weight()).abs())
        .fold(0.0, f64::max);
    results.push(check(
        "category_distribution",
        worst_category < 0.015,
        format!("largest deviation from table {:.4}", worst_category),
    ));

    let worst_severity = Severity::ALL
        .iter()
        .zip(severities)
        .map(|(s, n)| (n as f64 / samples as f64 - s.weight()).abs())
        .fold(0.0, f64::max);
    results.push(check(
        "severity_distribution",
        worst_severity < 0.015,
        format!("largest deviation from table {:.4}", worst_severity),
    ));

    let mut a = EventGenerator::seeded(options.seed);
    let mut b = EventGenerator::seeded(options.seed);
    let replay = (1..=days).all(|day| {
        a.try_generate_event(day, &airline) == b.try_generate_event(day, &airline)
    });
    results.push(check(
        "event_determinism",
        replay,
        "same seed produces the same sequence",
    ));

    results
}

// ── 3. Route economics ──────────────────────────────────────────────────

fn validate_route_economics(catalog: &StaticCatalog) -> Vec<TestResult> {
    println!("--- Route Economics ---");
    let mut results = Vec::new();
    let params = EconomyParams::default();
    let airports: Vec<&Airport> = catalog.airports().collect();

    let mut checked = 0;
    let mut over_capacity = 0;
    let mut negative = 0;
    let mut profitable = 0;
    for aircraft in catalog.aircraft_types() {
        for (i, from) in airports.iter().enumerate() {
            for to in airports.iter().skip(i + 1) {
                let distance = great_circle_km(from, to);
                if distance > aircraft.range_km {
                    continue;
                }
                let inputs = RouteInputs {
                    active: true,
                    distance_km: distance,
                    ticket_price: reference_fare(distance, &params),
                    base_demand: estimate_base_demand(from, to, distance),
                    reputation: 50,
                    origin_landing_fee: from.landing_fee,
                    destination_landing_fee: to.landing_fee,
                    aircraft: Some(aircraft),
                };
                let result = compute_daily_result(&inputs, 1.0, 1.0, &params);
                checked += 1;
                if result.passengers > result.seat_capacity {
                    over_capacity += 1;
                }
                if result.revenue < 0.0 || result.operating_cost < 0.0 {
                    negative += 1;
                }
                if result.profit > 0.0 {
                    profitable += 1;
                }
            }
        }
    }

    results.push(check(
        "economics_capacity_bound",
        over_capacity == 0,
        format!("{} route/aircraft pairs, {} over capacity", checked, over_capacity),
    ));
    results.push(check(
        "economics_non_negative",
        negative == 0,
        format!("{} pairs with negative revenue or cost", negative),
    ));
    results.push(check(
        "economics_some_profitable",
        profitable > 0,
        format!("{} of {} pairs profitable at reference fare", profitable, checked),
    ));

    let idle = RouteInputs {
        active: true,
        distance_km: 1_000.0,
        ticket_price: 150.0,
        base_demand: 500.0,
        reputation: 50,
        origin_landing_fee: 500.0,
        destination_landing_fee: 500.0,
        aircraft: None,
    };
    let result = compute_daily_result(&idle, 2.0, 0.5, &params);
    results.push(check(
        "economics_idle_route",
        result.revenue == 0.0 && result.operating_cost == 0.0 && result.passengers == 0,
        "route without aircraft contributes nothing",
    ));

    results
}

// ── 4. Free play ────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct RunReport {
    days_played: u32,
    closing_cash: f64,
    closing_reputation: i32,
    passengers_carried: u64,
    net_profit: f64,
    events_seen: usize,
    positive_events: usize,
    fleet_seats: u32,
    daily_lease_commitment: f64,
    lost: bool,
}

fn validate_free_play(catalog: &StaticCatalog, options: &Options) -> Vec<TestResult> {
    println!("--- Free Play ---");
    let mut results = Vec::new();

    let mut session = GameSession::new(GameConfig::seeded(options.seed));
    if let Err(e) = session.start_new_game("Skyline Air", "JFK", catalog) {
        results.push(check("free_play_start", false, e.to_string()));
        return results;
    }
    let mut expected_lease = 0.0;
    for code in ["A320", "B738", "A220"] {
        match session.lease_aircraft(code, catalog) {
            Ok(_) => {
                expected_lease += catalog.aircraft_type(code).map_or(0.0, |t| t.lease_per_day);
            }
            Err(e) => results.push(check("free_play_lease", false, e.to_string())),
        }
    }
    if let Some(airline) = session.player_airline() {
        let committed = airline.daily_lease_commitment();
        results.push(check(
            "free_play_lease_commitment",
            (committed - expected_lease).abs() < 1e-6,
            format!("{:.0}/day across {} seats", committed, airline.seat_capacity()),
        ));
    }
    let opened = autopilot_network(&mut session, catalog);
    results.push(check(
        "free_play_network",
        opened == 3,
        format!("{} routes opened and assigned", opened),
    ));

    let mut day_errors = 0;
    let mut reputation_errors = 0;
    let mut modifier_errors = 0;
    let mut events_seen = 0;
    let mut positive_events = 0;
    let mut last_day = 0;
    let mut error = None;
    for _ in 0..options.days {
        let summary = match session.process_day() {
            Ok(summary) => summary,
            Err(e) => {
                error = Some(e);
                break;
            }
        };
        events_seen += summary.new_events.len();
        positive_events += summary.new_events.iter().filter(|e| e.is_positive()).count();
        if summary.day != last_day + 1 {
            day_errors += 1;
        }
        last_day = summary.day;
        if !(0..=100).contains(&summary.closing_reputation) {
            reputation_errors += 1;
        }
        if let Some(airline) = session.player_airline() {
            if airline.active_events.is_empty()
                && (summary.demand_modifier != 1.0 || summary.cost_modifier != 1.0)
            {
                modifier_errors += 1;
            }
        }
        if !session.is_running() {
            break;
        }
    }

    results.push(check(
        "free_play_no_errors",
        error.is_none(),
        error.map_or_else(|| "every turn succeeded".to_string(), |e| e.to_string()),
    ));
    results.push(check(
        "free_play_day_counter",
        day_errors == 0,
        format!("{} days played, {} skipped or repeated", last_day, day_errors),
    ));
    results.push(check(
        "free_play_reputation_bounds",
        reputation_errors == 0,
        format!("{} days out of bounds", reputation_errors),
    ));
    results.push(check(
        "free_play_neutral_modifiers",
        modifier_errors == 0,
        format!("{} quiet days with non-neutral modifiers", modifier_errors),
    ));
    results.push(check(
        "free_play_loss_stops_session",
        !session.has_lost() || (!session.is_running() && session.process_day().is_err()),
        format!("state {:?}", session.state()),
    ));

    if let Some(airline) = session.player_airline() {
        let report = RunReport {
            days_played: airline.current_day(),
            closing_cash: airline.cash,
            closing_reputation: airline.reputation(),
            passengers_carried: airline.passengers_carried,
            net_profit: airline.net_profit,
            events_seen,
            positive_events,
            fleet_seats: airline.seat_capacity(),
            daily_lease_commitment: airline.daily_lease_commitment(),
            lost: session.has_lost(),
        };
        if options.verbose {
            match serde_json::to_string_pretty(&report) {
                Ok(json) => println!("{}", json),
                Err(e) => log::warn!("could not render report: {}", e),
            }
        }
    }

    results
}

// ── 5. Scenarios ────────────────────────────────────────────────────────

fn validate_scenarios(catalog: &StaticCatalog, options: &Options) -> Vec<TestResult> {
    println!("--- Scenarios ---");
    let mut results = Vec::new();

    for scenario in scenarios::builtin() {
        let id = scenario.id.clone();
        let mut session = GameSession::new(GameConfig::seeded(options.seed));
        if let Err(e) = session.start_scenario(scenario, catalog) {
            results.push(check(&format!("scenario_{}", id), false, e.to_string()));
            continue;
        }
        autopilot_network(&mut session, catalog);

        let mut won_on = None;
        let mut regressed = false;
        let mut error = None;
        for _ in 0..options.days {
            match session.process_day() {
                Ok(summary) => {
                    if session.has_won() && won_on.is_none() {
                        won_on = Some(summary.day);
                    }
                    if won_on.is_some() && !session.has_won() {
                        regressed = true;
                    }
                }
                Err(e) => {
                    error = Some(e);
                    break;
                }
            }
            if !session.is_running() {
                break;
            }
        }

        let outcome = match (won_on, session.has_lost()) {
            (_, true) => "bankrupt".to_string(),
            (Some(day), false) => format!("won on day {}", day),
            (None, false) => {
                let progress: Vec<String> = session
                    .objective_progress()
                    .iter()
                    .map(|p| format!("{:.0}%", p * 100.0))
                    .collect();
                format!("in progress ({})", progress.join(", "))
            }
        };
        results.push(check(
            &format!("scenario_{}", id),
            error.is_none() && !regressed,
            match error {
                Some(e) => e.to_string(),
                None => outcome,
            },
        ));
    }

    results
}

// ── 6. Save / load ──────────────────────────────────────────────────────

fn validate_save_replay(catalog: &StaticCatalog, options: &Options) -> Vec<TestResult> {
    println!("--- Save / Load ---");
    let mut results = Vec::new();

    let config = GameConfig {
        starting_cash: 50_000_000.0,
        event_probability: 0.3,
        ..GameConfig::seeded(options.seed)
    };
    let mut original = GameSession::new(config);
    if original.start_new_game("Replay Air", "ORD", catalog).is_err() {
        results.push(check("save_replay", false, "could not start"));
        return results;
    }
    for code in ["A320", "E175"] {
        if let Err(e) = original.lease_aircraft(code, catalog) {
            results.push(check("save_replay_lease", false, format!("{}: {}", code, e)));
        }
    }
    autopilot_network(&mut original, catalog);
    for _ in 0..30 {
        if original.process_day().is_err() {
            break;
        }
    }

    let mut buffer = Vec::new();
    if let Err(e) = original.save(&mut buffer) {
        results.push(check("save_replay", false, e.to_string()));
        return results;
    }
    results.push(check(
        "save_size",
        !buffer.is_empty(),
        format!("{} bytes", buffer.len()),
    ));

    let mut loaded = match GameSession::load(&buffer[..]) {
        Ok(session) => session,
        Err(e) => {
            results.push(check("save_replay", false, e.to_string()));
            return results;
        }
    };

    let mut diverged_on = None;
    for _ in 0..60 {
        match (original.process_day(), loaded.process_day()) {
            (Ok(a), Ok(b)) if a == b => {}
            (Err(_), Err(_)) => break,
            (Ok(a), _) => {
                diverged_on = Some(a.day);
                break;
            }
            (Err(_), _) => {
                diverged_on = Some(0);
                break;
            }
        }
    }
    results.push(check(
        "save_replay",
        diverged_on.is_none(),
        match diverged_on {
            None => "loaded game replays the original".to_string(),
            Some(day) => format!("diverged on day {}", day),
        },
    ));

    results
}
