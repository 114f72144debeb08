//! Integration tests for the event pipeline.
//!
//! Exercises: EventGenerator → category/severity tables → template catalog
//! → GameEvent, over long seeded runs.
//!
//! All tests are pure logic with no session and no persistence.

use std::collections::HashMap;

use skyline_logic::constants::probabilities::CASH_IMPACT_RATE;
use skyline_logic::events::{templates_for, EventCategory, GameEvent, Severity};
use skyline_logic::generator::EventGenerator;
use skyline_logic::snapshot::AirlineSnapshot;

// ── Helpers ────────────────────────────────────────────────────────────

fn airline(cash: f64) -> AirlineSnapshot {
    AirlineSnapshot {
        cash,
        reputation: 50,
        ..Default::default()
    }
}

fn run(generator: &mut EventGenerator, days: u32, cash: f64) -> Vec<Option<GameEvent>> {
    let snapshot = airline(cash);
    (1..=days)
        .map(|day| generator.try_generate_event(day, &snapshot))
        .collect()
}

// ── Occurrence ─────────────────────────────────────────────────────────

#[test]
fn seed_42_event_rate_is_near_twelve_percent() {
    let mut generator = EventGenerator::seeded(42);
    let days = run(&mut generator, 1_000, 5_000_000.0);
    let event_days = days.iter().filter(|d| d.is_some()).count();
    let rate = event_days as f64 / 1_000.0;
    assert!(
        (rate - 0.12).abs() < 0.04,
        "event rate {} too far from 0.12",
        rate
    );
}

#[test]
fn same_seed_replays_identically() {
    let a = run(&mut EventGenerator::seeded(42), 1_000, 5_000_000.0);
    let b = run(&mut EventGenerator::seeded(42), 1_000, 5_000_000.0);
    assert_eq!(a, b);
}

#[test]
fn different_seeds_diverge() {
    let a = run(&mut EventGenerator::seeded(42), 1_000, 5_000_000.0);
    let b = run(&mut EventGenerator::seeded(43), 1_000, 5_000_000.0);
    assert_ne!(a, b);
}

// ── Distributions ──────────────────────────────────────────────────────

#[test]
fn category_and_severity_shares_match_tables() {
    let mut generator = EventGenerator::seeded(42).with_probability(1.0);
    let events: Vec<GameEvent> = run(&mut generator, 100_000, 5_000_000.0)
        .into_iter()
        .flatten()
        .collect();
    assert_eq!(events.len(), 100_000);

    let mut categories: HashMap<EventCategory, usize> = HashMap::new();
    let mut severities: HashMap<Severity, usize> = HashMap::new();
    for event in &events {
        *categories.entry(event.category).or_default() += 1;
        *severities.entry(event.severity).or_default() += 1;
    }

    let total = events.len() as f64;
    for category in EventCategory::ALL {
        let share = categories.get(&category).copied().unwrap_or(0) as f64 / total;
        assert!(
            (share - category.weight()).abs() < 0.01,
            "{:?}: share {} vs weight {}",
            category,
            share,
            category.weight()
        );
    }
    for severity in Severity::ALL {
        let share = severities.get(&severity).copied().unwrap_or(0) as f64 / total;
        assert!(
            (share - severity.weight()).abs() < 0.01,
            "{:?}: share {} vs weight {}",
            severity,
            share,
            severity.weight()
        );
    }
}

#[test]
fn seed_42_year_shares_roughly_match_tables() {
    let mut generator = EventGenerator::seeded(42);
    let events: Vec<GameEvent> = run(&mut generator, 1_000, 5_000_000.0)
        .into_iter()
        .flatten()
        .collect();
    assert!(events.len() >= 80, "only {} events", events.len());

    // About 120 draws, so only gross skew is detectable.
    let total = events.len() as f64;
    for category in EventCategory::ALL {
        let count = events.iter().filter(|e| e.category == category).count();
        let share = count as f64 / total;
        assert!(
            (share - category.weight()).abs() < 0.15,
            "{:?}: share {} vs weight {}",
            category,
            share,
            category.weight()
        );
    }
    for severity in Severity::ALL {
        let count = events.iter().filter(|e| e.severity == severity).count();
        let share = count as f64 / total;
        assert!(
            (share - severity.weight()).abs() < 0.15,
            "{:?}: share {} vs weight {}",
            severity,
            share,
            severity.weight()
        );
    }
}

#[test]
fn every_template_is_reachable() {
    let mut generator = EventGenerator::seeded(42).with_probability(1.0);
    let titles: std::collections::HashSet<String> = run(&mut generator, 200_000, 1_000_000.0)
        .into_iter()
        .flatten()
        .map(|e| e.title)
        .collect();

    for category in EventCategory::ALL {
        for severity in Severity::ALL {
            for template in templates_for(category, severity) {
                assert!(
                    titles.contains(template.title),
                    "{} never generated",
                    template.title
                );
            }
        }
    }
}

// ── Event contents ─────────────────────────────────────────────────────

#[test]
fn generated_events_are_well_formed() {
    let mut generator = EventGenerator::seeded(42).with_probability(1.0);
    let cash = 3_000_000.0;
    let mut last_id = 0;
    for (index, event) in run(&mut generator, 5_000, cash).into_iter().enumerate() {
        let event = event.expect("probability 1.0 always fires");
        assert_eq!(event.day, index as u32 + 1);
        assert!(event.id > last_id);
        last_id = event.id;
        assert!(event.duration_days >= 1);
        assert!(event.demand_multiplier > 0.0);
        assert!(event.cost_multiplier > 0.0);

        if event.category.scales_with_cash() {
            let expected = -cash * CASH_IMPACT_RATE * event.severity.multiplier();
            assert!((event.financial_impact - expected).abs() < 1e-6);
        }
    }
}

#[test]
fn cash_scaled_losses_never_reward_debt() {
    let mut generator = EventGenerator::seeded(42).with_probability(1.0);
    for event in run(&mut generator, 5_000, -250_000.0).into_iter().flatten() {
        if event.category.scales_with_cash() {
            assert!(event.financial_impact <= 0.0);
        }
    }
}
