//! Active event ledger: events whose effects still apply.
//!
//! Each entry counts down the days it has left. Aggregate modifiers are the
//! product of every held event's multiplier, so simultaneous crises compound.

use serde::{Deserialize, Serialize};
use skyline_logic::events::GameEvent;

/// An event currently in effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveEvent {
    pub event: GameEvent,
    /// Days left including today.
    pub remaining_days: u32,
}

/// Events attached to an airline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventLedger {
    entries: Vec<ActiveEvent>,
}

impl EventLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold a freshly generated event for its full duration.
    pub fn append(&mut self, event: GameEvent) {
        let remaining_days = event.duration_days.max(1);
        self.entries.push(ActiveEvent {
            event,
            remaining_days,
        });
    }

    /// Count down every event that began before `today` and drop the ones
    /// that ran out. Events appended today keep their full duration.
    /// Returns the expired events.
    pub fn expire_lapsed(&mut self, today: u32) -> Vec<GameEvent> {
        for entry in &mut self.entries {
            if entry.event.day < today {
                entry.remaining_days = entry.remaining_days.saturating_sub(1);
            }
        }

        let (expired, kept): (Vec<ActiveEvent>, Vec<ActiveEvent>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|entry| entry.remaining_days == 0);
        self.entries = kept;
        expired.into_iter().map(|entry| entry.event).collect()
    }

    /// Product of all held demand multipliers; 1.0 when empty.
    pub fn demand_modifier(&self) -> f64 {
        self.entries
            .iter()
            .map(|entry| entry.event.demand_multiplier)
            .product()
    }

    /// Product of all held cost multipliers; 1.0 when empty.
    pub fn cost_modifier(&self) -> f64 {
        self.entries
            .iter()
            .map(|entry| entry.event.cost_multiplier)
            .product()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActiveEvent> {
        self.entries.iter()
    }

    pub fn contains(&self, event_id: u64) -> bool {
        self.entries.iter().any(|entry| entry.event.id == event_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyline_logic::events::{EventCategory, Severity};

    fn event(id: u64, day: u32, duration_days: u32, demand: f64, cost: f64) -> GameEvent {
        GameEvent {
            id,
            category: EventCategory::Weather,
            severity: Severity::Minor,
            title: format!("Event {}", id),
            description: String::new(),
            day,
            duration_days,
            demand_multiplier: demand,
            cost_multiplier: cost,
            financial_impact: 0.0,
            reputation_delta: 0,
        }
    }

    #[test]
    fn test_empty_modifiers_are_exactly_one() {
        let ledger = EventLedger::new();
        assert_eq!(ledger.demand_modifier(), 1.0);
        assert_eq!(ledger.cost_modifier(), 1.0);
    }

    #[test]
    fn test_modifiers_compound_multiplicatively() {
        let mut ledger = EventLedger::new();
        ledger.append(event(1, 1, 5, 0.8, 1.2));
        ledger.append(event(2, 1, 5, 0.5, 1.5));
        assert!((ledger.demand_modifier() - 0.4).abs() < 1e-12);
        assert!((ledger.cost_modifier() - 1.8).abs() < 1e-12);
    }

    #[test]
    fn test_one_day_event_expires_next_day() {
        let mut ledger = EventLedger::new();
        ledger.append(event(1, 3, 1, 0.5, 1.0));

        // Same day: still held.
        assert!(ledger.expire_lapsed(3).is_empty());
        assert_eq!(ledger.len(), 1);

        let expired = ledger.expire_lapsed(4);
        assert_eq!(expired.len(), 1);
        assert!(ledger.is_empty());
        assert_eq!(ledger.demand_modifier(), 1.0);
    }

    #[test]
    fn test_event_held_for_full_duration() {
        let mut ledger = EventLedger::new();
        ledger.append(event(1, 10, 3, 0.9, 1.1));
        ledger.expire_lapsed(10);

        for day in 11..=12 {
            assert!(ledger.expire_lapsed(day).is_empty(), "expired early on day {}", day);
            assert!(ledger.contains(1));
        }
        assert_eq!(ledger.expire_lapsed(13).len(), 1);
        assert!(!ledger.contains(1));
    }

    #[test]
    fn test_mixed_expiry() {
        let mut ledger = EventLedger::new();
        ledger.append(event(1, 1, 1, 0.5, 1.0));
        ledger.append(event(2, 1, 4, 0.8, 1.0));
        let expired = ledger.expire_lapsed(2);
        assert_eq!(expired.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1]);
        assert!((ledger.demand_modifier() - 0.8).abs() < 1e-12);
        assert_eq!(ledger.iter().next().unwrap().remaining_days, 3);
    }
}
