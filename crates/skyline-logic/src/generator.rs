//! Random event generator.
//!
//! Three independent rolls decide whether an event happens today, what kind
//! it is and how bad it is. A fourth picks a template for that pair. The
//! generator owns its RNG so a seed fully determines the sequence.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::constants::probabilities::BASE_EVENT_PROBABILITY;
use crate::events::{templates_for, EventCategory, GameEvent, Severity};
use crate::snapshot::AirlineSnapshot;

/// Source of daily events. At most one event originates per call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventGenerator {
    rng: ChaCha8Rng,
    probability: f64,
    next_id: u64,
}

impl EventGenerator {
    /// Wrap a caller-supplied RNG.
    pub fn new(rng: ChaCha8Rng) -> Self {
        Self {
            rng,
            probability: BASE_EVENT_PROBABILITY,
            next_id: 1,
        }
    }

    /// Reproducible generator for tests and replays.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }

    /// Override the daily occurrence probability (clamped to [0, 1]).
    /// A non-finite probability disables events.
    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = if probability.is_finite() {
            probability.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Roll for today's event. `None` is the common case, not a failure.
    pub fn try_generate_event(&mut self, day: u32, airline: &AirlineSnapshot) -> Option<GameEvent> {
        let occurrence: f64 = self.rng.gen();
        if occurrence >= self.probability {
            return None;
        }

        let category = EventCategory::from_roll(self.rng.gen());
        let severity = Severity::from_roll(self.rng.gen());

        let templates = templates_for(category, severity);
        let template = &templates[self.rng.gen_range(0..templates.len())];

        let id = self.next_id;
        self.next_id += 1;

        Some(template.instantiate(id, category, severity, day, airline.cash))
    }
}
