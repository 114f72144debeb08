//! Skyline Core - Airline Daily Operations Engine
//!
//! A turn-based simulation of a single airline. Each turn advances the
//! calendar by one day, rolls for a random event, applies the effects of
//! every event still in force, flies the route network and settles the
//! scenario win and bankruptcy conditions.
//!
//! # Architecture
//!
//! - **Components**: Plain data for the airline, its fleet and its routes
//! - **Systems**: The event ledger, the daily turn processor and the network
//!   planning operations the player uses between turns
//! - **Generation**: Founding airlines and the built-in scenarios
//! - **Engine**: [`GameSession`](engine::GameSession), the state machine that
//!   owns one airline and drives the systems
//!
//! Pure formulas (event tables, route economics, objectives) live in
//! `skyline-logic`.
//!
//! # Example
//!
//! ```rust,no_run
//! use skyline_core::prelude::*;
//! use skyline_logic::catalog::StaticCatalog;
//!
//! let catalog = StaticCatalog::builtin().unwrap();
//! let mut session = GameSession::new(GameConfig::seeded(42));
//! session.start_new_game("Skyline Air", "JFK", &catalog).unwrap();
//!
//! let aircraft = session.lease_aircraft("A320", &catalog).unwrap();
//! let route = session.open_route("JFK", "ORD", 220.0, &catalog).unwrap();
//! session.assign_aircraft(route, aircraft).unwrap();
//!
//! while session.is_running() {
//!     let summary = session.process_day().unwrap();
//!     println!("day {}: cash {:.0}", summary.day, summary.closing_cash);
//! }
//! ```

pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod generation;
pub mod persistence;
pub mod systems;

pub use error::EngineError;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::components::*;
    pub use crate::config::GameConfig;
    pub use crate::engine::{GameSession, SessionState};
    pub use crate::error::EngineError;
    pub use crate::generation::{scenarios, Scenario};
    pub use crate::systems::DailyOperationsSummary;
}
