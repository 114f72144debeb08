//! Pure simulation logic for Skyline.
//!
//! This crate contains the airline game rules that are independent of any
//! session, storage, or front end. Functions take plain data and return
//! results, making them unit-testable and reusable from the engine crate,
//! the headless harness and any future client.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`catalog`] | Airport and aircraft reference records, lookup trait, embedded table |
//! | [`constants`] | Probability tables, reputation bounds, scheduling limits |
//! | [`economics`] | Per-route daily demand, revenue, cost and load factor |
//! | [`events`] | Event categories, severity tiers, template catalog, `GameEvent` |
//! | [`generator`] | Seeded three-roll random event generator |
//! | [`objectives`] | Scenario objective predicates and evaluation |
//! | [`snapshot`] | Read-only airline figures consumed by events and objectives |

pub mod catalog;
pub mod constants;
pub mod economics;
pub mod events;
pub mod generator;
pub mod objectives;
pub mod snapshot;
