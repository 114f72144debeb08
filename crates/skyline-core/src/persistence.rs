//! Save/Load functionality for persisting a game session
//!
//! Uses bincode for compact binary serialization. The envelope carries a
//! format version, the airline with its fleet, routes and event ledger, the
//! scenario, the won latch, the configuration and the generator's RNG state,
//! so a loaded game rolls the same events the original would have.

use serde::{Deserialize, Serialize};
use skyline_logic::generator::EventGenerator;
use std::io::{Read, Write};
use thiserror::Error;

use crate::components::Airline;
use crate::config::GameConfig;
use crate::generation::Scenario;

/// Version number for save file format (increment when format changes)
pub const SAVE_VERSION: u32 = 1;

/// Serializable snapshot of a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveData {
    pub version: u32,
    pub config: GameConfig,
    pub generator: EventGenerator,
    pub airline: Airline,
    pub scenario: Option<Scenario>,
    pub has_won: bool,
}

impl SaveData {
    pub fn new(
        config: GameConfig,
        generator: EventGenerator,
        airline: Airline,
        scenario: Option<Scenario>,
        has_won: bool,
    ) -> Self {
        Self {
            version: SAVE_VERSION,
            config,
            generator,
            airline,
            scenario,
            has_won,
        }
    }
}

/// Errors that can occur during save/load
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Bincode(#[from] Box<bincode::ErrorKind>),
    #[error("Save version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
    #[error("No game in progress")]
    NoSession,
}

/// Write a session to `writer`
pub fn save_session<W: Write>(writer: W, data: &SaveData) -> Result<(), SaveError> {
    bincode::serialize_into(writer, data)?;
    Ok(())
}

/// Read a session from `reader`, rejecting other format versions
pub fn load_session<R: Read>(reader: R) -> Result<SaveData, SaveError> {
    let data: SaveData = bincode::deserialize_from(reader)?;

    if data.version != SAVE_VERSION {
        return Err(SaveError::VersionMismatch {
            expected: SAVE_VERSION,
            found: data.version,
        });
    }

    Ok(data)
}
