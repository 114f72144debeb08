//! Game session - main entry point for playing the simulation

use serde::{Deserialize, Serialize};
use skyline_logic::catalog::ReferenceData;
use skyline_logic::generator::EventGenerator;
use skyline_logic::objectives::check_objectives;
use std::io::{Read, Write};

use crate::components::{AircraftId, Airline, RouteId};
use crate::config::GameConfig;
use crate::error::EngineError;
use crate::generation::{found_airline, seed_fleet, Scenario};
use crate::persistence::{load_session, save_session, SaveData, SaveError};
use crate::systems::{self, network, DailyOperationsSummary};

/// Where the session stands. Lost outranks Won, and both outrank Paused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    NotStarted,
    Running,
    Paused,
    Won,
    Lost,
}

/// One player's game: an airline, an optional scenario and the event
/// generator that drives both.
pub struct GameSession {
    config: GameConfig,
    generator: EventGenerator,
    airline: Option<Airline>,
    scenario: Option<Scenario>,
    running: bool,
    paused: bool,
    has_won: bool,
    has_lost: bool,
}

impl GameSession {
    /// Create an empty session. The generator is built from the config seed.
    pub fn new(config: GameConfig) -> Self {
        if let Err(e) = config.validate() {
            log::warn!("Session config: {}", e);
        }
        let generator = config.build_generator();
        Self::with_generator(config, generator)
    }

    /// Create an empty session driven by a caller-supplied generator.
    pub fn with_generator(config: GameConfig, generator: EventGenerator) -> Self {
        Self {
            config,
            generator,
            airline: None,
            scenario: None,
            running: false,
            paused: false,
            has_won: false,
            has_lost: false,
        }
    }

    /// Start a free-play game with the configured starting cash and
    /// reputation.
    pub fn start_new_game(
        &mut self,
        name: &str,
        home_hub: &str,
        catalog: &dyn ReferenceData,
    ) -> Result<(), EngineError> {
        let airline = found_airline(
            name,
            home_hub,
            self.config.starting_cash,
            self.config.starting_reputation,
            catalog,
        )?;
        log::info!("New game: {} based at {}", airline.name, airline.home_hub);
        self.begin(airline, None);
        Ok(())
    }

    /// Start a scenario game. The scenario supplies the airline's seed state
    /// and the objectives checked after every turn.
    pub fn start_scenario(
        &mut self,
        scenario: Scenario,
        catalog: &dyn ReferenceData,
    ) -> Result<(), EngineError> {
        let mut airline = found_airline(
            &scenario.airline_name,
            &scenario.home_hub,
            scenario.starting_cash,
            scenario.starting_reputation,
            catalog,
        )?;
        seed_fleet(&mut airline, catalog, &scenario.starting_fleet)?;
        log::info!(
            "Scenario '{}': {} based at {} with {} aircraft",
            scenario.name,
            airline.name,
            airline.home_hub,
            airline.fleet.len()
        );
        self.begin(airline, Some(scenario));
        Ok(())
    }

    fn begin(&mut self, airline: Airline, scenario: Option<Scenario>) {
        self.airline = Some(airline);
        self.scenario = scenario;
        self.running = true;
        self.paused = false;
        self.has_won = false;
        self.has_lost = false;
    }

    /// Re-enter a game from stored state. Loss is re-derived from the
    /// airline's cash rather than stored.
    pub fn restore(&mut self, airline: Airline, scenario: Option<Scenario>, has_won: bool) {
        let has_lost = airline.is_bankrupt();
        self.begin(airline, scenario);
        self.has_won = has_won;
        if has_lost {
            log::info!("Restored airline is bankrupt");
            self.has_lost = true;
            self.running = false;
        }
    }

    /// Advance the game by one day and settle win/loss.
    pub fn process_day(&mut self) -> Result<DailyOperationsSummary, EngineError> {
        if self.has_lost {
            return Err(EngineError::InvalidState("the airline is bankrupt"));
        }
        if !self.running {
            return Err(EngineError::InvalidState("no game is running"));
        }
        if self.paused {
            return Err(EngineError::InvalidState("the game is paused"));
        }
        let airline = self
            .airline
            .as_mut()
            .ok_or(EngineError::InvalidState("no airline"))?;

        let summary = systems::process_day(airline, &mut self.generator, &self.config.economy);

        if !self.has_won {
            if let Some(scenario) = &self.scenario {
                if check_objectives(&airline.snapshot(), &scenario.objectives) {
                    self.has_won = true;
                    log::info!(
                        "Day {}: scenario '{}' complete",
                        summary.day,
                        scenario.name
                    );
                }
            }
        }

        if airline.is_bankrupt() {
            self.has_lost = true;
            self.running = false;
            log::info!(
                "Day {}: {} is bankrupt with cash {:.0}",
                summary.day,
                airline.name,
                airline.cash
            );
        }

        Ok(summary)
    }

    /// Run up to `days` turns, stopping early if the game ends.
    pub fn run_days(&mut self, days: u32) -> Result<Vec<DailyOperationsSummary>, EngineError> {
        let mut summaries = Vec::with_capacity(days.min(366) as usize);
        for _ in 0..days {
            summaries.push(self.process_day()?);
            if !self.running {
                break;
            }
        }
        Ok(summaries)
    }

    pub fn pause(&mut self) {
        if self.running {
            self.paused = true;
        }
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn state(&self) -> SessionState {
        if self.has_lost {
            SessionState::Lost
        } else if self.has_won {
            SessionState::Won
        } else if !self.running {
            SessionState::NotStarted
        } else if self.paused {
            SessionState::Paused
        } else {
            SessionState::Running
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn has_won(&self) -> bool {
        self.has_won
    }

    pub fn has_lost(&self) -> bool {
        self.has_lost
    }

    pub fn player_airline(&self) -> Option<&Airline> {
        self.airline.as_ref()
    }

    pub fn current_scenario(&self) -> Option<&Scenario> {
        self.scenario.as_ref()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Per-objective progress in [0, 1], in scenario order. Empty outside
    /// scenario games.
    pub fn objective_progress(&self) -> Vec<f64> {
        match (&self.airline, &self.scenario) {
            (Some(airline), Some(scenario)) => {
                let snapshot = airline.snapshot();
                scenario
                    .objectives
                    .iter()
                    .map(|o| o.progress(&snapshot))
                    .collect()
            }
            _ => Vec::new(),
        }
    }

    fn airline_for_edit(&mut self) -> Result<&mut Airline, EngineError> {
        if self.has_lost {
            return Err(EngineError::InvalidState("the airline is bankrupt"));
        }
        self.airline
            .as_mut()
            .ok_or(EngineError::InvalidState("no game is running"))
    }

    fn log_rejection<T>(action: &str, result: Result<T, EngineError>) -> Result<T, EngineError> {
        if let Err(err) = &result {
            log::warn!("{} rejected: {}", action, err);
        }
        result
    }

    // ------------------------------------------------------------------
    // Player operations
    // ------------------------------------------------------------------

    pub fn lease_aircraft(
        &mut self,
        type_code: &str,
        catalog: &dyn ReferenceData,
    ) -> Result<AircraftId, EngineError> {
        let deposit_days = self.config.lease_deposit_days;
        let result = self
            .airline_for_edit()
            .and_then(|a| network::lease_aircraft(a, catalog, type_code, deposit_days));
        Self::log_rejection("Lease", result)
    }

    pub fn purchase_aircraft(
        &mut self,
        type_code: &str,
        catalog: &dyn ReferenceData,
    ) -> Result<AircraftId, EngineError> {
        let result = self
            .airline_for_edit()
            .and_then(|a| network::purchase_aircraft(a, catalog, type_code));
        Self::log_rejection("Purchase", result)
    }

    pub fn open_route(
        &mut self,
        origin: &str,
        destination: &str,
        ticket_price: f64,
        catalog: &dyn ReferenceData,
    ) -> Result<RouteId, EngineError> {
        let result = self
            .airline_for_edit()
            .and_then(|a| network::open_route(a, catalog, origin, destination, ticket_price));
        Self::log_rejection("Open route", result)
    }

    pub fn assign_aircraft(
        &mut self,
        route_id: RouteId,
        aircraft_id: AircraftId,
    ) -> Result<(), EngineError> {
        let result = self
            .airline_for_edit()
            .and_then(|a| network::assign_aircraft(a, route_id, aircraft_id));
        Self::log_rejection("Assign", result)
    }

    pub fn unassign_aircraft(&mut self, route_id: RouteId) -> Result<Option<AircraftId>, EngineError> {
        let result = self
            .airline_for_edit()
            .and_then(|a| network::unassign_aircraft(a, route_id));
        Self::log_rejection("Unassign", result)
    }

    pub fn close_route(&mut self, route_id: RouteId) -> Result<(), EngineError> {
        let result = self
            .airline_for_edit()
            .and_then(|a| network::close_route(a, route_id));
        Self::log_rejection("Close route", result)
    }

    pub fn set_ticket_price(&mut self, route_id: RouteId, ticket_price: f64) -> Result<(), EngineError> {
        let result = self
            .airline_for_edit()
            .and_then(|a| network::set_ticket_price(a, route_id, ticket_price));
        Self::log_rejection("Set price", result)
    }

    // ------------------------------------------------------------------
    // Save / load
    // ------------------------------------------------------------------

    pub fn to_save_data(&self) -> Result<SaveData, SaveError> {
        let airline = self.airline.clone().ok_or(SaveError::NoSession)?;
        Ok(SaveData::new(
            self.config.clone(),
            self.generator.clone(),
            airline,
            self.scenario.clone(),
            self.has_won,
        ))
    }

    /// Save the session to a writer
    pub fn save<W: Write>(&self, writer: W) -> Result<(), SaveError> {
        save_session(writer, &self.to_save_data()?)
    }

    /// Load a session from a reader
    pub fn load<R: Read>(reader: R) -> Result<Self, SaveError> {
        let data = load_session(reader)?;
        let mut session = Self::with_generator(data.config, data.generator);
        log::info!(
            "Loaded {} on day {}",
            data.airline.name,
            data.airline.current_day()
        );
        session.restore(data.airline, data.scenario, data.has_won);
        Ok(session)
    }
}
