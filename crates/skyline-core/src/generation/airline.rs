//! Founding a new airline from reference data

use skyline_logic::catalog::ReferenceData;

use crate::components::Airline;
use crate::error::EngineError;
use crate::systems::network;

/// Identity given to the player's airline. There is one airline per session.
pub const PLAYER_AIRLINE_ID: u64 = 1;

/// Create an airline based at `home_hub`. The hub must exist in the catalog;
/// its canonical code is stored.
pub fn found_airline(
    name: &str,
    home_hub: &str,
    starting_cash: f64,
    starting_reputation: i32,
    catalog: &dyn ReferenceData,
) -> Result<Airline, EngineError> {
    let hub = catalog
        .airport(home_hub)
        .ok_or_else(|| EngineError::UnknownAirport(home_hub.to_string()))?;

    let name = name.trim();
    let name = if name.is_empty() { "Skyline Air" } else { name };

    Ok(Airline::new(
        PLAYER_AIRLINE_ID,
        name,
        hub.code,
        starting_cash,
        starting_reputation,
    ))
}

/// Lease each listed aircraft type with no deposit. Used for scenario
/// starting fleets, which are part of the seed state rather than a purchase.
pub fn seed_fleet(
    airline: &mut Airline,
    catalog: &dyn ReferenceData,
    type_codes: &[String],
) -> Result<(), EngineError> {
    for code in type_codes {
        network::lease_aircraft(airline, catalog, code, 0)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyline_logic::catalog::StaticCatalog;

    #[test]
    fn test_found_airline_resolves_hub() {
        let catalog = StaticCatalog::builtin().unwrap();
        let airline = found_airline("Skyline Air", "jfk", 5_000_000.0, 50, &catalog).unwrap();
        assert_eq!(airline.home_hub, "JFK");
        assert_eq!(airline.cash, 5_000_000.0);
        assert_eq!(airline.current_day(), 0);
    }

    #[test]
    fn test_unknown_hub_is_rejected() {
        let catalog = StaticCatalog::builtin().unwrap();
        let err = found_airline("Skyline Air", "XXX", 1.0, 50, &catalog).unwrap_err();
        assert_eq!(err, EngineError::UnknownAirport("XXX".into()));
    }

    #[test]
    fn test_blank_name_gets_default() {
        let catalog = StaticCatalog::builtin().unwrap();
        let airline = found_airline("   ", "LAX", 1.0, 50, &catalog).unwrap();
        assert_eq!(airline.name, "Skyline Air");
    }

    #[test]
    fn test_seed_fleet_is_free() {
        let catalog = StaticCatalog::builtin().unwrap();
        let mut airline = found_airline("Skyline Air", "ORD", 1_000.0, 50, &catalog).unwrap();
        seed_fleet(&mut airline, &catalog, &["A320".into(), "E175".into()]).unwrap();
        assert_eq!(airline.fleet.len(), 2);
        assert_eq!(airline.cash, 1_000.0);
        assert!(airline.fleet.iter().all(|a| a.is_idle()));
    }
}
