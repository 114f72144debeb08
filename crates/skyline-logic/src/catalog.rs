//! Reference data: airports and aircraft types.
//!
//! The engine never owns the catalog. It asks a [`ReferenceData`] implementor
//! for a record by code and treats `None` as not-found. [`StaticCatalog`] is
//! the built-in implementor backed by the JSON table shipped in `data/`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Embedded reference table (same JSON the harness prints from).
const CATALOG_JSON: &str = include_str!("../../../data/catalog.json");

const EARTH_RADIUS_KM: f64 = 6371.0;

/// An airport the airline can fly to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    /// IATA code, e.g. "JFK".
    pub code: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Relative passenger pull, 1.0 for the busiest hubs.
    pub demand_index: f64,
    /// Charged per departure or arrival.
    pub landing_fee: f64,
}

/// An aircraft model that can be leased or bought.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftType {
    /// ICAO type designator, e.g. "A320".
    pub code: String,
    pub name: String,
    pub manufacturer: String,
    pub seats: u32,
    pub range_km: f64,
    pub cruise_speed_kmh: f64,
    pub fuel_burn_kg_per_km: f64,
    /// Cabin and flight crew per flight.
    pub crew: u32,
    pub maintenance_per_hour: f64,
    pub purchase_price: f64,
    pub lease_per_day: f64,
}

/// Lookup collaborator consumed by the engine when starting games and
/// opening routes.
pub trait ReferenceData {
    fn airport(&self, code: &str) -> Option<Airport>;
    fn aircraft_type(&self, code: &str) -> Option<AircraftType>;
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate catalog code: {0}")]
    DuplicateCode(String),
}

#[derive(Deserialize)]
struct CatalogFile {
    airports: Vec<Airport>,
    aircraft: Vec<AircraftType>,
}

/// In-memory catalog keyed by code.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    airports: BTreeMap<String, Airport>,
    aircraft: BTreeMap<String, AircraftType>,
}

impl StaticCatalog {
    /// Load the table embedded in the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(CATALOG_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let mut catalog = Self::default();
        for airport in file.airports {
            catalog.insert_airport(airport)?;
        }
        for aircraft in file.aircraft {
            catalog.insert_aircraft(aircraft)?;
        }
        Ok(catalog)
    }

    pub fn insert_airport(&mut self, airport: Airport) -> Result<(), CatalogError> {
        if self.airports.contains_key(&airport.code) {
            return Err(CatalogError::DuplicateCode(airport.code));
        }
        self.airports.insert(airport.code.clone(), airport);
        Ok(())
    }

    pub fn insert_aircraft(&mut self, aircraft: AircraftType) -> Result<(), CatalogError> {
        if self.aircraft.contains_key(&aircraft.code) {
            return Err(CatalogError::DuplicateCode(aircraft.code));
        }
        self.aircraft.insert(aircraft.code.clone(), aircraft);
        Ok(())
    }

    pub fn airports(&self) -> impl Iterator<Item = &Airport> {
        self.airports.values()
    }

    pub fn aircraft_types(&self) -> impl Iterator<Item = &AircraftType> {
        self.aircraft.values()
    }
}

impl ReferenceData for StaticCatalog {
    fn airport(&self, code: &str) -> Option<Airport> {
        self.airports.get(&code.to_ascii_uppercase()).cloned()
    }

    fn aircraft_type(&self, code: &str) -> Option<AircraftType> {
        self.aircraft.get(&code.to_ascii_uppercase()).cloned()
    }
}

/// Great-circle distance between two airports (haversine).
pub fn great_circle_km(a: &Airport, b: &Airport) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = lat2 - lat1;
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}
