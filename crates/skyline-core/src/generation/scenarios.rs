//! Scenarios - fixed starting positions with objectives to reach

use serde::{Deserialize, Serialize};
use skyline_logic::objectives::Objective;

/// Starting configuration for a scenario game. Consumed once at session
/// start; the session keeps a copy for objective checks and saving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub name: String,
    pub description: String,
    pub airline_name: String,
    pub home_hub: String,
    pub starting_cash: f64,
    pub starting_reputation: i32,
    /// Aircraft type codes handed to the player at no cost.
    pub starting_fleet: Vec<String>,
    pub objectives: Vec<Objective>,
}

impl Scenario {
    pub fn objective_descriptions(&self) -> Vec<String> {
        self.objectives.iter().map(Objective::describe).collect()
    }
}

fn fleet(codes: &[&str]) -> Vec<String> {
    codes.iter().map(|c| c.to_string()).collect()
}

/// The scenarios shipped with the game.
pub fn builtin() -> Vec<Scenario> {
    vec![
        Scenario {
            id: "regional-startup".into(),
            name: "Regional Startup".into(),
            description: "Build a profitable regional network out of Boston.".into(),
            airline_name: "Harbor Regional".into(),
            home_hub: "BOS".into(),
            starting_cash: 2_000_000.0,
            starting_reputation: 50,
            starting_fleet: fleet(&["E175", "E175"]),
            objectives: vec![
                Objective::ActiveRoutes(3),
                Objective::PassengersCarried(50_000),
            ],
        },
        Scenario {
            id: "hub-builder".into(),
            name: "Hub Builder".into(),
            description: "Turn Atlanta into a busy hub with a strong reputation.".into(),
            airline_name: "Peachtree Airways".into(),
            home_hub: "ATL".into(),
            starting_cash: 5_000_000.0,
            starting_reputation: 45,
            starting_fleet: fleet(&["A320", "B738"]),
            objectives: vec![
                Objective::ActiveRoutes(5),
                Objective::Reputation(70),
                Objective::NetProfit(2_000_000.0),
            ],
        },
        Scenario {
            id: "transatlantic".into(),
            name: "Across the Pond".into(),
            description: "Link New York and Europe with widebody service.".into(),
            airline_name: "Atlantic Crown".into(),
            home_hub: "JFK".into(),
            starting_cash: 15_000_000.0,
            starting_reputation: 55,
            starting_fleet: fleet(&["B789"]),
            objectives: vec![
                Objective::PassengersCarried(200_000),
                Objective::NetProfit(10_000_000.0),
            ],
        },
        Scenario {
            id: "turnaround".into(),
            name: "Turnaround".into(),
            description: "A struggling carrier with little cash and a bruised name.".into(),
            airline_name: "Second Wind Air".into(),
            home_hub: "DEN".into(),
            starting_cash: 600_000.0,
            starting_reputation: 25,
            starting_fleet: fleet(&["A220", "A320"]),
            objectives: vec![Objective::Reputation(60), Objective::NetProfit(1_000_000.0)],
        },
    ]
}

/// Look up a built-in scenario by id.
pub fn find(id: &str) -> Option<Scenario> {
    builtin().into_iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyline_logic::catalog::{ReferenceData, StaticCatalog};
    use std::collections::HashSet;

    #[test]
    fn test_builtin_ids_are_unique() {
        let ids: HashSet<String> = builtin().into_iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), builtin().len());
    }

    #[test]
    fn test_builtin_scenarios_reference_catalog_data() {
        let catalog = StaticCatalog::builtin().unwrap();
        for scenario in builtin() {
            assert!(catalog.airport(&scenario.home_hub).is_some(), "{}", scenario.id);
            for code in &scenario.starting_fleet {
                assert!(catalog.aircraft_type(code).is_some(), "{} {}", scenario.id, code);
            }
            assert!(!scenario.objectives.is_empty());
        }
    }

    #[test]
    fn test_find() {
        assert_eq!(find("hub-builder").unwrap().home_hub, "ATL");
        assert!(find("nope").is_none());
    }

    #[test]
    fn test_scenario_json() {
        let json = r#"{
            "id": "custom",
            "name": "Custom",
            "description": "",
            "airline_name": "Test Air",
            "home_hub": "SEA",
            "starting_cash": 1000000.0,
            "starting_reputation": 50,
            "starting_fleet": ["A320"],
            "objectives": [{"ActiveRoutes": 2}, {"Reputation": 60}]
        }"#;
        let scenario: Scenario = serde_json::from_str(json).unwrap();
        assert_eq!(scenario.objectives, vec![Objective::ActiveRoutes(2), Objective::Reputation(60)]);
        assert_eq!(scenario.objective_descriptions()[0], "Operate 2 active routes");
    }
}
