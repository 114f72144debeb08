//! Scenario objectives: threshold predicates over airline state.
//!
//! Objectives hold no state of their own. The session re-checks them after
//! every turn and latches the win the first time all of them hold.

use serde::{Deserialize, Serialize};

use crate::snapshot::AirlineSnapshot;

/// A single scenario goal. Each variant carries its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Objective {
    /// Cumulative passengers carried reaches the target.
    PassengersCarried(u64),
    /// Cumulative operating profit reaches the target.
    NetProfit(f64),
    /// Number of active routes reaches the target.
    ActiveRoutes(u32),
    /// Reputation reaches the target.
    Reputation(i32),
}

impl Objective {
    pub fn is_met(&self, airline: &AirlineSnapshot) -> bool {
        match *self {
            Objective::PassengersCarried(target) => airline.passengers_carried >= target,
            Objective::NetProfit(target) => airline.net_profit >= target,
            Objective::ActiveRoutes(target) => airline.active_routes >= target,
            Objective::Reputation(target) => airline.reputation >= target,
        }
    }

    /// Fraction of the way to the target, in [0, 1].
    pub fn progress(&self, airline: &AirlineSnapshot) -> f64 {
        let (current, target) = match *self {
            Objective::PassengersCarried(target) => (airline.passengers_carried as f64, target as f64),
            Objective::NetProfit(target) => (airline.net_profit, target),
            Objective::ActiveRoutes(target) => (airline.active_routes as f64, target as f64),
            Objective::Reputation(target) => (airline.reputation as f64, target as f64),
        };
        if self.is_met(airline) {
            return 1.0;
        }
        if target <= 0.0 {
            return 0.0;
        }
        (current / target).clamp(0.0, 1.0)
    }

    pub fn describe(&self) -> String {
        match *self {
            Objective::PassengersCarried(target) => format!("Carry {} passengers", target),
            Objective::NetProfit(target) => format!("Earn ${:.0} in net profit", target),
            Objective::ActiveRoutes(target) => format!("Operate {} active routes", target),
            Objective::Reputation(target) => format!("Reach a reputation of {}", target),
        }
    }
}

/// True iff every objective holds. An empty list is trivially satisfied.
pub fn check_objectives(airline: &AirlineSnapshot, objectives: &[Objective]) -> bool {
    objectives.iter().all(|objective| objective.is_met(airline))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn airline() -> AirlineSnapshot {
        AirlineSnapshot {
            day: 30,
            cash: 2_000_000.0,
            reputation: 60,
            passengers_carried: 12_000,
            net_profit: 750_000.0,
            active_routes: 3,
            fleet_size: 3,
        }
    }

    #[test]
    fn test_each_kind() {
        let a = airline();
        assert!(Objective::PassengersCarried(12_000).is_met(&a));
        assert!(!Objective::PassengersCarried(12_001).is_met(&a));
        assert!(Objective::NetProfit(500_000.0).is_met(&a));
        assert!(!Objective::NetProfit(1_000_000.0).is_met(&a));
        assert!(Objective::ActiveRoutes(3).is_met(&a));
        assert!(!Objective::ActiveRoutes(4).is_met(&a));
        assert!(Objective::Reputation(60).is_met(&a));
        assert!(!Objective::Reputation(61).is_met(&a));
    }

    #[test]
    fn test_check_requires_all() {
        let a = airline();
        let objectives = [Objective::ActiveRoutes(3), Objective::Reputation(60)];
        assert!(check_objectives(&a, &objectives));

        let objectives = [Objective::ActiveRoutes(3), Objective::Reputation(90)];
        assert!(!check_objectives(&a, &objectives));
    }

    #[test]
    fn test_empty_objectives_are_met() {
        assert!(check_objectives(&airline(), &[]));
    }

    #[test]
    fn test_check_is_idempotent() {
        let a = airline();
        let objectives = [Objective::PassengersCarried(5_000), Objective::NetProfit(1e6)];
        let first = check_objectives(&a, &objectives);
        assert_eq!(first, check_objectives(&a, &objectives));
        assert_eq!(first, check_objectives(&a, &objectives));
    }

    #[test]
    fn test_progress() {
        let a = airline();
        assert_eq!(Objective::ActiveRoutes(6).progress(&a), 0.5);
        assert_eq!(Objective::Reputation(50).progress(&a), 1.0);
        assert_eq!(Objective::NetProfit(1_500_000.0).progress(&a), 0.5);
        let broke = AirlineSnapshot {
            net_profit: -10.0,
            ..a
        };
        assert_eq!(Objective::NetProfit(1_000.0).progress(&broke), 0.0);
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Objective::ActiveRoutes(5)).unwrap();
        assert_eq!(json, r#"{"ActiveRoutes":5}"#);
        let parsed: Objective = serde_json::from_str(r#"{"Reputation":80}"#).unwrap();
        assert_eq!(parsed, Objective::Reputation(80));
    }

    #[test]
    fn test_describe() {
        assert_eq!(Objective::ActiveRoutes(4).describe(), "Operate 4 active routes");
        assert_eq!(Objective::PassengersCarried(100).describe(), "Carry 100 passengers");
    }
}
