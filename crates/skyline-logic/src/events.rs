//! Event catalog: categories, severity tiers and the template tables.
//!
//! Events disrupt (or occasionally help) the airline. Each one is built from
//! an immutable template picked by (category, severity). The tables here are
//! plain data so the generator stays a lookup plus a random pick.

use serde::{Deserialize, Serialize};

use crate::constants::probabilities::CASH_IMPACT_RATE;

// ============================================================================
// CATEGORIES
// ============================================================================

/// Broad kind of event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EventCategory {
    Weather,
    Economic,
    Market,
    Operational,
    PositivePr,
    NegativePr,
}

/// Cumulative upper bounds for the category roll, in table order.
pub const CATEGORY_TABLE: [(f64, EventCategory); 6] = [
    (0.30, EventCategory::Weather),
    (0.50, EventCategory::Economic),
    (0.70, EventCategory::Market),
    (0.85, EventCategory::Operational),
    (0.92, EventCategory::PositivePr),
    (1.00, EventCategory::NegativePr),
];

impl EventCategory {
    pub const ALL: [EventCategory; 6] = [
        EventCategory::Weather,
        EventCategory::Economic,
        EventCategory::Market,
        EventCategory::Operational,
        EventCategory::PositivePr,
        EventCategory::NegativePr,
    ];

    /// Pick a category from a uniform roll in [0, 1).
    pub fn from_roll(roll: f64) -> Self {
        pick_cumulative(&CATEGORY_TABLE, roll).unwrap_or(EventCategory::NegativePr)
    }

    /// Declared probability of this category.
    pub fn weight(self) -> f64 {
        table_weight(&CATEGORY_TABLE, self)
    }

    /// Weather and market losses scale with the cash on hand instead of a
    /// fixed amount from the template.
    pub fn scales_with_cash(self) -> bool {
        matches!(self, EventCategory::Weather | EventCategory::Market)
    }

    pub fn label(self) -> &'static str {
        match self {
            EventCategory::Weather => "Weather",
            EventCategory::Economic => "Economic",
            EventCategory::Market => "Market",
            EventCategory::Operational => "Operational",
            EventCategory::PositivePr => "Positive PR",
            EventCategory::NegativePr => "Negative PR",
        }
    }
}

// ============================================================================
// SEVERITY
// ============================================================================

/// Ordinal impact tier. Later variants are rarer and hit harder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Minor,
    Moderate,
    Major,
    Critical,
}

/// Cumulative upper bounds for the severity roll.
pub const SEVERITY_TABLE: [(f64, Severity); 4] = [
    (0.50, Severity::Minor),
    (0.80, Severity::Moderate),
    (0.95, Severity::Major),
    (1.00, Severity::Critical),
];

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Minor,
        Severity::Moderate,
        Severity::Major,
        Severity::Critical,
    ];

    pub fn from_roll(roll: f64) -> Self {
        pick_cumulative(&SEVERITY_TABLE, roll).unwrap_or(Severity::Critical)
    }

    pub fn weight(self) -> f64 {
        table_weight(&SEVERITY_TABLE, self)
    }

    /// Scale factor for cash-proportional losses.
    pub fn multiplier(self) -> f64 {
        match self {
            Severity::Minor => 1.0,
            Severity::Moderate => 2.0,
            Severity::Major => 4.0,
            Severity::Critical => 8.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Minor => "Minor",
            Severity::Moderate => "Moderate",
            Severity::Major => "Major",
            Severity::Critical => "Critical",
        }
    }
}

fn pick_cumulative<T: Copy>(table: &[(f64, T)], roll: f64) -> Option<T> {
    table
        .iter()
        .find(|(upper, _)| roll < *upper)
        .or(table.last())
        .map(|(_, value)| *value)
}

fn table_weight<T: Copy + PartialEq>(table: &[(f64, T)], value: T) -> f64 {
    let mut lower = 0.0;
    for (upper, entry) in table {
        if *entry == value {
            return upper - lower;
        }
        lower = *upper;
    }
    0.0
}

// ============================================================================
// EVENTS
// ============================================================================

/// A concrete event. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    pub id: u64,
    pub category: EventCategory,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    /// Day the event occurred.
    pub day: u32,
    /// Days the event stays in effect, counting its first day. Always >= 1.
    pub duration_days: u32,
    /// Multiplies passenger demand while active. Always > 0.
    pub demand_multiplier: f64,
    /// Multiplies operating cost while active. Always > 0.
    pub cost_multiplier: f64,
    /// Applied to cash once, on the day the event occurs.
    pub financial_impact: f64,
    /// Applied to reputation once, on the day the event occurs.
    pub reputation_delta: i32,
}

impl GameEvent {
    pub fn is_positive(&self) -> bool {
        self.category == EventCategory::PositivePr
    }

    /// Last day (inclusive) on which the event's multipliers apply.
    pub fn last_active_day(&self) -> u32 {
        self.day + self.duration_days.max(1) - 1
    }
}

/// Immutable recipe for a [`GameEvent`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub demand_multiplier: f64,
    pub cost_multiplier: f64,
    pub duration_days: u32,
    pub reputation_delta: i32,
    /// One-time cash effect for categories that don't scale with cash.
    pub fixed_impact: f64,
}

impl EventTemplate {
    /// One-time cash effect of this template for the given category, severity
    /// and cash on hand. Negative cash never turns a loss into a gain.
    pub fn financial_impact(&self, category: EventCategory, severity: Severity, cash: f64) -> f64 {
        if category.scales_with_cash() {
            -cash.max(0.0) * CASH_IMPACT_RATE * severity.multiplier()
        } else {
            self.fixed_impact
        }
    }

    /// Stamp the template into a concrete event.
    pub fn instantiate(
        &self,
        id: u64,
        category: EventCategory,
        severity: Severity,
        day: u32,
        cash: f64,
    ) -> GameEvent {
        GameEvent {
            id,
            category,
            severity,
            title: self.title.to_string(),
            description: self.description.to_string(),
            day,
            duration_days: self.duration_days.max(1),
            demand_multiplier: self.demand_multiplier,
            cost_multiplier: self.cost_multiplier,
            financial_impact: self.financial_impact(category, severity, cash),
            reputation_delta: self.reputation_delta,
        }
    }
}

const fn t(
    title: &'static str,
    description: &'static str,
    demand_multiplier: f64,
    cost_multiplier: f64,
    duration_days: u32,
    reputation_delta: i32,
    fixed_impact: f64,
) -> EventTemplate {
    EventTemplate {
        title,
        description,
        demand_multiplier,
        cost_multiplier,
        duration_days,
        reputation_delta,
        fixed_impact,
    }
}

// ============================================================================
// TEMPLATE TABLES
// ============================================================================

// Weather: losses scale with cash, fixed_impact unused.
const WEATHER: [&[EventTemplate]; 4] = [
    &[
        t("Morning Fog", "Low visibility slows departures at several airports.", 0.95, 1.03, 1, 0, 0.0),
        t("Gusty Crosswinds", "Strong crosswinds force longer taxi times.", 0.97, 1.05, 1, 0, 0.0),
    ],
    &[
        t("Thunderstorm Line", "A band of storms disrupts the schedule.", 0.88, 1.10, 2, -1, 0.0),
        t("Snow Squalls", "De-icing queues stretch across the morning bank.", 0.85, 1.12, 2, -1, 0.0),
    ],
    &[
        t("Winter Storm", "Heavy snow cancels a large share of flights.", 0.70, 1.25, 3, -2, 0.0),
        t("Tropical Storm", "Coastal airports restrict operations.", 0.72, 1.22, 3, -2, 0.0),
    ],
    &[
        t("Hurricane Landfall", "Airports along the storm track close entirely.", 0.45, 1.50, 5, -4, 0.0),
        t("Volcanic Ash Cloud", "Airspace closures ground flights for days.", 0.40, 1.45, 6, -3, 0.0),
    ],
];

const ECONOMIC: [&[EventTemplate]; 4] = [
    &[
        t("Fuel Price Uptick", "Jet fuel prices creep upward.", 1.00, 1.05, 5, 0, 0.0),
        t("Consumer Confidence Dip", "Travellers hold off on discretionary trips.", 0.96, 1.00, 4, 0, 0.0),
    ],
    &[
        t("Fuel Price Spike", "Refinery outages push fuel prices sharply higher.", 1.00, 1.15, 7, 0, 0.0),
        t("Currency Swing", "Exchange rates move against the airline.", 0.93, 1.05, 6, 0, -25_000.0),
    ],
    &[
        t("Regional Recession", "Business travel budgets are cut.", 0.80, 1.00, 14, 0, -100_000.0),
        t("Interest Rate Hike", "Financing costs rise across the fleet.", 0.90, 1.08, 10, 0, -150_000.0),
    ],
    &[
        t("Financial Crisis", "Credit markets freeze and demand collapses.", 0.60, 1.10, 21, -2, -400_000.0),
        t("Oil Supply Shock", "Fuel prices surge to record highs.", 0.85, 1.40, 14, 0, -250_000.0),
    ],
];

// Market: losses scale with cash, fixed_impact unused.
const MARKET: [&[EventTemplate]; 4] = [
    &[
        t("Competitor Fare Sale", "A rival undercuts fares for a long weekend.", 0.94, 1.00, 3, 0, 0.0),
        t("Conference Season", "Trade shows fill hotels and flights.", 1.06, 1.00, 3, 0, 0.0),
    ],
    &[
        t("New Competitor Route", "A rival launches service on overlapping routes.", 0.88, 1.00, 7, 0, 0.0),
        t("Airport Slot Auction", "Slot costs rise after an auction.", 1.00, 1.04, 5, 0, 0.0),
    ],
    &[
        t("Low-Cost Carrier Entry", "A budget carrier enters the home market.", 0.78, 1.00, 14, -1, 0.0),
        t("Price War", "Carriers slash fares to defend share.", 0.82, 0.98, 10, 0, 0.0),
    ],
    &[
        t("Industry Consolidation", "A merger reshapes the competitive landscape.", 0.65, 1.05, 21, -2, 0.0),
        t("Demand Collapse", "Travel demand falls off a cliff.", 0.55, 1.00, 14, -3, 0.0),
    ],
];

const OPERATIONAL: [&[EventTemplate]; 4] = [
    &[
        t("Ground Equipment Fault", "A broken tug delays pushbacks.", 1.00, 1.03, 1, 0, -15_000.0),
        t("Crew Scheduling Glitch", "Reserve crews are called in at short notice.", 0.98, 1.04, 1, -1, -20_000.0),
    ],
    &[
        t("Aircraft Technical Delay", "An unscheduled repair ripples through the day.", 0.95, 1.08, 2, -2, -75_000.0),
        t("IT System Outage", "Check-in systems go down for hours.", 0.93, 1.06, 1, -3, -120_000.0),
    ],
    &[
        t("Engine Inspection Directive", "Regulators order urgent engine inspections.", 0.90, 1.20, 5, -3, -400_000.0),
        t("Crew Strike", "Cabin crew walk out over pay.", 0.60, 1.10, 4, -5, -350_000.0),
    ],
    &[
        t("Fleet Grounding Order", "A safety directive grounds part of the fleet.", 0.45, 1.35, 7, -8, -1_200_000.0),
        t("Runway Incident", "An aircraft leaves the runway; investigations follow.", 0.70, 1.25, 5, -10, -900_000.0),
    ],
];

const POSITIVE_PR: [&[EventTemplate]; 4] = [
    &[
        t("Friendly Crew Goes Viral", "A video of a kind flight attendant spreads online.", 1.03, 1.00, 3, 2, 0.0),
        t("On-Time Award", "The airline tops the monthly punctuality table.", 1.02, 1.00, 5, 2, 10_000.0),
    ],
    &[
        t("Travel Blog Praise", "A popular blog raves about the service.", 1.06, 1.00, 5, 4, 0.0),
        t("Charity Flight Coverage", "A donated charity flight draws warm coverage.", 1.05, 1.00, 4, 5, -20_000.0),
    ],
    &[
        t("Best Regional Airline Award", "Industry judges name the airline best in region.", 1.12, 1.00, 10, 8, 50_000.0),
        t("Celebrity Endorsement", "A celebrity praises the airline to millions.", 1.15, 1.00, 7, 6, 0.0),
    ],
    &[
        t("Airline of the Year", "The airline wins the industry's top honour.", 1.25, 1.00, 14, 12, 250_000.0),
        t("Heroic Emergency Landing", "A crew's skill saves a stricken flight.", 1.20, 1.00, 10, 15, 0.0),
    ],
];

const NEGATIVE_PR: [&[EventTemplate]; 4] = [
    &[
        t("Lost Luggage Complaints", "Bags go missing on a busy weekend.", 0.98, 1.00, 3, -2, -5_000.0),
        t("Rude Agent Video", "A gate agent's outburst is filmed.", 0.97, 1.00, 3, -3, 0.0),
    ],
    &[
        t("Overbooking Incident", "Passengers are bumped from a full flight.", 0.93, 1.00, 5, -5, -50_000.0),
        t("Food Safety Complaint", "Passengers fall ill after an inflight meal.", 0.94, 1.02, 4, -4, -30_000.0),
    ],
    &[
        t("Passenger Removal Scandal", "A forcible removal makes headlines.", 0.85, 1.00, 10, -10, -250_000.0),
        t("Data Breach", "Customer records leak online.", 0.88, 1.05, 14, -8, -500_000.0),
    ],
    &[
        t("Safety Violation Exposé", "Investigators reveal skipped safety checks.", 0.70, 1.10, 21, -18, -1_500_000.0),
        t("Executive Scandal", "The CEO resigns amid allegations.", 0.75, 1.00, 14, -15, -750_000.0),
    ],
];

/// Templates available for a (category, severity) pair. Never empty.
pub fn templates_for(category: EventCategory, severity: Severity) -> &'static [EventTemplate] {
    let by_severity = match category {
        EventCategory::Weather => &WEATHER,
        EventCategory::Economic => &ECONOMIC,
        EventCategory::Market => &MARKET,
        EventCategory::Operational => &OPERATIONAL,
        EventCategory::PositivePr => &POSITIVE_PR,
        EventCategory::NegativePr => &NEGATIVE_PR,
    };
    by_severity[severity as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_roll_boundaries() {
        assert_eq!(EventCategory::from_roll(0.0), EventCategory::Weather);
        assert_eq!(EventCategory::from_roll(0.2999), EventCategory::Weather);
        assert_eq!(EventCategory::from_roll(0.30), EventCategory::Economic);
        assert_eq!(EventCategory::from_roll(0.50), EventCategory::Market);
        assert_eq!(EventCategory::from_roll(0.70), EventCategory::Operational);
        assert_eq!(EventCategory::from_roll(0.85), EventCategory::PositivePr);
        assert_eq!(EventCategory::from_roll(0.92), EventCategory::NegativePr);
        assert_eq!(EventCategory::from_roll(0.9999), EventCategory::NegativePr);
    }

    #[test]
    fn test_severity_roll_boundaries() {
        assert_eq!(Severity::from_roll(0.0), Severity::Minor);
        assert_eq!(Severity::from_roll(0.4999), Severity::Minor);
        assert_eq!(Severity::from_roll(0.50), Severity::Moderate);
        assert_eq!(Severity::from_roll(0.80), Severity::Major);
        assert_eq!(Severity::from_roll(0.95), Severity::Critical);
        assert_eq!(Severity::from_roll(0.9999), Severity::Critical);
    }

    #[test]
    fn test_weights_sum_to_one() {
        let categories: f64 = EventCategory::ALL.iter().map(|c| c.weight()).sum();
        let severities: f64 = Severity::ALL.iter().map(|s| s.weight()).sum();
        assert!((categories - 1.0).abs() < 1e-9);
        assert!((severities - 1.0).abs() < 1e-9);
        assert!((EventCategory::Operational.weight() - 0.15).abs() < 1e-9);
        assert!((Severity::Critical.weight() - 0.05).abs() < 1e-9);
    }

    #[test]
    fn test_severity_is_ordinal() {
        assert!(Severity::Minor < Severity::Moderate);
        assert!(Severity::Major < Severity::Critical);
        let multipliers: Vec<f64> = Severity::ALL.iter().map(|s| s.multiplier()).collect();
        assert_eq!(multipliers, vec![1.0, 2.0, 4.0, 8.0]);
    }

    #[test]
    fn test_every_pair_has_valid_templates() {
        for category in EventCategory::ALL {
            for severity in Severity::ALL {
                let templates = templates_for(category, severity);
                assert!(!templates.is_empty(), "{:?}/{:?}", category, severity);
                for template in templates {
                    assert!(template.duration_days >= 1, "{}", template.title);
                    assert!(template.demand_multiplier > 0.0, "{}", template.title);
                    assert!(template.cost_multiplier > 0.0, "{}", template.title);
                }
            }
        }
    }

    #[test]
    fn test_cash_scaled_impact() {
        let template = templates_for(EventCategory::Weather, Severity::Major)[0];
        let impact = template.financial_impact(EventCategory::Weather, Severity::Major, 1_000_000.0);
        assert!((impact - (-80_000.0)).abs() < 1e-6);

        let market = templates_for(EventCategory::Market, Severity::Minor)[0];
        let impact = market.financial_impact(EventCategory::Market, Severity::Minor, 500_000.0);
        assert!((impact - (-10_000.0)).abs() < 1e-6);
    }

    #[test]
    fn test_negative_cash_has_no_scaled_loss() {
        let template = templates_for(EventCategory::Weather, Severity::Critical)[0];
        let impact = template.financial_impact(EventCategory::Weather, Severity::Critical, -50_000.0);
        assert_eq!(impact, 0.0);

        let minor = templates_for(EventCategory::Weather, Severity::Minor)[0];
        let impact = minor.financial_impact(EventCategory::Weather, Severity::Minor, -1_000_000.0);
        assert!(impact <= 0.0);
        assert_eq!(impact, 0.0);
    }

    #[test]
    fn test_fixed_impact_ignores_cash() {
        let template = templates_for(EventCategory::Operational, Severity::Critical)[0];
        let poor = template.financial_impact(EventCategory::Operational, Severity::Critical, 10.0);
        let rich = template.financial_impact(EventCategory::Operational, Severity::Critical, 1e9);
        assert_eq!(poor, template.fixed_impact);
        assert_eq!(rich, template.fixed_impact);
    }

    #[test]
    fn test_instantiate_stamps_day() {
        let template = templates_for(EventCategory::NegativePr, Severity::Moderate)[0];
        let event = template.instantiate(7, EventCategory::NegativePr, Severity::Moderate, 12, 0.0);
        assert_eq!(event.id, 7);
        assert_eq!(event.day, 12);
        assert_eq!(event.title, template.title);
        assert_eq!(event.last_active_day(), 12 + template.duration_days - 1);
        assert!(!event.is_positive());
    }
}
