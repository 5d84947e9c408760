//! Data models for demon farming calculations and the unit catalog

/// Raw inputs to a forward conversion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionInput {
    pub unit_value: f64, // HP per unit
    pub unit_count: u64,
    pub converter_count: u64, // Pit Lords available
}

/// Result of sacrificing a stack to Pit Lords
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionResult {
    pub input: ConversionInput,
    pub total_hp_pool: f64,
    pub max_demons_from_hp: f64,
    pub max_demons_from_lords: f64,
    pub actual_demons_gained: f64,
    pub needed_pit_lords: u64,
    pub wasted_hp: f64,
    pub perfect_units: u64,
    pub perfect_pool: f64,
    pub perfect_converters: u64,
}

/// Units and Pit Lords required to raise a target number of demons
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReverseResult {
    pub target_demons: u64,
    pub unit_value: f64,
    pub needed_units: u64,
    pub needed_pit_lords: u64,
    pub actual_hp_pool: f64,
    pub actual_demons_yield: f64,
    pub wasted_hp: f64,
    pub total_gold_cost: f64,
    pub gold_per_demon: f64, // 0 means "not applicable"
}

/// Gold side of a conversion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Economics {
    pub unit_cost: f64,
    pub total_cost: f64,
    pub cost_per_demon: f64,
    /// Positive = cheaper than recruiting demons directly
    pub profit_vs_market: Option<f64>,
}

/// One row of the stack-size distribution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartEntry {
    pub count: u64,
    pub demons: f64,
    pub waste: f64,
    pub pit_lords: u64,
    pub is_center: bool,
    pub is_boundary_marker: bool,
}

impl ChartEntry {
    pub fn is_perfect(&self) -> bool {
        self.count > 0 && self.waste == 0.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub id: i64,
    pub faction: String,
    pub name: String,
    pub hp: f64,
    pub is_upgraded: bool,
    pub gold_cost: f64, // 0 = unknown
}

/// A faction's units split into the base and upgraded tiers
#[derive(Debug, Clone, Default)]
pub struct FactionUnits {
    pub base: Vec<Unit>,
    pub upgraded: Vec<Unit>,
}

impl FactionUnits {
    pub fn is_empty(&self) -> bool {
        self.base.is_empty() && self.upgraded.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub id: i64,
    pub name: String,
    pub hp_bonus: i64,
}

/// A saved game with its Pit Lord count and First Aid level
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: i64,
    pub name: String,
    pub created_at: String,
    pub pit_lord_count: u64,
    pub first_aid_level: u32,
}

/// A row appended to the calculation log
#[derive(Debug, Clone)]
pub struct CalculationLog {
    pub session_id: i64,
    pub unit_name: String,
    pub base_hp: f64,
    pub modified_hp: f64,
    pub unit_count: u64,
    pub pit_lords: u64,
    pub demons_gained: f64,
    pub wasted_hp: f64,
}

/// Logged totals for one unit within a session
#[derive(Debug, Clone, PartialEq)]
pub struct UnitSummary {
    pub unit_name: String,
    pub total_units: u64,
    pub total_demons: f64,
    pub total_wasted_hp: f64,
}
