//! Economy constants and configuration loading
//!
//! The two conversion constants are validated once at startup and then
//! handed to the engine by value. Nothing here is global.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::CalcError;

pub const DEFAULT_DATABASE: &str = "demonic_calc.db";

/// HP consumed per demon raised
pub const DEMON_HP: u32 = 35;

/// HP a single Pit Lord converts per use
pub const PIT_LORD_GRIND_RATE: u32 = 50;

/// Gold price of recruiting one demon directly
pub const DEMON_GOLD_COST: f64 = 250.0;

/// Validated constants for one conversion economy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Economy {
    output_unit_cost: u32,
    converter_capacity: u32,
    market_price: f64,
}

impl Economy {
    pub fn new(output_unit_cost: u32, converter_capacity: u32, market_price: f64) -> Result<Self, CalcError> {
        if output_unit_cost == 0 {
            return Err(CalcError::InvalidConfig("output_unit_cost must be non-zero".to_string()));
        }
        if converter_capacity == 0 {
            return Err(CalcError::InvalidConfig("converter_capacity must be non-zero".to_string()));
        }
        if !market_price.is_finite() || market_price < 0.0 {
            return Err(CalcError::InvalidConfig(format!(
                "market_price must be a non-negative number, got {}",
                market_price
            )));
        }
        Ok(Self {
            output_unit_cost,
            converter_capacity,
            market_price,
        })
    }

    pub fn output_unit_cost(&self) -> u32 {
        self.output_unit_cost
    }

    pub fn converter_capacity(&self) -> u32 {
        self.converter_capacity
    }

    pub fn market_price(&self) -> f64 {
        self.market_price
    }
}

impl Default for Economy {
    fn default() -> Self {
        Self {
            output_unit_cost: DEMON_HP,
            converter_capacity: PIT_LORD_GRIND_RATE,
            market_price: DEMON_GOLD_COST,
        }
    }
}

/// `[economy]` table as written in the config file
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EconomySettings {
    pub demon_hp: u32,
    pub pit_lord_grind_rate: u32,
    pub demon_gold_cost: f64,
}

impl Default for EconomySettings {
    fn default() -> Self {
        Self {
            demon_hp: DEMON_HP,
            pit_lord_grind_rate: PIT_LORD_GRIND_RATE,
            demon_gold_cost: DEMON_GOLD_COST,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub economy: EconomySettings,
    pub database: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&contents).with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Built-in defaults when no file is given
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn economy(&self) -> Result<Economy, CalcError> {
        Economy::new(
            self.economy.demon_hp,
            self.economy.pit_lord_grind_rate,
            self.economy.demon_gold_cost,
        )
    }

    /// Database path, preferring an explicit override
    pub fn database_path(&self, cli_override: Option<PathBuf>) -> PathBuf {
        cli_override
            .or_else(|| self.database.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE))
    }
}
