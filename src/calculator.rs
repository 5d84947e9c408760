//! Demon farming arithmetic
//!
//! Converts unit HP into demons through Pit Lords, finds the smallest stack
//! that converts without waste, and runs the same math in reverse for a
//! target demon count. Everything here is pure; the economy constants are
//! injected through [`Calculator::new`].

use std::fmt;

use crate::config::Economy;
use crate::error::CalcError;
use crate::models::{ConversionInput, ConversionResult, Economics, ReverseResult};

/// HP bonus per First Aid level, in percent
pub const FIRST_AID_PERCENT_PER_LEVEL: u32 = 10;

#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator {
    economy: Economy,
}

impl Calculator {
    pub fn new(economy: Economy) -> Self {
        Self { economy }
    }

    /// Sacrifice `unit_count` units to `converter_count` Pit Lords
    ///
    /// The Pit Lords are a hard cap: the gained demons are the smaller of what
    /// the pool and what the lords can convert. `needed_pit_lords` is always
    /// computed for the whole pool, whatever the caller actually has.
    pub fn convert(&self, input: ConversionInput) -> ConversionResult {
        let demon_hp = f64::from(self.economy.output_unit_cost());
        let grind_rate = f64::from(self.economy.converter_capacity());

        let total_hp_pool = input.unit_count as f64 * input.unit_value;
        let max_demons_from_hp = total_hp_pool / demon_hp;
        let max_demons_from_lords = (input.converter_count as f64 * grind_rate) / demon_hp;
        let (perfect_units, perfect_pool, perfect_converters) = self.perfect_stack(input.unit_value);

        ConversionResult {
            input,
            total_hp_pool,
            max_demons_from_hp,
            max_demons_from_lords,
            actual_demons_gained: max_demons_from_hp.min(max_demons_from_lords),
            needed_pit_lords: ceil_count(total_hp_pool / grind_rate),
            // `%` on f64 is the truncated remainder and keeps the dividend's sign
            wasted_hp: total_hp_pool % demon_hp,
            perfect_units,
            perfect_pool,
            perfect_converters,
        }
    }

    /// Smallest stack whose pool is a whole number of demons
    ///
    /// The gcd runs on the truncated HP, while the pool uses the real value,
    /// so a fractional HP can leave a small remainder in `perfect_pool`.
    fn perfect_stack(&self, unit_value: f64) -> (u64, f64, u64) {
        let whole_hp = unit_value.trunc();
        if !whole_hp.is_finite() || whole_hp == 0.0 {
            return (0, 0.0, 0);
        }

        let demon_hp = u64::from(self.economy.output_unit_cost());
        let divisor = gcd(whole_hp.abs() as u64, demon_hp);
        let units = demon_hp / divisor;
        let pool = units as f64 * unit_value;
        let lords = ceil_count(pool / f64::from(self.economy.converter_capacity()));

        (units, pool, lords)
    }

    /// Units and Pit Lords needed to raise `target_demons`
    pub fn reverse_convert(
        &self,
        target_demons: u64,
        unit_value: f64,
        unit_cost: f64,
    ) -> Result<ReverseResult, CalcError> {
        // Written as a negation so NaN is rejected too
        if !(unit_value > 0.0) {
            return Err(CalcError::InvalidInput(format!(
                "unit HP must be greater than zero, got {}",
                unit_value
            )));
        }

        let demon_hp = f64::from(self.economy.output_unit_cost());
        let needed_pool = target_demons as f64 * demon_hp;
        let needed_units = ceil_count(needed_pool / unit_value);
        let actual_hp_pool = needed_units as f64 * unit_value;
        let actual_demons_yield = actual_hp_pool / demon_hp;
        let economics = self.economics(needed_units, unit_cost, actual_demons_yield);

        Ok(ReverseResult {
            target_demons,
            unit_value,
            needed_units,
            needed_pit_lords: ceil_count(actual_hp_pool / f64::from(self.economy.converter_capacity())),
            actual_hp_pool,
            actual_demons_yield,
            wasted_hp: actual_hp_pool % demon_hp,
            total_gold_cost: economics.total_cost,
            gold_per_demon: economics.cost_per_demon,
        })
    }

    /// Gold spent per demon compared to recruiting demons directly
    ///
    /// A non-positive `unit_cost` means the price is unknown, which zeroes the
    /// totals. `cost_per_demon` of 0 means "not applicable", never "free".
    pub fn economics(&self, unit_count: u64, unit_cost: f64, demons: f64) -> Economics {
        let total_cost = if unit_cost > 0.0 {
            unit_count as f64 * unit_cost
        } else {
            0.0
        };
        let cost_per_demon = if demons > 0.0 && total_cost > 0.0 {
            total_cost / demons
        } else {
            0.0
        };
        let profit_vs_market = (cost_per_demon > 0.0).then(|| self.economy.market_price() - cost_per_demon);

        Economics {
            unit_cost: unit_cost.max(0.0),
            total_cost,
            cost_per_demon,
            profit_vs_market,
        }
    }
}

/// Unit HP after artifacts and First Aid
pub fn modified_unit_value(base_hp: f64, artifact_bonus: i64, first_aid_level: u32) -> f64 {
    let percent = 100 + FIRST_AID_PERCENT_PER_LEVEL * first_aid_level;
    (base_hp + artifact_bonus as f64) * f64::from(percent) / 100.0
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

// Negative and NaN quotients count as zero
fn ceil_count(value: f64) -> u64 {
    value.ceil().max(0.0) as u64
}

/// HP adjustments applied in game mode
#[derive(Debug, Clone, Copy)]
pub struct HpModifiers {
    pub base_hp: f64,
    pub artifact_bonus: i64,
    pub first_aid_level: u32,
}

/// Forward conversion, ready to print
#[derive(Debug)]
pub struct ConversionReport {
    pub unit_name: String,
    pub modifiers: Option<HpModifiers>,
    pub result: ConversionResult,
    pub economics: Economics,
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.result;

        writeln!(f, "=== Calculation Results ===")?;
        writeln!(f, "Input:")?;
        writeln!(f, "  Units:            {} x {}", r.input.unit_count, self.unit_name)?;
        match &self.modifiers {
            Some(m) => {
                writeln!(f, "  Base HP:          {:.1}", m.base_hp)?;
                writeln!(f, "  Artifact bonus:   +{}", m.artifact_bonus)?;
                writeln!(
                    f,
                    "  First Aid level:  {} ({}%)",
                    m.first_aid_level,
                    m.first_aid_level * FIRST_AID_PERCENT_PER_LEVEL
                )?;
                writeln!(f, "  Modified HP:      {:.2}", r.input.unit_value)?;
            }
            None => writeln!(f, "  Unit HP:          {}", r.input.unit_value)?,
        }
        writeln!(f, "  Total HP pool:    {:.0}", r.total_hp_pool)?;
        writeln!(f, "  Pit Lords used:   {}", r.input.converter_count)?;
        writeln!(f)?;

        writeln!(f, "Yield:")?;
        writeln!(f, "  Max (from HP):    {:.2}", r.max_demons_from_hp)?;
        writeln!(f, "  Max (from Lords): {:.2}", r.max_demons_from_lords)?;
        writeln!(f, "  ACTUALLY GAINED:  {:.2} demons", r.actual_demons_gained)?;
        writeln!(f)?;

        writeln!(f, "Optimization:")?;
        writeln!(f, "  Wasted HP:        {:.2} (remainder)", r.wasted_hp)?;
        writeln!(f, "  Needed Lords:     {} (for this stack)", r.needed_pit_lords)?;
        writeln!(
            f,
            "  Perfect stack:    {} units (for {:.0} HP, {} Lords)",
            r.perfect_units, r.perfect_pool, r.perfect_converters
        )?;

        if self.economics.total_cost > 0.0 {
            writeln!(f)?;
            write_economics(f, &self.economics)?;
        }

        Ok(())
    }
}

/// Reverse conversion, ready to print
#[derive(Debug)]
pub struct ReverseReport {
    pub unit_name: String,
    pub result: ReverseResult,
    pub economics: Economics,
}

impl fmt::Display for ReverseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.result;

        writeln!(f, "=== Reverse Calculator Results ===")?;
        writeln!(f, "Target:")?;
        writeln!(f, "  Desired demons:   {}", r.target_demons)?;
        writeln!(f)?;

        writeln!(f, "Requirements:")?;
        writeln!(f, "  Unit to sacrifice: {} (HP: {})", self.unit_name, r.unit_value)?;
        writeln!(f, "  Units needed:     {}", r.needed_units)?;
        writeln!(f, "  Pit Lords needed: {}", r.needed_pit_lords)?;
        writeln!(f)?;

        writeln!(f, "Yield & waste:")?;
        writeln!(f, "  Actual HP pool:   {:.0}", r.actual_hp_pool)?;
        writeln!(f, "  Actual demons:    {:.2}", r.actual_demons_yield)?;
        writeln!(f, "  Wasted HP:        {:.2} (remainder)", r.wasted_hp)?;

        if r.total_gold_cost > 0.0 {
            writeln!(f)?;
            write_economics(f, &self.economics)?;
        }

        Ok(())
    }
}

fn write_economics(f: &mut fmt::Formatter<'_>, economics: &Economics) -> fmt::Result {
    writeln!(f, "Economics:")?;
    writeln!(f, "  Unit cost:        {:.0} gold", economics.unit_cost)?;
    writeln!(f, "  Total stack cost: {:.0} gold", economics.total_cost)?;
    writeln!(f, "  Cost per demon:   {:.0} gold", economics.cost_per_demon)?;
    match economics.profit_vs_market {
        Some(diff) if diff > 0.0 => writeln!(f, "  Profit vs buying: +{:.0} gold / demon", diff)?,
        Some(diff) => writeln!(f, "  Loss vs buying:   {:.0} gold / demon", diff)?,
        None => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc() -> Calculator {
        Calculator::default()
    }

    fn convert(unit_value: f64, unit_count: u64, converter_count: u64) -> ConversionResult {
        calc().convert(ConversionInput {
            unit_value,
            unit_count,
            converter_count,
        })
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn demons_sacrificed_with_plenty_of_lords() {
        let r = convert(35.0, 10, 100);
        assert_eq!(r.total_hp_pool, 350.0);
        assert_eq!(r.max_demons_from_hp, 10.0);
        assert!(approx(r.max_demons_from_lords, 5000.0 / 35.0));
        assert_eq!(r.actual_demons_gained, 10.0);
        assert_eq!(r.needed_pit_lords, 7);
        assert_eq!(r.wasted_hp, 0.0);
        assert_eq!(r.perfect_units, 1);
        assert_eq!(r.perfect_pool, 35.0);
        assert_eq!(r.perfect_converters, 1);
    }

    #[test]
    fn no_lords_means_no_demons() {
        let r = convert(10.0, 7, 0);
        assert_eq!(r.total_hp_pool, 70.0);
        assert_eq!(r.max_demons_from_hp, 2.0);
        assert_eq!(r.max_demons_from_lords, 0.0);
        assert_eq!(r.actual_demons_gained, 0.0);
        assert_eq!(r.needed_pit_lords, 2);
        assert_eq!(r.wasted_hp, 0.0);
        assert_eq!(r.perfect_units, 7);
        assert_eq!(r.perfect_pool, 70.0);
        assert_eq!(r.perfect_converters, 2);
    }

    #[test]
    fn lords_cap_the_yield() {
        let r = convert(100.0, 20, 3);
        assert_eq!(r.total_hp_pool, 2000.0);
        assert!(approx(r.actual_demons_gained, 150.0 / 35.0));
        assert_eq!(r.needed_pit_lords, 40);
        assert_eq!(r.wasted_hp, 5.0);
    }

    #[test]
    fn empty_stack_keeps_perfect_stack_fields() {
        let r = convert(35.0, 0, 0);
        assert_eq!(r.total_hp_pool, 0.0);
        assert_eq!(r.max_demons_from_hp, 0.0);
        assert_eq!(r.actual_demons_gained, 0.0);
        assert_eq!(r.needed_pit_lords, 0);
        assert_eq!(r.wasted_hp, 0.0);
        assert_eq!(r.perfect_units, 1);
        assert_eq!(r.perfect_pool, 35.0);
    }

    #[test]
    fn zero_hp_degenerates_without_panicking() {
        let r = convert(0.0, 12, 5);
        assert_eq!(r.total_hp_pool, 0.0);
        assert_eq!(r.actual_demons_gained, 0.0);
        assert_eq!((r.perfect_units, r.perfect_pool, r.perfect_converters), (0, 0.0, 0));

        // Truncates to zero as well
        let r = convert(0.5, 4, 1);
        assert_eq!(r.perfect_units, 0);
        assert_eq!(r.wasted_hp, 2.0);
    }

    #[test]
    fn fractional_hp_perfect_stack_is_approximate() {
        let r = convert(10.5, 7, 10);
        assert_eq!(r.perfect_units, 7);
        assert_eq!(r.perfect_pool, 73.5);
        assert_eq!(r.perfect_pool % 35.0, 3.5);
        assert_eq!(r.wasted_hp, 3.5);
    }

    #[test]
    fn actual_never_exceeds_either_maximum() {
        for hp in [1.0, 4.0, 13.0, 35.0, 90.0, 1000.0, 45.5] {
            for count in [0, 1, 6, 35, 101] {
                for lords in [0, 1, 3, 50] {
                    let r = convert(hp, count, lords);
                    assert!(r.actual_demons_gained <= r.max_demons_from_hp);
                    assert!(r.actual_demons_gained <= r.max_demons_from_lords);
                }
            }
        }
    }

    #[test]
    fn convert_is_deterministic() {
        let input = ConversionInput {
            unit_value: 13.0,
            unit_count: 29,
            converter_count: 4,
        };
        let calc = calc();
        assert_eq!(calc.convert(input), calc.convert(input));
    }

    #[test]
    fn alternate_economy_is_honoured() {
        let calc = Calculator::new(Economy::new(40, 100, 300.0).unwrap());
        let r = calc.convert(ConversionInput {
            unit_value: 30.0,
            unit_count: 4,
            converter_count: 1,
        });
        assert_eq!(r.max_demons_from_hp, 3.0);
        assert_eq!(r.actual_demons_gained, 2.5);
        assert_eq!(r.perfect_units, 4);
        assert_eq!(r.needed_pit_lords, 2);
    }

    #[test]
    fn reverse_from_target_demons() {
        let r = calc().reverse_convert(5, 10.0, 60.0).unwrap();
        assert_eq!(r.needed_units, 18);
        assert_eq!(r.actual_hp_pool, 180.0);
        assert!(approx(r.actual_demons_yield, 180.0 / 35.0));
        assert_eq!(r.needed_pit_lords, 4);
        assert_eq!(r.wasted_hp, 5.0);
        assert_eq!(r.total_gold_cost, 1080.0);
        assert!(approx(r.gold_per_demon, 210.0));
    }

    #[test]
    fn reverse_rejects_non_positive_hp() {
        assert!(matches!(
            calc().reverse_convert(1, 0.0, 10.0),
            Err(CalcError::InvalidInput(_))
        ));
        assert!(calc().reverse_convert(1, -4.0, 10.0).is_err());
        assert!(calc().reverse_convert(1, f64::NAN, 10.0).is_err());
    }

    #[test]
    fn reverse_without_cost_reports_no_gold() {
        let r = calc().reverse_convert(3, 35.0, 0.0).unwrap();
        assert_eq!(r.needed_units, 3);
        assert_eq!(r.wasted_hp, 0.0);
        assert_eq!(r.total_gold_cost, 0.0);
        assert_eq!(r.gold_per_demon, 0.0);

        let r = calc().reverse_convert(3, 35.0, -20.0).unwrap();
        assert_eq!(r.total_gold_cost, 0.0);
    }

    #[test]
    fn economics_against_market_price() {
        let calc = calc();

        let cheap = calc.economics(10, 100.0, 10.0);
        assert_eq!(cheap.total_cost, 1000.0);
        assert_eq!(cheap.cost_per_demon, 100.0);
        assert_eq!(cheap.profit_vs_market, Some(150.0));

        let dear = calc.economics(2, 1000.0, 4.0);
        assert_eq!(dear.profit_vs_market, Some(-250.0));

        // No demons gained, so no meaningful per-demon price
        let idle = calc.economics(7, 60.0, 0.0);
        assert_eq!(idle.total_cost, 420.0);
        assert_eq!(idle.cost_per_demon, 0.0);
        assert_eq!(idle.profit_vs_market, None);
    }

    #[test]
    fn first_aid_and_artifacts_raise_hp() {
        assert_eq!(modified_unit_value(35.0, 0, 0), 35.0);
        assert_eq!(modified_unit_value(10.0, 0, 1), 11.0);
        assert_eq!(modified_unit_value(10.0, 2, 3), 15.6);
        assert_eq!(modified_unit_value(35.0, 0, 3), 45.5);
    }

    #[test]
    fn report_shows_yield_and_economics() {
        let calc = calc();
        let result = convert(10.0, 7, 2);
        let report = ConversionReport {
            unit_name: "Pikinier".to_string(),
            modifiers: None,
            result,
            economics: calc.economics(7, 60.0, result.actual_demons_gained),
        };

        let text = report.to_string();
        assert!(text.contains("7 x Pikinier"));
        assert!(text.contains("ACTUALLY GAINED:  2.00 demons"));
        assert!(text.contains("Perfect stack:    7 units"));
        assert!(text.contains("Cost per demon:   210 gold"));
        assert!(text.contains("Profit vs buying: +40 gold / demon"));
    }
}
