//! Stack-size distribution around a chosen unit count
//!
//! Shows how yield and waste change a few units either side of the entered
//! stack and where the nearest waste-free stacks sit outside that window.

use crate::calculator::Calculator;
use crate::models::{ChartEntry, ConversionInput, ConversionResult};

/// Counts shown on each side of the center
pub const WINDOW_RADIUS: u64 = 4;

const BAR_WIDTH: usize = 30;

#[derive(Debug, Clone)]
pub struct Neighborhood {
    pub center: ConversionResult,
    pub entries: Vec<ChartEntry>,
    /// `None` when the unit has no perfect stack (HP truncates to zero)
    pub next_perfect_count: Option<u64>,
}

/// Ordered rows: optional marker below, the window, optional marker above
#[derive(Debug, Default)]
struct ChartBuilder {
    below: Option<ChartEntry>,
    window: Vec<ChartEntry>,
    above: Option<ChartEntry>,
}

impl ChartBuilder {
    fn push(&mut self, entry: ChartEntry) {
        self.window.push(entry);
    }

    fn first(&self) -> Option<&ChartEntry> {
        self.window.first()
    }

    fn last(&self) -> Option<&ChartEntry> {
        self.window.last()
    }

    fn finish(self) -> Vec<ChartEntry> {
        self.below.into_iter().chain(self.window).chain(self.above).collect()
    }
}

/// Scan stack sizes around `center_count`
///
/// Negative counts must already be clamped by the caller.
pub fn build_neighborhood(
    calc: &Calculator,
    unit_value: f64,
    center_count: u64,
    converter_count: u64,
) -> Neighborhood {
    let at = |count: u64| {
        calc.convert(ConversionInput {
            unit_value,
            unit_count: count,
            converter_count,
        })
    };

    let center = at(center_count);
    let step = center.perfect_units;
    let next_perfect_count = next_perfect_count(center_count, center.wasted_hp, step);

    let mut chart = ChartBuilder::default();
    let start = center_count.saturating_sub(WINDOW_RADIUS);
    for count in start..=center_count.saturating_add(WINDOW_RADIUS) {
        let is_center = count == center_count;
        if count == 0 && !is_center {
            continue;
        }
        let result = if is_center { center } else { at(count) };
        chart.push(entry(&result, is_center, false));
    }

    if step > 0 {
        if let Some(first) = chart.first().copied() {
            if first.count > 0 && (first.waste != 0.0 || first.count > step) {
                let below = ((first.count - 1) / step) * step;
                if below > 0 {
                    chart.below = Some(entry(&at(below), false, true));
                }
            }
        }

        if let (Some(next), Some(last)) = (next_perfect_count, chart.last().copied()) {
            if next > last.count {
                chart.above = Some(entry(&at(next), false, true));
            }
        }
    }

    Neighborhood {
        center,
        entries: chart.finish(),
        next_perfect_count,
    }
}

/// Next multiple of `step` strictly after `count`
///
/// A stack that is already perfect still moves on to the following one.
pub fn next_perfect_count(count: u64, wasted_hp: f64, step: u64) -> Option<u64> {
    if step == 0 {
        return None;
    }
    if wasted_hp == 0.0 {
        Some(count + step)
    } else {
        Some((count / step + 1) * step)
    }
}

fn entry(result: &ConversionResult, is_center: bool, is_boundary_marker: bool) -> ChartEntry {
    ChartEntry {
        count: result.input.unit_count,
        demons: result.max_demons_from_hp,
        waste: result.wasted_hp,
        pit_lords: result.needed_pit_lords,
        is_center,
        is_boundary_marker,
    }
}

/// Render the distribution as a text bar chart
pub fn format_chart(neighborhood: &Neighborhood) -> String {
    let mut output = String::from("Demon distribution by stack size:\n");
    let max_demons = neighborhood
        .entries
        .iter()
        .map(|e| e.demons)
        .fold(0.0_f64, f64::max);
    let available_lords = neighborhood.center.input.converter_count;

    for e in &neighborhood.entries {
        let filled = if max_demons > 0.0 {
            ((e.demons / max_demons) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let bar = format!("{}{}", "#".repeat(filled.min(BAR_WIDTH)), ".".repeat(BAR_WIDTH - filled.min(BAR_WIDTH)));

        let prefix = if e.is_center {
            ">>"
        } else if e.is_boundary_marker {
            "**"
        } else {
            "  "
        };

        let mut label = String::new();
        if e.is_center {
            label.push_str(" <- current");
        }
        if e.is_perfect() {
            label.push_str(" (perfect)");
        }
        if e.pit_lords > available_lords {
            label.push_str(&format!(" [needs {} Lords]", e.pit_lords));
        }

        output.push_str(&format!(
            "{} {:>5} units [{}] {:>7.2} demons | waste {:>6.2} HP{}\n",
            prefix, e.count, bar, e.demons, e.waste, label
        ));
    }

    let center_count = neighborhood.center.input.unit_count;
    match neighborhood.next_perfect_count {
        Some(next) => output.push_str(&format!(
            "Next perfect stack: {} units (+{})\n",
            next,
            next - center_count
        )),
        None => output.push_str("No perfect stack exists for this HP\n"),
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(unit_value: f64, center: u64, lords: u64) -> Neighborhood {
        build_neighborhood(&Calculator::default(), unit_value, center, lords)
    }

    fn counts(n: &Neighborhood) -> Vec<u64> {
        n.entries.iter().map(|e| e.count).collect()
    }

    #[test]
    fn perfect_center_points_past_itself() {
        let n = scan(10.0, 7, 100);
        assert_eq!(n.center.wasted_hp, 0.0);
        assert_eq!(n.next_perfect_count, Some(14));

        // The marker below would be 0, which is dropped
        assert_eq!(counts(&n), vec![3, 4, 5, 6, 7, 8, 9, 10, 11, 14]);
        let last = n.entries.last().unwrap();
        assert!(last.is_boundary_marker);
        assert!(last.is_perfect());
        assert!(n.entries.iter().filter(|e| e.is_center).all(|e| e.count == 7));
    }

    #[test]
    fn imperfect_center_inserts_marker_below() {
        let n = scan(10.0, 20, 100);
        assert_eq!(n.center.wasted_hp, 25.0);
        assert_eq!(n.next_perfect_count, Some(21));
        assert_eq!(counts(&n), vec![14, 16, 17, 18, 19, 20, 21, 22, 23, 24]);

        let first = &n.entries[0];
        assert!(first.is_boundary_marker);
        assert_eq!(first.waste, 0.0);
        assert!(n.entries[1..].iter().all(|e| !e.is_boundary_marker));
    }

    #[test]
    fn window_is_clipped_at_zero() {
        let n = scan(13.0, 2, 5);
        assert_eq!(n.next_perfect_count, Some(35));
        assert_eq!(counts(&n), vec![1, 2, 3, 4, 5, 6, 35]);
        assert!(n.entries[1].is_center);
    }

    #[test]
    fn zero_center_is_kept() {
        let n = scan(35.0, 0, 0);
        assert_eq!(n.next_perfect_count, Some(1));
        assert_eq!(counts(&n), vec![0, 1, 2, 3, 4]);
        assert!(n.entries[0].is_center);
        assert!(!n.entries.iter().any(|e| e.is_boundary_marker));
    }

    #[test]
    fn every_count_perfect_marks_the_stack_below() {
        let n = scan(35.0, 10, 10);
        assert_eq!(n.next_perfect_count, Some(11));
        assert_eq!(counts(&n), vec![5, 6, 7, 8, 9, 10, 11, 12, 13, 14]);
        assert!(n.entries[0].is_boundary_marker);
    }

    #[test]
    fn no_perfect_stack_for_zero_hp() {
        let n = scan(0.0, 3, 1);
        assert_eq!(n.next_perfect_count, None);
        assert_eq!(counts(&n), vec![1, 2, 3, 4, 5, 6, 7]);
        assert!(!n.entries.iter().any(|e| e.is_boundary_marker));
    }

    #[test]
    fn entries_ascend_by_count() {
        for center in [0, 1, 5, 33, 36, 71, 200] {
            let n = scan(13.0, center, 3);
            assert!(n.entries.windows(2).all(|w| w[0].count < w[1].count));
            assert_eq!(n.entries.iter().filter(|e| e.is_center).count(), 1);
        }
    }

    #[test]
    fn next_perfect_count_rules() {
        assert_eq!(next_perfect_count(7, 0.0, 7), Some(14));
        assert_eq!(next_perfect_count(8, 10.0, 7), Some(14));
        assert_eq!(next_perfect_count(6, 25.0, 7), Some(7));
        assert_eq!(next_perfect_count(6, 25.0, 0), None);
    }

    #[test]
    fn chart_marks_rows() {
        let text = format_chart(&scan(10.0, 7, 1));
        assert!(text.contains(">>     7 units"));
        assert!(text.contains("<- current (perfect)"));
        assert!(text.contains("**    14 units"));
        assert!(text.contains("[needs 3 Lords]"));
        assert!(text.contains("Next perfect stack: 14 units (+7)"));
    }
}
