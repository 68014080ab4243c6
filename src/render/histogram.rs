//! Fixed-width text histogram of raw samples.

use std::collections::BTreeMap;
use std::fmt;

use super::DistributionPlotter;
use crate::stats::STAT_STEP;

/// Default bin width: one stat step.
pub const DEFAULT_BIN_WIDTH: f64 = STAT_STEP;

/// Longest bar drawn, in characters.
const BAR_WIDTH: u64 = 50;

/// Accumulates samples into fixed-width bins across any number of `plot`
/// calls.
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    bin_width: f64,
    title: String,
    bins: BTreeMap<i64, u64>,
    total: u64,
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new(DEFAULT_BIN_WIDTH)
    }
}

impl Histogram {
    /// Non-positive or non-finite widths fall back to 1.
    #[must_use]
    pub fn new(bin_width: f64) -> Self {
        let bin_width = if bin_width.is_finite() && bin_width > 0.0 { bin_width } else { 1.0 };
        Self {
            bin_width,
            title: String::new(),
            bins: BTreeMap::new(),
            total: 0,
        }
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// `(bin lower edge, count)` in ascending order.
    pub fn bins(&self) -> impl Iterator<Item = (f64, u64)> + '_ {
        self.bins.iter().map(|(&k, &c)| (k as f64 * self.bin_width, c))
    }

    fn add(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        let key = (value / self.bin_width).floor() as i64;
        *self.bins.entry(key).or_insert(0) += 1;
        self.total += 1;
    }
}

impl DistributionPlotter for Histogram {
    fn plot(&mut self, samples: &[f64], title: &str) {
        self.title = title.to_string();
        samples.iter().for_each(|&s| self.add(s));
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.title.is_empty() {
            writeln!(f, "{}", self.title)?;
        }
        let peak = self.bins.values().copied().max().unwrap_or(0);
        for (edge, count) in self.bins() {
            let bar = if peak == 0 { 0 } else { count * BAR_WIDTH / peak };
            writeln!(f, "{edge:>7.1} | {:<width$} {count}", "#".repeat(bar as usize), width = BAR_WIDTH as usize)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binning() {
        let mut hist = Histogram::new(10.0);
        hist.plot(&[20.0, 20.0, 30.0, -10.0, f64::NAN], "health");

        assert_eq!(hist.total(), 4);
        let bins: Vec<(f64, u64)> = hist.bins().collect();
        assert_eq!(bins, vec![(-10.0, 1), (20.0, 2), (30.0, 1)]);
    }

    #[test]
    fn test_accumulates_across_calls() {
        let mut hist = Histogram::default();
        hist.plot(&[50.0], "a");
        hist.plot(&[50.0, 60.0], "b");

        assert_eq!(hist.total(), 3);
        let text = hist.to_string();
        assert!(text.starts_with("b\n"));
        assert!(text.contains(&"#".repeat(50)));
    }

    #[test]
    fn test_default_bins_are_one_stat_step_wide() {
        let mut hist = Histogram::default();
        hist.plot(&[64.9, 65.0, 74.99, 75.0], "health");

        let bins: Vec<(f64, u64)> = hist.bins().collect();
        assert_eq!(bins, vec![(60.0, 2), (70.0, 2)]);
    }

    #[test]
    fn test_bad_width_falls_back() {
        let mut hist = Histogram::new(0.0);
        hist.plot(&[1.5, 2.5], "");
        assert_eq!(hist.bins().count(), 2);
    }
}
