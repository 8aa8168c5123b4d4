use serde::{Deserialize, Serialize};

/// A baseline-vs-forecast comparison for one metric, the leaf shape of
/// every result tree.
///
/// Values are rounded to two decimals when the summary is produced; the
/// change and change-percent are computed from the unrounded inputs first,
/// so rounding never compounds. A zero baseline always yields a zero
/// change-percent.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct ChangeSummary {
    pub baseline: f64,
    pub forecast: f64,
    pub change: f64,
    pub change_percent: f64,
}

impl ChangeSummary {
    /// Produce a summary from full-precision baseline and forecast values.
    pub fn from_raw(baseline: f64, forecast: f64) -> Self {
        let change = forecast - baseline;
        let change_percent = if baseline == 0.0 {
            0.0
        } else {
            change / baseline * 100.0
        };
        ChangeSummary {
            baseline: round2(baseline),
            forecast: round2(forecast),
            change: round2(change),
            change_percent: round2(change_percent),
        }
    }

    pub fn zero() -> Self {
        ChangeSummary::from_raw(0.0, 0.0)
    }
}

/// A full-precision baseline/forecast pair accumulated across items before
/// a leaf [`ChangeSummary`] is produced.
#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub struct Tally {
    pub baseline: f64,
    pub forecast: f64,
}

impl Tally {
    pub fn add(&mut self, baseline: f64, forecast: f64) {
        self.baseline += baseline;
        self.forecast += forecast;
    }

    pub fn summarize(&self) -> ChangeSummary {
        ChangeSummary::from_raw(self.baseline, self.forecast)
    }

    /// Summarize with a unit conversion applied to both sides first
    /// (e.g. lb CO2e accumulated, metric tons reported).
    pub fn summarize_scaled(&self, divisor: f64) -> ChangeSummary {
        ChangeSummary::from_raw(self.baseline / divisor, self.forecast / divisor)
    }
}

/// Round to two decimals, the single rounding point for all reported values.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::{round2, ChangeSummary, Tally};

    #[test]
    fn test_change_is_forecast_minus_baseline() {
        let summary = ChangeSummary::from_raw(33_808.0, 5_798.0);
        assert_eq!(summary.change, -28_010.0);
        assert_eq!(summary.change_percent, -82.85);
    }

    #[test]
    fn test_zero_baseline_yields_zero_percent() {
        let summary = ChangeSummary::from_raw(0.0, 1234.5);
        assert_eq!(summary.change, 1234.5);
        assert_eq!(summary.change_percent, 0.0);
    }

    #[test]
    fn test_percent_not_derived_from_rounded_values() {
        // 0.004 rounds to 0.00 but the percent must come from the raw pair.
        let summary = ChangeSummary::from_raw(0.004, 0.006);
        assert_eq!(summary.baseline, 0.0);
        assert_eq!(summary.forecast, 0.01);
        assert_eq!(summary.change_percent, 50.0);
    }

    #[test]
    fn test_tally_accumulates_before_rounding() {
        let mut tally = Tally::default();
        // each addend rounds to 0.00 on its own; the sum must not.
        for _ in 0..1000 {
            tally.add(0.004, 0.002);
        }
        let summary = tally.summarize();
        assert_eq!(summary.baseline, 4.0);
        assert_eq!(summary.forecast, 2.0);
        assert_eq!(summary.change, -2.0);
        assert_eq!(summary.change_percent, -50.0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(200.59835), 200.6);
        assert_eq!(round2(-30_198.1104), -30_198.11);
        assert_eq!(round2(0.0), 0.0);
    }
}
