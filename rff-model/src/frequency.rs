use serde::{Deserialize, Serialize};

/// How often a purchase or expense recurs.
///
/// `OneTime` never contributes to annual figures; it exists so one-off
/// expenses and initial reusable purchases can share the expense shape.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Annually,
    OneTime,
}

impl Frequency {
    /// Multiplier converting a per-event figure into an annual figure.
    pub fn annual_occurrence(&self) -> f64 {
        match self {
            Frequency::Daily => 365.0,
            Frequency::Weekly => 52.0,
            Frequency::Monthly => 12.0,
            Frequency::Annually => 1.0,
            Frequency::OneTime => 0.0,
        }
    }

    /// Annualize a per-event cost: `unit_cost × units_purchased × occurrence`.
    pub fn annualize(&self, unit_cost: f64, units_purchased: f64) -> f64 {
        unit_cost * units_purchased * self.annual_occurrence()
    }
}

#[cfg(test)]
mod tests {
    use super::Frequency;

    #[test]
    fn test_annual_occurrence() {
        assert_eq!(Frequency::Daily.annual_occurrence(), 365.0);
        assert_eq!(Frequency::Weekly.annual_occurrence(), 52.0);
        assert_eq!(Frequency::Monthly.annual_occurrence(), 12.0);
        assert_eq!(Frequency::Annually.annual_occurrence(), 1.0);
        assert_eq!(Frequency::OneTime.annual_occurrence(), 0.0);
    }

    #[test]
    fn test_annualize() {
        assert_eq!(Frequency::Weekly.annualize(95.0, 4.0), 19_760.0);
        assert_eq!(Frequency::Monthly.annualize(35.0, 2.0), 840.0);
        assert_eq!(Frequency::Annually.annualize(46.0, 1.0), 46.0);
    }

    #[test]
    fn test_one_time_annualizes_to_zero() {
        for (cost, units) in [(0.0, 0.0), (10_000.0, 1.0), (-3.5, 400.0)] {
            assert_eq!(Frequency::OneTime.annualize(cost, units), 0.0);
        }
    }
}
