use serde::{Deserialize, Serialize};

use crate::error::ForecastError;

/// Utility rates used to price dishwasher consumption.
///
/// Water is billed per thousand gallons, the standard municipal unit.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct UtilityRates {
    /// $ per kWh
    pub electric: f64,
    /// $ per therm
    pub gas: f64,
    /// $ per 1,000 gallons
    pub water: f64,
}

/// Known locales and their average commercial utility rates.
pub const LOCALE_RATES: &[(&str, UtilityRates)] = &[
    (
        "CA",
        UtilityRates {
            electric: 0.1032,
            gas: 0.922,
            water: 6.98,
        },
    ),
    (
        "NY",
        UtilityRates {
            electric: 0.1402,
            gas: 1.12,
            water: 7.45,
        },
    ),
    (
        "TX",
        UtilityRates {
            electric: 0.0887,
            gas: 0.98,
            water: 4.90,
        },
    ),
    (
        "US",
        UtilityRates {
            electric: 0.1265,
            gas: 1.05,
            water: 5.64,
        },
    ),
];

impl UtilityRates {
    /// Resolve the rates for a locale code, failing on unknown locales.
    pub fn for_locale(code: &str) -> Result<UtilityRates, ForecastError> {
        LOCALE_RATES
            .iter()
            .find(|(locale, _)| *locale == code)
            .map(|(_, rates)| *rates)
            .ok_or_else(|| ForecastError::UnknownLocale(code.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::UtilityRates;
    use crate::error::ForecastError;

    #[test]
    fn test_california_rates() {
        let rates = UtilityRates::for_locale("CA").unwrap();
        assert_eq!(rates.electric, 0.1032);
        assert_eq!(rates.gas, 0.922);
        assert_eq!(rates.water, 6.98);
    }

    #[test]
    fn test_unknown_locale_fails() {
        let err = UtilityRates::for_locale("ZZ").unwrap_err();
        assert_eq!(err, ForecastError::UnknownLocale("ZZ".to_string()));
    }
}
