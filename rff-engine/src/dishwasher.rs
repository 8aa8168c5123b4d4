//! Dishwasher utility model: pure lookup + derivation, invoked once per
//! usage scenario and diffed via [`ChangeSummary`].

use serde::{Deserialize, Serialize};

use rff_model::dishwasher::{Dishwasher, FuelType, ProfileTable, WashLoad, WashTemperature};
use rff_model::rates::UtilityRates;
use rff_model::{ForecastError, ELECTRIC_LB_CO2_PER_KWH, GAS_LB_CO2_PER_THERM, LB_PER_METRIC_TON};

use crate::summary::{ChangeSummary, Tally};

/// kWh to heat one gallon of supply water to wash temperature electrically.
pub const ELECTRIC_HEATER_KWH_PER_GAL: f64 = 0.194;

/// kWh for the booster heater to raise one gallon to sanitizing temperature.
pub const BOOSTER_ELECTRIC_KWH_PER_GAL: f64 = 0.097;

/// Therms to heat one gallon of supply water to wash temperature with gas.
pub const GAS_HEATER_THERMS_PER_GAL: f64 = 0.00835;

/// Therms for a gas booster to raise one gallon to sanitizing temperature.
pub const BOOSTER_GAS_THERMS_PER_GAL: f64 = 0.0042;

/// Annual utility consumption derived for one usage scenario.
#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub struct UtilityUsage {
    pub electric_kwh: f64,
    pub gas_therms: f64,
    pub water_gal: f64,
}

impl UtilityUsage {
    /// Price this consumption at the given rates. Water rates are quoted
    /// per thousand gallons.
    pub fn cost(&self, rates: &UtilityRates) -> f64 {
        self.electric_kwh * rates.electric
            + self.gas_therms * rates.gas
            + self.water_gal * rates.water / 1000.0
    }

    /// Emissions for this consumption, in lb CO2e.
    pub fn emissions_lb(&self) -> f64 {
        self.electric_kwh * ELECTRIC_LB_CO2_PER_KWH + self.gas_therms * GAS_LB_CO2_PER_THERM
    }
}

/// Derive annual utility consumption for one dishwasher under one load.
///
/// Exactly one fuel path (electric or gas) carries the building-heater
/// term; the booster term applies only to high-temperature machines, on
/// the booster's own fuel path.
pub fn usage(
    dishwasher: &Dishwasher,
    load: &WashLoad,
    profiles: &ProfileTable,
) -> Result<UtilityUsage, ForecastError> {
    let profile = profiles.resolve(dishwasher)?;
    let water_gal = profile.water_gal_per_rack * load.racks_per_day * load.operating_days;

    let mut electric_kwh = 0.0;
    let mut gas_therms = 0.0;
    match dishwasher.building_water_heater_fuel {
        FuelType::Electric => electric_kwh += water_gal * ELECTRIC_HEATER_KWH_PER_GAL,
        FuelType::Gas => gas_therms += water_gal * GAS_HEATER_THERMS_PER_GAL,
    }
    if dishwasher.temperature == WashTemperature::High {
        match dishwasher.booster_fuel {
            FuelType::Electric => electric_kwh += water_gal * BOOSTER_ELECTRIC_KWH_PER_GAL,
            FuelType::Gas => gas_therms += water_gal * BOOSTER_GAS_THERMS_PER_GAL,
        }
    }

    Ok(UtilityUsage {
        electric_kwh,
        gas_therms,
        water_gal,
    })
}

/// Baseline-vs-forecast utility figures for one dishwasher.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct DishwasherDelta {
    pub baseline: UtilityUsage,
    pub forecast: UtilityUsage,
    pub baseline_cost: f64,
    pub forecast_cost: f64,
}

/// Fleet-level rollup across all dishwashers in a project.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DishwasherResults {
    pub cost: ChangeSummary,
    pub water_gal: ChangeSummary,
    pub electric_kwh: ChangeSummary,
    pub gas_therms: ChangeSummary,
    /// Metric tons CO2e.
    pub emissions: ChangeSummary,
}

/// Compute per-dishwasher deltas for a fleet. Full-precision values; the
/// rollup into [`DishwasherResults`] rounds once at the leaves.
pub fn fleet_deltas(
    dishwashers: &[Dishwasher],
    profiles: &ProfileTable,
    rates: &UtilityRates,
) -> Result<Vec<DishwasherDelta>, ForecastError> {
    dishwashers
        .iter()
        .map(|dishwasher| {
            let baseline = usage(dishwasher, &dishwasher.baseline, profiles)?;
            let forecast = usage(dishwasher, &dishwasher.forecast, profiles)?;
            Ok(DishwasherDelta {
                baseline,
                forecast,
                baseline_cost: baseline.cost(rates),
                forecast_cost: forecast.cost(rates),
            })
        })
        .collect()
}

pub fn fleet_results(deltas: &[DishwasherDelta]) -> DishwasherResults {
    let mut cost = Tally::default();
    let mut water = Tally::default();
    let mut electric = Tally::default();
    let mut gas = Tally::default();
    let mut emissions = Tally::default();
    for delta in deltas {
        cost.add(delta.baseline_cost, delta.forecast_cost);
        water.add(delta.baseline.water_gal, delta.forecast.water_gal);
        electric.add(delta.baseline.electric_kwh, delta.forecast.electric_kwh);
        gas.add(delta.baseline.gas_therms, delta.forecast.gas_therms);
        emissions.add(delta.baseline.emissions_lb(), delta.forecast.emissions_lb());
    }
    DishwasherResults {
        cost: cost.summarize(),
        water_gal: water.summarize(),
        electric_kwh: electric.summarize(),
        gas_therms: gas.summarize(),
        emissions: emissions.summarize_scaled(LB_PER_METRIC_TON),
    }
}
