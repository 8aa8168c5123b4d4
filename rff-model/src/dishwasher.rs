use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::ForecastError;

/// Commercial dishwasher machine class.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum MachineType {
    UnderCounter,
    DoorType,
    Conveyor,
}

/// Sanitization mode: high-temperature machines run a booster heater,
/// low-temperature machines sanitize chemically.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum WashTemperature {
    High,
    Low,
}

/// Fuel powering a water heater.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum FuelType {
    Electric,
    Gas,
}

/// Throughput for one usage scenario: racks washed per day over a number of
/// operating days per year.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct WashLoad {
    pub racks_per_day: f64,
    pub operating_days: f64,
}

/// A dishwasher in the project: static machine configuration plus baseline
/// and forecast usage scenarios. A project holds zero or more of these.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Dishwasher {
    pub machine_type: MachineType,
    pub temperature: WashTemperature,
    pub energy_star_certified: bool,
    pub booster_fuel: FuelType,
    pub building_water_heater_fuel: FuelType,
    pub baseline: WashLoad,
    pub forecast: WashLoad,
}

/// Water consumption profile for one (machine type, temperature,
/// ENERGY STAR) combination.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct ConsumptionProfile {
    /// Gallons of water consumed per rack washed.
    pub water_gal_per_rack: f64,
}

type ProfileKey = (MachineType, WashTemperature, bool);

/// Immutable consumption-profile table keyed by exact configuration match.
///
/// Every valid combination must be pre-registered; a missing tuple is a
/// configuration error that aborts the forecast.
#[derive(Debug, Clone)]
pub struct ProfileTable {
    profiles: HashMap<ProfileKey, ConsumptionProfile>,
}

impl ProfileTable {
    pub fn new(entries: Vec<(ProfileKey, ConsumptionProfile)>) -> Self {
        ProfileTable {
            profiles: entries.into_iter().collect(),
        }
    }

    /// Look up the consumption profile for a dishwasher's configuration.
    pub fn resolve(&self, dishwasher: &Dishwasher) -> Result<ConsumptionProfile, ForecastError> {
        let key = (
            dishwasher.machine_type,
            dishwasher.temperature,
            dishwasher.energy_star_certified,
        );
        self.profiles.get(&key).copied().ok_or_else(|| {
            ForecastError::UnknownDishwasherConfig {
                machine_type: dishwasher.machine_type,
                temperature: dishwasher.temperature,
                energy_star: dishwasher.energy_star_certified,
            }
        })
    }

    /// Default profile table covering every machine/temperature/ENERGY STAR
    /// combination. Gallons-per-rack figures follow published commercial
    /// dishwasher water-use ratings.
    pub fn default_table() -> Self {
        use MachineType::*;
        use WashTemperature::*;

        let gal = |g| ConsumptionProfile {
            water_gal_per_rack: g,
        };
        ProfileTable::new(vec![
            ((UnderCounter, High, true), gal(0.80)),
            ((UnderCounter, High, false), gal(1.19)),
            ((UnderCounter, Low, true), gal(1.19)),
            ((UnderCounter, Low, false), gal(1.73)),
            ((DoorType, High, true), gal(0.89)),
            ((DoorType, High, false), gal(1.44)),
            ((DoorType, Low, true), gal(1.19)),
            ((DoorType, Low, false), gal(2.05)),
            ((Conveyor, High, true), gal(0.70)),
            ((Conveyor, High, false), gal(1.10)),
            ((Conveyor, Low, true), gal(0.79)),
            ((Conveyor, Low, false), gal(1.30)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine(machine_type: MachineType, energy_star: bool) -> Dishwasher {
        Dishwasher {
            machine_type,
            temperature: WashTemperature::High,
            energy_star_certified: energy_star,
            booster_fuel: FuelType::Electric,
            building_water_heater_fuel: FuelType::Electric,
            baseline: WashLoad {
                racks_per_day: 20.0,
                operating_days: 300.0,
            },
            forecast: WashLoad {
                racks_per_day: 40.0,
                operating_days: 300.0,
            },
        }
    }

    #[test]
    fn test_resolve_profile() {
        let table = ProfileTable::default_table();
        let profile = table
            .resolve(&machine(MachineType::UnderCounter, true))
            .unwrap();
        assert_eq!(profile.water_gal_per_rack, 0.80);
    }

    #[test]
    fn test_energy_star_uses_less_water() {
        let table = ProfileTable::default_table();
        for machine_type in [
            MachineType::UnderCounter,
            MachineType::DoorType,
            MachineType::Conveyor,
        ] {
            let certified = table.resolve(&machine(machine_type, true)).unwrap();
            let uncertified = table.resolve(&machine(machine_type, false)).unwrap();
            assert!(certified.water_gal_per_rack < uncertified.water_gal_per_rack);
        }
    }

    #[test]
    fn test_missing_profile_fails() {
        let table = ProfileTable::new(vec![]);
        let err = table
            .resolve(&machine(MachineType::Conveyor, true))
            .unwrap_err();
        assert_eq!(
            err,
            ForecastError::UnknownDishwasherConfig {
                machine_type: MachineType::Conveyor,
                temperature: WashTemperature::High,
                energy_star: true,
            }
        );
    }
}
