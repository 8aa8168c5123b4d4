use std::fmt;

use crate::dishwasher::{MachineType, WashTemperature};

/// Errors that abort a forecast computation.
///
/// There is no partial-failure mode: an unrecognized reference key means any
/// computed figure would be meaningless, so the engine surfaces the error
/// and produces nothing.
#[derive(Debug, PartialEq, Clone)]
pub enum ForecastError {
    /// A line item or product references a material id absent from the
    /// material table.
    UnknownMaterial(String),
    /// No consumption profile is registered for this dishwasher
    /// configuration tuple.
    UnknownDishwasherConfig {
        machine_type: MachineType,
        temperature: WashTemperature,
        energy_star: bool,
    },
    /// The project locale has no registered utility rates and the snapshot
    /// carries none of its own.
    UnknownLocale(String),
    /// A line item references a product id absent from the resolved catalog.
    MissingProduct(String),
}

impl fmt::Display for ForecastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForecastError::UnknownMaterial(id) => {
                write!(f, "unrecognized material id: {id}")
            }
            ForecastError::UnknownDishwasherConfig {
                machine_type,
                temperature,
                energy_star,
            } => {
                write!(
                    f,
                    "no consumption profile for dishwasher ({machine_type:?}, {temperature:?}, energy_star={energy_star})"
                )
            }
            ForecastError::UnknownLocale(code) => {
                write!(f, "no utility rates registered for locale: {code}")
            }
            ForecastError::MissingProduct(id) => {
                write!(f, "line item references unresolved product id: {id}")
            }
        }
    }
}

impl std::error::Error for ForecastError {}
