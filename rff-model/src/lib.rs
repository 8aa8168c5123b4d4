//! Core types and immutable reference tables for the reusable foodware
//! forecast toolkit.
//!
//! This crate owns the data model (products, line items, dishwashers,
//! expenses, the `ProjectInventory` aggregate) and the reference tables the
//! engine resolves against: materials keyed by id, dishwasher consumption
//! profiles keyed by (machine type, temperature, ENERGY STAR), frequency
//! multipliers, and per-locale utility rates. Tables are built once as
//! immutable maps; every "unrecognized key" failure funnels through
//! [`error::ForecastError`].

pub mod dishwasher;
pub mod error;
pub mod expense;
pub mod frequency;
pub mod inventory;
pub mod line_item;
pub mod material;
pub mod product;
pub mod rates;

pub use error::ForecastError;

/// Pounds per metric ton, used to convert accumulated lb CO2e into the
/// metric tons reported to consumers.
pub const LB_PER_METRIC_TON: f64 = 2204.62;

/// Grid emission factor: lb CO2e per kWh of electricity.
pub const ELECTRIC_LB_CO2_PER_KWH: f64 = 0.85;

/// Combustion emission factor: lb CO2e per therm of natural gas.
pub const GAS_LB_CO2_PER_THERM: f64 = 11.7;
