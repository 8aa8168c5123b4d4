//! Pure forecast engine for the reusable foodware toolkit.
//!
//! Converts a [`rff_model::inventory::ProjectInventory`] snapshot into
//! baseline-vs-forecast comparisons of cost, greenhouse-gas emissions,
//! water usage, and waste weight. Every reported leaf is a
//! [`summary::ChangeSummary`]; accumulation happens at full precision and
//! rounding happens exactly once, when a leaf is produced.
//!
//! The engine is synchronous and side-effect free. Concurrent invocations
//! over different snapshots need no coordination.

pub mod dishwasher;
pub mod environmental;
pub mod financial;
pub mod forecast;
pub mod grouping;
pub mod line_item;
pub mod purchasing;
pub mod summary;

pub use forecast::{run, AnnualSummary, ForecastReferences, ProjectForecast};
pub use summary::ChangeSummary;
