//! Purchasing summaries for one product family (single-use or reusable).

use serde::{Deserialize, Serialize};

use rff_model::LB_PER_METRIC_TON;

use crate::grouping::{results_by_type, ResultsByType};
use crate::line_item::ItemDetail;
use crate::summary::{round2, ChangeSummary};

/// Aggregate purchasing figures for one scenario across a product family.
///
/// `product_count` counts only items actually purchased in this scenario
/// (annual units > 0); an item zeroed out in the forecast stops counting
/// there even though it still counts toward the baseline.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct PurchasingColumn {
    pub annual_cost: f64,
    /// Metric tons CO2e.
    pub annual_ghg: f64,
    /// Gallons.
    pub annual_water: f64,
    pub annual_units: f64,
    pub product_count: u32,
}

/// Column-by-column baseline-vs-forecast diff.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PurchasingSummary {
    pub annual_cost: ChangeSummary,
    pub annual_ghg: ChangeSummary,
    pub annual_water: ChangeSummary,
    pub annual_units: ChangeSummary,
    pub product_count: ChangeSummary,
}

/// Forecast results for one product family: the purchasing diff plus the
/// three cross-tabs.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ProductForecastResults {
    pub baseline: PurchasingColumn,
    pub forecast: PurchasingColumn,
    pub summary: PurchasingSummary,
    pub results_by_type: ResultsByType,
}

struct RawColumn {
    cost: f64,
    ghg_lb: f64,
    water: f64,
    units: f64,
    count: u32,
}

fn raw_column<F>(details: &[ItemDetail], scenario: F) -> RawColumn
where
    F: Fn(&ItemDetail) -> crate::line_item::ScenarioFigures,
{
    let mut column = RawColumn {
        cost: 0.0,
        ghg_lb: 0.0,
        water: 0.0,
        units: 0.0,
        count: 0,
    };
    for figure in details.iter().map(scenario) {
        column.cost += figure.cost;
        column.ghg_lb += figure.total_ghg();
        column.water += figure.total_water();
        column.units += figure.units;
        if figure.purchased() {
            column.count += 1;
        }
    }
    column
}

impl RawColumn {
    fn rounded(&self) -> PurchasingColumn {
        PurchasingColumn {
            annual_cost: round2(self.cost),
            annual_ghg: round2(self.ghg_lb / LB_PER_METRIC_TON),
            annual_water: round2(self.water),
            annual_units: round2(self.units),
            product_count: self.count,
        }
    }
}

/// Roll a family's item details up into columns, diff, and cross-tabs.
pub fn family_results(details: &[ItemDetail]) -> ProductForecastResults {
    let baseline = raw_column(details, ItemDetail::baseline);
    let forecast = raw_column(details, ItemDetail::forecast);

    let summary = PurchasingSummary {
        annual_cost: ChangeSummary::from_raw(baseline.cost, forecast.cost),
        annual_ghg: ChangeSummary::from_raw(
            baseline.ghg_lb / LB_PER_METRIC_TON,
            forecast.ghg_lb / LB_PER_METRIC_TON,
        ),
        annual_water: ChangeSummary::from_raw(baseline.water, forecast.water),
        annual_units: ChangeSummary::from_raw(baseline.units, forecast.units),
        product_count: ChangeSummary::from_raw(f64::from(baseline.count), f64::from(forecast.count)),
    };

    ProductForecastResults {
        baseline: baseline.rounded(),
        forecast: forecast.rounded(),
        summary,
        results_by_type: results_by_type(details),
    }
}
