//! Environmental results composer: greenhouse-gas, waste-weight, and
//! water-usage changes.
//!
//! Shipping-box impact is reported as its own addend alongside landfill
//! waste and dishwashing, never folded into either.

use serde::{Deserialize, Serialize};

use rff_model::LB_PER_METRIC_TON;

use crate::dishwasher::DishwasherDelta;
use crate::line_item::ItemDetail;
use crate::summary::{ChangeSummary, Tally};

/// Annual GHG emission changes in metric tons CO2e.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct GasEmissionChanges {
    /// Emissions embodied in product materials sent to landfill.
    pub landfill_waste: ChangeSummary,
    /// Dishwasher utility emissions (electricity + gas).
    pub dishwashing: ChangeSummary,
    /// Cardboard shipping boxes, reported separately.
    pub shipping_box: ChangeSummary,
    pub total: ChangeSummary,
}

/// Annual waste-weight changes in pounds. Reusable items carry no baseline
/// weight: only their forecast repurchase displacement counts as this
/// year's waste.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct WasteChanges {
    pub product_weight: ChangeSummary,
    pub shipping_box_weight: ChangeSummary,
    pub total: ChangeSummary,
}

/// Annual water-usage changes in gallons, mirroring the GHG structure.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct WaterUsageChanges {
    pub products: ChangeSummary,
    pub dishwashing: ChangeSummary,
    pub shipping_box: ChangeSummary,
    pub total: ChangeSummary,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct EnvironmentalResults {
    pub annual_gas_emission_changes: GasEmissionChanges,
    pub annual_waste_changes: WasteChanges,
    pub annual_water_usage_changes: WaterUsageChanges,
}

/// Compose environmental results over both product families and the
/// dishwasher fleet.
pub fn compose(
    single_use: &[ItemDetail],
    reusables: &[ItemDetail],
    dishwashers: &[DishwasherDelta],
) -> EnvironmentalResults {
    let mut material_ghg = Tally::default();
    let mut box_ghg = Tally::default();
    let mut material_water = Tally::default();
    let mut box_water = Tally::default();
    for detail in single_use.iter().chain(reusables) {
        let (base, fore) = (detail.baseline(), detail.forecast());
        material_ghg.add(base.material_ghg(), fore.material_ghg());
        box_ghg.add(base.box_ghg, fore.box_ghg);
        material_water.add(base.material_water(), fore.material_water());
        box_water.add(base.box_water, fore.box_water);
    }

    // Waste weight: disposables in full; reusable details already carry a
    // zero baseline weight.
    let mut product_weight = Tally::default();
    let mut box_weight = Tally::default();
    for detail in single_use.iter().chain(reusables) {
        let (base, fore) = (detail.baseline(), detail.forecast());
        product_weight.add(base.product_weight, fore.product_weight);
        box_weight.add(base.box_weight, fore.box_weight);
    }

    let mut dishwashing_ghg = Tally::default();
    let mut dishwashing_water = Tally::default();
    for delta in dishwashers {
        dishwashing_ghg.add(delta.baseline.emissions_lb(), delta.forecast.emissions_lb());
        dishwashing_water.add(delta.baseline.water_gal, delta.forecast.water_gal);
    }

    let ghg_total = Tally {
        baseline: material_ghg.baseline + dishwashing_ghg.baseline + box_ghg.baseline,
        forecast: material_ghg.forecast + dishwashing_ghg.forecast + box_ghg.forecast,
    };
    let waste_total = Tally {
        baseline: product_weight.baseline + box_weight.baseline,
        forecast: product_weight.forecast + box_weight.forecast,
    };
    let water_total = Tally {
        baseline: material_water.baseline + dishwashing_water.baseline + box_water.baseline,
        forecast: material_water.forecast + dishwashing_water.forecast + box_water.forecast,
    };

    EnvironmentalResults {
        annual_gas_emission_changes: GasEmissionChanges {
            landfill_waste: material_ghg.summarize_scaled(LB_PER_METRIC_TON),
            dishwashing: dishwashing_ghg.summarize_scaled(LB_PER_METRIC_TON),
            shipping_box: box_ghg.summarize_scaled(LB_PER_METRIC_TON),
            total: ghg_total.summarize_scaled(LB_PER_METRIC_TON),
        },
        annual_waste_changes: WasteChanges {
            product_weight: product_weight.summarize(),
            shipping_box_weight: box_weight.summarize(),
            total: waste_total.summarize(),
        },
        annual_water_usage_changes: WaterUsageChanges {
            products: material_water.summarize(),
            dishwashing: dishwashing_water.summarize(),
            shipping_box: box_water.summarize(),
            total: water_total.summarize(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line_item::{ItemDetail, ItemTaxonomy, ScenarioFigures};

    fn su_detail() -> ItemDetail {
        ItemDetail::Characterized {
            taxonomy: ItemTaxonomy {
                category: "Cups".to_string(),
                product_type: "Cold Cup".to_string(),
                primary_material: "pet".to_string(),
                secondary_material: Some("pla".to_string()),
            },
            baseline: ScenarioFigures {
                cost: 1000.0,
                units: 10_000.0,
                product_weight: 280.0,
                box_weight: 24.0,
                primary_ghg: 2204.62,
                secondary_ghg: 1102.31,
                box_ghg: 220.462,
                primary_water: 500.0,
                secondary_water: 100.0,
                box_water: 40.0,
            },
            forecast: ScenarioFigures::default(),
        }
    }

    #[test]
    fn test_shipping_box_is_a_distinct_addend() {
        let results = compose(&[su_detail()], &[], &[]);
        let gas = &results.annual_gas_emission_changes;
        // 1.5 MT materials, 0.1 MT boxes; the box share is not folded in
        assert_eq!(gas.landfill_waste.baseline, 1.5);
        assert_eq!(gas.shipping_box.baseline, 0.1);
        assert_eq!(gas.total.baseline, 1.6);
        assert_eq!(gas.dishwashing, ChangeSummary::zero());
    }

    #[test]
    fn test_waste_splits_product_and_box() {
        let results = compose(&[su_detail()], &[], &[]);
        let waste = &results.annual_waste_changes;
        assert_eq!(waste.product_weight.baseline, 280.0);
        assert_eq!(waste.shipping_box_weight.baseline, 24.0);
        assert_eq!(waste.total.baseline, 304.0);
        assert_eq!(waste.total.change, -304.0);
        // everything eliminated: -100%
        assert_eq!(waste.total.change_percent, -100.0);
    }

    #[test]
    fn test_priced_reusable_contributes_nothing() {
        let priced = ItemDetail::Priced {
            forecast_cost: 60.0,
        };
        let with = compose(&[su_detail()], &[priced], &[]);
        let without = compose(&[su_detail()], &[], &[]);
        assert_eq!(with, without);
    }

    #[test]
    fn test_water_mirrors_ghg_structure() {
        let results = compose(&[su_detail()], &[], &[]);
        let water = &results.annual_water_usage_changes;
        assert_eq!(water.products.baseline, 600.0);
        assert_eq!(water.shipping_box.baseline, 40.0);
        assert_eq!(water.total.baseline, 640.0);
    }
}
