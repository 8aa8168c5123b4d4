//! Per-line-item forecast figures.
//!
//! Each line item is expanded into full-precision baseline and forecast
//! figures (cost, units, weight, GHG, water) with the material-level
//! attribution the grouping engine needs. Nothing here is rounded; leaf
//! summaries are produced downstream.

use rff_model::frequency::Frequency;
use rff_model::line_item::{ReusableLineItem, ReusableProduct, SingleUseLineItem};
use rff_model::material::MaterialTable;
use rff_model::product::{Product, ProductCatalog};
use rff_model::ForecastError;

/// Full-precision figures for one scenario of one item.
#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub struct ScenarioFigures {
    pub cost: f64,
    pub units: f64,
    /// Product mass headed to landfill, lb.
    pub product_weight: f64,
    /// Shipping-box mass, lb.
    pub box_weight: f64,
    /// lb CO2e by source.
    pub primary_ghg: f64,
    pub secondary_ghg: f64,
    pub box_ghg: f64,
    /// Gallons by source.
    pub primary_water: f64,
    pub secondary_water: f64,
    pub box_water: f64,
}

impl ScenarioFigures {
    pub fn total_ghg(&self) -> f64 {
        self.primary_ghg + self.secondary_ghg + self.box_ghg
    }

    pub fn total_water(&self) -> f64 {
        self.primary_water + self.secondary_water + self.box_water
    }

    pub fn material_ghg(&self) -> f64 {
        self.primary_ghg + self.secondary_ghg
    }

    pub fn material_water(&self) -> f64 {
        self.primary_water + self.secondary_water
    }

    pub fn total_weight(&self) -> f64 {
        self.product_weight + self.box_weight
    }

    /// Whether this scenario purchases anything, for product counting.
    pub fn purchased(&self) -> bool {
        self.units > 0.0
    }
}

/// Taxonomy attribution for the grouping engine. Items without a resolved
/// product (uncharacterized reusables) carry no taxonomy.
#[derive(Debug, PartialEq, Clone)]
pub struct ItemTaxonomy {
    pub category: String,
    pub product_type: String,
    pub primary_material: String,
    pub secondary_material: Option<String>,
}

/// One line item expanded into baseline and forecast figures.
///
/// A `Priced` item (uncharacterized reusable) structurally carries nothing
/// but its forecast repurchase cost, so it can never leak taxonomy, weight,
/// GHG, or water into downstream aggregation.
#[derive(Debug, PartialEq, Clone)]
pub enum ItemDetail {
    Priced { forecast_cost: f64 },
    Characterized {
        taxonomy: ItemTaxonomy,
        baseline: ScenarioFigures,
        forecast: ScenarioFigures,
    },
}

impl ItemDetail {
    pub fn taxonomy(&self) -> Option<&ItemTaxonomy> {
        match self {
            ItemDetail::Priced { .. } => None,
            ItemDetail::Characterized { taxonomy, .. } => Some(taxonomy),
        }
    }

    pub fn baseline(&self) -> ScenarioFigures {
        match self {
            ItemDetail::Priced { .. } => ScenarioFigures::default(),
            ItemDetail::Characterized { baseline, .. } => *baseline,
        }
    }

    pub fn forecast(&self) -> ScenarioFigures {
        match self {
            ItemDetail::Priced { forecast_cost } => ScenarioFigures {
                cost: *forecast_cost,
                ..ScenarioFigures::default()
            },
            ItemDetail::Characterized { forecast, .. } => *forecast,
        }
    }
}

struct MaterialFactors {
    primary_ghg: f64,
    primary_water: f64,
    secondary_ghg: f64,
    secondary_water: f64,
    box_ghg: f64,
    box_water: f64,
}

fn factors(product: &Product, materials: &MaterialTable) -> Result<MaterialFactors, ForecastError> {
    let primary = materials.resolve(&product.primary_material)?;
    let (secondary_ghg, secondary_water) = match &product.secondary_material {
        Some(id) => {
            let secondary = materials.resolve(id)?;
            (
                secondary.gas_emission_factor,
                secondary.water_usage_factor.unwrap_or(0.0),
            )
        }
        None => (0.0, 0.0),
    };
    let cardboard = materials.cardboard()?;
    Ok(MaterialFactors {
        primary_ghg: primary.gas_emission_factor,
        primary_water: primary.water_usage_factor.unwrap_or(0.0),
        secondary_ghg,
        secondary_water,
        box_ghg: cardboard.gas_emission_factor,
        box_water: cardboard.water_usage_factor.unwrap_or(0.0),
    })
}

/// Figures for one scenario of a characterized product purchase.
fn scenario(
    product: &Product,
    factors: &MaterialFactors,
    annual_cases: f64,
    units_per_case: f64,
    cost: f64,
) -> ScenarioFigures {
    let units = units_per_case * annual_cases;
    let box_weight = product.box_weight * annual_cases;
    let primary_weight = product.primary_material_weight_per_unit * units;
    let secondary_weight = product.secondary_material_weight_per_unit * units;
    ScenarioFigures {
        cost,
        units,
        product_weight: product.item_weight * units,
        box_weight,
        primary_ghg: primary_weight * factors.primary_ghg,
        secondary_ghg: secondary_weight * factors.secondary_ghg,
        box_ghg: box_weight * factors.box_ghg,
        primary_water: primary_weight * factors.primary_water,
        secondary_water: secondary_weight * factors.secondary_water,
        box_water: box_weight * factors.box_water,
    }
}

fn taxonomy(product: &Product) -> ItemTaxonomy {
    ItemTaxonomy {
        category: product.category.clone(),
        product_type: product.product_type.clone(),
        primary_material: product.primary_material.clone(),
        secondary_material: product.secondary_material.clone(),
    }
}

/// Expand a single-use line item against the resolved catalog.
pub fn single_use_detail(
    item: &SingleUseLineItem,
    catalog: &ProductCatalog,
    materials: &MaterialTable,
) -> Result<ItemDetail, ForecastError> {
    let product = catalog.resolve(&item.product_id)?;
    let factors = factors(product, materials)?;
    let occurrence = item.frequency.annual_occurrence();

    let baseline = scenario(
        product,
        &factors,
        item.cases_purchased * occurrence,
        item.units_per_case,
        item.frequency.annualize(item.case_cost, item.cases_purchased),
    );
    let forecast = scenario(
        product,
        &factors,
        item.new_cases_purchased * occurrence,
        item.units_per_case,
        item.frequency
            .annualize(item.new_case_cost, item.new_cases_purchased),
    );

    Ok(ItemDetail::Characterized {
        taxonomy: taxonomy(product),
        baseline,
        forecast,
    })
}

/// Expand a reusable line item.
///
/// The initial purchase is a one-off outlay, so the baseline cost column is
/// zero (the outlay feeds one-time costs); for emissions the initial volume
/// is amortized as an annual purchase. The forecast scenario is the
/// recurring repurchase volume. Its product weight counts in full: that is
/// the displacement entering this year's waste stream. A
/// [`ReusableProduct::Priced`] item prices the forecast repurchase but
/// carries no taxonomy, weight, GHG, or water.
pub fn reusable_detail(
    item: &ReusableLineItem,
    catalog: &ProductCatalog,
    materials: &MaterialTable,
) -> Result<ItemDetail, ForecastError> {
    let repurchase_cases = item.cases_purchased * item.annual_repurchase_percentage;
    let repurchase_cost = item.case_cost * repurchase_cases;

    let product = match &item.product {
        ReusableProduct::Characterized { product_id } => catalog.resolve(product_id)?,
        ReusableProduct::Priced => {
            return Ok(ItemDetail::Priced {
                forecast_cost: repurchase_cost,
            });
        }
    };

    let factors = factors(product, materials)?;
    let amortized_cases = Frequency::Annually.annual_occurrence() * item.cases_purchased;
    let mut baseline = scenario(
        product,
        &factors,
        amortized_cases,
        product.units_per_case,
        0.0,
    );
    // Reusables entering service are not this year's waste.
    baseline.product_weight = 0.0;
    baseline.box_weight = 0.0;

    let forecast = scenario(
        product,
        &factors,
        repurchase_cases,
        product.units_per_case,
        repurchase_cost,
    );

    Ok(ItemDetail::Characterized {
        taxonomy: taxonomy(product),
        baseline,
        forecast,
    })
}
