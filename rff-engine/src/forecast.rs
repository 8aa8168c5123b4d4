//! Top-level forecast entry point.
//!
//! One invocation reads an immutable [`ProjectInventory`] snapshot plus the
//! reference tables and returns freshly allocated result trees. The engine
//! is pure and synchronous: no I/O, no retries, and any data-integrity
//! failure aborts the whole computation.

use log::debug;
use serde::{Deserialize, Serialize};

use rff_model::dishwasher::ProfileTable;
use rff_model::inventory::ProjectInventory;
use rff_model::material::MaterialTable;
use rff_model::product::ProductCatalog;
use rff_model::rates::UtilityRates;
use rff_model::ForecastError;

use crate::dishwasher::{self, DishwasherResults};
use crate::environmental::{self, EnvironmentalResults};
use crate::financial::{self, FinancialResults};
use crate::line_item::{reusable_detail, single_use_detail, ItemDetail};
use crate::purchasing::{family_results, ProductForecastResults};
use crate::summary::ChangeSummary;

/// The immutable reference tables a forecast resolves against. The engine
/// depends on these but does not own them; callers may substitute their
/// own tables and catalogs.
#[derive(Debug, Clone)]
pub struct ForecastReferences {
    pub materials: MaterialTable,
    pub profiles: ProfileTable,
    pub single_use_catalog: ProductCatalog,
    pub reusable_catalog: ProductCatalog,
}

impl ForecastReferences {
    /// Default reference tables with caller-supplied catalogs; the catalog
    /// collaborator resolves catalogs per request.
    pub fn with_catalogs(single_use: ProductCatalog, reusable: ProductCatalog) -> Self {
        ForecastReferences {
            materials: MaterialTable::default_table(),
            profiles: ProfileTable::default_table(),
            single_use_catalog: single_use,
            reusable_catalog: reusable,
        }
    }
}

/// Top-level rollup consumed by the presentation layer.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct AnnualSummary {
    pub dollar_cost: ChangeSummary,
    pub single_use_product_count: ChangeSummary,
    /// Metric tons CO2e.
    pub greenhouse_gas_emissions: ChangeSummary,
    /// lb.
    pub waste_weight: ChangeSummary,
}

/// The complete result tree for one project snapshot.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ProjectForecast {
    pub annual_summary: AnnualSummary,
    pub financial: FinancialResults,
    pub environmental: EnvironmentalResults,
    pub dishwashers: DishwasherResults,
    pub single_use: ProductForecastResults,
    pub reusable: ProductForecastResults,
}

/// Run the full forecast over a project snapshot.
pub fn run(
    inventory: &ProjectInventory,
    references: &ForecastReferences,
) -> Result<ProjectForecast, ForecastError> {
    let rates = match inventory.utility_rates {
        Some(rates) => rates,
        None => UtilityRates::for_locale(&inventory.locale)?,
    };

    let single_use: Vec<ItemDetail> = inventory
        .single_use_items
        .iter()
        .map(|item| single_use_detail(item, &references.single_use_catalog, &references.materials))
        .collect::<Result<_, _>>()?;
    let reusables: Vec<ItemDetail> = inventory
        .reusable_items
        .iter()
        .map(|item| reusable_detail(item, &references.reusable_catalog, &references.materials))
        .collect::<Result<_, _>>()?;
    let dishwasher_deltas =
        dishwasher::fleet_deltas(&inventory.dishwashers, &references.profiles, &rates)?;
    debug!(
        "expanded {} single-use, {} reusable, {} dishwasher entries",
        single_use.len(),
        reusables.len(),
        dishwasher_deltas.len()
    );

    let financial = financial::compose(
        &single_use,
        &reusables,
        &inventory.reusable_items,
        &dishwasher_deltas,
        &inventory.waste_hauling,
        &inventory.other_expenses,
        &inventory.labor_costs,
    );
    let environmental = environmental::compose(&single_use, &reusables, &dishwasher_deltas);
    let dishwashers = dishwasher::fleet_results(&dishwasher_deltas);
    let single_use_results = family_results(&single_use);
    let reusable_results = family_results(&reusables);

    let annual_summary = AnnualSummary {
        dollar_cost: financial.annual_cost_changes.total,
        single_use_product_count: single_use_results.summary.product_count,
        greenhouse_gas_emissions: environmental.annual_gas_emission_changes.total,
        waste_weight: environmental.annual_waste_changes.total,
    };

    Ok(ProjectForecast {
        annual_summary,
        financial,
        environmental,
        dishwashers,
        single_use: single_use_results,
        reusable: reusable_results,
    })
}
