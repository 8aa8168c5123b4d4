//! Forecast command: load a project snapshot, run the engine, print a
//! report.

use anyhow::Context;
use chrono::Local;
use log::info;
use serde::{Deserialize, Serialize};

use rff_engine::{ChangeSummary, ForecastReferences, ProjectForecast};
use rff_model::inventory::ProjectInventory;
use rff_model::product::{Product, ProductCatalog};

/// A project snapshot file: the inventory plus the product catalogs the
/// catalog collaborator resolved for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectFile {
    pub inventory: ProjectInventory,
    #[serde(default)]
    pub single_use_products: Vec<Product>,
    #[serde(default)]
    pub reusable_products: Vec<Product>,
}

pub fn run_forecast(project_path: &str, locale: Option<&str>, json: bool) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(project_path)
        .with_context(|| format!("failed to read project snapshot: {project_path}"))?;
    let mut file: ProjectFile =
        serde_json::from_str(&raw).context("failed to parse project snapshot JSON")?;
    if let Some(locale) = locale {
        file.inventory.locale = locale.to_string();
        file.inventory.utility_rates = None;
    }

    info!(
        "forecasting {} single-use, {} reusable items, {} dishwashers (locale {})",
        file.inventory.single_use_items.len(),
        file.inventory.reusable_items.len(),
        file.inventory.dishwashers.len(),
        file.inventory.locale,
    );

    let references = ForecastReferences::with_catalogs(
        ProductCatalog::new(std::mem::take(&mut file.single_use_products)),
        ProductCatalog::new(std::mem::take(&mut file.reusable_products)),
    );
    let forecast = rff_engine::run(&file.inventory, &references)
        .context("forecast computation aborted")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&forecast)?);
    } else {
        print_report(&forecast);
    }
    Ok(())
}

fn print_change(label: &str, summary: &ChangeSummary, unit: &str) {
    println!(
        "  {label:<28} {:>14.2} {:>14.2} {:>14.2} {unit:>6} {:>9.2}%",
        summary.baseline, summary.forecast, summary.change, summary.change_percent
    );
}

fn print_report(forecast: &ProjectForecast) {
    let now = Local::now();
    println!("Reusable foodware forecast, {}", now.format("%Y-%m-%d %H:%M"));
    println!();
    println!(
        "  {:<28} {:>14} {:>14} {:>14} {:>6} {:>10}",
        "", "baseline", "forecast", "change", "unit", "change %"
    );

    println!("Annual summary");
    print_change("dollar cost", &forecast.annual_summary.dollar_cost, "$");
    print_change(
        "single-use products",
        &forecast.annual_summary.single_use_product_count,
        "ct",
    );
    print_change(
        "greenhouse gas",
        &forecast.annual_summary.greenhouse_gas_emissions,
        "MT",
    );
    print_change("waste weight", &forecast.annual_summary.waste_weight, "lb");

    println!("Annual cost changes");
    let changes = &forecast.financial.annual_cost_changes;
    print_change("single-use purchasing", &changes.single_use, "$");
    print_change("reusable repurchase", &changes.reusable_repurchase, "$");
    print_change("dishwashing utilities", &changes.dishwashers, "$");
    print_change("waste hauling", &changes.waste_hauling, "$");
    print_change("other expenses", &changes.other_expenses, "$");
    print_change("total", &changes.total, "$");

    let one_time = &forecast.financial.one_time_costs;
    let summary = &forecast.financial.summary;
    println!("One-time costs");
    println!("  {:<28} {:>14.2} $", "expenses", one_time.expenses);
    println!(
        "  {:<28} {:>14.2} $",
        "reusable purchases", one_time.reusable_purchases
    );
    println!("  {:<28} {:>14.2} $", "total", one_time.total);

    println!("Summary");
    if summary.payback_period_months > 0 {
        println!(
            "  pays back in {} month(s); annual ROI {:.2}%",
            summary.payback_period_months, summary.annual_roi_percent
        );
    } else {
        println!("  no payback: the forecast does not reduce annual cost");
    }

    println!("Environmental changes");
    let gas = &forecast.environmental.annual_gas_emission_changes;
    print_change("GHG: landfill waste", &gas.landfill_waste, "MT");
    print_change("GHG: dishwashing", &gas.dishwashing, "MT");
    print_change("GHG: shipping boxes", &gas.shipping_box, "MT");
    print_change("GHG: total", &gas.total, "MT");
    let waste = &forecast.environmental.annual_waste_changes;
    print_change("waste: products", &waste.product_weight, "lb");
    print_change("waste: shipping boxes", &waste.shipping_box_weight, "lb");
    print_change("waste: total", &waste.total, "lb");
    let water = &forecast.environmental.annual_water_usage_changes;
    print_change("water: products", &water.products, "gal");
    print_change("water: dishwashing", &water.dishwashing, "gal");
    print_change("water: shipping boxes", &water.shipping_box, "gal");
    print_change("water: total", &water.total, "gal");
}

#[cfg(test)]
mod tests {
    use super::ProjectFile;

    #[test]
    fn test_parse_minimal_project_file() {
        let raw = r#"{
            "inventory": {
                "locale": "CA",
                "single_use_items": [],
                "reusable_items": [],
                "dishwashers": [],
                "waste_hauling": [],
                "other_expenses": [],
                "labor_costs": []
            }
        }"#;
        let file: ProjectFile = serde_json::from_str(raw).unwrap();
        assert_eq!(file.inventory.locale, "CA");
        assert!(file.single_use_products.is_empty());
        assert!(file.inventory.utility_rates.is_none());
    }

    #[test]
    fn test_parse_project_file_with_items() {
        let raw = r#"{
            "inventory": {
                "locale": "CA",
                "single_use_items": [{
                    "product_id": "cup-16oz",
                    "case_cost": 95.0,
                    "cases_purchased": 4.0,
                    "frequency": "Weekly",
                    "new_case_cost": 95.0,
                    "new_cases_purchased": 0.5,
                    "units_per_case": 1000.0
                }],
                "reusable_items": [{
                    "product": { "kind": "priced" },
                    "case_cost": 46.0,
                    "cases_purchased": 1.0,
                    "annual_repurchase_percentage": 0.1
                }]
            },
            "single_use_products": [{
                "id": "cup-16oz",
                "category": "Cups",
                "product_type": "Cold Cup",
                "size": "16 oz",
                "primary_material": "pet",
                "primary_material_weight_per_unit": 0.028,
                "secondary_material": null,
                "secondary_material_weight_per_unit": 0.0,
                "box_weight": 2.4,
                "item_weight": 0.028,
                "units_per_case": 1000.0
            }]
        }"#;
        let file: ProjectFile = serde_json::from_str(raw).unwrap();
        assert_eq!(file.inventory.single_use_items.len(), 1);
        assert_eq!(
            file.inventory.reusable_items[0].product,
            rff_model::line_item::ReusableProduct::Priced
        );
        assert_eq!(file.single_use_products[0].primary_material, "pet");
    }
}
