use serde::{Deserialize, Serialize};

use crate::frequency::Frequency;

/// One single-use product entry: baseline purchasing and the forecast
/// purchasing that remains after the switch to reusables.
///
/// `units_per_case` is carried on the line item (the purchased pack size),
/// not taken from the catalog, since distributors repack products.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct SingleUseLineItem {
    pub product_id: String,
    pub case_cost: f64,
    pub cases_purchased: f64,
    pub frequency: Frequency,
    pub new_case_cost: f64,
    pub new_cases_purchased: f64,
    pub units_per_case: f64,
}

/// The product reference of a reusable line item.
///
/// A `Priced` item has no catalog entry: its material composition is
/// unknown, so it can never carry taxonomy, weight, GHG, or water figures.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReusableProduct {
    Priced,
    Characterized { product_id: String },
}

/// One reusable product entry.
///
/// The baseline purchase is a one-off outlay (it feeds one-time costs, and
/// is amortized as an annual volume for emissions purposes only). The
/// forecast recurring volume covers breakage and loss:
/// `cases_purchased × annual_repurchase_percentage` cases per year.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ReusableLineItem {
    pub product: ReusableProduct,
    pub case_cost: f64,
    pub cases_purchased: f64,
    /// Fraction of the initial volume repurchased each year (0.10 = 10%).
    pub annual_repurchase_percentage: f64,
}
