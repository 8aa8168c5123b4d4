use serde::{Deserialize, Serialize};

use crate::dishwasher::Dishwasher;
use crate::expense::{LaborCost, OtherExpense, WasteHaulingService};
use crate::line_item::{ReusableLineItem, SingleUseLineItem};
use crate::rates::UtilityRates;

/// The aggregate root handed to the engine: everything one forecast
/// computation reads, assembled once per request by an external
/// collaborator and treated as an immutable snapshot.
///
/// When `utility_rates` is absent the engine resolves rates from `locale`
/// against the registered locale table.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ProjectInventory {
    pub locale: String,
    #[serde(default)]
    pub utility_rates: Option<UtilityRates>,
    #[serde(default)]
    pub single_use_items: Vec<SingleUseLineItem>,
    #[serde(default)]
    pub reusable_items: Vec<ReusableLineItem>,
    #[serde(default)]
    pub dishwashers: Vec<Dishwasher>,
    #[serde(default)]
    pub waste_hauling: Vec<WasteHaulingService>,
    #[serde(default)]
    pub other_expenses: Vec<OtherExpense>,
    #[serde(default)]
    pub labor_costs: Vec<LaborCost>,
}
