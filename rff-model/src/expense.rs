use serde::{Deserialize, Serialize};

use crate::frequency::Frequency;

/// A waste-hauling service contract, billed monthly, with the fee expected
/// after the switch to reusables.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct WasteHaulingService {
    pub monthly_cost: f64,
    pub new_monthly_cost: f64,
    pub waste_stream: String,
    pub service_type: String,
}

/// An incidental expense introduced by the switch (signage, bins, training
/// materials). `OneTime` expenses count toward one-time costs only.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct OtherExpense {
    pub cost: f64,
    pub frequency: Frequency,
    pub category_id: String,
}

/// A recurring or one-time labor cost (e.g. additional dish-room staffing).
/// Shares the expense shape; composed identically.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LaborCost {
    pub cost: f64,
    pub frequency: Frequency,
    pub category_id: String,
}
