//! Financial results composer: annual cost change by source, one-time
//! costs, and the payback/ROI summary.

use serde::{Deserialize, Serialize};

use rff_model::expense::{LaborCost, OtherExpense, WasteHaulingService};
use rff_model::frequency::Frequency;
use rff_model::line_item::ReusableLineItem;

use crate::dishwasher::DishwasherDelta;
use crate::line_item::ItemDetail;
use crate::summary::{round2, ChangeSummary, Tally};

/// Annual cost change broken down by source. Every leaf follows the
/// forecast-minus-baseline convention, so a saving is negative.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CostChangeBreakdown {
    pub single_use: ChangeSummary,
    pub reusable_repurchase: ChangeSummary,
    pub dishwashers: ChangeSummary,
    pub waste_hauling: ChangeSummary,
    pub other_expenses: ChangeSummary,
    pub total: ChangeSummary,
}

/// One-off outlays of the switch. These never enter annual change totals.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct OneTimeCosts {
    pub expenses: f64,
    pub reusable_purchases: f64,
    pub total: f64,
}

/// Headline figures. `payback_period_months` is zero when the forecast
/// costs more annually than the baseline: a switch that loses money every
/// year never pays back. `annual_roi_percent` is zero when there is no
/// cost basis or when the outlay is not recovered within a year.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub annual_cost_change: f64,
    pub one_time_cost: f64,
    pub payback_period_months: u32,
    pub annual_roi_percent: f64,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct FinancialResults {
    pub annual_cost_changes: CostChangeBreakdown,
    pub one_time_costs: OneTimeCosts,
    pub summary: FinancialSummary,
}

fn recurring_expense_total(expenses: &[OtherExpense], labor: &[LaborCost]) -> f64 {
    let other: f64 = expenses
        .iter()
        .map(|e| e.frequency.annualize(e.cost, 1.0))
        .sum();
    let labor: f64 = labor
        .iter()
        .map(|l| l.frequency.annualize(l.cost, 1.0))
        .sum();
    other + labor
}

fn one_time_expense_total(expenses: &[OtherExpense], labor: &[LaborCost]) -> f64 {
    let other: f64 = expenses
        .iter()
        .filter(|e| e.frequency == Frequency::OneTime)
        .map(|e| e.cost)
        .sum();
    let labor: f64 = labor
        .iter()
        .filter(|l| l.frequency == Frequency::OneTime)
        .map(|l| l.cost)
        .sum();
    other + labor
}

pub(crate) fn payback_period_months(one_time_cost: f64, annual_cost_change: f64) -> u32 {
    if annual_cost_change < 0.0 {
        (-one_time_cost / annual_cost_change * 12.0).ceil() as u32
    } else {
        0
    }
}

pub(crate) fn annual_roi_percent(one_time_cost: f64, annual_cost_change: f64) -> f64 {
    if one_time_cost == 0.0 || one_time_cost + annual_cost_change > 0.0 {
        0.0
    } else {
        round2(100.0 * (-annual_cost_change - one_time_cost) / one_time_cost)
    }
}

/// Compose the financial results from full-precision inputs.
pub fn compose(
    single_use: &[ItemDetail],
    reusables: &[ItemDetail],
    reusable_items: &[ReusableLineItem],
    dishwashers: &[DishwasherDelta],
    waste_hauling: &[WasteHaulingService],
    other_expenses: &[OtherExpense],
    labor_costs: &[LaborCost],
) -> FinancialResults {
    let mut single_use_tally = Tally::default();
    for detail in single_use {
        single_use_tally.add(detail.baseline().cost, detail.forecast().cost);
    }
    let mut reusable_tally = Tally::default();
    for detail in reusables {
        reusable_tally.add(detail.baseline().cost, detail.forecast().cost);
    }
    let mut dishwasher_tally = Tally::default();
    for delta in dishwashers {
        dishwasher_tally.add(delta.baseline_cost, delta.forecast_cost);
    }
    let mut hauling_tally = Tally::default();
    for service in waste_hauling {
        hauling_tally.add(service.monthly_cost * 12.0, service.new_monthly_cost * 12.0);
    }
    let expense_tally = Tally {
        baseline: 0.0,
        forecast: recurring_expense_total(other_expenses, labor_costs),
    };

    let total = Tally {
        baseline: single_use_tally.baseline
            + reusable_tally.baseline
            + dishwasher_tally.baseline
            + hauling_tally.baseline
            + expense_tally.baseline,
        forecast: single_use_tally.forecast
            + reusable_tally.forecast
            + dishwasher_tally.forecast
            + hauling_tally.forecast
            + expense_tally.forecast,
    };

    let reusable_purchases: f64 = reusable_items
        .iter()
        .map(|item| item.case_cost * item.cases_purchased)
        .sum();
    let one_time_expenses = one_time_expense_total(other_expenses, labor_costs);
    let one_time_total = one_time_expenses + reusable_purchases;

    let annual_cost_change = total.forecast - total.baseline;
    let summary = FinancialSummary {
        annual_cost_change: round2(annual_cost_change),
        one_time_cost: round2(one_time_total),
        payback_period_months: payback_period_months(one_time_total, annual_cost_change),
        annual_roi_percent: annual_roi_percent(one_time_total, annual_cost_change),
    };

    FinancialResults {
        annual_cost_changes: CostChangeBreakdown {
            single_use: single_use_tally.summarize(),
            reusable_repurchase: reusable_tally.summarize(),
            dishwashers: dishwasher_tally.summarize(),
            waste_hauling: hauling_tally.summarize(),
            other_expenses: expense_tally.summarize(),
            total: total.summarize(),
        },
        one_time_costs: OneTimeCosts {
            expenses: round2(one_time_expenses),
            reusable_purchases: round2(reusable_purchases),
            total: round2(one_time_total),
        },
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rff_model::line_item::ReusableProduct;

    #[test]
    fn test_payback_only_when_saving() {
        // forecast costs more: never pays back
        assert_eq!(payback_period_months(10_000.0, 5_000.0), 0);
        assert_eq!(payback_period_months(10_000.0, 0.0), 0);
        // reference scenario: ceil(10,046 / 30,198.1104 x 12) = 4
        assert_eq!(payback_period_months(10_046.0, -30_198.1104), 4);
        // exactly one year
        assert_eq!(payback_period_months(1_200.0, -1_200.0), 12);
    }

    #[test]
    fn test_roi_zero_without_cost_basis() {
        assert_eq!(annual_roi_percent(0.0, -5_000.0), 0.0);
    }

    #[test]
    fn test_roi_zero_when_not_recovered_within_a_year() {
        assert_eq!(annual_roi_percent(10_000.0, -4_000.0), 0.0);
        assert_eq!(annual_roi_percent(10_000.0, 2_000.0), 0.0);
    }

    #[test]
    fn test_roi_reference_scenario() {
        // 100 x (30,198.1104 - 10,046) / 10,046 = 200.5983... -> 200.6
        assert_eq!(annual_roi_percent(10_046.0, -30_198.1104), 200.6);
    }

    #[test]
    fn test_one_time_frequency_never_recurs() {
        let expenses = vec![
            OtherExpense {
                cost: 10_000.0,
                frequency: Frequency::OneTime,
                category_id: "signage".to_string(),
            },
            OtherExpense {
                cost: 40.0,
                frequency: Frequency::Monthly,
                category_id: "detergent".to_string(),
            },
        ];
        let labor = vec![LaborCost {
            cost: 120.0,
            frequency: Frequency::OneTime,
            category_id: "training".to_string(),
        }];
        assert_eq!(recurring_expense_total(&expenses, &labor), 480.0);
        assert_eq!(one_time_expense_total(&expenses, &labor), 10_120.0);
    }

    #[test]
    fn test_compose_waste_hauling_and_reusables() {
        let reusable_items = vec![ReusableLineItem {
            product: ReusableProduct::Priced,
            case_cost: 46.0,
            cases_purchased: 1.0,
            annual_repurchase_percentage: 0.10,
        }];
        let hauling = vec![WasteHaulingService {
            monthly_cost: 450.0,
            new_monthly_cost: 242.60,
            waste_stream: "Landfill".to_string(),
            service_type: "Compactor".to_string(),
        }];
        let results = compose(&[], &[], &reusable_items, &[], &hauling, &[], &[]);

        assert_eq!(results.annual_cost_changes.waste_hauling.baseline, 5_400.0);
        assert_eq!(results.annual_cost_changes.waste_hauling.forecast, 2_911.2);
        assert_eq!(results.annual_cost_changes.waste_hauling.change, -2_488.8);
        assert_eq!(results.one_time_costs.reusable_purchases, 46.0);
        assert_eq!(results.one_time_costs.total, 46.0);
        // saving with a tiny outlay: pays back within the first month
        assert_eq!(results.summary.payback_period_months, 1);
    }
}
