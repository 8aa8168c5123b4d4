//! Aggregation/grouping engine: cross-tabs of line-item results by product
//! category, product type, and material.
//!
//! Rows accumulate at full precision and are summarized once. Rows that are
//! zero across every metric in both scenarios are dropped from the row list
//! but still contribute (as zero) to the totals, which are computed from
//! the raw sums rather than from rounded rows.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use rff_model::material::CARDBOARD_ID;
use rff_model::LB_PER_METRIC_TON;

use crate::line_item::ItemDetail;
use crate::summary::{ChangeSummary, Tally};

/// Full-precision accumulation for one row of a cross-tab.
#[derive(Debug, Clone, Copy, Default)]
struct RawRow {
    cost: Tally,
    weight: Tally,
    ghg_lb: Tally,
    water: Tally,
}

impl RawRow {
    fn is_zero(&self) -> bool {
        let tallies = [self.cost, self.weight, self.ghg_lb, self.water];
        tallies
            .iter()
            .all(|t| t.baseline == 0.0 && t.forecast == 0.0)
    }
}

/// One row of a cross-tab, keyed by category, product type, or material id.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct GroupedRow {
    pub key: String,
    pub cost: ChangeSummary,
    /// lb
    pub weight: ChangeSummary,
    /// Metric tons CO2e.
    pub ghg: ChangeSummary,
    /// Gallons.
    pub water: ChangeSummary,
}

/// A cross-tab: surviving rows plus totals over all contributing rows.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct GroupedResults {
    pub rows: Vec<GroupedRow>,
    pub totals: GroupedRow,
}

/// The three independent cross-tabs for one product family.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ResultsByType {
    pub material: GroupedResults,
    pub product_type: GroupedResults,
    pub product_category: GroupedResults,
}

fn summarize(key: &str, raw: &RawRow) -> GroupedRow {
    GroupedRow {
        key: key.to_string(),
        cost: raw.cost.summarize(),
        weight: raw.weight.summarize(),
        ghg: raw.ghg_lb.summarize_scaled(LB_PER_METRIC_TON),
        water: raw.water.summarize(),
    }
}

fn finish(rows: BTreeMap<String, RawRow>) -> GroupedResults {
    let mut totals = RawRow::default();
    for raw in rows.values() {
        totals.cost.add(raw.cost.baseline, raw.cost.forecast);
        totals.weight.add(raw.weight.baseline, raw.weight.forecast);
        totals.ghg_lb.add(raw.ghg_lb.baseline, raw.ghg_lb.forecast);
        totals.water.add(raw.water.baseline, raw.water.forecast);
    }
    let rows = rows
        .iter()
        .filter(|(_, raw)| !raw.is_zero())
        .map(|(key, raw)| summarize(key, raw))
        .collect();
    GroupedResults {
        rows,
        totals: summarize("total", &totals),
    }
}

/// Cross-tab over a full-item key (category or product type): each item
/// contributes its complete figures to exactly one row.
fn by_item_key<F>(details: &[ItemDetail], key_of: F) -> GroupedResults
where
    F: Fn(&ItemDetail) -> Option<&str>,
{
    let mut rows: BTreeMap<String, RawRow> = BTreeMap::new();
    for detail in details {
        let Some(key) = key_of(detail) else {
            continue;
        };
        let (base, fore) = (detail.baseline(), detail.forecast());
        let row = rows.entry(key.to_string()).or_default();
        row.cost.add(base.cost, fore.cost);
        row.weight.add(base.total_weight(), fore.total_weight());
        row.ghg_lb.add(base.total_ghg(), fore.total_ghg());
        row.water.add(base.total_water(), fore.total_water());
    }
    finish(rows)
}

/// Cross-tab by material. Every item lands once in its primary bucket, at
/// most once in a secondary bucket, and once in the cardboard bucket for
/// its shipping boxes, regardless of its own materials. Dollar cost rides
/// with the primary bucket; it cannot be split by composition.
fn by_material(details: &[ItemDetail]) -> GroupedResults {
    let mut rows: BTreeMap<String, RawRow> = BTreeMap::new();
    for detail in details {
        let Some(taxonomy) = detail.taxonomy() else {
            continue;
        };
        let (base, fore) = (detail.baseline(), detail.forecast());

        let primary = rows.entry(taxonomy.primary_material.clone()).or_default();
        primary.cost.add(base.cost, fore.cost);
        primary.weight.add(base.product_weight, fore.product_weight);
        primary.ghg_lb.add(base.primary_ghg, fore.primary_ghg);
        primary.water.add(base.primary_water, fore.primary_water);

        if let Some(secondary_id) = &taxonomy.secondary_material {
            let secondary = rows.entry(secondary_id.clone()).or_default();
            secondary.ghg_lb.add(base.secondary_ghg, fore.secondary_ghg);
            secondary
                .water
                .add(base.secondary_water, fore.secondary_water);
        }

        let cardboard = rows.entry(CARDBOARD_ID.to_string()).or_default();
        cardboard.weight.add(base.box_weight, fore.box_weight);
        cardboard.ghg_lb.add(base.box_ghg, fore.box_ghg);
        cardboard.water.add(base.box_water, fore.box_water);
    }
    finish(rows)
}

/// Build all three cross-tabs for one product family.
pub fn results_by_type(details: &[ItemDetail]) -> ResultsByType {
    ResultsByType {
        material: by_material(details),
        product_type: by_item_key(details, |d| d.taxonomy().map(|t| t.product_type.as_str())),
        product_category: by_item_key(details, |d| d.taxonomy().map(|t| t.category.as_str())),
    }
}
