use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::ForecastError;

/// Material id of corrugated cardboard. Every cased product ships in a
/// cardboard box, so this bucket receives the shipping-box contribution of
/// every line item regardless of the item's own materials.
pub const CARDBOARD_ID: &str = "cardboard";

/// A packaging material and its per-pound impact factors.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Material {
    pub id: String,
    pub name: String,
    /// lb CO2e emitted per lb of material sent to landfill.
    pub gas_emission_factor: f64,
    /// Gallons of water consumed per lb of material produced. Not every
    /// material has a published factor.
    pub water_usage_factor: Option<f64>,
}

/// Immutable material reference table keyed by material id.
///
/// Built once per computation; an unmatched id is a data-integrity bug and
/// aborts the forecast rather than silently defaulting.
#[derive(Debug, Clone)]
pub struct MaterialTable {
    materials: HashMap<String, Material>,
}

impl MaterialTable {
    pub fn new(materials: Vec<Material>) -> Self {
        let materials = materials
            .into_iter()
            .map(|m| (m.id.clone(), m))
            .collect();
        MaterialTable { materials }
    }

    /// Resolve a material id, failing on any unrecognized key.
    pub fn resolve(&self, id: &str) -> Result<&Material, ForecastError> {
        self.materials
            .get(id)
            .ok_or_else(|| ForecastError::UnknownMaterial(id.to_string()))
    }

    /// The fixed cardboard material used for shipping-box contributions.
    pub fn cardboard(&self) -> Result<&Material, ForecastError> {
        self.resolve(CARDBOARD_ID)
    }

    /// The default table of common foodservice packaging materials.
    pub fn default_table() -> Self {
        let materials = vec![
            Material {
                id: "pet".to_string(),
                name: "PET plastic".to_string(),
                gas_emission_factor: 2.72,
                water_usage_factor: Some(1.80),
            },
            Material {
                id: "pp".to_string(),
                name: "Polypropylene".to_string(),
                gas_emission_factor: 1.95,
                water_usage_factor: Some(1.20),
            },
            Material {
                id: "ps".to_string(),
                name: "Polystyrene".to_string(),
                gas_emission_factor: 3.38,
                water_usage_factor: Some(1.50),
            },
            Material {
                id: "pla".to_string(),
                name: "PLA bioplastic".to_string(),
                gas_emission_factor: 1.30,
                water_usage_factor: Some(2.40),
            },
            Material {
                id: "paper".to_string(),
                name: "Paper".to_string(),
                gas_emission_factor: 1.20,
                water_usage_factor: Some(2.10),
            },
            Material {
                id: CARDBOARD_ID.to_string(),
                name: "Corrugated cardboard".to_string(),
                gas_emission_factor: 1.06,
                water_usage_factor: Some(1.70),
            },
            Material {
                id: "aluminum".to_string(),
                name: "Aluminum".to_string(),
                gas_emission_factor: 8.14,
                water_usage_factor: Some(3.90),
            },
            Material {
                id: "glass".to_string(),
                name: "Glass".to_string(),
                gas_emission_factor: 0.60,
                water_usage_factor: Some(0.90),
            },
            Material {
                id: "steel".to_string(),
                name: "Stainless steel".to_string(),
                gas_emission_factor: 2.45,
                water_usage_factor: Some(2.00),
            },
            Material {
                id: "bamboo".to_string(),
                name: "Bamboo".to_string(),
                gas_emission_factor: 0.85,
                water_usage_factor: Some(1.10),
            },
        ];
        MaterialTable::new(materials)
    }
}

#[cfg(test)]
mod tests {
    use super::{MaterialTable, CARDBOARD_ID};
    use crate::error::ForecastError;

    #[test]
    fn test_resolve_known_material() {
        let table = MaterialTable::default_table();
        let pet = table.resolve("pet").unwrap();
        assert_eq!(pet.name, "PET plastic");
        assert_eq!(pet.gas_emission_factor, 2.72);
        assert_eq!(pet.water_usage_factor, Some(1.80));
    }

    #[test]
    fn test_resolve_unknown_material_fails() {
        let table = MaterialTable::default_table();
        let err = table.resolve("unobtainium").unwrap_err();
        assert_eq!(
            err,
            ForecastError::UnknownMaterial("unobtainium".to_string())
        );
    }

    #[test]
    fn test_cardboard_always_present() {
        let table = MaterialTable::default_table();
        let cardboard = table.cardboard().unwrap();
        assert_eq!(cardboard.id, CARDBOARD_ID);
        assert!(cardboard.gas_emission_factor > 0.0);
    }
}
