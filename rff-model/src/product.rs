use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::ForecastError;

/// Catalog reference data for a single-use or reusable product.
///
/// Weights are in pounds. `item_weight` is the total shipped weight of one
/// unit; the primary/secondary material weights are the portions of that
/// unit attributable to each material for impact accounting. `box_weight`
/// is the cardboard shipping box for one case.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub category: String,
    pub product_type: String,
    pub size: String,
    pub primary_material: String,
    pub primary_material_weight_per_unit: f64,
    pub secondary_material: Option<String>,
    pub secondary_material_weight_per_unit: f64,
    pub box_weight: f64,
    pub item_weight: f64,
    pub units_per_case: f64,
}

/// Immutable product catalog keyed by product id, resolved by an external
/// catalog collaborator and handed to the engine per request.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: HashMap<String, Product>,
}

impl ProductCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        let products = products.into_iter().map(|p| (p.id.clone(), p)).collect();
        ProductCatalog { products }
    }

    /// Resolve a product id, failing on any id absent from the catalog.
    pub fn resolve(&self, id: &str) -> Result<&Product, ForecastError> {
        self.products
            .get(id)
            .ok_or_else(|| ForecastError::MissingProduct(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Product, ProductCatalog};
    use crate::error::ForecastError;

    fn cup() -> Product {
        Product {
            id: "cup-16oz".to_string(),
            category: "Cups".to_string(),
            product_type: "Cold Cup".to_string(),
            size: "16 oz".to_string(),
            primary_material: "pet".to_string(),
            primary_material_weight_per_unit: 0.028,
            secondary_material: None,
            secondary_material_weight_per_unit: 0.0,
            box_weight: 2.4,
            item_weight: 0.028,
            units_per_case: 1000.0,
        }
    }

    #[test]
    fn test_resolve_product() {
        let catalog = ProductCatalog::new(vec![cup()]);
        assert_eq!(catalog.resolve("cup-16oz").unwrap().category, "Cups");
    }

    #[test]
    fn test_missing_product_fails() {
        let catalog = ProductCatalog::new(vec![cup()]);
        let err = catalog.resolve("cup-12oz").unwrap_err();
        assert_eq!(err, ForecastError::MissingProduct("cup-12oz".to_string()));
    }
}
