// Stockpile: per-resource quantities held by a settlement

use std::collections::HashMap;

use crate::catalog::ResourceCatalog;
use crate::types::{Quantity, ResourceType};

/// Quantities of each resource on hand.
///
/// Missing and NaN entries read as zero. No floor is applied: stock may be
/// written or produced below zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stockpile {
    pub goods: HashMap<ResourceType, Quantity>,
}

impl Stockpile {
    pub fn new() -> Self {
        Self::default()
    }

    /// A stockpile with a zero entry for every catalog resource.
    pub fn for_catalog(catalog: &ResourceCatalog) -> Self {
        Self {
            goods: catalog.iter().map(|r| (r.clone(), 0.0)).collect(),
        }
    }

    pub fn get(&self, resource: impl AsRef<str>) -> Quantity {
        self.goods
            .get(resource.as_ref())
            .copied()
            .filter(|q| !q.is_nan())
            .unwrap_or(0.0)
    }

    pub fn set(&mut self, resource: impl Into<ResourceType>, quantity: Quantity) {
        self.goods.insert(resource.into(), quantity);
    }

    pub fn add(&mut self, resource: impl Into<ResourceType>, amount: Quantity) {
        *self.goods.entry(resource.into()).or_insert(0.0) += amount;
    }

    pub fn contains(&self, resource: impl AsRef<str>) -> bool {
        self.goods.contains_key(resource.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IRON_ORE;

    #[test]
    fn test_for_catalog_zeroes_every_type() {
        let catalog = ResourceCatalog::new(["IRON_ORE", "WOOD"]).unwrap();
        let stock = Stockpile::for_catalog(&catalog);
        assert_eq!(stock.goods.len(), 2);
        assert!(stock.contains("WOOD"));
        assert_eq!(stock.get(IRON_ORE), 0.0);
    }

    #[test]
    fn test_add_defaults_missing_to_zero() {
        let mut stock = Stockpile::new();
        stock.add("GRAIN", 4.0);
        stock.add("GRAIN", 2.5);
        assert_eq!(stock.get("GRAIN"), 6.5);
    }

    #[test]
    fn test_no_floor() {
        let mut stock = Stockpile::new();
        stock.add(IRON_ORE, -3.0);
        assert_eq!(stock.get(IRON_ORE), -3.0);
        stock.set(IRON_ORE, -10.0);
        assert_eq!(stock.get(IRON_ORE), -10.0);
    }

    #[test]
    fn test_unknown_reads_zero() {
        let stock = Stockpile::new();
        assert_eq!(stock.get("NOTHING"), 0.0);
        assert!(!stock.contains("NOTHING"));
    }

    #[test]
    fn test_nan_reads_zero() {
        let mut stock = Stockpile::new();
        stock.set(IRON_ORE, f64::NAN);
        assert!(stock.contains(IRON_ORE));
        assert_eq!(stock.get(IRON_ORE), 0.0);
    }
}
