use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tsify_next::Tsify;

use crate::settlement::Settlement;
use crate::types::ResourceType;

// ============================================================================
// Snapshots - read-only views handed across the WASM boundary
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct ResourceSnapshot {
    pub resource: String,
    pub quantity: f64,
    pub production_rate: f64,
    pub price: Option<f64>, // None when unpriced
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct SettlementSnapshot {
    pub name: String,
    pub tick: u64,
    pub resources: Vec<ResourceSnapshot>, // Sorted by resource id
}

impl From<&Settlement> for SettlementSnapshot {
    fn from(settlement: &Settlement) -> Self {
        // Every resource the settlement knows about in any capacity
        let ids: BTreeSet<&ResourceType> = settlement
            .resources
            .goods
            .keys()
            .chain(settlement.production_rates().map(|(r, _)| r))
            .chain(settlement.pricing.keys())
            .collect();

        let resources = ids
            .into_iter()
            .map(|r| ResourceSnapshot {
                resource: r.to_string(),
                quantity: settlement.resource_quantity(r),
                production_rate: settlement.production_rate(r),
                price: settlement.price(r),
            })
            .collect();

        SettlementSnapshot {
            name: settlement.name().to_string(),
            tick: settlement.tick(),
            resources,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ResourceCatalog;
    use crate::types::IRON_ORE;

    #[test]
    fn test_snapshot_covers_stock_production_and_pricing() {
        let mut s = Settlement::new("Northwood", &ResourceCatalog::builtin());
        s.set_production_rate("WOOD", 2.0);
        s.set_pricing("SALT", crate::PricingParams::new(3.0, 0.0, 1.0));
        s.advance_production();

        let snap = SettlementSnapshot::from(&s);
        assert_eq!(snap.name, "Northwood");
        assert_eq!(snap.tick, 1);

        let ids: Vec<&str> = snap.resources.iter().map(|r| r.resource.as_str()).collect();
        assert_eq!(ids, vec![IRON_ORE, "SALT", "WOOD"]);

        let wood = &snap.resources[2];
        assert_eq!(wood.quantity, 2.0);
        assert_eq!(wood.production_rate, 2.0);
        assert_eq!(wood.price, None);

        let salt = &snap.resources[1];
        assert_eq!(salt.quantity, 0.0);
        assert_eq!(salt.price, Some(3.0));
    }

    #[test]
    fn test_unpriced_serializes_as_null() {
        let mut s = Settlement::new("Northwood", &ResourceCatalog::new(["WOOD"]).unwrap());
        s.pricing.clear();
        let json = serde_json::to_value(SettlementSnapshot::from(&s)).unwrap();
        assert_eq!(json["resources"][0]["resource"], "WOOD");
        assert!(json["resources"][0]["price"].is_null());
    }
}
