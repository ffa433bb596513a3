// Scarcity pricing: price moves linearly with deviation from a target stock

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{Price, Quantity, ResourceType};

/// Floor applied to every computed price.
pub const MIN_PRICE: Price = 1.0;

/// Per-resource pricing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingParams {
    /// Price when stock sits exactly at `target_quantity`
    pub base_price: Price,
    /// Stock level considered "balanced"
    pub target_quantity: Quantity,
    /// Price change per unit of deviation from the target
    pub scarcity_multiplier: f64,
}

impl Default for PricingParams {
    /// Iron ore defaults.
    fn default() -> Self {
        Self {
            base_price: 10.0,
            target_quantity: 100.0,
            scarcity_multiplier: 0.1,
        }
    }
}

impl PricingParams {
    pub fn new(base_price: Price, target_quantity: Quantity, scarcity_multiplier: f64) -> Self {
        Self {
            base_price,
            target_quantity,
            scarcity_multiplier,
        }
    }

    /// Price for a given stock level.
    ///
    /// `base + (target - quantity) * multiplier`, floored at [`MIN_PRICE`].
    /// Stateless: the same quantity always yields the same price.
    pub fn price_at(&self, quantity: Quantity) -> Price {
        let price =
            self.base_price + (self.target_quantity - quantity) * self.scarcity_multiplier;
        if price < MIN_PRICE { MIN_PRICE } else { price }
    }

    /// Check the parameters once, when they enter the system from configuration.
    pub fn validate(&self, resource: &ResourceType) -> Result<(), ConfigError> {
        let invalid = |reason| ConfigError::InvalidPricing {
            resource: resource.clone(),
            reason,
        };
        if !(self.base_price.is_finite()
            && self.target_quantity.is_finite()
            && self.scarcity_multiplier.is_finite())
        {
            return Err(invalid("parameters must be finite"));
        }
        if self.base_price <= 0.0 {
            return Err(invalid("base_price must be > 0"));
        }
        if self.target_quantity < 0.0 {
            return Err(invalid("target_quantity must be >= 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_curve_points() {
        let p = PricingParams::default();
        assert!((p.price_at(0.0) - 20.0).abs() < 1e-9);
        assert!((p.price_at(100.0) - 10.0).abs() < 1e-9);
        assert!((p.price_at(10.0) - 19.0).abs() < 1e-9);
        assert!((p.price_at(110.0) - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_surplus_is_floored() {
        let p = PricingParams::default();
        // 10 + (100 - 500) * 0.1 = -30
        assert_eq!(p.price_at(500.0), MIN_PRICE);
        // Exactly at the floor is left alone
        assert!((p.price_at(190.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_stock_raises_price() {
        let p = PricingParams::default();
        assert!((p.price_at(-50.0) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_multiplier_is_flat() {
        let p = PricingParams::new(7.5, 100.0, 0.0);
        assert_eq!(p.price_at(0.0), 7.5);
        assert_eq!(p.price_at(1_000.0), 7.5);
    }

    #[test]
    fn test_validate() {
        let iron = ResourceType::iron_ore();
        assert!(PricingParams::default().validate(&iron).is_ok());
        // Negative multipliers are unusual but allowed
        assert!(PricingParams::new(10.0, 100.0, -0.1).validate(&iron).is_ok());

        for bad in [
            PricingParams::new(0.0, 100.0, 0.1),
            PricingParams::new(10.0, -1.0, 0.1),
            PricingParams::new(f64::NAN, 100.0, 0.1),
            PricingParams::new(10.0, 100.0, f64::INFINITY),
        ] {
            assert!(
                matches!(bad.validate(&iron), Err(ConfigError::InvalidPricing { .. })),
                "{bad:?} should be rejected"
            );
        }
    }
}
