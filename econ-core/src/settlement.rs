// Settlement: resource stocks, production rates and scarcity pricing

use std::collections::HashMap;

use crate::catalog::ResourceCatalog;
use crate::config::EconomyConfig;
use crate::pricing::PricingParams;
use crate::stockpile::Stockpile;
use crate::types::{Price, Quantity, ResourceType};

/// An economic actor holding stock, production and pricing per resource type.
///
/// A plain mutable record: `resources` and `pricing` are public so callers can
/// stage scarcity or surplus directly, and prices follow such writes at once.
#[derive(Debug, Clone)]
pub struct Settlement {
    name: String,
    pub resources: Stockpile,
    pub pricing: HashMap<ResourceType, PricingParams>,
    production: HashMap<ResourceType, Quantity>,
    tick: u64,
}

impl Settlement {
    /// Zero stock for every catalog resource, no production, iron ore priced
    /// with the default parameters.
    pub fn new(name: impl Into<String>, catalog: &ResourceCatalog) -> Self {
        let mut pricing = HashMap::new();
        pricing.insert(ResourceType::iron_ore(), PricingParams::default());
        Self {
            name: name.into(),
            resources: Stockpile::for_catalog(catalog),
            pricing,
            production: HashMap::new(),
            tick: 0,
        }
    }

    /// Like [`Settlement::new`] but takes the pricing table from `config`.
    pub fn from_config(name: impl Into<String>, config: &EconomyConfig) -> Self {
        Self {
            name: name.into(),
            resources: Stockpile::for_catalog(&config.catalog),
            pricing: config
                .pricing
                .iter()
                .map(|(r, p)| (r.clone(), *p))
                .collect(),
            production: HashMap::new(),
            tick: 0,
        }
    }

    pub fn with_production(mut self, resource: impl Into<ResourceType>, rate: Quantity) -> Self {
        self.set_production_rate(resource, rate);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of production steps taken so far
    pub fn tick(&self) -> u64 {
        self.tick
    }

    // === Production ===

    /// Replace the per-tick production rate of a resource.
    ///
    /// Any rate is accepted, including negative ones, and resources outside
    /// the catalog are recorded as given.
    pub fn set_production_rate(&mut self, resource: impl Into<ResourceType>, rate: Quantity) {
        self.production.insert(resource.into(), rate);
    }

    pub fn production_rate(&self, resource: impl AsRef<str>) -> Quantity {
        self.production.get(resource.as_ref()).copied().unwrap_or(0.0)
    }

    pub fn production_rates(&self) -> impl Iterator<Item = (&ResourceType, Quantity)> {
        self.production.iter().map(|(r, q)| (r, *q))
    }

    /// Advance one tick: add every production rate to its stock.
    pub fn advance_production(&mut self) {
        self.tick += 1;

        for (resource, &rate) in &self.production {
            self.resources.add(resource.clone(), rate);

            #[cfg(feature = "instrument")]
            tracing::info!(
                target: "production",
                tick = self.tick,
                settlement = self.name.as_str(),
                resource = resource.as_str(),
                rate = rate,
                quantity = self.resources.get(resource),
            );
        }

        #[cfg(feature = "instrument")]
        self.log_prices();
    }

    #[cfg(feature = "instrument")]
    fn log_prices(&self) {
        for (resource, params) in &self.pricing {
            let quantity = self.resources.get(resource);
            tracing::info!(
                target: "price",
                tick = self.tick,
                settlement = self.name.as_str(),
                resource = resource.as_str(),
                quantity = quantity,
                price = params.price_at(quantity),
            );
        }
    }

    // === Queries ===

    /// Current stock, or zero for resources never stocked or holding NaN.
    pub fn resource_quantity(&self, resource: impl AsRef<str>) -> Quantity {
        self.resources.get(resource)
    }

    /// Overwrite the stock of a resource, bypassing production.
    pub fn set_resource_quantity(&mut self, resource: impl Into<ResourceType>, quantity: Quantity) {
        self.resources.set(resource, quantity);
    }

    /// Current price, or `None` when the resource has no pricing parameters.
    pub fn price(&self, resource: impl AsRef<str>) -> Option<Price> {
        let resource = resource.as_ref();
        self.pricing
            .get(resource)
            .map(|params| params.price_at(self.resources.get(resource)))
    }

    pub fn set_pricing(&mut self, resource: impl Into<ResourceType>, params: PricingParams) {
        self.pricing.insert(resource.into(), params);
    }
}
