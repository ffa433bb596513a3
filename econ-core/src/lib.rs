use wasm_bindgen::prelude::*;

mod catalog;
mod config;
mod error;
mod pricing;
mod settlement;
mod snapshot;
mod stockpile;
mod types;

pub use catalog::*;
pub use config::*;
pub use error::*;
pub use pricing::*;
pub use settlement::*;
pub use snapshot::*;
pub use stockpile::*;
pub use types::*;

#[cfg(feature = "instrument")]
pub use instrument;

// ============================================================================
// WASM API - Economy
// ============================================================================

#[wasm_bindgen]
pub struct EconomySim {
    settlement: Settlement,
}

#[wasm_bindgen]
impl EconomySim {
    /// Create a settlement backed by the builtin catalog
    #[wasm_bindgen(constructor)]
    pub fn new(name: &str) -> Self {
        // Better panic messages in browser console
        console_error_panic_hook::set_once();

        Self {
            settlement: Settlement::new(name, &ResourceCatalog::builtin()),
        }
    }

    /// Create a settlement from a JSON economy config
    #[wasm_bindgen]
    pub fn from_config_json(name: &str, config_json: &str) -> Result<EconomySim, JsError> {
        console_error_panic_hook::set_once();

        let config = EconomyConfig::from_json_str(config_json)?;
        Ok(Self {
            settlement: Settlement::from_config(name, &config),
        })
    }

    #[wasm_bindgen]
    pub fn set_production_rate(&mut self, resource: &str, rate: f64) {
        self.settlement.set_production_rate(resource, rate);
    }

    /// Advance production by one tick
    #[wasm_bindgen]
    pub fn advance_production(&mut self) {
        self.settlement.advance_production();
    }

    /// Advance production by `ticks` ticks
    #[wasm_bindgen]
    pub fn advance_ticks(&mut self, ticks: u32) {
        for _ in 0..ticks {
            self.settlement.advance_production();
        }
    }

    #[wasm_bindgen]
    pub fn get_tick(&self) -> u64 {
        self.settlement.tick()
    }

    #[wasm_bindgen]
    pub fn get_resource_quantity(&self, resource: &str) -> f64 {
        self.settlement.resource_quantity(resource)
    }

    /// Overwrite a stock directly, e.g. to stage scarcity or surplus
    #[wasm_bindgen]
    pub fn set_resource_quantity(&mut self, resource: &str, quantity: f64) {
        self.settlement.set_resource_quantity(resource, quantity);
    }

    /// Current price, `undefined` for unpriced resources
    #[wasm_bindgen]
    pub fn get_price(&self, resource: &str) -> Option<f64> {
        self.settlement.price(resource)
    }

    /// Get a snapshot of the settlement for rendering
    #[wasm_bindgen]
    pub fn get_snapshot(&self) -> SettlementSnapshot {
        SettlementSnapshot::from(&self.settlement)
    }
}

impl EconomySim {
    pub fn settlement(&self) -> &Settlement {
        &self.settlement
    }

    pub fn settlement_mut(&mut self) -> &mut Settlement {
        &mut self.settlement
    }
}
