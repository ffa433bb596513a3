// Economy configuration: resource catalog and starting pricing table

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::catalog::ResourceCatalog;
use crate::error::ConfigError;
use crate::pricing::PricingParams;
use crate::types::ResourceType;

/// Resource catalog plus the pricing table settlements start from.
///
/// Pricing entries may name resources outside the catalog; pricing and stock
/// are tracked independently.
#[derive(Debug, Clone, PartialEq)]
pub struct EconomyConfig {
    pub catalog: ResourceCatalog,
    pub pricing: BTreeMap<ResourceType, PricingParams>,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        EconomyConfig::builtin()
    }
}

impl EconomyConfig {
    /// Iron ore only, priced with [`PricingParams::default`].
    pub fn builtin() -> Self {
        Self {
            catalog: ResourceCatalog::builtin(),
            pricing: BTreeMap::from([(ResourceType::iron_ore(), PricingParams::default())]),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let data: EconomyConfigData = serde_json::from_str(json)?;
        data.into_config()
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        EconomyConfig::from_json_str(&contents)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EconomyConfigData {
    resources: Vec<ResourceType>,
    #[serde(default)]
    pricing: BTreeMap<ResourceType, PricingParams>,
}

impl EconomyConfigData {
    fn into_config(self) -> Result<EconomyConfig, ConfigError> {
        let catalog = ResourceCatalog::new(self.resources)?;
        for (resource, params) in &self.pricing {
            params.validate(resource)?;
        }

        #[cfg(feature = "instrument")]
        tracing::debug!(
            target: "config",
            resources = catalog.len(),
            priced = self.pricing.len(),
        );

        Ok(EconomyConfig {
            catalog,
            pricing: self.pricing,
        })
    }
}
