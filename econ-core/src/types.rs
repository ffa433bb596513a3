// Core identifier types and quantity aliases

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

// === TYPE ALIASES ===

pub type Quantity = f64;
pub type Price = f64;

// === RESOURCE TYPES ===

/// Identifier of the iron ore resource, the one type in the builtin catalog.
pub const IRON_ORE: &str = "IRON_ORE";

/// Names a kind of resource held by settlements.
///
/// Identifiers are plain strings so new resource types can be introduced by
/// configuration alone. Lookups accept `&str` through the `Borrow` impl.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceType(String);

impl ResourceType {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn iron_ore() -> Self {
        Self::new(IRON_ORE)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceType {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ResourceType {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ResourceType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Hash/Eq of the newtype match those of `str`, which `Borrow` requires.
impl Borrow<str> for ResourceType {
    fn borrow(&self) -> &str {
        &self.0
    }
}
