// Resource catalog: the set of resource types every settlement stocks

use std::collections::HashSet;

use crate::error::ConfigError;
use crate::types::ResourceType;

/// Immutable list of known resource types, in declaration order.
///
/// Handed explicitly to settlement constructors; extending the economy with a
/// new resource means building a bigger catalog, not touching `Settlement`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceCatalog {
    types: Vec<ResourceType>,
}

impl Default for ResourceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ResourceCatalog {
    /// Build a catalog, rejecting empty or repeated identifiers.
    pub fn new<I, R>(types: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = R>,
        R: Into<ResourceType>,
    {
        let mut seen = HashSet::new();
        let mut ordered = Vec::new();
        for resource in types {
            let resource = resource.into();
            if resource.as_str().is_empty() {
                return Err(ConfigError::EmptyResourceName);
            }
            if !seen.insert(resource.clone()) {
                return Err(ConfigError::DuplicateResource(resource));
            }
            ordered.push(resource);
        }
        Ok(Self { types: ordered })
    }

    /// The catalog shipped with the crate: iron ore only.
    pub fn builtin() -> Self {
        Self {
            types: vec![ResourceType::iron_ore()],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResourceType> {
        self.types.iter()
    }

    pub fn contains(&self, resource: impl AsRef<str>) -> bool {
        let resource = resource.as_ref();
        self.types.iter().any(|t| t.as_str() == resource)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl<'a> IntoIterator for &'a ResourceCatalog {
    type Item = &'a ResourceType;
    type IntoIter = std::slice::Iter<'a, ResourceType>;

    fn into_iter(self) -> Self::IntoIter {
        self.types.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IRON_ORE;

    #[test]
    fn test_builtin_is_iron_ore_only() {
        let catalog = ResourceCatalog::builtin();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains(IRON_ORE));
        assert!(!catalog.contains("WOOD"));
    }

    #[test]
    fn test_preserves_declaration_order() {
        let catalog = ResourceCatalog::new(["WOOD", "IRON_ORE", "GRAIN"]).unwrap();
        let ids: Vec<&str> = catalog.iter().map(|r| r.as_str()).collect();
        assert_eq!(ids, vec!["WOOD", "IRON_ORE", "GRAIN"]);
    }

    #[test]
    fn test_rejects_duplicates() {
        let err = ResourceCatalog::new(["WOOD", "WOOD"]).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateResource(r) if r.as_str() == "WOOD"));
    }

    #[test]
    fn test_rejects_empty_identifier() {
        let err = ResourceCatalog::new([""]).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyResourceName));
    }

    #[test]
    fn test_empty_catalog_is_allowed() {
        let catalog = ResourceCatalog::new(Vec::<ResourceType>::new()).unwrap();
        assert!(catalog.is_empty());
    }
}
