// Errors raised while loading economy configuration

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::ResourceType;

/// Failures while loading or validating an economy configuration.
///
/// Model operations themselves never fail; these only surface when a catalog
/// or pricing table is built.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse economy config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read economy config from {path:?}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("resource identifiers must not be empty")]
    EmptyResourceName,
    #[error("resource `{0}` is listed more than once")]
    DuplicateResource(ResourceType),
    #[error("invalid pricing for `{resource}`: {reason}")]
    InvalidPricing {
        resource: ResourceType,
        reason: &'static str,
    },
}
