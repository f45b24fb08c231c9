//! Settings that influence how shortest path queries are executed.

use crate::errors::{GraphError, Result};
use std::str::FromStr;

/// Data structure used to hold the tentative distances of not yet finalized vertices.
///
/// Both strategies finalize the vertices in the same order: smallest tentative
/// distance first and the lower [VertexID](crate::types::VertexID) if two
/// distances are equal.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FrontierStrategy {
    /// Scan all tentative distances for the minimum in each step.
    LinearScan,
    /// Use a binary min-heap with lazy removal of outdated entries.
    #[default]
    BinaryHeap,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    pub frontier: FrontierStrategy,
}

impl SearchConfig {
    /// Parse a configuration from its TOML representation, e.g.
    ///
    /// ```toml
    /// frontier = "linear-scan"
    /// ```
    ///
    /// Missing fields are set to their default values.
    pub fn from_toml(content: &str) -> Result<SearchConfig> {
        let config = toml::from_str(content)?;
        Ok(config)
    }
}

impl FromStr for SearchConfig {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        SearchConfig::from_toml(s)
    }
}
