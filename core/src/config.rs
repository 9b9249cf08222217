use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// Slots reserved before the first growth.
pub const DEFAULT_CAPACITY: usize = 10;

/// Adjacency strategy backing a [`crate::Network`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    /// Dense `capacity x capacity` weight grid. Neighbors come out in ascending index order.
    Matrix,
    /// Per-vertex neighbor records. Neighbors come out in insertion order.
    #[default]
    List,
}

impl FromStr for Representation {
    type Err = GraphError;

    /// Accepts "matrix"/"dense" and "list"/"sparse" (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "matrix" | "dense" => Ok(Representation::Matrix),
            "list" | "sparse" => Ok(Representation::List),
            other => Err(GraphError::UnknownRepresentation(other.to_string())),
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Representation::Matrix => f.write_str("matrix"),
            Representation::List => f.write_str("list"),
        }
    }
}

/// Construction settings for a network.
///
/// Deserializable with every field optional, so callers can embed it in
/// their own settings files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub representation: Representation,
    pub initial_capacity: usize,
}

impl NetworkConfig {
    pub fn new(representation: Representation) -> Self {
        Self {
            representation,
            ..Self::default()
        }
    }

    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Capacity actually allocated; doubling needs at least one slot.
    pub(crate) fn effective_capacity(&self) -> usize {
        self.initial_capacity.max(1)
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            representation: Representation::default(),
            initial_capacity: DEFAULT_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_representation() {
        assert_eq!("matrix".parse::<Representation>(), Ok(Representation::Matrix));
        assert_eq!("Dense".parse::<Representation>(), Ok(Representation::Matrix));
        assert_eq!("LIST".parse::<Representation>(), Ok(Representation::List));
        assert_eq!("sparse".parse::<Representation>(), Ok(Representation::List));
        assert_eq!(
            "tree".parse::<Representation>(),
            Err(GraphError::UnknownRepresentation("tree".into()))
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for repr in [Representation::Matrix, Representation::List] {
            assert_eq!(repr.to_string().parse::<Representation>(), Ok(repr));
        }
    }

    #[test]
    fn test_config_defaults() {
        let config = NetworkConfig::default();
        assert_eq!(config.representation, Representation::List);
        assert_eq!(config.initial_capacity, DEFAULT_CAPACITY);
    }

    #[test]
    fn test_config_partial_json() {
        let config: NetworkConfig = serde_json::from_str(r#"{"representation":"matrix"}"#).unwrap();
        assert_eq!(config.representation, Representation::Matrix);
        assert_eq!(config.initial_capacity, DEFAULT_CAPACITY);

        let config: NetworkConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, NetworkConfig::default());
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let config = NetworkConfig::new(Representation::Matrix).with_initial_capacity(0);
        assert_eq!(config.effective_capacity(), 1);
    }
}
