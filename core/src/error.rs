use std::fmt;

/// Which end of an edge a lookup failed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Source => f.write_str("source"),
            Endpoint::Destination => f.write_str("destination"),
        }
    }
}

/// Errors reported by the checked entry points.
///
/// The query surface of [`crate::Network`] never fails: missing vertices
/// produce empty sequences or an infinite weight. Only the checked paths
/// (`try_add_edge`, configuration parsing) surface these.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    #[error("{0} vertex is not in the network")]
    VertexNotFound(Endpoint),

    #[error("invalid edge weight {0}: weights must be finite and non-negative")]
    InvalidWeight(f64),

    #[error("unknown representation '{0}': use 'matrix' or 'list'")]
    UnknownRepresentation(String),
}

/// Accept finite, non-negative weights. `INFINITY` is reserved as the
/// absent-edge sentinel.
pub(crate) fn check_weight(weight: f64) -> Result<f64, GraphError> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(weight)
    } else {
        Err(GraphError::InvalidWeight(weight))
    }
}
