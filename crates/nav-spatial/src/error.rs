//! Spatial-subsystem error type.
//!
//! An unreachable goal is not an error; see [`crate::Path`].

use thiserror::Error;

use nav_core::NodeId;

/// Errors produced by `nav-spatial`.  All of them indicate invalid input
/// handed to the graph builder or the pathfinder.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("node {0} not found in graph")]
    NodeNotFound(NodeId),

    #[error("neighbor lists are not symmetric: {from} lists {to} but not the reverse")]
    AsymmetricEdge { from: NodeId, to: NodeId },

    #[error("node {0} lists itself as a neighbor")]
    SelfLoop(NodeId),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
