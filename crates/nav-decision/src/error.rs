//! Decision-layer error type.
//!
//! Only malformed trees are errors.  A JSON tree with no branch for the
//! observed feature value evaluates to `None`.

use thiserror::Error;

use crate::tree::DecisionId;

#[derive(Debug, Error)]
pub enum DecisionError {
    /// A condition referenced a node that has not been added yet.  Children
    /// must exist before their parent, which keeps every tree acyclic.
    #[error("decision node {child} referenced before it was added ({len} nodes so far)")]
    DanglingChild { child: DecisionId, len: usize },

    #[error("JSON decision tree: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid JSON decision node: {0}")]
    InvalidNode(String),
}

pub type DecisionResult<T> = Result<T, DecisionError>;
