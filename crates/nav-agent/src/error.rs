//! Controller and session errors.
//!
//! Everything here is raised while assembling a session.  Once a session runs,
//! the only possible error is a kinematic state that stopped being finite.

use nav_behavior::BehaviorError;
use nav_core::NavError;
use nav_decision::DecisionError;
use nav_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("session configuration error: {0}")]
    Config(String),

    #[error("navigation graph has no nodes")]
    EmptyGraph,

    #[error(transparent)]
    Core(#[from] NavError),

    #[error(transparent)]
    Spatial(#[from] SpatialError),

    #[error(transparent)]
    Decision(#[from] DecisionError),

    #[error(transparent)]
    Behavior(#[from] BehaviorError),
}

pub type AgentResult<T> = Result<T, AgentError>;
