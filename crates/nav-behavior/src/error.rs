//! Behavior-tree construction errors.
//!
//! Ticking never fails: non-progress is `Status::Failure`.  Only building a
//! tree from inconsistent configuration is an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("behavior configuration error: {0}")]
    Config(String),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
