//! Engine-wide error type.
//!
//! Sub-crates define their own error enums and wrap `NavError` as one variant
//! via `#[from]`.  Expected negative outcomes (no route, `Failure` status) are
//! never errors; these variants cover invalid construction input only.

use thiserror::Error;

/// The top-level error type for `nav-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum NavError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("timestep must be finite and positive, got {0}")]
    InvalidTimestep(f32),

    #[error("{what} is not finite")]
    NonFinite { what: &'static str },
}

/// Shorthand result type for all `nav-*` crates.
pub type NavResult<T> = Result<T, NavError>;
