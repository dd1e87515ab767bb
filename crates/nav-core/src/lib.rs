//! `nav-core` — foundational types for the `rust_nav` agent engine.
//!
//! This crate is a dependency of every other `nav-*` crate.  It intentionally
//! has no `nav-*` dependencies and minimal external ones (`glam`, `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `NodeId`                                   |
//! | [`kinematic`]   | `Kinematic`, `SteeringOutput`, `Step`, `map_to_range` |
//! | [`geom`]        | `Rect` (axis-aligned wall rectangle)                  |
//! | [`time`]        | `Frame`, `FrameClock`                                 |
//! | [`rng`]         | `AgentRng` (per-agent, seeded)                        |
//! | [`error`]       | `NavError`, `NavResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geom;
pub mod ids;
pub mod kinematic;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{NavError, NavResult};
pub use geom::Rect;
pub use ids::{AgentId, NodeId};
pub use kinematic::{Kinematic, Step, SteeringOutput, map_to_range};
pub use rng::AgentRng;
pub use time::{Frame, FrameClock};

/// The 2-D vector type used throughout the engine.
pub use glam::Vec2;
