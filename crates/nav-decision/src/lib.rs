//! `nav-decision` — stateless decision trees.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                         |
//! |-----------|------------------------------------------------------------------|
//! | [`state`] | `SensedState`, `DecisionThresholds`, `Predicate`                 |
//! | [`tree`]  | `DecisionTree` arena, builder, `BehaviorKind`, factory trees     |
//! | [`json`]  | `JsonTree` — N-way branching over room/dist/aggro/wall features  |
//! | [`error`] | `DecisionError`, `DecisionResult<T>`                             |
//!
//! Both tree kinds are pure: evaluation never mutates the tree and always
//! terminates at a leaf.  Behavior-switch hysteresis lives in the controller
//! that consults the tree, not here.

pub mod error;
pub mod json;
pub mod state;
pub mod tree;

#[cfg(test)]
mod tests;

pub use error::{DecisionError, DecisionResult};
pub use json::{Attr, Features, JsonNode, JsonTree};
pub use state::{DecisionThresholds, Predicate, SensedState};
pub use tree::{
    BehaviorKind, DecisionId, DecisionNode, DecisionTree, DecisionTreeBuilder, patrol_tree,
    waypoint_tree,
};
