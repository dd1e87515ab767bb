//! Typed indices for agents and graph nodes.
//!
//! Paths are sequences of `NodeId`, never positions, so the graph index is the
//! stable reference shared by the pathfinder, followers, and leaf tasks.

use std::fmt;

/// A `u32` index newtype that displays as `<prefix><n>`.
macro_rules! index_id {
    ($(#[$attr:meta])* $name:ident, $prefix:literal) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub u32);

        impl $name {
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }
    };
}

index_id! {
    /// Identifies an agent; mixed into its RNG seed.
    AgentId, "agent#"
}

index_id! {
    /// Index of a navigation-graph node.
    NodeId, "#"
}
