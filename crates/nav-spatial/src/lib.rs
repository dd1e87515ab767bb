//! `nav-spatial` — navigation graph, pathfinding, and wall geometry.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`graph`]      | `NavGraph` (CSR), `NavGraphBuilder`, `Node`, `closest_node` |
//! | [`pathfinder`] | `Pathfinder` trait, `Path`, `AStar`                       |
//! | [`walls`]      | `Obstacles` trait, `WallSet` (R-tree), wall rollback      |
//! | [`error`]      | `SpatialError`, `SpatialResult<T>`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Node`.                 |

pub mod error;
pub mod graph;
pub mod pathfinder;
pub mod walls;


pub use error::{SpatialError, SpatialResult};
pub use graph::{NavGraph, NavGraphBuilder, Node};
pub use pathfinder::{AStar, Path, Pathfinder};
pub use walls::{Obstacles, WallSet, resolve_wall_collision};
