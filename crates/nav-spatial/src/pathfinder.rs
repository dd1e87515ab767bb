//! Pathfinding trait and default A* implementation.
//!
//! # Pluggability
//!
//! Controllers and leaf tasks call pathfinding via the [`Pathfinder`] trait,
//! so a caller can swap in a different search (precomputed all-pairs tables,
//! jump-point search) without touching the decision layer.  [`AStar`] is the
//! default.
//!
//! # Cost units
//!
//! Edge cost is the Euclidean distance between node positions, in world
//! units.  The heuristic is the straight-line distance to the goal, which is
//! admissible under that cost, so the returned path is optimal.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;
use tracing::{debug, trace};

use nav_core::{NodeId, Vec2};

use crate::graph::NavGraph;
use crate::{SpatialError, SpatialResult};

// ── Path ──────────────────────────────────────────────────────────────────────

/// The result of a path query: node indices ordered start → goal, inclusive,
/// plus the summed edge length.
///
/// An empty `Path` means "no route"; it is a normal negative result, not an
/// error.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    pub nodes: Vec<NodeId>,
    pub cost:  f32,
}

impl Path {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<NodeId> {
        self.nodes.get(i).copied()
    }

    pub fn first(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    pub fn last(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }
}

// ── Pathfinder trait ──────────────────────────────────────────────────────────

/// Pluggable shortest-path search over a [`NavGraph`].
///
/// Implementations must not keep state between calls: the same query against
/// the same graph always yields a path of the same cost.
pub trait Pathfinder: Send + Sync {
    /// Path from `start` to `goal`, inclusive.
    ///
    /// Returns `Err(NodeNotFound)` for an index outside `graph`, and an empty
    /// path if `goal` is unreachable.
    fn find_path(&self, graph: &NavGraph, start: NodeId, goal: NodeId) -> SpatialResult<Path>;

    /// Snap both positions to their closest nodes and search between them.
    /// An empty graph yields an empty path.
    fn route(&self, graph: &NavGraph, from: Vec2, to: Vec2) -> SpatialResult<Path> {
        match (graph.closest_node(from), graph.closest_node(to)) {
            (Some(s), Some(g)) => self.find_path(graph, s, g),
            _ => Ok(Path::empty()),
        }
    }
}

// ── AStar ─────────────────────────────────────────────────────────────────────

/// A* over the CSR graph, Euclidean cost and heuristic.
#[derive(Clone, Copy, Debug, Default)]
pub struct AStar;

impl Pathfinder for AStar {
    fn find_path(&self, graph: &NavGraph, start: NodeId, goal: NodeId) -> SpatialResult<Path> {
        astar(graph, start, goal)
    }
}

// ── A* internals ──────────────────────────────────────────────────────────────

fn astar(graph: &NavGraph, start: NodeId, goal: NodeId) -> SpatialResult<Path> {
    for n in [start, goal] {
        if !graph.contains(n) {
            return Err(SpatialError::NodeNotFound(n));
        }
    }
    if start == goal {
        return Ok(Path { nodes: vec![start], cost: 0.0 });
    }

    let n = graph.node_count();
    let goal_pos = graph.position(goal);
    let h = |node: NodeId| graph.position(node).distance(goal_pos);

    // g[v] = best known cost from start to v.
    let mut g         = vec![f32::INFINITY; n];
    let mut came_from = vec![None; n];
    let mut closed    = vec![false; n];

    g[start.index()] = 0.0;

    // Min-heap on f = g + h.  NodeId breaks ties deterministically.
    let mut open: BinaryHeap<Reverse<(OrderedFloat<f32>, NodeId)>> = BinaryHeap::new();
    open.push(Reverse((OrderedFloat(h(start)), start)));

    while let Some(Reverse((_, node))) = open.pop() {
        if node == goal {
            let path = reconstruct(&came_from, goal, g[goal.index()]);
            trace!(%start, %goal, len = path.len(), cost = path.cost, "path found");
            return Ok(path);
        }
        if closed[node.index()] {
            continue;
        }
        closed[node.index()] = true;

        let base = g[node.index()];
        for &next in graph.neighbors(node) {
            let tentative = base + graph.edge_length(node, next);
            if tentative < g[next.index()] {
                g[next.index()] = tentative;
                came_from[next.index()] = Some(node);
                // Reopen: a cheaper route to a closed node must be expanded again.
                closed[next.index()] = false;
                open.push(Reverse((OrderedFloat(tentative + h(next)), next)));
            }
        }
    }

    debug!(%start, %goal, "no route");
    Ok(Path::empty())
}

fn reconstruct(came_from: &[Option<NodeId>], goal: NodeId, cost: f32) -> Path {
    let mut nodes = vec![goal];
    let mut cur = goal;
    while let Some(prev) = came_from[cur.index()] {
        cur = prev;
        nodes.push(cur);
    }
    nodes.reverse();
    Path { nodes, cost }
}
