//! Navigation graph representation and builder.
//!
//! # Data layout
//!
//! Adjacency is stored in **Compressed Sparse Row (CSR)** format.  Given a
//! `NodeId n`, its neighbors occupy the slice:
//!
//! ```text
//! adjacency[ adjacency_start[n] .. adjacency_start[n+1] ]
//! ```
//!
//! Every undirected link appears twice (once per endpoint), so the neighbor
//! relation is symmetric by construction.  Within a row, neighbors are sorted
//! by ascending `NodeId`.  The graph is immutable after [`NavGraphBuilder::build`]
//! and may be shared by reference across any number of agents.

use rustc_hash::FxHashSet;

use nav_core::{NodeId, Vec2};

use crate::{SpatialError, SpatialResult};

// ── Node ──────────────────────────────────────────────────────────────────────

/// A graph node as handed over by the setup layer: a position plus the
/// indices of its neighbors.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub position:  Vec2,
    pub neighbors: Vec<NodeId>,
}

impl Node {
    pub fn new(position: Vec2, neighbors: Vec<NodeId>) -> Self {
        Self { position, neighbors }
    }
}

// ── NavGraph ──────────────────────────────────────────────────────────────────

/// Undirected proximity graph in CSR format.
///
/// All fields are `pub` for direct indexed access on hot paths.  Construct
/// through [`NavGraphBuilder`] or [`NavGraph::from_nodes`].
#[derive(Clone, Debug)]
pub struct NavGraph {
    /// Position of each node.  Indexed by `NodeId`.
    pub node_pos: Vec<Vec2>,

    /// CSR row pointer.  Length = `node_count + 1`.
    pub adjacency_start: Vec<u32>,

    /// Concatenated neighbor rows.
    pub adjacency: Vec<NodeId>,
}

impl NavGraph {
    /// A graph with no nodes.  Every path query against it is rejected.
    pub fn empty() -> Self {
        NavGraphBuilder::new().build()
    }

    /// Build from an explicit node list, checking that every neighbor index
    /// is in range and that the neighbor relation is symmetric.
    pub fn from_nodes(nodes: &[Node]) -> SpatialResult<Self> {
        let mut b = NavGraphBuilder::with_capacity(nodes.len());
        for n in nodes {
            b.add_node(n.position);
        }
        for (i, n) in nodes.iter().enumerate() {
            let from = NodeId(i as u32);
            for &to in &n.neighbors {
                let back = nodes
                    .get(to.index())
                    .ok_or(SpatialError::NodeNotFound(to))?;
                if !back.neighbors.contains(&from) {
                    return Err(SpatialError::AsymmetricEdge { from, to });
                }
                b.connect(from, to)?;
            }
        }
        Ok(b.build())
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    /// Number of undirected links.
    pub fn link_count(&self) -> usize {
        self.adjacency.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.node_count()
    }

    // ── Node access ───────────────────────────────────────────────────────

    /// Position of `node`.
    ///
    /// # Panics
    /// Panics if `node` is out of range; use [`Self::try_position`] for
    /// unchecked input.
    #[inline]
    pub fn position(&self, node: NodeId) -> Vec2 {
        self.node_pos[node.index()]
    }

    #[inline]
    pub fn try_position(&self, node: NodeId) -> Option<Vec2> {
        self.node_pos.get(node.index()).copied()
    }

    /// Neighbors of `node`, ascending.  A contiguous slice; no
    /// allocation.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        let start = self.adjacency_start[node.index()] as usize;
        let end   = self.adjacency_start[node.index() + 1] as usize;
        &self.adjacency[start..end]
    }

    #[inline]
    pub fn degree(&self, node: NodeId) -> usize {
        self.neighbors(node).len()
    }

    pub fn are_adjacent(&self, a: NodeId, b: NodeId) -> bool {
        self.contains(a) && self.neighbors(a).binary_search(&b).is_ok()
    }

    /// Euclidean length of the link between `a` and `b`.
    #[inline]
    pub fn edge_length(&self, a: NodeId, b: NodeId) -> f32 {
        self.position(a).distance(self.position(b))
    }

    /// Summed edge length along `nodes`; zero for fewer than two nodes.
    pub fn path_length(&self, nodes: &[NodeId]) -> f32 {
        nodes.windows(2).map(|w| self.edge_length(w[0], w[1])).sum()
    }

    /// Iterator over `(NodeId, position)` pairs.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, Vec2)> + '_ {
        self.node_pos
            .iter()
            .enumerate()
            .map(|(i, &p)| (NodeId(i as u32), p))
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The node nearest to `pos`; ties go to the lowest index.
    ///
    /// Linear scan, O(node_count).  Returns `None` only for an empty graph.
    pub fn closest_node(&self, pos: Vec2) -> Option<NodeId> {
        let mut best: Option<(NodeId, f32)> = None;
        for (id, p) in self.nodes() {
            let d = p.distance_squared(pos);
            match best {
                Some((_, bd)) if d >= bd => {}
                _ => best = Some((id, d)),
            }
        }
        best.map(|(id, _)| id)
    }
}

// ── NavGraphBuilder ───────────────────────────────────────────────────────────

/// Construct a [`NavGraph`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use nav_core::Vec2;
/// use nav_spatial::NavGraphBuilder;
///
/// let mut b = NavGraphBuilder::new();
/// let a = b.add_node(Vec2::new(0.0, 0.0));
/// let c = b.add_node(Vec2::new(10.0, 0.0));
/// b.connect(a, c).unwrap();
/// let g = b.build();
/// assert_eq!(g.node_count(), 2);
/// assert_eq!(g.neighbors(a), &[c]);
/// assert_eq!(g.neighbors(c), &[a]);
/// ```
#[derive(Default)]
pub struct NavGraphBuilder {
    nodes: Vec<Vec2>,
    /// Undirected links, stored as `(min, max)`.
    links: FxHashSet<(u32, u32)>,
}

impl NavGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            links: FxHashSet::default(),
        }
    }

    /// Add a node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, pos: Vec2) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(pos);
        id
    }

    /// Link `a` and `b` in both directions.  Returns `false` if the link
    /// already existed.
    pub fn connect(&mut self, a: NodeId, b: NodeId) -> SpatialResult<bool> {
        for n in [a, b] {
            if n.index() >= self.nodes.len() {
                return Err(SpatialError::NodeNotFound(n));
            }
        }
        if a == b {
            return Err(SpatialError::SelfLoop(a));
        }
        Ok(self.links.insert((a.0.min(b.0), a.0.max(b.0))))
    }

    pub fn position(&self, id: NodeId) -> Vec2 {
        self.nodes[id.index()]
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn link_count(&self) -> usize { self.links.len() }

    /// Consume the builder and produce a [`NavGraph`].
    ///
    /// Time complexity: O(L log L) for the link sort, L = links.
    pub fn build(self) -> NavGraph {
        let node_count = self.nodes.len();

        // Both directions of every link, sorted by (from, to) for CSR rows.
        let mut directed: Vec<(u32, u32)> = self
            .links
            .iter()
            .flat_map(|&(a, b)| [(a, b), (b, a)])
            .collect();
        directed.sort_unstable();

        let mut adjacency_start = vec![0u32; node_count + 1];
        for &(from, _) in &directed {
            adjacency_start[from as usize + 1] += 1;
        }
        for i in 1..=node_count {
            adjacency_start[i] += adjacency_start[i - 1];
        }
        debug_assert_eq!(adjacency_start[node_count] as usize, directed.len());

        let adjacency = directed.into_iter().map(|(_, to)| NodeId(to)).collect();

        NavGraph {
            node_pos: self.nodes,
            adjacency_start,
            adjacency,
        }
    }
}
