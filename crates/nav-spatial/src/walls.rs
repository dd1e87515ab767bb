//! Static wall geometry and the obstacle-query capability.
//!
//! # Spatial index
//!
//! Wall rectangles are bulk-loaded into an R-tree (via `rstar`) so that
//! `is_blocked` and nearest-wall queries touch only nearby walls.  Agents call
//! these every tick, so the index pays for itself even for a few dozen walls.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use nav_core::{Kinematic, Rect, Step, Vec2};

// ── Obstacles trait ───────────────────────────────────────────────────────────

/// Read-only obstacle query consumed by sensing and collision handling.
pub trait Obstacles: Send + Sync {
    /// `true` if `p` lies inside any obstacle.
    fn is_blocked(&self, p: Vec2) -> bool;

    /// Distance from `p` to the nearest obstacle, `f32::INFINITY` if there are
    /// none, zero if `p` is inside one.
    fn min_distance(&self, p: Vec2) -> f32;

    /// The obstacle point nearest to `p`, if any obstacle exists.
    fn nearest_point(&self, p: Vec2) -> Option<Vec2>;
}

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone)]
struct WallEntry(Rect);

impl RTreeObject for WallEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        let max = self.0.max();
        AABB::from_corners([self.0.min.x, self.0.min.y], [max.x, max.y])
    }
}

impl PointDistance for WallEntry {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        self.0.distance_squared_to(Vec2::from(*point))
    }

    fn contains_point(&self, point: &[f32; 2]) -> bool {
        self.0.contains(Vec2::from(*point))
    }
}

// ── WallSet ───────────────────────────────────────────────────────────────────

/// An immutable set of axis-aligned wall rectangles.
pub struct WallSet {
    rects: Vec<Rect>,
    index: RTree<WallEntry>,
}

impl WallSet {
    pub fn new(rects: Vec<Rect>) -> Self {
        let index = RTree::bulk_load(rects.iter().copied().map(WallEntry).collect());
        Self { rects, index }
    }

    /// No walls at all: nothing is blocked.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

impl Obstacles for WallSet {
    fn is_blocked(&self, p: Vec2) -> bool {
        self.index.locate_all_at_point(&[p.x, p.y]).next().is_some()
    }

    fn min_distance(&self, p: Vec2) -> f32 {
        self.index
            .nearest_neighbor(&[p.x, p.y])
            .map_or(f32::INFINITY, |w| w.0.distance_to(p))
    }

    fn nearest_point(&self, p: Vec2) -> Option<Vec2> {
        self.index
            .nearest_neighbor(&[p.x, p.y])
            .map(|w| w.0.closest_point(p))
    }
}

// ── Collision rollback ────────────────────────────────────────────────────────

/// Caller-side wall handling: if `step` ended inside an obstacle, put the
/// agent back where it started and stop it.  Returns `true` on rollback.
pub fn resolve_wall_collision(kin: &mut Kinematic, step: &Step, walls: &dyn Obstacles) -> bool {
    if walls.is_blocked(step.current) {
        kin.roll_back(step);
        true
    } else {
        false
    }
}
