//! The two-room dungeon level used by the `chase` demo.
//!
//! A 640×480 map: an outer wall ring, a horizontal divider with a doorway,
//! two half-height vertical dividers and four small furniture blocks.  The
//! walkable grid is sampled every 24 units and linked to its 8-neighbours.

use nav_core::{NodeId, Rect, Vec2};
use nav_spatial::{NavGraph, NavGraphBuilder, Obstacles, WallSet};

/// Grid spacing in world units.
const STEP: f32 = 24.0;
/// Grid points closer than this are linked (covers diagonals).
const LINK_RADIUS: f32 = 26.0;

/// `(x, y, width, height)` of every wall block.
const WALLS: [(f32, f32, f32, f32); 16] = [
    // Outer ring.
    (50.0,  30.0,  12.0,  420.0),
    (568.0, 30.0,  12.0,  420.0),
    (62.0,  30.0,  515.0, 12.0),
    (62.0,  438.0, 515.0, 12.0),
    // Horizontal divider with a doorway.
    (62.0,  240.0, 184.0, 12.0),
    (395.0, 240.0, 175.0, 12.0),
    // Vertical dividers.
    (280.0, 30.0,  12.0,  150.0),
    (285.0, 280.0, 12.0,  160.0),
    // Furniture.
    (165.0, 130.0, 12.0,  72.0),
    (375.0, 80.0,  12.0,  72.0),
    (430.0, 80.0,  12.0,  72.0),
    (375.0, 140.0, 56.0,  12.0),
    (425.0, 325.0, 12.0,  72.0),
    (395.0, 350.0, 72.0,  12.0),
    (140.0, 330.0, 12.0,  72.0),
    (110.0, 350.0, 72.0,  12.0),
];

/// Grid points that hug furniture too tightly to be useful waypoints.
const PRUNED: [(f32, f32); 10] = [
    (156.0, 126.0),
    (156.0, 150.0),
    (156.0, 174.0),
    (156.0, 198.0),
    (396.0, 102.0),
    (420.0, 102.0),
    (396.0, 126.0),
    (108.0, 366.0),
    (444.0, 366.0),
    (468.0, 366.0),
];

pub fn build_walls() -> WallSet {
    WallSet::new(WALLS.iter().map(|&(x, y, w, h)| Rect::new(x, y, w, h)).collect())
}

/// Sample the walkable grid and link every pair closer than [`LINK_RADIUS`].
pub fn build_graph(walls: &WallSet) -> anyhow::Result<NavGraph> {
    let mut b = NavGraphBuilder::new();

    let mut x = STEP;
    while x < 640.0 {
        let mut y = STEP;
        while y < 480.0 {
            let p = Vec2::new(x, y);
            let inside = x > 60.0 && x < 580.0 && y > 30.0 && y < 450.0;
            let pruned = PRUNED.iter().any(|&(px, py)| p.distance(Vec2::new(px, py)) < 1.0);
            if inside && !pruned && !walls.is_blocked(p) {
                b.add_node(p);
            }
            y += STEP;
        }
        x += STEP;
    }

    // O(n²) over a few hundred points; fine for a one-off build.
    let n = b.node_count();
    for i in 0..n {
        for j in (i + 1)..n {
            let (a, c) = (NodeId(i as u32), NodeId(j as u32));
            if b.position(a).distance(b.position(c)) <= LINK_RADIUS {
                b.connect(a, c)?;
            }
        }
    }

    Ok(b.build())
}
