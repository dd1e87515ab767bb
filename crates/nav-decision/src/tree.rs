//! Binary condition/action decision tree.
//!
//! # Arena layout
//!
//! Nodes live in a `Vec` and refer to their children by [`DecisionId`].  The
//! builder only accepts children that already exist, so every child index is
//! strictly lower than its parent's.  Evaluation therefore walks strictly
//! decreasing indices and always terminates at an action; a cyclic tree cannot
//! be expressed.
//!
//! Trees are immutable after [`DecisionTreeBuilder::build`] and hold no
//! per-evaluation state.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::state::{DecisionThresholds, Predicate, SensedState};
use crate::{DecisionError, DecisionResult};

// ── BehaviorKind ──────────────────────────────────────────────────────────────

/// Behavior tag selected by a terminal action node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BehaviorKind {
    Pathfind,
    Wander,
    Flee,
    PickNewWaypoint,
}

impl BehaviorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            BehaviorKind::Pathfind        => "pathfind",
            BehaviorKind::Wander          => "wander",
            BehaviorKind::Flee            => "flee",
            BehaviorKind::PickNewWaypoint => "pickNewWaypoint",
        }
    }
}

impl fmt::Display for BehaviorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Nodes ─────────────────────────────────────────────────────────────────────

/// Index of a node inside its [`DecisionTree`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DecisionId(pub u32);

impl DecisionId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for DecisionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug)]
pub enum DecisionNode {
    Condition {
        predicate: Predicate,
        on_true:   DecisionId,
        on_false:  DecisionId,
    },
    Action(BehaviorKind),
}

// ── DecisionTree ──────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct DecisionTree {
    nodes:      Vec<DecisionNode>,
    root:       DecisionId,
    thresholds: DecisionThresholds,
}

impl DecisionTree {
    pub fn root(&self) -> DecisionId {
        self.root
    }

    pub fn thresholds(&self) -> &DecisionThresholds {
        &self.thresholds
    }

    pub fn node(&self, id: DecisionId) -> &DecisionNode {
        &self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// One evaluation step: a condition yields the chosen branch, an action
    /// yields itself.
    pub fn step(&self, id: DecisionId, state: &SensedState) -> DecisionId {
        match self.node(id) {
            DecisionNode::Condition { predicate, on_true, on_false } => {
                if predicate.test(state, &self.thresholds) { *on_true } else { *on_false }
            }
            DecisionNode::Action(_) => id,
        }
    }

    /// Walk from the root to the terminal action node for `state`.
    pub fn evaluate(&self, state: &SensedState) -> DecisionId {
        let mut id = self.root;
        loop {
            let next = self.step(id, state);
            if next == id {
                return id;
            }
            id = next;
        }
    }

    /// The behavior tag at the terminal reached for `state`.
    pub fn decide(&self, state: &SensedState) -> BehaviorKind {
        match self.node(self.evaluate(state)) {
            DecisionNode::Action(kind) => *kind,
            // `evaluate` only stops on a fixed point, and only actions are.
            DecisionNode::Condition { .. } => unreachable!("evaluate stopped on a condition"),
        }
    }
}

// ── DecisionTreeBuilder ───────────────────────────────────────────────────────

/// Bottom-up tree construction: add leaves first, then the conditions that
/// choose between them, then [`build`](Self::build) with the root.
///
/// ```
/// use nav_decision::{BehaviorKind, DecisionThresholds, DecisionTreeBuilder, Predicate, SensedState};
///
/// let mut b = DecisionTreeBuilder::new(DecisionThresholds::default());
/// let pick = b.action(BehaviorKind::PickNewWaypoint);
/// let path = b.action(BehaviorKind::Pathfind);
/// let root = b.condition(Predicate::AtTarget, pick, path).unwrap();
/// let tree = b.build(root).unwrap();
///
/// let near = SensedState { distance_to_target: 5.0, ..SensedState::default() };
/// assert_eq!(tree.decide(&near), BehaviorKind::PickNewWaypoint);
/// ```
#[derive(Debug)]
pub struct DecisionTreeBuilder {
    nodes:      Vec<DecisionNode>,
    thresholds: DecisionThresholds,
}

impl DecisionTreeBuilder {
    pub fn new(thresholds: DecisionThresholds) -> Self {
        Self { nodes: Vec::new(), thresholds }
    }

    fn push(&mut self, node: DecisionNode) -> DecisionId {
        let id = DecisionId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    fn check(&self, child: DecisionId) -> DecisionResult<()> {
        if child.index() < self.nodes.len() {
            Ok(())
        } else {
            Err(DecisionError::DanglingChild { child, len: self.nodes.len() })
        }
    }

    pub fn action(&mut self, kind: BehaviorKind) -> DecisionId {
        self.push(DecisionNode::Action(kind))
    }

    pub fn condition(
        &mut self,
        predicate: Predicate,
        on_true:   DecisionId,
        on_false:  DecisionId,
    ) -> DecisionResult<DecisionId> {
        self.check(on_true)?;
        self.check(on_false)?;
        Ok(self.push(DecisionNode::Condition { predicate, on_true, on_false }))
    }

    pub fn build(self, root: DecisionId) -> DecisionResult<DecisionTree> {
        self.check(root)?;
        Ok(DecisionTree { nodes: self.nodes, root, thresholds: self.thresholds })
    }
}

// ── Factories ─────────────────────────────────────────────────────────────────

/// `AtTarget ? PickNewWaypoint : Pathfind`.
pub fn waypoint_tree(thresholds: DecisionThresholds) -> DecisionTree {
    let mut b = DecisionTreeBuilder::new(thresholds);
    let pick = b.action(BehaviorKind::PickNewWaypoint);
    let path = b.action(BehaviorKind::Pathfind);
    let root = b.push(DecisionNode::Condition {
        predicate: Predicate::AtTarget,
        on_true:   pick,
        on_false:  path,
    });
    DecisionTree { nodes: b.nodes, root, thresholds }
}

/// Waypoint patrol that also flees walls when moving too fast and abandons a
/// waypoint it has chased for too long:
///
/// ```text
/// AtTarget            ? PickNewWaypoint
/// : NearWall ∧ TooFast ? Flee
/// : TimedOut           ? PickNewWaypoint
/// :                      Pathfind
/// ```
pub fn patrol_tree(thresholds: DecisionThresholds) -> DecisionTree {
    let mut b = DecisionTreeBuilder::new(thresholds);
    let pick = b.action(BehaviorKind::PickNewWaypoint);
    let flee = b.action(BehaviorKind::Flee);
    let path = b.action(BehaviorKind::Pathfind);
    let timeout = b.push(DecisionNode::Condition {
        predicate: Predicate::TimedOut,
        on_true:   pick,
        on_false:  path,
    });
    let danger = b.push(DecisionNode::Condition {
        predicate: Predicate::All(vec![Predicate::NearWall, Predicate::TooFast]),
        on_true:   flee,
        on_false:  timeout,
    });
    let root = b.push(DecisionNode::Condition {
        predicate: Predicate::AtTarget,
        on_true:   pick,
        on_false:  danger,
    });
    DecisionTree { nodes: b.nodes, root, thresholds }
}
