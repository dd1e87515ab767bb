//! Data-driven N-way decision trees in the JSON interchange format.
//!
//! # Node shapes
//!
//! ```text
//! {"label": "<action>"}
//! {"attr": "dist", "thresh": <number>, "le": <node>, "gt": <node>}
//! {"attr": "room" | "aggro" | "wall", "branches": {"<value>": <node>, ...}}
//! ```
//!
//! Branch keys are stringified feature values: the room number for `room`,
//! `"0"`/`"1"` for the boolean features (`"false"`/`"true"` are accepted as
//! well).  Evaluation is stateless; a feature value with no branch yields
//! `None`, which callers treat like an unknown label.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{DecisionError, DecisionResult};

// ── Features ──────────────────────────────────────────────────────────────────

/// Feature the JSON tree can branch on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attr {
    Room,
    Dist,
    Aggro,
    Wall,
}

/// The sensed features a JSON tree is evaluated against.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Features {
    pub room:  i32,
    pub dist:  f32,
    pub aggro: bool,
    pub wall:  bool,
}

impl Features {
    /// Branch key for a discrete attribute; `None` for `dist`.
    fn key(&self, attr: Attr) -> Option<String> {
        match attr {
            Attr::Room  => Some(self.room.to_string()),
            Attr::Aggro => Some(u8::from(self.aggro).to_string()),
            Attr::Wall  => Some(u8::from(self.wall).to_string()),
            Attr::Dist  => None,
        }
    }

    fn flag(&self, attr: Attr) -> Option<bool> {
        match attr {
            Attr::Aggro => Some(self.aggro),
            Attr::Wall  => Some(self.wall),
            _ => None,
        }
    }
}

// ── JsonNode ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JsonNode {
    Leaf {
        label: String,
    },
    Threshold {
        attr:   Attr,
        thresh: f32,
        le:     Box<JsonNode>,
        gt:     Box<JsonNode>,
    },
    Branch {
        attr:     Attr,
        branches: BTreeMap<String, JsonNode>,
    },
}

impl JsonNode {
    fn validate(&self) -> DecisionResult<()> {
        match self {
            JsonNode::Leaf { .. } => Ok(()),
            JsonNode::Threshold { attr, thresh, le, gt } => {
                if *attr != Attr::Dist {
                    return Err(DecisionError::InvalidNode(format!(
                        "threshold split on {attr:?}; only `dist` is continuous"
                    )));
                }
                if !thresh.is_finite() {
                    return Err(DecisionError::InvalidNode(format!("non-finite threshold {thresh}")));
                }
                le.validate()?;
                gt.validate()
            }
            JsonNode::Branch { attr, branches } => {
                if *attr == Attr::Dist {
                    return Err(DecisionError::InvalidNode(
                        "`dist` needs a threshold split, not branches".into(),
                    ));
                }
                branches.values().try_for_each(JsonNode::validate)
            }
        }
    }

    /// Label reached for `f`, or `None` when a branch is missing.
    pub fn evaluate(&self, f: &Features) -> Option<&str> {
        let mut node = self;
        loop {
            node = match node {
                JsonNode::Leaf { label } => return Some(label.as_str()),
                JsonNode::Threshold { thresh, le, gt, .. } => {
                    if f.dist <= *thresh { le.as_ref() } else { gt.as_ref() }
                }
                JsonNode::Branch { attr, branches } => {
                    let key = f.key(*attr)?;
                    match branches.get(&key) {
                        Some(next) => next,
                        None => {
                            let alt = f.flag(*attr).map(|b| b.to_string());
                            match alt.and_then(|k| branches.get(&k)) {
                                Some(next) => next,
                                None => {
                                    debug!(?attr, %key, "no branch for feature value");
                                    return None;
                                }
                            }
                        }
                    }
                }
            };
        }
    }
}

// ── JsonTree ──────────────────────────────────────────────────────────────────

/// A validated JSON decision tree.
#[derive(Clone, Debug, PartialEq)]
pub struct JsonTree {
    root: JsonNode,
}

impl JsonTree {
    pub fn new(root: JsonNode) -> DecisionResult<Self> {
        root.validate()?;
        Ok(Self { root })
    }

    pub fn from_json_str(s: &str) -> DecisionResult<Self> {
        Self::new(serde_json::from_str(s)?)
    }

    pub fn from_value(v: serde_json::Value) -> DecisionResult<Self> {
        Self::new(serde_json::from_value(v)?)
    }

    pub fn root(&self) -> &JsonNode {
        &self.root
    }

    pub fn evaluate(&self, f: &Features) -> Option<&str> {
        self.root.evaluate(f)
    }
}
