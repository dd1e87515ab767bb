//! Unit tests for nav-decision.

#[cfg(test)]
mod predicates {
    use crate::{DecisionThresholds, Predicate, SensedState};

    #[test]
    fn thresholds_are_strict() {
        let t = DecisionThresholds::default();
        let s = SensedState {
            distance_to_target: 10.0,
            time_in_behavior:   4.0,
            min_wall_dist:      30.0,
            speed:              150.0,
        };
        assert!(!s.at_target(&t));
        assert!(!s.timed_out(&t));
        assert!(!s.near_wall(&t));
        assert!(!s.too_fast(&t));

        let s = SensedState {
            distance_to_target: 9.9,
            time_in_behavior:   4.1,
            min_wall_dist:      29.9,
            speed:              150.1,
        };
        assert!(s.at_target(&t) && s.timed_out(&t) && s.near_wall(&t) && s.too_fast(&t));
    }

    #[test]
    fn combinators_and_custom() {
        let t = DecisionThresholds::default();
        let s = SensedState { min_wall_dist: 5.0, speed: 10.0, ..SensedState::default() };
        let both = Predicate::All(vec![Predicate::NearWall, Predicate::TooFast]);
        assert!(!both.test(&s, &t));
        assert!(Predicate::Not(Box::new(both)).test(&s, &t));
        assert!(Predicate::custom(|s| s.speed > 5.0).test(&s, &t));
        assert_eq!(format!("{:?}", Predicate::custom(|_| true)), "Custom(..)");
    }
}

#[cfg(test)]
mod binary_tree {
    use crate::{
        BehaviorKind, DecisionError, DecisionId, DecisionNode, DecisionThresholds,
        DecisionTreeBuilder, Predicate, SensedState, patrol_tree, waypoint_tree,
    };

    fn state(distance: f32) -> SensedState {
        SensedState {
            distance_to_target: distance,
            min_wall_dist: f32::INFINITY,
            ..SensedState::default()
        }
    }

    #[test]
    fn waypoint_tree_picks_new_waypoint_at_target() {
        let tree = waypoint_tree(DecisionThresholds::default());
        assert_eq!(tree.decide(&state(5.0)), BehaviorKind::PickNewWaypoint);
        assert_eq!(tree.decide(&state(50.0)), BehaviorKind::Pathfind);
    }

    #[test]
    fn action_is_a_fixed_point() {
        let tree = waypoint_tree(DecisionThresholds::default());
        let leaf = tree.evaluate(&state(5.0));
        assert!(matches!(tree.node(leaf), DecisionNode::Action(BehaviorKind::PickNewWaypoint)));
        assert_eq!(tree.step(leaf, &state(500.0)), leaf);
    }

    #[test]
    fn patrol_tree_branches() {
        let tree = patrol_tree(DecisionThresholds::default());
        assert_eq!(tree.decide(&state(5.0)), BehaviorKind::PickNewWaypoint);
        assert_eq!(tree.decide(&state(50.0)), BehaviorKind::Pathfind);

        let skidding = SensedState { min_wall_dist: 12.0, speed: 200.0, ..state(50.0) };
        assert_eq!(tree.decide(&skidding), BehaviorKind::Flee);

        let slow_near_wall = SensedState { min_wall_dist: 12.0, speed: 20.0, ..state(50.0) };
        assert_eq!(tree.decide(&slow_near_wall), BehaviorKind::Pathfind);

        let stuck = SensedState { time_in_behavior: 4.5, ..state(50.0) };
        assert_eq!(tree.decide(&stuck), BehaviorKind::PickNewWaypoint);
    }

    #[test]
    fn custom_thresholds_apply() {
        let t = DecisionThresholds { target_epsilon: 60.0, ..DecisionThresholds::default() };
        assert_eq!(waypoint_tree(t).decide(&state(50.0)), BehaviorKind::PickNewWaypoint);
    }

    #[test]
    fn forward_references_are_rejected() {
        let mut b = DecisionTreeBuilder::new(DecisionThresholds::default());
        let a = b.action(BehaviorKind::Wander);
        let err = b.condition(Predicate::TooFast, a, DecisionId(5)).unwrap_err();
        assert!(matches!(err, DecisionError::DanglingChild { child: DecisionId(5), len: 1 }));
        assert!(b.build(DecisionId(1)).is_err());
    }

    #[test]
    fn builder_roundtrip() {
        let mut b = DecisionTreeBuilder::new(DecisionThresholds::default());
        let wander = b.action(BehaviorKind::Wander);
        let flee = b.action(BehaviorKind::Flee);
        let root = b.condition(Predicate::NearWall, flee, wander).unwrap();
        let tree = b.build(root).unwrap();
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.root(), root);
        assert_eq!(tree.decide(&SensedState { min_wall_dist: 1.0, ..SensedState::default() }), BehaviorKind::Flee);
        assert_eq!(BehaviorKind::PickNewWaypoint.to_string(), "pickNewWaypoint");
    }
}

#[cfg(test)]
mod json_tree {
    use serde_json::json;

    use crate::{DecisionError, Features, JsonTree};

    fn learned() -> JsonTree {
        JsonTree::from_value(json!({
            "attr": "aggro",
            "branches": {
                "0": { "label": "wander" },
                "1": {
                    "attr": "dist",
                    "thresh": 30,
                    "le": { "label": "reset" },
                    "gt": {
                        "attr": "wall",
                        "branches": {
                            "0": { "label": "chase" },
                            "1": {
                                "attr": "room",
                                "branches": { "0": { "label": "wander" }, "3": { "label": "chase" } }
                            }
                        }
                    }
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn walks_mixed_splits() {
        let t = learned();
        let f = |room, dist, aggro, wall| Features { room, dist, aggro, wall };
        assert_eq!(t.evaluate(&f(0, 900.0, false, false)), Some("wander"));
        assert_eq!(t.evaluate(&f(0, 30.0, true, false)), Some("reset"));
        assert_eq!(t.evaluate(&f(0, 30.5, true, false)), Some("chase"));
        assert_eq!(t.evaluate(&f(3, 100.0, true, true)), Some("chase"));
        assert_eq!(t.evaluate(&f(0, 100.0, true, true)), Some("wander"));
    }

    #[test]
    fn missing_branch_is_none() {
        let t = learned();
        let f = Features { room: 2, dist: 100.0, aggro: true, wall: true };
        assert_eq!(t.evaluate(&f), None);
    }

    #[test]
    fn boolean_keys_accept_words() {
        let t = JsonTree::from_json_str(
            r#"{"attr": "wall", "branches": {"true": {"label": "reset"}, "false": {"label": "chase"}}}"#,
        )
        .unwrap();
        assert_eq!(t.evaluate(&Features { wall: true, ..Features::default() }), Some("reset"));
        assert_eq!(t.evaluate(&Features::default()), Some("chase"));
    }

    #[test]
    fn rejects_misplaced_splits() {
        let bad = JsonTree::from_value(json!({
            "attr": "room", "thresh": 1.0, "le": {"label": "a"}, "gt": {"label": "b"}
        }));
        assert!(matches!(bad, Err(DecisionError::InvalidNode(_))));

        let bad = JsonTree::from_value(json!({ "attr": "dist", "branches": {} }));
        assert!(matches!(bad, Err(DecisionError::InvalidNode(_))));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(JsonTree::from_json_str("{\"attr\": \"speed\"}"), Err(DecisionError::Json(_))));
        assert!(matches!(JsonTree::from_json_str("not json"), Err(DecisionError::Json(_))));
    }
}
