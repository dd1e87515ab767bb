//! Unit tests for nav-behavior.

#[cfg(test)]
mod helpers {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use nav_core::{AgentId, AgentRng, Kinematic, NodeId, Vec2};
    use nav_spatial::{AStar, NavGraph, NavGraphBuilder, WallSet};

    use crate::{BtNode, LastAction, Status, WorldState};

    pub type Log = Arc<Mutex<Vec<&'static str>>>;

    /// Replays a fixed list of statuses (then `Success` forever) and records
    /// every tick in a shared log.
    pub struct Scripted {
        label:  &'static str,
        script: VecDeque<Status>,
        log:    Log,
    }

    impl Scripted {
        pub fn boxed(label: &'static str, script: &[Status], log: &Log) -> Box<dyn BtNode> {
            Box::new(Self { label, script: script.iter().copied().collect(), log: Arc::clone(log) })
        }
    }

    impl BtNode for Scripted {
        fn tick(&mut self, _world: &mut WorldState<'_>, _dt: f32) -> Status {
            self.log.lock().unwrap().push(self.label);
            self.script.pop_front().unwrap_or(Status::Success)
        }

        fn name(&self) -> &'static str {
            self.label
        }
    }

    pub fn take(log: &Log) -> Vec<&'static str> {
        std::mem::take(&mut *log.lock().unwrap())
    }

    /// Nodes every 25 units along the x axis, 0..=100, linked in a chain.
    pub fn corridor() -> NavGraph {
        let mut b = NavGraphBuilder::new();
        let ids: Vec<NodeId> = (0..5).map(|i| b.add_node(Vec2::new(i as f32 * 25.0, 0.0))).collect();
        for w in ids.windows(2) {
            b.connect(w[0], w[1]).unwrap();
        }
        b.build()
    }

    /// Owned storage behind a `WorldState`.
    pub struct Fixture {
        pub monster: Kinematic,
        pub player:  Kinematic,
        pub graph:   NavGraph,
        pub walls:   WallSet,
        pub rng:     AgentRng,
        pub epoch:   u64,
    }

    impl Fixture {
        pub fn new(graph: NavGraph, monster: Vec2, player: Vec2) -> Self {
            Self {
                monster: Kinematic::at(monster),
                player:  Kinematic::at(player),
                graph,
                walls:   WallSet::empty(),
                rng:     AgentRng::new(17, AgentId(1)),
                epoch:   0,
            }
        }

        pub fn world(&mut self) -> WorldState<'_> {
            WorldState {
                monster:     &mut self.monster,
                player:      &mut self.player,
                graph:       &self.graph,
                walls:       &self.walls,
                pathfinder:  &AStar,
                rng:         &mut self.rng,
                eat_radius:  30.0,
                last_action: LastAction::None,
                reset_epoch: self.epoch,
            }
        }

        /// Tick `node` once and keep the epoch the tick produced.
        pub fn tick(&mut self, node: &mut dyn BtNode, dt: f32) -> (Status, LastAction) {
            let mut w = self.world();
            let s = node.tick(&mut w, dt);
            let (action, epoch) = (w.last_action, w.reset_epoch);
            self.epoch = epoch;
            (s, action)
        }
    }
}

// ── Composites ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod composites {
    use std::sync::{Arc, Mutex};

    use nav_core::Vec2;

    use super::helpers::{Fixture, Log, Scripted, corridor, take};
    use crate::{BtNode, RandomSelector, Selector, Sequence, Status};
    use Status::{Failure, Running, Success};

    fn fixture() -> Fixture {
        Fixture::new(corridor(), Vec2::ZERO, Vec2::new(100.0, 0.0))
    }

    #[test]
    fn sequence_resumes_running_child() {
        let log: Log = Arc::new(Mutex::new(Vec::new()));
        let mut seq = Sequence::new(vec![
            Scripted::boxed("a", &[Success], &log),
            Scripted::boxed("b", &[Running, Running, Success], &log),
        ]);
        let mut fx = fixture();

        assert_eq!(fx.tick(&mut seq, 0.1).0, Running);
        assert_eq!(take(&log), ["a", "b"]);
        assert_eq!(seq.cursor(), 1);

        assert_eq!(fx.tick(&mut seq, 0.1).0, Running);
        assert_eq!(take(&log), ["b"]);

        assert_eq!(fx.tick(&mut seq, 0.1).0, Success);
        assert_eq!(take(&log), ["b"]);
        assert_eq!(seq.cursor(), 0);
    }

    #[test]
    fn sequence_failure_resets_cursor() {
        let log: Log = Arc::new(Mutex::new(Vec::new()));
        let mut seq = Sequence::new(vec![
            Scripted::boxed("a", &[Success, Success], &log),
            Scripted::boxed("b", &[Running, Failure], &log),
        ]);
        let mut fx = fixture();

        fx.tick(&mut seq, 0.1);
        assert_eq!(fx.tick(&mut seq, 0.1).0, Failure);
        assert_eq!(seq.cursor(), 0);
        take(&log);

        fx.tick(&mut seq, 0.1);
        assert_eq!(take(&log)[0], "a");
    }

    #[test]
    fn selector_falls_back_and_resumes() {
        let log: Log = Arc::new(Mutex::new(Vec::new()));
        let mut sel = Selector::new(vec![
            Scripted::boxed("a", &[Failure, Failure], &log),
            Scripted::boxed("b", &[Running, Success], &log),
        ]);
        let mut fx = fixture();

        assert_eq!(fx.tick(&mut sel, 0.1).0, Running);
        assert_eq!(take(&log), ["a", "b"]);

        assert_eq!(fx.tick(&mut sel, 0.1).0, Success);
        assert_eq!(take(&log), ["b"]);
        assert_eq!(sel.cursor(), 0);

        fx.tick(&mut sel, 0.1);
        assert_eq!(take(&log), ["a"]);
    }

    #[test]
    fn selector_fails_only_when_all_fail() {
        let log: Log = Arc::new(Mutex::new(Vec::new()));
        let mut sel = Selector::new(vec![
            Scripted::boxed("a", &[Failure], &log),
            Scripted::boxed("b", &[Failure], &log),
        ]);
        let mut fx = fixture();
        assert_eq!(fx.tick(&mut sel, 0.1).0, Failure);
        assert_eq!(take(&log), ["a", "b"]);
        assert_eq!(sel.cursor(), 0);
    }

    #[test]
    fn random_selector_sticks_while_running() {
        let log: Log = Arc::new(Mutex::new(Vec::new()));
        let mut rs = RandomSelector::new(vec![
            Scripted::boxed("a", &[Running, Running, Failure], &log),
            Scripted::boxed("b", &[Running, Running, Failure], &log),
        ]);
        let mut fx = fixture();

        assert_eq!(fx.tick(&mut rs, 0.1).0, Running);
        let first = take(&log);
        assert_eq!(first.len(), 1);
        let picked = rs.chosen();
        assert!(picked.is_some());

        assert_eq!(fx.tick(&mut rs, 0.1).0, Running);
        assert_eq!(take(&log), first);
        assert_eq!(rs.chosen(), picked);

        assert_eq!(fx.tick(&mut rs, 0.1).0, Failure);
        assert_eq!(take(&log), first);
        assert_eq!(rs.chosen(), None);
    }

    #[test]
    #[should_panic(expected = "at least one child")]
    fn empty_sequence_panics() {
        let _ = Sequence::new(Vec::<Box<dyn BtNode>>::new());
    }
}

// ── Leaf tasks ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod leaves {
    use nav_core::{Kinematic, Vec2};
    use nav_spatial::{NavGraph, NavGraphBuilder};

    use super::helpers::{Fixture, corridor};
    use crate::{
        ChaseConfig, ChasePlayerTask, GraphWanderConfig, GraphWanderTask, IdleConfig, IdleTask,
        LastAction, ResetTask, Status,
    };

    #[test]
    fn chase_closes_in() {
        let mut fx = Fixture::new(corridor(), Vec2::ZERO, Vec2::new(50.0, 0.0));
        let mut chase = ChasePlayerTask::new(ChaseConfig::default());
        let before = fx.monster.distance_to(&fx.player);

        let (status, action) = fx.tick(&mut chase, 0.1);
        assert_eq!(status, Status::Running);
        assert_eq!(action, LastAction::Chase);
        assert!(fx.monster.distance_to(&fx.player) < before);
        assert!(!chase.follower().is_empty());
    }

    #[test]
    fn chase_between_nodes_does_not_double_back() {
        // Closest node (x = 0) lies behind the monster.
        let mut fx = Fixture::new(corridor(), Vec2::new(12.0, 0.0), Vec2::new(62.0, 0.0));
        let mut chase = ChasePlayerTask::new(ChaseConfig::default());
        let before = fx.monster.distance_to(&fx.player);
        assert!((before - 50.0).abs() < 1e-4);

        let (status, _) = fx.tick(&mut chase, 0.1);
        assert_eq!(status, Status::Running);
        assert_eq!(chase.follower().cursor(), 1);
        assert!(fx.monster.position.x > 12.0);
        assert!(fx.monster.distance_to(&fx.player) < before);
    }

    #[test]
    fn chase_out_of_aggro_fails_without_moving() {
        let mut fx = Fixture::new(corridor(), Vec2::ZERO, Vec2::new(1000.0, 0.0));
        let mut chase = ChasePlayerTask::new(ChaseConfig::default());
        let before = fx.monster;
        assert_eq!(fx.tick(&mut chase, 0.1).0, Status::Failure);
        assert_eq!(fx.monster, before);
    }

    #[test]
    fn chase_between_ranges_fails_and_drops_path() {
        let mut fx = Fixture::new(corridor(), Vec2::ZERO, Vec2::new(50.0, 0.0));
        let mut chase = ChasePlayerTask::new(ChaseConfig::default());
        fx.tick(&mut chase, 0.1);
        assert!(!chase.follower().is_empty());

        fx.player = Kinematic::at(Vec2::new(500.0, 0.0));
        let before = fx.monster;
        assert_eq!(fx.tick(&mut chase, 0.1).0, Status::Failure);
        assert!(chase.follower().is_empty());
        assert_eq!(fx.monster, before);
    }

    #[test]
    fn chase_succeeds_inside_eat_radius() {
        let mut fx = Fixture::new(corridor(), Vec2::ZERO, Vec2::new(20.0, 0.0));
        let mut chase = ChasePlayerTask::new(ChaseConfig::default());
        assert_eq!(fx.tick(&mut chase, 0.1).0, Status::Success);
    }

    #[test]
    fn chase_without_route_fails() {
        let mut b = NavGraphBuilder::new();
        b.add_node(Vec2::ZERO);
        b.add_node(Vec2::new(100.0, 0.0));
        let mut fx = Fixture::new(b.build(), Vec2::ZERO, Vec2::new(100.0, 0.0));
        let mut chase = ChasePlayerTask::new(ChaseConfig::default());
        let before = fx.monster;
        assert_eq!(fx.tick(&mut chase, 0.1).0, Status::Failure);
        assert_eq!(fx.monster, before);
    }

    #[test]
    fn chase_on_empty_graph_fails() {
        let mut fx = Fixture::new(NavGraph::empty(), Vec2::ZERO, Vec2::new(100.0, 0.0));
        let mut chase = ChasePlayerTask::new(ChaseConfig::default());
        assert_eq!(fx.tick(&mut chase, 0.1).0, Status::Failure);
    }

    #[test]
    fn chase_eventually_catches_a_still_player() {
        let mut fx = Fixture::new(corridor(), Vec2::ZERO, Vec2::new(100.0, 0.0));
        let mut chase = ChasePlayerTask::new(ChaseConfig::default());
        let mut caught = false;
        for _ in 0..600 {
            match fx.tick(&mut chase, 1.0 / 60.0).0 {
                Status::Success => {
                    caught = true;
                    break;
                }
                Status::Running => {}
                Status::Failure => panic!("chase gave up"),
            }
        }
        assert!(caught);
    }

    #[test]
    fn reset_teleports_then_succeeds() {
        let mut fx = Fixture::new(corridor(), Vec2::new(10.0, 5.0), Vec2::new(20.0, 5.0));
        fx.monster.velocity = Vec2::new(3.0, 3.0);
        let mut reset = ResetTask::new(Vec2::new(100.0, 0.0), Vec2::ZERO);

        let (status, action) = fx.tick(&mut reset, 0.1);
        assert_eq!(status, Status::Running);
        assert_eq!(action, LastAction::Reset);
        assert_eq!(fx.epoch, 1);
        assert_eq!(fx.monster, Kinematic::at(Vec2::new(100.0, 0.0)));
        assert_eq!(fx.player, Kinematic::at(Vec2::ZERO));

        assert_eq!(fx.tick(&mut reset, 0.1).0, Status::Success);
        assert_eq!(fx.epoch, 1);

        // Re-armed: the next tick teleports again.
        assert_eq!(fx.tick(&mut reset, 0.1).0, Status::Running);
        assert_eq!(fx.epoch, 2);
    }

    #[test]
    fn chase_drops_path_after_reset() {
        let mut fx = Fixture::new(corridor(), Vec2::ZERO, Vec2::new(50.0, 0.0));
        let mut chase = ChasePlayerTask::new(ChaseConfig::default());
        fx.tick(&mut chase, 0.1);
        let first = chase.follower().path().clone();

        fx.epoch += 1;
        fx.monster = Kinematic::at(Vec2::new(100.0, 0.0));
        fx.player = Kinematic::at(Vec2::new(60.0, 0.0));
        fx.tick(&mut chase, 0.1);
        assert_ne!(chase.follower().path(), &first);
    }

    #[test]
    fn graph_wander_finishes_a_leg() {
        let mut fx = Fixture::new(corridor(), Vec2::ZERO, Vec2::new(1000.0, 0.0));
        let mut wander = GraphWanderTask::new(GraphWanderConfig::default());
        let mut finished = false;
        for _ in 0..3000 {
            let (status, action) = fx.tick(&mut wander, 1.0 / 60.0);
            assert_eq!(action, LastAction::Wander);
            match status {
                Status::Running => {}
                Status::Success => {
                    finished = true;
                    break;
                }
                Status::Failure => panic!("corridor is connected"),
            }
        }
        assert!(finished);
        assert_eq!(wander.legs_done(), 0);
        assert!(wander.follower().is_empty());
    }

    #[test]
    fn unbounded_wander_keeps_running() {
        let mut fx = Fixture::new(corridor(), Vec2::ZERO, Vec2::new(1000.0, 0.0));
        let mut wander = GraphWanderTask::new(GraphWanderConfig { legs: None, ..GraphWanderConfig::default() });
        for _ in 0..1200 {
            assert_eq!(fx.tick(&mut wander, 1.0 / 60.0).0, Status::Running);
        }
    }

    #[test]
    fn graph_wander_on_empty_graph_fails() {
        let mut fx = Fixture::new(NavGraph::empty(), Vec2::ZERO, Vec2::ZERO);
        let mut wander = GraphWanderTask::new(GraphWanderConfig::default());
        assert_eq!(fx.tick(&mut wander, 0.1).0, Status::Failure);
    }

    #[test]
    fn idle_brakes_then_succeeds() {
        let mut fx = Fixture::new(corridor(), Vec2::ZERO, Vec2::new(1000.0, 0.0));
        fx.monster.velocity = Vec2::new(50.0, 0.0);
        let mut idle = IdleTask::new(IdleConfig::default());
        for _ in 0..5 {
            assert_eq!(fx.tick(&mut idle, 0.25).0, Status::Running);
        }
        assert_eq!(fx.tick(&mut idle, 0.25).0, Status::Success);
        assert_eq!(fx.monster.velocity, Vec2::ZERO);
    }
}

// ── Factory trees ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod trees {
    use nav_core::{Kinematic, Vec2};

    use super::helpers::{Fixture, corridor};
    use crate::{
        BehaviorError, ChaseConfig, LastAction, MonsterTreeConfig, Status, monster_tree,
        roaming_monster_tree,
    };

    fn config() -> MonsterTreeConfig {
        MonsterTreeConfig {
            monster_start: Vec2::new(100.0, 0.0),
            player_start:  Vec2::ZERO,
            ..MonsterTreeConfig::default()
        }
    }

    #[test]
    fn catch_then_reset_over_two_ticks() {
        let mut fx = Fixture::new(corridor(), Vec2::new(40.0, 0.0), Vec2::new(50.0, 0.0));
        let mut tree = monster_tree(&config()).unwrap();

        let (status, action) = fx.tick(tree.as_mut(), 0.1);
        assert_eq!(status, Status::Running);
        assert_eq!(action, LastAction::Reset);
        assert_eq!(fx.monster, Kinematic::at(Vec2::new(100.0, 0.0)));
        assert_eq!(fx.player, Kinematic::at(Vec2::ZERO));

        let (status, action) = fx.tick(tree.as_mut(), 0.1);
        assert_eq!(status, Status::Success);
        assert_eq!(action, LastAction::Reset);
        assert_eq!(fx.epoch, 1);
    }

    #[test]
    fn far_player_means_wander() {
        let mut fx = Fixture::new(corridor(), Vec2::ZERO, Vec2::new(5000.0, 0.0));
        let mut tree = monster_tree(&config()).unwrap();
        let (status, action) = fx.tick(tree.as_mut(), 1.0 / 60.0);
        assert_eq!(status, Status::Running);
        assert_eq!(action, LastAction::Wander);
    }

    #[test]
    fn roaming_tree_alternates_wander_and_idle() {
        // Legs along the corridor take a second or two, idling 1.5 s, so 60 s
        // of frames give the random selector dozens of draws.
        let mut fx = Fixture::new(corridor(), Vec2::ZERO, Vec2::new(5000.0, 0.0));
        let mut tree = roaming_monster_tree(&config()).unwrap();
        let (mut wander, mut idle, mut switches) = (0, 0, 0);
        let mut previous = LastAction::None;
        for _ in 0..3600 {
            let (_, action) = fx.tick(tree.as_mut(), 1.0 / 60.0);
            match action {
                LastAction::Wander => wander += 1,
                LastAction::Idle => idle += 1,
                other => panic!("unexpected action {other}"),
            }
            if previous != LastAction::None && action != previous {
                switches += 1;
            }
            previous = action;
        }
        assert!(wander > 0, "never wandered");
        assert!(idle > 0, "never idled");
        assert!(switches >= 2, "only {switches} switches");
    }

    #[test]
    fn rejects_inverted_ranges() {
        let bad = MonsterTreeConfig {
            chase: ChaseConfig { path_range: 700.0, ..ChaseConfig::default() },
            ..config()
        };
        assert!(matches!(monster_tree(&bad), Err(BehaviorError::Config(_))));
    }
}
