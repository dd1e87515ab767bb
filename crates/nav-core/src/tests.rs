//! Unit tests for nav-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, NodeId};

    #[test]
    fn index_matches_inner() {
        assert_eq!(NodeId(42).index(), 42);
        assert!(NodeId(3) < NodeId(4));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "agent#7");
        assert_eq!(NodeId(3).to_string(), "#3");
    }
}

#[cfg(test)]
mod angles {
    use std::f32::consts::PI;

    use crate::map_to_range;

    #[test]
    fn identity_inside_range() {
        for a in [-3.0_f32, -1.0, 0.0, 0.5, 3.0] {
            assert!((map_to_range(a) - a).abs() < 1e-6, "{a}");
        }
    }

    #[test]
    fn minus_pi_maps_to_pi() {
        assert_eq!(map_to_range(-PI), PI);
        assert_eq!(map_to_range(PI), PI);
    }

    #[test]
    fn wraps_large_angles() {
        assert!((map_to_range(2.0 * PI + 0.25) - 0.25).abs() < 1e-5);
        assert!((map_to_range(-2.0 * PI - 0.25) + 0.25).abs() < 1e-5);
        assert!((map_to_range(PI + 0.1) - (-PI + 0.1)).abs() < 1e-5);
    }

    #[test]
    fn result_always_in_half_open_range() {
        let mut a = -50.0_f32;
        while a < 50.0 {
            let w = map_to_range(a);
            assert!(w > -PI && w <= PI, "{a} → {w}");
            a += 0.37;
        }
    }
}

#[cfg(test)]
mod kinematic {
    use std::f32::consts::PI;

    use glam::Vec2;

    use crate::{Kinematic, SteeringOutput};

    #[test]
    fn integrate_applies_semi_implicit_euler() {
        let mut k = Kinematic::at(Vec2::ZERO);
        let step = k.integrate(&SteeringOutput::new(Vec2::new(10.0, 0.0), 2.0), 0.5);
        // v = 5, p = 2.5, rotation = 1, orientation = 0.5
        assert_eq!(k.velocity, Vec2::new(5.0, 0.0));
        assert_eq!(k.position, Vec2::new(2.5, 0.0));
        assert!((k.rotation - 1.0).abs() < 1e-6);
        assert!((k.orientation - 0.5).abs() < 1e-6);
        assert_eq!(step.previous, Vec2::ZERO);
        assert_eq!(step.current, k.position);
        assert!((step.displacement() - 2.5).abs() < 1e-6);
    }

    #[test]
    fn orientation_normalized_after_every_step() {
        let mut k = Kinematic { rotation: 40.0, ..Kinematic::at(Vec2::ZERO) };
        for _ in 0..200 {
            k.integrate(&SteeringOutput::new(Vec2::ZERO, 3.0), 0.05);
            assert!(k.orientation > -PI && k.orientation <= PI, "{}", k.orientation);
        }
    }

    #[test]
    fn zero_steering_keeps_drifting() {
        let mut k = Kinematic { velocity: Vec2::new(1.0, 2.0), ..Kinematic::default() };
        k.integrate(&SteeringOutput::ZERO, 1.0);
        assert_eq!(k.position, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn reset_and_roll_back() {
        let mut k = Kinematic {
            position:    Vec2::new(5.0, 5.0),
            velocity:    Vec2::new(3.0, 0.0),
            orientation: 1.0,
            rotation:    2.0,
        };
        let step = k.integrate(&SteeringOutput::ZERO, 1.0);
        k.roll_back(&step);
        assert_eq!(k.position, Vec2::new(5.0, 5.0));
        assert_eq!(k.velocity, Vec2::ZERO);

        k.reset_to(Vec2::new(1.0, 1.0));
        assert_eq!(k, Kinematic::at(Vec2::new(1.0, 1.0)));
    }

    #[test]
    fn combine_takes_each_half() {
        let a = SteeringOutput::new(Vec2::new(1.0, 0.0), 9.0);
        let b = SteeringOutput::new(Vec2::new(7.0, 7.0), -0.5);
        let c = SteeringOutput::combine(a, b);
        assert_eq!(c.linear, Vec2::new(1.0, 0.0));
        assert_eq!(c.angular, -0.5);
    }

    #[test]
    fn validate_rejects_nan() {
        let mut k = Kinematic::default();
        assert!(k.validate().is_ok());
        k.position.x = f32::NAN;
        assert!(k.validate().is_err());
    }

    #[test]
    fn heading_matches_orientation() {
        let k = Kinematic::facing(Vec2::ZERO, PI / 2.0);
        assert!(k.heading().distance(Vec2::new(0.0, 1.0)) < 1e-6);
    }
}

#[cfg(test)]
mod geom {
    use glam::Vec2;

    use crate::Rect;

    #[test]
    fn contains_is_half_open() {
        let r = Rect::new(10.0, 10.0, 5.0, 5.0);
        assert!(r.contains(Vec2::new(10.0, 10.0)));
        assert!(r.contains(Vec2::new(14.9, 14.9)));
        assert!(!r.contains(Vec2::new(15.0, 12.0)));
        assert!(!r.contains(Vec2::new(9.9, 12.0)));
    }

    #[test]
    fn distance_is_axis_aligned() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(r.distance_to(Vec2::new(5.0, 5.0)), 0.0);
        assert!((r.distance_to(Vec2::new(13.0, 5.0)) - 3.0).abs() < 1e-6);
        assert!((r.distance_to(Vec2::new(13.0, 14.0)) - 5.0).abs() < 1e-6);
        assert_eq!(r.closest_point(Vec2::new(-4.0, 20.0)), Vec2::new(0.0, 10.0));
    }
}

#[cfg(test)]
mod time {
    use crate::{Frame, FrameClock};

    #[test]
    fn rejects_bad_timestep() {
        assert!(FrameClock::new(0.0).is_err());
        assert!(FrameClock::new(-1.0).is_err());
        assert!(FrameClock::new(f32::NAN).is_err());
    }

    #[test]
    fn advance_and_elapsed() {
        let mut clock = FrameClock::new(0.5).unwrap();
        clock.advance();
        clock.advance();
        assert_eq!(clock.current, Frame(2));
        assert!((clock.elapsed_secs() - 1.0).abs() < 1e-9);
        assert_eq!(clock.frames_for_secs(1.2), 3);
        assert_eq!(clock.to_string(), "F2 (1.00 s)");
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng};

    #[test]
    fn same_seed_same_sequence() {
        let mut a = AgentRng::new(42, AgentId(1));
        let mut b = AgentRng::new(42, AgentId(1));
        for _ in 0..32 {
            assert_eq!(a.gen_range(0..1000u32), b.gen_range(0..1000u32));
        }
    }

    #[test]
    fn agents_get_distinct_streams() {
        let mut a = AgentRng::new(42, AgentId(0));
        let mut b = AgentRng::new(42, AgentId(1));
        let sa: Vec<u32> = (0..16).map(|_| a.gen_range(0..u32::MAX)).collect();
        let sb: Vec<u32> = (0..16).map(|_| b.gen_range(0..u32::MAX)).collect();
        assert_ne!(sa, sb);
    }

    #[test]
    fn binomial_in_open_unit_interval() {
        let mut r = AgentRng::new(7, AgentId(0));
        for _ in 0..1000 {
            let v = r.binomial();
            assert!(v > -1.0 && v < 1.0);
        }
    }

    #[test]
    fn index_of_empty_is_none() {
        let mut r = AgentRng::new(7, AgentId(0));
        assert_eq!(r.index(0), None);
        assert!(r.node(5).is_some_and(|n| n.index() < 5));
    }
}
