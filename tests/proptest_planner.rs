//! Property-based tests for the planner and the discretizer.
//!
//! Run with: cargo test --test proptest_planner

use dubins_curves::families::{check, solve};
use dubins_curves::{
    discretize_arc, find_paths, pose_on_arc, DubinsPlanner, PathType, Pose2D, StandardFrame,
};
use proptest::prelude::*;
use std::f64::consts::TAU;

// =============================================================================
// Strategies
// =============================================================================

fn arb_pose() -> impl Strategy<Value = Pose2D> {
    (-50.0..50.0f64, -50.0..50.0f64, -10.0..10.0f64).prop_map(|(x, y, theta)| Pose2D::new(x, y, theta))
}

fn arb_rho() -> impl Strategy<Value = f64> {
    0.05..20.0f64
}

// =============================================================================
// Planner properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Every feasible family closes onto the standardized goal, and the
    /// same-side families LSL and RSR always qualify.
    #[test]
    fn feasible_candidates_close(start in arb_pose(), goal in arb_pose(), rho in arb_rho()) {
        let frame = StandardFrame::new(start, rho).unwrap();
        let standard_goal = frame.to_standard(goal);
        let scale = 1.0 + standard_goal.x.hypot(standard_goal.y);
        for family in PathType::ALL {
            let candidate = solve(family, standard_goal);
            if matches!(family, PathType::LSL | PathType::RSR) {
                prop_assert!(candidate.is_some(), "{} out of domain", family);
            }
            let Some(candidate) = candidate else { continue };
            let feasible = check(&candidate, standard_goal, 1e-6);
            if matches!(family, PathType::LSL | PathType::RSR) {
                prop_assert!(feasible, "{} failed closure: {:?}", family, candidate);
            }
            if feasible {
                let end = candidate.end_pose();
                prop_assert!(end.distance(&standard_goal) <= 1e-6 * scale);
                prop_assert!(end.heading_error(&standard_goal) <= 1e-6);
                prop_assert!(candidate.lengths().iter().all(|l| *l >= 0.0));
            }
        }
    }

    /// A path always exists and ends at the goal.
    #[test]
    fn shortest_path_exists(start in arb_pose(), goal in arb_pose(), rho in arb_rho()) {
        let curve = find_paths(start, goal, rho);
        prop_assert!(curve.is_ok(), "no path: {:?}", curve);
        let curve = curve.unwrap();
        let tolerance = 1e-6 * (rho + start.distance(&goal));
        prop_assert!(curve.end().distance(&goal) <= tolerance);
        prop_assert!(curve.end().heading_error(&goal) <= 1e-6);
        prop_assert!(curve.arcs.iter().all(|arc| arc.length >= 0.0));
    }

    /// The selected path is no longer than any other feasible family.
    #[test]
    fn shortest_path_is_minimal(start in arb_pose(), goal in arb_pose(), rho in arb_rho()) {
        let planner = DubinsPlanner::default();
        let best = planner.shortest_path(start, goal, rho).unwrap();
        let all = planner.all_paths(start, goal, rho).unwrap();
        prop_assert_eq!(all[0].path_type, best.path_type);
        for other in &all {
            prop_assert!(best.total_length <= other.total_length + 1e-9 * rho);
        }
    }

    /// Arcs join end to start and the total is their sum.
    #[test]
    fn curve_is_continuous(start in arb_pose(), goal in arb_pose(), rho in arb_rho()) {
        let curve = find_paths(start, goal, rho).unwrap();
        for pair in curve.arcs.windows(2) {
            prop_assert!(pair[0].end().approx_eq(&pair[1].start, 1e-9 * (1.0 + curve.total_length)));
        }
        let sum: f64 = curve.segment_lengths().iter().sum();
        prop_assert!((sum - curve.total_length).abs() <= 1e-12 * (1.0 + sum));
    }

    /// Mapping into the standard frame and back is the identity.
    #[test]
    fn standard_frame_round_trip(start in arb_pose(), pose in arb_pose(), rho in arb_rho()) {
        let frame = StandardFrame::new(start, rho).unwrap();
        let back = frame.from_standard(frame.to_standard(pose));
        prop_assert!(back.distance(&pose) <= 1e-9);
        prop_assert!(back.heading_error(&pose) <= 1e-9);
        prop_assert!((0.0..TAU).contains(&back.theta));
    }

    // =========================================================================
    // Discretization properties
    // =========================================================================

    /// Samples start at the arc start, end at the arc end, and are evenly spaced.
    #[test]
    fn arc_samples_cover_arc(
        start in arb_pose(),
        goal in arb_pose(),
        rho in arb_rho(),
        step in 0.05..2.0f64,
    ) {
        let curve = find_paths(start, goal, rho).unwrap();
        for arc in &curve.arcs {
            let poses: Vec<Pose2D> = discretize_arc(arc, step).unwrap().collect();
            prop_assert_eq!(poses[0], arc.start);
            prop_assert_eq!(*poses.last().unwrap(), pose_on_arc(arc, arc.length).unwrap());
            for (i, pose) in poses.iter().enumerate().take(poses.len() - 1) {
                let expected = pose_on_arc(arc, i as f64 * step).unwrap();
                prop_assert!(pose.approx_eq(&expected, 1e-12));
            }
            let last_gap = arc.length - (poses.len() as f64 - 2.0).max(0.0) * step;
            prop_assert!(last_gap <= step + 1e-9 * arc.length.max(1.0));
        }
    }
}
