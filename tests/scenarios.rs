//! Reference scenarios for the shortest-path planner and the discretizer.

use approx::assert_relative_eq;
use dubins_curves::{
    discretize_arc, discretize_curve, find_paths, pose_on_arc, sample_curve, DubinsError,
    DubinsPlanner, PathType, Pose2D,
};
use std::f64::consts::{FRAC_PI_2, PI};

#[test]
fn identical_poses_give_empty_curve() {
    let pose = Pose2D::new(0.0, 0.0, 0.0);
    let curve = find_paths(pose, pose, 1.0).unwrap();
    assert_eq!(curve.total_length, 0.0);
    assert_eq!(curve.segment_lengths(), [0.0, 0.0, 0.0]);
    assert_eq!(curve.path_type, PathType::LSL);
    assert_eq!(discretize_curve(&curve, 0.1).unwrap(), vec![pose]);
}

#[test]
fn aligned_goal_is_a_straight_run() {
    let start = Pose2D::new(0.0, 0.0, 0.0);
    let goal = Pose2D::new(4.0, 0.0, 0.0);
    let curve = find_paths(start, goal, 1.0).unwrap();
    // RSR ties with LSL and loses on precedence
    assert_eq!(curve.path_type, PathType::LSL);
    assert_relative_eq!(curve.total_length, 4.0, epsilon = 1e-9);
    assert_relative_eq!(curve.arcs[0].length, 0.0, epsilon = 1e-12);
    assert_relative_eq!(curve.arcs[1].length, 4.0, epsilon = 1e-12);
    assert_relative_eq!(curve.arcs[2].length, 0.0, epsilon = 1e-12);
}

#[test]
fn turnaround_in_place() {
    let start = Pose2D::new(0.0, 0.0, 0.0);
    let goal = Pose2D::new(0.0, 0.0, PI);
    let curve = find_paths(start, goal, 1.0).unwrap();
    // RLR and LRL tie at 7π/3; RLR comes first
    assert_eq!(curve.path_type, PathType::RLR);
    assert_relative_eq!(curve.total_length, 7.0 * PI / 3.0, epsilon = 1e-9);
    assert!(curve.end().approx_eq(&goal, 1e-9));
}

#[test]
fn quarter_turn_reference() {
    let start = Pose2D::new(0.0, 0.0, 0.0);
    let goal = Pose2D::new(4.0, 4.0, FRAC_PI_2);
    let curve = find_paths(start, goal, 1.0).unwrap();
    assert_eq!(curve.path_type, PathType::LSL);
    assert_relative_eq!(curve.total_length, 3.0 * 2.0_f64.sqrt() + FRAC_PI_2, epsilon = 1e-9);
    assert_relative_eq!(curve.arcs[0].length, PI / 4.0, epsilon = 1e-9);
    assert_relative_eq!(curve.arcs[2].length, PI / 4.0, epsilon = 1e-9);
    assert!(curve.end().approx_eq(&goal, 1e-9));
}

#[test]
fn quarter_turn_discretization() {
    let start = Pose2D::new(0.0, 0.0, 0.0);
    let goal = Pose2D::new(4.0, 4.0, FRAC_PI_2);
    let curve = find_paths(start, goal, 1.0).unwrap();
    let step = 0.1;
    let poses = discretize_curve(&curve, step).unwrap();

    let expected = curve.total_length / step + 1.0;
    assert!((poses.len() as f64 - expected).abs() <= 3.0);
    assert_eq!(poses[0], start);
    assert!(poses.last().unwrap().approx_eq(&goal, 1e-9));

    // consecutive samples move forward by at most one step
    for pair in poses.windows(2) {
        let gap = pair[0].distance(&pair[1]);
        assert!(gap > 0.0);
        assert!(gap <= step + 1e-9);
    }

    let samples = sample_curve(&curve, step).unwrap();
    for pair in samples.windows(2) {
        assert!(pair[1].s > pair[0].s);
    }
    assert_relative_eq!(samples.last().unwrap().s, curve.total_length);
}

#[test]
fn arc_discretization_covers_each_arc() {
    let curve = find_paths(Pose2D::origin(), Pose2D::new(-2.0, 3.0, 4.0), 0.8).unwrap();
    for arc in &curve.arcs {
        let poses: Vec<Pose2D> = discretize_arc(arc, 0.05).unwrap().collect();
        assert_eq!(poses[0], arc.start);
        assert_eq!(*poses.last().unwrap(), pose_on_arc(arc, arc.length).unwrap());
    }
}

#[test]
fn scaled_problem_scales_length() {
    let start = Pose2D::new(1.0, 2.0, 0.5);
    let goal = Pose2D::new(3.0, -1.0, 4.0);
    let unit = find_paths(start, goal, 1.0).unwrap();
    let scaled = find_paths(
        Pose2D::new(3.0, 6.0, 0.5),
        Pose2D::new(9.0, -3.0, 4.0),
        3.0,
    )
    .unwrap();
    assert_eq!(unit.path_type, scaled.path_type);
    assert_relative_eq!(scaled.total_length, 3.0 * unit.total_length, epsilon = 1e-9);
}

#[test]
fn surfaces_input_errors() {
    let pose = Pose2D::origin();
    assert_eq!(find_paths(pose, pose, 0.0), Err(DubinsError::InvalidRadius(0.0)));
    assert_eq!(find_paths(pose, pose, -2.0), Err(DubinsError::InvalidRadius(-2.0)));

    let curve = find_paths(pose, Pose2D::new(1.0, 1.0, 1.0), 1.0).unwrap();
    assert_eq!(discretize_curve(&curve, -1.0), Err(DubinsError::InvalidStep(-1.0)));
    assert!(matches!(
        pose_on_arc(&curve.arcs[0], curve.arcs[0].length + 1.0),
        Err(DubinsError::OutOfRange { .. })
    ));
}

#[test]
fn planner_is_shareable_across_threads() {
    let planner = DubinsPlanner::default();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let planner = &planner;
                scope.spawn(move || {
                    let goal = Pose2D::new(f64::from(i), 2.0, 1.0);
                    planner.shortest_path(Pose2D::origin(), goal, 1.0)
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap().is_ok());
        }
    });
}
