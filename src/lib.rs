#![forbid(unsafe_code)]

//! Shortest Dubins paths between oriented planar poses.
//!
//! A Dubins vehicle only drives forward and cannot turn tighter than a
//! minimum radius `rho`. Between any two poses its shortest path is one of
//! six three-segment families (LSL, RSR, LSR, RSL, RLR, LRL). This crate
//! solves all six in closed form, keeps the ones that actually reach the
//! goal, picks the shortest, and samples it into poses for a tracking
//! controller.
//!
//! # Conventions
//! - Headings are radians, counter-clockwise from +x, stored in `[0, 2π)`.
//! - Signed heading differences are wrapped into `(-π, π]`.
//! - Lengths are in the same unit as positions and `rho`.
//!
//! # Example
//!
//! ```
//! use dubins_curves::{discretize_curve, find_paths, PathType, Pose2D};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let start = Pose2D::new(0.0, 0.0, 0.0);
//! let goal = Pose2D::new(4.0, 4.0, FRAC_PI_2);
//! let curve = find_paths(start, goal, 1.0)?;
//! assert_eq!(curve.path_type, PathType::LSL);
//!
//! let poses = discretize_curve(&curve, 0.1)?;
//! assert!(poses.last().unwrap().approx_eq(&goal, 1e-6));
//! # Ok::<(), dubins_curves::DubinsError>(())
//! ```

pub mod angle;
mod curve;
mod discretize;
mod error;
pub mod families;
mod planner;
mod pose;
mod standard;

pub use angle::{mod2pi, norm_angle, sinc};
pub use curve::{pose_on_arc, DubinsArc, DubinsCurve};
pub use discretize::{discretize_arc, discretize_curve, sample_curve, ArcSamples, PathSample};
pub use error::DubinsError;
pub use families::{Candidate, PathType, SegmentType};
pub use planner::{DubinsPlanner, PlannerConfig};
pub use pose::Pose2D;
pub use standard::StandardFrame;

/// Result type for Dubins operations.
pub type Result<T> = std::result::Result<T, DubinsError>;

/// Computes the shortest Dubins path from `start` to `goal` with minimum
/// turning radius `rho`, using the default [`PlannerConfig`].
///
/// Fails with [`DubinsError::InvalidRadius`] for a non-positive radius and
/// [`DubinsError::NonFinite`] for NaN or infinite poses.
pub fn find_paths(start: Pose2D, goal: Pose2D, rho: f64) -> Result<DubinsCurve> {
    DubinsPlanner::default().shortest_path(start, goal, rho)
}
