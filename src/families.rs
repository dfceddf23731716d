//! Closed-form solvers for the six Dubins families in the standard frame.
//!
//! Every solver receives the goal pose expressed in the standard frame
//! (start at the origin facing +x, unit turning radius) and returns the
//! three segment lengths `(t, p, q)` at unit radius. The goal is reduced to
//! the chord length `d` and the start/goal headings `alpha`/`beta` measured
//! from the chord.

use std::f64::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::angle::{mod2pi, norm_angle, sinc};
use crate::pose::Pose2D;

/// Slack for squared lengths and `acos` arguments that drift past their
/// domain by rounding alone.
const DOMAIN_SLACK: f64 = 1e-10;

/// Turn parameters this close to a full revolution are treated as zero.
const FULL_TURN_SLACK: f64 = 1e-10;

/// Wider snap for the CCC middle arc: `acos` near `1` keeps only about half
/// the digits of its argument.
const MIDDLE_TURN_SLACK: f64 = 1e-7;

/// Segment type for a Dubins path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SegmentType {
    Left,
    Straight,
    Right,
}

impl SegmentType {
    /// Curvature sign: `+1` left, `0` straight, `-1` right.
    pub const fn sign(self) -> f64 {
        match self {
            SegmentType::Left => 1.0,
            SegmentType::Straight => 0.0,
            SegmentType::Right => -1.0,
        }
    }
}

/// Dubins path family.
///
/// Declaration order is the precedence used to break length ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PathType {
    LSL,
    RSR,
    LSR,
    RSL,
    RLR,
    LRL,
}

impl PathType {
    /// All families in precedence order.
    pub const ALL: [PathType; 6] = [
        PathType::LSL,
        PathType::RSR,
        PathType::LSR,
        PathType::RSL,
        PathType::RLR,
        PathType::LRL,
    ];

    /// Curve-straight-curve families.
    pub const CSC: [PathType; 4] = [PathType::LSL, PathType::RSR, PathType::LSR, PathType::RSL];

    /// Curve-curve-curve families.
    pub const CCC: [PathType; 2] = [PathType::RLR, PathType::LRL];

    /// The three segment types, in driving order.
    pub const fn segments(self) -> [SegmentType; 3] {
        use SegmentType::{Left, Right, Straight};
        match self {
            PathType::LSL => [Left, Straight, Left],
            PathType::RSR => [Right, Straight, Right],
            PathType::LSR => [Left, Straight, Right],
            PathType::RSL => [Right, Straight, Left],
            PathType::RLR => [Right, Left, Right],
            PathType::LRL => [Left, Right, Left],
        }
    }

    /// Position in the tie-break order.
    pub fn precedence(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for PathType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PathType::LSL => "LSL",
            PathType::RSR => "RSR",
            PathType::LSR => "LSR",
            PathType::RSL => "RSL",
            PathType::RLR => "RLR",
            PathType::LRL => "LRL",
        };
        f.write_str(name)
    }
}

/// Segment lengths of one family in the standard frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub path_type: PathType,
    pub t: f64,
    pub p: f64,
    pub q: f64,
}

impl Candidate {
    // `p` is a straight run for CSC families; the CCC solvers snap it
    // before deriving `t` and `q` from it.
    fn new(path_type: PathType, t: f64, p: f64, q: f64) -> Self {
        Self {
            path_type,
            t: snap_full_turn(t),
            p,
            q: snap_full_turn(q),
        }
    }

    /// Total length at unit radius.
    pub fn length(&self) -> f64 {
        self.t + self.p + self.q
    }

    pub fn lengths(&self) -> [f64; 3] {
        [self.t, self.p, self.q]
    }

    /// End pose reached by driving the three segments from the standard origin.
    pub fn end_pose(&self) -> Pose2D {
        let mut x = 0.0;
        let mut y = 0.0;
        let mut theta = 0.0;
        for (kind, length) in self.path_type.segments().into_iter().zip(self.lengths()) {
            let k = kind.sign();
            let half_turn = 0.5 * k * length;
            let chord = length * sinc(half_turn);
            x += chord * (theta + half_turn).cos();
            y += chord * (theta + half_turn).sin();
            theta += k * length;
        }
        Pose2D {
            x,
            y,
            theta: mod2pi(theta),
        }
    }
}

fn snap_turn(angle: f64, slack: f64) -> f64 {
    if TAU - angle < slack {
        0.0
    } else {
        angle
    }
}

fn snap_full_turn(angle: f64) -> f64 {
    snap_turn(angle, FULL_TURN_SLACK)
}

/// Goal expressed relative to the start-goal chord.
#[derive(Debug, Clone, Copy)]
struct Chord {
    d: f64,
    alpha: f64,
    beta: f64,
    sa: f64,
    ca: f64,
    sb: f64,
    cb: f64,
    cab: f64,
}

impl Chord {
    fn new(goal: Pose2D) -> Self {
        let d = goal.x.hypot(goal.y);
        let phi = if d > 0.0 { goal.y.atan2(goal.x) } else { 0.0 };
        let alpha = mod2pi(-phi);
        let beta = mod2pi(goal.theta - phi);
        let (sa, ca) = alpha.sin_cos();
        let (sb, cb) = beta.sin_cos();
        Self {
            d,
            alpha,
            beta,
            sa,
            ca,
            sb,
            cb,
            cab: (alpha - beta).cos(),
        }
    }
}

fn checked_sqrt(value: f64) -> Option<f64> {
    if value >= 0.0 {
        Some(value.sqrt())
    } else if value > -DOMAIN_SLACK {
        Some(0.0)
    } else {
        None
    }
}

fn checked_acos(value: f64) -> Option<f64> {
    if value.abs() <= 1.0 {
        Some(value.acos())
    } else if value.abs() <= 1.0 + DOMAIN_SLACK {
        Some(value.clamp(-1.0, 1.0).acos())
    } else {
        None
    }
}

/// Solves one family; `None` when its closed form has no real solution.
pub fn solve(path_type: PathType, goal: Pose2D) -> Option<Candidate> {
    match path_type {
        PathType::LSL => solve_lsl(goal),
        PathType::RSR => solve_rsr(goal),
        PathType::LSR => solve_lsr(goal),
        PathType::RSL => solve_rsl(goal),
        PathType::RLR => solve_rlr(goal),
        PathType::LRL => solve_lrl(goal),
    }
}

pub fn solve_lsl(goal: Pose2D) -> Option<Candidate> {
    let c = Chord::new(goal);
    let tmp0 = c.d + c.sa - c.sb;
    let p_sq = 2.0 + c.d * c.d - 2.0 * c.cab + 2.0 * c.d * (c.sa - c.sb);
    let p = checked_sqrt(p_sq)?;
    let tmp1 = (c.cb - c.ca).atan2(tmp0);
    let t = mod2pi(tmp1 - c.alpha);
    let q = mod2pi(c.beta - tmp1);
    Some(Candidate::new(PathType::LSL, t, p, q))
}

pub fn solve_rsr(goal: Pose2D) -> Option<Candidate> {
    let c = Chord::new(goal);
    let tmp0 = c.d - c.sa + c.sb;
    let p_sq = 2.0 + c.d * c.d - 2.0 * c.cab + 2.0 * c.d * (c.sb - c.sa);
    let p = checked_sqrt(p_sq)?;
    let tmp1 = (c.ca - c.cb).atan2(tmp0);
    let t = mod2pi(c.alpha - tmp1);
    let q = mod2pi(tmp1 - c.beta);
    Some(Candidate::new(PathType::RSR, t, p, q))
}

pub fn solve_lsr(goal: Pose2D) -> Option<Candidate> {
    let c = Chord::new(goal);
    let p_sq = -2.0 + c.d * c.d + 2.0 * c.cab + 2.0 * c.d * (c.sa + c.sb);
    let p = checked_sqrt(p_sq)?;
    let tmp0 = (-c.ca - c.cb).atan2(c.d + c.sa + c.sb) - (-2.0_f64).atan2(p);
    let t = mod2pi(tmp0 - c.alpha);
    let q = mod2pi(tmp0 - c.beta);
    Some(Candidate::new(PathType::LSR, t, p, q))
}

pub fn solve_rsl(goal: Pose2D) -> Option<Candidate> {
    let c = Chord::new(goal);
    let p_sq = -2.0 + c.d * c.d + 2.0 * c.cab - 2.0 * c.d * (c.sa + c.sb);
    let p = checked_sqrt(p_sq)?;
    let tmp0 = (c.ca + c.cb).atan2(c.d - c.sa - c.sb) - 2.0_f64.atan2(p);
    let t = mod2pi(c.alpha - tmp0);
    let q = mod2pi(c.beta - tmp0);
    Some(Candidate::new(PathType::RSL, t, p, q))
}

pub fn solve_rlr(goal: Pose2D) -> Option<Candidate> {
    let c = Chord::new(goal);
    let tmp0 = (6.0 - c.d * c.d + 2.0 * c.cab + 2.0 * c.d * (c.sa - c.sb)) / 8.0;
    let phi = (c.ca - c.cb).atan2(c.d - c.sa + c.sb);
    let p = snap_turn(mod2pi(TAU - checked_acos(tmp0)?), MIDDLE_TURN_SLACK);
    let t = mod2pi(c.alpha - phi + 0.5 * p);
    let q = mod2pi(c.alpha - c.beta - t + p);
    Some(Candidate::new(PathType::RLR, t, p, q))
}

pub fn solve_lrl(goal: Pose2D) -> Option<Candidate> {
    let c = Chord::new(goal);
    let tmp0 = (6.0 - c.d * c.d + 2.0 * c.cab + 2.0 * c.d * (c.sb - c.sa)) / 8.0;
    let phi = (c.ca - c.cb).atan2(c.d + c.sa - c.sb);
    let p = snap_turn(mod2pi(TAU - checked_acos(tmp0)?), MIDDLE_TURN_SLACK);
    let t = mod2pi(-c.alpha - phi + 0.5 * p);
    let q = mod2pi(c.beta - c.alpha - t + p);
    Some(Candidate::new(PathType::LRL, t, p, q))
}

/// Whether `candidate` drives from the standard origin to `goal`.
///
/// Position error is compared against `tolerance * (1 + |goal|)` so that far
/// goals are not rejected for rounding in the straight segment.
pub fn check(candidate: &Candidate, goal: Pose2D, tolerance: f64) -> bool {
    let lengths = candidate.lengths();
    if lengths.iter().any(|length| !length.is_finite() || *length < 0.0) {
        return false;
    }
    let end = candidate.end_pose();
    let position_error = end.distance(&goal);
    let heading_error = norm_angle(end.theta - goal.theta).abs();
    let scale = 1.0 + goal.x.hypot(goal.y);
    position_error <= tolerance * scale && heading_error <= tolerance
}
