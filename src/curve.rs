//! Constant-curvature arcs and three-arc Dubins curves in the real frame.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::angle::{mod2pi, sinc};
use crate::error::DubinsError;
use crate::families::{PathType, SegmentType};
use crate::pose::Pose2D;
use crate::Result;

/// Slack for arc-length queries that overshoot by rounding, relative to
/// `max(1, length)`.
pub(crate) const ARC_LENGTH_SLACK: f64 = 1e-9;

/// One segment of a Dubins curve: a left or right turn at the minimum
/// radius, or a straight run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DubinsArc {
    /// Pose at the beginning of the arc.
    pub start: Pose2D,
    /// Turn direction.
    pub kind: SegmentType,
    /// Signed curvature (`+1/rho` left, `-1/rho` right, `0` straight).
    pub curvature: f64,
    /// Arc length, never negative.
    pub length: f64,
}

impl DubinsArc {
    /// Creates an arc of `length` starting at `start` and turning at radius `rho`.
    pub fn new(start: Pose2D, kind: SegmentType, rho: f64, length: f64) -> Result<Self> {
        if !(rho.is_finite() && rho > 0.0) {
            return Err(DubinsError::InvalidRadius(rho));
        }
        start.ensure_finite("arc start pose")?;
        if !length.is_finite() {
            return Err(DubinsError::NonFinite { what: "arc length" });
        }
        if length < 0.0 {
            return Err(DubinsError::InvalidLength(length));
        }
        Ok(Self {
            start: Pose2D::new(start.x, start.y, start.theta),
            kind,
            curvature: kind.sign() / rho,
            length,
        })
    }

    /// Turning radius, or `None` for a straight run.
    pub fn radius(&self) -> Option<f64> {
        match self.kind {
            SegmentType::Straight => None,
            _ => Some(1.0 / self.curvature.abs()),
        }
    }

    /// Center of the turning circle, or `None` for a straight run.
    pub fn center(&self) -> Option<(f64, f64)> {
        if self.kind == SegmentType::Straight {
            return None;
        }
        let r = 1.0 / self.curvature;
        let (sin, cos) = self.start.theta.sin_cos();
        Some((self.start.x - r * sin, self.start.y + r * cos))
    }

    /// Pose at the end of the arc.
    pub fn end(&self) -> Pose2D {
        self.advance(self.length)
    }

    /// Closed-form constant-curvature integration over `s`; no range check.
    pub(crate) fn advance(&self, s: f64) -> Pose2D {
        let half_turn = 0.5 * self.curvature * s;
        let chord = s * sinc(half_turn);
        let heading = self.start.theta + half_turn;
        Pose2D {
            x: self.start.x + chord * heading.cos(),
            y: self.start.y + chord * heading.sin(),
            theta: mod2pi(self.start.theta + self.curvature * s),
        }
    }
}

/// Pose reached after travelling `s` along `arc`.
///
/// Fails with [`DubinsError::OutOfRange`] unless `0 <= s <= arc.length`
/// (up to a small rounding slack, which is clamped away).
pub fn pose_on_arc(arc: &DubinsArc, s: f64) -> Result<Pose2D> {
    let s = clamp_to_length(s, arc.length)?;
    Ok(arc.advance(s))
}

pub(crate) fn clamp_to_length(s: f64, length: f64) -> Result<f64> {
    if !s.is_finite() {
        return Err(DubinsError::NonFinite {
            what: "arc length query",
        });
    }
    let slack = ARC_LENGTH_SLACK * length.max(1.0);
    if s < -slack || s > length + slack {
        return Err(DubinsError::OutOfRange { s, length });
    }
    Ok(s.clamp(0.0, length))
}

/// A three-arc Dubins curve anchored at its real-frame start pose.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DubinsCurve {
    /// Family the curve belongs to.
    pub path_type: PathType,
    /// Minimum turning radius the curve was built for.
    pub rho: f64,
    /// Arcs in driving order; each starts where the previous one ends.
    pub arcs: [DubinsArc; 3],
    /// Sum of the three arc lengths.
    pub total_length: f64,
}

impl DubinsCurve {
    /// Chains three arcs of the given real-frame `lengths` from `start`.
    pub fn from_parts(
        start: Pose2D,
        path_type: PathType,
        rho: f64,
        lengths: [f64; 3],
    ) -> Result<Self> {
        let [k0, k1, k2] = path_type.segments();
        let first = DubinsArc::new(start, k0, rho, lengths[0])?;
        let second = DubinsArc::new(first.end(), k1, rho, lengths[1])?;
        let third = DubinsArc::new(second.end(), k2, rho, lengths[2])?;
        Ok(Self {
            path_type,
            rho,
            total_length: first.length + second.length + third.length,
            arcs: [first, second, third],
        })
    }

    pub fn start(&self) -> Pose2D {
        self.arcs[0].start
    }

    pub fn end(&self) -> Pose2D {
        self.arcs[2].end()
    }

    pub fn segment_lengths(&self) -> [f64; 3] {
        [self.arcs[0].length, self.arcs[1].length, self.arcs[2].length]
    }

    /// Pose at cumulative distance `distance` from the curve start.
    pub fn pose_at(&self, distance: f64) -> Result<Pose2D> {
        let (arc, s) = self.locate(distance)?;
        Ok(arc.advance(s))
    }

    /// Arc containing cumulative distance `distance` and the offset into it.
    pub(crate) fn locate(&self, distance: f64) -> Result<(&DubinsArc, f64)> {
        let mut remaining = clamp_to_length(distance, self.total_length)?;
        for arc in &self.arcs[..2] {
            if remaining <= arc.length {
                return Ok((arc, remaining));
            }
            remaining -= arc.length;
        }
        let last = &self.arcs[2];
        Ok((last, remaining.min(last.length)))
    }
}
