//! Planar pose value type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::angle::{mod2pi, norm_angle};
use crate::error::DubinsError;
use crate::Result;

/// A pose in 2D with a heading.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pose2D {
    /// X position.
    pub x: f64,
    /// Y position.
    pub y: f64,
    /// Heading in radians, counter-clockwise from +x, in `[0, 2π)`.
    pub theta: f64,
}

impl Pose2D {
    /// Creates a pose, wrapping the heading into `[0, 2π)`.
    pub fn new(x: f64, y: f64, theta: f64) -> Self {
        Self {
            x,
            y,
            theta: mod2pi(theta),
        }
    }

    /// The pose at the origin facing +x.
    pub const fn origin() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            theta: 0.0,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.theta.is_finite()
    }

    /// Rejects NaN or infinite components, naming the offending input.
    pub(crate) fn ensure_finite(&self, what: &'static str) -> Result<()> {
        if self.is_finite() {
            Ok(())
        } else {
            Err(DubinsError::NonFinite { what })
        }
    }

    /// Euclidean distance between the positions of two poses.
    pub fn distance(&self, other: &Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Absolute heading difference, wrapped so that `0` and `2π` coincide.
    pub fn heading_error(&self, other: &Self) -> f64 {
        norm_angle(other.theta - self.theta).abs()
    }

    /// Whether both position and heading agree within `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.distance(other) <= tolerance && self.heading_error(other) <= tolerance
    }
}

impl From<[f64; 3]> for Pose2D {
    fn from([x, y, theta]: [f64; 3]) -> Self {
        Self::new(x, y, theta)
    }
}

impl From<(f64, f64, f64)> for Pose2D {
    fn from((x, y, theta): (f64, f64, f64)) -> Self {
        Self::new(x, y, theta)
    }
}
