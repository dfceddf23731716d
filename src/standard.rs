//! Reversible transform into the unit-radius frame anchored at the start pose.
//!
//! In the standard frame the start pose is `(0, 0, 0)` and the turning
//! radius is `1`, so the family solvers only ever see the goal pose.

use crate::angle::mod2pi;
use crate::error::DubinsError;
use crate::pose::Pose2D;
use crate::Result;

/// Translation by `-start`, rotation by `-start.theta`, scale by `1 / rho`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardFrame {
    origin: Pose2D,
    rho: f64,
    cos: f64,
    sin: f64,
}

impl StandardFrame {
    /// Builds the frame for a problem starting at `start` with turning radius `rho`.
    pub fn new(start: Pose2D, rho: f64) -> Result<Self> {
        if !(rho.is_finite() && rho > 0.0) {
            return Err(DubinsError::InvalidRadius(rho));
        }
        start.ensure_finite("start pose")?;
        let (sin, cos) = start.theta.sin_cos();
        Ok(Self {
            origin: start,
            rho,
            cos,
            sin,
        })
    }

    /// The real-frame pose that maps to the standard origin.
    pub fn origin(&self) -> Pose2D {
        self.origin
    }

    /// Minimum turning radius of the real problem.
    pub fn rho(&self) -> f64 {
        self.rho
    }

    /// Maps a real-frame pose into the standard frame.
    pub fn to_standard(&self, pose: Pose2D) -> Pose2D {
        let dx = pose.x - self.origin.x;
        let dy = pose.y - self.origin.y;
        Pose2D {
            x: (self.cos * dx + self.sin * dy) / self.rho,
            y: (-self.sin * dx + self.cos * dy) / self.rho,
            theta: mod2pi(pose.theta - self.origin.theta),
        }
    }

    /// Maps a standard-frame pose back into the real frame.
    pub fn from_standard(&self, pose: Pose2D) -> Pose2D {
        let x = pose.x * self.rho;
        let y = pose.y * self.rho;
        Pose2D {
            x: self.origin.x + self.cos * x - self.sin * y,
            y: self.origin.y + self.sin * x + self.cos * y,
            theta: mod2pi(pose.theta + self.origin.theta),
        }
    }

    pub fn length_to_standard(&self, length: f64) -> f64 {
        length / self.rho
    }

    pub fn length_from_standard(&self, length: f64) -> f64 {
        length * self.rho
    }
}
