//! Errors for Dubins planning and discretization.

use thiserror::Error;

/// Errors for Dubins planning.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DubinsError {
    /// Turning radius must be positive and finite.
    #[error("invalid turning radius {0} (must be positive and finite)")]
    InvalidRadius(f64),

    /// Discretization step must be positive and finite.
    #[error("invalid step {0} (must be positive and finite)")]
    InvalidStep(f64),

    /// Arc-length query outside `[0, length]`.
    #[error("arc length {s} is outside [0, {length}]")]
    OutOfRange {
        /// Requested distance.
        s: f64,
        /// Length of the arc or curve that was queried.
        length: f64,
    },

    /// No family produced a path that reaches the goal.
    ///
    /// One of the six families always exists for a positive radius and
    /// finite poses, so this signals a numerical defect.
    #[error("no feasible Dubins path found")]
    NoFeasiblePath,

    /// An input pose or length was NaN or infinite, or overflowed once
    /// scaled by the turning radius.
    #[error("non-finite value in {what}")]
    NonFinite {
        /// Which input was rejected.
        what: &'static str,
    },

    /// Arc length must be non-negative.
    #[error("invalid arc length {0} (must be non-negative)")]
    InvalidLength(f64),

    /// Discretization would need more samples than fit in memory.
    #[error("step {step} is too small to discretize length {length}")]
    TooManySamples {
        /// Length being discretized.
        length: f64,
        /// Requested step.
        step: f64,
    },

    /// Planner configuration is unusable.
    #[error("invalid planner configuration: {reason}")]
    Config {
        /// What is wrong with the configuration.
        reason: String,
    },
}

impl DubinsError {
    /// Create a configuration error.
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Whether this error reports a caller mistake rather than an internal defect.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::NoFeasiblePath)
    }
}
