//! Family evaluation and shortest-path selection.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::curve::DubinsCurve;
use crate::error::DubinsError;
use crate::families::{check, solve, Candidate, PathType};
use crate::pose::Pose2D;
use crate::standard::StandardFrame;
use crate::Result;

/// Options for the planner.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Closure tolerance in the unit-radius frame (position scaled by goal
    /// distance, heading in radians).
    pub tolerance: f64,
    /// Lengths closer than this (unit-radius frame) count as a tie.
    pub tie_tolerance: f64,
    /// Families to evaluate. Precedence is always `PathType` order,
    /// whatever order they are listed in.
    pub families: Vec<PathType>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            tie_tolerance: 1e-9,
            families: PathType::ALL.to_vec(),
        }
    }
}

impl PlannerConfig {
    /// Checks that the tolerances are usable and at least one family is enabled.
    pub fn validate(&self) -> Result<()> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(DubinsError::config(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if !(self.tie_tolerance.is_finite() && self.tie_tolerance >= 0.0) {
            return Err(DubinsError::config(format!(
                "tie_tolerance must be non-negative, got {}",
                self.tie_tolerance
            )));
        }
        if self.families.is_empty() {
            return Err(DubinsError::config("no path families enabled"));
        }
        Ok(())
    }

    /// Parses and validates a configuration from TOML.
    ///
    /// Missing keys take their default values.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| DubinsError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Shortest-path planner over the six Dubins families.
#[derive(Debug, Clone, Default)]
pub struct DubinsPlanner {
    config: PlannerConfig,
}

impl DubinsPlanner {
    /// Creates a planner after validating `config`.
    pub fn new(config: PlannerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Computes the shortest Dubins path between two poses.
    ///
    /// Length ties are broken by `PathType` order.
    pub fn shortest_path(&self, start: Pose2D, goal: Pose2D, rho: f64) -> Result<DubinsCurve> {
        let (frame, ranked) = self.ranked_candidates(start, goal, rho)?;
        let best = ranked.first().ok_or_else(|| {
            warn!(?start, ?goal, rho, "no Dubins family reached the goal");
            DubinsError::NoFeasiblePath
        })?;
        debug!(
            path_type = %best.path_type,
            length = frame.length_from_standard(best.length()),
            "selected Dubins path"
        );
        to_curve(&frame, best)
    }

    /// Computes every feasible Dubins path, shortest first.
    pub fn all_paths(&self, start: Pose2D, goal: Pose2D, rho: f64) -> Result<Vec<DubinsCurve>> {
        let (frame, ranked) = self.ranked_candidates(start, goal, rho)?;
        if ranked.is_empty() {
            warn!(?start, ?goal, rho, "no Dubins family reached the goal");
            return Err(DubinsError::NoFeasiblePath);
        }
        ranked
            .iter()
            .map(|candidate| to_curve(&frame, candidate))
            .collect()
    }

    /// Standard-frame candidates that pass the closure check, in selection order.
    pub fn candidates(&self, start: Pose2D, goal: Pose2D, rho: f64) -> Result<Vec<Candidate>> {
        self.ranked_candidates(start, goal, rho)
            .map(|(_, ranked)| ranked)
    }

    fn ranked_candidates(
        &self,
        start: Pose2D,
        goal: Pose2D,
        rho: f64,
    ) -> Result<(StandardFrame, Vec<Candidate>)> {
        let frame = StandardFrame::new(start, rho)?;
        goal.ensure_finite("goal pose")?;
        let standard_goal = frame.to_standard(goal);
        standard_goal.ensure_finite("standardized goal")?;

        let mut families = self.config.families.clone();
        families.sort_unstable();
        families.dedup();

        let mut feasible = Vec::with_capacity(families.len());
        for family in families {
            let Some(candidate) = solve(family, standard_goal) else {
                debug!(path_type = %family, "no solution in domain");
                continue;
            };
            trace!(
                path_type = %family,
                t = candidate.t,
                p = candidate.p,
                q = candidate.q,
                "candidate"
            );
            if check(&candidate, standard_goal, self.config.tolerance) {
                feasible.push(candidate);
            } else {
                debug!(path_type = %family, "candidate failed closure check");
            }
        }
        Ok((frame, rank(feasible, self.config.tie_tolerance)))
    }
}

/// Orders candidates by length; within `tie_tolerance` of the shortest
/// remaining one, the earliest family wins.
///
/// Expects `candidates` in precedence order.
fn rank(mut candidates: Vec<Candidate>, tie_tolerance: f64) -> Vec<Candidate> {
    let mut ranked = Vec::with_capacity(candidates.len());
    while !candidates.is_empty() {
        let shortest = candidates
            .iter()
            .map(Candidate::length)
            .fold(f64::INFINITY, f64::min);
        let index = candidates
            .iter()
            .position(|c| c.length() <= shortest + tie_tolerance)
            .unwrap_or(0);
        ranked.push(candidates.remove(index));
    }
    ranked
}

fn to_curve(frame: &StandardFrame, candidate: &Candidate) -> Result<DubinsCurve> {
    let lengths = candidate
        .lengths()
        .map(|length| frame.length_from_standard(length));
    DubinsCurve::from_parts(frame.origin(), candidate.path_type, frame.rho(), lengths)
}
