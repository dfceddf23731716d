//! Sampling arcs and curves into pose sequences at a fixed step.

use std::iter::FusedIterator;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::curve::{DubinsArc, DubinsCurve, ARC_LENGTH_SLACK};
use crate::error::DubinsError;
use crate::pose::Pose2D;
use crate::Result;

/// A discretized pose tagged with where it lies on the curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathSample {
    /// Cumulative arc length from the curve start.
    pub s: f64,
    pub pose: Pose2D,
    /// Signed curvature of the arc the sample lies on.
    pub curvature: f64,
}

fn validate_step(step: f64) -> Result<()> {
    if step.is_finite() && step > 0.0 {
        Ok(())
    } else {
        Err(DubinsError::InvalidStep(step))
    }
}

/// Number of samples covering `[0, length]` at `step`, both ends included.
///
/// A trailing remainder shorter than the rounding slack is merged into the
/// last regular sample instead of producing a near-duplicate.
fn sample_count(length: f64, step: f64) -> Result<usize> {
    if length <= 0.0 {
        return Ok(1);
    }
    let full = (length / step).floor();
    // room for the start sample and a trailing partial step
    if full >= (usize::MAX - 1) as f64 {
        return Err(DubinsError::TooManySamples { length, step });
    }
    let remainder = length - full * step;
    let regular = full as usize + 1;
    if remainder <= ARC_LENGTH_SLACK * length.max(1.0) {
        Ok(regular)
    } else {
        Ok(regular + 1)
    }
}

/// Distance of sample `index` out of `count`; the last one lands exactly on `length`.
fn sample_distance(index: usize, count: usize, step: f64, length: f64) -> f64 {
    if index + 1 == count {
        length
    } else {
        index as f64 * step
    }
}

/// Poses along one arc at `0, step, 2 * step, ...` and finally its end.
#[derive(Debug, Clone)]
pub struct ArcSamples {
    arc: DubinsArc,
    step: f64,
    index: usize,
    count: usize,
}

impl ArcSamples {
    fn new(arc: DubinsArc, step: f64) -> Result<Self> {
        Ok(Self {
            count: sample_count(arc.length, step)?,
            arc,
            step,
            index: 0,
        })
    }
}

impl Iterator for ArcSamples {
    type Item = Pose2D;

    fn next(&mut self) -> Option<Pose2D> {
        if self.index >= self.count {
            return None;
        }
        let s = sample_distance(self.index, self.count, self.step, self.arc.length);
        self.index += 1;
        Some(self.arc.advance(s))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ArcSamples {}

impl FusedIterator for ArcSamples {}

/// Discretizes a single arc.
///
/// The first pose is the arc start and the last is exactly the arc end;
/// consecutive poses are `step` apart except possibly the final pair.
pub fn discretize_arc(arc: &DubinsArc, step: f64) -> Result<ArcSamples> {
    validate_step(step)?;
    ArcSamples::new(*arc, step)
}

/// Discretizes the three arcs of a curve, emitting each junction pose once.
pub fn discretize_curve(curve: &DubinsCurve, step: f64) -> Result<Vec<Pose2D>> {
    validate_step(step)?;
    let samples = curve
        .arcs
        .iter()
        .map(|arc| ArcSamples::new(*arc, step))
        .collect::<Result<Vec<_>>>()?;
    let too_many = || DubinsError::TooManySamples {
        length: curve.total_length,
        step,
    };
    let total = samples
        .iter()
        .try_fold(0usize, |total, arc_samples| total.checked_add(arc_samples.len()))
        .ok_or_else(too_many)?;
    let mut poses = Vec::new();
    poses.try_reserve_exact(total).map_err(|_| too_many())?;
    for (i, arc_samples) in samples.into_iter().enumerate() {
        if i == 0 {
            poses.extend(arc_samples);
        } else {
            poses.extend(arc_samples.skip(1));
        }
    }
    trace!(
        path_type = %curve.path_type,
        step,
        count = poses.len(),
        "discretized curve"
    );
    Ok(poses)
}

/// Samples a curve at uniform cumulative arc length `0, step, ..., total_length`.
///
/// Unlike [`discretize_curve`] the spacing carries across arc boundaries, so
/// every gap but the last is exactly `step`.
pub fn sample_curve(curve: &DubinsCurve, step: f64) -> Result<Vec<PathSample>> {
    validate_step(step)?;
    let count = sample_count(curve.total_length, step)?;
    let mut samples = Vec::new();
    samples
        .try_reserve_exact(count)
        .map_err(|_| DubinsError::TooManySamples {
            length: curve.total_length,
            step,
        })?;
    for index in 0..count {
        let s = sample_distance(index, count, step, curve.total_length);
        let (arc, offset) = curve.locate(s)?;
        samples.push(PathSample {
            s,
            pose: arc.advance(offset),
            curvature: arc.curvature,
        });
    }
    Ok(samples)
}
