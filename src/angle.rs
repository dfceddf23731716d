//! Angle wrapping and the normalized sinc function.
//!
//! Headings are kept in `[0, 2π)` throughout the crate. Signed differences
//! between headings use `(-π, π]`.

use std::f64::consts::{PI, TAU};

/// Below this magnitude `sinc` switches to its Taylor expansion.
const SINC_TAYLOR_LIMIT: f64 = 0.002;

/// Wraps an angle into `[0, 2π)`.
pub fn mod2pi(angle: f64) -> f64 {
    let value = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if value >= TAU {
        0.0
    } else {
        value
    }
}

/// Wraps an angle into `(-π, π]`.
pub fn norm_angle(angle: f64) -> f64 {
    let value = mod2pi(angle);
    if value > PI {
        value - TAU
    } else {
        value
    }
}

/// `sin(x) / x`, continued with `1` at `x = 0`.
pub fn sinc(x: f64) -> f64 {
    if x.abs() < SINC_TAYLOR_LIMIT {
        let x2 = x * x;
        1.0 - x2 / 6.0 * (1.0 - x2 / 20.0)
    } else {
        x.sin() / x
    }
}
