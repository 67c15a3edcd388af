// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::f32::consts::TAU;

use crate::math::approx_eq;

/// Normalized 2D rotation with cached sine and cosine.
///
/// * `theta` is always normalized into `[0, 2π)` at construction.
/// * `cos`/`sin` are derived from `theta` once and never mutated, so they
///   are always consistent with the stored angle.
/// * [`Rot2::ZERO`] is the zero-rotation sentinel; [`Rot2::is_zero`]
///   checks it exactly (not within epsilon) so rotated-shape queries can
///   skip per-vertex rotation entirely on the unrotated fast path.
#[derive(Debug, Copy, Clone)]
pub struct Rot2 {
    theta: f32,
    cos: f32,
    sin: f32,
}

impl Rot2 {
    /// The zero rotation. Construction normalizes every full turn onto
    /// this exact value.
    pub const ZERO: Self = Self {
        theta: 0.0,
        cos: 1.0,
        sin: 0.0,
    };

    /// Builds a rotation from an angle in radians, normalizing it into
    /// `[0, 2π)`.
    pub fn new(theta: f32) -> Self {
        let theta = theta.rem_euclid(TAU);
        // rem_euclid can round up to TAU itself for tiny negative inputs.
        let theta = if theta >= TAU { 0.0 } else { theta };
        if theta == 0.0 {
            return Self::ZERO;
        }
        let (sin, cos) = theta.sin_cos();
        Self { theta, cos, sin }
    }

    /// Normalized angle in radians, in `[0, 2π)`.
    pub const fn theta(&self) -> f32 {
        self.theta
    }

    /// Cached cosine of the angle.
    pub const fn cos(&self) -> f32 {
        self.cos
    }

    /// Cached sine of the angle.
    pub const fn sin(&self) -> f32 {
        self.sin
    }

    /// Exact check for the zero-rotation sentinel.
    pub fn is_zero(&self) -> bool {
        self.theta == 0.0
    }

    /// The rotation that undoes this one.
    pub fn inverse(&self) -> Self {
        if self.is_zero() {
            return Self::ZERO;
        }
        Self {
            theta: TAU - self.theta,
            cos: self.cos,
            sin: -self.sin,
        }
    }

    /// Epsilon-tolerant equality on the normalized angle only.
    pub fn approx_eq(&self, other: Self) -> bool {
        approx_eq(self.theta, other.theta)
    }
}
