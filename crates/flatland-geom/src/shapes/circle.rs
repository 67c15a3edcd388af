use flatland_core::math::{approx_eq, EPSILON};
use flatland_core::Vec2;

use crate::types::axis_aligned_line::AxisAlignedLine2;

/// A circle described by its radius alone.
///
/// Position is never stored. By convention every query takes the
/// top-left corner of the circle's bounding box as the world offset, so
/// the center sits at `offset + (radius, radius)`; [`Circle2::center_of`]
/// performs that translation.
#[derive(Debug, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle2 {
    radius: f32,
}

impl Circle2 {
    /// Creates a circle of the given radius.
    ///
    /// The radius must be non-negative and finite; a zero radius yields
    /// a point-like circle that still answers every query consistently.
    pub const fn new(radius: f32) -> Self {
        Self { radius }
    }

    /// Radius of the circle.
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// World-space center for a circle placed with its bounding-box
    /// top-left at `pos`.
    pub fn center_of(&self, pos: Vec2) -> Vec2 {
        pos.add(Vec2::new(self.radius, self.radius))
    }

    /// Projects the circle placed at `pos` onto `axis` (assumed unit
    /// length): `[center·axis − r, center·axis + r]`.
    pub fn project_onto_axis(&self, pos: Vec2, axis: Vec2) -> AxisAlignedLine2 {
        let c = self.center_of(pos).dot(axis);
        AxisAlignedLine2::new(axis, c - self.radius, c + self.radius)
    }

    /// Point containment for the circle placed at `pos`.
    ///
    /// `strict` excludes the boundary (within epsilon); non-strict
    /// includes it.
    pub fn contains_point(&self, pos: Vec2, pt: Vec2, strict: bool) -> bool {
        let d2 = pt.sub(self.center_of(pos)).length_squared();
        if strict {
            let inner = (self.radius - EPSILON).max(0.0);
            d2 < inner * inner
        } else {
            let outer = self.radius + EPSILON;
            d2 <= outer * outer
        }
    }

    /// Epsilon equality on the radius.
    pub fn approx_eq(&self, other: &Self) -> bool {
        approx_eq(self.radius, other.radius)
    }
}
