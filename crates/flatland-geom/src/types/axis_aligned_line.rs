use flatland_core::math::EPSILON;
use flatland_core::Vec2;

use crate::error::GeomError;

/// A 1D interval tagged with the axis it was projected onto.
///
/// Every SAT projection produces one of these. The interval arithmetic is
/// a pure function of `(min, max)`; the axis is carried for traceability
/// and to reject comparisons between intervals projected onto different
/// axes, it never participates in the arithmetic itself.
///
/// Invariant: `min <= max` (construction auto-swaps reversed input).
#[derive(Debug, Copy, Clone)]
pub struct AxisAlignedLine2 {
    axis: Vec2,
    min: f32,
    max: f32,
}

impl AxisAlignedLine2 {
    /// Builds an interval on `axis`, swapping the endpoints if they were
    /// given in reverse order.
    pub fn new(axis: Vec2, a: f32, b: f32) -> Self {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        Self { axis, min, max }
    }

    /// Axis this interval was projected onto (advisory, unit length by
    /// convention).
    pub const fn axis(&self) -> Vec2 {
        self.axis
    }

    /// Lower endpoint.
    pub const fn min(&self) -> f32 {
        self.min
    }

    /// Upper endpoint.
    pub const fn max(&self) -> f32 {
        self.max
    }

    fn check_shared_axis(&self, other: &Self) -> Result<(), GeomError> {
        if self.axis.approx_eq(other.axis) {
            Ok(())
        } else {
            Err(GeomError::AxisMismatch {
                left: self.axis,
                right: other.axis,
            })
        }
    }

    /// Returns `true` if the two intervals overlap.
    ///
    /// `strict` requires overlap of more than `EPSILON`; non-strict also
    /// accepts configurations that merely touch within `EPSILON`.
    /// Symmetric in its operands. Fails if the intervals were projected
    /// onto different axes.
    pub fn intersects(&self, other: &Self, strict: bool) -> Result<bool, GeomError> {
        self.check_shared_axis(other)?;
        Ok(Self::intersects_intervals(
            self.min, self.max, other.min, other.max, strict,
        ))
    }

    /// Signed displacement of this interval that resolves its overlap
    /// with `other`, or `None` when they do not strictly overlap.
    ///
    /// Negative values push this interval toward smaller coordinates.
    /// The magnitude is always the minimal displacement along this axis.
    pub fn intersect_mtv(&self, other: &Self) -> Result<Option<f32>, GeomError> {
        self.check_shared_axis(other)?;
        Ok(Self::intersect_mtv_intervals(
            self.min, self.max, other.min, other.max,
        ))
    }

    /// Unsigned gap between two disjoint intervals, or `None` when they
    /// overlap non-strictly.
    pub fn min_distance(&self, other: &Self) -> Result<Option<f32>, GeomError> {
        self.check_shared_axis(other)?;
        Ok(Self::min_distance_intervals(
            self.min, self.max, other.min, other.max,
        ))
    }

    /// Closed (non-strict) or open (strict) containment of a scalar.
    pub fn contains_point(&self, point: f32, strict: bool) -> bool {
        Self::contains_point_intervals(self.min, self.max, point, strict)
    }

    /// Unsigned gap from `point` to the nearest interval edge, or `None`
    /// when the point is inside (non-strictly).
    pub fn min_distance_to_point(&self, point: f32) -> Option<f32> {
        Self::min_distance_point_intervals(self.min, self.max, point)
    }

    /// Interval overlap test on raw endpoints.
    ///
    /// Hot-path variant: callers must pass `min <= max` for both
    /// intervals (projection loops produce them pre-sorted).
    pub fn intersects_intervals(min1: f32, max1: f32, min2: f32, max2: f32, strict: bool) -> bool {
        if strict {
            min1 < max2 - EPSILON && min2 < max1 - EPSILON
        } else {
            min1 <= max2 + EPSILON && min2 <= max1 + EPSILON
        }
    }

    /// Interval MTV on raw endpoints; see [`AxisAlignedLine2::intersect_mtv`].
    pub fn intersect_mtv_intervals(min1: f32, max1: f32, min2: f32, max2: f32) -> Option<f32> {
        if !Self::intersects_intervals(min1, max1, min2, max2, true) {
            return None;
        }
        if min1 <= min2 {
            // Interval 1 leads: push it left until max1 meets min2.
            Some(min2 - max1)
        } else {
            // Interval 2 leads: push interval 1 right past max2.
            Some(max2 - min1)
        }
    }

    /// Scalar containment on raw endpoints.
    pub fn contains_point_intervals(min: f32, max: f32, point: f32, strict: bool) -> bool {
        if strict {
            point > min + EPSILON && point < max - EPSILON
        } else {
            point >= min - EPSILON && point <= max + EPSILON
        }
    }

    /// Point-to-interval gap on raw endpoints.
    pub fn min_distance_point_intervals(min: f32, max: f32, point: f32) -> Option<f32> {
        if Self::contains_point_intervals(min, max, point, false) {
            return None;
        }
        if point < min {
            Some(min - point)
        } else {
            Some(point - max)
        }
    }

    /// Interval-to-interval gap on raw endpoints.
    pub fn min_distance_intervals(min1: f32, max1: f32, min2: f32, max2: f32) -> Option<f32> {
        if Self::intersects_intervals(min1, max1, min2, max2, false) {
            return None;
        }
        if max1 < min2 {
            Some(min2 - max1)
        } else {
            Some(min1 - max2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor_swaps_reversed_endpoints() {
        let line = AxisAlignedLine2::new(Vec2::UNIT_X, 5.0, 0.0);
        assert_eq!(line.min(), 0.0);
        assert_eq!(line.max(), 5.0);
    }

    #[test]
    fn mismatched_axes_are_rejected() {
        let a = AxisAlignedLine2::new(Vec2::UNIT_X, 0.0, 1.0);
        let b = AxisAlignedLine2::new(Vec2::UNIT_Y, 0.0, 1.0);
        assert!(matches!(
            a.intersects(&b, false),
            Err(GeomError::AxisMismatch { .. })
        ));
    }

    #[test]
    fn touching_intervals_intersect_only_non_strictly() {
        assert!(AxisAlignedLine2::intersects_intervals(
            0.0, 5.0, 5.0, 8.0, false
        ));
        assert!(!AxisAlignedLine2::intersects_intervals(
            0.0, 5.0, 5.0, 8.0, true
        ));
    }

    #[test]
    fn mtv_pushes_leading_interval_left() {
        // Spec example: (0,5) vs (3,8) resolves by pushing the first
        // interval left by 2.
        assert_eq!(
            AxisAlignedLine2::intersect_mtv_intervals(0.0, 5.0, 3.0, 8.0),
            Some(-2.0)
        );
        assert_eq!(
            AxisAlignedLine2::intersect_mtv_intervals(3.0, 8.0, 0.0, 5.0),
            Some(2.0)
        );
        assert_eq!(
            AxisAlignedLine2::intersect_mtv_intervals(0.0, 1.0, 2.0, 3.0),
            None
        );
    }

    #[test]
    fn point_distance_none_inside() {
        assert_eq!(
            AxisAlignedLine2::min_distance_point_intervals(0.0, 2.0, 1.0),
            None
        );
        assert_eq!(
            AxisAlignedLine2::min_distance_point_intervals(0.0, 2.0, 5.0),
            Some(3.0)
        );
        assert_eq!(
            AxisAlignedLine2::min_distance_point_intervals(0.0, 2.0, -4.0),
            Some(4.0)
        );
    }

    #[test]
    fn interval_distance_none_when_touching() {
        assert_eq!(
            AxisAlignedLine2::min_distance_intervals(0.0, 2.0, 2.0, 4.0),
            None
        );
        assert_eq!(
            AxisAlignedLine2::min_distance_intervals(0.0, 2.0, 5.0, 6.0),
            Some(3.0)
        );
        assert_eq!(
            AxisAlignedLine2::min_distance_intervals(5.0, 6.0, 0.0, 2.0),
            Some(3.0)
        );
    }
}
