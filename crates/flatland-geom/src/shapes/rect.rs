use flatland_core::math::approx_eq;
use flatland_core::{Rot2, Vec2};

use crate::error::GeomError;
use crate::shapes::polygon::Polygon2;
use crate::types::axis_aligned_line::AxisAlignedLine2;

/// An axis-aligned rectangle, position-independent.
///
/// Corners are stored clockwise in screen coordinates (`y` grows
/// downward): `min` (top-left), `upper_right`, `max` (bottom-right),
/// `lower_left`. Construction auto-corrects reversed min/max input and
/// rejects boxes whose area collapses within epsilon.
#[derive(Debug, Copy, Clone)]
pub struct Rect2 {
    min: Vec2,
    upper_right: Vec2,
    max: Vec2,
    lower_left: Vec2,
    center: Vec2,
    width: f32,
    height: f32,
}

impl Rect2 {
    /// Builds a rectangle from two opposite corners, swapping
    /// coordinates as needed so `min <= max` componentwise.
    ///
    /// # Errors
    /// Returns [`GeomError::DegenerateRect`] when either extent is
    /// within epsilon of zero — the box would collapse to a line or
    /// point.
    pub fn new(a: Vec2, b: Vec2) -> Result<Self, GeomError> {
        let min = Vec2::new(a.x().min(b.x()), a.y().min(b.y()));
        let max = Vec2::new(a.x().max(b.x()), a.y().max(b.y()));
        let width = max.x() - min.x();
        let height = max.y() - min.y();
        if approx_eq(width, 0.0) || approx_eq(height, 0.0) {
            return Err(GeomError::DegenerateRect { width, height });
        }
        Ok(Self {
            min,
            upper_right: Vec2::new(max.x(), min.y()),
            max,
            lower_left: Vec2::new(min.x(), max.y()),
            center: min.add(max).scale(0.5),
            width,
            height,
        })
    }

    /// Top-left corner.
    pub const fn min(&self) -> Vec2 {
        self.min
    }

    /// Bottom-right corner.
    pub const fn max(&self) -> Vec2 {
        self.max
    }

    /// Center of the box.
    pub const fn center(&self) -> Vec2 {
        self.center
    }

    /// Horizontal extent.
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Vertical extent.
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// The four corners in clockwise order:
    /// `[min, upper_right, max, lower_left]`.
    pub const fn corners(&self) -> [Vec2; 4] {
        [self.min, self.upper_right, self.max, self.lower_left]
    }

    /// Projects the rectangle placed at `pos` and rotated by `rot` about
    /// its center onto `axis` (assumed unit length).
    ///
    /// The zero-rotation sentinel skips per-corner rotation entirely.
    pub fn project_onto_axis(&self, pos: Vec2, rot: Rot2, axis: Vec2) -> AxisAlignedLine2 {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for corner in self.corners() {
            let world = if rot.is_zero() {
                corner.add(pos)
            } else {
                corner.rotate_about(self.center, rot).add(pos)
            };
            let d = world.dot(axis);
            min = min.min(d);
            max = max.max(d);
        }
        AxisAlignedLine2::new(axis, min, max)
    }

    /// Point containment for the box placed at `pos`, via pairwise 1D
    /// interval containment on each world axis.
    pub fn contains_point(&self, pos: Vec2, pt: Vec2, strict: bool) -> bool {
        AxisAlignedLine2::contains_point_intervals(
            self.min.x() + pos.x(),
            self.max.x() + pos.x(),
            pt.x(),
            strict,
        ) && AxisAlignedLine2::contains_point_intervals(
            self.min.y() + pos.y(),
            self.max.y() + pos.y(),
            pt.y(),
            strict,
        )
    }

    /// Returns `true` when `inner` placed at `pos_inner` lies entirely
    /// within `outer` placed at `pos_outer` (box-in-box, reduced to
    /// interval containment of both extreme corners).
    pub fn contains_rect(
        outer: &Self,
        inner: &Self,
        pos_outer: Vec2,
        pos_inner: Vec2,
        strict: bool,
    ) -> bool {
        outer.contains_point(pos_outer, inner.min.add(pos_inner), strict)
            && outer.contains_point(pos_outer, inner.max.add(pos_inner), strict)
    }

    /// Box-contains-polygon, approximated by the polygon's bounding box.
    /// `true` is exact; `false` may be conservative for polygons that do
    /// not fill their box.
    pub fn contains_polygon(
        &self,
        poly: &Polygon2,
        pos_rect: Vec2,
        pos_poly: Vec2,
        strict: bool,
    ) -> bool {
        Self::contains_rect(self, poly.bounding_box(), pos_rect, pos_poly, strict)
    }

    /// Epsilon equality on the two defining corners.
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.min.approx_eq(other.min) && self.max.approx_eq(other.max)
    }
}
