//! Narrow-phase collision queries.
//!
//! The SAT dispatch is re-exported at this level; [`gjk`] offers the
//! alternative polygon/polygon intersection walk and [`distance`] the
//! minimum-separation queries. The [`AxisProject`]
//! trait is the seam the generic along-axis helpers compose over, so
//! callers can run custom axis tests with the same interval semantics
//! the engine uses internally.

pub mod distance;
pub mod gjk;
mod sat;

pub use sat::{
    intersect_mtv_circle_polygon, intersect_mtv_circle_rect, intersect_mtv_circles,
    intersect_mtv_polygon_circle, intersect_mtv_polygon_rect, intersect_mtv_polygons,
    intersect_mtv_rect_circle, intersect_mtv_rect_polygon, intersect_mtv_rects,
    intersects_circle_polygon, intersects_circle_rect, intersects_circles,
    intersects_polygon_circle, intersects_polygon_rect, intersects_polygons,
    intersects_rect_circle, intersects_rect_polygon, intersects_rects,
};

use flatland_core::{Rot2, Vec2};

use crate::shapes::circle::Circle2;
use crate::shapes::polygon::Polygon2;
use crate::shapes::rect::Rect2;
use crate::types::axis_aligned_line::AxisAlignedLine2;

/// Minimum translation vector: the smallest displacement of the first
/// shape that resolves an existing overlap.
///
/// Moving the first operand by `axis * magnitude` leaves the pair
/// touching but no longer strictly intersecting. `magnitude` is signed;
/// `axis` is unit length.
#[derive(Debug, Copy, Clone)]
pub struct Mtv {
    /// Unit axis the push happens along.
    pub axis: Vec2,
    /// Signed displacement along `axis`.
    pub magnitude: f32,
}

impl Mtv {
    /// The same resolution expressed as a displacement of the second
    /// shape instead of the first.
    pub fn flipped(self) -> Self {
        Self {
            axis: self.axis.neg(),
            magnitude: self.magnitude,
        }
    }
}

/// A separating witness for two disjoint shapes: the axis with the
/// largest minimal projection gap, oriented from the first shape toward
/// the second, and that gap.
#[derive(Debug, Copy, Clone)]
pub struct Separation {
    /// Unit axis pointing from the first shape toward the second.
    pub axis: Vec2,
    /// Unsigned gap between the two shapes along `axis`.
    pub distance: f32,
}

impl Separation {
    /// The same witness with the operands swapped, so the axis points
    /// from the second shape toward the first.
    pub fn flipped(self) -> Self {
        Self {
            axis: self.axis.neg(),
            distance: self.distance,
        }
    }
}

/// Axis projection, the seam every SAT query composes over.
pub trait AxisProject {
    /// Projects the shape placed at `pos` (rotated by `rot` about its
    /// centroid where the shape supports rotation) onto `axis`.
    fn project_onto_axis(&self, pos: Vec2, rot: Rot2, axis: Vec2) -> AxisAlignedLine2;
}

impl AxisProject for Circle2 {
    fn project_onto_axis(&self, pos: Vec2, _rot: Rot2, axis: Vec2) -> AxisAlignedLine2 {
        // Circles are rotation-invariant.
        Circle2::project_onto_axis(self, pos, axis)
    }
}

impl AxisProject for Rect2 {
    fn project_onto_axis(&self, pos: Vec2, rot: Rot2, axis: Vec2) -> AxisAlignedLine2 {
        Rect2::project_onto_axis(self, pos, rot, axis)
    }
}

impl AxisProject for Polygon2 {
    fn project_onto_axis(&self, pos: Vec2, rot: Rot2, axis: Vec2) -> AxisAlignedLine2 {
        Polygon2::project_onto_axis(self, pos, rot, axis)
    }
}

/// Tests two shapes for overlap along a single axis.
pub fn intersects_along_axis<A: AxisProject, B: AxisProject>(
    a: &A,
    b: &B,
    pos_a: Vec2,
    pos_b: Vec2,
    rot_a: Rot2,
    rot_b: Rot2,
    strict: bool,
    axis: Vec2,
) -> bool {
    let pa = a.project_onto_axis(pos_a, rot_a, axis);
    let pb = b.project_onto_axis(pos_b, rot_b, axis);
    AxisAlignedLine2::intersects_intervals(pa.min(), pa.max(), pb.min(), pb.max(), strict)
}

/// Signed displacement of the first shape along `axis` that resolves the
/// pair's overlap on that axis, or `None` when the projections do not
/// strictly overlap.
pub fn intersect_mtv_along_axis<A: AxisProject, B: AxisProject>(
    a: &A,
    b: &B,
    pos_a: Vec2,
    pos_b: Vec2,
    rot_a: Rot2,
    rot_b: Rot2,
    axis: Vec2,
) -> Option<f32> {
    let pa = a.project_onto_axis(pos_a, rot_a, axis);
    let pb = b.project_onto_axis(pos_b, rot_b, axis);
    AxisAlignedLine2::intersect_mtv_intervals(pa.min(), pa.max(), pb.min(), pb.max())
}
