// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use flatland_core::math::{approx_eq, clamp, EPSILON};
use flatland_core::Vec2;

use crate::error::GeomError;
use crate::types::axis_aligned_line::AxisAlignedLine2;

/// How two coincident segments (same infinite line) relate to each other.
///
/// Determined by projecting all four endpoints onto the shared axis,
/// sorting them with their source-segment tags, and inspecting the
/// pattern: if the middle two projections coincide the segments share
/// exactly one point; if the first two sorted values come from the same
/// segment, one segment ends before the other begins.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LineInterType {
    /// The projected intervals form two separate blocks with no shared
    /// point.
    None,
    /// The segments touch at exactly one projected value (within
    /// epsilon).
    Point,
    /// The segments overlap along a sub-segment of positive length.
    Line,
}

/// A finite, position-independent line segment.
///
/// Placement is supplied per query as a world offset, so one segment
/// value serves any number of placements. All derived fields are
/// computed once at construction and never mutated.
#[derive(Debug, Copy, Clone)]
pub struct Line2 {
    start: Vec2,
    end: Vec2,
    delta: Vec2,
    axis: Vec2,
    normal: Vec2,
    magnitude_squared: f32,
    magnitude: f32,
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
    slope: f32,
    y_intercept: f32,
    horizontal: bool,
    vertical: bool,
}

impl Line2 {
    /// Builds a segment from `start` to `end`.
    ///
    /// # Errors
    /// Returns [`GeomError::DegenerateLine`] when the endpoints coincide
    /// within epsilon — a segment may not degenerate to a point.
    pub fn new(start: Vec2, end: Vec2) -> Result<Self, GeomError> {
        if start.approx_eq(end) {
            return Err(GeomError::DegenerateLine { start, end });
        }
        let delta = end.sub(start);
        let magnitude_squared = delta.length_squared();
        let magnitude = magnitude_squared.sqrt();
        let axis = delta.scale(1.0 / magnitude);
        // Raw f32 division: vertical lines get an infinite slope and a
        // NaN/infinite intercept, mirrored by the `vertical` flag.
        let slope = delta.y() / delta.x();
        let y_intercept = start.y() - slope * start.x();
        Ok(Self {
            start,
            end,
            delta,
            axis,
            normal: axis.perpendicular(),
            magnitude_squared,
            magnitude,
            min_x: start.x().min(end.x()),
            min_y: start.y().min(end.y()),
            max_x: start.x().max(end.x()),
            max_y: start.y().max(end.y()),
            slope,
            y_intercept,
            horizontal: approx_eq(delta.y(), 0.0),
            vertical: approx_eq(delta.x(), 0.0),
        })
    }

    /// Segment start (local frame).
    pub const fn start(&self) -> Vec2 {
        self.start
    }

    /// Segment end (local frame).
    pub const fn end(&self) -> Vec2 {
        self.end
    }

    /// `end - start`.
    pub const fn delta(&self) -> Vec2 {
        self.delta
    }

    /// Unit vector along the segment.
    pub const fn axis(&self) -> Vec2 {
        self.axis
    }

    /// Unit vector perpendicular to the segment (90° CCW of the axis).
    pub const fn normal(&self) -> Vec2 {
        self.normal
    }

    /// Segment length.
    pub const fn magnitude(&self) -> f32 {
        self.magnitude
    }

    /// Squared segment length.
    pub const fn magnitude_squared(&self) -> f32 {
        self.magnitude_squared
    }

    /// Local-frame bounding interval on X: `(min_x, max_x)`.
    pub const fn bounds_x(&self) -> (f32, f32) {
        (self.min_x, self.max_x)
    }

    /// Local-frame bounding interval on Y: `(min_y, max_y)`.
    pub const fn bounds_y(&self) -> (f32, f32) {
        (self.min_y, self.max_y)
    }

    /// Slope `dy/dx`; infinite for vertical segments.
    pub const fn slope(&self) -> f32 {
        self.slope
    }

    /// Y intercept of the infinite extension; NaN or infinite for
    /// vertical segments.
    pub const fn y_intercept(&self) -> f32 {
        self.y_intercept
    }

    /// `true` when the Y extent is within epsilon of zero.
    pub const fn horizontal(&self) -> bool {
        self.horizontal
    }

    /// `true` when the X extent is within epsilon of zero.
    pub const fn vertical(&self) -> bool {
        self.vertical
    }

    /// Endpointwise epsilon equality.
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.start.approx_eq(other.start) && self.end.approx_eq(other.end)
    }

    /// Returns `true` when the two segments' axes are equal up to sign.
    ///
    /// Invariant under shifting either segment, so no offsets are taken.
    pub fn parallel(a: &Self, b: &Self) -> bool {
        a.axis.approx_eq(b.axis) || a.axis.approx_eq(b.axis.neg())
    }

    /// Returns `true` if `pt` lies on the infinite extension of this
    /// segment placed at `pos` (normal-component check only).
    pub fn along_infinite_line(&self, pos: Vec2, pt: Vec2) -> bool {
        let rel = pt.sub(self.start.add(pos));
        approx_eq(self.normal.dot(rel), 0.0)
    }

    /// Returns `true` if `pt` lies on this segment placed at `pos`.
    pub fn contains_point(&self, pos: Vec2, pt: Vec2) -> bool {
        if self.vertical {
            return approx_eq(pt.x(), self.start.x() + pos.x())
                && AxisAlignedLine2::contains_point_intervals(
                    self.min_y + pos.y(),
                    self.max_y + pos.y(),
                    pt.y(),
                    false,
                );
        }
        if self.horizontal {
            return approx_eq(pt.y(), self.start.y() + pos.y())
                && AxisAlignedLine2::contains_point_intervals(
                    self.min_x + pos.x(),
                    self.max_x + pos.x(),
                    pt.x(),
                    false,
                );
        }
        if !self.along_infinite_line(pos, pt) {
            return false;
        }
        let t = self.axis.dot(pt.sub(self.start.add(pos)));
        AxisAlignedLine2::contains_point_intervals(0.0, self.magnitude, t, false)
    }

    /// Segment/segment intersection test.
    ///
    /// Non-parallel pairs go through the determinant solve; parallel
    /// pairs must be coincident and are then classified by
    /// [`Line2::coincident_intersection_type`] — a shared endpoint only
    /// counts when `strict` is `false`.
    pub fn intersects(l1: &Self, l2: &Self, pos1: Vec2, pos2: Vec2, strict: bool) -> bool {
        if Self::parallel(l1, l2) {
            if !l1.along_infinite_line(pos1, l2.start.add(pos2)) {
                return false;
            }
            return match Self::coincident_intersection_type(l1, l2, pos1, pos2) {
                LineInterType::None => false,
                LineInterType::Point => !strict,
                LineInterType::Line => true,
            };
        }
        Self::has_intersection(l1, l2, pos1, pos2, strict)
    }

    /// Intersection point of two non-parallel segments, or `None` when
    /// the segments (including parallel/coincident pairs) do not cross
    /// under the given strictness.
    pub fn intersection_point(
        l1: &Self,
        l2: &Self,
        pos1: Vec2,
        pos2: Vec2,
        strict: bool,
    ) -> Option<Vec2> {
        if Self::parallel(l1, l2) {
            return None;
        }
        let (t, u) = Self::solve_params(l1, l2, pos1, pos2);
        if Self::param_in_bounds(t, l1.magnitude, strict)
            && Self::param_in_bounds(u, l2.magnitude, strict)
        {
            Some(l1.start.add(pos1).add(l1.delta.scale(t)))
        } else {
            None
        }
    }

    /// Classifies how two coincident segments overlap.
    ///
    /// Callers must have established that the segments are parallel and
    /// share an infinite line; the result is then derived purely from the
    /// sorted, source-tagged axis projections of the four endpoints.
    pub fn coincident_intersection_type(
        a: &Self,
        b: &Self,
        pos1: Vec2,
        pos2: Vec2,
    ) -> LineInterType {
        let entries = Self::tagged_projections(a, b, pos1, pos2);
        if approx_eq(entries[1].0, entries[2].0) {
            return LineInterType::Point;
        }
        if entries[0].1 == entries[1].1 {
            return LineInterType::None;
        }
        LineInterType::Line
    }

    /// Interior overlap of two coincident segments as a new world-frame
    /// segment, or `None` when they are disjoint, merely share an
    /// endpoint, or are not coincident at all.
    pub fn line_overlap(a: &Self, b: &Self, pos1: Vec2, pos2: Vec2) -> Option<Line2> {
        if !Self::parallel(a, b) || !a.along_infinite_line(pos1, b.start.add(pos2)) {
            return None;
        }
        let entries = Self::tagged_projections(a, b, pos1, pos2);
        if approx_eq(entries[1].0, entries[2].0) || entries[0].1 == entries[1].1 {
            return None;
        }
        // The middle two projections differ by more than epsilon, so the
        // constructor cannot fail on a degenerate span.
        Line2::new(entries[1].2, entries[2].2).ok()
    }

    /// Euclidean distance from `pt` to the nearest point on this segment
    /// placed at `pos` (the segment, not its infinite extension).
    pub fn distance(&self, pos: Vec2, pt: Vec2) -> f32 {
        let rel = pt.sub(self.start.add(pos));
        let t = clamp(self.axis.dot(rel), 0.0, self.magnitude);
        let nearest = self.start.add(pos).add(self.axis.scale(t));
        pt.sub(nearest).length()
    }

    /// Solves the 2×2 system for the intersection of the infinite lines,
    /// returning the parameters `(t, u)` with `t` on `l1` and `u` on
    /// `l2`, both in `[0, 1]` when the crossing lies within the
    /// segments. Caller must rule out parallel lines first.
    fn solve_params(l1: &Self, l2: &Self, pos1: Vec2, pos2: Vec2) -> (f32, f32) {
        let p = l1.start.add(pos1);
        let q = l2.start.add(pos2);
        let r = l1.delta;
        let s = l2.delta;
        let rxs = r.cross(s);
        let qp = q.sub(p);
        (qp.cross(s) / rxs, qp.cross(r) / rxs)
    }

    /// Bounds check for a segment parameter, widened by epsilon when
    /// `strict` is `false` and narrowed when `true`.
    fn param_in_bounds(t: f32, magnitude: f32, strict: bool) -> bool {
        let world = t * magnitude;
        if strict {
            world > EPSILON && world < magnitude - EPSILON
        } else {
            world >= -EPSILON && world <= magnitude + EPSILON
        }
    }

    fn has_intersection(l1: &Self, l2: &Self, pos1: Vec2, pos2: Vec2, strict: bool) -> bool {
        let (t, u) = Self::solve_params(l1, l2, pos1, pos2);
        Self::param_in_bounds(t, l1.magnitude, strict)
            && Self::param_in_bounds(u, l2.magnitude, strict)
    }

    /// Projects all four endpoints onto `a`'s axis, tagging each with its
    /// source segment (`false` for `a`, `true` for `b`) and keeping the
    /// world-frame point, then sorts ascending by projection.
    fn tagged_projections(a: &Self, b: &Self, pos1: Vec2, pos2: Vec2) -> [(f32, bool, Vec2); 4] {
        let axis = a.axis;
        let pts = [
            (false, a.start.add(pos1)),
            (false, a.end.add(pos1)),
            (true, b.start.add(pos2)),
            (true, b.end.add(pos2)),
        ];
        let mut entries = [(0.0, false, Vec2::ZERO); 4];
        for (slot, (tag, p)) in entries.iter_mut().zip(pts) {
            *slot = (axis.dot(p), tag, p);
        }
        entries.sort_by(|x, y| x.0.total_cmp(&y.0));
        entries
    }
}
