// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use flatland_core::math::{make_standard_normal, EPSILON};
use flatland_core::{Rot2, Vec2};
use once_cell::sync::OnceCell;
use rustc_hash::FxHashSet;

use crate::error::GeomError;
use crate::shapes::rect::Rect2;
use crate::shapes::triangle::Triangle2;
use crate::types::axis_aligned_line::AxisAlignedLine2;
use crate::types::line::Line2;

/// An immutable, position-independent convex polygon.
///
/// Convexity is assumed, not validated: SAT and GJK results for
/// non-convex input are undefined (a documented limitation, not a
/// runtime error).
///
/// Construction precomputes everything the queries need: wrapping edge
/// segments, deduplicated outward edge normals in canonical orientation
/// (so two parallel edges contribute one shared axis), an area-weighted
/// centroid, a triangle-fan partition sorted by descending area (larger
/// triangles are checked first so typical containment tests exit early),
/// the axis-aligned bounding box, and the winding order. The longest
/// vertex-to-vertex diagonal is computed lazily on first use.
#[derive(Debug, Clone)]
pub struct Polygon2 {
    vertices: Vec<Vec2>,
    lines: Vec<Line2>,
    normals: Vec<Vec2>,
    center: Vec2,
    triangles: Vec<Triangle2>,
    area: f32,
    bounding_box: Rect2,
    clockwise: bool,
    longest_axis: OnceCell<f32>,
}

impl Polygon2 {
    /// Builds a polygon from ordered vertices.
    ///
    /// # Errors
    /// Returns [`GeomError::TooFewVertices`] for fewer than three
    /// vertices, [`GeomError::DegenerateLine`] when consecutive vertices
    /// coincide, and [`GeomError::DegeneratePolygon`] when the vertices
    /// enclose no area.
    pub fn new(vertices: Vec<Vec2>) -> Result<Self, GeomError> {
        let n = vertices.len();
        if n < 3 {
            return Err(GeomError::TooFewVertices(n));
        }

        let mut lines = Vec::with_capacity(n);
        for i in 0..n {
            lines.push(Line2::new(vertices[i], vertices[(i + 1) % n])?);
        }

        // Canonicalize each edge normal and keep one representative per
        // separating line; parallel edges hash to the same bit pattern.
        let mut seen: FxHashSet<[u32; 2]> = FxHashSet::default();
        let mut normals = Vec::new();
        for line in &lines {
            let normal = make_standard_normal(line.normal());
            if seen.insert([normal.x().to_bits(), normal.y().to_bits()]) {
                normals.push(normal);
            }
        }

        // Fan partition anchored at vertex 0; collinear slivers add
        // nothing to area or containment and are skipped.
        let mut triangles = Vec::with_capacity(n - 2);
        for i in 1..n - 1 {
            if let Ok(t) = Triangle2::new([vertices[0], vertices[i], vertices[i + 1]]) {
                triangles.push(t);
            }
        }
        if triangles.is_empty() {
            return Err(GeomError::DegeneratePolygon);
        }

        let area: f32 = triangles.iter().map(Triangle2::area).sum();
        let center = triangles
            .iter()
            .fold(Vec2::ZERO, |acc, t| {
                acc.add(t.centroid().scale(t.area()))
            })
            .scale(1.0 / area);
        triangles.sort_by(|a, b| b.area().total_cmp(&a.area()));

        let mut min = vertices[0];
        let mut max = vertices[0];
        for v in &vertices[1..] {
            min = Vec2::new(min.x().min(v.x()), min.y().min(v.y()));
            max = Vec2::new(max.x().max(v.x()), max.y().max(v.y()));
        }
        let bounding_box =
            Rect2::new(min, max).map_err(|_| GeomError::DegeneratePolygon)?;

        Ok(Self {
            clockwise: Self::winding_is_clockwise(&lines),
            vertices,
            lines,
            normals,
            center,
            triangles,
            area,
            bounding_box,
            longest_axis: OnceCell::new(),
        })
    }

    /// Polygon view of an axis-aligned rectangle (corners in the rect's
    /// clockwise order).
    pub fn from_rect(rect: &Rect2) -> Result<Self, GeomError> {
        Self::new(rect.corners().to_vec())
    }

    /// Majority vote over the signed turn at each vertex; exact ties
    /// resolve to clockwise. The label only matters for orientation
    /// bookkeeping, never for the SAT/GJK arithmetic.
    fn winding_is_clockwise(lines: &[Line2]) -> bool {
        let n = lines.len();
        let mut ccw_turns = 0_usize;
        let mut cw_turns = 0_usize;
        for i in 0..n {
            let turn = lines[i].delta().cross(lines[(i + 1) % n].delta());
            if turn > EPSILON {
                ccw_turns += 1;
            } else if turn < -EPSILON {
                cw_turns += 1;
            }
        }
        cw_turns >= ccw_turns
    }

    /// Ordered vertices (local frame).
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Wrapping edges, `vertices[i] → vertices[i + 1]`.
    pub fn lines(&self) -> &[Line2] {
        &self.lines
    }

    /// Deduplicated canonical edge normals.
    pub fn normals(&self) -> &[Vec2] {
        &self.normals
    }

    /// Area-weighted centroid (local frame). Rotations pivot here.
    pub const fn center(&self) -> Vec2 {
        self.center
    }

    /// Triangle-fan partition, sorted by descending area.
    pub fn triangle_partition(&self) -> &[Triangle2] {
        &self.triangles
    }

    /// Total area.
    pub const fn area(&self) -> f32 {
        self.area
    }

    /// Local-frame axis-aligned bounding box.
    pub const fn bounding_box(&self) -> &Rect2 {
        &self.bounding_box
    }

    /// `true` when the majority of turns wind clockwise (ties included).
    pub const fn clockwise(&self) -> bool {
        self.clockwise
    }

    /// Length of the longest vertex-to-vertex diagonal, computed on
    /// first use and cached.
    pub fn longest_axis_length(&self) -> f32 {
        *self.longest_axis.get_or_init(|| {
            let mut longest: f32 = 0.0;
            for (i, a) in self.vertices.iter().enumerate() {
                for b in &self.vertices[i + 1..] {
                    longest = longest.max(b.sub(*a).length_squared());
                }
            }
            longest.sqrt()
        })
    }

    /// Projects the polygon placed at `pos` and rotated by `rot` about
    /// its centroid onto `axis` (assumed unit length).
    ///
    /// The zero-rotation sentinel skips per-vertex rotation entirely.
    pub fn project_onto_axis(&self, pos: Vec2, rot: Rot2, axis: Vec2) -> AxisAlignedLine2 {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        if rot.is_zero() {
            for v in &self.vertices {
                let d = v.add(pos).dot(axis);
                min = min.min(d);
                max = max.max(d);
            }
        } else {
            for v in &self.vertices {
                let d = v.rotate_about(self.center, rot).add(pos).dot(axis);
                min = min.min(d);
                max = max.max(d);
            }
        }
        AxisAlignedLine2::new(axis, min, max)
    }

    /// The world-space position of vertex `idx` under `pos`/`rot`.
    pub(crate) fn world_vertex(&self, idx: usize, pos: Vec2, rot: Rot2) -> Vec2 {
        if rot.is_zero() {
            self.vertices[idx].add(pos)
        } else {
            self.vertices[idx].rotate_about(self.center, rot).add(pos)
        }
    }

    /// Point containment for the polygon placed at `pos` and rotated by
    /// `rot` about its centroid.
    ///
    /// Walks the area-sorted fan and accepts on the first containing
    /// triangle; `strict` additionally rejects points lying on the
    /// polygon boundary (within epsilon).
    pub fn contains_point(&self, pos: Vec2, rot: Rot2, pt: Vec2, strict: bool) -> bool {
        // Undo the rotation on the query point instead of rotating every
        // vertex: one rotation versus n.
        let local = if rot.is_zero() {
            pt
        } else {
            pt.rotate_about(self.center.add(pos), rot.inverse())
        };
        let inside = self
            .triangles
            .iter()
            .any(|t| t.contains_point(pos, local, false));
        if !inside {
            return false;
        }
        if !strict {
            return true;
        }
        !self.lines.iter().any(|l| l.contains_point(pos, local))
    }

    /// A copy of this polygon with every vertex actualized by `rot`
    /// about the centroid.
    ///
    /// Distance queries over rotated polygons require this first; see
    /// [`GeomError::RotationNotSupported`].
    pub fn rotated(&self, rot: Rot2) -> Result<Self, GeomError> {
        if rot.is_zero() {
            return Ok(self.clone());
        }
        let rotated = self
            .vertices
            .iter()
            .map(|v| v.rotate_about(self.center, rot))
            .collect();
        Self::new(rotated)
    }

    /// Vertexwise epsilon equality (same order, same count).
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.vertices.len() == other.vertices.len()
            && self
                .vertices
                .iter()
                .zip(&other.vertices)
                .all(|(a, b)| a.approx_eq(*b))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn square() -> Polygon2 {
        Polygon2::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(0.0, 2.0),
        ])
        .unwrap()
    }

    #[test]
    fn too_few_vertices_is_an_error() {
        assert!(matches!(
            Polygon2::new(vec![Vec2::ZERO, Vec2::UNIT_X]),
            Err(GeomError::TooFewVertices(2))
        ));
    }

    #[test]
    fn collinear_polygon_is_degenerate() {
        let r = Polygon2::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(2.0, 0.0),
        ]);
        assert!(matches!(r, Err(GeomError::DegeneratePolygon)));
    }

    #[test]
    fn parallel_edges_share_one_normal() {
        let p = square();
        // Four edges, two distinct separating lines.
        assert_eq!(p.normals().len(), 2);
    }

    #[test]
    fn centroid_and_area_of_square() {
        let p = square();
        assert!(flatland_core::math::approx_eq(p.area(), 4.0));
        assert!(p.center().approx_eq(Vec2::new(1.0, 1.0)));
    }

    #[test]
    fn fan_is_sorted_by_descending_area() {
        let p = Polygon2::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(4.0, 3.0),
            Vec2::new(3.9, 3.05),
            Vec2::new(0.0, 3.0),
        ])
        .unwrap();
        let areas: Vec<f32> = p.triangle_partition().iter().map(Triangle2::area).collect();
        for pair in areas.windows(2) {
            assert!(pair[0] >= pair[1]);
        }
    }

    #[test]
    fn strict_containment_excludes_the_boundary() {
        let p = square();
        let on_edge = Vec2::new(1.0, 0.0);
        assert!(p.contains_point(Vec2::ZERO, Rot2::ZERO, on_edge, false));
        assert!(!p.contains_point(Vec2::ZERO, Rot2::ZERO, on_edge, true));
        let inside = Vec2::new(1.0, 1.0);
        assert!(p.contains_point(Vec2::ZERO, Rot2::ZERO, inside, true));
    }

    #[test]
    fn rotated_containment_follows_the_shape() {
        use std::f32::consts::FRAC_PI_4;
        let p = square();
        let rot = Rot2::new(FRAC_PI_4);
        // Under a 45° spin about (1,1) the original corner region leaves
        // the shape while the center stays.
        assert!(p.contains_point(Vec2::ZERO, rot, Vec2::new(1.0, 1.0), true));
        assert!(!p.contains_point(Vec2::ZERO, rot, Vec2::new(0.05, 0.05), false));
    }

    #[test]
    fn longest_axis_is_the_diagonal() {
        let p = square();
        assert!(flatland_core::math::approx_eq(
            p.longest_axis_length(),
            8.0f32.sqrt()
        ));
    }

    #[test]
    fn winding_votes_match_orientation() {
        let cw_screen = square(); // y-down clockwise == math CCW
        let reversed = Polygon2::new(vec![
            Vec2::new(0.0, 2.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(0.0, 0.0),
        ])
        .unwrap();
        assert_ne!(cw_screen.clockwise(), reversed.clockwise());
    }

    #[test]
    fn rect_round_trips_into_a_polygon() {
        let rect = Rect2::new(Vec2::ZERO, Vec2::new(3.0, 1.0)).unwrap();
        let p = Polygon2::from_rect(&rect).unwrap();
        assert_eq!(p.vertices().len(), 4);
        assert!(p.center().approx_eq(rect.center()));
        assert!(flatland_core::math::approx_eq(p.area(), 3.0));
    }
}
