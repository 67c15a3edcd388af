use flatland_core::math::{area_of_triangle, EPSILON};
use flatland_core::Vec2;

use crate::error::GeomError;
use crate::types::line::Line2;

/// A triangle with a precomputed inverse basis for barycentric
/// containment tests.
///
/// Used as the decomposition primitive behind polygon containment (the
/// triangle-fan partition); it is not part of the pairwise collision
/// dispatch.
#[derive(Debug, Clone)]
pub struct Triangle2 {
    vertices: [Vec2; 3],
    centroid: Vec2,
    edges: [Line2; 3],
    area: f32,
    // Row-major inverse of the 2x2 basis [v1-v0 | v2-v0].
    inv_basis: [f32; 4],
}

impl Triangle2 {
    /// Builds a triangle from three vertices.
    ///
    /// # Errors
    /// Returns [`GeomError::DegenerateTriangle`] for collinear vertices
    /// (area within epsilon of zero) and propagates
    /// [`GeomError::DegenerateLine`] when two vertices coincide.
    pub fn new(vertices: [Vec2; 3]) -> Result<Self, GeomError> {
        let [v0, v1, v2] = vertices;
        let area = area_of_triangle(v0, v1, v2);
        if area <= EPSILON {
            return Err(GeomError::DegenerateTriangle);
        }
        let b = v1.sub(v0);
        let c = v2.sub(v0);
        let det = b.x() * c.y() - c.x() * b.y();
        let inv_det = 1.0 / det;
        let inv_basis = [
            c.y() * inv_det,
            -c.x() * inv_det,
            -b.y() * inv_det,
            b.x() * inv_det,
        ];
        let edges = [
            Line2::new(v0, v1)?,
            Line2::new(v1, v2)?,
            Line2::new(v2, v0)?,
        ];
        Ok(Self {
            vertices,
            centroid: v0.add(v1).add(v2).scale(1.0 / 3.0),
            edges,
            area,
            inv_basis,
        })
    }

    /// The three vertices.
    pub const fn vertices(&self) -> [Vec2; 3] {
        self.vertices
    }

    /// Average of the three vertices.
    pub const fn centroid(&self) -> Vec2 {
        self.centroid
    }

    /// The three edges as segments, wrapping `v0→v1→v2→v0`.
    pub const fn edges(&self) -> &[Line2; 3] {
        &self.edges
    }

    /// Triangle area (always positive).
    pub const fn area(&self) -> f32 {
        self.area
    }

    /// Point containment for the triangle placed at `pos`, via the
    /// precomputed inverse basis.
    ///
    /// Non-strict containment is closed (boundary included within
    /// epsilon); strict containment is open (boundary excluded).
    pub fn contains_point(&self, pos: Vec2, pt: Vec2, strict: bool) -> bool {
        let rel = pt.sub(pos).sub(self.vertices[0]);
        let l1 = self.inv_basis[0] * rel.x() + self.inv_basis[1] * rel.y();
        let l2 = self.inv_basis[2] * rel.x() + self.inv_basis[3] * rel.y();
        if strict {
            l1 > EPSILON && l2 > EPSILON && l1 + l2 < 1.0 - EPSILON
        } else {
            l1 >= -EPSILON && l2 >= -EPSILON && l1 + l2 <= 1.0 + EPSILON
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use flatland_core::math::approx_eq;

    fn tri() -> Triangle2 {
        Triangle2::new([
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.5, 1.0),
        ])
        .unwrap()
    }

    #[test]
    fn collinear_vertices_are_rejected() {
        let r = Triangle2::new([
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(2.0, 2.0),
        ]);
        assert!(matches!(r, Err(GeomError::DegenerateTriangle)));
    }

    #[test]
    fn contains_interior_point_both_modes() {
        let t = tri();
        let p = Vec2::new(0.5, 0.5);
        assert!(t.contains_point(Vec2::ZERO, p, false));
        assert!(t.contains_point(Vec2::ZERO, p, true));
        assert!(!t.contains_point(Vec2::ZERO, Vec2::new(1.5, 1.5), false));
    }

    #[test]
    fn boundary_vertex_is_non_strict_only() {
        let t = tri();
        let v = Vec2::new(0.0, 0.0);
        assert!(t.contains_point(Vec2::ZERO, v, false));
        assert!(!t.contains_point(Vec2::ZERO, v, true));
    }

    #[test]
    fn offset_shifts_the_test() {
        let t = tri();
        let pos = Vec2::new(10.0, 10.0);
        assert!(t.contains_point(pos, Vec2::new(10.5, 10.5), false));
        assert!(!t.contains_point(pos, Vec2::new(0.5, 0.5), false));
    }

    #[test]
    fn derived_data_is_consistent() {
        let t = tri();
        assert!(approx_eq(t.area(), 0.5));
        assert!(t.centroid().approx_eq(Vec2::new(0.5, 1.0 / 3.0)));
        assert_eq!(t.edges().len(), 3);
    }
}
