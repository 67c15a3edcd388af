// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Separating Axis Theorem dispatch across shape pairs.
//!
//! Every pair follows the same plan: build the candidate axis set for
//! the pair, project both shapes onto each axis, and fold the per-axis
//! interval results. `intersects_*` returns `false` the moment any axis
//! separates the projections. `intersect_mtv_*` must finish the whole
//! set — the true MTV axis is the one with the smallest per-axis push,
//! which need not be the first overlapping axis — and returns `None`
//! only when a genuine separating axis exists.

use flatland_core::math::{approx_eq, make_standard_normal, EPSILON};
use flatland_core::{Rot2, Vec2};
use rustc_hash::FxHashSet;

use crate::narrow::{intersect_mtv_along_axis, intersects_along_axis, AxisProject, Mtv};
use crate::shapes::circle::Circle2;
use crate::shapes::polygon::Polygon2;
use crate::shapes::rect::Rect2;
use crate::types::axis_aligned_line::AxisAlignedLine2;

/// Candidate axes for one query, deduplicated across both shapes so a
/// shared separating line is projected once. Axes are canonicalized via
/// `make_standard_normal` and keyed on exact bit patterns.
struct AxisSet {
    seen: FxHashSet<[u32; 2]>,
    axes: Vec<Vec2>,
}

impl AxisSet {
    fn new() -> Self {
        Self {
            seen: FxHashSet::default(),
            axes: Vec::new(),
        }
    }

    /// Inserts the canonical form of `axis`; returns it when it was not
    /// already present. Zero-length candidates are discarded.
    fn push(&mut self, axis: Vec2) -> Option<Vec2> {
        if axis.length_squared() <= EPSILON * EPSILON {
            return None;
        }
        let canonical = make_standard_normal(axis);
        self.seen
            .insert([canonical.x().to_bits(), canonical.y().to_bits()])
            .then_some(canonical)
    }

    fn collect(&mut self, axis: Vec2) {
        if let Some(canonical) = self.push(axis) {
            self.axes.push(canonical);
        }
    }
}

fn polygon_axes(poly: &Polygon2, rot: Rot2, set: &mut AxisSet) {
    for normal in poly.normals() {
        set.collect(normal.rotated(rot));
    }
}

/// Full-set MTV walk: every axis must overlap strictly, and the axis
/// with the smallest-magnitude push wins.
fn walk_mtv<A: AxisProject, B: AxisProject>(
    a: &A,
    b: &B,
    pos_a: Vec2,
    pos_b: Vec2,
    rot_a: Rot2,
    rot_b: Rot2,
    axes: &[Vec2],
) -> Option<Mtv> {
    let mut best: Option<Mtv> = None;
    for &axis in axes {
        let magnitude = intersect_mtv_along_axis(a, b, pos_a, pos_b, rot_a, rot_b, axis)?;
        let smaller = best
            .as_ref()
            .is_none_or(|m| magnitude.abs() < m.magnitude.abs());
        if smaller {
            best = Some(Mtv { axis, magnitude });
        }
    }
    best
}

// ── Polygon / Polygon ───────────────────────────────────────────────

/// SAT intersection test over the union of both polygons' world-space
/// edge normals.
pub fn intersects_polygons(
    p1: &Polygon2,
    p2: &Polygon2,
    pos1: Vec2,
    pos2: Vec2,
    rot1: Rot2,
    rot2: Rot2,
    strict: bool,
) -> bool {
    let mut set = AxisSet::new();
    polygon_axes(p1, rot1, &mut set);
    polygon_axes(p2, rot2, &mut set);
    set.axes
        .iter()
        .all(|&axis| intersects_along_axis(p1, p2, pos1, pos2, rot1, rot2, strict, axis))
}

/// Minimum translation vector for two overlapping polygons, as a
/// displacement of `p1`.
pub fn intersect_mtv_polygons(
    p1: &Polygon2,
    p2: &Polygon2,
    pos1: Vec2,
    pos2: Vec2,
    rot1: Rot2,
    rot2: Rot2,
) -> Option<Mtv> {
    let mut set = AxisSet::new();
    polygon_axes(p1, rot1, &mut set);
    polygon_axes(p2, rot2, &mut set);
    walk_mtv(p1, p2, pos1, pos2, rot1, rot2, &set.axes)
}

// ── Polygon / Rect ──────────────────────────────────────────────────

fn polygon_rect_axes(poly: &Polygon2, rot: Rot2) -> AxisSet {
    let mut set = AxisSet::new();
    polygon_axes(poly, rot, &mut set);
    // A rectangle's own normals collapse onto the world axes; add them
    // only when the polygon contributed no horizontal/vertical axis.
    if !set.axes.iter().any(|a| approx_eq(a.y(), 0.0)) {
        set.collect(Vec2::UNIT_X);
    }
    if !set.axes.iter().any(|a| approx_eq(a.x(), 0.0)) {
        set.collect(Vec2::UNIT_Y);
    }
    set
}

/// SAT intersection test for a polygon against an axis-aligned box.
///
/// A rotated box is not representable here; view it as a polygon via
/// [`Polygon2::from_rect`] instead.
pub fn intersects_polygon_rect(
    poly: &Polygon2,
    rect: &Rect2,
    pos_poly: Vec2,
    pos_rect: Vec2,
    rot_poly: Rot2,
    strict: bool,
) -> bool {
    let set = polygon_rect_axes(poly, rot_poly);
    set.axes.iter().all(|&axis| {
        intersects_along_axis(
            poly, rect, pos_poly, pos_rect, rot_poly, Rot2::ZERO, strict, axis,
        )
    })
}

/// MTV for polygon/rect, as a displacement of the polygon.
pub fn intersect_mtv_polygon_rect(
    poly: &Polygon2,
    rect: &Rect2,
    pos_poly: Vec2,
    pos_rect: Vec2,
    rot_poly: Rot2,
) -> Option<Mtv> {
    let set = polygon_rect_axes(poly, rot_poly);
    walk_mtv(
        poly,
        rect,
        pos_poly,
        pos_rect,
        rot_poly,
        Rot2::ZERO,
        &set.axes,
    )
}

/// Operand-swapped [`intersects_polygon_rect`].
pub fn intersects_rect_polygon(
    rect: &Rect2,
    poly: &Polygon2,
    pos_rect: Vec2,
    pos_poly: Vec2,
    rot_poly: Rot2,
    strict: bool,
) -> bool {
    intersects_polygon_rect(poly, rect, pos_poly, pos_rect, rot_poly, strict)
}

/// Operand-swapped [`intersect_mtv_polygon_rect`]: the push applies to
/// the rectangle, so the axis is negated.
pub fn intersect_mtv_rect_polygon(
    rect: &Rect2,
    poly: &Polygon2,
    pos_rect: Vec2,
    pos_poly: Vec2,
    rot_poly: Rot2,
) -> Option<Mtv> {
    intersect_mtv_polygon_rect(poly, rect, pos_poly, pos_rect, rot_poly).map(|m| m.flipped())
}

// ── Circle / Polygon ────────────────────────────────────────────────

fn circle_polygon_axes(
    circle: &Circle2,
    poly: &Polygon2,
    pos_circle: Vec2,
    pos_poly: Vec2,
    rot_poly: Rot2,
) -> AxisSet {
    let center = circle.center_of(pos_circle);
    let n = poly.vertices().len();
    let mut set = AxisSet::new();
    for i in 0..n {
        // Axis (a): circle center toward this vertex.
        let vertex = poly.world_vertex(i, pos_poly, rot_poly);
        set.collect(vertex.sub(center).normalize());
        // Axis (b): normal of the edge ending at this vertex.
        set.collect(poly.lines()[(i + n - 1) % n].normal().rotated(rot_poly));
    }
    set
}

/// SAT intersection test for a circle against a polygon, using the
/// vertex and incident-edge axes of the polygon.
pub fn intersects_circle_polygon(
    circle: &Circle2,
    poly: &Polygon2,
    pos_circle: Vec2,
    pos_poly: Vec2,
    rot_poly: Rot2,
    strict: bool,
) -> bool {
    let set = circle_polygon_axes(circle, poly, pos_circle, pos_poly, rot_poly);
    set.axes.iter().all(|&axis| {
        intersects_along_axis(
            circle, poly, pos_circle, pos_poly, Rot2::ZERO, rot_poly, strict, axis,
        )
    })
}

/// MTV for circle/polygon, as a displacement of the circle.
pub fn intersect_mtv_circle_polygon(
    circle: &Circle2,
    poly: &Polygon2,
    pos_circle: Vec2,
    pos_poly: Vec2,
    rot_poly: Rot2,
) -> Option<Mtv> {
    let set = circle_polygon_axes(circle, poly, pos_circle, pos_poly, rot_poly);
    walk_mtv(
        circle,
        poly,
        pos_circle,
        pos_poly,
        Rot2::ZERO,
        rot_poly,
        &set.axes,
    )
}

/// Operand-swapped [`intersects_circle_polygon`].
pub fn intersects_polygon_circle(
    poly: &Polygon2,
    circle: &Circle2,
    pos_poly: Vec2,
    pos_circle: Vec2,
    rot_poly: Rot2,
    strict: bool,
) -> bool {
    intersects_circle_polygon(circle, poly, pos_circle, pos_poly, rot_poly, strict)
}

/// Operand-swapped [`intersect_mtv_circle_polygon`]: the push applies
/// to the polygon, so the axis is negated.
pub fn intersect_mtv_polygon_circle(
    poly: &Polygon2,
    circle: &Circle2,
    pos_poly: Vec2,
    pos_circle: Vec2,
    rot_poly: Rot2,
) -> Option<Mtv> {
    intersect_mtv_circle_polygon(circle, poly, pos_circle, pos_poly, rot_poly).map(|m| m.flipped())
}

// ── Circle / Rect ───────────────────────────────────────────────────

fn circle_rect_axes(circle: &Circle2, rect: &Rect2, pos_circle: Vec2, pos_rect: Vec2) -> AxisSet {
    let center = circle.center_of(pos_circle);
    // Normal of the edge ending at each clockwise corner.
    let edge_normals = [Vec2::UNIT_X, Vec2::UNIT_Y, Vec2::UNIT_X, Vec2::UNIT_Y];
    let mut set = AxisSet::new();
    for (corner, normal) in rect.corners().into_iter().zip(edge_normals) {
        set.collect(corner.add(pos_rect).sub(center).normalize());
        set.collect(normal);
    }
    set
}

/// SAT intersection test for a circle against an axis-aligned box,
/// using the box corners as the vertex set.
pub fn intersects_circle_rect(
    circle: &Circle2,
    rect: &Rect2,
    pos_circle: Vec2,
    pos_rect: Vec2,
    strict: bool,
) -> bool {
    let set = circle_rect_axes(circle, rect, pos_circle, pos_rect);
    set.axes.iter().all(|&axis| {
        intersects_along_axis(
            circle,
            rect,
            pos_circle,
            pos_rect,
            Rot2::ZERO,
            Rot2::ZERO,
            strict,
            axis,
        )
    })
}

/// MTV for circle/rect, as a displacement of the circle.
pub fn intersect_mtv_circle_rect(
    circle: &Circle2,
    rect: &Rect2,
    pos_circle: Vec2,
    pos_rect: Vec2,
) -> Option<Mtv> {
    let set = circle_rect_axes(circle, rect, pos_circle, pos_rect);
    walk_mtv(
        circle,
        rect,
        pos_circle,
        pos_rect,
        Rot2::ZERO,
        Rot2::ZERO,
        &set.axes,
    )
}

/// Operand-swapped [`intersects_circle_rect`].
pub fn intersects_rect_circle(
    rect: &Rect2,
    circle: &Circle2,
    pos_rect: Vec2,
    pos_circle: Vec2,
    strict: bool,
) -> bool {
    intersects_circle_rect(circle, rect, pos_circle, pos_rect, strict)
}

/// Operand-swapped [`intersect_mtv_circle_rect`]: the push applies to
/// the rectangle, so the axis is negated.
pub fn intersect_mtv_rect_circle(
    rect: &Rect2,
    circle: &Circle2,
    pos_rect: Vec2,
    pos_circle: Vec2,
) -> Option<Mtv> {
    intersect_mtv_circle_rect(circle, rect, pos_circle, pos_rect).map(|m| m.flipped())
}

// ── Circle / Circle ─────────────────────────────────────────────────

/// Circle pair intersection: a single axis between the centers.
pub fn intersects_circles(
    c1: &Circle2,
    c2: &Circle2,
    pos1: Vec2,
    pos2: Vec2,
    strict: bool,
) -> bool {
    let d2 = c2.center_of(pos2).sub(c1.center_of(pos1)).length_squared();
    let sum = c1.radius() + c2.radius();
    if strict {
        let inner = (sum - EPSILON).max(0.0);
        d2 < inner * inner
    } else {
        let outer = sum + EPSILON;
        d2 <= outer * outer
    }
}

/// MTV for two overlapping circles: push `c1` directly away from `c2`
/// by the radial penetration depth.
pub fn intersect_mtv_circles(c1: &Circle2, c2: &Circle2, pos1: Vec2, pos2: Vec2) -> Option<Mtv> {
    let delta = c2.center_of(pos2).sub(c1.center_of(pos1));
    let distance = delta.length();
    let sum = c1.radius() + c2.radius();
    if distance + EPSILON >= sum {
        return None;
    }
    // Coincident centers leave the direction unconstrained; any unit
    // axis resolves the overlap.
    let axis = if distance <= EPSILON {
        Vec2::UNIT_X
    } else {
        delta.scale(1.0 / distance)
    };
    Some(Mtv {
        axis: axis.neg(),
        magnitude: sum - distance,
    })
}

// ── Rect / Rect ─────────────────────────────────────────────────────

/// Axis-aligned fast path: two boxes overlap iff both world-axis
/// interval pairs overlap. No axis enumeration needed.
pub fn intersects_rects(r1: &Rect2, r2: &Rect2, pos1: Vec2, pos2: Vec2, strict: bool) -> bool {
    AxisAlignedLine2::intersects_intervals(
        r1.min().x() + pos1.x(),
        r1.max().x() + pos1.x(),
        r2.min().x() + pos2.x(),
        r2.max().x() + pos2.x(),
        strict,
    ) && AxisAlignedLine2::intersects_intervals(
        r1.min().y() + pos1.y(),
        r1.max().y() + pos1.y(),
        r2.min().y() + pos2.y(),
        r2.max().y() + pos2.y(),
        strict,
    )
}

/// MTV for two overlapping boxes: the smaller of the two world-axis
/// pushes, as a displacement of `r1`.
pub fn intersect_mtv_rects(r1: &Rect2, r2: &Rect2, pos1: Vec2, pos2: Vec2) -> Option<Mtv> {
    let mx = AxisAlignedLine2::intersect_mtv_intervals(
        r1.min().x() + pos1.x(),
        r1.max().x() + pos1.x(),
        r2.min().x() + pos2.x(),
        r2.max().x() + pos2.x(),
    )?;
    let my = AxisAlignedLine2::intersect_mtv_intervals(
        r1.min().y() + pos1.y(),
        r1.max().y() + pos1.y(),
        r2.min().y() + pos2.y(),
        r2.max().y() + pos2.y(),
    )?;
    if mx.abs() <= my.abs() {
        Some(Mtv {
            axis: Vec2::UNIT_X,
            magnitude: mx,
        })
    } else {
        Some(Mtv {
            axis: Vec2::UNIT_Y,
            magnitude: my,
        })
    }
}
