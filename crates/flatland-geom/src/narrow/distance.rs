// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Minimum-separation queries for disjoint shape pairs.
//!
//! Where the MTV walk keeps the smallest per-axis push, a separation
//! witness keeps the largest per-axis gap: among all candidate axes the
//! one with the biggest projection gap is the tightest valid separating
//! line, and its gap is the pair's minimum distance. Polygon variants
//! add vertex-to-vertex axes to the edge-normal set, because the true
//! nearest feature pair can be vertex/vertex rather than vertex/edge.
//!
//! Every query returns `None` when the shapes overlap or touch within
//! epsilon; intersecting pairs have no separation to report.

use flatland_core::math::{clamp, EPSILON};
use flatland_core::{Rot2, Vec2};

use crate::error::GeomError;
use crate::narrow::{AxisProject, Separation};
use crate::shapes::circle::Circle2;
use crate::shapes::polygon::Polygon2;
use crate::shapes::rect::Rect2;
use crate::types::axis_aligned_line::AxisAlignedLine2;

/// Projection gap between two shapes along one axis, with the axis
/// re-oriented to point from `a` toward `b`. `None` when the
/// projections overlap non-strictly.
fn gap_along_axis<A: AxisProject, B: AxisProject>(
    a: &A,
    b: &B,
    pos_a: Vec2,
    pos_b: Vec2,
    rot_a: Rot2,
    rot_b: Rot2,
    axis: Vec2,
) -> Option<Separation> {
    let pa = a.project_onto_axis(pos_a, rot_a, axis);
    let pb = b.project_onto_axis(pos_b, rot_b, axis);
    let gap = AxisAlignedLine2::min_distance_intervals(pa.min(), pa.max(), pb.min(), pb.max())?;
    let axis = if pa.max() < pb.min() { axis } else { axis.neg() };
    Some(Separation {
        axis,
        distance: gap,
    })
}

/// Folds per-axis gaps, keeping the witness with the largest gap.
fn best_gap(current: Option<Separation>, candidate: Option<Separation>) -> Option<Separation> {
    match (current, candidate) {
        (Some(c), Some(n)) if n.distance > c.distance => Some(n),
        (None, n) => n,
        (c, _) => c,
    }
}

/// Minimum distance between two circles, as a radial witness.
pub fn min_distance_circles(
    c1: &Circle2,
    c2: &Circle2,
    pos1: Vec2,
    pos2: Vec2,
) -> Option<Separation> {
    let delta = c2.center_of(pos2).sub(c1.center_of(pos1));
    let d = delta.length();
    let gap = d - (c1.radius() + c2.radius());
    if gap <= EPSILON {
        return None;
    }
    Some(Separation {
        axis: delta.scale(1.0 / d),
        distance: gap,
    })
}

/// Minimum distance from a point to a circle's rim.
pub fn min_distance_circle_point(circle: &Circle2, pos: Vec2, pt: Vec2) -> Option<Separation> {
    let delta = pt.sub(circle.center_of(pos));
    let d = delta.length();
    let gap = d - circle.radius();
    if gap <= EPSILON {
        return None;
    }
    Some(Separation {
        axis: delta.scale(1.0 / d),
        distance: gap,
    })
}

/// Minimum distance between two axis-aligned boxes.
///
/// Disjoint on one world axis only gives a face/face gap; disjoint on
/// both gives a corner/corner gap along the diagonal.
pub fn min_distance_rects(r1: &Rect2, r2: &Rect2, pos1: Vec2, pos2: Vec2) -> Option<Separation> {
    let (min1x, max1x) = (r1.min().x() + pos1.x(), r1.max().x() + pos1.x());
    let (min1y, max1y) = (r1.min().y() + pos1.y(), r1.max().y() + pos1.y());
    let (min2x, max2x) = (r2.min().x() + pos2.x(), r2.max().x() + pos2.x());
    let (min2y, max2y) = (r2.min().y() + pos2.y(), r2.max().y() + pos2.y());
    let gx = AxisAlignedLine2::min_distance_intervals(min1x, max1x, min2x, max2x);
    let gy = AxisAlignedLine2::min_distance_intervals(min1y, max1y, min2y, max2y);
    let sign_x = if max1x < min2x { 1.0 } else { -1.0 };
    let sign_y = if max1y < min2y { 1.0 } else { -1.0 };
    match (gx, gy) {
        (Some(gx), Some(gy)) => {
            let diagonal = Vec2::new(sign_x * gx, sign_y * gy);
            Some(Separation {
                axis: diagonal.normalize(),
                distance: diagonal.length(),
            })
        }
        (Some(gx), None) => Some(Separation {
            axis: Vec2::new(sign_x, 0.0),
            distance: gx,
        }),
        (None, Some(gy)) => Some(Separation {
            axis: Vec2::new(0.0, sign_y),
            distance: gy,
        }),
        (None, None) => None,
    }
}

/// Minimum distance between a circle and an axis-aligned box, via the
/// box point nearest the circle's center.
pub fn min_distance_circle_rect(
    circle: &Circle2,
    rect: &Rect2,
    pos_circle: Vec2,
    pos_rect: Vec2,
) -> Option<Separation> {
    let center = circle.center_of(pos_circle);
    let min = rect.min().add(pos_rect);
    let max = rect.max().add(pos_rect);
    let nearest = Vec2::new(
        clamp(center.x(), min.x(), max.x()),
        clamp(center.y(), min.y(), max.y()),
    );
    let delta = nearest.sub(center);
    let d = delta.length();
    let gap = d - circle.radius();
    if gap <= EPSILON {
        return None;
    }
    Some(Separation {
        axis: delta.scale(1.0 / d),
        distance: gap,
    })
}

/// [`min_distance_circle_rect`] with the operands swapped.
pub fn min_distance_rect_circle(
    rect: &Rect2,
    circle: &Circle2,
    pos_rect: Vec2,
    pos_circle: Vec2,
) -> Option<Separation> {
    min_distance_circle_rect(circle, rect, pos_circle, pos_rect).map(Separation::flipped)
}

/// Minimum distance between two polygons.
///
/// Candidate axes are both polygons' edge normals plus every
/// vertex-to-vertex direction across the pair.
///
/// # Errors
/// Returns [`GeomError::RotationNotSupported`] for a non-zero rotation
/// on either operand; rotate the polygon with [`Polygon2::rotated`]
/// first and query with the zero sentinel.
pub fn min_distance_polygons(
    p1: &Polygon2,
    p2: &Polygon2,
    pos1: Vec2,
    pos2: Vec2,
    rot1: Rot2,
    rot2: Rot2,
) -> Result<Option<Separation>, GeomError> {
    if !rot1.is_zero() || !rot2.is_zero() {
        return Err(GeomError::RotationNotSupported);
    }
    let mut best = None;
    for &axis in p1.normals().iter().chain(p2.normals()) {
        best = best_gap(
            best,
            gap_along_axis(p1, p2, pos1, pos2, Rot2::ZERO, Rot2::ZERO, axis),
        );
    }
    for &v1 in p1.vertices() {
        for &v2 in p2.vertices() {
            let axis = v2.add(pos2).sub(v1.add(pos1)).normalize();
            if axis.length_squared() <= EPSILON * EPSILON {
                continue;
            }
            best = best_gap(
                best,
                gap_along_axis(p1, p2, pos1, pos2, Rot2::ZERO, Rot2::ZERO, axis),
            );
        }
    }
    Ok(best)
}

/// Minimum distance from a point to a polygon's boundary.
///
/// Candidate axes are the polygon's world-space edge normals plus each
/// vertex-to-point direction. The witness axis points from the polygon
/// toward the point.
pub fn min_distance_polygon_point(
    poly: &Polygon2,
    pos: Vec2,
    rot: Rot2,
    pt: Vec2,
) -> Option<Separation> {
    let mut best: Option<Separation> = None;
    let mut consider = |axis: Vec2| {
        if axis.length_squared() <= EPSILON * EPSILON {
            return;
        }
        let proj = poly.project_onto_axis(pos, rot, axis);
        let d = pt.dot(axis);
        if let Some(gap) = AxisAlignedLine2::min_distance_point_intervals(proj.min(), proj.max(), d)
        {
            let axis = if d > proj.max() { axis } else { axis.neg() };
            let witness = Separation {
                axis,
                distance: gap,
            };
            best = best_gap(best, Some(witness));
        }
    };
    for normal in poly.normals() {
        consider(normal.rotated(rot));
    }
    for i in 0..poly.vertices().len() {
        let v = poly.world_vertex(i, pos, rot);
        consider(pt.sub(v).normalize());
    }
    best
}

/// Minimum distance between a polygon and a circle, via the
/// polygon/point witness pulled in by the radius.
pub fn min_distance_polygon_circle(
    poly: &Polygon2,
    circle: &Circle2,
    pos_poly: Vec2,
    pos_circle: Vec2,
    rot_poly: Rot2,
) -> Option<Separation> {
    let center = circle.center_of(pos_circle);
    let witness = min_distance_polygon_point(poly, pos_poly, rot_poly, center)?;
    let gap = witness.distance - circle.radius();
    if gap <= EPSILON {
        return None;
    }
    Some(Separation {
        axis: witness.axis,
        distance: gap,
    })
}

/// [`min_distance_polygon_circle`] with the operands swapped.
pub fn min_distance_circle_polygon(
    circle: &Circle2,
    poly: &Polygon2,
    pos_circle: Vec2,
    pos_poly: Vec2,
    rot_poly: Rot2,
) -> Option<Separation> {
    min_distance_polygon_circle(poly, circle, pos_poly, pos_circle, rot_poly)
        .map(Separation::flipped)
}

/// Minimum distance between a polygon and an axis-aligned box.
///
/// Candidate axes are the polygon's edge normals, the two world axes,
/// and every vertex-to-corner direction across the pair.
///
/// # Errors
/// Returns [`GeomError::RotationNotSupported`] for a non-zero polygon
/// rotation; rotate with [`Polygon2::rotated`] first and query with the
/// zero sentinel.
pub fn min_distance_polygon_rect(
    poly: &Polygon2,
    rect: &Rect2,
    pos_poly: Vec2,
    pos_rect: Vec2,
    rot_poly: Rot2,
) -> Result<Option<Separation>, GeomError> {
    if !rot_poly.is_zero() {
        return Err(GeomError::RotationNotSupported);
    }
    let mut best = None;
    let world_axes = [Vec2::UNIT_X, Vec2::UNIT_Y];
    for &axis in poly.normals().iter().chain(world_axes.iter()) {
        best = best_gap(
            best,
            gap_along_axis(poly, rect, pos_poly, pos_rect, Rot2::ZERO, Rot2::ZERO, axis),
        );
    }
    for &v in poly.vertices() {
        for corner in rect.corners() {
            let axis = corner.add(pos_rect).sub(v.add(pos_poly)).normalize();
            if axis.length_squared() <= EPSILON * EPSILON {
                continue;
            }
            best = best_gap(
                best,
                gap_along_axis(poly, rect, pos_poly, pos_rect, Rot2::ZERO, Rot2::ZERO, axis),
            );
        }
    }
    Ok(best)
}

/// [`min_distance_polygon_rect`] with the operands swapped.
///
/// # Errors
/// Returns [`GeomError::RotationNotSupported`] for a non-zero polygon
/// rotation.
pub fn min_distance_rect_polygon(
    rect: &Rect2,
    poly: &Polygon2,
    pos_rect: Vec2,
    pos_poly: Vec2,
    rot_poly: Rot2,
) -> Result<Option<Separation>, GeomError> {
    Ok(min_distance_polygon_rect(poly, rect, pos_poly, pos_rect, rot_poly)?
        .map(Separation::flipped))
}
