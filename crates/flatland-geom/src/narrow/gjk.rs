//! GJK intersection walk over the Minkowski difference of two polygons.
//!
//! An alternative to the SAT dispatch for polygon pairs: rather than
//! enumerating candidate axes, the walk grows a simplex inside the
//! Minkowski difference `A ⊖ B` and asks whether it can enclose the
//! origin. Termination does not rely on exact arithmetic; when the walk
//! stalls on the boundary, touching contact is reported as intersecting
//! only in the non-strict mode.

use flatland_core::math::{triple_cross, EPSILON};
use flatland_core::{Rot2, Vec2};

use crate::shapes::polygon::Polygon2;

/// Hard cap on simplex iterations. Convex polygon pairs converge in a
/// handful of steps; hitting the cap means the origin sits on the
/// difference boundary within float noise.
const MAX_ITERATIONS: usize = 64;

/// Furthest world-space vertex of `poly` along `dir`.
fn furthest_vertex(poly: &Polygon2, pos: Vec2, rot: Rot2, dir: Vec2) -> Vec2 {
    let mut best = poly.world_vertex(0, pos, rot);
    let mut best_dot = best.dot(dir);
    for i in 1..poly.vertices().len() {
        let v = poly.world_vertex(i, pos, rot);
        let d = v.dot(dir);
        if d > best_dot {
            best = v;
            best_dot = d;
        }
    }
    best
}

/// Support point of the Minkowski difference `p1 ⊖ p2` along `dir`.
fn support(
    p1: &Polygon2,
    p2: &Polygon2,
    pos1: Vec2,
    pos2: Vec2,
    rot1: Rot2,
    rot2: Rot2,
    dir: Vec2,
) -> Vec2 {
    furthest_vertex(p1, pos1, rot1, dir).sub(furthest_vertex(p2, pos2, rot2, dir.neg()))
}

/// GJK intersection test for two convex polygons.
///
/// Produces the same answer as the SAT dispatch for convex input:
/// `strict` demands genuine interpenetration, non-strict also accepts
/// touching contact within epsilon.
pub fn intersects_gjk(
    p1: &Polygon2,
    p2: &Polygon2,
    pos1: Vec2,
    pos2: Vec2,
    rot1: Rot2,
    rot2: Rot2,
    strict: bool,
) -> bool {
    // Seed toward the other polygon's center; any direction works, this
    // one converges fastest.
    let mut dir = p2.center().add(pos2).sub(p1.center().add(pos1));
    if dir.length_squared() <= EPSILON * EPSILON {
        dir = Vec2::UNIT_X;
    }

    let mut simplex = [Vec2::ZERO; 3];
    simplex[0] = support(p1, p2, pos1, pos2, rot1, rot2, dir);
    let mut len = 1;
    dir = simplex[0].neg();

    for _ in 0..MAX_ITERATIONS {
        if dir.length_squared() <= EPSILON * EPSILON {
            // The origin coincides with a support point, which is always
            // on the difference boundary: touching contact.
            return !strict;
        }
        let point = support(p1, p2, pos1, pos2, rot1, rot2, dir);
        let reach = point.dot(dir);
        if reach < -EPSILON * dir.length() {
            // The difference never crosses the supporting line: a
            // separating axis exists.
            return false;
        }
        simplex[len] = point;
        len += 1;
        match do_simplex(&mut simplex, &mut len, &mut dir) {
            Step::Enclosed => return true,
            Step::Chord { p, q } => {
                return chord_case(p1, p2, pos1, pos2, rot1, rot2, p, q, strict);
            }
            Step::Continue => {}
        }
    }
    // No convergence within the cap: the origin is on the boundary.
    !strict
}

enum Step {
    Enclosed,
    /// The origin sits within epsilon of the segment `p`-`q`. The segment
    /// may be an edge of the difference (touching contact) or a chord
    /// through its interior, and the simplex alone cannot tell which.
    Chord { p: Vec2, q: Vec2 },
    Continue,
}

/// Refines the simplex toward the origin, shrinking it to the feature
/// closest to the origin and pointing `dir` at the origin from there.
fn do_simplex(simplex: &mut [Vec2; 3], len: &mut usize, dir: &mut Vec2) -> Step {
    if *len == 2 {
        line_case(simplex, len, dir)
    } else {
        triangle_case(simplex, len, dir)
    }
}

fn line_case(simplex: &mut [Vec2; 3], len: &mut usize, dir: &mut Vec2) -> Step {
    let a = simplex[1];
    let b = simplex[0];
    let ab = b.sub(a);
    let ao = a.neg();
    let perp = triple_cross(ab, ao);
    if perp.length_squared() > EPSILON * EPSILON {
        *dir = perp;
        return Step::Continue;
    }
    // The origin is collinear with the segment, so the perpendicular
    // choice is ambiguous. Beyond either endpoint the closest feature is
    // that endpoint: shrink to it and keep walking. Between them the
    // segment is a chord through the origin and the verdict needs the
    // full difference, not just the simplex.
    let t = ao.dot(ab);
    if t < -EPSILON {
        simplex[0] = a;
        *len = 1;
        *dir = ao;
        return Step::Continue;
    }
    if t > ab.length_squared() + EPSILON {
        *len = 1;
        *dir = b.neg();
        return Step::Continue;
    }
    Step::Chord { p: b, q: a }
}

fn triangle_case(simplex: &mut [Vec2; 3], len: &mut usize, dir: &mut Vec2) -> Step {
    let a = simplex[2];
    let b = simplex[1];
    let c = simplex[0];
    let ab = b.sub(a);
    let ac = c.sub(a);
    let ao = a.neg();

    // Outward normals of the two edges incident to the newest point.
    // `triple_cross(ab, ac)` is the ac-ward perpendicular of ab, so its
    // negation faces out of the triangle.
    let ab_perp = triple_cross(ab, ac).neg();
    let ac_perp = triple_cross(ac, ab).neg();

    if ab_perp.dot(ao) > 0.0 {
        // Origin is beyond edge ab: drop c and walk on.
        simplex[0] = b;
        simplex[1] = a;
        *len = 2;
        *dir = ab_perp;
        return Step::Continue;
    }
    if ac_perp.dot(ao) > 0.0 {
        // Origin is beyond edge ac: drop b.
        simplex[1] = a;
        *len = 2;
        *dir = ac_perp;
        return Step::Continue;
    }
    // The origin is inside the triangle. Enclosed only when it clears
    // every edge line by more than epsilon; otherwise the nearest edge
    // is a chord suspect.
    let mut suspect = None;
    let mut lowest = EPSILON;
    for (p, q) in [(a, b), (a, c), (b, c)] {
        let clearance = edge_clearance(p, q);
        if clearance <= lowest {
            lowest = clearance;
            suspect = Some((p, q));
        }
    }
    match suspect {
        Some((p, q)) => Step::Chord { p, q },
        None => Step::Enclosed,
    }
}

/// Resolves an apparent containment whose witness is a chord through the
/// origin by probing the difference on both sides of the chord line.
///
/// Two shapes sharing a symmetry axis (identical placements being the
/// extreme case) put the origin on a chord between two opposing support
/// points even though it lies deep inside the difference. Only when the
/// difference fails to extend past the chord line on either side is the
/// chord an actual boundary edge and the contact a touch.
fn chord_case(
    p1: &Polygon2,
    p2: &Polygon2,
    pos1: Vec2,
    pos2: Vec2,
    rot1: Rot2,
    rot2: Rot2,
    p: Vec2,
    q: Vec2,
    strict: bool,
) -> bool {
    // Simplex points are support points; the origin sitting on one means
    // it sits on the difference boundary.
    if p.length() <= EPSILON || q.length() <= EPSILON {
        return !strict;
    }
    let e = q.sub(p);
    if e.length_squared() <= EPSILON * EPSILON {
        return !strict;
    }
    let n = e.normalize().perpendicular();
    let above = support(p1, p2, pos1, pos2, rot1, rot2, n).dot(n);
    let below = support(p1, p2, pos1, pos2, rot1, rot2, n.neg()).dot(n);
    // The chord line passes within epsilon of the origin, so the origin
    // is interior exactly when the difference spans the line.
    if above > EPSILON && below < -EPSILON {
        true
    } else {
        !strict
    }
}

/// Distance from the origin to the infinite line through `p` and `q`.
fn edge_clearance(p: Vec2, q: Vec2) -> f32 {
    let e = q.sub(p);
    e.cross(p.neg()).abs() / e.length().max(EPSILON)
}
