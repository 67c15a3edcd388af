//! Deterministic 2D math helpers covering scalar comparisons, vectors,
//! rotations, and the handful of free functions the collision engine is
//! built on.
//!
//! All operations round to `f32` to mirror the runtime's float32 mode.

/// Planar rotation value with cached sine/cosine.
pub mod rot2;
/// Two-component float vector.
pub mod vec2;

pub use rot2::Rot2;
pub use vec2::Vec2;

/// Global epsilon used when comparing scalars, vectors, and projections.
///
/// This is a geometric tolerance (world units), not numeric precision:
/// values closer than `EPSILON` are treated as equal everywhere in the
/// collision core so that strict/non-strict query semantics stay
/// consistent across shape pairs.
pub const EPSILON: f32 = 1e-4;

/// Epsilon-tolerant scalar equality: symmetric, reflexive, not transitive.
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() <= EPSILON
}

/// Clamps `value` to the inclusive `[min, max]` range using float32 rounding.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Canonical representative of an axis and its negation.
///
/// Two antiparallel unit vectors describe the same separating line; this
/// picks the one with `x > EPSILON`, or, when `x` is within `EPSILON` of
/// zero, the one with `y >= 0`. Idempotent, so already-standard normals
/// pass through unchanged. Used to deduplicate axes before projection,
/// so components are also folded to a single zero representation:
/// `-0.0` and `0.0` compare equal yet differ bitwise, and the axis dedup
/// sets key on bit patterns.
pub fn make_standard_normal(v: Vec2) -> Vec2 {
    let v = if v.x() < -EPSILON || (v.x().abs() <= EPSILON && v.y() < 0.0) {
        v.neg()
    } else {
        v
    };
    Vec2::new(v.x() + 0.0, v.y() + 0.0)
}

/// Computes `(a × b) × a` with the operands lifted to 3D and the result
/// projected back to 2D.
///
/// The result is perpendicular to `a` and points toward `b`'s side of the
/// line through `a`. This is the GJK primitive for steering the simplex
/// search perpendicular to an edge, away from a third point. Returns the
/// zero vector when `a` and `b` are parallel.
pub fn triple_cross(a: Vec2, b: Vec2) -> Vec2 {
    let c = a.cross(b);
    Vec2::new(-a.y() * c, a.x() * c)
}

/// Non-negative area of the triangle `(a, b, c)` via the shoelace formula.
pub fn area_of_triangle(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    0.5 * b.sub(a).cross(c.sub(a)).abs()
}

/// Returns `true` if `pt` lies on the infinite line through `v1` and `v2`.
///
/// Only the component of `pt` along the segment normal is examined; the
/// segment bounds are ignored. `v1` and `v2` must be distinct.
pub fn is_on_line(v1: Vec2, v2: Vec2, pt: Vec2) -> bool {
    let axis = v2.sub(v1).normalize();
    let normal = axis.perpendicular();
    approx_eq(normal.dot(pt.sub(v1)), 0.0)
}

/// Returns `true` if `pt` lies on the segment from `v1` to `v2`.
///
/// Combines the infinite-line test with a bounds check on the axis
/// projection, both widened by `EPSILON`.
pub fn is_between_line(v1: Vec2, v2: Vec2, pt: Vec2) -> bool {
    if !is_on_line(v1, v2, pt) {
        return false;
    }
    let delta = v2.sub(v1);
    let len = delta.length();
    let t = delta.normalize().dot(pt.sub(v1));
    t >= -EPSILON && t <= len + EPSILON
}
