//! Primitive convex shapes.
//!
//! All shape values are immutable and position-independent: world
//! placement (offset, and rotation about the shape centroid where
//! supported) is passed to each query, never stored.

/// Circle keyed by radius, placed by its bounding-box corner.
pub mod circle;
/// Convex polygon with derived edges, normals, and triangle fan.
pub mod polygon;
/// Axis-aligned rectangle with optional per-query rotation.
pub mod rect;
/// Triangle with a cached inverse basis for barycentric queries.
pub mod triangle;
