#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    rust_2018_idioms,
    missing_docs,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
#![doc = r"Convex 2D collision queries for Flatland.

This crate provides:
- 1D interval algebra (`AxisAlignedLine2`) — the substrate every
  separating-axis test reduces to.
- Finite segments (`Line2`) with intersection and overlap classification.
- Immutable, position-independent shapes (`Circle2`, `Rect2`, `Triangle2`,
  `Polygon2`).
- A narrow-phase engine (`narrow`) answering Intersects / IntersectMTV /
  MinDistance for every shape pair via the Separating Axis Theorem, with a
  GJK walk as an alternative polygon/polygon intersection test.

Conventions:
- Shapes never store placement. World offsets (and, where supported,
  rotations about the shape centroid) are passed per query, so one shape
  value can be reused across any number of placements.
- Queries are pure functions over immutable inputs; any number may run
  concurrently on shared shape instances without synchronization.
- A single epsilon (`flatland_core::math::EPSILON`) resolves every
  numerical edge case; `strict` selects whether touching counts as
  intersecting. There is no 'unknown' result.
"]

/// Error taxonomy for construction and precondition failures.
pub mod error;
/// Narrow-phase collision engine: SAT dispatch, GJK, and distance queries.
pub mod narrow;
/// Primitive shapes: circles, rectangles, triangles, convex polygons.
pub mod shapes;
/// Interval and segment algebra underlying the shape queries.
pub mod types;

pub use error::GeomError;
pub use shapes::circle::Circle2;
pub use shapes::polygon::Polygon2;
pub use shapes::rect::Rect2;
pub use shapes::triangle::Triangle2;
pub use types::axis_aligned_line::AxisAlignedLine2;
pub use types::line::{Line2, LineInterType};
