//! Interval and segment algebra.
//!
//! `AxisAlignedLine2` is the 1D substrate all separating-axis projection
//! tests reduce to; `Line2` is the finite-segment type the circle/polygon
//! edge tests are built on.

/// 1D interval on a world axis.
pub mod axis_aligned_line;
/// Finite 2D segment with derived axis, normal, and bounds.
pub mod line;
