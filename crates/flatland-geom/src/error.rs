// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use flatland_core::Vec2;
use thiserror::Error;

/// Errors emitted by shape construction and query preconditions.
///
/// Numerical edge cases (nearly-parallel lines, touching shapes,
/// near-zero axes) are never errors; they resolve deterministically via
/// the fixed epsilon. Errors are reserved for geometry that cannot be
/// represented (degenerate shapes) and for call-site contract violations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeomError {
    /// A line segment degenerated to a point.
    #[error("degenerate line: start {start:?} and end {end:?} coincide")]
    DegenerateLine {
        /// Segment start as supplied by the caller.
        start: Vec2,
        /// Segment end as supplied by the caller.
        end: Vec2,
    },

    /// A rectangle collapsed to a line or point.
    #[error("degenerate rect: extent {width}x{height} has no area")]
    DegenerateRect {
        /// Corrected width of the box.
        width: f32,
        /// Corrected height of the box.
        height: f32,
    },

    /// A polygon was supplied with fewer than three vertices.
    #[error("polygon requires at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    /// A polygon's vertices are collinear, leaving it without area.
    #[error("degenerate polygon: vertices enclose no area")]
    DegeneratePolygon,

    /// A triangle's vertices are collinear.
    #[error("degenerate triangle: vertices enclose no area")]
    DegenerateTriangle,

    /// Two intervals built on different axes were compared.
    #[error("interval axes differ: {left:?} vs {right:?}")]
    AxisMismatch {
        /// Axis of the left-hand interval.
        left: Vec2,
        /// Axis of the right-hand interval.
        right: Vec2,
    },

    /// A distance query received still-rotated polygons.
    ///
    /// Rotating mid-query is deliberately unsupported there; actualize
    /// vertices first via [`crate::Polygon2::rotated`] and pass
    /// `Rot2::ZERO`.
    #[error("rotated operands are not supported by this query; pre-rotate the polygons")]
    RotationNotSupported,
}
