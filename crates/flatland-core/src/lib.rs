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
#![doc = r"Deterministic 2D math primitives for Flatland.

This crate provides:
- 2D vectors (`Vec2`) with epsilon-aware comparisons.
- Normalized rotations with cached sine/cosine (`Rot2`).
- Scalar and segment helpers shared by the geometry crate
  (`make_standard_normal`, `triple_cross`, `area_of_triangle`,
  `is_on_line`, `is_between_line`).

Design notes:
- Float32 throughout; operations favor clarity and reproducibility.
- A single fixed epsilon (`math::EPSILON`) governs every approximate
  comparison; there is no per-call tolerance plumbing.
- Rustdoc is treated as part of the contract; public items are documented.
"]

/// Scalar, vector, and rotation math.
pub mod math;

pub use math::rot2::Rot2;
pub use math::vec2::Vec2;
