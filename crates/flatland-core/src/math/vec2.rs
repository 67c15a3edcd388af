use crate::math::{Rot2, EPSILON};

/// Deterministic 2D vector used throughout the collision core.
///
/// * Components encode world units and may represent either points or
///   directions depending on the calling context.
/// * Arithmetic uses `f32` so results round like the runtime's float32 mode.
/// * Equality for geometric purposes goes through [`Vec2::approx_eq`];
///   the derived `PartialEq` is bitwise and only suitable for exact
///   deduplication.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    data: [f32; 2],
}

impl Vec2 {
    /// Zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Creates a vector from components.
    ///
    /// Callers must ensure values are finite.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { data: [x, y] }
    }

    /// X component.
    pub const fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(&self) -> f32 {
        self.data[1]
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 2] {
        self.data
    }

    /// Adds two vectors.
    pub fn add(&self, other: Self) -> Self {
        Self::new(self.x() + other.x(), self.y() + other.y())
    }

    /// Subtracts another vector.
    pub fn sub(&self, other: Self) -> Self {
        Self::new(self.x() - other.x(), self.y() - other.y())
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: f32) -> Self {
        Self::new(self.x() * scalar, self.y() * scalar)
    }

    /// Negates both components.
    pub fn neg(&self) -> Self {
        Self::new(-self.x(), -self.y())
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: Self) -> f32 {
        self.x() * other.x() + self.y() * other.y()
    }

    /// 2D cross product (the `z` component of the 3D cross product).
    pub fn cross(&self, other: Self) -> f32 {
        self.x() * other.y() - self.y() * other.x()
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> f32 {
        self.dot(*self).sqrt()
    }

    /// Squared magnitude of the vector.
    pub fn length_squared(&self) -> f32 {
        self.dot(*self)
    }

    /// Rotates the vector 90° counterclockwise: `(x, y) → (−y, x)`.
    pub fn perpendicular(&self) -> Self {
        Self::new(-self.y(), self.x())
    }

    /// Normalises the vector, returning the zero vector if length ≤ `EPSILON`.
    ///
    /// `EPSILON` is a degeneracy threshold: vectors at or below it are
    /// considered degenerate and normalized to zero so downstream callers
    /// can detect them deterministically.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len <= EPSILON {
            return Self::ZERO;
        }
        self.scale(1.0 / len)
    }

    /// Componentwise epsilon-tolerant equality.
    pub fn approx_eq(&self, other: Self) -> bool {
        (self.x() - other.x()).abs() <= EPSILON && (self.y() - other.y()).abs() <= EPSILON
    }

    /// Rotates the vector about the origin by `rot`.
    ///
    /// Returns the vector unchanged (exactly, not approximately) when
    /// `rot` is the zero rotation.
    pub fn rotated(&self, rot: Rot2) -> Self {
        self.rotate_about(Self::ZERO, rot)
    }

    /// Rotates the vector about the pivot `about` by the cached cosine and
    /// sine of `rot`.
    ///
    /// The zero-rotation fast path returns the input bit-for-bit.
    pub fn rotate_about(&self, about: Self, rot: Rot2) -> Self {
        if rot.is_zero() {
            return *self;
        }
        let dx = self.x() - about.x();
        let dy = self.y() - about.y();
        Self::new(
            about.x() + dx * rot.cos() - dy * rot.sin(),
            about.y() + dx * rot.sin() + dy * rot.cos(),
        )
    }
}

/// Converts a 2-element `[f32; 2]` array into a `Vec2` interpreted as `(x, y)`.
///
/// # Examples
/// ```
/// use flatland_core::Vec2;
/// let v = Vec2::from([1.0, 2.0]);
/// assert_eq!(v.to_array(), [1.0, 2.0]);
/// ```
impl From<[f32; 2]> for Vec2 {
    fn from(value: [f32; 2]) -> Self {
        Self { data: value }
    }
}
