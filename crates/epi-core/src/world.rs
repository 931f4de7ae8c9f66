//! Toroidal world geometry.
//!
//! The world is a `width × height` plane with wrapped edges: an agent exiting
//! the right edge reappears on the left, and likewise top/bottom.  There is no
//! boundary reflection.  Coordinates are `f32` — positions are patch-scale
//! (tens of units) so single precision is ample.
//!
//! Distances between agents are *plain Euclidean*, not torus-aware: two agents
//! facing each other across a wrapped edge are treated as far apart.  This is
//! a deliberate approximation shared with the neighbor index (see
//! `epi-spatial`); it only matters within one infection radius of the rim.

/// A wrapped 2D plane of `width × height` patches.
///
/// Cheap to copy; holds no heap data.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Torus {
    pub width: f32,
    pub height: f32,
}

impl Torus {
    #[inline]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Wrap an x-coordinate into `[0, width)`.
    #[inline]
    pub fn wrap_x(&self, x: f32) -> f32 {
        wrap(x, self.width)
    }

    /// Wrap a y-coordinate into `[0, height)`.
    #[inline]
    pub fn wrap_y(&self, y: f32) -> f32 {
        wrap(y, self.height)
    }

    /// `true` if `(x, y)` lies inside `[0, width) × [0, height)`.
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        (0.0..self.width).contains(&x) && (0.0..self.height).contains(&y)
    }
}

/// Wrap a value into `[0, span)`.
///
/// `rem_euclid` alone can round up to exactly `span` for tiny negative inputs
/// (f32 rounding), which would violate the half-open interval; the guard folds
/// that case back to 0.
#[inline]
fn wrap(v: f32, span: f32) -> f32 {
    let w = v.rem_euclid(span);
    if w >= span { 0.0 } else { w }
}

/// Wrap an angle into `[0, 2π)`.
#[inline]
pub fn wrap_angle(a: f32) -> f32 {
    let w = a.rem_euclid(std::f32::consts::TAU);
    if w >= std::f32::consts::TAU { 0.0 } else { w }
}
