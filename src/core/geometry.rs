//=========================================================================
// Geometry
//=========================================================================
//
// Small value types shared by the window and input layers.
//
//   Rect<T>           : axis-aligned rectangle (window bounds)
//   InclusiveRange<T> : closed interval (axis activation ranges)
//
//=========================================================================

//=== External Dependencies ===============================================

use std::ops::{Add, Sub};

//=== Rect ================================================================

/// Two-dimensional axis-aligned rectangle.
///
/// Stored as origin + extent. Edge accessors are derived, so setting the
/// bottom or right edge resizes the rectangle instead of moving it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T> Rect<T>
where
    T: Copy + Add<Output = T> + Sub<Output = T>,
{
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Self { x, y, width, height }
    }

    pub fn top(&self) -> T {
        self.y
    }

    pub fn set_top(&mut self, top: T) {
        self.y = top;
    }

    pub fn bottom(&self) -> T {
        self.y + self.height
    }

    /// Moves the bottom edge, keeping the top edge fixed.
    pub fn set_bottom(&mut self, bottom: T) {
        self.height = bottom - self.y;
    }

    pub fn left(&self) -> T {
        self.x
    }

    pub fn set_left(&mut self, left: T) {
        self.x = left;
    }

    pub fn right(&self) -> T {
        self.x + self.width
    }

    /// Moves the right edge, keeping the left edge fixed.
    pub fn set_right(&mut self, right: T) {
        self.width = right - self.x;
    }
}

//=== InclusiveRange ======================================================

/// Continuous range of values with inclusive bounds at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InclusiveRange<T> {
    pub min: T,
    pub max: T,
}

impl<T: Copy + PartialOrd> InclusiveRange<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Returns `true` if `min <= value <= max`.
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }
}

impl InclusiveRange<f32> {
    /// Linearly maps `t` in `[0, 1]` onto this range (not clamped).
    pub fn lerp(&self, t: f32) -> f32 {
        self.min + (self.max - self.min) * t
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
