// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.

use core::cmp::Ordering;
use core::fmt::Debug;

/// Axis-aligned rectangle in 2D, stored as a min/max corner pair.
///
/// The y axis grows downward, so `min_y` is the top edge and `max_y` the bottom edge.
///
/// ## Edge convention
///
/// Both [`Rect::overlaps`] and [`Rect::contains`] are inclusive: rectangles that merely
/// touch along an edge or at a corner overlap, and a rectangle contains itself.
/// For normalized rectangles `a.contains(&b)` therefore always implies `a.overlaps(&b)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect<T> {
    /// Minimum x (left)
    pub min_x: T,
    /// Minimum y (top)
    pub min_y: T,
    /// Maximum x (right)
    pub max_x: T,
    /// Maximum y (bottom)
    pub max_y: T,
}

impl<T> Rect<T> {
    /// Create a new rectangle from min/max corners.
    pub const fn new(min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }
}

impl<T: Scalar> Rect<T> {
    /// Create a rectangle from its left/top origin and its size.
    pub fn from_xywh(x: T, y: T, w: T, h: T) -> Self {
        Self::new(x, y, T::add(x, w), T::add(y, h))
    }

    /// Width (`max_x - min_x`). Negative for an inverted rectangle.
    pub fn width(&self) -> T {
        T::sub(self.max_x, self.min_x)
    }

    /// Height (`max_y - min_y`). Negative for an inverted rectangle.
    pub fn height(&self) -> T {
        T::sub(self.max_y, self.min_y)
    }

    /// The four child regions obtained by splitting at the midpoint, in the fixed order
    /// top-left, top-right, bottom-left, bottom-right.
    ///
    /// The half extents are clamped to at least one unit so repeated subdivision never
    /// collapses to zero-size regions. As long as both extents are at least two units the
    /// children exactly quarter `self`; below that they may reach past its right/bottom edge.
    pub fn quadrants(&self) -> [Self; 4] {
        let half_w = max_t(T::half(self.width()), T::one());
        let half_h = max_t(T::half(self.height()), T::one());
        let mid_x = T::add(self.min_x, half_w);
        let mid_y = T::add(self.min_y, half_h);
        // Integer halving rounds down; keep the far children flush with the parent edge.
        let right = max_t(self.max_x, T::add(mid_x, half_w));
        let bottom = max_t(self.max_y, T::add(mid_y, half_h));
        [
            Self::new(self.min_x, self.min_y, mid_x, mid_y),
            Self::new(mid_x, self.min_y, right, mid_y),
            Self::new(self.min_x, mid_y, mid_x, bottom),
            Self::new(mid_x, mid_y, right, bottom),
        ]
    }
}

impl<T: Copy + PartialOrd> Rect<T> {
    /// Whether this rectangle contains the point (edges included).
    pub fn contains_point(&self, x: T, y: T) -> bool {
        le(self.min_x, x) && le(self.min_y, y) && le(x, self.max_x) && le(y, self.max_y)
    }

    /// Whether the two rectangles share any area, edges and corners included.
    pub fn overlaps(&self, other: &Self) -> bool {
        le(self.min_x, other.max_x)
            && le(other.min_x, self.max_x)
            && le(self.min_y, other.max_y)
            && le(other.min_y, self.max_y)
    }

    /// Whether `other` lies entirely within this rectangle, edges included.
    pub fn contains(&self, other: &Self) -> bool {
        le(self.min_x, other.min_x)
            && le(other.max_x, self.max_x)
            && le(self.min_y, other.min_y)
            && le(other.max_y, self.max_y)
    }

    /// Return true if the rectangle is inverted on either axis. Assumes no NaN.
    ///
    /// Zero-area rectangles (points and segments) are not empty.
    pub fn is_empty(&self) -> bool {
        lt(self.max_x, self.min_x) || lt(self.max_y, self.min_y)
    }

    /// The same rectangle with inverted axes swapped back into min/max order.
    pub fn normalized(&self) -> Self {
        Self {
            min_x: min_t(self.min_x, self.max_x),
            min_y: min_t(self.min_y, self.max_y),
            max_x: max_t(self.min_x, self.max_x),
            max_y: max_t(self.min_y, self.max_y),
        }
    }
}

#[cfg(feature = "kurbo")]
impl From<kurbo::Rect> for Rect<f64> {
    fn from(r: kurbo::Rect) -> Self {
        Self::new(r.x0, r.y0, r.x1, r.y1)
    }
}

#[cfg(feature = "kurbo")]
impl From<Rect<f64>> for kurbo::Rect {
    fn from(r: Rect<f64>) -> Self {
        Self::new(r.min_x, r.min_y, r.max_x, r.max_y)
    }
}

/// Numeric scalar abstraction for quadtree coordinates.
///
/// Provides just enough arithmetic to derive child regions: addition, subtraction,
/// halving, and the unit used as the minimum child extent.
pub trait Scalar: Copy + PartialOrd + Debug {
    /// Add two scalar values.
    fn add(a: Self, b: Self) -> Self;

    /// Subtract two scalar values: a - b.
    fn sub(a: Self, b: Self) -> Self;

    /// Zero value for the scalar type.
    fn zero() -> Self;

    /// One unit; the smallest half extent a child region may have.
    fn one() -> Self;

    /// Half of a value (rounded toward zero for integers).
    fn half(v: Self) -> Self;
}

impl Scalar for f32 {
    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a - b
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn one() -> Self {
        1.0
    }

    #[inline]
    fn half(v: Self) -> Self {
        0.5 * v
    }
}

impl Scalar for f64 {
    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a - b
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn one() -> Self {
        1.0
    }

    #[inline]
    fn half(v: Self) -> Self {
        0.5 * v
    }
}

impl Scalar for i64 {
    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a.saturating_add(b)
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a.saturating_sub(b)
    }

    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn one() -> Self {
        1
    }

    #[inline]
    fn half(v: Self) -> Self {
        v / 2
    }
}

pub(crate) fn min_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Greater) => b,
        _ => a,
    }
}

pub(crate) fn max_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Less) => b,
        _ => a,
    }
}

pub(crate) fn le<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o != Ordering::Greater)
        .unwrap_or(false)
}

pub(crate) fn lt<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o == Ordering::Less)
        .unwrap_or(false)
}
