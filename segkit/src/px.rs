//! Physical pixel coordinate system for the segment core.
//!
//! All tab and indicator geometry is expressed in physical pixels. [`Px`] is a
//! single coordinate value that supports negative values (scroll offsets cross
//! zero during interactive paging), and [`PxRect`] is the frame type handed
//! back to the host for every tab and for the indicator.
//!
//! The coordinate system has its origin at the top-left of the tab strip, with
//! the x-axis increasing to the right and the y-axis increasing downward.
//!
//! # Example
//!
//! ```
//! use segkit::px::{Px, PxRect};
//!
//! let frame = PxRect::new(Px::new(10), Px::ZERO, Px::new(40), Px::new(44));
//! assert_eq!(frame.max_x(), Px::new(50));
//! assert_eq!(frame.mid_x(), Px::new(30));
//! ```

use std::ops::{AddAssign, Neg, SubAssign};

use crate::dp::Dp;

/// A physical pixel coordinate value.
///
/// Supports negative values, saturating arithmetic, and float bridging for the
/// fractional math of indicator interpolation.
///
/// # Examples
///
/// ```
/// use segkit::px::Px;
///
/// let a = Px::new(100);
/// let b = Px::new(-50);
/// assert_eq!(a + b, Px::new(50));
/// assert_eq!(a.mul_f32(0.5), Px::new(50));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Px(pub i32);

impl Px {
    /// Zero pixels.
    pub const ZERO: Self = Self(0);

    /// The maximum representable pixel value.
    pub const MAX: Self = Self(i32::MAX);

    /// Creates a new `Px` from an i32 value. Negative values are allowed.
    pub const fn new(value: i32) -> Self {
        Px(value)
    }

    /// Returns the raw i32 value.
    pub fn raw(self) -> i32 {
        self.0
    }

    /// Converts from density-independent pixels using the current scale
    /// factor.
    pub fn from_dp(dp: Dp) -> Self {
        Px(dp.to_pixels_f64() as i32)
    }

    /// Converts the pixel value to f32.
    pub fn to_f32(self) -> f32 {
        self.0 as f32
    }

    /// Creates a `Px` from an f32 value, saturating at the i32 bounds instead
    /// of overflowing.
    ///
    /// # Examples
    ///
    /// ```
    /// use segkit::px::Px;
    ///
    /// assert_eq!(Px::saturating_from_f32(42.7), Px::new(42));
    /// assert_eq!(Px::saturating_from_f32(f32::MAX), Px::new(i32::MAX));
    /// ```
    pub fn saturating_from_f32(value: f32) -> Self {
        let clamped_value = value.clamp(i32::MIN as f32, i32::MAX as f32);
        Px(clamped_value as i32)
    }

    /// Saturating integer addition.
    pub fn saturating_add(self, rhs: Self) -> Self {
        Px(self.0.saturating_add(rhs.0))
    }

    /// Saturating integer subtraction.
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Px(self.0.saturating_sub(rhs.0))
    }

    /// Multiplies the pixel value by a scalar f32, saturating on overflow.
    ///
    /// This is the bridge used when scaling transition metrics by a progress
    /// fraction.
    ///
    /// # Examples
    ///
    /// ```
    /// use segkit::px::Px;
    ///
    /// assert_eq!(Px::new(60).mul_f32(0.5), Px::new(30));
    /// ```
    pub fn mul_f32(self, rhs: f32) -> Self {
        Px::saturating_from_f32(self.0 as f32 * rhs)
    }
}

impl std::ops::Add for Px {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Px(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Px {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Px(self.0 - rhs.0)
    }
}

impl Neg for Px {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Px::new(-self.0)
    }
}

impl std::ops::Mul<i32> for Px {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self::Output {
        Px(self.0 * rhs)
    }
}

impl std::ops::Div<i32> for Px {
    type Output = Self;

    fn div(self, rhs: i32) -> Self::Output {
        Px(self.0 / rhs)
    }
}

impl AddAssign for Px {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Px {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl From<i32> for Px {
    fn from(value: i32) -> Self {
        Px(value)
    }
}

impl From<Dp> for Px {
    fn from(dp: Dp) -> Self {
        Px::from_dp(dp)
    }
}

/// A rectangle in physical pixel space.
///
/// `x`/`y` locate the top-left corner. Tab frames and indicator frames are
/// both expressed as `PxRect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PxRect {
    /// The x-coordinate of the top-left corner.
    pub x: Px,
    /// The y-coordinate of the top-left corner.
    pub y: Px,
    /// The width of the rectangle.
    pub width: Px,
    /// The height of the rectangle.
    pub height: Px,
}

impl PxRect {
    /// A zero rectangle (0×0 at the origin).
    pub const ZERO: Self = Self {
        x: Px::ZERO,
        y: Px::ZERO,
        width: Px::ZERO,
        height: Px::ZERO,
    };

    /// Creates a new rectangle from position and size.
    pub const fn new(x: Px, y: Px, width: Px, height: Px) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The right edge of the rectangle.
    pub fn max_x(self) -> Px {
        self.x + self.width
    }

    /// The horizontal center of the rectangle.
    pub fn mid_x(self) -> Px {
        self.x + self.width / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_arithmetic() {
        let a = Px(10);
        let b = Px(5);

        assert_eq!(a + b, Px(15));
        assert_eq!(a - b, Px(5));
        assert_eq!(a * 2, Px(20));
        assert_eq!(a / 2, Px(5));
        assert_eq!(-a, Px(-10));
    }

    #[test]
    fn test_px_saturating_arithmetic() {
        let max = Px(i32::MAX);
        let min = Px(i32::MIN);
        assert_eq!(max.saturating_add(Px(1)), max);
        assert_eq!(min.saturating_sub(Px(1)), min);
    }

    #[test]
    fn test_saturating_from_f32() {
        assert_eq!(Px::saturating_from_f32(f32::MAX), Px(i32::MAX));
        assert_eq!(Px::saturating_from_f32(f32::MIN), Px(i32::MIN));
        assert_eq!(Px::saturating_from_f32(100.5), Px(100));
        assert_eq!(Px::saturating_from_f32(-100.5), Px(-100));
    }

    #[test]
    fn test_mul_f32() {
        assert_eq!(Px(60).mul_f32(0.5), Px(30));
        assert_eq!(Px(10).mul_f32(0.0), Px(0));
        assert_eq!(Px(-40).mul_f32(0.25), Px(-10));
    }

    #[test]
    fn test_rect_edges() {
        let rect = PxRect::new(Px(10), Px(0), Px(40), Px(44));
        assert_eq!(rect.max_x(), Px(50));
        assert_eq!(rect.mid_x(), Px(30));
        assert_eq!(PxRect::ZERO.max_x(), Px::ZERO);
    }
}
