//! Density-independent pixels for configuration values.
//!
//! Tab heights, paddings, and indicator dimensions are configured in dp so a
//! strip looks the same physical size on displays of different density. The
//! layout engine resolves dp to physical [`Px`](crate::px::Px) through a
//! global scale factor at layout time.
//!
//! ```
//! use segkit::dp::Dp;
//!
//! let tab_height = Dp(44.0);
//! let pixels = tab_height.to_pixels_f64();
//! ```

use std::sync::OnceLock;

use parking_lot::RwLock;

/// Global scale factor for converting dp to physical pixels.
///
/// The host sets this once based on the display's density; until it is
/// initialized, conversions assume a factor of 1.0 (one dp equals one pixel).
pub static SCALE_FACTOR: OnceLock<RwLock<f64>> = OnceLock::new();

/// A density-independent pixel value.
///
/// Wraps an `f64` dp measurement. Conversion to physical pixels applies the
/// current [`SCALE_FACTOR`].
///
/// # Examples
///
/// ```
/// use segkit::dp::Dp;
///
/// const TAB_HEIGHT: Dp = Dp::new(44.0);
/// let padding = Dp(16.0);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dp(pub f64);

impl Dp {
    /// Zero dp.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Dp` value. Usable in const contexts.
    pub const fn new(value: f64) -> Self {
        Dp(value)
    }

    /// Converts this dp value to physical pixels as an `f64`, applying the
    /// current scale factor (1.0 if uninitialized).
    pub fn to_pixels_f64(&self) -> f64 {
        let scale_factor = SCALE_FACTOR.get().map(|lock| *lock.read()).unwrap_or(1.0);
        self.0 * scale_factor
    }

    /// Creates a `Dp` value from a physical pixel measurement, applying the
    /// inverse of the current scale factor.
    pub fn from_pixels_f64(value: f64) -> Self {
        let scale_factor = SCALE_FACTOR.get().map(|lock| *lock.read()).unwrap_or(1.0);
        Dp(value / scale_factor)
    }
}

impl From<f64> for Dp {
    fn from(value: f64) -> Self {
        Dp(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scale_is_identity() {
        // SCALE_FACTOR is intentionally left unset by the test suite.
        assert_eq!(Dp(44.0).to_pixels_f64(), 44.0);
        assert_eq!(Dp::from_pixels_f64(16.0), Dp(16.0));
    }

    #[test]
    fn test_const_construction() {
        const HEIGHT: Dp = Dp::new(48.0);
        assert_eq!(HEIGHT, Dp(48.0));
    }
}
