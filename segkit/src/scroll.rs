//! Progress and direction extraction from raw scroll state.
//!
//! Paging hosts typically keep a three-page virtual window (previous, current,
//! next) where the current page rests at a content offset of exactly one
//! viewport width. A [`ScrollSample`] captures that raw state per scroll
//! event; [`ScrollSample::progress`] and [`ScrollSample::direction`] normalize
//! it into the inputs the indicator animator needs.

use crate::px::Px;

/// Direction of an in-flight page transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Moving toward the next (right-hand) page.
    TowardNext,
    /// Moving toward the previous (left-hand) page.
    TowardPrevious,
}

/// A raw horizontal scroll sample from the page container.
///
/// Transient: supplied once per scroll event and never stored beyond the
/// current animation frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollSample {
    /// The content offset along the x-axis.
    pub offset_x: Px,
    /// The viewport width of the page container.
    pub viewport_width: Px,
}

impl ScrollSample {
    /// Creates a new sample from an offset and viewport width.
    pub const fn new(offset_x: Px, viewport_width: Px) -> Self {
        Self {
            offset_x,
            viewport_width,
        }
    }

    /// Normalized transition progress in `[0, 1]`.
    ///
    /// Measures distance from the centered offset (one viewport width) as a
    /// fraction of the viewport. A non-positive viewport yields 0.
    pub fn progress(self) -> f32 {
        let viewport = self.viewport_width.to_f32();
        if viewport <= 0.0 {
            return 0.0;
        }
        let raw = ((self.offset_x.to_f32() - viewport) / viewport).abs();
        raw.clamp(0.0, 1.0)
    }

    /// Direction of the transition relative to the centered offset.
    ///
    /// An exactly-centered sample resolves to [`ScrollDirection::TowardPrevious`];
    /// the tie-break is arbitrary but consistent.
    pub fn direction(self) -> ScrollDirection {
        if self.offset_x - self.viewport_width > Px::ZERO {
            ScrollDirection::TowardNext
        } else {
            ScrollDirection::TowardPrevious
        }
    }
}
