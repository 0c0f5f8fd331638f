//! Indicator animation for while-scrolling mode.
//!
//! Given the indicator's resting frame at the current tab and the transition
//! metrics computed for that tab, the animator maps live drag progress to an
//! interpolated frame: the indicator slides and stretches toward the adjacent
//! tab, landing exactly on that tab's resting frame at full progress.

use crate::{layout::TransitionMetrics, px::PxRect, scroll::ScrollDirection};

/// The animation seam of the segment core.
pub trait IndicatorAnimating {
    /// Interpolated indicator frame for the given progress.
    ///
    /// `progress` is clamped to `[0, 1]`; at 0 the result equals `base`, at 1
    /// it equals the adjacent tab's resting frame by construction of the
    /// metrics. `y` and `height` are never touched.
    fn indicator_frame(
        &self,
        base: PxRect,
        direction: ScrollDirection,
        progress: f32,
        metrics: TransitionMetrics,
    ) -> PxRect;
}

/// Default animator: linear interpolation of origin and width.
#[derive(Clone, Copy, Debug, Default)]
pub struct SegmentIndicatorAnimator;

impl SegmentIndicatorAnimator {
    /// Creates the default animator.
    pub const fn new() -> Self {
        Self
    }
}

impl IndicatorAnimating for SegmentIndicatorAnimator {
    fn indicator_frame(
        &self,
        base: PxRect,
        direction: ScrollDirection,
        progress: f32,
        metrics: TransitionMetrics,
    ) -> PxRect {
        let progress = progress.clamp(0.0, 1.0);

        let (x_offset, width_delta) = match direction {
            ScrollDirection::TowardNext => (
                metrics.right_tab_offset_width.mul_f32(progress),
                metrics.right_minus_current_width.mul_f32(progress),
            ),
            ScrollDirection::TowardPrevious => (
                -metrics.left_tab_offset_width.mul_f32(progress),
                metrics.left_minus_current_width.mul_f32(progress),
            ),
        };

        PxRect {
            x: base.x + x_offset,
            width: base.width + width_delta,
            ..base
        }
    }
}
