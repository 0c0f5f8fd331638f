//! Tab layout engine.
//!
//! A layout pass assigns every tab a frame from its resolved width and the
//! alignment policy, and reports the scrollable content width of the strip.
//! From the positioned tabs the engine also derives the indicator's resting
//! frame for a selected index and the per-index [`TransitionMetrics`] that the
//! animator consumes during interactive paging.
//!
//! Width resolution priority, per tab: the configured fixed width, else an
//! equal viewport share under [`TabAlignment::FillEqually`], else a positive
//! caller-supplied width for the index, else the tab's intrinsic width, else
//! zero.
//!
//! Center recompaction is gated on the alignment tag: only
//! [`TabAlignment::Center`] shifts a short run into the middle of the
//! viewport. A short run under [`TabAlignment::Leading`] stays packed at the
//! leading edge.

use crate::{
    config::{SegmentConfig, TabAlignment},
    px::{Px, PxRect},
};

/// One positioned segment in the tab strip.
///
/// Rebuilt wholesale on every layout pass; the index is stable for the
/// lifetime of the tab set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabBox {
    /// 0-based position of the tab in the strip.
    pub index: usize,
    /// The tab's frame within the strip's content coordinate space.
    pub frame: PxRect,
}

/// Result of a tab layout pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TabStripLayout {
    /// Positioned tabs, in index order.
    pub tabs: Vec<TabBox>,
    /// Scrollable extent of the strip. Equals the viewport width when the
    /// alignment is fill-equally or a centered run fits within the viewport.
    pub content_width: Px,
}

/// Indicator deltas for one step left or right of a selected index.
///
/// Only meaningful relative to the index they were computed for; a selection
/// or layout change invalidates them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransitionMetrics {
    /// Distance from the left neighbor's origin to the current tab's origin.
    pub left_tab_offset_width: Px,
    /// Distance from the current tab's origin to the right neighbor's origin.
    pub right_tab_offset_width: Px,
    /// Width delta when the indicator lands on the left neighbor.
    pub left_minus_current_width: Px,
    /// Width delta when the indicator lands on the right neighbor.
    pub right_minus_current_width: Px,
}

impl TransitionMetrics {
    /// Neutral metrics: no offset, no width change in either direction.
    pub const ZERO: Self = Self {
        left_tab_offset_width: Px::ZERO,
        right_tab_offset_width: Px::ZERO,
        left_minus_current_width: Px::ZERO,
        right_minus_current_width: Px::ZERO,
    };
}

/// The layout seam of the segment core.
///
/// The default implementation is [`SegmentTabLayoutEngine`]; hosts can inject
/// their own to change tab placement without touching the pager lifecycle.
pub trait TabLayout {
    /// Positions every tab and reports the strip's content width.
    ///
    /// `intrinsic_widths` holds the natural width of each tab view;
    /// `width_for_index` is the caller-declared explicit width query (return
    /// zero to fall through to the intrinsic width).
    fn layout_tabs(
        &self,
        intrinsic_widths: &[Px],
        viewport_width: Px,
        config: &SegmentConfig,
        width_for_index: &dyn Fn(usize) -> Px,
    ) -> TabStripLayout;

    /// The indicator's resting frame under the tab at `index`.
    ///
    /// Returns a zero rect for an out-of-range index.
    fn indicator_frame(&self, index: usize, tabs: &[TabBox], config: &SegmentConfig) -> PxRect;

    /// Transition metrics for the tab at `index`.
    ///
    /// Returns neutral metrics for an out-of-range index or when no neighbor
    /// exists on a side.
    fn transition_metrics(
        &self,
        index: usize,
        tabs: &[TabBox],
        config: &SegmentConfig,
    ) -> TransitionMetrics;
}

/// Default policy-based layout engine.
#[derive(Clone, Copy, Debug, Default)]
pub struct SegmentTabLayoutEngine;

impl SegmentTabLayoutEngine {
    /// Creates the default engine.
    pub const fn new() -> Self {
        Self
    }

    fn resolve_tab_width(
        index: usize,
        intrinsic: Px,
        fill_share: Option<Px>,
        config: &SegmentConfig,
        width_for_index: &dyn Fn(usize) -> Px,
    ) -> Px {
        if let Some(fixed) = config.tab.fixed_width {
            return fixed.into();
        }
        if let Some(share) = fill_share {
            return share;
        }
        let declared = width_for_index(index);
        if declared > Px::ZERO {
            return declared;
        }
        if intrinsic > Px::ZERO {
            return intrinsic;
        }
        Px::ZERO
    }
}

impl TabLayout for SegmentTabLayoutEngine {
    fn layout_tabs(
        &self,
        intrinsic_widths: &[Px],
        viewport_width: Px,
        config: &SegmentConfig,
        width_for_index: &dyn Fn(usize) -> Px,
    ) -> TabStripLayout {
        let count = intrinsic_widths.len();
        if count == 0 {
            return TabStripLayout::default();
        }

        let tab = &config.tab;
        let height: Px = tab.height.into();
        let padding: Px = tab.padding.into();
        let leading: Px = tab.leading_padding.into();
        let trailing: Px = tab.trailing_padding.into();

        let fill_share = match tab.alignment {
            TabAlignment::FillEqually => {
                let inner = viewport_width - leading - trailing - padding * (count as i32 - 1);
                Some(inner.max(Px::ZERO) / count.max(1) as i32)
            }
            _ => None,
        };

        let mut tabs = Vec::with_capacity(count);
        let mut cursor = leading;
        for (index, &intrinsic) in intrinsic_widths.iter().enumerate() {
            if index > 0 {
                cursor += padding;
            }
            let width =
                Self::resolve_tab_width(index, intrinsic, fill_share, config, width_for_index);
            tabs.push(TabBox {
                index,
                frame: PxRect::new(cursor, Px::ZERO, width, height),
            });
            cursor += width;
        }

        let mut content_width = cursor + trailing;
        match tab.alignment {
            TabAlignment::FillEqually => {
                // Equal shares fill the viewport; no scroll slack is reported
                // even when integer division leaves a remainder.
                content_width = viewport_width;
            }
            TabAlignment::Center if content_width < viewport_width => {
                let shift = (viewport_width - content_width) / 2;
                for tab_box in &mut tabs {
                    tab_box.frame.x += shift;
                }
                content_width = viewport_width;
            }
            _ => {}
        }

        TabStripLayout {
            tabs,
            content_width,
        }
    }

    fn indicator_frame(&self, index: usize, tabs: &[TabBox], config: &SegmentConfig) -> PxRect {
        let Some(tab_box) = tabs.get(index) else {
            return PxRect::ZERO;
        };

        let tab_width = tab_box.frame.width;
        let width = config
            .indicator
            .fixed_width
            .map(Px::from)
            .unwrap_or(tab_width);
        let height: Px = config.indicator.height.into();
        let tab_height: Px = config.tab.height.into();

        // Centered under the tab, bottom-aligned within the strip.
        PxRect::new(
            tab_box.frame.x + (tab_width - width) / 2,
            tab_height - height,
            width,
            height,
        )
    }

    fn transition_metrics(
        &self,
        index: usize,
        tabs: &[TabBox],
        config: &SegmentConfig,
    ) -> TransitionMetrics {
        let Some(current) = tabs.get(index) else {
            return TransitionMetrics::ZERO;
        };

        let tab = &config.tab;

        if index == 0 {
            let Some(next) = tabs.get(1) else {
                return TransitionMetrics::ZERO;
            };
            return TransitionMetrics {
                left_tab_offset_width: tab.leading_padding.into(),
                right_tab_offset_width: next.frame.x - current.frame.x,
                left_minus_current_width: Px::ZERO,
                right_minus_current_width: next.frame.width - current.frame.width,
            };
        }

        if index == tabs.len() - 1 {
            let Some(prev) = tabs.get(index - 1) else {
                return TransitionMetrics::ZERO;
            };
            return TransitionMetrics {
                left_tab_offset_width: current.frame.x - prev.frame.x,
                right_tab_offset_width: tab.trailing_padding.into(),
                left_minus_current_width: prev.frame.width - current.frame.width,
                right_minus_current_width: Px::ZERO,
            };
        }

        let (Some(prev), Some(next)) = (tabs.get(index - 1), tabs.get(index + 1)) else {
            return TransitionMetrics::ZERO;
        };
        TransitionMetrics {
            left_tab_offset_width: current.frame.x - prev.frame.x,
            right_tab_offset_width: next.frame.x - current.frame.x,
            left_minus_current_width: prev.frame.width - current.frame.width,
            right_minus_current_width: next.frame.width - current.frame.width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{IndicatorConfig, TabConfig},
        dp::Dp,
    };

    fn config_with_tab(tab: TabConfig) -> SegmentConfig {
        SegmentConfig::default().tab(tab)
    }

    fn padded_leading_config() -> SegmentConfig {
        config_with_tab(
            TabConfig::default()
                .padding(Dp(10.0))
                .leading_padding(Dp(10.0))
                .trailing_padding(Dp(10.0)),
        )
    }

    const NO_DECLARED_WIDTH: fn(usize) -> Px = |_| Px::ZERO;

    #[test]
    fn test_leading_run_frames_and_content_width() {
        let engine = SegmentTabLayoutEngine::new();
        let widths = [Px(40), Px(50), Px(60), Px(70)];
        let layout = engine.layout_tabs(
            &widths,
            Px(300),
            &padded_leading_config(),
            &NO_DECLARED_WIDTH,
        );

        let origins: Vec<Px> = layout.tabs.iter().map(|t| t.frame.x).collect();
        assert_eq!(origins, vec![Px(10), Px(60), Px(120), Px(190)]);
        // leading 10 + 40 + 10 + 50 + 10 + 60 + 10 + 70 + trailing 10
        assert_eq!(layout.content_width, Px(270));

        for tab_box in &layout.tabs {
            assert_eq!(tab_box.frame.y, Px::ZERO);
            assert_eq!(tab_box.frame.height, Px(44));
        }
    }

    #[test]
    fn test_origins_are_non_decreasing() {
        let engine = SegmentTabLayoutEngine::new();
        let widths = [Px(0), Px(25), Px(0), Px(120), Px(5)];
        let layout = engine.layout_tabs(
            &widths,
            Px(200),
            &padded_leading_config(),
            &NO_DECLARED_WIDTH,
        );

        for pair in layout.tabs.windows(2) {
            assert!(pair[0].frame.x <= pair[1].frame.x);
        }
        assert!(layout.content_width >= Px::ZERO);
    }

    #[test]
    fn test_fill_equally_shares_the_viewport() {
        let engine = SegmentTabLayoutEngine::new();
        let config = config_with_tab(TabConfig::default().alignment(TabAlignment::FillEqually));
        let widths = [Px(10), Px(999), Px(0), Px(30)];
        let layout = engine.layout_tabs(&widths, Px(320), &config, &NO_DECLARED_WIDTH);

        let frame_widths: Vec<Px> = layout.tabs.iter().map(|t| t.frame.width).collect();
        assert_eq!(frame_widths, vec![Px(80); 4]);
        let origins: Vec<Px> = layout.tabs.iter().map(|t| t.frame.x).collect();
        assert_eq!(origins, vec![Px(0), Px(80), Px(160), Px(240)]);
        assert_eq!(layout.content_width, Px(320));
    }

    #[test]
    fn test_fill_equally_floors_at_zero() {
        let engine = SegmentTabLayoutEngine::new();
        let config = config_with_tab(
            TabConfig::default()
                .alignment(TabAlignment::FillEqually)
                .leading_padding(Dp(100.0))
                .trailing_padding(Dp(100.0)),
        );
        let layout = engine.layout_tabs(&[Px(40), Px(40)], Px(120), &config, &NO_DECLARED_WIDTH);

        for tab_box in &layout.tabs {
            assert_eq!(tab_box.frame.width, Px::ZERO);
        }
        assert_eq!(layout.content_width, Px(120));
    }

    #[test]
    fn test_center_shifts_short_run() {
        let engine = SegmentTabLayoutEngine::new();
        let config = config_with_tab(TabConfig::default().alignment(TabAlignment::Center));
        let layout = engine.layout_tabs(&[Px(50)], Px(200), &config, &NO_DECLARED_WIDTH);

        assert_eq!(layout.tabs[0].frame.x, Px(75));
        assert_eq!(layout.content_width, Px(200));
    }

    #[test]
    fn test_center_keeps_overflowing_run_scrollable() {
        let engine = SegmentTabLayoutEngine::new();
        let config = config_with_tab(TabConfig::default().alignment(TabAlignment::Center));
        let layout = engine.layout_tabs(&[Px(150), Px(150)], Px(200), &config, &NO_DECLARED_WIDTH);

        assert_eq!(layout.tabs[0].frame.x, Px::ZERO);
        assert_eq!(layout.content_width, Px(300));
    }

    #[test]
    fn test_leading_short_run_is_not_recentered() {
        let engine = SegmentTabLayoutEngine::new();
        let config = config_with_tab(TabConfig::default());
        let layout = engine.layout_tabs(&[Px(50)], Px(200), &config, &NO_DECLARED_WIDTH);

        assert_eq!(layout.tabs[0].frame.x, Px::ZERO);
        assert_eq!(layout.content_width, Px(50));
    }

    #[test]
    fn test_width_resolution_priority() {
        let engine = SegmentTabLayoutEngine::new();
        let declared = |index: usize| if index == 1 { Px(90) } else { Px::ZERO };

        // Declared width wins over intrinsic; intrinsic is the fallback.
        let layout = engine.layout_tabs(
            &[Px(40), Px(40), Px::ZERO],
            Px(500),
            &config_with_tab(TabConfig::default()),
            &declared,
        );
        let widths: Vec<Px> = layout.tabs.iter().map(|t| t.frame.width).collect();
        assert_eq!(widths, vec![Px(40), Px(90), Px::ZERO]);

        // Fixed width beats everything.
        let layout = engine.layout_tabs(
            &[Px(40), Px(40), Px::ZERO],
            Px(500),
            &config_with_tab(TabConfig::default().fixed_width(Dp(70.0))),
            &declared,
        );
        let widths: Vec<Px> = layout.tabs.iter().map(|t| t.frame.width).collect();
        assert_eq!(widths, vec![Px(70); 3]);
    }

    #[test]
    fn test_empty_tab_list() {
        let engine = SegmentTabLayoutEngine::new();
        let layout = engine.layout_tabs(&[], Px(300), &padded_leading_config(), &NO_DECLARED_WIDTH);
        assert!(layout.tabs.is_empty());
        assert_eq!(layout.content_width, Px::ZERO);
    }

    #[test]
    fn test_indicator_frame_tracks_tab() {
        let engine = SegmentTabLayoutEngine::new();
        let config = padded_leading_config();
        let layout = engine.layout_tabs(&[Px(40), Px(50)], Px(300), &config, &NO_DECLARED_WIDTH);

        let frame = engine.indicator_frame(1, &layout.tabs, &config);
        assert_eq!(frame, PxRect::new(Px(60), Px(42), Px(50), Px(2)));
    }

    #[test]
    fn test_indicator_frame_fixed_width_is_centered() {
        let engine = SegmentTabLayoutEngine::new();
        let config = padded_leading_config()
            .indicator(IndicatorConfig::default().fixed_width(Dp(20.0)));
        let layout = engine.layout_tabs(&[Px(40), Px(50)], Px(300), &config, &NO_DECLARED_WIDTH);

        let frame = engine.indicator_frame(0, &layout.tabs, &config);
        // Tab at x=10 width 40; a 20px indicator sits 10px in.
        assert_eq!(frame, PxRect::new(Px(20), Px(42), Px(20), Px(2)));
    }

    #[test]
    fn test_indicator_frame_out_of_range_is_zero() {
        let engine = SegmentTabLayoutEngine::new();
        let config = padded_leading_config();
        let layout = engine.layout_tabs(&[Px(40)], Px(300), &config, &NO_DECLARED_WIDTH);

        assert_eq!(engine.indicator_frame(1, &layout.tabs, &config), PxRect::ZERO);
        assert_eq!(engine.indicator_frame(usize::MAX, &layout.tabs, &config), PxRect::ZERO);
    }

    #[test]
    fn test_transition_metrics_interior() {
        let engine = SegmentTabLayoutEngine::new();
        let config = padded_leading_config();
        let layout = engine.layout_tabs(
            &[Px(40), Px(50), Px(60), Px(70)],
            Px(300),
            &config,
            &NO_DECLARED_WIDTH,
        );

        let metrics = engine.transition_metrics(1, &layout.tabs, &config);
        assert_eq!(metrics.left_tab_offset_width, Px(50)); // 60 - 10
        assert_eq!(metrics.right_tab_offset_width, Px(60)); // 120 - 60
        assert_eq!(metrics.left_minus_current_width, Px(-10)); // 40 - 50
        assert_eq!(metrics.right_minus_current_width, Px(10)); // 60 - 50
    }

    #[test]
    fn test_transition_metrics_boundaries_use_edge_padding() {
        let engine = SegmentTabLayoutEngine::new();
        let config = padded_leading_config();
        let layout = engine.layout_tabs(
            &[Px(40), Px(50), Px(60)],
            Px(300),
            &config,
            &NO_DECLARED_WIDTH,
        );

        let first = engine.transition_metrics(0, &layout.tabs, &config);
        assert_eq!(first.left_tab_offset_width, Px(10)); // leading stand-in
        assert_eq!(first.left_minus_current_width, Px::ZERO);
        assert_eq!(first.right_tab_offset_width, Px(50));
        assert_eq!(first.right_minus_current_width, Px(10));

        let last = engine.transition_metrics(2, &layout.tabs, &config);
        assert_eq!(last.right_tab_offset_width, Px(10)); // trailing stand-in
        assert_eq!(last.right_minus_current_width, Px::ZERO);
        assert_eq!(last.left_tab_offset_width, Px(60));
        assert_eq!(last.left_minus_current_width, Px(-10));
    }

    #[test]
    fn test_transition_metrics_single_tab_is_neutral() {
        let engine = SegmentTabLayoutEngine::new();
        let config = padded_leading_config();
        let layout = engine.layout_tabs(&[Px(40)], Px(300), &config, &NO_DECLARED_WIDTH);

        assert_eq!(
            engine.transition_metrics(0, &layout.tabs, &config),
            TransitionMetrics::ZERO
        );
    }

    #[test]
    fn test_transition_metrics_out_of_range_is_neutral() {
        let engine = SegmentTabLayoutEngine::new();
        let config = padded_leading_config();
        let layout = engine.layout_tabs(&[Px(40), Px(50)], Px(300), &config, &NO_DECLARED_WIDTH);

        assert_eq!(
            engine.transition_metrics(2, &layout.tabs, &config),
            TransitionMetrics::ZERO
        );
    }
}
