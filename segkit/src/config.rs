//! Configuration for the segmented-tab pager.
//!
//! Plain value structs with setter-style builders. Dimensional options are in
//! [`Dp`] and resolved to physical pixels by the layout engine; colors are
//! carried for the host and never interpreted by the core.
use std::time::Duration;

use derive_setters::Setters;

use crate::{color::Color, dp::Dp};

/// Horizontal placement policy for the tab run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TabAlignment {
    /// Tabs are packed from the leading edge.
    #[default]
    Leading,
    /// Tabs are packed from the leading edge, then the whole run is centered
    /// when it is narrower than the strip viewport.
    Center,
    /// Every tab receives an equal share of the viewport width.
    FillEqually,
}

/// Indicator animation policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IndicatorAnimation {
    /// The indicator jumps to the selected tab with no animation.
    #[default]
    None,
    /// The indicator continuously tracks live drag progress.
    WhileScrolling,
    /// The indicator moves only once a page transition completes.
    End,
}

/// Defaults for [`SegmentConfig`] and its sections.
pub struct SegmentDefaults;

impl SegmentDefaults {
    /// Default tab strip height.
    pub const TAB_HEIGHT: Dp = Dp(44.0);
    /// Default indicator height.
    pub const INDICATOR_HEIGHT: Dp = Dp(2.0);
    /// Default indicator animation duration.
    pub const ANIMATION_DURATION: Duration = Duration::from_millis(300);
    /// Default indicator color.
    pub const INDICATOR_COLOR: Color = Color::RED;
}

/// Options for the tab strip.
#[derive(Clone, Debug, PartialEq, Setters)]
pub struct TabConfig {
    /// Height of every tab, and of the strip itself.
    pub height: Dp,
    /// Fixed width applied to every tab. Takes precedence over any other
    /// width source.
    #[setters(strip_option)]
    pub fixed_width: Option<Dp>,
    /// Horizontal spacing between adjacent tabs.
    pub padding: Dp,
    /// Spacing before the first tab.
    pub leading_padding: Dp,
    /// Spacing after the last tab.
    pub trailing_padding: Dp,
    /// Placement policy for the tab run.
    pub alignment: TabAlignment,
    /// Background color of the tab strip.
    pub background: Color,
}

impl Default for TabConfig {
    fn default() -> Self {
        Self {
            height: SegmentDefaults::TAB_HEIGHT,
            fixed_width: None,
            padding: Dp::ZERO,
            leading_padding: Dp::ZERO,
            trailing_padding: Dp::ZERO,
            alignment: TabAlignment::default(),
            background: Color::TRANSPARENT,
        }
    }
}

/// Options for the selection indicator.
#[derive(Clone, Debug, PartialEq, Setters)]
pub struct IndicatorConfig {
    /// Color of the indicator bar.
    pub color: Color,
    /// Height of the indicator bar.
    pub height: Dp,
    /// Fixed indicator width. When unset the indicator tracks the selected
    /// tab's width.
    #[setters(strip_option)]
    pub fixed_width: Option<Dp>,
    /// Duration for host-side indicator animations.
    pub animation_duration: Duration,
    /// Animation policy for indicator movement.
    pub animation_mode: IndicatorAnimation,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            color: SegmentDefaults::INDICATOR_COLOR,
            height: SegmentDefaults::INDICATOR_HEIGHT,
            fixed_width: None,
            animation_duration: SegmentDefaults::ANIMATION_DURATION,
            animation_mode: IndicatorAnimation::default(),
        }
    }
}

/// Options for the page container.
#[derive(Clone, Debug, PartialEq, Setters)]
pub struct PagerConfig {
    /// Background color of the page container.
    pub background: Color,
    /// Index selected after every reload, clamped to the tab count.
    pub default_index: usize,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            default_index: 0,
        }
    }
}

/// Aggregate configuration for a segmented pager.
#[derive(Clone, Debug, PartialEq, Setters)]
pub struct SegmentConfig {
    /// Background color of the outer container.
    pub container_background: Color,
    /// Tab strip options.
    pub tab: TabConfig,
    /// Indicator options.
    pub indicator: IndicatorConfig,
    /// Page container options.
    pub pager: PagerConfig,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            container_background: Color::WHITE,
            tab: TabConfig::default(),
            indicator: IndicatorConfig::default(),
            pager: PagerConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SegmentConfig::default();
        assert_eq!(config.tab.height, Dp(44.0));
        assert_eq!(config.tab.alignment, TabAlignment::Leading);
        assert_eq!(config.indicator.animation_mode, IndicatorAnimation::None);
        assert_eq!(config.pager.default_index, 0);
    }

    #[test]
    fn test_setters() {
        let config = SegmentConfig::default()
            .tab(
                TabConfig::default()
                    .alignment(TabAlignment::FillEqually)
                    .fixed_width(Dp(60.0)),
            )
            .indicator(IndicatorConfig::default().animation_mode(IndicatorAnimation::WhileScrolling));
        assert_eq!(config.tab.fixed_width, Some(Dp(60.0)));
        assert_eq!(
            config.indicator.animation_mode,
            IndicatorAnimation::WhileScrolling
        );
    }
}
