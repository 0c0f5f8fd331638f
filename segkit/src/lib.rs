//! segkit is a headless core for segmented-tab pagers.
//!
//! It computes tab strip layout, indicator geometry, and selection state for
//! a tabs-above-pages widget without rendering anything itself: the host
//! toolkit draws the tabs and pages, forwards reloads, taps, and scroll
//! samples, and applies the frames segkit hands back.
//!
//! # Building a pager
//!
//! Configuration is plain value structs with setter-style builders:
//!
//! ```
//! use segkit::{
//!     Dp, IndicatorAnimation, IndicatorConfig, Px, SegmentConfig, SegmentedPager, TabConfig,
//! };
//!
//! let config = SegmentConfig::default()
//!     .tab(TabConfig::default().padding(Dp(8.0)))
//!     .indicator(IndicatorConfig::default().animation_mode(IndicatorAnimation::WhileScrolling));
//!
//! let mut pager = SegmentedPager::new(config);
//! let layout = pager.reload(&[Px::new(40), Px::new(50)], Px::new(320), |_| Px::ZERO)?;
//! assert_eq!(layout.tabs.len(), 2);
//! # Ok::<(), segkit::SegmentError>(())
//! ```
//!
//! # Driving a drag
//!
//! In while-scrolling mode the host feeds every scroll sample of an active
//! drag and applies the interpolated indicator frame it gets back:
//!
//! ```
//! use segkit::{
//!     IndicatorAnimation, IndicatorConfig, Px, ScrollSample, SegmentConfig, SegmentedPager,
//! };
//!
//! let config = SegmentConfig::default()
//!     .indicator(IndicatorConfig::default().animation_mode(IndicatorAnimation::WhileScrolling));
//! let mut pager = SegmentedPager::new(config);
//! pager.reload(&[Px::new(40), Px::new(50)], Px::new(320), |_| Px::ZERO)?;
//!
//! pager.begin_drag();
//! if let Some(update) = pager.sample_scroll(ScrollSample::new(Px::new(480), Px::new(320))) {
//!     // move the indicator view to update.indicator
//! }
//! if let Some(lock) = pager.end_drag(false, 1) {
//!     // the indicator locks onto the visible page; lock.selection reports
//!     // the completed selection change
//! }
//! # Ok::<(), segkit::SegmentError>(())
//! ```
//!
//! Layout is injectable: implement [`TabLayout`] or [`IndicatorAnimating`]
//! and build the pager with [`SegmentedPager::with_parts`] to replace tab
//! placement or indicator interpolation without touching the lifecycle.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod animator;
pub mod color;
pub mod config;
pub mod dp;
pub mod layout;
pub mod pager;
pub mod px;
pub mod scroll;
pub mod state;

pub use crate::{
    animator::{IndicatorAnimating, SegmentIndicatorAnimator},
    color::Color,
    config::{
        IndicatorAnimation, IndicatorConfig, PagerConfig, SegmentConfig, SegmentDefaults,
        TabAlignment, TabConfig,
    },
    dp::Dp,
    layout::{
        SegmentTabLayoutEngine, TabBox, TabLayout, TabStripLayout, TransitionMetrics,
    },
    pager::{
        IndicatorUpdate, ScrollUpdate, SegmentError, SegmentedPager, SelectionChange,
    },
    px::{Px, PxRect},
    scroll::{ScrollDirection, ScrollSample},
    state::SegmentState,
};
