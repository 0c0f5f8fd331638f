//! Headless segmented-pager core.
//!
//! [`SegmentedPager`] owns the selection state machine, the laid-out tab
//! strip, and the drag snapshot, and turns host events (reload, tab tap,
//! scroll samples, drag end) into indicator frames and selection reports. It
//! performs no rendering and installs no gesture handlers; the UI container
//! that embeds it supplies geometry and applies the frames it returns.
//!
//! Event ordering matters: a reload fully relayouts the strip and recomputes
//! the transition metrics before it returns, so any indicator query that
//! follows observes fresh geometry. During a drag every scroll sample is
//! resolved synchronously against the snapshot taken at drag start. A drag
//! that ends without deceleration locks the indicator to the visible page
//! immediately rather than waiting for a deceleration callback that will
//! never arrive.

use std::time::Duration;

use thiserror::Error;
use tracing::{debug, trace};

use crate::{
    animator::{IndicatorAnimating, SegmentIndicatorAnimator},
    config::{IndicatorAnimation, SegmentConfig},
    layout::{SegmentTabLayoutEngine, TabBox, TabLayout, TabStripLayout, TransitionMetrics},
    px::{Px, PxRect},
    scroll::{ScrollDirection, ScrollSample},
    state::SegmentState,
};

/// Collaborator-usage errors surfaced by the pager.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SegmentError {
    /// A reload was requested with no tabs supplied. The host decides whether
    /// an empty strip is fatal.
    #[error("reload requested with an empty tab set")]
    EmptyTabSet,
}

/// A completed selection change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionChange {
    /// The previously selected index.
    pub from: usize,
    /// The newly selected index.
    pub to: usize,
}

/// Per-sample output of while-scrolling interpolation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollUpdate {
    /// The interpolated indicator frame to apply this frame.
    pub indicator: PxRect,
    /// The index the transition started from.
    pub from_index: usize,
    /// The index the transition is heading toward.
    pub target_index: usize,
    /// Normalized progress in `[0, 1]`.
    pub progress: f32,
    /// Direction of the in-flight transition.
    pub direction: ScrollDirection,
}

/// An indicator reposition the host should apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndicatorUpdate {
    /// The indicator's new resting frame.
    pub frame: PxRect,
    /// The selection change this update resolved, if any.
    pub selection: Option<SelectionChange>,
    /// Duration for a host-side animation, or `None` to jump.
    pub animate: Option<Duration>,
}

/// Headless controller for a segmented-tab pager.
pub struct SegmentedPager {
    config: SegmentConfig,
    layout_engine: Box<dyn TabLayout>,
    animator: Box<dyn IndicatorAnimating>,
    state: SegmentState,
    layout: TabStripLayout,
    drag_base_frame: PxRect,
    drag_metrics: TransitionMetrics,
}

impl SegmentedPager {
    /// Creates a pager with the default layout engine and animator.
    pub fn new(config: SegmentConfig) -> Self {
        Self::with_parts(
            config,
            Box::new(SegmentTabLayoutEngine::new()),
            Box::new(SegmentIndicatorAnimator::new()),
        )
    }

    /// Creates a pager with injected layout and animation implementations.
    pub fn with_parts(
        config: SegmentConfig,
        layout_engine: Box<dyn TabLayout>,
        animator: Box<dyn IndicatorAnimating>,
    ) -> Self {
        Self {
            config,
            layout_engine,
            animator,
            state: SegmentState::new(),
            layout: TabStripLayout::default(),
            drag_base_frame: PxRect::ZERO,
            drag_metrics: TransitionMetrics::ZERO,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &SegmentConfig {
        &self.config
    }

    /// The current selection and drag state.
    pub fn state(&self) -> &SegmentState {
        &self.state
    }

    /// The currently selected index.
    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    /// The positioned tabs from the last reload.
    pub fn tabs(&self) -> &[TabBox] {
        &self.layout.tabs
    }

    /// The strip's scrollable content width from the last reload.
    pub fn content_width(&self) -> Px {
        self.layout.content_width
    }

    /// Flags that the tab set changed and a reload is required.
    pub fn mark_needs_reload(&mut self) {
        self.state.mark_needs_reload();
    }

    /// Rebuilds the tab strip from scratch.
    ///
    /// Lays out every tab, re-seats the selection at the configured default
    /// index (clamped to the new count), and recomputes the transition
    /// metrics, all before returning. `width_for_index` is the host's
    /// explicit per-tab width query; return zero to defer to the intrinsic
    /// width.
    ///
    /// An empty `intrinsic_widths` collapses the strip and reports
    /// [`SegmentError::EmptyTabSet`].
    pub fn reload(
        &mut self,
        intrinsic_widths: &[Px],
        viewport_width: Px,
        width_for_index: impl Fn(usize) -> Px,
    ) -> Result<&TabStripLayout, SegmentError> {
        if intrinsic_widths.is_empty() {
            self.layout = TabStripLayout::default();
            self.state.set_current_index(0);
            self.state.set_metrics(TransitionMetrics::ZERO);
            self.state.mark_reloaded();
            return Err(SegmentError::EmptyTabSet);
        }

        self.layout = self.layout_engine.layout_tabs(
            intrinsic_widths,
            viewport_width,
            &self.config,
            &width_for_index,
        );

        let count = self.layout.tabs.len();
        let index = self.config.pager.default_index.min(count - 1);
        self.state.set_current_index(index);
        self.state.set_metrics(self.layout_engine.transition_metrics(
            index,
            &self.layout.tabs,
            &self.config,
        ));
        self.state.mark_reloaded();

        debug!(
            tabs = count,
            content_width = self.layout.content_width.raw(),
            index,
            "tab strip reloaded"
        );
        Ok(&self.layout)
    }

    /// Selects `index`, reporting the indicator move the host should apply.
    ///
    /// Returns `None` when the index is out of range or already selected.
    pub fn select(&mut self, index: usize, animated: bool) -> Option<IndicatorUpdate> {
        if index >= self.layout.tabs.len() {
            return None;
        }
        let previous = self.state.current_index();
        if index == previous {
            return None;
        }

        self.state.set_current_index(index);
        self.state.set_metrics(self.layout_engine.transition_metrics(
            index,
            &self.layout.tabs,
            &self.config,
        ));

        debug!(from = previous, to = index, "segment selected");
        Some(IndicatorUpdate {
            frame: self.indicator_frame(),
            selection: Some(SelectionChange {
                from: previous,
                to: index,
            }),
            animate: self.animate_hint(animated),
        })
    }

    /// The indicator's resting frame for the current selection.
    pub fn indicator_frame(&self) -> PxRect {
        self.layout_engine.indicator_frame(
            self.state.current_index(),
            &self.layout.tabs,
            &self.config,
        )
    }

    /// Begins an interactive drag.
    ///
    /// Only meaningful in while-scrolling mode. Snapshots the resting frame
    /// and metrics once so every subsequent sample interpolates against a
    /// stable base.
    pub fn begin_drag(&mut self) {
        if self.config.indicator.animation_mode != IndicatorAnimation::WhileScrolling {
            return;
        }

        self.state.set_dragging(true);
        self.state.set_pending_lock(true);
        self.state.set_while_scrolling_enabled(true);

        self.drag_base_frame = self.indicator_frame();
        self.drag_metrics = self.state.metrics();
        debug!(index = self.state.current_index(), "drag began");
    }

    /// Processes one scroll sample of an active drag.
    ///
    /// Returns the interpolated indicator frame and the index the swipe is
    /// heading toward, or `None` outside an active while-scrolling drag.
    pub fn sample_scroll(&self, sample: ScrollSample) -> Option<ScrollUpdate> {
        if self.config.indicator.animation_mode != IndicatorAnimation::WhileScrolling
            || !self.state.is_dragging()
            || !self.state.while_scrolling_enabled()
            || self.layout.tabs.is_empty()
        {
            return None;
        }

        let progress = sample.progress();
        let direction = sample.direction();
        let indicator =
            self.animator
                .indicator_frame(self.drag_base_frame, direction, progress, self.drag_metrics);

        let from_index = self.state.current_index();
        let target_index = match direction {
            ScrollDirection::TowardNext => (from_index + 1).min(self.layout.tabs.len() - 1),
            ScrollDirection::TowardPrevious => from_index.saturating_sub(1),
        };

        trace!(progress, ?direction, target_index, "scroll sample");
        Some(ScrollUpdate {
            indicator,
            from_index,
            target_index,
            progress,
            direction,
        })
    }

    /// Ends an interactive drag.
    ///
    /// When the drag ends without deceleration the transition resolves
    /// immediately: the indicator locks to `visible_index`, the page the
    /// container actually shows. With deceleration pending the lock is
    /// deferred to [`end_deceleration`](Self::end_deceleration).
    pub fn end_drag(
        &mut self,
        will_decelerate: bool,
        visible_index: usize,
    ) -> Option<IndicatorUpdate> {
        if self.config.indicator.animation_mode != IndicatorAnimation::WhileScrolling {
            return None;
        }
        if will_decelerate {
            return None;
        }

        self.state.set_dragging(false);
        self.state.set_while_scrolling_enabled(false);
        if self.state.take_pending_lock() {
            Some(self.lock_to_visible(visible_index))
        } else {
            None
        }
    }

    /// Resolves the indicator after deceleration finished.
    pub fn end_deceleration(&mut self, visible_index: usize) -> Option<IndicatorUpdate> {
        if self.config.indicator.animation_mode != IndicatorAnimation::WhileScrolling {
            return None;
        }

        self.state.set_dragging(false);
        self.state.set_while_scrolling_enabled(false);
        if self.state.take_pending_lock() {
            Some(self.lock_to_visible(visible_index))
        } else {
            None
        }
    }

    /// Final authority once the page container reports a finished transition.
    ///
    /// Updates the selection to the page actually shown and, in
    /// while-scrolling mode, clears any leftover drag state even if the
    /// scroll callbacks did not fire as expected.
    pub fn finish_transition(
        &mut self,
        completed: bool,
        visible_index: usize,
    ) -> Option<IndicatorUpdate> {
        if !completed {
            return None;
        }

        if self.config.indicator.animation_mode == IndicatorAnimation::WhileScrolling {
            self.state.set_dragging(false);
            self.state.set_while_scrolling_enabled(false);
            self.state.set_pending_lock(false);
        }

        Some(self.lock_to_visible(visible_index))
    }

    /// Scroll offset that centers the selected tab within a strip viewport
    /// of the given width, clamped to the strip's scrollable range.
    pub fn tab_strip_scroll_target(&self, strip_viewport_width: Px) -> Px {
        let Some(tab_box) = self.layout.tabs.get(self.state.current_index()) else {
            return Px::ZERO;
        };

        let max_scroll = (self.layout.content_width - strip_viewport_width).max(Px::ZERO);
        let target = tab_box.frame.mid_x() - strip_viewport_width / 2;
        target.max(Px::ZERO).min(max_scroll)
    }

    fn lock_to_visible(&mut self, visible_index: usize) -> IndicatorUpdate {
        // The host reports which page is actually visible; fall back to the
        // current selection if that report is out of range.
        let index = if visible_index < self.layout.tabs.len() {
            visible_index
        } else {
            self.state.current_index()
        };

        let previous = self.state.current_index();
        self.state.set_current_index(index);
        self.state.set_metrics(self.layout_engine.transition_metrics(
            index,
            &self.layout.tabs,
            &self.config,
        ));

        debug!(from = previous, to = index, "indicator locked");
        IndicatorUpdate {
            frame: self.indicator_frame(),
            selection: (index != previous).then_some(SelectionChange {
                from: previous,
                to: index,
            }),
            animate: self.animate_hint(true),
        }
    }

    fn animate_hint(&self, animated: bool) -> Option<Duration> {
        let indicator = &self.config.indicator;
        let wants_animation = animated
            && indicator.animation_mode != IndicatorAnimation::None
            && !indicator.animation_duration.is_zero();
        wants_animation.then_some(indicator.animation_duration)
    }
}
