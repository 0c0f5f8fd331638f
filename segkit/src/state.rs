//! Selection and drag state for the segmented pager.
//!
//! All of the mutable flags the pager lifecycle touches live in one record,
//! mutated only through named transitions. The state is owned by the single
//! UI thread; transitions are synchronous and never block.

use crate::layout::TransitionMetrics;

/// The pager's finite-state record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SegmentState {
    current_index: usize,
    needs_reload: bool,
    is_dragging: bool,
    while_scrolling_enabled: bool,
    pending_lock: bool,
    metrics: TransitionMetrics,
}

impl SegmentState {
    /// Creates the initial state: index 0, reload required.
    pub fn new() -> Self {
        Self {
            current_index: 0,
            needs_reload: true,
            is_dragging: false,
            while_scrolling_enabled: false,
            pending_lock: false,
            metrics: TransitionMetrics::ZERO,
        }
    }

    /// The currently selected index.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Whether a structural reload is outstanding.
    pub fn needs_reload(&self) -> bool {
        self.needs_reload
    }

    /// Whether an interactive drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Whether while-scrolling interpolation is currently active.
    pub fn while_scrolling_enabled(&self) -> bool {
        self.while_scrolling_enabled
    }

    /// Whether the indicator still has to be locked to a resolved page.
    pub fn pending_lock(&self) -> bool {
        self.pending_lock
    }

    /// Metrics computed for the current index.
    pub fn metrics(&self) -> TransitionMetrics {
        self.metrics
    }

    /// Requests a structural reload.
    pub fn mark_needs_reload(&mut self) {
        self.needs_reload = true;
    }

    /// Acknowledges a completed reload.
    pub fn mark_reloaded(&mut self) {
        self.needs_reload = false;
    }

    /// Moves the selection to `index`. Callers are responsible for refreshing
    /// the metrics afterwards; stale metrics must not survive this change.
    pub fn set_current_index(&mut self, index: usize) {
        self.current_index = index;
    }

    /// Replaces the metrics for the current index.
    pub fn set_metrics(&mut self, metrics: TransitionMetrics) {
        self.metrics = metrics;
    }

    /// Starts or ends an interactive drag.
    pub fn set_dragging(&mut self, dragging: bool) {
        self.is_dragging = dragging;
    }

    /// Enables or disables while-scrolling interpolation.
    pub fn set_while_scrolling_enabled(&mut self, enabled: bool) {
        self.while_scrolling_enabled = enabled;
    }

    /// Arms the pending indicator lock.
    pub fn set_pending_lock(&mut self, pending: bool) {
        self.pending_lock = pending;
    }

    /// Consumes the pending lock, returning whether one was armed.
    pub fn take_pending_lock(&mut self) -> bool {
        std::mem::take(&mut self.pending_lock)
    }
}

impl Default for SegmentState {
    fn default() -> Self {
        Self::new()
    }
}
