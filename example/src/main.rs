//! Drives a headless segmented pager through a full lifecycle: reload, tab
//! selection, and an interactive swipe with while-scrolling indicator
//! tracking. Run with `RUST_LOG=segkit=debug` to see the core's own logging.

use segkit::{
    Dp, IndicatorAnimation, IndicatorConfig, Px, ScrollSample, SegmentConfig, SegmentError,
    SegmentedPager, TabConfig,
};
use tracing::info;

const VIEWPORT_WIDTH: Px = Px::new(360);

fn main() -> Result<(), SegmentError> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,segkit=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = SegmentConfig::default()
        .tab(
            TabConfig::default()
                .padding(Dp(12.0))
                .leading_padding(Dp(16.0))
                .trailing_padding(Dp(16.0)),
        )
        .indicator(
            IndicatorConfig::default().animation_mode(IndicatorAnimation::WhileScrolling),
        );
    let mut pager = SegmentedPager::new(config);

    // Intrinsic label widths for four tabs, as a host's text measurement
    // would report them.
    let layout = pager.reload(&[Px::new(52), Px::new(74), Px::new(60), Px::new(88)], VIEWPORT_WIDTH, |_| {
        Px::ZERO
    })?;
    info!(
        tabs = layout.tabs.len(),
        content_width = layout.content_width.raw(),
        "strip laid out"
    );
    for tab in pager.tabs() {
        info!(index = tab.index, frame = ?tab.frame, "tab placed");
    }
    info!(frame = ?pager.indicator_frame(), "indicator at rest");

    // Tap the third tab.
    if let Some(update) = pager.select(2, true) {
        info!(?update.frame, ?update.selection, ?update.animate, "tab tapped");
    }

    // Swipe back toward the second tab, sampling the page container's offset
    // as it moves from center toward the previous page.
    pager.begin_drag();
    for offset in [330, 280, 210, 120, 30] {
        if let Some(update) = pager.sample_scroll(ScrollSample::new(Px::new(offset), VIEWPORT_WIDTH)) {
            info!(
                offset,
                progress = update.progress,
                target = update.target_index,
                frame = ?update.indicator,
                "drag sample"
            );
        }
    }
    if let Some(lock) = pager.end_drag(false, 1) {
        info!(?lock.frame, ?lock.selection, "indicator locked");
    }

    info!(
        index = pager.current_index(),
        scroll_target = pager.tab_strip_scroll_target(VIEWPORT_WIDTH).raw(),
        "lifecycle complete"
    );
    Ok(())
}
