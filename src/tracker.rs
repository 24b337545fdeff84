//! Host-agnostic refresh pipeline.
//!
//! The bar itself lives in a UI tree, but the measure/compute/render cycle
//! only needs three capabilities from its host: the current scroll offset,
//! a fresh size snapshot, and a place to write the indicator width. Keeping
//! that behind [`ScrollHost`] lets the whole cycle run in tests with no
//! window at all; the Bevy side implements it over ECS queries.

use crate::metrics::{ViewportMetrics, compute_progress, indicator_percent};

/// What the tracker needs from the page hosting it.
pub trait ScrollHost {
    /// Current vertical scroll offset of the page, in pixels.
    fn scroll_offset(&self) -> f32;

    /// Freshly measured page sizes. Called once per refresh; hosts without
    /// a header report it as zero height.
    fn viewport_metrics(&self) -> ViewportMetrics;

    /// Set the indicator width to the given whole percentage. Write-only;
    /// the indicator element is the host's responsibility and this must
    /// not fail.
    fn set_indicator_width(&mut self, percent: f32);
}

/// Recompute the bar from the host's current state.
///
/// Measures, derives the scrollable range, clamps the progress fraction,
/// and renders it, in that order. Stateless and idempotent: calling it
/// twice with unchanged inputs renders the same percentage both times.
pub fn refresh<H: ScrollHost>(host: &mut H) {
    let metrics = host.viewport_metrics();
    let fraction = compute_progress(host.scroll_offset(), metrics.scrollable_range());
    host.set_indicator_width(indicator_percent(fraction));
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal host: fixed measurements, records every rendered width.
    struct FixedPage {
        offset_top: f32,
        metrics: ViewportMetrics,
        rendered: Vec<f32>,
    }

    impl FixedPage {
        fn new(offset_top: f32) -> Self {
            Self {
                offset_top,
                metrics: ViewportMetrics::new(2000.0, 800.0, 100.0),
                rendered: Vec::new(),
            }
        }
    }

    impl ScrollHost for FixedPage {
        fn scroll_offset(&self) -> f32 {
            self.offset_top
        }

        fn viewport_metrics(&self) -> ViewportMetrics {
            self.metrics
        }

        fn set_indicator_width(&mut self, percent: f32) {
            self.rendered.push(percent);
        }
    }

    #[test]
    fn renders_zero_percent_at_top() {
        let mut page = FixedPage::new(0.0);
        refresh(&mut page);
        assert_eq!(page.rendered, vec![0.0]);
    }

    #[test]
    fn renders_fifty_percent_at_midpoint() {
        let mut page = FixedPage::new(650.0);
        refresh(&mut page);
        assert_eq!(page.rendered, vec![50.0]);
    }

    #[test]
    fn renders_full_width_at_bottom() {
        let mut page = FixedPage::new(1300.0);
        refresh(&mut page);
        assert_eq!(page.rendered, vec![100.0]);
    }

    #[test]
    fn overscroll_renders_full_width() {
        let mut page = FixedPage::new(5000.0);
        refresh(&mut page);
        assert_eq!(page.rendered, vec![100.0]);
    }

    #[test]
    fn short_page_renders_zero_width() {
        let mut page = FixedPage::new(0.0);
        page.metrics = ViewportMetrics::new(400.0, 800.0, 0.0);
        refresh(&mut page);
        assert_eq!(page.rendered, vec![0.0]);
    }

    #[test]
    fn refresh_is_idempotent() {
        let mut page = FixedPage::new(650.0);
        refresh(&mut page);
        refresh(&mut page);
        assert_eq!(page.rendered, vec![50.0, 50.0]);
    }
}
