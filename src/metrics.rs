//! Pure scroll math for the reading-progress bar.
//!
//! Everything here is plain arithmetic on pixel measurements so it can be
//! exercised without a window or a UI tree. The systems in [`crate::ui`]
//! re-measure on every tick and feed the results through these functions.

/// Fresh pixel measurements of the page, taken on every tick.
///
/// Nothing is cached between ticks; a new snapshot is built from the
/// current computed layout each time the bar is refreshed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMetrics {
    pub content_height: f32,
    pub viewport_height: f32,
    pub header_height: f32,
}

impl ViewportMetrics {
    /// Build a snapshot from raw measurements. Sizes are pixel extents,
    /// so negative inputs are treated as zero.
    pub fn new(content_height: f32, viewport_height: f32, header_height: f32) -> Self {
        Self {
            content_height: content_height.max(0.0),
            viewport_height: viewport_height.max(0.0),
            header_height: header_height.max(0.0),
        }
    }

    /// Total distance the reader can scroll through: the header plus the
    /// article content, minus what is already visible. Zero or negative
    /// when the whole page fits on screen.
    pub fn scrollable_range(&self) -> f32 {
        self.header_height + self.content_height - self.viewport_height
    }

    pub fn can_scroll(&self) -> bool {
        self.scrollable_range() > 0.0
    }
}

/// Normalized reading progress in `[0.0, 1.0]`.
///
/// A degenerate range (`scrollable_range <= 0`) means there is nothing to
/// scroll through, so the result is 0 rather than a division by zero.
/// Over-scrolled offsets clamp to 1.
pub fn compute_progress(offset_top: f32, scrollable_range: f32) -> f32 {
    if scrollable_range <= 0.0 {
        return 0.0;
    }
    (offset_top / scrollable_range).clamp(0.0, 1.0)
}

/// Clamp a scroll offset into the valid `[0, range]` window. Collapses to 0
/// when the range is degenerate.
pub fn clamp_scroll_offset(offset_top: f32, scrollable_range: f32) -> f32 {
    offset_top.clamp(0.0, scrollable_range.max(0.0))
}

/// Width of the indicator element, as a whole percentage.
pub fn indicator_percent(fraction: f32) -> f32 {
    (fraction * 100.0).round()
}
