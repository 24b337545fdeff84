use bevy::prelude::*;

use crate::metrics::ViewportMetrics;
use crate::tracker::{ScrollHost, refresh};
use crate::ui::components::{ArticleBody, PageHeader, PageViewport, ProgressBarFill};

/// [`ScrollHost`] over the queried UI nodes: measurements taken this frame
/// plus a borrow of the fill node to write the width into.
struct UiScrollHost<'a> {
    offset_top: f32,
    metrics: ViewportMetrics,
    fill: &'a mut Node,
}

impl ScrollHost for UiScrollHost<'_> {
    fn scroll_offset(&self) -> f32 {
        self.offset_top
    }

    fn viewport_metrics(&self) -> ViewportMetrics {
        self.metrics
    }

    fn set_indicator_width(&mut self, percent: f32) {
        self.fill.width = Val::Percent(percent);
    }
}

/// Re-measure the page and resize the fill to the reading progress.
///
/// Runs every frame, so the bar is correct on the first frame after layout
/// and simply recomputes through bursts of scroll and resize events. The
/// measurements are taken fresh each time; nothing is cached.
pub fn update_progress_bar(
    viewport_query: Query<(&ScrollPosition, &ComputedNode), With<PageViewport>>,
    header_query: Query<&ComputedNode, (With<PageHeader>, Without<PageViewport>)>,
    body_query: Query<
        &ComputedNode,
        (With<ArticleBody>, Without<PageViewport>, Without<PageHeader>),
    >,
    mut fill_query: Query<&mut Node, With<ProgressBarFill>>,
) {
    for (scroll_position, viewport_computed) in viewport_query.iter() {
        // Until the text is laid out there is no content height to measure
        let Ok(body_computed) = body_query.single() else {
            continue;
        };

        // Pages without a masthead just contribute zero header height
        let header_height = header_query
            .single()
            .map(|computed| computed.size().y)
            .unwrap_or(0.0);

        let metrics = ViewportMetrics::new(
            body_computed.content_size().y,
            viewport_computed.size().y,
            header_height,
        );

        for mut fill_node in fill_query.iter_mut() {
            let mut host = UiScrollHost {
                offset_top: scroll_position.y,
                metrics,
                fill: &mut *fill_node,
            };
            refresh(&mut host);
        }
    }
}
