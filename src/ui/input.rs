use bevy::prelude::*;

use crate::metrics::{ViewportMetrics, clamp_scroll_offset};
use crate::ui::components::{ArticleBody, PageHeader, PageViewport};

/// Pixels scrolled per wheel notch.
const SCROLL_LINE_HEIGHT: f32 = 32.0;

pub fn handle_mouse_wheel_scroll(
    mut scroll_events: MessageReader<bevy::input::mouse::MouseWheel>,
    mut viewport_query: Query<(&mut ScrollPosition, &ComputedNode), With<PageViewport>>,
    header_query: Query<&ComputedNode, (With<PageHeader>, Without<PageViewport>)>,
    body_query: Query<
        &ComputedNode,
        (With<ArticleBody>, Without<PageViewport>, Without<PageHeader>),
    >,
) {
    for event in scroll_events.read() {
        for (mut scroll_position, viewport_computed) in viewport_query.iter_mut() {
            let Ok(body_computed) = body_query.single() else {
                continue;
            };
            let header_height = header_query
                .single()
                .map(|computed| computed.size().y)
                .unwrap_or(0.0);

            let metrics = ViewportMetrics::new(
                body_computed.content_size().y,
                viewport_computed.size().y,
                header_height,
            );

            if metrics.can_scroll() {
                let new_offset = scroll_position.y - event.y * SCROLL_LINE_HEIGHT;
                scroll_position.y =
                    clamp_scroll_offset(new_offset, metrics.scrollable_range());
            }
        }
    }
}

/// Keep the stored offset inside the valid range even when the window was
/// resized or the content reflowed since the last scroll.
pub fn clamp_scroll_position(
    mut viewport_query: Query<(&mut ScrollPosition, &ComputedNode), With<PageViewport>>,
    header_query: Query<&ComputedNode, (With<PageHeader>, Without<PageViewport>)>,
    body_query: Query<
        &ComputedNode,
        (With<ArticleBody>, Without<PageViewport>, Without<PageHeader>),
    >,
) {
    for (mut scroll_position, viewport_computed) in viewport_query.iter_mut() {
        let Ok(body_computed) = body_query.single() else {
            continue;
        };
        let header_height = header_query
            .single()
            .map(|computed| computed.size().y)
            .unwrap_or(0.0);

        let metrics = ViewportMetrics::new(
            body_computed.content_size().y,
            viewport_computed.size().y,
            header_height,
        );

        scroll_position.y =
            clamp_scroll_offset(scroll_position.y, metrics.scrollable_range());
    }
}
