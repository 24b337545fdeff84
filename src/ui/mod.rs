pub mod components;
pub mod input;
pub mod progress;
pub mod setup;

use bevy::prelude::*;

pub use components::{PageViewport, ProgressBarConfig, ProgressBarFill};

/// Scroll handling runs before the bar refresh so the rendered width
/// reflects this frame's offset, not last frame's.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageSet {
    Scroll,
    Refresh,
}

/// The progress bar itself: the track/fill pair plus the per-frame refresh.
pub struct ReadingProgressPlugin;

impl Plugin for ReadingProgressPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ProgressBarConfig>()
            .configure_sets(Update, PageSet::Refresh.after(PageSet::Scroll))
            .add_systems(Startup, setup::setup_progress_bar)
            .add_systems(
                Update,
                progress::update_progress_bar.in_set(PageSet::Refresh),
            );
    }
}

/// The page hosting the bar: header, scrollable article, and scroll input.
pub struct ArticleViewPlugin;

impl Plugin for ArticleViewPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<crate::article::Article>()
            .add_systems(Startup, setup::setup_article_page)
            .add_systems(
                Update,
                (
                    input::handle_mouse_wheel_scroll,
                    input::clamp_scroll_position,
                )
                    .chain()
                    .in_set(PageSet::Scroll),
            );
    }
}
