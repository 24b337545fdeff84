use bevy::prelude::*;

// Page markers
#[derive(Component)]
pub struct PageViewport;

#[derive(Component)]
pub struct PageHeader;

#[derive(Component)]
pub struct ArticleBody;

// Progress bar markers
#[derive(Component)]
pub struct ProgressBarTrack;

#[derive(Component)]
pub struct ProgressBarFill;

/// Appearance of the progress bar. The fill width is owned by the update
/// system; this only covers the static parts.
#[derive(Resource, Debug, Clone)]
pub struct ProgressBarConfig {
    pub height: f32,
    pub fill_color: Color,
    pub track_color: Color,
}

impl Default for ProgressBarConfig {
    fn default() -> Self {
        Self {
            height: 4.0,
            fill_color: Color::srgb(0.9, 0.35, 0.2),
            track_color: Color::srgba(0.15, 0.15, 0.2, 0.6),
        }
    }
}
