use bevy::prelude::*;

use crate::article::Article;
use crate::ui::components::{
    ArticleBody, PageHeader, PageViewport, ProgressBarConfig, ProgressBarFill, ProgressBarTrack,
};

/// Spawn the progress bar pinned to the top of the window. The fill starts
/// at 0% and is resized by `update_progress_bar` from the first frame on.
pub fn setup_progress_bar(mut commands: Commands, config: Res<ProgressBarConfig>) {
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(0.0),
            left: Val::Px(0.0),
            width: Val::Percent(100.0),
            height: Val::Px(config.height),
            ..default()
        },
        BackgroundColor(config.track_color),
        // Keep the bar above the scrolling page
        GlobalZIndex(1),
        ProgressBarTrack,
        children![(
            Node {
                width: Val::Percent(0.0),
                height: Val::Percent(100.0),
                ..default()
            },
            BackgroundColor(config.fill_color),
            ProgressBarFill,
        )],
    ));
}

/// Spawn the demo page: a window-sized scroll viewport holding a masthead
/// header followed by the article text.
pub fn setup_article_page(mut commands: Commands, article: Res<Article>) {
    commands.spawn((
        Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            overflow: Overflow::scroll_y(),
            ..default()
        },
        BackgroundColor(Color::srgb(0.98, 0.97, 0.95)),
        ScrollPosition::default(),
        PageViewport,
        children![
            // Masthead: scrolls away with the page, so its height counts
            // toward the scrollable range
            (
                Node {
                    width: Val::Percent(100.0),
                    min_height: Val::Px(100.0),
                    padding: UiRect::all(Val::Px(24.0)),
                    flex_direction: FlexDirection::Column,
                    justify_content: JustifyContent::Center,
                    ..default()
                },
                BackgroundColor(Color::srgb(0.12, 0.12, 0.16)),
                PageHeader,
                children![(
                    Text::new(article.title.clone()),
                    TextFont {
                        font_size: 28.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.95, 0.95, 0.9)),
                )],
            ),
            // Article column
            (
                Text::new(article.body.clone()),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.15, 0.15, 0.15)),
                ArticleBody,
                Node {
                    max_width: Val::Px(720.0),
                    margin: UiRect::axes(Val::Auto, Val::Px(32.0)),
                    ..default()
                },
            ),
        ],
    ));
}
