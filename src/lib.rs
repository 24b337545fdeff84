//! Reading-progress bar for a scrollable article page.
//!
//! The pure scroll math lives in [`metrics`], the host-agnostic refresh
//! cycle in [`tracker`], and the Bevy UI wiring in [`ui`].

use crate::ui::{ArticleViewPlugin, ReadingProgressPlugin};
use bevy::prelude::*;

pub mod article;
pub mod metrics;
pub mod tracker;
pub mod ui;

/// Plugin group for the demo: the article page plus the bar tracking it.
///
/// The bar only needs [`ReadingProgressPlugin`]; an application with its
/// own scrollable page can add that alone and tag its nodes with the
/// markers from [`ui::components`].
pub struct ReaderPlugins;

impl PluginGroup for ReaderPlugins {
    fn build(self) -> bevy::app::PluginGroupBuilder {
        bevy::app::PluginGroupBuilder::start::<Self>()
            .add(ArticleViewPlugin)
            .add(ReadingProgressPlugin)
    }
}

/// Build the demo app around a given article.
pub fn app(article: article::Article) -> App {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: article.title.clone(),
            ..default()
        }),
        ..default()
    }))
    .insert_resource(article)
    .add_plugins(ReaderPlugins);

    #[cfg(feature = "debug")]
    app.add_plugins((
        bevy_inspector_egui::bevy_egui::EguiPlugin::default(),
        bevy_inspector_egui::quick::WorldInspectorPlugin::new(),
    ));

    app
}
