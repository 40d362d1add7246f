//! Feature plugins.

use bevy::prelude::*;

use crate::plugins::projectiles::ProjectilesPlugin;

pub mod core;
pub mod enemies;
pub mod input;
pub mod player;
pub mod projectiles;
pub mod screens;
pub mod session;

// Render-only
pub mod assets;
pub mod audio;
pub mod host;
pub mod render;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    input::plugin(app);
    session::plugin(app);
    player::plugin(app);
    enemies::plugin(app);
    screens::plugin(app);
    app.add_plugins(ProjectilesPlugin);
}

/// Register render-only plugins (requires DefaultPlugins: window, assets, audio).
pub fn register_render(app: &mut App) {
    assets::plugin(app);
    audio::plugin(app);
    host::plugin(app);
    render::plugin(app);
}
