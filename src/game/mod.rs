//! Game composition root.
//!
//! Provides two public configuration functions:
//! - `configure_full`: includes DefaultPlugins (window/render/audio) + game plugins.
//! - `configure_headless`: minimal configuration for integration tests.

use bevy::prelude::*;
use bevy::window::WindowResolution;

use crate::common::state::Screen;
use crate::common::tunables::Tunables;
use crate::plugins;

/// Directory the textures and audio clip are served from.
pub const ASSET_DIR: &str = "resources";

/// Run the game until the window closes. The returned exit status is the
/// process exit code.
pub fn run() -> AppExit {
    App::new().add_plugins(configure_full).run()
}

/// Full configuration for `cargo run`.
pub fn configure_full(app: &mut App) {
    let arena = Tunables::default().arena;

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "S-Pull".into(),
                    resolution: WindowResolution::new(arena.x as u32, arena.y as u32),
                    resizable: false,
                    ..default()
                }),
                ..default()
            })
            .set(AssetPlugin {
                file_path: ASSET_DIR.into(),
                ..default()
            }),
    );

    configure_game(app);
    plugins::register_render(app);
}

/// Headless configuration for integration tests.
///
/// Notes:
/// - Do NOT add DefaultPlugins.
/// - Do NOT add render-only plugins (assets, audio, sprites).
pub fn configure_headless(app: &mut App) {
    configure_game(app);
}

/// Configuration shared by both full and headless apps.
fn configure_game(app: &mut App) {
    app.init_state::<Screen>();
    plugins::register_gameplay(app);
}
