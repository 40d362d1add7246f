//! Asset plugin (render-only): textures and the background clip.
//!
//! Handles are loaded once at startup and owned by `GameAssets` until the
//! app shuts down. A failed load is fatal: it is logged and the app exits
//! non-zero.

use bevy::asset::{LoadState, UntypedAssetId};
use bevy::prelude::*;

use crate::common::error::GameError;
use crate::common::state::Screen;
use crate::common::tunables::Tunables;
use crate::plugins::player::Player;

pub const FLOOR_PATH: &str = "dungeon.png";
pub const ENEMY_PATH: &str = "spike-ball.png";
pub const WIZARD_PATH: &str = "wizard_idle.png";
pub const MUSIC_PATH: &str = "wizzy.mp3";

#[derive(Resource, Debug, Clone)]
pub struct GameAssets {
    pub floor: Handle<Image>,
    pub enemy: Handle<Image>,
    pub wizard: Handle<Image>,
    pub music: Handle<AudioSource>,
}

impl GameAssets {
    fn tracked(&self) -> [(&'static str, UntypedAssetId); 4] {
        [
            (FLOOR_PATH, self.floor.id().untyped()),
            (ENEMY_PATH, self.enemy.id().untyped()),
            (WIZARD_PATH, self.wizard.id().untyped()),
            (MUSIC_PATH, self.music.id().untyped()),
        ]
    }
}

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, load_assets)
        .add_systems(Update, (watch_load_failures, measure_player_sheet));
}

pub fn load_assets(mut commands: Commands, server: Res<AssetServer>) {
    commands.insert_resource(GameAssets {
        floor: server.load(FLOOR_PATH),
        enemy: server.load(ENEMY_PATH),
        wizard: server.load(WIZARD_PATH),
        music: server.load(MUSIC_PATH),
    });
    info!("loading assets");
}

/// Map a load state to a fatal error, if it is one.
pub fn load_failure(path: &str, state: Option<&LoadState>) -> Option<GameError> {
    match state {
        Some(LoadState::Failed(err)) => Some(GameError::AssetLoad {
            path: path.to_string(),
            reason: err.to_string(),
        }),
        _ => None,
    }
}

fn watch_load_failures(
    server: Res<AssetServer>,
    assets: Option<Res<GameAssets>>,
    mut exit: MessageWriter<AppExit>,
    mut reported: Local<bool>,
) {
    let Some(assets) = assets else {
        return;
    };
    if *reported {
        return;
    }

    for (path, id) in assets.tracked() {
        let state = server.get_load_state(id);
        if let Some(err) = load_failure(path, state.as_ref()) {
            error!("{err}");
            exit.write(AppExit::error());
            *reported = true;
            return;
        }
    }
}

/// Once the player sheet is in, centre the spawn on its real frame size.
/// A player still waiting on Logo or Title moves to the new spawn point.
fn measure_player_sheet(
    assets: Option<Res<GameAssets>>,
    images: Res<Assets<Image>>,
    screen: Res<State<Screen>>,
    mut tunables: ResMut<Tunables>,
    mut player: ResMut<Player>,
) {
    let Some(assets) = assets else {
        return;
    };
    let Some(sheet) = images.get(&assets.wizard) else {
        return;
    };

    let frame = tunables.sheet_frame(sheet.size());
    if frame == tunables.player_frame {
        return;
    }
    tunables.player_frame = frame;
    debug!("player frame measured at {frame}");

    if matches!(screen.get(), Screen::Logo | Screen::Title) {
        player.respawn(tunables.player_spawn());
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use bevy::asset::io::AssetReaderError;
    use bevy::asset::{AssetLoadError, LoadState, RenderAssetUsages};
    use bevy::prelude::*;
    use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

    use super::{GameAssets, load_failure};
    use crate::common::error::GameError;
    use crate::common::state::Screen;
    use crate::common::test_utils::{run_system_once, sim_world};
    use crate::common::tunables::Tunables;
    use crate::plugins::player::Player;

    fn world_with_sheet(width: u32, height: u32, screen: Screen) -> World {
        let mut world = sim_world();
        world.init_resource::<Assets<Image>>();
        let sheet = Image::new_fill(
            Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            TextureDimension::D2,
            &[255, 255, 255, 255],
            TextureFormat::Rgba8UnormSrgb,
            RenderAssetUsages::default(),
        );
        let wizard = world.resource_mut::<Assets<Image>>().add(sheet);
        world.insert_resource(GameAssets {
            floor: Handle::default(),
            enemy: Handle::default(),
            wizard,
            music: Handle::default(),
        });
        world.insert_resource(State::new(screen));
        let spawn = world.resource::<Tunables>().player_spawn();
        world.insert_resource(Player { position: spawn, ..default() });
        world
    }

    #[test]
    fn loaded_sheet_moves_a_waiting_player() {
        let mut world = world_with_sheet(500, 250, Screen::Title);

        run_system_once(&mut world, super::measure_player_sheet);

        assert_eq!(world.resource::<Tunables>().player_frame, Vec2::new(100.0, 50.0));
        assert_eq!(world.resource::<Player>().position, Vec2::new(590.0, 335.0));
    }

    #[test]
    fn loaded_sheet_leaves_a_player_in_play() {
        let mut world = world_with_sheet(500, 250, Screen::Gameplay);
        let before = world.resource::<Player>().position;

        run_system_once(&mut world, super::measure_player_sheet);

        assert_eq!(world.resource::<Tunables>().player_frame, Vec2::new(100.0, 50.0));
        assert_eq!(world.resource::<Player>().position, before);
    }

    #[test]
    fn pending_and_loaded_assets_are_not_failures() {
        assert!(load_failure("dungeon.png", None).is_none());
        assert!(load_failure("dungeon.png", Some(&LoadState::Loading)).is_none());
        assert!(load_failure("dungeon.png", Some(&LoadState::Loaded)).is_none());
        assert!(load_failure("dungeon.png", Some(&LoadState::NotLoaded)).is_none());
    }

    #[test]
    fn failed_load_is_an_asset_error_naming_the_path() {
        let cause = AssetLoadError::from(AssetReaderError::NotFound(PathBuf::from("wizzy.mp3")));
        let state = LoadState::Failed(Arc::new(cause));

        match load_failure("wizzy.mp3", Some(&state)) {
            Some(GameError::AssetLoad { path, reason }) => {
                assert_eq!(path, "wizzy.mp3");
                assert!(!reason.is_empty());
            }
            other => panic!("expected an asset error, got {other:?}"),
        }
    }
}
