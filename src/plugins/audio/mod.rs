//! Audio plugin (render-only): the background clip plays once at startup.
//!
//! Gameplay events trigger no sounds.

use bevy::prelude::*;

use crate::plugins::assets::GameAssets;

pub fn plugin(app: &mut App) {
    app.add_systems(PostStartup, start_music);
}

fn start_music(mut commands: Commands, assets: Res<GameAssets>) {
    commands.spawn((
        Name::new("Music"),
        AudioPlayer::new(assets.music.clone()),
        PlaybackSettings::DESPAWN,
    ));
}
