//! Player plugin.
//!
//! Pipeline:
//! - Update: input plugin samples keys into `FrameInput`
//! - FixedUpdate (Clock): advance the sprite animation clock
//! - FixedUpdate (Movement): apply held directions to the position
//!
//! The player is a singleton resource rather than an entity; the render
//! plugin draws it from here.

use bevy::prelude::*;

use crate::common::{state::GameplaySet, tunables::Tunables};
use crate::plugins::input::FrameInput;

/// Frame clock for the idle sprite sheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpriteAnimation {
    frame: usize,
    elapsed: f32,
}

impl SpriteAnimation {
    #[inline]
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Accumulate `dt`; once a full interval has passed, step one frame and
    /// restart the accumulator from zero.
    pub fn advance(&mut self, dt: f32, interval: f32, frame_count: usize) {
        self.elapsed += dt;
        if self.elapsed >= interval {
            self.elapsed = 0.0;
            self.frame = (self.frame + 1) % frame_count;
        }
    }

    /// Column/row of the current frame on a sheet `columns` wide.
    pub fn sheet_cell(&self, columns: u32) -> UVec2 {
        let i = self.frame as u32;
        UVec2::new(i % columns, i / columns)
    }
}

#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct Player {
    /// Top-left of the sprite frame, screen space.
    pub position: Vec2,
    pub animation: SpriteAnimation,
}

impl Player {
    pub fn respawn(&mut self, at: Vec2) {
        self.position = at;
    }
}

pub fn plugin(app: &mut App) {
    app.init_resource::<Player>()
        .add_systems(FixedUpdate, animate.in_set(GameplaySet::Clock))
        .add_systems(FixedUpdate, apply_movement.in_set(GameplaySet::Movement));
}

fn animate(time: Res<Time>, tunables: Res<Tunables>, mut player: ResMut<Player>) {
    player.animation.advance(
        time.delta_secs(),
        tunables.animation_interval(),
        tunables.animation_frames,
    );
}

fn apply_movement(tunables: Res<Tunables>, input: Res<FrameInput>, mut player: ResMut<Player>) {
    player.position += input.move_axis() * tunables.player_speed;
}
