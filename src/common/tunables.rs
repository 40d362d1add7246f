//! Tunable gameplay constants.
//!
//! All distances are in screen pixels (origin top-left, y down) and all
//! speeds are per fixed tick.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    /// Arena (and window) size.
    pub arena: Vec2,
    pub tick_hz: f64,

    pub player_speed: f32,
    /// One player sprite-sheet frame; centres the spawn point. Nominal until
    /// the sheet has loaded, then measured from it.
    pub player_frame: Vec2,
    pub player_radius: f32,

    pub enemy_radius: f32,
    pub homing_base: f32,
    pub homing_step: f32,
    pub homing_offset: f32,

    pub bullet_speed: f32,
    pub bullet_radius: f32,
    /// Bullet spawn point relative to the player position.
    pub muzzle_offset: Vec2,

    pub logo_frames: u32,
    pub mana_period: u32,
    pub score_per_hit: u32,

    pub animation_frames: usize,
    pub animation_fps: f32,
    pub sheet_columns: u32,
    pub sheet_rows: u32,

    /// Enemy spawn regions, inclusive integer bounds.
    pub initial_spawn: IRect,
    pub reset_spawn: IRect,
    pub respawn: IRect,
}

impl Default for Tunables {
    fn default() -> Self {
        let (w, h) = (1280, 720);
        Self {
            arena: Vec2::new(w as f32, h as f32),
            tick_hz: 60.0,
            player_speed: 5.0,
            player_frame: Vec2::splat(160.0),
            player_radius: 15.0,
            enemy_radius: 15.0,
            homing_base: 0.005,
            homing_step: 0.005,
            homing_offset: 50.0,
            bullet_speed: 5.0,
            bullet_radius: 5.0,
            muzzle_offset: Vec2::new(120.0, 45.0),
            logo_frames: 120,
            mana_period: 6000,
            score_per_hit: 100,
            animation_frames: 5 * 5,
            animation_fps: 12.0,
            sheet_columns: 5,
            sheet_rows: 5,
            initial_spawn: IRect::new(40, 40, w, h),
            reset_spawn: IRect::new(w - 100, h - 100, w, h),
            respawn: IRect::new(0, 0, w, h),
        }
    }
}

impl Tunables {
    /// Player spawn point: the nominal frame centred in the arena.
    pub fn player_spawn(&self) -> Vec2 {
        (self.arena / 2.0).floor() - (self.player_frame / 2.0).floor()
    }

    /// One cell of the player sheet, in whole pixels.
    pub fn sheet_frame(&self, sheet: UVec2) -> Vec2 {
        (sheet / UVec2::new(self.sheet_columns, self.sheet_rows)).as_vec2()
    }

    /// Seconds between animation frames.
    pub fn animation_interval(&self) -> f32 {
        1.0 / self.animation_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_centres_the_frame() {
        let t = Tunables::default();
        assert_eq!(t.player_spawn(), Vec2::new(560.0, 280.0));
    }

    #[test]
    fn sheet_frame_truncates_like_integer_division() {
        let t = Tunables::default();
        assert_eq!(t.sheet_frame(UVec2::new(804, 603)), Vec2::new(160.0, 120.0));
    }
}
