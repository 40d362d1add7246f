//! Session plugin: score, mana and the per-session flavor value.
//!
//! A session starts once at startup and restarts whenever the ending screen
//! is confirmed. Bullets are not part of the session: slots that are live
//! when the player loses keep flying when the next round starts.
//!
//! A round is one stay on `Screen::Gameplay`. Once the player is caught the
//! round is closed from the next fixed tick on, even while the switch to
//! `Screen::Ending` is still pending. A frame that catches up several fixed
//! ticks therefore cannot keep scoring after the loss.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::common::rng::GameRng;
use crate::common::state::{GameplaySet, Screen, TickSet};
use crate::common::tunables::Tunables;
use crate::plugins::enemies::EnemyPool;
use crate::plugins::player::Player;

/// Messages shown on the ending screen, picked by the flavor value.
pub const ENDING_MESSAGES: [&str; 3] = ["You Lost!", "Nice Try!", "Try Again?"];

/// Random value in `0..=2` drawn once per session.
///
/// Scales enemy aggression and selects the ending message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flavor(u8);

impl Flavor {
    pub const MAX: u8 = 2;

    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Per-tick interpolation factor toward the homing target.
    pub fn homing_factor(self, tunables: &Tunables) -> f32 {
        tunables.homing_step * self.0 as f32 + tunables.homing_base
    }

    /// Offset added to both player coordinates to form the homing target.
    pub fn homing_offset(self, tunables: &Tunables) -> f32 {
        tunables.homing_offset * self.0 as f32
    }

    pub fn ending_message(self) -> &'static str {
        ENDING_MESSAGES[self.0 as usize]
    }
}

#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub score: u32,
    /// Frame counter gating fire. Firing does not spend it.
    pub mana: u32,
    pub flavor: Flavor,
}

impl Session {
    pub fn tick_mana(&mut self, period: u32) {
        self.mana = (self.mana + 1) % period;
    }

    #[inline]
    pub fn can_fire(&self) -> bool {
        self.mana > 0
    }

    pub fn award_hit(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }
}

/// Catch bookkeeping for the current round.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundStatus {
    caught: bool,
    live: bool,
}

impl RoundStatus {
    /// Fresh round; the first tick opens it.
    pub fn start(&mut self) {
        *self = Self::default();
    }

    /// Latch whether this tick may simulate. A catch closes the round from
    /// the following tick.
    pub fn open_tick(&mut self) {
        self.live = !self.caught;
    }

    pub fn catch(&mut self) {
        self.caught = true;
    }

    #[inline]
    pub fn is_caught(&self) -> bool {
        self.caught
    }

    #[inline]
    pub fn is_live(&self) -> bool {
        self.live
    }
}

/// Run condition for the gameplay tick.
pub fn round_live(round: Res<RoundStatus>) -> bool {
    round.is_live()
}

/// Everything a session start or reset writes.
#[derive(SystemParam)]
pub struct SessionState<'w> {
    tunables: Res<'w, Tunables>,
    rng: ResMut<'w, GameRng>,
    session: ResMut<'w, Session>,
    player: ResMut<'w, Player>,
    enemies: ResMut<'w, EnemyPool>,
}

impl SessionState<'_> {
    /// First session of the process.
    pub fn begin(&mut self) {
        let region = self.tunables.initial_spawn;
        self.restart(region);
        info!("session started (flavor {})", self.session.flavor.get());
    }

    /// Restart after a loss. Enemies regroup in the reset region.
    pub fn reset(&mut self) {
        let region = self.tunables.reset_spawn;
        self.restart(region);
        info!("session reset (flavor {})", self.session.flavor.get());
    }

    fn restart(&mut self, enemy_region: IRect) {
        *self.session = Session {
            score: 0,
            mana: 0,
            flavor: Flavor::new(self.rng.up_to(Flavor::MAX)),
        };
        self.player.respawn(self.tunables.player_spawn());
        self.enemies.scatter(&mut self.rng, enemy_region);
    }
}

pub fn plugin(app: &mut App) {
    app.init_resource::<Session>()
        .init_resource::<RoundStatus>()
        .add_systems(Startup, begin_session)
        .add_systems(OnEnter(Screen::Gameplay), start_round)
        .add_systems(
            FixedUpdate,
            open_tick
                .in_set(TickSet::Simulate)
                .before(GameplaySet::Clock)
                .run_if(in_state(Screen::Gameplay)),
        )
        .add_systems(FixedUpdate, tick_mana.in_set(GameplaySet::Clock));
}

fn begin_session(mut state: SessionState) {
    state.begin();
}

fn start_round(mut round: ResMut<RoundStatus>) {
    round.start();
}

fn open_tick(mut round: ResMut<RoundStatus>) {
    round.open_tick();
}

fn tick_mana(tunables: Res<Tunables>, mut session: ResMut<Session>) {
    session.tick_mana(tunables.mana_period);
}

#[cfg(test)]
mod tests;
