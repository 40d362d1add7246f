//! Enemies plugin: a fixed pool of homing enemies.
//!
//! Enemies never die. A hit relocates the enemy and leaves it active, so the
//! pool always holds exactly `MAX_ENEMIES` live slots once a session has
//! started.
//!
//! Per tick, in `GameplaySet` order:
//! - Homing: every active enemy eases toward `player + offset` by the
//!   session's flavor factor, independently per axis.
//! - Contact: any enemy touching the player requests `Screen::Ending`.

use bevy::prelude::*;

use crate::common::geometry::circles_overlap;
use crate::common::rng::GameRng;
use crate::common::state::{GameplaySet, Screen};
use crate::common::tunables::Tunables;
use crate::plugins::player::Player;
use crate::plugins::session::{RoundStatus, Session};

pub const MAX_ENEMIES: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Enemy {
    /// Top-left of the enemy sprite, screen space.
    pub position: Vec2,
    pub active: bool,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct EnemyPool {
    slots: [Enemy; MAX_ENEMIES],
}

impl EnemyPool {
    pub fn slots(&self) -> &[Enemy; MAX_ENEMIES] {
        &self.slots
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut Enemy> {
        self.slots.get_mut(slot)
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|e| e.active).count()
    }

    /// Activate every slot at a fresh random point in `region`.
    pub fn scatter(&mut self, rng: &mut GameRng, region: IRect) {
        for enemy in &mut self.slots {
            *enemy = Enemy {
                position: rng.point_in(region),
                active: true,
            };
        }
    }

    /// Relocate one enemy, keeping it active.
    pub fn respawn(&mut self, slot: usize, rng: &mut GameRng, region: IRect) {
        let enemy = &mut self.slots[slot];
        enemy.position = rng.point_in(region);
        enemy.active = true;
    }

    pub fn home_towards(&mut self, target: Vec2, factor: f32) {
        for enemy in self.slots.iter_mut().filter(|e| e.active) {
            enemy.position = enemy.position.lerp(target, factor);
        }
    }

    /// First active enemy whose circle overlaps the given circle.
    pub fn first_touching(&self, center: Vec2, radius: f32, enemy_radius: f32) -> Option<usize> {
        self.slots
            .iter()
            .position(|e| e.active && circles_overlap(center, radius, e.position, enemy_radius))
    }
}

pub fn plugin(app: &mut App) {
    app.init_resource::<EnemyPool>()
        .add_systems(FixedUpdate, home_on_player.in_set(GameplaySet::Homing))
        .add_systems(FixedUpdate, check_player_contact.in_set(GameplaySet::Contact));
}

fn home_on_player(
    tunables: Res<Tunables>,
    session: Res<Session>,
    player: Res<Player>,
    mut enemies: ResMut<EnemyPool>,
) {
    let flavor = session.flavor;
    let target = player.position + Vec2::splat(flavor.homing_offset(&tunables));
    enemies.home_towards(target, flavor.homing_factor(&tunables));
}

fn check_player_contact(
    tunables: Res<Tunables>,
    player: Res<Player>,
    enemies: Res<EnemyPool>,
    session: Res<Session>,
    mut round: ResMut<RoundStatus>,
    mut next: ResMut<NextState<Screen>>,
) {
    let Some(slot) = enemies.first_touching(
        player.position,
        tunables.player_radius,
        tunables.enemy_radius,
    ) else {
        return;
    };

    debug!("enemy {slot} reached the player");
    info!("player caught, final score {}", session.score);
    round.catch();
    next.set(Screen::Ending);
}
