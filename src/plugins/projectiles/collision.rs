use bevy::prelude::*;

use crate::common::geometry::circles_overlap;
use crate::common::rng::GameRng;
use crate::common::tunables::Tunables;
use crate::plugins::enemies::EnemyPool;
use crate::plugins::session::Session;

use super::pool::BulletPool;

/// Bullets × enemies, first match per bullet.
///
/// A hit releases the bullet, relocates the enemy anywhere in the respawn
/// region (it stays active) and awards points. Returns the number of hits.
pub fn resolve_hits(
    bullets: &mut BulletPool,
    enemies: &mut EnemyPool,
    session: &mut Session,
    rng: &mut GameRng,
    tunables: &Tunables,
) -> usize {
    let mut hits = 0;

    for b in 0..bullets.slots().len() {
        let bullet = bullets.slots()[b];
        if !bullet.active {
            continue;
        }

        let Some(e) = enemies.first_touching(
            bullet.position,
            tunables.bullet_radius,
            tunables.enemy_radius,
        ) else {
            continue;
        };

        bullets.release(b);
        enemies.respawn(e, rng, tunables.respawn);
        session.award_hit(tunables.score_per_hit);
        hits += 1;

        debug!("bullet {b} hit enemy {e}, score {}", session.score);
    }

    hits
}

pub fn resolve_bullet_hits(
    tunables: Res<Tunables>,
    mut bullets: ResMut<BulletPool>,
    mut enemies: ResMut<EnemyPool>,
    mut session: ResMut<Session>,
    mut rng: ResMut<GameRng>,
) {
    resolve_hits(&mut bullets, &mut enemies, &mut session, &mut rng, &tunables);
}
