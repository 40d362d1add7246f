use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::input::FrameInput;
use crate::plugins::player::Player;
use crate::plugins::session::Session;

use super::pool::BulletPool;

/// Fire one bullet per press edge.
///
/// Direction follows the held movement key at the moment of firing, one
/// axis only. Mana gates the shot but is not spent.
pub fn fire_on_request(
    tunables: Res<Tunables>,
    input: Res<FrameInput>,
    session: Res<Session>,
    player: Res<Player>,
    mut pool: ResMut<BulletPool>,
) {
    if !input.fire_pressed {
        return;
    }
    if !session.can_fire() {
        debug!("fire ignored: no mana");
        return;
    }

    let position = player.position + tunables.muzzle_offset;
    let velocity = input.aim_direction() * tunables.bullet_speed;

    match pool.acquire(position, velocity) {
        Some(slot) => debug!("bullet {slot} fired, velocity {velocity}"),
        None => debug!("fire ignored: bullet pool full"),
    }
}
