use bevy::prelude::*;

use crate::common::geometry::outside_arena;
use crate::common::tunables::Tunables;

pub const MAX_BULLETS: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bullet {
    /// Centre, screen space.
    pub position: Vec2,
    /// Pixels per tick.
    pub velocity: Vec2,
    pub active: bool,
}

/// Slot-indexed bullet storage. Slots are reused, never allocated.
#[derive(Resource, Debug, Clone, Default)]
pub struct BulletPool {
    slots: [Bullet; MAX_BULLETS],
}

impl BulletPool {
    pub fn slots(&self) -> &[Bullet; MAX_BULLETS] {
        &self.slots
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|b| b.active).count()
    }

    /// Activate the first free slot (linear scan, no wraparound).
    pub fn acquire(&mut self, position: Vec2, velocity: Vec2) -> Option<usize> {
        let slot = self.slots.iter().position(|b| !b.active)?;
        self.slots[slot] = Bullet {
            position,
            velocity,
            active: true,
        };
        Some(slot)
    }

    pub fn release(&mut self, slot: usize) {
        self.slots[slot].active = false;
    }

    /// Move every active bullet one tick; release those that left the arena.
    pub fn advance(&mut self, arena: Vec2) {
        for bullet in self.slots.iter_mut().filter(|b| b.active) {
            bullet.position += bullet.velocity;
            if outside_arena(bullet.position, arena) {
                bullet.active = false;
            }
        }
    }
}

pub fn advance_bullets(tunables: Res<Tunables>, mut pool: ResMut<BulletPool>) {
    pool.advance(tunables.arena);
}
