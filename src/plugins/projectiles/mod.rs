//! Projectiles plugin: a fixed pool of bullets.
//!
//! # Data flow
//! ```text
//!   FixedUpdate, Screen::Gameplay only
//!┌──────────────────────────────────────────────────────────────────┐
//!│  (A) Fire: fire_on_request                                       │
//!│      - reads: FrameInput (press edge + held direction), Session  │
//!│      - mutates: BulletPool (first free slot becomes active)      │
//!│                                                                  │
//!│  (B) Advance: advance_bullets                                    │
//!│      - mutates: BulletPool (position += velocity, off-arena      │
//!│                 slots released)                                  │
//!│                                                                  │
//!│  (C) Hits: resolve_bullet_hits                                   │
//!│      - mutates: BulletPool (hit bullet released)                 │
//!│      - mutates: EnemyPool (hit enemy relocated, stays active)    │
//!│      - mutates: Session.score                                    │
//!└──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Capacity is a gameplay decision, not an error: with no free slot a fire
//! request is dropped. Same for zero mana.

pub mod collision;
pub mod pool;
pub mod request;

use bevy::prelude::*;

use crate::common::state::GameplaySet;

pub struct ProjectilesPlugin;

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<pool::BulletPool>();

        app.add_systems(FixedUpdate, request::fire_on_request.in_set(GameplaySet::Fire))
            .add_systems(FixedUpdate, pool::advance_bullets.in_set(GameplaySet::Advance))
            .add_systems(
                FixedUpdate,
                collision::resolve_bullet_hits.in_set(GameplaySet::Hits),
            );
    }
}
