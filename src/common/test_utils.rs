//! Test helpers.
//!
//! `World::run_system_once` runs a system without building a schedule.
//! Commands are deferred, so we flush before returning.

use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;

use crate::common::{rng::GameRng, tunables::Tunables};

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// World with default tunables and a seeded RNG.
pub fn sim_world() -> World {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.insert_resource(GameRng::seeded(42));
    world
}
