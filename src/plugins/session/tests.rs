use bevy::prelude::*;

use super::{Flavor, Session, SessionState};
use crate::common::test_utils::{run_system_once, sim_world};
use crate::common::tunables::Tunables;
use crate::plugins::enemies::{EnemyPool, MAX_ENEMIES};
use crate::plugins::player::Player;

fn world_with_session() -> World {
    let mut world = sim_world();
    world.init_resource::<Session>();
    world.init_resource::<Player>();
    world.init_resource::<EnemyPool>();
    world
}

#[test]
fn mana_wraps_with_period_and_is_periodic() {
    let mut session = Session::default();
    let mut seen = Vec::new();
    for _ in 0..12_000 {
        session.tick_mana(6000);
        seen.push(session.mana);
    }
    assert_eq!(seen[5998], 5999);
    assert_eq!(seen[5999], 0);
    assert_eq!(seen[6000], 1);
    assert!(seen[..6000].iter().zip(&seen[6000..]).all(|(a, b)| a == b));
}

#[test]
fn zero_mana_blocks_fire() {
    let mut session = Session::default();
    assert!(!session.can_fire());
    session.tick_mana(6000);
    assert!(session.can_fire());
}

#[test]
fn flavor_scales_homing_and_picks_message() {
    let t = Tunables::default();
    let factors: Vec<f32> = (0..=2).map(|r| Flavor::new(r).homing_factor(&t)).collect();
    for (got, want) in factors.iter().zip([0.005, 0.01, 0.015]) {
        assert!((got - want).abs() < 1e-6);
    }
    assert_eq!(Flavor::new(2).homing_offset(&t), 100.0);
    assert_eq!(Flavor::new(0).ending_message(), "You Lost!");
    assert_eq!(Flavor::new(1).ending_message(), "Nice Try!");
    assert_eq!(Flavor::new(9).ending_message(), "Try Again?");
}

#[test]
fn tick_mana_system_advances_counter() {
    let mut world = world_with_session();
    world.resource_mut::<Session>().mana = 5999;

    run_system_once(&mut world, super::tick_mana);

    assert_eq!(world.resource::<Session>().mana, 0);
}

#[test]
fn reset_clears_counters_and_regroups_enemies() {
    let mut world = world_with_session();
    {
        let mut s = world.resource_mut::<Session>();
        s.score = 700;
        s.mana = 42;
    }
    world.resource_mut::<Player>().position = Vec2::new(3.0, 4.0);

    run_system_once(&mut world, |mut state: SessionState| state.reset());

    let tunables = world.resource::<Tunables>().clone();
    let session = world.resource::<Session>();
    assert_eq!(session.score, 0);
    assert_eq!(session.mana, 0);
    assert!(session.flavor.get() <= Flavor::MAX);
    assert_eq!(world.resource::<Player>().position, tunables.player_spawn());

    let enemies = world.resource::<EnemyPool>();
    assert_eq!(enemies.active_count(), MAX_ENEMIES);
    for e in enemies.slots() {
        assert!((1180.0..=1280.0).contains(&e.position.x));
        assert!((620.0..=720.0).contains(&e.position.y));
    }
}

#[test]
fn begin_scatters_enemies_across_initial_region() {
    let mut world = world_with_session();

    run_system_once(&mut world, super::begin_session);

    let enemies = world.resource::<EnemyPool>();
    assert_eq!(enemies.active_count(), MAX_ENEMIES);
    for e in enemies.slots() {
        assert!((40.0..=1280.0).contains(&e.position.x));
        assert!((40.0..=720.0).contains(&e.position.y));
    }
}

#[test]
fn round_closes_on_the_tick_after_a_catch() {
    use super::RoundStatus;

    let mut round = RoundStatus::default();
    assert!(!round.is_live());

    round.open_tick();
    assert!(round.is_live());

    // The catching tick keeps running.
    round.catch();
    assert!(round.is_live());

    round.open_tick();
    assert!(!round.is_live());

    round.start();
    round.open_tick();
    assert!(round.is_live());
    assert!(!round.is_caught());
}
