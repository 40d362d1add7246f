//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` + `StatesPlugin` provide the ECS runtime and states.
//! - `s_pull::game::configure_headless` installs the simulation plugins.
//! - Virtual time is frozen, so `app.update()` never runs a fixed tick on its
//!   own. Tests run `FixedUpdate` explicitly and use `app.update()` to apply
//!   state transitions.
#![allow(dead_code)]

use std::time::Duration;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use s_pull::common::rng::GameRng;
use s_pull::common::state::Screen;
use s_pull::common::tunables::Tunables;
use s_pull::plugins::enemies::{EnemyPool, MAX_ENEMIES};
use s_pull::plugins::input::FrameInput;

pub fn app_headless() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));

    s_pull::game::configure_headless(&mut app);

    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::ZERO));
    app.insert_resource(GameRng::seeded(7));

    // Startup: session begins, Logo is entered.
    app.update();
    app
}

/// One fixed tick, without applying state transitions.
pub fn tick(app: &mut App) {
    app.world_mut().run_schedule(FixedUpdate);
}

/// One fixed tick followed by a frame, so requested transitions land.
pub fn step(app: &mut App) {
    tick(app);
    app.update();
}

pub fn screen(app: &App) -> Screen {
    *app.world().resource::<State<Screen>>().get()
}

pub fn input(app: &mut App) -> Mut<'_, FrameInput> {
    app.world_mut().resource_mut::<FrameInput>()
}

pub fn tunables(app: &App) -> Tunables {
    app.world().resource::<Tunables>().clone()
}

/// Logo -> Title.
pub fn skip_logo(app: &mut App) {
    let frames = tunables(app).logo_frames;
    for _ in 0..=frames {
        tick(app);
    }
    app.update();
    assert_eq!(screen(app), Screen::Title);
}

/// Move every enemy to the far right edge, well away from the spawn point.
pub fn park_enemies(app: &mut App) {
    let mut pool = app.world_mut().resource_mut::<EnemyPool>();
    for slot in 0..MAX_ENEMIES {
        let enemy = pool.get_mut(slot).unwrap();
        enemy.position = Vec2::new(1270.0, 40.0 + slot as f32 * 160.0);
    }
}

/// Title -> Gameplay with enemies parked.
pub fn start_round(app: &mut App) {
    park_enemies(app);
    input(app).confirm_pressed = true;
    step(app);
    assert_eq!(screen(app), Screen::Gameplay);
}

/// Fresh app sitting on the first gameplay frame.
pub fn app_in_gameplay() -> App {
    let mut app = app_headless();
    skip_logo(&mut app);
    start_round(&mut app);
    app
}
