//! Core plugin: shared resources, fixed timestep and tick ordering.

use bevy::prelude::*;

use crate::common::rng::GameRng;
use crate::common::state::{GameplaySet, Screen, TickSet};
use crate::common::tunables::Tunables;
use crate::plugins::session::round_live;

pub fn plugin(app: &mut App) {
    let tunables = Tunables::default();
    app.insert_resource(Time::<Fixed>::from_hz(tunables.tick_hz));
    app.insert_resource(tunables);
    app.insert_resource(GameRng::from_entropy());
    app.insert_resource(ClearColor(Color::BLACK));

    app.configure_sets(FixedUpdate, (TickSet::Simulate, TickSet::ConsumeInput).chain());
    app.configure_sets(
        FixedUpdate,
        (
            GameplaySet::Clock,
            GameplaySet::Movement,
            GameplaySet::Homing,
            GameplaySet::Contact,
            GameplaySet::Fire,
            GameplaySet::Advance,
            GameplaySet::Hits,
        )
            .chain()
            .in_set(TickSet::Simulate)
            .run_if(in_state(Screen::Gameplay).and(round_live)),
    );
}
