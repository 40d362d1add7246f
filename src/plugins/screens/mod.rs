//! Screen state machine.
//!
//! ```text
//! Logo --(logo_frames elapsed)--> Title --(confirm)--> Gameplay
//!                                   ^                     |
//!                                   |               (enemy contact)
//!                                   |                     v
//!                                   +--(confirm, reset)-- Ending
//! ```
//!
//! Timers and confirms are evaluated on the fixed tick. Gameplay -> Ending
//! lives in the enemies plugin, next to the contact test that drives it.

use bevy::prelude::*;
use bevy::state::state::StateTransitionEvent;

use crate::common::state::{Screen, TickSet};
use crate::common::tunables::Tunables;
use crate::plugins::input::FrameInput;
use crate::plugins::session::SessionState;

/// Fixed ticks spent on the logo screen.
#[derive(Resource, Debug, Default)]
pub struct LogoTimer {
    pub frames: u32,
}

pub fn plugin(app: &mut App) {
    app.init_resource::<LogoTimer>()
        .add_systems(
            FixedUpdate,
            (
                tick_logo.run_if(in_state(Screen::Logo)),
                confirm_title.run_if(in_state(Screen::Title)),
                confirm_ending.run_if(in_state(Screen::Ending)),
            )
                .in_set(TickSet::Simulate),
        )
        .add_systems(Update, log_transitions);
}

fn tick_logo(
    tunables: Res<Tunables>,
    mut timer: ResMut<LogoTimer>,
    mut next: ResMut<NextState<Screen>>,
) {
    timer.frames += 1;
    if timer.frames > tunables.logo_frames {
        next.set(Screen::Title);
    }
}

fn confirm_title(input: Res<FrameInput>, mut next: ResMut<NextState<Screen>>) {
    if input.confirm_pressed {
        next.set(Screen::Gameplay);
    }
}

fn confirm_ending(
    input: Res<FrameInput>,
    mut state: SessionState,
    mut next: ResMut<NextState<Screen>>,
) {
    if input.confirm_pressed {
        state.reset();
        next.set(Screen::Title);
    }
}

fn log_transitions(mut transitions: MessageReader<StateTransitionEvent<Screen>>) {
    for t in transitions.read() {
        info!("screen {:?} -> {:?}", t.exited, t.entered);
    }
}
