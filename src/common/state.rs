//! Global screen state machine and the fixed-tick ordering.

use bevy::prelude::*;

/// Top-level screen. LOGO is visited once; the rest cycle forever.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum Screen {
    #[default]
    Logo,
    Title,
    Gameplay,
    Ending,
}

/// Coarse ordering of one fixed tick.
///
/// Everything that reads latched input runs in `Simulate`; the latches are
/// cleared in `ConsumeInput` afterwards.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickSet {
    Simulate,
    ConsumeInput,
}

/// Gameplay frame update, in execution order.
///
/// ```text
/// Clock -> Movement -> Homing -> Contact -> Fire -> Advance -> Hits
/// ```
///
/// `Contact` may request `Screen::Ending`; the transition is applied at the
/// next state-transition point, so the remaining sets of the tick still run.
/// Further ticks before that point skip the whole chain (see
/// `session::RoundStatus`).
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameplaySet {
    Clock,
    Movement,
    Homing,
    Contact,
    Fire,
    Advance,
    Hits,
}
