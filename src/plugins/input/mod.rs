//! Input plugin.
//!
//! Pipeline:
//! - Update: sample keyboard/mouse/touch into `FrameInput`
//! - FixedUpdate: simulation reads `FrameInput`, then `consume_edges` clears
//!   the press latches
//!
//! Held keys are level state and are overwritten every frame. Presses are
//! edges: they are OR-ed in and stay latched until a fixed tick has seen
//! them, so a press is neither dropped when a frame runs no fixed tick nor
//! replayed when it runs several.

use bevy::input::touch::Touches;
use bevy::prelude::*;

use crate::common::state::TickSet;

#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct FrameInput {
    pub right: bool,
    pub left: bool,
    pub up: bool,
    pub down: bool,
    /// Fire key went down since the last tick.
    pub fire_pressed: bool,
    /// Enter or a tap since the last tick.
    pub confirm_pressed: bool,
}

impl FrameInput {
    /// Additive screen-space movement axis. Diagonals are not normalized.
    pub fn move_axis(&self) -> Vec2 {
        let mut axis = Vec2::ZERO;
        if self.right {
            axis.x += 1.0;
        }
        if self.left {
            axis.x -= 1.0;
        }
        if self.up {
            axis.y -= 1.0;
        }
        if self.down {
            axis.y += 1.0;
        }
        axis
    }

    /// Single-axis firing direction: right, left, up, down by priority,
    /// rightward when nothing is held.
    pub fn aim_direction(&self) -> Vec2 {
        if self.right {
            Vec2::X
        } else if self.left {
            Vec2::NEG_X
        } else if self.up {
            Vec2::NEG_Y
        } else if self.down {
            Vec2::Y
        } else {
            Vec2::X
        }
    }

    pub fn clear_edges(&mut self) {
        self.fire_pressed = false;
        self.confirm_pressed = false;
    }
}

pub fn plugin(app: &mut App) {
    app.init_resource::<FrameInput>()
        .add_systems(Update, gather_input)
        .add_systems(FixedUpdate, consume_edges.in_set(TickSet::ConsumeInput));
}

/// No-op when the input resources are absent (headless apps drive
/// `FrameInput` directly).
fn gather_input(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mouse: Option<Res<ButtonInput<MouseButton>>>,
    touches: Option<Res<Touches>>,
    mut input: ResMut<FrameInput>,
) {
    let Some(keys) = keys else {
        return;
    };

    input.right = keys.pressed(KeyCode::KeyD);
    input.left = keys.pressed(KeyCode::KeyA);
    input.up = keys.pressed(KeyCode::KeyW);
    input.down = keys.pressed(KeyCode::KeyS);

    input.fire_pressed |= keys.just_pressed(KeyCode::Space);

    let tapped = mouse.is_some_and(|m| m.just_pressed(MouseButton::Left))
        || touches.is_some_and(|t| t.any_just_pressed());
    input.confirm_pressed |= keys.just_pressed(KeyCode::Enter) || tapped;
}

fn consume_edges(mut input: ResMut<FrameInput>) {
    input.clear_edges();
}
