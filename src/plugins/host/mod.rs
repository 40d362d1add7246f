//! Host plugin (render-only): window lifetime.
//!
//! - Escape closes the game with exit code 0.
//! - A missing primary window after startup is fatal.
//!
//! Audio output is not checked here: without an output device Bevy's audio
//! backend logs a warning and plays nothing, and the game stays playable.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::common::error::GameError;

pub fn plugin(app: &mut App) {
    app.add_systems(PostStartup, check_devices)
        .add_systems(Update, exit_on_escape);
}

fn check_devices(
    q_window: Query<(), With<PrimaryWindow>>,
    mut exit: MessageWriter<AppExit>,
) {
    if q_window.is_empty() {
        let err = GameError::DeviceInit { device: "primary window" };
        error!("{err}");
        exit.write(AppExit::error());
    }
}

fn exit_on_escape(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        info!("escape pressed, closing");
        exit.write(AppExit::Success);
    }
}

#[cfg(test)]
mod tests {
    use bevy::prelude::*;
    use bevy::window::PrimaryWindow;

    use crate::common::test_utils::run_system_once;

    fn exits(world: &mut World) -> Vec<AppExit> {
        run_system_once(world, |mut reader: MessageReader<AppExit>| {
            reader.read().cloned().collect::<Vec<_>>()
        })
    }

    #[test]
    fn missing_window_exits_with_error() {
        let mut world = World::new();
        world.init_resource::<Messages<AppExit>>();

        run_system_once(&mut world, super::check_devices);

        assert_eq!(exits(&mut world), vec![AppExit::error()]);
    }

    #[test]
    fn primary_window_passes_the_check() {
        let mut world = World::new();
        world.init_resource::<Messages<AppExit>>();
        world.spawn((Window::default(), PrimaryWindow));

        run_system_once(&mut world, super::check_devices);

        assert!(exits(&mut world).is_empty());
    }
}
