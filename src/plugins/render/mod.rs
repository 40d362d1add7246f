//! Render plugin (render-only): per-screen visuals.
//!
//! Nothing here writes simulation state. Each screen spawns its own
//! entities on enter and tags them `DespawnOnExit`; during gameplay the
//! sync systems copy pool slots onto pre-spawned sprites every frame.
//!
//! ```text
//! OnEnter(screen): clear colour + static text (+ gameplay sprites)
//! Update (Gameplay): sync floor / enemies / player / bullets / HUD
//! ```

mod sprites;

use bevy::prelude::*;

use crate::common::state::Screen;
use crate::plugins::session::Session;

pub const RAYWHITE: Color = Color::srgb(245.0 / 255.0, 245.0 / 255.0, 245.0 / 255.0);
pub const BLUE: Color = Color::srgb(0.0, 121.0 / 255.0, 241.0 / 255.0);
pub const PURPLE: Color = Color::srgb(200.0 / 255.0, 122.0 / 255.0, 1.0);

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_camera)
        .add_systems(OnEnter(Screen::Logo), enter_logo)
        .add_systems(OnEnter(Screen::Title), enter_title)
        .add_systems(OnEnter(Screen::Gameplay), sprites::spawn_gameplay)
        .add_systems(OnEnter(Screen::Ending), enter_ending)
        .add_systems(
            Update,
            (
                sprites::sync_floor,
                sprites::sync_enemies,
                sprites::sync_player,
                sprites::sync_bullets,
                sprites::sync_hud,
            )
                .run_if(in_state(Screen::Gameplay)),
        );
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("Camera"),
        Camera2d,
        Transform::from_xyz(0.0, 0.0, 999.0),
    ));
}

/// Text anchored by its top-left corner at a screen position.
pub(crate) fn label(text: impl Into<String>, at: Vec2, size: f32, color: Color) -> impl Bundle {
    (
        Text::new(text),
        TextFont::from_font_size(size),
        TextColor(color),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(at.x),
            top: Val::Px(at.y),
            ..default()
        },
    )
}

fn enter_logo(mut commands: Commands, mut clear: ResMut<ClearColor>) {
    clear.0 = Color::BLACK;
    commands.spawn((
        label("Ludum Dare 55", Vec2::new(250.0, 100.0), 40.0, Color::WHITE),
        DespawnOnExit(Screen::Logo),
    ));
    commands.spawn((
        label("Created by Marco Puig", Vec2::new(280.0, 220.0), 20.0, Color::WHITE),
        DespawnOnExit(Screen::Logo),
    ));
}

fn enter_title(mut commands: Commands, mut clear: ResMut<ClearColor>) {
    clear.0 = BLUE;
    commands.spawn((
        label("S-Pull", Vec2::new(280.0, 20.0), 60.0, Color::WHITE),
        DespawnOnExit(Screen::Title),
    ));
    commands.spawn((
        label("Click to Start!", Vec2::new(280.0, 220.0), 20.0, Color::WHITE),
        DespawnOnExit(Screen::Title),
    ));
}

fn enter_ending(mut commands: Commands, session: Res<Session>, mut clear: ResMut<ClearColor>) {
    clear.0 = RAYWHITE;
    commands.spawn((
        label(session.flavor.ending_message(), Vec2::new(20.0, 20.0), 40.0, Color::BLACK),
        DespawnOnExit(Screen::Ending),
    ));
    commands.spawn((
        label(
            format!("SCORE: {}", session.score),
            Vec2::new(120.0, 100.0),
            20.0,
            Color::BLACK,
        ),
        DespawnOnExit(Screen::Ending),
    ));
    commands.spawn((
        label("Click to Restart", Vec2::new(120.0, 220.0), 20.0, Color::BLACK),
        DespawnOnExit(Screen::Ending),
    ));
}
