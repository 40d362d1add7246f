//! Gameplay sprites: one entity per pool slot, shown or hidden by the
//! slot's active flag.

use bevy::prelude::*;

use crate::common::geometry::{anchored_center, screen_to_world};
use crate::common::state::Screen;
use crate::common::tunables::Tunables;
use crate::plugins::assets::GameAssets;
use crate::plugins::enemies::{EnemyPool, MAX_ENEMIES};
use crate::plugins::player::Player;
use crate::plugins::projectiles::pool::{BulletPool, MAX_BULLETS};
use crate::plugins::session::Session;

use super::{BLUE, PURPLE, RAYWHITE, label};

const FLOOR_SCALE: f32 = 3.5;
const ENEMY_SCALE: f32 = 0.3;

const Z_FLOOR: f32 = 0.0;
const Z_ENEMY: f32 = 1.0;
const Z_PLAYER: f32 = 2.0;
const Z_BULLET: f32 = 3.0;

#[derive(Component)]
pub(super) struct FloorSprite;

#[derive(Component)]
pub(super) struct PlayerSprite;

#[derive(Component, Debug, Clone, Copy)]
pub(super) struct EnemySprite(usize);

#[derive(Component, Debug, Clone, Copy)]
pub(super) struct BulletSprite(usize);

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum HudField {
    Score,
    Mana,
}

pub(super) fn spawn_gameplay(
    mut commands: Commands,
    tunables: Res<Tunables>,
    assets: Res<GameAssets>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut clear: ResMut<ClearColor>,
) {
    clear.0 = RAYWHITE;

    commands.spawn((
        Name::new("Floor"),
        FloorSprite,
        Sprite::from_image(assets.floor.clone()),
        Transform::from_scale(Vec3::splat(FLOOR_SCALE)),
        Visibility::Hidden,
        DespawnOnExit(Screen::Gameplay),
    ));

    for slot in 0..MAX_ENEMIES {
        commands.spawn((
            Name::new(format!("Enemy{slot}")),
            EnemySprite(slot),
            Sprite::from_image(assets.enemy.clone()),
            Transform::from_scale(Vec3::splat(ENEMY_SCALE)),
            Visibility::Hidden,
            DespawnOnExit(Screen::Gameplay),
        ));
    }

    commands.spawn((
        Name::new("Player"),
        PlayerSprite,
        Sprite::from_image(assets.wizard.clone()),
        Transform::default(),
        Visibility::Hidden,
        DespawnOnExit(Screen::Gameplay),
    ));

    let mesh = meshes.add(Circle::new(tunables.bullet_radius));
    let material = materials.add(ColorMaterial::from(PURPLE));
    for slot in 0..MAX_BULLETS {
        commands.spawn((
            Name::new(format!("Bullet{slot}")),
            BulletSprite(slot),
            Mesh2d(mesh.clone()),
            MeshMaterial2d(material.clone()),
            Transform::default(),
            Visibility::Hidden,
            DespawnOnExit(Screen::Gameplay),
        ));
    }

    commands.spawn((
        label("SCORE: 0", Vec2::new(20.0, 20.0), 40.0, Color::WHITE),
        HudField::Score,
        DespawnOnExit(Screen::Gameplay),
    ));
    commands.spawn((
        label("Mana: 0", Vec2::new(20.0, 100.0), 40.0, BLUE),
        HudField::Mana,
        DespawnOnExit(Screen::Gameplay),
    ));
}

/// Pixel size of a loaded image; `None` while it is still loading.
fn image_size(images: &Assets<Image>, handle: &Handle<Image>) -> Option<Vec2> {
    images.get(handle).map(|image| image.size().as_vec2())
}

pub(super) fn sync_floor(
    tunables: Res<Tunables>,
    assets: Res<GameAssets>,
    images: Res<Assets<Image>>,
    mut q: Query<(&mut Transform, &mut Visibility), With<FloorSprite>>,
) {
    let Some(size) = image_size(&images, &assets.floor) else {
        return;
    };

    let top_left = tunables.arena / 2.0 - size * Vec2::new(1.7, 1.5);
    let center = anchored_center(top_left, size * FLOOR_SCALE, tunables.arena);
    for (mut tf, mut vis) in &mut q {
        tf.translation = center.extend(Z_FLOOR);
        *vis = Visibility::Visible;
    }
}

pub(super) fn sync_enemies(
    tunables: Res<Tunables>,
    assets: Res<GameAssets>,
    images: Res<Assets<Image>>,
    enemies: Res<EnemyPool>,
    mut q: Query<(&EnemySprite, &mut Transform, &mut Visibility)>,
) {
    let Some(size) = image_size(&images, &assets.enemy) else {
        return;
    };
    let drawn = size * ENEMY_SCALE;

    for (EnemySprite(slot), mut tf, mut vis) in &mut q {
        let enemy = enemies.slots()[*slot];
        if !enemy.active {
            *vis = Visibility::Hidden;
            continue;
        }
        tf.translation = anchored_center(enemy.position, drawn, tunables.arena).extend(Z_ENEMY);
        *vis = Visibility::Visible;
    }
}

/// Frames are cut from a `sheet_columns × sheet_rows` grid, left to right,
/// top to bottom.
pub(super) fn sync_player(
    tunables: Res<Tunables>,
    assets: Res<GameAssets>,
    images: Res<Assets<Image>>,
    player: Res<Player>,
    mut q: Query<(&mut Sprite, &mut Transform, &mut Visibility), With<PlayerSprite>>,
) {
    let Some(size) = image_size(&images, &assets.wizard) else {
        return;
    };
    let frame = tunables.sheet_frame(size.as_uvec2());

    let cell = player.animation.sheet_cell(tunables.sheet_columns).as_vec2();
    let min = cell * frame;

    for (mut sprite, mut tf, mut vis) in &mut q {
        sprite.rect = Some(Rect::from_corners(min, min + frame));
        tf.translation = anchored_center(player.position, frame, tunables.arena).extend(Z_PLAYER);
        *vis = Visibility::Visible;
    }
}

pub(super) fn sync_bullets(
    tunables: Res<Tunables>,
    bullets: Res<BulletPool>,
    mut q: Query<(&BulletSprite, &mut Transform, &mut Visibility)>,
) {
    for (BulletSprite(slot), mut tf, mut vis) in &mut q {
        let bullet = bullets.slots()[*slot];
        if !bullet.active {
            *vis = Visibility::Hidden;
            continue;
        }
        tf.translation = screen_to_world(bullet.position, tunables.arena).extend(Z_BULLET);
        *vis = Visibility::Visible;
    }
}

pub(super) fn sync_hud(session: Res<Session>, mut q: Query<(&HudField, &mut Text)>) {
    for (field, mut text) in &mut q {
        text.0 = match field {
            HudField::Score => format!("SCORE: {}", session.score),
            HudField::Mana => format!("Mana: {}", session.mana),
        };
    }
}
