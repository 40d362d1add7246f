//! Screen-space helpers.
//!
//! Simulation runs in screen space (origin top-left, y down). Bevy's 2D
//! world has its origin at the window centre with y up.

use bevy::math::bounding::{BoundingCircle, IntersectsVolume};
use bevy::prelude::*;

/// Circle-circle test, boundary inclusive.
#[inline]
pub fn circles_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    BoundingCircle::new(a, radius_a).intersects(&BoundingCircle::new(b, radius_b))
}

/// True once a point has strictly left `[0,w]×[0,h]`.
#[inline]
pub fn outside_arena(p: Vec2, arena: Vec2) -> bool {
    p.x < 0.0 || p.x > arena.x || p.y < 0.0 || p.y > arena.y
}

#[inline]
pub fn screen_to_world(p: Vec2, arena: Vec2) -> Vec2 {
    Vec2::new(p.x - arena.x / 2.0, arena.y / 2.0 - p.y)
}

/// World-space centre of a quad whose top-left corner sits at screen point `top_left`.
#[inline]
pub fn anchored_center(top_left: Vec2, size: Vec2, arena: Vec2) -> Vec2 {
    screen_to_world(top_left + size / 2.0, arena)
}
