//! Collision judging: a snowball against the target's hurtbox.

use bevy::prelude::*;

// === Components ===

/// Axis-aligned hurtbox dimensions for a hittable entity.
/// Hand-authored; intentionally decoupled from the visual mesh bounds.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Hurtbox {
    pub dims: Vec3,
}

// === Resources ===

/// Handle to the entity snowballs are tested against.
///
/// Captured once when the scene is built. If the entity is gone the
/// snowball pass simply reports no collision.
#[derive(Resource, Debug, Clone, Copy, Reflect)]
#[reflect(Resource)]
pub struct ActiveTarget(pub Entity);

// === Judging ===

/// Sphere-vs-box overlap, approximated as a point against the box inflated
/// by the sphere radius (a boxed Minkowski sum, cheaper than the exact
/// sphere-box distance). Hit iff the separation is strictly inside the
/// inflated half-extents on all three axes.
#[must_use]
pub fn sphere_box_overlap(point: Vec3, radius: f32, box_center: Vec3, box_dims: Vec3) -> bool {
    let delta = (point - box_center).abs();
    let reach = box_dims / 2.0 + Vec3::splat(radius);
    delta.x < reach.x && delta.y < reach.y && delta.z < reach.z
}
