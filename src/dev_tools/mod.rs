//! Development tools — only included with `cargo run --features dev`.
//!
//! World inspector and a debug volley spawner. Stripped from release builds.

use bevy::prelude::*;
use bevy_inspector_egui::quick::WorldInspectorPlugin;

use crate::GameSet;
use crate::gameplay::snowball::ThrowSnowball;
use crate::player::PlayerCamera;
use crate::scene::primates::TARGET_POSITION;

/// Snowballs thrown per V key press, fanned toward the colossus.
const VOLLEY_SIZE: usize = 3;

/// Lateral spread between volley throws (units at the target).
const VOLLEY_SPREAD: f32 = 1.5;

/// V throws a fan of snowballs straight at the colossus, for exercising the
/// hit/reaction path without aiming.
fn debug_throw_volley(
    keyboard: Res<ButtonInput<KeyCode>>,
    camera: Single<&Transform, With<PlayerCamera>>,
    mut throws: MessageWriter<ThrowSnowball>,
) {
    if !keyboard.just_pressed(KeyCode::KeyV) {
        return;
    }

    for i in 0..VOLLEY_SIZE {
        #[allow(clippy::cast_precision_loss)]
        let offset = (i as f32 - (VOLLEY_SIZE - 1) as f32 / 2.0) * VOLLEY_SPREAD;
        let aim = TARGET_POSITION + Vec3::new(offset, 1.0, 0.0);
        throws.write(ThrowSnowball {
            origin: camera.translation,
            direction: aim - camera.translation,
        });
    }
}

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(WorldInspectorPlugin::new());

    app.add_systems(Update, debug_throw_volley.in_set(GameSet::Input));
}
