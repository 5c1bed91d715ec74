//! First-person player: camera, pointer-lock mouse look, movement keys,
//! and the snowball fire input.

use std::f32::consts::PI;

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, CursorOptions};

use crate::GameSet;
use crate::gameplay::snowball::ThrowSnowball;

// === Constants ===

/// Planar movement speed (units per second).
const MOVE_SPEED: f32 = 6.0;

/// Q/E keyboard yaw speed (radians per second).
const KEY_TURN_SPEED: f32 = 0.6;

/// Mouse look sensitivity (radians per pixel).
const MOUSE_SENSITIVITY: f32 = 0.002;

/// Pitch limit, just shy of straight up/down.
const PITCH_LIMIT: f32 = PI / 2.0 - 0.05;

/// Where the player starts, looking across the water at the diorama.
const SPAWN_POSITION: Vec3 = Vec3::new(-12.0, 4.0, 7.0);
const SPAWN_YAW: f32 = -PI / 2.5;

// === Components ===

/// Marker for the player's first-person camera. Doubles as the observer
/// reference point snowball range checks measure from.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct PlayerCamera;

// === Systems ===

fn setup_player(mut commands: Commands) {
    commands.spawn((
        Name::new("Player Camera"),
        PlayerCamera,
        Camera3d::default(),
        Transform::from_translation(SPAWN_POSITION).with_rotation(Quat::from_rotation_y(SPAWN_YAW)),
    ));
}

/// Click grabs the cursor (pointer-lock style); Escape releases it.
fn toggle_cursor_grab(
    mouse: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut cursor: Single<&mut CursorOptions>,
) {
    if mouse.just_pressed(MouseButton::Left) {
        cursor.grab_mode = CursorGrabMode::Locked;
        cursor.visible = false;
    }
    if keyboard.just_pressed(KeyCode::Escape) {
        cursor.grab_mode = CursorGrabMode::None;
        cursor.visible = true;
    }
}

/// Mouse look while the cursor is grabbed. Yaw is unbounded, pitch clamped.
fn mouse_look(
    motion: Res<AccumulatedMouseMotion>,
    cursor: Single<&CursorOptions>,
    mut camera: Single<&mut Transform, With<PlayerCamera>>,
) {
    if cursor.grab_mode != CursorGrabMode::Locked {
        return;
    }
    let delta = motion.delta;
    if delta == Vec2::ZERO {
        return;
    }

    let (mut yaw, mut pitch, _) = camera.rotation.to_euler(EulerRot::YXZ);
    yaw -= delta.x * MOUSE_SENSITIVITY;
    pitch = (pitch - delta.y * MOUSE_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    camera.rotation = Quat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0);
}

/// WASD planar movement relative to the camera's heading, plus Q/E yaw.
fn keyboard_move(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut camera: Single<&mut Transform, With<PlayerCamera>>,
) {
    let forward = camera.forward().as_vec3().with_y(0.0).normalize_or_zero();
    let right = camera.right().as_vec3().with_y(0.0).normalize_or_zero();

    let mut direction = Vec3::ZERO;
    if keyboard.pressed(KeyCode::KeyW) {
        direction += forward;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        direction -= forward;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        direction += right;
    }
    if keyboard.pressed(KeyCode::KeyA) {
        direction -= right;
    }
    camera.translation += direction.normalize_or_zero() * MOVE_SPEED * time.delta_secs();

    let mut turn = 0.0;
    if keyboard.pressed(KeyCode::KeyQ) {
        turn += KEY_TURN_SPEED;
    }
    if keyboard.pressed(KeyCode::KeyE) {
        turn -= KEY_TURN_SPEED;
    }
    if turn != 0.0 {
        camera.rotate_y(turn * time.delta_secs());
    }
}

/// Space throws a snowball from the camera along its view direction.
fn throw_on_fire(
    keyboard: Res<ButtonInput<KeyCode>>,
    camera: Single<&Transform, With<PlayerCamera>>,
    mut throws: MessageWriter<ThrowSnowball>,
) {
    if keyboard.just_pressed(KeyCode::Space) {
        throws.write(ThrowSnowball {
            origin: camera.translation,
            direction: camera.forward().as_vec3(),
        });
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<PlayerCamera>();

    app.add_systems(Startup, setup_player);
    app.add_systems(
        Update,
        (toggle_cursor_grab, mouse_look, keyboard_move, throw_on_fire).in_set(GameSet::Input),
    );
}

#[cfg(test)]
mod tests {
    use bevy::prelude::*;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::gameplay::snowball::ThrowSnowball;

    /// Collects throws across frames, since message buffers only live for
    /// two updates.
    #[derive(Resource, Default)]
    struct CapturedThrows(Vec<ThrowSnowball>);

    fn capture_throws(mut reader: MessageReader<ThrowSnowball>, mut out: ResMut<CapturedThrows>) {
        out.0.extend(reader.read().copied());
    }

    fn create_fire_test_app() -> App {
        let mut app = crate::testing::create_test_app();
        app.init_resource::<ButtonInput<KeyCode>>();
        app.init_resource::<CapturedThrows>();
        app.add_message::<ThrowSnowball>();
        app.add_systems(Update, (throw_on_fire, capture_throws).chain());
        app
    }

    #[test]
    fn space_emits_one_throw_along_the_view_direction() {
        let mut app = create_fire_test_app();
        app.world_mut().spawn((
            PlayerCamera,
            Transform::from_xyz(1.0, 2.0, 3.0)
                .with_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2)),
        ));

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::Space);
        app.update();

        let throws = &app.world().resource::<CapturedThrows>().0;
        assert_eq!(throws.len(), 1);
        assert_eq!(throws[0].origin, Vec3::new(1.0, 2.0, 3.0));
        // Yawed 90 degrees: forward is -X.
        assert!((throws[0].direction - Vec3::NEG_X).length() < 1e-5);
    }

    #[test]
    fn holding_space_does_not_refire() {
        let mut app = create_fire_test_app();
        app.world_mut().spawn((PlayerCamera, Transform::default()));

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::Space);
        app.update();
        // Key still held on the next frame: `just_pressed` must not refire.
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .clear_just_pressed(KeyCode::Space);
        app.update();

        assert_eq!(app.world().resource::<CapturedThrows>().0.len(), 1);
    }
}
