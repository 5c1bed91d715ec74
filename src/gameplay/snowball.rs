//! Snowball lifecycle: spawn on a throw request, fly in a straight line,
//! retire on a hit or once out of range.

use bevy::prelude::*;

use super::MinigameConfig;
use super::collision::{self, ActiveTarget, Hurtbox};
use super::reaction::Reaction;
use super::score::Score;
use crate::player::PlayerCamera;

// === Messages ===

/// Request to throw a snowball. Written by the input layer (or dev tools),
/// consumed here at the start of the snowball pass.
#[derive(Message, Debug, Clone, Copy)]
pub struct ThrowSnowball {
    pub origin: Vec3,
    pub direction: Vec3,
}

// === Components ===

/// A snowball in flight. Velocity is fixed at spawn; position lives in
/// the entity's `Transform`.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Snowball {
    pub velocity: Vec3,
}

// === Resources ===

/// Shared mesh and material handles for snowball rendering. Inserted by the
/// scene plugin; when absent (headless tests) snowballs fly without visuals.
#[derive(Resource, Debug)]
pub struct SnowballAssets {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}

// === Systems ===

/// Spawns one snowball per throw request at the requested origin, moving
/// along the requested direction at the configured speed. A degenerate
/// (zero-length) direction cannot be normalized and drops the throw.
pub(super) fn spawn_snowballs(
    mut throws: MessageReader<ThrowSnowball>,
    config: Res<MinigameConfig>,
    assets: Option<Res<SnowballAssets>>,
    mut commands: Commands,
) {
    for throw in throws.read() {
        let Ok(direction) = Dir3::new(throw.direction) else {
            continue;
        };

        let mut snowball = commands.spawn((
            Name::new("Snowball"),
            Snowball {
                velocity: direction * config.snowball_speed,
            },
            Transform::from_translation(throw.origin),
        ));
        if let Some(assets) = &assets {
            snowball.insert((
                Mesh3d(assets.mesh.clone()),
                MeshMaterial3d(assets.material.clone()),
            ));
        }
    }
}

/// Advances every live snowball and decides its fate for the frame:
/// a hit on the active target scores and starts the jump, then retires the
/// snowball; otherwise the snowball is retired once it strays farther than
/// the throw budget from the player. Despawns are deferred through
/// `Commands`, so every snowball is visited exactly once per frame no
/// matter how many retire.
pub(super) fn update_snowballs(
    time: Res<Time>,
    config: Res<MinigameConfig>,
    active: Option<Res<ActiveTarget>>,
    observer: Single<&Transform, (With<PlayerCamera>, Without<Snowball>)>,
    mut snowballs: Query<(Entity, &Snowball, &mut Transform)>,
    mut targets: Query<(&Transform, &Hurtbox, &mut Reaction), Without<Snowball>>,
    mut score: ResMut<Score>,
    mut commands: Commands,
) {
    for (entity, snowball, mut transform) in &mut snowballs {
        transform.translation += snowball.velocity * time.delta_secs();

        // A stale or missing target handle means no collision, never an error.
        if let Some(target) = active.as_deref() {
            if let Ok((target_transform, hurtbox, mut reaction)) = targets.get_mut(target.0) {
                if collision::sphere_box_overlap(
                    transform.translation,
                    config.snowball_radius,
                    target_transform.translation,
                    hurtbox.dims,
                ) {
                    // Every geometric hit scores, even mid-jump; `start` is
                    // a no-op while a jump is in progress.
                    score.add(config.points_per_hit);
                    reaction.start();
                    commands.entity(entity).despawn();
                    continue;
                }
            }
        }

        if transform.translation.distance(observer.translation) > config.max_throw_distance {
            commands.entity(entity).despawn();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use bevy::prelude::*;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::testing::create_fixed_step_app;

    fn create_snowball_test_app() -> App {
        let mut app = create_fixed_step_app(Duration::from_millis(250));
        app.init_resource::<MinigameConfig>();
        app.init_resource::<Score>();
        app.add_message::<ThrowSnowball>();
        app.add_systems(Update, (spawn_snowballs, update_snowballs).chain());
        app.world_mut()
            .spawn((PlayerCamera, Transform::default()));
        app
    }

    fn snowball_count(app: &mut App) -> usize {
        app.world_mut()
            .query::<&Snowball>()
            .iter(app.world())
            .count()
    }

    #[test]
    fn throw_spawns_a_snowball_with_scaled_velocity() {
        let mut app = create_snowball_test_app();
        app.world_mut().write_message(ThrowSnowball {
            origin: Vec3::new(0.0, 1.0, 0.0),
            direction: Vec3::new(0.0, 0.0, -2.0),
        });
        app.update();

        let snowball = *app
            .world_mut()
            .query::<&Snowball>()
            .single(app.world())
            .unwrap();
        // Direction is normalized before scaling.
        assert_eq!(snowball.velocity, Vec3::new(0.0, 0.0, -30.0));
    }

    #[test]
    fn zero_direction_throw_is_dropped() {
        let mut app = create_snowball_test_app();
        app.world_mut().write_message(ThrowSnowball {
            origin: Vec3::ZERO,
            direction: Vec3::ZERO,
        });
        app.update();

        assert_eq!(snowball_count(&mut app), 0);
    }

    #[test]
    fn position_advances_by_velocity_each_tick() {
        let mut app = create_snowball_test_app();
        // Values chosen to stay exact in f32 at dt = 0.25.
        let entity = app
            .world_mut()
            .spawn((
                Snowball {
                    velocity: Vec3::new(2.0, 0.0, -4.0),
                },
                Transform::from_xyz(1.0, 0.0, 0.0),
            ))
            .id();

        // First update establishes the manual clock (zero delta).
        app.update();
        for _ in 0..4 {
            app.update();
        }

        let transform = app.world().get::<Transform>(entity).unwrap();
        // origin + velocity * dt * n, exactly.
        assert_eq!(transform.translation, Vec3::new(3.0, 0.0, -4.0));
    }

    #[test]
    fn snowball_is_retired_past_the_throw_budget() {
        let mut app = create_snowball_test_app();
        // 12.5 units per tick at dt = 0.25: crosses 50 units on the 5th tick.
        app.world_mut().spawn((
            Snowball {
                velocity: Vec3::new(50.0, 0.0, 0.0),
            },
            Transform::default(),
        ));

        app.update(); // clock baseline
        for _ in 0..4 {
            app.update();
            assert_eq!(snowball_count(&mut app), 1);
        }
        app.update();
        assert_eq!(snowball_count(&mut app), 0);

        // And it never comes back.
        app.update();
        assert_eq!(snowball_count(&mut app), 0);
    }
}
