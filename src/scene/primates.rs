//! The two hand-built primate models: the grey colossus the mini-game
//! targets, and the small orange guard that patrols the shoreline.
//!
//! Both share one jointed hierarchy (body, five-sided head, upper arm →
//! lower arm → hand, leg → foot) built from box and cylinder primitives.

use std::f32::consts::{FRAC_PI_2, PI};

use bevy::prelude::*;

use crate::GameSet;
use crate::gameplay::MinigameConfig;
use crate::gameplay::collision::{ActiveTarget, Hurtbox};
use crate::gameplay::reaction::Reaction;

// === Constants ===

/// Where the colossus stands. Its x/z never change; only the jump arc
/// moves it in y.
pub const TARGET_POSITION: Vec3 = Vec3::new(6.0, 0.0, -3.0);

const GUARD_POSITION: Vec3 = Vec3::new(2.0, 0.0, -5.0);
const GUARD_SCALE: f32 = 0.5;

/// Guard walking speed (units per second).
const GUARD_SPEED: f32 = 3.0;

/// Distance the guard walks before turning around (units).
const GUARD_LEG_LENGTH: f32 = 5.0;

/// Time the guard takes to turn half a circle (seconds).
const GUARD_TURN_DURATION: f32 = 1.7;

const COLOSSUS_COLOR: Color = Color::srgb(0.35, 0.35, 0.38);
const GUARD_COLOR: Color = Color::srgb(0.85, 0.45, 0.15);

// === Components ===

/// Back-and-forth shoreline patrol: walk a leg, turn half a circle, repeat.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Patrol {
    /// +1 walks toward +Z, -1 back.
    pub heading: f32,
    /// Distance covered on the current leg.
    pub travelled: f32,
    /// Turn progress in 0..1 while turning, `None` while walking.
    pub turning: Option<f32>,
}

impl Default for Patrol {
    fn default() -> Self {
        Self {
            heading: 1.0,
            travelled: 0.0,
            turning: None,
        }
    }
}

/// Idle limb sway: a triangle-wave pivot around the limb's rest rotation.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Sway {
    pub base: Quat,
    /// Sway speed (radians per second).
    pub rate: f32,
    /// Peak deflection (radians).
    pub limit: f32,
    pub angle: f32,
    pub dir: f32,
}

impl Sway {
    fn new(base: Quat, rate: f32, limit: f32) -> Self {
        Self {
            base,
            rate,
            limit,
            angle: 0.0,
            dir: 1.0,
        }
    }
}

// === Model construction ===

struct PrimateParts {
    body: Handle<Mesh>,
    head: Handle<Mesh>,
    upper_arm: Handle<Mesh>,
    lower_arm: Handle<Mesh>,
    hand: Handle<Mesh>,
    leg: Handle<Mesh>,
    foot: Handle<Mesh>,
}

impl PrimateParts {
    fn build(meshes: &mut Assets<Mesh>) -> Self {
        Self {
            body: meshes.add(Cuboid::new(1.8, 2.5, 1.2)),
            // Pentagon head: a five-sided cylinder laid on its side.
            head: meshes.add(Cylinder::new(0.8, 1.0).mesh().resolution(5)),
            upper_arm: meshes.add(Cuboid::new(0.6, 1.5, 0.8)),
            lower_arm: meshes.add(Cuboid::new(0.5, 1.9, 0.75)),
            hand: meshes.add(Cuboid::new(0.4, 1.0, 0.6)),
            leg: meshes.add(Cuboid::new(0.7, 1.5, 0.7)),
            foot: meshes.add(Cuboid::new(0.8, 0.5, 1.2)),
        }
    }
}

/// Spawns one jointed primate and returns its root entity. Only the root is
/// ever moved by gameplay; limb placement is all local transforms composed
/// by Bevy's transform propagation. `animated` adds idle sway to the head
/// and arms.
fn spawn_primate(
    commands: &mut Commands,
    parts: &PrimateParts,
    material: &Handle<StandardMaterial>,
    name: &'static str,
    root: Transform,
    animated: bool,
) -> Entity {
    commands
        .spawn((Name::new(name), root, Visibility::default()))
        .with_children(|group| {
            group.spawn((
                Name::new("Body"),
                Mesh3d(parts.body.clone()),
                MeshMaterial3d(material.clone()),
                Transform::from_xyz(0.0, 2.25, 0.0).with_rotation(Quat::from_rotation_x(0.3)),
            ));

            let head_transform =
                Transform::from_xyz(0.0, 4.0, 0.3).with_rotation(Quat::from_rotation_x(FRAC_PI_2));
            let mut head = group.spawn((
                Name::new("Head"),
                Mesh3d(parts.head.clone()),
                MeshMaterial3d(material.clone()),
                head_transform,
            ));
            if animated {
                head.insert(Sway::new(head_transform.rotation, 0.35, 0.5));
            }

            for (side, label) in [(1.0_f32, "Left"), (-1.0_f32, "Right")] {
                let arm_transform = Transform::from_xyz(1.2 * side, 3.0, 0.5).with_rotation(
                    Quat::from_rotation_z(side * PI / 12.0) * Quat::from_rotation_x(-0.5),
                );
                let mut upper_arm = group.spawn((
                    Name::new(format!("{label} Arm")),
                    Mesh3d(parts.upper_arm.clone()),
                    MeshMaterial3d(material.clone()),
                    arm_transform,
                ));
                if animated {
                    upper_arm.insert(Sway::new(arm_transform.rotation, 0.7, 1.0));
                }
                upper_arm.with_children(|arm| {
                    arm.spawn((
                        Name::new(format!("{label} Forearm")),
                        Mesh3d(parts.lower_arm.clone()),
                        MeshMaterial3d(material.clone()),
                        Transform::from_xyz(0.0, -1.0, 0.0),
                    ))
                    .with_children(|forearm| {
                        forearm.spawn((
                            Name::new(format!("{label} Hand")),
                            Mesh3d(parts.hand.clone()),
                            MeshMaterial3d(material.clone()),
                            Transform::from_xyz(0.0, -0.8, 0.0),
                        ));
                    });
                });

                group
                    .spawn((
                        Name::new(format!("{label} Leg")),
                        Mesh3d(parts.leg.clone()),
                        MeshMaterial3d(material.clone()),
                        Transform::from_xyz(-0.5 * side, 1.0, -0.4),
                    ))
                    .with_children(|leg| {
                        leg.spawn((
                            Name::new(format!("{label} Foot")),
                            Mesh3d(parts.foot.clone()),
                            MeshMaterial3d(material.clone()),
                            Transform::from_xyz(0.0, -0.5, 0.2),
                        ));
                    });
            }
        })
        .id()
}

// === Systems ===

fn spawn_primates(
    mut commands: Commands,
    config: Res<MinigameConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let parts = PrimateParts::build(&mut meshes);
    let grey = materials.add(StandardMaterial {
        base_color: COLOSSUS_COLOR,
        perceptual_roughness: 0.95,
        ..default()
    });
    let orange = materials.add(StandardMaterial {
        base_color: GUARD_COLOR,
        perceptual_roughness: 0.95,
        ..default()
    });

    let colossus = spawn_primate(
        &mut commands,
        &parts,
        &grey,
        "Colossus",
        Transform::from_translation(TARGET_POSITION),
        false,
    );
    commands.entity(colossus).insert((
        Hurtbox {
            dims: config.target_hurtbox,
        },
        Reaction::Idle,
    ));
    // The one handle snowballs are judged against.
    commands.insert_resource(ActiveTarget(colossus));

    let guard = spawn_primate(
        &mut commands,
        &parts,
        &orange,
        "Guard",
        Transform::from_translation(GUARD_POSITION).with_scale(Vec3::splat(GUARD_SCALE)),
        true,
    );
    commands.entity(guard).insert(Patrol::default());
}

/// Walks the guard along its leg, then rotates it half a circle and sends
/// it back the other way. The yaw snaps to a clean half-turn when the turn
/// completes so drift never accumulates.
fn patrol_march(time: Res<Time>, mut guards: Query<(&mut Transform, &mut Patrol)>) {
    let dt = time.delta_secs();
    for (mut transform, mut patrol) in &mut guards {
        if let Some(progress) = patrol.turning {
            let step = dt / GUARD_TURN_DURATION;
            let progress = progress + step;
            if progress >= 1.0 {
                let (yaw, ..) = transform.rotation.to_euler(EulerRot::YXZ);
                transform.rotation = Quat::from_rotation_y((yaw / PI).round() * PI);
                patrol.heading = -patrol.heading;
                patrol.travelled = 0.0;
                patrol.turning = None;
            } else {
                transform.rotate_y(PI * step);
                patrol.turning = Some(progress);
            }
        } else {
            transform.translation.z += GUARD_SPEED * patrol.heading * dt;
            patrol.travelled += GUARD_SPEED * dt;
            if patrol.travelled >= GUARD_LEG_LENGTH {
                patrol.turning = Some(0.0);
            }
        }
    }
}

/// Triangle-wave limb sway around each limb's rest rotation.
fn sway_limbs(time: Res<Time>, mut limbs: Query<(&mut Transform, &mut Sway)>) {
    let dt = time.delta_secs();
    for (mut transform, mut sway) in &mut limbs {
        let sway = &mut *sway;
        sway.angle += sway.rate * sway.dir * dt;
        if sway.angle.abs() >= sway.limit {
            sway.angle = sway.angle.clamp(-sway.limit, sway.limit);
            sway.dir = -sway.dir;
        }
        transform.rotation = sway.base * Quat::from_rotation_x(sway.angle);
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Patrol>().register_type::<Sway>();

    app.add_systems(Startup, spawn_primates);
    app.add_systems(
        Update,
        (patrol_march, sway_limbs).in_set(GameSet::Effects),
    );
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use bevy::prelude::*;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::testing::create_fixed_step_app;

    fn create_patrol_test_app() -> (App, Entity) {
        let mut app = create_fixed_step_app(Duration::from_millis(250));
        app.add_systems(Update, patrol_march);
        let guard = app
            .world_mut()
            .spawn((Transform::default(), Patrol::default()))
            .id();
        app.update(); // clock baseline
        (app, guard)
    }

    #[test]
    fn guard_walks_its_leg_then_starts_turning() {
        let (mut app, guard) = create_patrol_test_app();

        // 0.75 units per tick: the 5-unit leg completes on the 7th tick.
        for _ in 0..7 {
            app.update();
        }
        let patrol = app.world().get::<Patrol>(guard).unwrap();
        assert!(patrol.turning.is_some());
        let transform = app.world().get::<Transform>(guard).unwrap();
        assert!(transform.translation.z >= GUARD_LEG_LENGTH);
    }

    #[test]
    fn completed_turn_reverses_heading_and_squares_up() {
        let (mut app, guard) = create_patrol_test_app();

        // Walk the leg, then turn: 1.7s at 0.25s per tick is 7 more ticks.
        for _ in 0..14 {
            app.update();
        }
        let patrol = *app.world().get::<Patrol>(guard).unwrap();
        assert_eq!(patrol.heading, -1.0);
        assert_eq!(patrol.turning, None);
        assert_eq!(patrol.travelled, 0.0);

        // Yaw snapped to an exact half turn.
        let transform = app.world().get::<Transform>(guard).unwrap();
        let (yaw, ..) = transform.rotation.to_euler(EulerRot::YXZ);
        assert!((yaw.abs() - PI).abs() < 1e-4 || yaw.abs() < 1e-4);
    }

    #[test]
    fn sway_pivots_around_its_base_and_reverses_at_the_limit() {
        let mut app = create_fixed_step_app(Duration::from_millis(250));
        app.add_systems(Update, sway_limbs);
        let base = Quat::from_rotation_z(0.3);
        let limb = app
            .world_mut()
            .spawn((
                Transform::from_rotation(base),
                Sway::new(base, 1.0, 0.5),
            ))
            .id();

        app.update(); // clock baseline
        app.update(); // angle 0.25
        app.update(); // angle 0.5: at the limit, direction flips

        let sway = *app.world().get::<Sway>(limb).unwrap();
        assert_eq!(sway.angle, 0.5);
        assert_eq!(sway.dir, -1.0);

        let transform = app.world().get::<Transform>(limb).unwrap();
        let expected = base * Quat::from_rotation_x(0.5);
        assert!(transform.rotation.angle_between(expected) < 1e-4);
    }
}
