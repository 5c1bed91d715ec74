//! Cosmetic particles: spray over the water and wind flecks drifting
//! through the whole diorama. Purely visual; nothing here feeds back into
//! gameplay.

use bevy::prelude::*;
use rand::Rng;

use crate::GameSet;

// === Constants ===

const SPLASH_COUNT: usize = 150;
const WIND_COUNT: usize = 100;

/// Particle visual radius (units).
const PARTICLE_RADIUS: f32 = 0.05;

/// Water surface height; splash particles respawn when they fall past it.
const WATER_LEVEL: f32 = 0.01;

/// Splash spray region, matching the water plane.
const SPLASH_CENTER: Vec2 = Vec2::new(-5.0, 2.5);
const SPLASH_SPREAD: Vec2 = Vec2::new(5.0, 10.0);

/// Downward pull on splash droplets (units per second squared).
const SPLASH_GRAVITY: f32 = 3.6;

/// Wind flecks wrap from this x back to its negative.
const WIND_EDGE: f32 = 10.0;

const SPLASH_COLOR: Color = Color::srgba(0.53, 0.8, 1.0, 0.6);
const WIND_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.3);

// === Components ===

/// Marker for water spray droplets.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Splash;

/// Marker for drifting wind flecks.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct WindFleck;

/// Straight-line particle velocity (units per second).
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Drift(pub Vec3);

// === Helpers ===

fn splash_spawn_point<R: Rng>(rng: &mut R) -> Vec3 {
    Vec3::new(
        SPLASH_CENTER.x + rng.random_range(-0.5..0.5) * SPLASH_SPREAD.x,
        0.1,
        SPLASH_CENTER.y + rng.random_range(-0.5..0.5) * SPLASH_SPREAD.y,
    )
}

// === Systems ===

fn setup_particles(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = meshes.add(Sphere::new(PARTICLE_RADIUS));
    let splash_material = materials.add(StandardMaterial {
        base_color: SPLASH_COLOR,
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });
    let wind_material = materials.add(StandardMaterial {
        base_color: WIND_COLOR,
        alpha_mode: AlphaMode::Add,
        unlit: true,
        ..default()
    });

    let mut rng = rand::rng();

    for _ in 0..SPLASH_COUNT {
        commands.spawn((
            Name::new("Splash"),
            Splash,
            Drift(Vec3::new(
                rng.random_range(-0.9..0.9),
                rng.random_range(0.0..3.6),
                rng.random_range(-0.9..0.9),
            )),
            Mesh3d(mesh.clone()),
            MeshMaterial3d(splash_material.clone()),
            Transform::from_translation(splash_spawn_point(&mut rng)),
        ));
    }

    for _ in 0..WIND_COUNT {
        commands.spawn((
            Name::new("Wind Fleck"),
            WindFleck,
            Drift(Vec3::new(
                rng.random_range(0.6..9.0),
                rng.random_range(-3.0..3.0),
                rng.random_range(-3.0..3.0),
            )),
            Mesh3d(mesh.clone()),
            MeshMaterial3d(wind_material.clone()),
            Transform::from_xyz(
                rng.random_range(-WIND_EDGE..WIND_EDGE),
                rng.random_range(0.0..10.0),
                rng.random_range(-10.0..10.0),
            ),
        ));
    }
}

/// Sprays droplets upward, pulls them back down, and respawns any that
/// fall through the water surface.
fn animate_splash(
    time: Res<Time>,
    mut droplets: Query<(&mut Transform, &mut Drift), With<Splash>>,
) {
    let dt = time.delta_secs();
    let mut rng = rand::rng();
    for (mut transform, mut drift) in &mut droplets {
        transform.translation += drift.0 * dt;
        drift.0.y -= SPLASH_GRAVITY * dt;

        if transform.translation.y < WATER_LEVEL {
            transform.translation = splash_spawn_point(&mut rng);
            drift.0.y = rng.random_range(0.0..3.0);
        }
    }
}

/// Drifts flecks along +X and wraps them back to the windward edge.
fn animate_wind(
    time: Res<Time>,
    mut flecks: Query<(&mut Transform, &Drift), With<WindFleck>>,
) {
    let dt = time.delta_secs();
    let mut rng = rand::rng();
    for (mut transform, drift) in &mut flecks {
        transform.translation += drift.0 * dt;

        if transform.translation.x > WIND_EDGE {
            transform.translation = Vec3::new(
                -WIND_EDGE,
                rng.random_range(0.0..10.0),
                rng.random_range(-10.0..10.0),
            );
        }
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Splash>()
        .register_type::<WindFleck>()
        .register_type::<Drift>();

    app.add_systems(Startup, setup_particles);
    app.add_systems(
        Update,
        (animate_splash, animate_wind).in_set(GameSet::Effects),
    );
}
