//! Static diorama content: sky, terrain, water, mountains, lights, and the
//! shared snowball render assets.

pub mod primates;

use bevy::prelude::*;

use crate::gameplay::MinigameConfig;
use crate::gameplay::snowball::SnowballAssets;

// === Constants ===

/// Daytime sky color, used until/unless an HDR backdrop is wired in.
const SKY_COLOR: Color = Color::srgb(0.53, 0.81, 0.92);

const GROUND_SIZE: Vec2 = Vec2::new(20.0, 20.0);
const GROUND_COLOR: Color = Color::srgb(0.78, 0.85, 0.78);

const WATER_SIZE: Vec2 = Vec2::new(5.0, 10.0);
/// Slightly above the ground plane to avoid z-fighting.
const WATER_POSITION: Vec3 = Vec3::new(-5.0, 0.01, 2.5);
const WATER_COLOR: Color = Color::srgb(0.25, 0.5, 0.85);

const ROCK_COLOR: Color = Color::srgb(0.45, 0.45, 0.48);
const SNOW_COLOR: Color = Color::srgb(0.95, 0.96, 0.98);

// === Components ===

/// Marker for the terrain planes.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Terrain;

/// Marker for the mountain cones and their snow caps.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Mountain;

// === Systems ===

fn setup_terrain(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Name::new("Ground"),
        Terrain,
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE.x, GROUND_SIZE.y))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: GROUND_COLOR,
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::default(),
    ));

    commands.spawn((
        Name::new("Water"),
        Terrain,
        Mesh3d(meshes.add(Plane3d::default().mesh().size(WATER_SIZE.x, WATER_SIZE.y))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: WATER_COLOR,
            perceptual_roughness: 0.2,
            reflectance: 0.6,
            ..default()
        })),
        Transform::from_translation(WATER_POSITION),
    ));
}

fn setup_mountains(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let rock = materials.add(StandardMaterial {
        base_color: ROCK_COLOR,
        perceptual_roughness: 1.0,
        ..default()
    });
    let snow = materials.add(StandardMaterial {
        base_color: SNOW_COLOR,
        perceptual_roughness: 0.9,
        ..default()
    });

    // (radius, height, position) per peak, with an optional snow cap.
    let peaks: [(f32, f32, Vec3, Option<(f32, f32, Vec3)>); 3] = [
        (
            3.0,
            8.0,
            Vec3::new(-5.0, 2.0, -5.0),
            Some((1.5, 4.0, Vec3::new(-5.0, 4.5, -5.0))),
        ),
        (
            2.5,
            6.0,
            Vec3::new(-7.0, 1.5, -5.0),
            Some((0.75, 3.0, Vec3::new(-7.0, 4.0, -5.0))),
        ),
        (
            1.8,
            3.5,
            Vec3::new(-4.0, 1.75, -6.0),
            Some((0.6, 2.0, Vec3::new(-4.0, 3.5, -6.0))),
        ),
    ];

    for (radius, height, position, cap) in peaks {
        commands.spawn((
            Name::new("Mountain"),
            Mountain,
            Mesh3d(meshes.add(
                Cone {
                    radius,
                    height,
                }
                .mesh()
                .resolution(8),
            )),
            MeshMaterial3d(rock.clone()),
            Transform::from_translation(position),
        ));

        if let Some((cap_radius, cap_height, cap_position)) = cap {
            commands.spawn((
                Name::new("Snow Cap"),
                Mountain,
                Mesh3d(meshes.add(
                    Cone {
                        radius: cap_radius,
                        height: cap_height,
                    }
                    .mesh()
                    .resolution(8),
                )),
                MeshMaterial3d(snow.clone()),
                Transform::from_translation(cap_position),
            ));
        }
    }
}

fn setup_lights(mut commands: Commands) {
    // Warm spotlight sweeping down across the diorama.
    commands.spawn((
        Name::new("Spotlight"),
        SpotLight {
            color: Color::srgb(1.0, 1.0, 0.4),
            intensity: 2_000_000.0,
            range: 30.0,
            outer_angle: 30_f32.to_radians(),
            inner_angle: 25_f32.to_radians(),
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(0.0, 8.0, 0.0).looking_at(Vec3::new(10.0, -8.0, -10.0), Vec3::Y),
    ));

    // Cool fill light over the mountains.
    commands.spawn((
        Name::new("Point Light"),
        PointLight {
            color: Color::WHITE,
            intensity: 600_000.0,
            range: 10.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(-5.0, 7.0, -2.0),
    ));

    // Icy accent over the igloo spot. A point light approximates a
    // rect-area panel, which Bevy does not have.
    commands.spawn((
        Name::new("Accent Light"),
        PointLight {
            color: Color::srgb(0.5, 1.0, 1.0),
            intensity: 400_000.0,
            range: 12.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(2.0, 6.0, 5.0),
    ));
}

/// Builds the shared snowball mesh/material pair the projectile spawner uses.
fn setup_snowball_assets(
    mut commands: Commands,
    config: Res<MinigameConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(SnowballAssets {
        mesh: meshes.add(Sphere::new(config.snowball_radius)),
        material: materials.add(StandardMaterial {
            base_color: SNOW_COLOR,
            perceptual_roughness: 0.8,
            ..default()
        }),
    });
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Terrain>().register_type::<Mountain>();

    app.insert_resource(ClearColor(SKY_COLOR));
    app.insert_resource(GlobalAmbientLight {
        color: Color::WHITE,
        brightness: 250.0,
        ..default()
    });

    app.add_systems(
        Startup,
        (
            setup_terrain,
            setup_mountains,
            setup_lights,
            setup_snowball_assets,
        ),
    );

    primates::plugin(app);
}
