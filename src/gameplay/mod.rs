//! Snowball mini-game core: projectiles, collision, reaction, and score.
//!
//! This module has no rendering or window dependencies; the integration
//! tests run it on `MinimalPlugins` alone.

pub mod collision;
pub mod reaction;
pub mod score;
pub mod snowball;

use bevy::prelude::*;

use crate::GameSet;

// === Configuration ===

/// All mini-game tunables in one place.
#[derive(Resource, Debug, Clone, Reflect)]
#[reflect(Resource)]
pub struct MinigameConfig {
    /// Snowball travel speed (units per second).
    pub snowball_speed: f32,
    /// Snowball collision radius (units).
    pub snowball_radius: f32,
    /// Snowballs farther than this from the player are retired (units).
    pub max_throw_distance: f32,
    /// Hand-authored target hurtbox dimensions (width, height, depth).
    /// An approximation of the model, not computed from its meshes.
    pub target_hurtbox: Vec3,
    /// Jump arc duration (seconds).
    pub jump_duration: f32,
    /// Jump arc peak height (units).
    pub jump_height: f32,
    /// Points awarded per confirmed hit.
    pub points_per_hit: u32,
}

impl Default for MinigameConfig {
    fn default() -> Self {
        Self {
            snowball_speed: 30.0,
            snowball_radius: 0.2,
            max_throw_distance: 50.0,
            target_hurtbox: Vec3::new(1.8, 2.5, 1.2),
            jump_duration: 1.0,
            jump_height: 2.0,
            points_per_hit: 5,
        }
    }
}

// === Plugin ===

pub fn plugin(app: &mut App) {
    app.register_type::<MinigameConfig>()
        .register_type::<collision::Hurtbox>()
        .register_type::<collision::ActiveTarget>()
        .register_type::<reaction::Reaction>()
        .register_type::<score::Score>()
        .register_type::<snowball::Snowball>()
        .init_resource::<MinigameConfig>()
        .init_resource::<score::Score>()
        .add_message::<snowball::ThrowSnowball>();

    // The ordering the core relies on, restated here so the plugin is
    // self-sufficient when driven without the root plugin (headless tests).
    app.configure_sets(
        Update,
        (GameSet::Input, GameSet::Projectiles, GameSet::Reactions).chain(),
    );

    app.add_systems(
        Update,
        (snowball::spawn_snowballs, snowball::update_snowballs)
            .chain()
            .in_set(GameSet::Projectiles),
    );

    app.add_systems(
        Update,
        reaction::animate_jumps.in_set(GameSet::Reactions),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn config_defaults_match_tuning() {
        let config = MinigameConfig::default();
        assert_eq!(config.snowball_radius, 0.2);
        assert_eq!(config.max_throw_distance, 50.0);
        assert_eq!(config.target_hurtbox, Vec3::new(1.8, 2.5, 1.2));
        assert_eq!(config.points_per_hit, 5);
    }
}
