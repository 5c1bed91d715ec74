//! Snowglobe: an interactive winter diorama with a snowball mini-game.
//!
//! The diorama itself (terrain, lights, characters, particles) is plain scene
//! content; the mini-game core lives in [`gameplay`] and is deliberately
//! engine-light so it can be driven headless in tests.

pub mod effects;
pub mod gameplay;
pub mod hud;
pub mod player;
pub mod scene;

#[cfg(feature = "dev")]
mod dev_tools;
#[cfg(test)]
pub mod testing;

use bevy::prelude::*;

/// Update-schedule ordering for one frame.
///
/// Within `Projectiles` a single system performs the whole snowball pass
/// (advance, collide, score/react, retire), so the per-frame sequence the
/// mini-game relies on is: input, snowball pass, jump arcs, cosmetics, UI.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameSet {
    /// Keyboard/mouse handling and throw requests.
    Input,
    /// Snowball spawning, flight, collision, scoring, retirement.
    Projectiles,
    /// Jump-arc advancement for hit targets.
    Reactions,
    /// Ambient animation: patrols, limb sway, particles.
    Effects,
    /// HUD updates.
    Ui,
}

/// Root plugin: configures set ordering and installs all sub-plugins.
pub fn plugin(app: &mut App) {
    app.configure_sets(
        Update,
        (
            GameSet::Input,
            GameSet::Projectiles,
            GameSet::Reactions,
            GameSet::Effects,
            GameSet::Ui,
        )
            .chain(),
    );

    app.add_plugins((
        gameplay::plugin,
        scene::plugin,
        effects::plugin,
        player::plugin,
        hud::plugin,
    ));

    #[cfg(feature = "dev")]
    app.add_plugins(dev_tools::plugin);
}
