//! Target reaction: a single up-down jump arc when hit.

use std::f32::consts::PI;

use bevy::prelude::*;

use super::MinigameConfig;

// === Components ===

/// Per-target reaction state. A target jumps once per hit; hits that land
/// while a jump is in progress neither restart nor queue another arc.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub enum Reaction {
    Idle,
    Jumping { elapsed: f32 },
}

impl Reaction {
    /// Begins a jump. Ignored while one is already in progress.
    pub fn start(&mut self) {
        if *self == Self::Idle {
            *self = Self::Jumping { elapsed: 0.0 };
        }
    }

    /// Advances the arc by `dt` and returns the y-offset for this frame.
    /// Transitions back to `Idle` (offset forced to zero) once the arc
    /// completes.
    pub fn advance(&mut self, dt: f32, duration: f32, height: f32) -> f32 {
        match self {
            Self::Idle => 0.0,
            Self::Jumping { elapsed } => {
                *elapsed += dt;
                let progress = *elapsed / duration;
                if progress >= 1.0 {
                    *self = Self::Idle;
                    0.0
                } else {
                    jump_offset(progress, height)
                }
            }
        }
    }
}

/// Jump arc: zero at start and end, `height` at the midpoint.
#[must_use]
pub fn jump_offset(progress: f32, height: f32) -> f32 {
    (progress * PI).sin() * height
}

// === Systems ===

/// Writes the jump arc into each reacting target's root y-translation.
/// Idle targets are skipped; limb transforms are untouched (hierarchical
/// composition is the renderer's job).
pub(super) fn animate_jumps(
    time: Res<Time>,
    config: Res<MinigameConfig>,
    mut targets: Query<(&mut Transform, &mut Reaction)>,
) {
    for (mut transform, mut reaction) in &mut targets {
        if *reaction == Reaction::Idle {
            continue;
        }
        transform.translation.y =
            reaction.advance(time.delta_secs(), config.jump_duration, config.jump_height);
    }
}
