//! Session score: a running point total for confirmed hits.

use bevy::prelude::*;

// === Resources ===

/// The session score. Only ever increases; resets with the process.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Resource)]
pub struct Score(pub u32);

impl Score {
    pub fn add(&mut self, points: u32) {
        self.0 += points;
    }
}
