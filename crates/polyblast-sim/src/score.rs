//! Running score tracked by the game.

use serde::{Deserialize, Serialize};

use polyblast_core::constants::{ENEMY_SCORE_POINTS, SMALL_ENEMY_SCORE_POINTS};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreState {
    /// Points shown on the overlay.
    pub score: u32,
    pub enemies_destroyed: u32,
    pub small_enemies_destroyed: u32,
    pub bullets_fired: u32,
    pub player_deaths: u32,
}

impl ScoreState {
    pub fn enemy_destroyed(&mut self) {
        self.enemies_destroyed += 1;
        self.score += ENEMY_SCORE_POINTS;
    }

    pub fn small_enemy_destroyed(&mut self) {
        self.small_enemies_destroyed += 1;
        self.score += SMALL_ENEMY_SCORE_POINTS;
    }
}
