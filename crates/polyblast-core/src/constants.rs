//! Gameplay constants that are not part of the config file.

use crate::types::Vec2;

/// Points for destroying a spawned enemy.
pub const ENEMY_SCORE_POINTS: u32 = 20;

/// Points for destroying a fragment (double the enemy points).
pub const SMALL_ENEMY_SCORE_POINTS: u32 = 2 * ENEMY_SCORE_POINTS;

/// Speed of fragments flying out of a destroyed enemy (pixels per frame).
pub const SMALL_ENEMY_SPEED: f32 = 5.0;

/// Directions a freshly spawned enemy may travel in.
pub const ENEMY_DIRECTIONS: [Vec2; 4] = [
    Vec2 { x: 1.0, y: 1.0 },
    Vec2 { x: 1.0, y: -1.0 },
    Vec2 { x: -1.0, y: 1.0 },
    Vec2 { x: -1.0, y: -1.0 },
];

/// Degrees every moving entity turns per frame.
pub const SPIN_DEGREES_PER_FRAME: f32 = 1.0;

/// Fixed RNG seed used when none is supplied.
pub const DEFAULT_SEED: u64 = 42;
