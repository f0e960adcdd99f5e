//! Enemy spawning system: one enemy every `spawn_interval` frames.

use rand_chacha::ChaCha8Rng;

use polyblast_core::config::GameConfig;
use polyblast_core::entity::EntityId;

use crate::entity_manager::EntityManager;
use crate::world_setup;

/// Frames elapsed since the last enemy appeared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnemySpawner {
    pub frames_since_spawn: u32,
}

/// Advance the spawn timer and spawn an enemy when it reaches the interval.
/// Returns the new enemy, if any.
pub fn run(
    entities: &mut EntityManager,
    rng: &mut ChaCha8Rng,
    config: &GameConfig,
    spawner: &mut EnemySpawner,
) -> Option<EntityId> {
    spawner.frames_since_spawn += 1;
    if spawner.frames_since_spawn < config.enemy.spawn_interval {
        return None;
    }
    spawner.frames_since_spawn = 0;
    Some(world_setup::spawn_enemy(entities, rng, &config.window, &config.enemy))
}
