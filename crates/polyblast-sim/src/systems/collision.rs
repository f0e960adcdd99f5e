//! Collision resolution.
//!
//! Hit tests compare centre distance against the sum of collision radii with
//! a strict `<`. Rules run in a fixed order:
//!   1. bullets vs enemies: both destroyed, the enemy splits into fragments
//!   2. bullets vs fragments: both destroyed
//!   3. enemies vs window edges: bounce
//!   4. enemies, then fragments, vs the player: both destroyed, player respawns
//!
//! Anything destroyed earlier in the pass is skipped by later checks. Spawned
//! fragments and the respawned player are pending until the next sync, so
//! they take no part in this frame's pass.

use polyblast_core::config::{GameConfig, WindowConfig};
use polyblast_core::entity::{EntityId, Tag};
use polyblast_core::types::Vec2;

use crate::entity_manager::EntityManager;
use crate::score::ScoreState;
use crate::world_setup;

pub fn run(entities: &mut EntityManager, config: &GameConfig, player: &mut EntityId, score: &mut ScoreState) {
    let bullets = entities.entities_by_tag(Tag::Bullet).to_vec();
    let enemies = entities.entities_by_tag(Tag::Enemy).to_vec();
    let small_enemies = entities.entities_by_tag(Tag::SmallEnemy).to_vec();

    for &bullet in &bullets {
        for &enemy in &enemies {
            if !collides(entities, bullet, enemy) {
                continue;
            }
            entities.destroy(bullet);
            entities.destroy(enemy);
            let fragments = world_setup::spawn_small_enemies(entities, enemy, config.enemy.lifespan);
            score.enemy_destroyed();
            log::debug!("bullet {bullet} split enemy {enemy} into {} fragments", fragments.len());
            break;
        }
    }

    for &bullet in &bullets {
        for &small in &small_enemies {
            if !collides(entities, bullet, small) {
                continue;
            }
            entities.destroy(bullet);
            entities.destroy(small);
            score.small_enemy_destroyed();
            log::debug!("bullet {bullet} destroyed fragment {small}");
            break;
        }
    }

    for &enemy in &enemies {
        bounce(entities, enemy, &config.window);
    }

    for &other in enemies.iter().chain(&small_enemies) {
        if !collides(entities, *player, other) {
            continue;
        }
        entities.destroy(*player);
        entities.destroy(other);
        score.player_deaths += 1;
        let respawned = world_setup::spawn_player(entities, &config.window, &config.player);
        log::debug!("player {} hit by {other}, respawned as {respawned}", *player);
        *player = respawned;
        // The new player is pending until the next sync.
        break;
    }
}

/// Centre and collision radius of an active entity.
fn hitbox(entities: &EntityManager, id: EntityId) -> Option<(Vec2, f32)> {
    let entity = entities.get(id)?;
    if !entity.is_active() {
        return None;
    }
    let pos = entity.transform()?.pos;
    let radius = entity.collision()?.radius;
    Some((pos, radius))
}

/// True if both entities are active and their collision circles overlap.
/// Touching circles do not collide.
fn collides(entities: &EntityManager, a: EntityId, b: EntityId) -> bool {
    match (hitbox(entities, a), hitbox(entities, b)) {
        (Some((pa, ra)), Some((pb, rb))) => pa.dist(&pb) < ra + rb,
        _ => false,
    }
}

/// Turn an enemy back inside the window when its centre leaves the rectangle
/// inset by its collision radius. Only the first crossed edge, in order
/// bottom, top, left, right, is handled per frame.
fn bounce(entities: &mut EntityManager, enemy: EntityId, window: &WindowConfig) {
    let Some((pos, radius)) = hitbox(entities, enemy) else {
        return;
    };
    let width = window.width as f32;
    let height = window.height as f32;
    let Some(transform) = entities.get_mut(enemy).and_then(|e| e.transform_mut()) else {
        return;
    };

    if pos.y > height - radius {
        transform.velocity.y = -1.0;
    } else if pos.y < radius {
        transform.velocity.y = 1.0;
    } else if pos.x < radius {
        transform.velocity.x = 1.0;
    } else if pos.x > width - radius {
        transform.velocity.x = -1.0;
    }
}
