//! Entity spawn factories.
//!
//! Every factory goes through `EntityManager::add_entity`, so spawned
//! entities become visible to systems at the next sync.

use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use polyblast_core::components::*;
use polyblast_core::config::{BulletConfig, EnemyConfig, GameConfig, PlayerConfig, WindowConfig};
use polyblast_core::constants::{ENEMY_DIRECTIONS, SMALL_ENEMY_SPEED};
use polyblast_core::entity::{EntityId, Tag};
use polyblast_core::types::{Rgba, Vec2};

use crate::entity_manager::EntityManager;

/// Spawn the player at the window centre, at rest, with fresh components.
pub fn spawn_player(entities: &mut EntityManager, window: &WindowConfig, config: &PlayerConfig) -> EntityId {
    let id = entities.add_entity(Tag::Player);
    if let Some(entity) = entities.get_mut(id) {
        entity.set_transform(Transform::new(window.center(), Vec2::ZERO, 0.0));
        entity.set_shape(Shape {
            radius: config.shape_radius as f32,
            vertex_count: config.vertices,
            fill: config.fill,
            outline: config.outline,
            outline_thickness: config.outline_thickness as f32,
        });
        entity.set_collision(Collision {
            radius: config.collision_radius as f32,
        });
        entity.set_input(Input::default());
    }
    log::debug!("spawned player {id}");
    id
}

/// Spawn an enemy fully inside the window with a random shape and colour,
/// heading along one of the fixed diagonals.
pub fn spawn_enemy(
    entities: &mut EntityManager,
    rng: &mut ChaCha8Rng,
    window: &WindowConfig,
    config: &EnemyConfig,
) -> EntityId {
    let radius = config.shape_radius;
    let x = random_inset(rng, window.width, radius);
    let y = random_inset(rng, window.height, radius);
    let vertex_count = rng.gen_range(config.min_vertices..=config.max_vertices.max(config.min_vertices));
    let fill = Rgba::rgb(rng.gen(), rng.gen(), rng.gen());
    let velocity = *ENEMY_DIRECTIONS.choose(rng).unwrap_or(&ENEMY_DIRECTIONS[0]);

    let id = entities.add_entity(Tag::Enemy);
    if let Some(entity) = entities.get_mut(id) {
        entity.set_transform(Transform::new(Vec2::new(x as f32, y as f32), velocity, 0.0));
        entity.set_shape(Shape {
            radius: radius as f32,
            vertex_count,
            fill,
            outline: config.outline,
            outline_thickness: config.outline_thickness as f32,
        });
        entity.set_collision(Collision {
            radius: config.collision_radius as f32,
        });
    }
    log::debug!("spawned enemy {id} at ({x}, {y}) with {vertex_count} vertices");
    id
}

/// Uniform integer coordinate in `[inset, extent - inset]`. Falls back to
/// the middle when the window is narrower than two insets.
fn random_inset(rng: &mut ChaCha8Rng, extent: u32, inset: u32) -> u32 {
    let high = extent.saturating_sub(inset);
    if high < inset {
        extent / 2
    } else {
        rng.gen_range(inset..=high)
    }
}

/// Split a destroyed enemy into one fragment per vertex, fanned out at equal
/// angles around its last position.
///
/// Fragments get half the parent's shape radius, its colours, vertex count
/// and collision radius, and a lifespan of `lifespan` frames. Returns the new
/// ids (empty if the parent lacks a transform or shape).
pub fn spawn_small_enemies(entities: &mut EntityManager, parent: EntityId, lifespan: u32) -> Vec<EntityId> {
    let Some(parent) = entities.get(parent) else {
        return Vec::new();
    };
    let (Some(transform), Some(shape)) = (parent.transform().copied(), parent.shape().copied()) else {
        return Vec::new();
    };
    let collision = parent.collision().copied();

    let count = shape.vertex_count;
    let step = 360.0 / count as f32;
    let mut spawned = Vec::with_capacity(count as usize);

    for i in 0..count {
        let angle = i as f32 * step;
        let direction = glam::Vec2::from_angle(angle.to_radians());
        let velocity = Vec2::from(direction * SMALL_ENEMY_SPEED);

        let id = entities.add_entity(Tag::SmallEnemy);
        if let Some(entity) = entities.get_mut(id) {
            entity.set_transform(Transform::new(transform.pos, velocity, angle));
            entity.set_shape(Shape {
                radius: shape.radius / 2.0,
                ..shape
            });
            if let Some(collision) = collision {
                entity.set_collision(collision);
            }
            entity.set_lifespan(Lifespan::new(lifespan));
        }
        spawned.push(id);
    }
    spawned
}

/// Spawn a bullet at `origin` travelling toward `target` at the configured
/// speed. `origin == target` yields a NaN velocity.
pub fn spawn_bullet(entities: &mut EntityManager, config: &BulletConfig, origin: Vec2, target: Vec2) -> EntityId {
    let velocity = origin.normalize_to_target(&target) * config.speed;

    let id = entities.add_entity(Tag::Bullet);
    if let Some(entity) = entities.get_mut(id) {
        entity.set_transform(Transform::new(origin, velocity, 0.0));
        entity.set_shape(Shape {
            radius: config.shape_radius as f32,
            vertex_count: config.vertices,
            fill: config.fill,
            outline: config.outline,
            outline_thickness: config.outline_thickness as f32,
        });
        entity.set_collision(Collision {
            radius: config.collision_radius as f32,
        });
        entity.set_lifespan(Lifespan::new(config.lifespan));
    }
    log::debug!("spawned bullet {id} toward ({}, {})", target.x, target.y);
    id
}

/// Set up the initial world: just the player. Enemies arrive via the spawner.
pub fn setup_world(entities: &mut EntityManager, config: &GameConfig) -> EntityId {
    spawn_player(entities, &config.window, &config.player)
}
